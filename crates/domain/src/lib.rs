// Rust guideline compliant 2026-10-16

//! Shared domain types for the library card issuance pipeline.
//!
//! Defines `User`, `Category`, `Card`, the per-stage error enums, and the
//! hexagonal port traits: `Validator`, `PriceStrategy`, `PriceCalculator`,
//! `CardGenerator`, `Repository`, `Notifier`, `Printer`, and `Clock`.
//! All pipeline components depend on this crate; it imports none of them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Timelike as _, Utc};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Closed set of user categories recognised by pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Undergraduate student.
    Undergraduate,
    /// Graduate student (master or doctorate).
    Graduate,
    /// Teaching staff.
    Faculty,
    /// Administrative staff.
    Staff,
    /// Anyone outside the university.
    External,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Undergraduate,
        Self::Graduate,
        Self::Faculty,
        Self::Staff,
        Self::External,
    ];

    /// Canonical lowercase code, as accepted by [`FromStr`].
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::Graduate => "graduate",
            Self::Faculty => "faculty",
            Self::Staff => "staff",
            Self::External => "external",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A category code outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {code}")]
pub struct UnknownCategory {
    /// The rejected code, verbatim.
    pub code: String,
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Exact match on the canonical code; no case folding, no trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| UnknownCategory { code: s.to_owned() })
    }
}

// ---------------------------------------------------------------------------
// User + Card
// ---------------------------------------------------------------------------

/// A library patron as submitted by the intake form.
///
/// Never mutated by any pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unique identifier (e.g. `"U-001"`).
    pub id: String,
    /// Given name(s).
    pub given_name: String,
    /// Family name(s).
    pub family_name: String,
    /// Contact address used for the issuance notification.
    pub email: String,
    /// Category code as submitted. Only a [`Category`] code passes validation.
    pub category: String,
    /// Instant after which the issued card is no longer valid.
    pub expires_at: DateTime<Utc>,
}

impl User {
    /// Parse the submitted category code into the closed set.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCategory`] when the code is not one of [`Category::ALL`].
    pub fn parsed_category(&self) -> Result<Category, UnknownCategory> {
        self.category.parse()
    }

    /// `"<given> <family>"`, as printed on the card.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

/// An issued library card.
///
/// Built by a [`CardGenerator`] only after validation and pricing succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// `"C-<user id>-<unix seconds>"`.
    pub number: String,
    /// By-value copy of the validated user.
    pub owner: User,
    /// Fee returned by the pricing stage; non-negative and finite.
    pub fee: f64,
    /// Issuance instant.
    pub issued_at: DateTime<Utc>,
    /// Rendered document bytes (PDF stub, JSON, ...). Format is adapter-defined.
    pub content: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from the Validator port. Rules are checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Given name or family name is blank after trimming.
    #[error("given name and family name are required")]
    MissingName,
    /// Email lacks an `@` or is too short to be plausible.
    #[error("invalid email: {email:?}")]
    InvalidEmail {
        /// The rejected address.
        email: String,
    },
    /// Category code is outside the closed set.
    #[error("unsupported user category: {category}")]
    UnsupportedCategory {
        /// The rejected category code.
        category: String,
    },
}

/// Errors from the PriceCalculator and PriceStrategy ports.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// No registered strategy supports the category.
    #[error("no price strategy for category: {category}")]
    NoStrategy {
        /// The unmatched category code.
        category: String,
    },
    /// A strategy returned a negative or non-finite fee.
    #[error("strategy produced an invalid fee: {fee}")]
    InvalidFee {
        /// The rejected value.
        fee: f64,
    },
}

/// Errors from the CardGenerator port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The card payload could not be rendered.
    #[error("card encoding failed: {reason}")]
    Encoding {
        /// Human-readable description.
        reason: String,
    },
}

/// Errors from the Repository port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistError {
    /// Backend rejected or could not accept the write.
    #[error("repository unavailable: {reason}")]
    Unavailable {
        /// Human-readable description.
        reason: String,
    },
    /// Backend has reached its maximum number of records.
    #[error("repository full (capacity: {capacity})")]
    CapacityExceeded {
        /// Configured record limit.
        capacity: usize,
    },
}

/// Errors from the Notifier port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotifyError {
    /// Message could not be delivered.
    #[error("delivery failed: {reason}")]
    DeliveryFailed {
        /// Human-readable description.
        reason: String,
    },
}

/// Errors from the Printer port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrintError {
    /// Printer rejected the job.
    #[error("printer {printer} failed: {reason}")]
    DeviceFailed {
        /// Configured printer name.
        printer: String,
        /// Human-readable description.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Hexagonal port: structural checks on an incoming user.
pub trait Validator {
    /// Check `user`; pure function of its input.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`ValidationError`] rule.
    fn validate(&self, user: &User) -> Result<(), ValidationError>;
}

/// Hexagonal port: one entry of an ordered pricing table.
///
/// `Debug` is a supertrait so composite calculators holding
/// `Box<dyn PriceStrategy>` can still derive it.
pub trait PriceStrategy: fmt::Debug {
    /// `true` if this entry prices `category`.
    fn supports(&self, category: Category) -> bool;

    /// Fee for `user`. Only called after [`supports`](Self::supports) returned `true`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError`] if the fee cannot be computed.
    fn calculate(&self, user: &User) -> Result<f64, PricingError>;
}

/// Hexagonal port: fee for a validated user.
pub trait PriceCalculator {
    /// Compute the card fee for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::NoStrategy`] when nothing prices the category.
    fn calculate(&self, user: &User) -> Result<f64, PricingError>;
}

/// Hexagonal port: builds a [`Card`] from a validated user and its fee.
pub trait CardGenerator {
    /// Build the card. `card.fee` must equal `fee` and `card.owner` must equal `user`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Encoding`] when the payload cannot be rendered.
    fn generate(&self, user: &User, fee: f64) -> Result<Card, GenerationError>;
}

/// Hexagonal port: persistence of users and cards.
///
/// The orchestrator always calls `save_user` before `save_card`. No
/// transaction spanning both calls is implied.
pub trait Repository {
    /// Persist `user`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] when the write fails.
    fn save_user(&self, user: &User) -> Result<(), PersistError>;

    /// Persist `card`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] when the write fails.
    fn save_card(&self, card: &Card) -> Result<(), PersistError>;
}

/// Hexagonal port: best-effort message delivery to the card owner.
pub trait Notifier {
    /// Deliver `body` to `to` under `subject`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::DeliveryFailed`]; callers treat it as non-fatal.
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError>;
}

/// Hexagonal port: physical card output.
pub trait Printer {
    /// Print `card`.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError`] when the job is rejected.
    fn print(&self, card: &Card) -> Result<(), PrintError>;
}

/// Hexagonal port: time source, injected so pricing and generation stay deterministic.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Hour of day (0-23) used by time-conditional pricing.
    ///
    /// Defaults to the UTC hour of [`now`](Self::now); wall-clock adapters
    /// override it with the local hour.
    fn current_hour(&self) -> u32 {
        self.now().hour()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    fn make_user(category: &str) -> User {
        User {
            id: "U-001".to_owned(),
            given_name: "Ana".to_owned(),
            family_name: "Quispe".to_owned(),
            email: "ana.quispe@unsch.edu.pe".to_owned(),
            category: category.to_owned(),
            expires_at: Utc.with_ymd_and_hms(2027, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    // ------------------------------------------------------------------
    // Category
    // ------------------------------------------------------------------

    #[test]
    fn every_category_parses_from_its_code() {
        for category in Category::ALL {
            assert_eq!(category.code().parse::<Category>(), Ok(category));
            assert_eq!(category.to_string(), category.code());
        }
    }

    #[test]
    fn unknown_category_is_rejected_verbatim() {
        let err = "invalid-category".parse::<Category>().unwrap_err();
        assert_eq!(err.code, "invalid-category");
        assert_eq!(err.to_string(), "unknown category: invalid-category");
    }

    #[test]
    fn category_parse_is_case_sensitive() {
        assert!("Faculty".parse::<Category>().is_err());
        assert!(" staff".parse::<Category>().is_err());
    }

    // ------------------------------------------------------------------
    // User + Card
    // ------------------------------------------------------------------

    #[test]
    fn user_parsed_category() {
        assert_eq!(make_user("staff").parsed_category(), Ok(Category::Staff));
        assert!(make_user("pregrado").parsed_category().is_err());
    }

    #[test]
    fn user_full_name() {
        assert_eq!(make_user("staff").full_name(), "Ana Quispe");
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "exact integer-valued literal")]
    fn card_fields() {
        let owner = make_user("undergraduate");
        let issued_at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let card = Card {
            number: "C-U-001-1772357400".to_owned(),
            owner: owner.clone(),
            fee: 10.0_f64,
            issued_at,
            content: b"%PDF".to_vec(),
        };
        assert_eq!(card.owner, owner);
        assert_eq!(card.fee, 10.0_f64);
        assert_eq!(card.issued_at, issued_at);
    }

    // ------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------

    #[test]
    fn error_messages() {
        assert_eq!(
            ValidationError::MissingName.to_string(),
            "given name and family name are required"
        );
        assert_eq!(
            ValidationError::InvalidEmail { email: "a@b".to_owned() }.to_string(),
            "invalid email: \"a@b\""
        );
        assert_eq!(
            PricingError::NoStrategy { category: "external".to_owned() }.to_string(),
            "no price strategy for category: external"
        );
        assert_eq!(
            PersistError::CapacityExceeded { capacity: 3 }.to_string(),
            "repository full (capacity: 3)"
        );
        assert_eq!(
            PrintError::DeviceFailed {
                printer: "P-1".to_owned(),
                reason: "paper jam".to_owned(),
            }
            .to_string(),
            "printer P-1 failed: paper jam"
        );
    }

    // ------------------------------------------------------------------
    // Ports
    // ------------------------------------------------------------------

    #[derive(Debug)]
    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn clock_current_hour_defaults_to_utc_hour() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 3, 1, 17, 45, 0).unwrap());
        assert_eq!(clock.current_hour(), 17);
    }

    /// Verify that every port compiles with a minimal implementation.
    #[test]
    fn port_trait_struct_impl() {
        #[derive(Debug)]
        struct AllPorts;

        impl Validator for AllPorts {
            fn validate(&self, _user: &User) -> Result<(), ValidationError> {
                Ok(())
            }
        }

        impl PriceStrategy for AllPorts {
            fn supports(&self, category: Category) -> bool {
                category == Category::Faculty
            }

            fn calculate(&self, _user: &User) -> Result<f64, PricingError> {
                Ok(8.0)
            }
        }

        impl CardGenerator for AllPorts {
            fn generate(&self, user: &User, fee: f64) -> Result<Card, GenerationError> {
                Ok(Card {
                    number: format!("C-{}-0", user.id),
                    owner: user.clone(),
                    fee,
                    issued_at: DateTime::<Utc>::UNIX_EPOCH,
                    content: vec![],
                })
            }
        }

        impl Repository for AllPorts {
            fn save_user(&self, _user: &User) -> Result<(), PersistError> {
                Ok(())
            }

            fn save_card(&self, _card: &Card) -> Result<(), PersistError> {
                Ok(())
            }
        }

        impl Notifier for AllPorts {
            fn send(&self, _to: &str, _subject: &str, _body: &str) -> Result<(), NotifyError> {
                Ok(())
            }
        }

        impl Printer for AllPorts {
            fn print(&self, _card: &Card) -> Result<(), PrintError> {
                Ok(())
            }
        }

        let ports = AllPorts;
        let user = make_user("faculty");
        ports.validate(&user).unwrap();
        assert!(ports.supports(Category::Faculty));
        assert!(!ports.supports(Category::Staff));
        let fee = PriceStrategy::calculate(&ports, &user).unwrap();
        let card = ports.generate(&user, fee).unwrap();
        assert_eq!(card.number, "C-U-001-0");
        ports.save_user(&user).unwrap();
        ports.save_card(&card).unwrap();
        ports.send(&user.email, "s", "b").unwrap();
        ports.print(&card).unwrap();
    }
}
