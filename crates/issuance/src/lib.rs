// Rust guideline compliant 2026-10-16

//! Issuance orchestrator -- validates a user, prices the card, generates it,
//! persists user and card, notifies the owner (best-effort), and prints it.
//!
//! Entry point: [`IssuanceService::process_request`].
//! Configuration via [`IssuanceConfig::builder`].

use std::fmt;

use domain::{
    Card, CardGenerator, GenerationError, Notifier, PersistError, PriceCalculator, PricingError,
    PrintError, Printer, Repository, User, ValidationError, Validator,
};

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Structural checks on the user.
    Validate,
    /// Fee calculation.
    Price,
    /// Card construction.
    Generate,
    /// User record write.
    PersistUser,
    /// Card record write.
    PersistCard,
    /// Owner notification; never fails the request.
    Notify,
    /// Physical card output.
    Print,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Validate => "validate",
            Self::Price => "price",
            Self::Generate => "generate",
            Self::PersistUser => "persist_user",
            Self::PersistCard => "persist_card",
            Self::Notify => "notify",
            Self::Print => "print",
        })
    }
}

// ---------------------------------------------------------------------------
// IssuanceError
// ---------------------------------------------------------------------------

/// Errors that terminate an issuance request.
///
/// There is no variant for notification failures: those are logged and
/// discarded by [`IssuanceService::process_request`].
#[derive(Debug, thiserror::Error)]
pub enum IssuanceError {
    /// The supplied configuration is invalid.
    #[error("invalid issuance configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// The user failed validation.
    #[error("validation failed: {0}")]
    Validation(ValidationError),
    /// No fee could be computed.
    #[error("price calculation failed: {0}")]
    Pricing(PricingError),
    /// The card could not be built.
    #[error("card generation failed: {0}")]
    Generation(GenerationError),
    /// The user record could not be written.
    #[error("user persistence failed: {0}")]
    PersistUser(PersistError),
    /// The card record could not be written.
    #[error("card persistence failed: {0}")]
    PersistCard(PersistError),
    /// The card could not be printed. Earlier writes are not rolled back.
    #[error("printing failed: {0}")]
    Print(PrintError),
}

impl IssuanceError {
    /// Stage that failed, or `None` for configuration errors.
    #[must_use]
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::InvalidConfig { .. } => None,
            Self::Validation(_) => Some(Stage::Validate),
            Self::Pricing(_) => Some(Stage::Price),
            Self::Generation(_) => Some(Stage::Generate),
            Self::PersistUser(_) => Some(Stage::PersistUser),
            Self::PersistCard(_) => Some(Stage::PersistCard),
            Self::Print(_) => Some(Stage::Print),
        }
    }
}

// ---------------------------------------------------------------------------
// IssuanceConfig + builder
// ---------------------------------------------------------------------------

/// Presentation settings for an [`IssuanceService`].
///
/// Construct via [`IssuanceConfig::builder`].
#[derive(Debug, Clone)]
pub struct IssuanceConfig {
    /// Library name used in the notification subject.
    pub library_name: String,
    /// Currency symbol prefixed to fees in the notification body.
    pub currency: String,
}

/// Builder for [`IssuanceConfig`].
///
/// Obtain via [`IssuanceConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct IssuanceConfigBuilder {
    library_name: String,
    currency: String,
}

impl IssuanceConfig {
    /// Create a builder. `library_name` is the only required parameter.
    ///
    /// Default values: `currency = "S/"`.
    #[must_use]
    pub fn builder(library_name: impl Into<String>) -> IssuanceConfigBuilder {
        IssuanceConfigBuilder {
            library_name: library_name.into(),
            currency: "S/".to_owned(),
        }
    }

    /// Notification subject, e.g. `"Your UNSCH Library library card is ready"`.
    #[must_use]
    pub fn subject(&self) -> String {
        format!("Your {} library card is ready", self.library_name)
    }

    /// Notification body for `card`, issued to `user`.
    #[must_use]
    pub fn body(&self, user: &User, card: &Card) -> String {
        format!(
            "Hello {}, your card {} has been issued. Fee: {} {:.2}. Expires: {}",
            user.given_name,
            card.number,
            self.currency,
            card.fee,
            user.expires_at.format("%Y-%m-%d"),
        )
    }
}

impl IssuanceConfigBuilder {
    /// Override the currency symbol.
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IssuanceError::InvalidConfig`] when the library name or the
    /// currency is blank.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<IssuanceConfig, IssuanceError> {
        if self.library_name.trim().is_empty() {
            return Err(IssuanceError::InvalidConfig {
                reason: "library_name must not be blank".to_owned(),
            });
        }
        if self.currency.trim().is_empty() {
            return Err(IssuanceError::InvalidConfig {
                reason: "currency must not be blank".to_owned(),
            });
        }
        Ok(IssuanceConfig {
            library_name: self.library_name,
            currency: self.currency,
        })
    }
}

// ---------------------------------------------------------------------------
// IssuanceService
// ---------------------------------------------------------------------------

/// Runs one issuance request through the six collaborators in fixed order.
///
/// Generic over every port for zero-cost static dispatch. Owns its
/// collaborators for the lifetime of the service and keeps no per-request
/// state. Variants are chosen by whoever builds the service, never here.
#[derive(Debug)]
pub struct IssuanceService<V, P, G, R, N, Pr> {
    config: IssuanceConfig,
    validator: V,
    pricing: P,
    generator: G,
    repository: R,
    notifier: N,
    printer: Pr,
}

impl<V, P, G, R, N, Pr> IssuanceService<V, P, G, R, N, Pr>
where
    V: Validator,
    P: PriceCalculator,
    G: CardGenerator,
    R: Repository,
    N: Notifier,
    Pr: Printer,
{
    /// Wire a service from its configuration and collaborators.
    #[must_use]
    pub fn new(
        config: IssuanceConfig,
        validator: V,
        pricing: P,
        generator: G,
        repository: R,
        notifier: N,
        printer: Pr,
    ) -> Self {
        Self { config, validator, pricing, generator, repository, notifier, printer }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &IssuanceConfig {
        &self.config
    }

    /// The repository this service writes to.
    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Issue a card for `user`.
    ///
    /// Stages run strictly in order: validate, price, generate, persist user,
    /// persist card, notify, print. The first failing stage ends the request;
    /// nothing already done is undone. A notification failure is logged at
    /// `warn` and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`IssuanceError`] variant of the failing stage; use
    /// [`IssuanceError::stage`] to identify it.
    pub fn process_request(&self, user: &User) -> Result<Card, IssuanceError> {
        let span = tracing::info_span!(
            "issuance",
            request_id = %uuid::Uuid::new_v4(),
            user_id = %user.id,
        );
        let _entered = span.enter();

        self.run_stages(user).inspect_err(|e| {
            tracing::warn!(stage = ?e.stage(), error = %e, "issuance.failed");
        })
    }

    fn run_stages(&self, user: &User) -> Result<Card, IssuanceError> {
        self.validator.validate(user).map_err(IssuanceError::Validation)?;
        stage_completed(Stage::Validate);

        let fee = self.pricing.calculate(user).map_err(IssuanceError::Pricing)?;
        stage_completed(Stage::Price);

        let card = self.generator.generate(user, fee).map_err(IssuanceError::Generation)?;
        stage_completed(Stage::Generate);

        self.repository.save_user(user).map_err(IssuanceError::PersistUser)?;
        stage_completed(Stage::PersistUser);
        self.repository.save_card(&card).map_err(IssuanceError::PersistCard)?;
        stage_completed(Stage::PersistCard);

        // Best-effort: a failed notification never changes the outcome.
        let subject = self.config.subject();
        let body = self.config.body(user, &card);
        match self.notifier.send(&user.email, &subject, &body) {
            Ok(()) => stage_completed(Stage::Notify),
            Err(e) => tracing::warn!(error = %e, "issuance.notify.failed"),
        }

        self.printer.print(&card).map_err(IssuanceError::Print)?;
        stage_completed(Stage::Print);

        tracing::info!(card_number = %card.number, fee = card.fee, "issuance.completed");
        Ok(card)
    }
}

fn stage_completed(stage: Stage) {
    tracing::debug!(%stage, "issuance.stage.completed");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
