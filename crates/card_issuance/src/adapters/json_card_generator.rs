// Rust guideline compliant 2026-10-16

//! JSON adapter for the `CardGenerator` port.
//!
//! Interchangeable with the PDF stub: same number, owner, fee and instant,
//! but the payload is a structured document instead of opaque bytes.

use chrono::{DateTime, SecondsFormat, Utc};
use domain::{Card, CardGenerator, Clock, GenerationError, User};
use serde::Serialize;

use super::card_number::card_number;

/// Wire shape of the JSON payload.
#[derive(Debug, Serialize)]
struct CardDocument<'a> {
    number: &'a str,
    owner: &'a User,
    fee: f64,
    /// RFC 3339, second precision.
    issued_at: String,
}

/// `CardGenerator` adapter producing a JSON payload.
#[derive(Debug, Clone)]
pub struct JsonCardGenerator<C> {
    clock: C,
}

impl<C: Clock> JsonCardGenerator<C> {
    /// Create a generator stamping cards with `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

fn encode(number: &str, owner: &User, fee: f64, issued_at: DateTime<Utc>) -> Result<Vec<u8>, GenerationError> {
    let document = CardDocument {
        number,
        owner,
        fee,
        issued_at: issued_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    };
    serde_json::to_vec(&document).map_err(|e| GenerationError::Encoding { reason: e.to_string() })
}

impl<C: Clock> CardGenerator for JsonCardGenerator<C> {
    /// # Errors
    ///
    /// Returns [`GenerationError::Encoding`] if serialization fails.
    fn generate(&self, user: &User, fee: f64) -> Result<Card, GenerationError> {
        let issued_at = self.clock.now();
        let number = card_number(&user.id, issued_at);
        let content = encode(&number, user, fee, issued_at)?;
        tracing::info!(card_number = %number, owner = %user.full_name(), fee, "card_generator.json.generated");
        Ok(Card { number, owner: user.clone(), fee, issued_at, content })
    }
}
