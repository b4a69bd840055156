// Rust guideline compliant 2026-10-16

//! PDF-stub adapter for the `CardGenerator` port.
//!
//! The payload is a fixed byte string shaped like a PDF file. Nothing is
//! rendered; downstream adapters treat the content as opaque.

use domain::{Card, CardGenerator, Clock, GenerationError, User};

use super::card_number::card_number;

/// Placeholder document attached to every card.
pub const PDF_STUB: &[u8] = b"%PDF-1.7\n... (simulated library card) ...\n%%EOF\n";

/// `CardGenerator` adapter producing [`PDF_STUB`] payloads.
#[derive(Debug, Clone)]
pub struct PdfCardGenerator<C> {
    clock: C,
}

impl<C: Clock> PdfCardGenerator<C> {
    /// Create a generator stamping cards with `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> CardGenerator for PdfCardGenerator<C> {
    /// Infallible; always returns `Ok(card)`.
    fn generate(&self, user: &User, fee: f64) -> Result<Card, GenerationError> {
        let issued_at = self.clock.now();
        let card = Card {
            number: card_number(&user.id, issued_at),
            owner: user.clone(),
            fee,
            issued_at,
            content: PDF_STUB.to_vec(),
        };
        tracing::info!(card_number = %card.number, owner = %user.full_name(), fee, "card_generator.pdf.generated");
        Ok(card)
    }
}
