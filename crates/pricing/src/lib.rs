// Rust guideline compliant 2026-10-16

//! Composite fee calculation for the card issuance pipeline.
//!
//! [`CompositePriceCalculator`] implements the `domain::PriceCalculator` port
//! by scanning an ordered list of `domain::PriceStrategy` entries. The first
//! entry whose `supports` returns `true` prices the user; later matching
//! entries are never consulted. New categories or discounts are added by
//! registering more strategies; the calculator itself never changes.

mod strategies;

pub use strategies::{FlatPriceStrategy, HappyHourStrategy, HourWindow, RuleStrategy};

use domain::{PriceStrategy, PricingError, User};

// ---------------------------------------------------------------------------
// CompositePriceCalculator
// ---------------------------------------------------------------------------

/// First-match-wins pricing table.
///
/// Strategies are boxed so one table can mix flat, clock-driven and closure
/// entries. Registration order is evaluation order.
#[derive(Debug, Default)]
pub struct CompositePriceCalculator {
    strategies: Vec<Box<dyn PriceStrategy>>,
}

impl CompositePriceCalculator {
    /// Create an empty table. Every lookup fails until a strategy is registered.
    #[must_use]
    pub fn new() -> Self {
        Self { strategies: vec![] }
    }

    /// Append `strategy` after every entry registered so far.
    #[must_use]
    pub fn with(mut self, strategy: impl PriceStrategy + 'static) -> Self {
        self.push(strategy);
        self
    }

    /// Append `strategy` after every entry registered so far.
    pub fn push(&mut self, strategy: impl PriceStrategy + 'static) {
        self.strategies.push(Box::new(strategy));
    }

    /// Number of registered strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// `true` when no strategy is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl domain::PriceCalculator for CompositePriceCalculator {
    /// Price `user` with the first strategy that supports its category.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::NoStrategy`] when the category does not parse
    /// or no entry supports it, [`PricingError::InvalidFee`] when the matched
    /// entry yields a negative or non-finite fee, or whatever the matched
    /// entry itself returns.
    fn calculate(&self, user: &User) -> Result<f64, PricingError> {
        let no_strategy = || PricingError::NoStrategy { category: user.category.clone() };

        let category = user
            .parsed_category()
            .map_err(|e| PricingError::NoStrategy { category: e.code })?;
        let (index, strategy) = self
            .strategies
            .iter()
            .enumerate()
            .find(|(_, s)| s.supports(category))
            .ok_or_else(no_strategy)?;

        let fee = strategy.calculate(user)?;
        if !fee.is_finite() || fee < 0.0 {
            tracing::warn!(index, %category, fee, "pricing.strategy.invalid_fee");
            return Err(PricingError::InvalidFee { fee });
        }

        tracing::debug!(index, %category, fee, "pricing.strategy.matched");
        Ok(fee)
    }
}
