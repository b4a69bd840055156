// Rust guideline compliant 2026-10-16

//! Concrete `domain::PriceStrategy` entries.

use std::fmt;

use domain::{Category, Clock, PriceStrategy, PricingError, User};

// ---------------------------------------------------------------------------
// FlatPriceStrategy
// ---------------------------------------------------------------------------

/// One category, one fixed price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatPriceStrategy {
    category: Category,
    price: f64,
}

impl FlatPriceStrategy {
    /// Price every `category` user at `price`.
    #[must_use]
    pub fn new(category: Category, price: f64) -> Self {
        Self { category, price }
    }
}

impl PriceStrategy for FlatPriceStrategy {
    fn supports(&self, category: Category) -> bool {
        self.category == category
    }

    fn calculate(&self, _user: &User) -> Result<f64, PricingError> {
        Ok(self.price)
    }
}

// ---------------------------------------------------------------------------
// HappyHourStrategy
// ---------------------------------------------------------------------------

/// Half-open range of hours `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    /// First hour inside the window (0-23).
    pub start: u32,
    /// First hour after the window; not inclusive.
    pub end: u32,
}

impl HourWindow {
    /// `true` if `hour` falls in `[start, end)`.
    #[must_use]
    pub fn contains(self, hour: u32) -> bool {
        (self.start..self.end).contains(&hour)
    }
}

/// Undergraduate fee with a discount during a daily window.
///
/// The current hour comes from the injected [`Clock`], never from the
/// ambient system time. The discounted fee is clamped at zero.
#[derive(Debug, Clone)]
pub struct HappyHourStrategy<C> {
    clock: C,
    window: HourWindow,
    base: f64,
    discount: f64,
}

impl<C: Clock> HappyHourStrategy<C> {
    /// `base` outside `window`, `base - discount` (never below zero) inside it.
    #[must_use]
    pub fn new(clock: C, window: HourWindow, base: f64, discount: f64) -> Self {
        Self { clock, window, base, discount }
    }
}

impl<C: Clock + fmt::Debug> PriceStrategy for HappyHourStrategy<C> {
    fn supports(&self, category: Category) -> bool {
        category == Category::Undergraduate
    }

    fn calculate(&self, _user: &User) -> Result<f64, PricingError> {
        let hour = self.clock.current_hour();
        if !self.window.contains(hour) {
            return Ok(self.base);
        }
        let fee = (self.base - self.discount).max(0.0);
        tracing::debug!(hour, fee, "pricing.happy_hour.applied");
        Ok(fee)
    }
}

// ---------------------------------------------------------------------------
// RuleStrategy
// ---------------------------------------------------------------------------

/// Arbitrary predicate paired with an arbitrary fee function.
///
/// `label` only appears in `Debug` output and logs.
pub struct RuleStrategy<P, F> {
    label: &'static str,
    predicate: P,
    fee: F,
}

impl<P, F> RuleStrategy<P, F>
where
    P: Fn(Category) -> bool,
    F: Fn(&User) -> f64,
{
    /// Build a rule from a category predicate and a fee function.
    #[must_use]
    pub fn new(label: &'static str, predicate: P, fee: F) -> Self {
        Self { label, predicate, fee }
    }
}

impl<P, F> fmt::Debug for RuleStrategy<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleStrategy").field("label", &self.label).finish_non_exhaustive()
    }
}

impl<P, F> PriceStrategy for RuleStrategy<P, F>
where
    P: Fn(Category) -> bool,
    F: Fn(&User) -> f64,
{
    fn supports(&self, category: Category) -> bool {
        (self.predicate)(category)
    }

    fn calculate(&self, user: &User) -> Result<f64, PricingError> {
        Ok((self.fee)(user))
    }
}
