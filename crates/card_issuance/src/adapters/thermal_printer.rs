// Rust guideline compliant 2026-10-16

//! Thermal printer adapter for the `Printer` port.

use std::cell::RefCell;
use std::io::Write;

use domain::{Card, PrintError, Printer};

/// `Printer` adapter that emits a print job line into a sink.
///
/// A sink failure is reported as a device failure naming the printer.
#[derive(Debug)]
pub struct ThermalPrinter<W> {
    name: String,
    currency: String,
    out: RefCell<W>,
}

impl<W: Write> ThermalPrinter<W> {
    /// Create a printer called `name` quoting fees in `currency`.
    #[must_use]
    pub fn new(name: impl Into<String>, currency: impl Into<String>, out: W) -> Self {
        Self { name: name.into(), currency: currency.into(), out: RefCell::new(out) }
    }

    /// Consume the printer and return its sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Printer for ThermalPrinter<W> {
    /// # Errors
    ///
    /// Returns [`PrintError::DeviceFailed`] when the sink rejects the job.
    fn print(&self, card: &Card) -> Result<(), PrintError> {
        let job = format!(
            "[PRINT] printer={}\nPrinting card {} for {} ({} {:.2})\n",
            self.name,
            card.number,
            card.owner.full_name(),
            self.currency,
            card.fee,
        );
        let mut out = self.out.borrow_mut();
        out.write_all(job.as_bytes()).and_then(|()| out.flush()).map_err(|e| {
            tracing::error!(printer = %self.name, error = %e, "thermal_printer.failed");
            PrintError::DeviceFailed { printer: self.name.clone(), reason: e.to_string() }
        })?;
        tracing::info!(printer = %self.name, card = %card.number, "thermal_printer.printed");
        Ok(())
    }
}
