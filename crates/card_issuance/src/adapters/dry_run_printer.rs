// Rust guideline compliant 2026-10-16

//! Dry-run adapter for the `Printer` port.

use std::cell::RefCell;
use std::io::Write;

use domain::{Card, PrintError, Printer};

const DEVICE: &str = "dry-run";

/// `Printer` adapter that only announces the card is ready.
#[derive(Debug)]
pub struct DryRunPrinter<W> {
    out: RefCell<W>,
}

impl<W: Write> DryRunPrinter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out: RefCell::new(out) }
    }

    /// Consume the printer and return its sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Printer for DryRunPrinter<W> {
    fn print(&self, card: &Card) -> Result<(), PrintError> {
        writeln!(self.out.borrow_mut(), "[PRINT/DRYRUN] card {} ready", card.number).map_err(
            |e| PrintError::DeviceFailed { printer: DEVICE.to_owned(), reason: e.to_string() },
        )
    }
}
