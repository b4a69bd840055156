// Rust guideline compliant 2026-10-16

//! Library card issuance entry point.
//!
//! Wires the pipeline to its front-desk adapters (PDF generator, SQL script
//! repository, email notifier, thermal printer) and issues one card for a
//! demo undergraduate. Every adapter writes to stdout; logs go to stderr.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin card_issuance
//!
//! # Per-stage debug output
//! RUST_LOG=debug cargo run --bin card_issuance
//! ```

use anyhow::Context as _;
use card_issuance::adapters::email_notifier::EmailNotifier;
use card_issuance::adapters::pdf_card_generator::PdfCardGenerator;
use card_issuance::adapters::sql_script_repository::SqlScriptRepository;
use card_issuance::adapters::system_clock::SystemClock;
use card_issuance::adapters::thermal_printer::ThermalPrinter;
use card_issuance::settings::Settings;
use card_issuance::telemetry;
use chrono::{Months, Utc};
use domain::{Category, User};
use issuance::{IssuanceConfig, IssuanceService};
use pricing::{CompositePriceCalculator, FlatPriceStrategy, HappyHourStrategy};
use std::io;
use validation::UserValidator;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    telemetry::init(&settings.log_level).context("failed to initialise telemetry")?;

    let config = IssuanceConfig::builder(settings.library_name.as_str())
        .currency(settings.currency.as_str())
        .build()
        .context("failed to build issuance config")?;

    // Flat entries cover every category, so the happy-hour entry registered
    // last never matches. Move it to the front to enable the discount.
    let pricing = CompositePriceCalculator::new()
        .with(FlatPriceStrategy::new(Category::Undergraduate, 10.0))
        .with(FlatPriceStrategy::new(Category::Graduate, 12.0))
        .with(FlatPriceStrategy::new(Category::Faculty, 8.0))
        .with(FlatPriceStrategy::new(Category::Staff, 7.0))
        .with(FlatPriceStrategy::new(Category::External, 20.0))
        .with(HappyHourStrategy::new(SystemClock, settings.happy_hour, 10.0, 2.0));

    let service = IssuanceService::new(
        config,
        UserValidator::new(),
        pricing,
        PdfCardGenerator::new(SystemClock),
        SqlScriptRepository::new(settings.pg_dsn.as_str(), io::stdout()),
        EmailNotifier::new(settings.smtp.clone(), io::stdout()),
        ThermalPrinter::new(settings.printer_name.as_str(), settings.currency.as_str(), io::stdout()),
    );

    let user = User {
        id: "U-001".to_owned(),
        given_name: "Ana".to_owned(),
        family_name: "Quispe".to_owned(),
        email: "ana.quispe@unsch.edu.pe".to_owned(),
        category: Category::Undergraduate.code().to_owned(),
        expires_at: Utc::now()
            .checked_add_months(Months::new(12))
            .context("card expiry date out of range")?,
    };

    let card = service.process_request(&user).context("issuance request failed")?;
    println!(
        "OK: card {} issued ({} {:.2}) for {}",
        card.number,
        service.config().currency,
        card.fee,
        card.owner.full_name(),
    );
    Ok(())
}
