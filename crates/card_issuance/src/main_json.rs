// Rust guideline compliant 2026-10-16

//! Library card issuance, self-service kiosk variant.
//!
//! Same pipeline, different adapters: JSON card documents, an in-memory
//! repository, no email and a dry-run printer. The happy-hour discount is
//! registered ahead of the flat tariff so undergraduates get it inside the
//! configured window. A small roster is processed; rejected requests are
//! logged and skipped.
//!
//! # Usage
//!
//! ```text
//! ISSUANCE_HAPPY_HOUR=0-24 cargo run --bin card_issuance_json
//! ```

use anyhow::Context as _;
use card_issuance::adapters::dry_run_printer::DryRunPrinter;
use card_issuance::adapters::in_memory_repository::InMemoryRepository;
use card_issuance::adapters::json_card_generator::JsonCardGenerator;
use card_issuance::adapters::null_notifier::NullNotifier;
use card_issuance::adapters::system_clock::SystemClock;
use card_issuance::settings::Settings;
use card_issuance::telemetry;
use chrono::{DateTime, Months, Utc};
use domain::{Category, User};
use issuance::{IssuanceConfig, IssuanceService};
use pricing::{CompositePriceCalculator, FlatPriceStrategy, HappyHourStrategy};
use std::io;
use validation::UserValidator;

fn make_user(id: &str, given: &str, family: &str, category: &str, expires_at: DateTime<Utc>) -> User {
    User {
        id: id.to_owned(),
        given_name: given.to_owned(),
        family_name: family.to_owned(),
        email: format!("{}.{}@unsch.edu.pe", given.to_lowercase(), family.to_lowercase()),
        category: category.to_owned(),
        expires_at,
    }
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    telemetry::init(&settings.log_level).context("failed to initialise telemetry")?;

    let config = IssuanceConfig::builder(settings.library_name.as_str())
        .currency(settings.currency.as_str())
        .build()
        .context("failed to build issuance config")?;

    let pricing = CompositePriceCalculator::new()
        .with(HappyHourStrategy::new(SystemClock, settings.happy_hour, 10.0, 2.0))
        .with(FlatPriceStrategy::new(Category::Undergraduate, 10.0))
        .with(FlatPriceStrategy::new(Category::Graduate, 12.0))
        .with(FlatPriceStrategy::new(Category::Faculty, 8.0))
        .with(FlatPriceStrategy::new(Category::Staff, 7.0))
        .with(FlatPriceStrategy::new(Category::External, 20.0));

    let service = IssuanceService::new(
        config,
        UserValidator::new(),
        pricing,
        JsonCardGenerator::new(SystemClock),
        InMemoryRepository::new(),
        NullNotifier::new(),
        DryRunPrinter::new(io::stdout()),
    );

    let expires_at =
        Utc::now().checked_add_months(Months::new(12)).context("card expiry date out of range")?;
    let roster = [
        make_user("U-001", "Ana", "Quispe", "undergraduate", expires_at),
        make_user("U-002", "Luis", "Huaman", "graduate", expires_at),
        make_user("U-003", "Carmen", "Flores", "invalid-category", expires_at),
        make_user("U-004", "Jorge", "Cardenas", "external", expires_at),
    ];

    for user in &roster {
        match service.process_request(user) {
            Ok(card) => println!("{}", String::from_utf8_lossy(&card.content)),
            // Already logged by the service; move on to the next request.
            Err(e) => println!("SKIPPED: {} ({e})", user.id),
        }
    }

    let repository = service.repository();
    println!(
        "STORED: {} users, {} cards",
        repository.users().len(),
        repository.cards().len()
    );
    Ok(())
}
