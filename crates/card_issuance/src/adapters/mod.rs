// Rust guideline compliant 2026-10-16

//! Adapters (secondary ports) for the card issuance binaries.
//!
//! Each sub-module implements one hexagonal port trait defined in the
//! `domain` crate. Adapters that produce output write to an injected
//! `std::io::Write` sink; the binaries pass stdout, tests pass buffers.

pub mod card_number;
pub mod dry_run_printer;
pub mod email_notifier;
pub mod in_memory_repository;
pub mod json_card_generator;
pub mod null_notifier;
pub mod pdf_card_generator;
pub mod sql_script_repository;
pub mod system_clock;
pub mod thermal_printer;
