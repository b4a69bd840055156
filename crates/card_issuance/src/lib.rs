// Rust guideline compliant 2026-10-16

//! Concrete wiring for the library card issuance pipeline.
//!
//! The `domain`, `validation`, `pricing` and `issuance` crates know nothing
//! about where output goes. This crate supplies the adapters the binaries
//! plug into `issuance::IssuanceService`, together with environment-driven
//! [`settings`] and [`telemetry`] setup.

pub mod adapters;
pub mod settings;
pub mod telemetry;
