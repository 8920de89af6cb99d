//! Capability-aware end-to-end tests for the Kronos time server web console.
//!
//! The crate resolves the model a device reports to a static capability
//! profile, drives the console through page objects over a Playwright
//! bridge, and runs a scenario catalog gated on what that model supports.

pub mod browser;
pub mod capability;
pub mod cli;
pub mod device;
pub mod error;
pub mod pages;
pub mod probe;
pub mod report;
pub mod suite;

pub use error::ConsoleError;
