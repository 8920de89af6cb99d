pub mod artifacts;
pub mod catalog;
pub mod context;
pub mod runner;
pub mod scenarios;
pub mod suite_model;

pub use catalog::{Scenario, catalog, select};
pub use context::ScenarioContext;
pub use runner::{RunOptions, SuiteRunner};
pub use suite_model::{CheckResult, Fixture, Outcome, Requirement, ScenarioResult};
