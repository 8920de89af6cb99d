use serde::{Deserialize, Serialize};

use crate::capability::DeviceProfile;
use crate::suite::suite_model::{Outcome, ScenarioResult};

// ============================================================================
// Suite report: aggregates every ScenarioResult of one run
// ============================================================================

/// Device the suite ran against, as detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSummary {
    pub ip: String,
    pub model: String,
    pub series: u8,
    pub firmware_version: String,
    pub timeout_multiplier: f64,
}

impl DeviceSummary {
    pub fn new(ip: &str, profile: &DeviceProfile) -> Self {
        Self {
            ip: ip.to_string(),
            model: profile.model.to_string(),
            series: profile.series.number(),
            firmware_version: profile.firmware_version.to_string(),
            timeout_multiplier: profile.timeout_multiplier(),
        }
    }
}

/// Aggregated report for a suite run.
///
/// Built from a `Vec<ScenarioResult>` via `from_results()`, or via
/// `aborted()` when device detection failed and nothing ran. Consumed by
/// the console, HTML, and JUnit reporters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceSummary>,

    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,

    /// Total execution duration in milliseconds (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,

    /// Why the run stopped before executing any scenario.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aborted: Option<String>,

    pub results: Vec<ScenarioResult>,
}

impl SuiteReport {
    /// Build a suite report, computing the outcome counts.
    pub fn from_results(suite_name: &str, results: Vec<ScenarioResult>) -> Self {
        let count = |o: Outcome| results.iter().filter(|r| r.outcome == o).count();
        Self {
            suite_name: suite_name.to_string(),
            device: None,
            total: results.len(),
            passed: count(Outcome::Passed),
            failed: count(Outcome::Failed),
            skipped: count(Outcome::Skipped),
            duration_ms: None,
            aborted: None,
            results,
        }
    }

    /// A run that stopped before any scenario executed.
    pub fn aborted(suite_name: &str, reason: impl Into<String>) -> Self {
        let mut report = Self::from_results(suite_name, Vec::new());
        report.aborted = Some(reason.into());
        report
    }

    pub fn with_duration(mut self, duration_ms: u128) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_device(mut self, device: DeviceSummary) -> Self {
        self.device = Some(device);
        self
    }

    /// No failures and no abort. Skips do not count against the run.
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.aborted.is_none()
    }
}
