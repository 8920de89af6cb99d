use serde::{Deserialize, Serialize};

use crate::capability::{ConfigSection, DeviceProfile, Series};

// ============================================================================
// Scenario result model
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

/// One assertion made by a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub description: String,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub id: String,
    pub group: String,
    pub title: String,
    pub outcome: Outcome,
    pub checks: Vec<CheckResult>,
    /// Why the scenario did not apply or bailed out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<String>,
    /// Error that aborted the scenario body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_ms: u128,
}

impl ScenarioResult {
    pub fn failed_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Capability a scenario needs from the detected device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Any,
    Series(Series),
    Ptp,
    Section(ConfigSection),
}

impl Requirement {
    /// `Err` carries the skip reason.
    pub fn check(&self, profile: &DeviceProfile) -> Result<(), String> {
        match self {
            Requirement::Any => Ok(()),
            Requirement::Series(series) if profile.series == *series => Ok(()),
            Requirement::Series(series) => Err(format!(
                "requires {}, {} is {}",
                series, profile.model, profile.series
            )),
            Requirement::Ptp if profile.is_ptp_supported() => Ok(()),
            Requirement::Ptp => Err(format!("{} has no PTP-capable interfaces", profile.model)),
            Requirement::Section(section) if profile.has_section(*section) => Ok(()),
            Requirement::Section(section) => Err(format!(
                "{} has no {} section",
                profile.model,
                section.label()
            )),
        }
    }
}

/// Browser state a scenario starts from. Each is built on a fresh context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    Fresh,
    LoggedIn,
    Unlocked,
}
