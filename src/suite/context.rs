use std::fmt::Debug;

use crate::suite::suite_model::{CheckResult, Outcome};

/// Collects the checks made while one scenario runs.
#[derive(Debug, Clone, Default)]
pub struct ScenarioContext {
    pub checks: Vec<CheckResult>,
    pub skip_reason: Option<String>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a boolean check and return it.
    pub fn check(&mut self, description: impl Into<String>, passed: bool) -> bool {
        self.checks.push(CheckResult {
            description: description.into(),
            passed,
            expected: None,
            actual: None,
        });
        passed
    }

    pub fn check_eq<T: PartialEq + Debug>(
        &mut self,
        description: impl Into<String>,
        expected: T,
        actual: T,
    ) -> bool {
        let passed = expected == actual;
        self.checks.push(CheckResult {
            description: description.into(),
            passed,
            expected: Some(format!("{:?}", expected)),
            actual: Some(format!("{:?}", actual)),
        });
        passed
    }

    /// Mark the scenario as not applicable. Checks already failed still fail it.
    pub fn skip(&mut self, reason: impl Into<String>) {
        self.skip_reason = Some(reason.into());
    }

    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn pass_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn fail_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    /// Errors and failed checks fail; a skip otherwise wins over a pass.
    pub fn outcome(&self, errored: bool) -> Outcome {
        if errored || !self.all_passed() {
            Outcome::Failed
        } else if self.skip_reason.is_some() {
            Outcome::Skipped
        } else {
            Outcome::Passed
        }
    }
}
