use std::path::PathBuf;
use std::time::Instant;

use tracing::{error, info, warn};

use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::report::report_model::{DeviceSummary, SuiteReport};
use crate::suite::artifacts::ArtifactWriter;
use crate::suite::catalog::{Scenario, select};
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Outcome, ScenarioResult};

pub const SUITE_NAME: &str = "Kronos web console";

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Only these groups; all when empty.
    pub groups: Vec<String>,
    /// Only scenarios whose id contains this.
    pub scenario_filter: Option<String>,
    /// Where metadata and failure screenshots go. No artifacts when `None`.
    pub results_dir: Option<PathBuf>,
}

/// Runs catalog scenarios against one device session.
pub struct SuiteRunner<'s> {
    session: &'s mut DeviceSession,
    options: RunOptions,
    artifacts: Option<ArtifactWriter>,
}

impl<'s> SuiteRunner<'s> {
    pub fn new(session: &'s mut DeviceSession, options: RunOptions) -> Self {
        let artifacts = options.results_dir.clone().map(ArtifactWriter::new);
        Self {
            session,
            options,
            artifacts,
        }
    }

    /// Detect the device, then run every selected scenario.
    ///
    /// Detection failure (login rejected, model unknown, console
    /// unreachable) aborts the run: no scenario is executed against
    /// capabilities nobody knows.
    pub fn run(&mut self, scenarios: &[Scenario]) -> SuiteReport {
        let start = Instant::now();

        let device = match self.detect() {
            Ok(device) => device,
            Err(e) => {
                error!(error = %e, "device detection failed, aborting run");
                return SuiteReport::aborted(SUITE_NAME, format!("device detection failed: {}", e))
                    .with_duration(start.elapsed().as_millis());
            }
        };

        let selected = select(
            scenarios,
            &self.options.groups,
            self.options.scenario_filter.as_deref(),
        );
        info!(count = selected.len(), model = %device.model, "running scenarios");

        let mut results = Vec::with_capacity(selected.len());
        for scenario in selected {
            let result = self.run_one(scenario);
            if let Some(writer) = self.artifacts.clone() {
                let screenshot = if result.outcome == Outcome::Failed {
                    self.capture_failure(&writer, &result.id)
                } else {
                    None
                };
                writer.record(&result, Some(&device), screenshot);
            }
            results.push(result);
        }

        SuiteReport::from_results(SUITE_NAME, results)
            .with_duration(start.elapsed().as_millis())
            .with_device(device)
    }

    fn detect(&mut self) -> Result<DeviceSummary, ConsoleError> {
        self.session.fresh()?;
        let profile = self.session.login()?;
        Ok(DeviceSummary::new(&self.session.target().ip, profile))
    }

    fn prepare(&mut self, fixture: Fixture) -> Result<(), ConsoleError> {
        self.session.fresh()?;
        match fixture {
            Fixture::Fresh => Ok(()),
            Fixture::LoggedIn => self.session.login().map(|_| ()),
            Fixture::Unlocked => self.session.unlock().map(|_| ()),
        }
    }

    /// Run one scenario from a fresh browser context.
    pub fn run_one(&mut self, scenario: &Scenario) -> ScenarioResult {
        let start = Instant::now();
        let mut ctx = ScenarioContext::new();

        let gate = self
            .session
            .profile()
            .map_err(|e| e.to_string())
            .and_then(|profile| scenario.requires.check(profile));
        if let Err(reason) = gate {
            info!(scenario = scenario.id, %reason, "skipped");
            ctx.skip(reason);
            return Self::finish(scenario, ctx, None, start);
        }

        let outcome = self
            .prepare(scenario.fixture)
            .and_then(|()| (scenario.run)(&mut ctx, self.session));

        let error = outcome.err().map(|e| e.to_string());
        let result = Self::finish(scenario, ctx, error, start);
        match result.outcome {
            Outcome::Passed => info!(scenario = scenario.id, "passed"),
            Outcome::Skipped => info!(scenario = scenario.id, reason = ?result.skip_reason, "skipped"),
            Outcome::Failed => warn!(scenario = scenario.id, error = ?result.error, "failed"),
        }
        result
    }

    fn finish(
        scenario: &Scenario,
        ctx: ScenarioContext,
        error: Option<String>,
        start: Instant,
    ) -> ScenarioResult {
        let outcome = ctx.outcome(error.is_some());
        ScenarioResult {
            id: scenario.id.to_string(),
            group: scenario.group.to_string(),
            title: scenario.title.to_string(),
            outcome,
            checks: ctx.checks,
            skip_reason: ctx.skip_reason,
            error,
            duration_ms: start.elapsed().as_millis(),
        }
    }

    /// Best-effort screenshot of the failing page.
    fn capture_failure(&mut self, writer: &ArtifactWriter, id: &str) -> Option<String> {
        let path = match writer.prepare_screenshot(id) {
            Ok(path) => path,
            Err(e) => {
                warn!(scenario = id, error = %e, "cannot prepare screenshot directory");
                return None;
            }
        };
        let path = path.display().to_string();
        match self.session.screenshot(&path) {
            Ok(()) => Some(path),
            Err(e) => {
                warn!(scenario = id, error = %e, "failure screenshot not captured");
                None
            }
        }
    }
}
