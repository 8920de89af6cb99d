use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::suite::context::ScenarioContext;
use crate::suite::scenarios;
use crate::suite::suite_model::{Fixture, Requirement};

pub type ScenarioFn = fn(&mut ScenarioContext, &mut DeviceSession) -> Result<(), ConsoleError>;

/// A registered scenario: metadata plus the function that runs it.
#[derive(Clone)]
pub struct Scenario {
    /// Stable dotted id, `<group>.<name>`; also the artifact file stem.
    pub id: &'static str,
    pub group: &'static str,
    pub title: &'static str,
    pub requires: Requirement,
    pub fixture: Fixture,
    pub run: ScenarioFn,
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("id", &self.id)
            .field("requires", &self.requires)
            .field("fixture", &self.fixture)
            .finish()
    }
}

/// Every scenario, in execution order.
pub fn catalog() -> Vec<Scenario> {
    let mut all = Vec::new();
    all.extend(scenarios::auth::scenarios());
    all.extend(scenarios::navigation::scenarios());
    all.extend(scenarios::capability::scenarios());
    all.extend(scenarios::general::scenarios());
    all.extend(scenarios::network::scenarios());
    all.extend(scenarios::ptp::scenarios());
    all.extend(scenarios::snmp::scenarios());
    all.extend(scenarios::syslog::scenarios());
    all.extend(scenarios::time::scenarios());
    all.extend(scenarios::gnss::scenarios());
    all.extend(scenarios::outputs::scenarios());
    all.extend(scenarios::display::scenarios());
    all.extend(scenarios::upload::scenarios());
    all.extend(scenarios::security::scenarios());
    all.extend(scenarios::session::scenarios());
    all
}

/// Keep scenarios in any of `groups` (all when empty) whose id contains
/// `pattern`.
pub fn select<'a>(all: &'a [Scenario], groups: &[String], pattern: Option<&str>) -> Vec<&'a Scenario> {
    all.iter()
        .filter(|s| groups.is_empty() || groups.iter().any(|g| g == s.group))
        .filter(|s| pattern.is_none_or(|p| s.id.contains(p)))
        .collect()
}
