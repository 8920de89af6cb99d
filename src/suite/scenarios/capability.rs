use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::dashboard::DashboardPage;
use crate::pages::locators::dashboard;
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "capability.model_matches_dashboard",
            group: "capability",
            title: "Detected profile matches the dashboard device table",
            requires: Requirement::Any,
            fixture: Fixture::LoggedIn,
            run: model_matches_dashboard,
        },
        Scenario {
            id: "capability.known_issue_scaling",
            group: "capability",
            title: "Known issues scale the wait budgets",
            requires: Requirement::Any,
            fixture: Fixture::LoggedIn,
            run: known_issue_scaling,
        },
    ]
}

fn model_matches_dashboard(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let profile = session.profile()?;
    let info = DashboardPage::new(session.page()).device_info()?;
    let shown = info.get(dashboard::MODEL_KEY).map(String::as_str);
    ctx.check_eq("model number", Some(profile.model), shown);
    ctx.check(
        format!("{} rows in device table", info.len()),
        !info.is_empty(),
    );
    Ok(())
}

fn known_issue_scaling(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let profile = session.profile()?;
    let multiplier = profile.timeout_multiplier();
    let timeouts = session.timeouts();
    ctx.check(
        format!("multiplier {} is at least 1.0", multiplier),
        multiplier >= 1.0,
    );
    if profile.known_issues.is_empty() {
        ctx.check_eq("no issues, no scaling", 1.0, multiplier);
    }
    ctx.check(
        "long wait exceeds default wait",
        timeouts.long > timeouts.default && timeouts.default > timeouts.short,
    );
    Ok(())
}
