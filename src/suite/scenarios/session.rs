use tracing::debug;

use crate::capability::ConfigSection;
use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::login::LoginPage;
use crate::pages::navigation::Navigator;
use crate::pages::session_controls::SessionControls;
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "session.fresh_context_requires_login",
            group: "session",
            title: "A new browser context starts signed out",
            requires: Requirement::Any,
            fixture: Fixture::LoggedIn,
            run: fresh_context_requires_login,
        },
        Scenario {
            id: "session.survives_navigation",
            group: "session",
            title: "Moving between sections keeps the session",
            requires: Requirement::Any,
            fixture: Fixture::Unlocked,
            run: survives_navigation,
        },
        Scenario {
            id: "session.expiry_controls",
            group: "session",
            title: "No expiry warning right after login and a way to sign out",
            requires: Requirement::Any,
            fixture: Fixture::LoggedIn,
            run: expiry_controls,
        },
    ]
}

fn fresh_context_requires_login(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    session.fresh()?;
    session.open_console()?;
    let on_login = LoginPage::new(session.page()).is_on_login_page()?;
    ctx.check("login form shown after context reset", on_login);
    Ok(())
}

fn survives_navigation(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    for section in [ConfigSection::Network, ConfigSection::Time, ConfigSection::General] {
        Navigator::new(session.page()).goto_section(section)?;
        let on_login = LoginPage::new(session.page()).is_on_login_page()?;
        ctx.check(format!("still signed in on {}", section), !on_login);
    }
    Ok(())
}

/// The expiry modal only appears near the end of the session, so a fresh
/// login must not show it.
fn expiry_controls(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let minutes = session.profile()?.session_timeout_minutes;
    let mut controls = SessionControls::new(session.page());
    debug!(
        timeout_minutes = minutes,
        modal_markup = controls.modal_markup_present()?,
        "session expiry"
    );
    ctx.check("no expiry warning after login", !controls.expiry_warning_shown()?);
    ctx.check("logout link present", controls.logout_available()?);
    Ok(())
}
