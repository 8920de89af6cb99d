use crate::capability::ConfigSection;
use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::LoginOutcome;
use crate::pages::locators::login;
use crate::pages::login::LoginPage;
use crate::pages::navigation::Navigator;
use crate::pages::unlock::ConfigurationUnlockPage;
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

const WRONG_PASSWORD: &str = "not-the-device-password";

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "auth.login_form",
            group: "auth",
            title: "Signed-out console shows the password form",
            requires: Requirement::Any,
            fixture: Fixture::Fresh,
            run: login_form,
        },
        Scenario {
            id: "auth.valid_login",
            group: "auth",
            title: "Correct status password reaches the dashboard",
            requires: Requirement::Any,
            fixture: Fixture::Fresh,
            run: valid_login,
        },
        Scenario {
            id: "auth.invalid_password",
            group: "auth",
            title: "Wrong password is rejected and stays on /authenticate",
            requires: Requirement::Any,
            fixture: Fixture::Fresh,
            run: invalid_password,
        },
        Scenario {
            id: "auth.configuration_unlock",
            group: "auth",
            title: "Configure link unlocks the configuration menu",
            requires: Requirement::Any,
            fixture: Fixture::LoggedIn,
            run: configuration_unlock,
        },
    ]
}

fn login_form(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    session.open_console()?;
    let mut page = LoginPage::new(session.page());
    page.verify_loaded()?;
    let on_login = page.is_on_login_page()?;
    ctx.check("login form is shown", on_login);
    Ok(())
}

fn valid_login(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let profile = session.login()?;
    let url = session.driver().current_url()?;
    ctx.check(
        format!("left {} after login", login::AUTH_PATH),
        !url.contains(login::AUTH_PATH),
    );
    ctx.check("profile resolved", !profile.model.is_empty());
    Ok(())
}

fn invalid_password(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    session.open_console()?;
    let outcome = LoginPage::new(session.page()).login(WRONG_PASSWORD)?;
    ctx.check("wrong password rejected", !outcome.is_accepted());
    let url = session.driver().current_url()?;
    ctx.check("still on the login page", url.contains(login::AUTH_PATH));
    Ok(())
}

fn configuration_unlock(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let password = session.target().password.clone();
    let mut unlock = ConfigurationUnlockPage::new(session.page());
    unlock.open_from_dashboard()?;
    let outcome = unlock.unlock(&password)?;
    ctx.check_eq("unlock outcome", LoginOutcome::Accepted, outcome);
    let general = Navigator::new(session.page()).section_link_visible(ConfigSection::General)?;
    ctx.check("General menu link visible", general);
    Ok(())
}
