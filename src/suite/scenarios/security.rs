use crate::capability::ConfigSection;
use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::access::AccessConfigPage;
use crate::pages::login::LoginPage;
use crate::pages::navigation::Navigator;
use crate::probe::{ProtocolProbe, check_consistency};
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "security.passwords_masked",
            group: "security",
            title: "Access page masks every password input",
            requires: Requirement::Section(ConfigSection::Access),
            fixture: Fixture::Unlocked,
            run: passwords_masked,
        },
        Scenario {
            id: "security.https_enforcement",
            group: "security",
            title: "Served protocols agree with the HTTPS enforcement setting",
            requires: Requirement::Section(ConfigSection::Access),
            fixture: Fixture::Unlocked,
            run: https_enforcement,
        },
        Scenario {
            id: "security.unauthenticated_redirect",
            group: "security",
            title: "Configuration pages send anonymous visitors to login",
            requires: Requirement::Any,
            fixture: Fixture::Fresh,
            run: unauthenticated_redirect,
        },
    ]
}

fn passwords_masked(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    Navigator::new(session.page()).goto_section(ConfigSection::Access)?;
    let mut page = AccessConfigPage::new(session.page());
    page.verify_loaded()?;
    let fields = page.password_fields()?;
    ctx.check(format!("{} password inputs present", fields.len()), !fields.is_empty());
    ctx.check("password inputs masked", page.passwords_masked()?);
    Ok(())
}

fn https_enforcement(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    Navigator::new(session.page()).goto_section(ConfigSection::Access)?;
    let mode = {
        let mut page = AccessConfigPage::new(session.page());
        page.verify_loaded()?;
        page.https_enforcement()?
    };

    let target = session.target();
    let probe = ProtocolProbe::new(&target.ip, target.ignore_ssl, session.timeouts().short)?;
    let report = probe.run()?;
    let consistent = check_consistency(mode, report.dashboard, report.config);
    let description = match &consistent {
        Ok(()) => format!("{} mode honoured", mode),
        Err(problem) => problem.clone(),
    };
    ctx.check(description, consistent.is_ok());
    Ok(())
}

fn unauthenticated_redirect(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = session.page();
    page.open(ConfigSection::General.path())?;
    let on_login = LoginPage::new(page).is_on_login_page()?;
    ctx.check("redirected to login", on_login);
    Ok(())
}
