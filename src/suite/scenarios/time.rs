use crate::capability::ConfigSection;
use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::navigation::Navigator;
use crate::pages::time::TimeConfigPage;
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "time.timezone_options",
            group: "time",
            title: "Timezone select matches the model's zone list",
            requires: Requirement::Section(ConfigSection::Time),
            fixture: Fixture::Unlocked,
            run: timezone_options,
        },
        Scenario {
            id: "time.timezone_selection",
            group: "time",
            title: "A listed timezone can be selected",
            requires: Requirement::Section(ConfigSection::Time),
            fixture: Fixture::Unlocked,
            run: timezone_selection,
        },
    ]
}

fn open(session: &mut DeviceSession) -> Result<TimeConfigPage<'_>, ConsoleError> {
    let profile = session.profile()?;
    Navigator::new(session.page()).goto_section(ConfigSection::Time)?;
    let mut page = TimeConfigPage::new(session.page(), profile);
    page.verify_loaded()?;
    Ok(page)
}

fn timezone_options(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let profile = session.profile()?;
    let mut page = open(session)?;
    let zones = page.canonical_timezones()?;

    ctx.check_eq("timezone count", profile.timezones.len(), zones.len());
    for zone in &zones {
        ctx.check(format!("'{}' supported", zone), profile.validate_timezone(zone));
    }
    for &want in profile.timezones {
        ctx.check(format!("'{}' offered", want), zones.iter().any(|z| z == want));
    }
    Ok(())
}

fn timezone_selection(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    let options = page.timezone_options()?;
    let Some(target) = options.last().cloned() else {
        ctx.skip("timezone select is empty");
        return Ok(());
    };
    page.select_timezone(&target)?;
    ctx.check_eq("selected timezone", Some(target), page.selected_timezone()?);
    Ok(())
}
