use crate::capability::ConfigSection;
use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::gnss::GnssConfigPage;
use crate::pages::navigation::Navigator;
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "gnss.gps_mandatory",
            group: "gnss",
            title: "GPS is shown checked and cannot be turned off",
            requires: Requirement::Section(ConfigSection::Gnss),
            fixture: Fixture::Unlocked,
            run: gps_mandatory,
        },
        Scenario {
            id: "gnss.optional_constellations",
            group: "gnss",
            title: "Every other constellation can be toggled",
            requires: Requirement::Section(ConfigSection::Gnss),
            fixture: Fixture::Unlocked,
            run: optional_constellations,
        },
        Scenario {
            id: "gnss.cancel_reverts_selection",
            group: "gnss",
            title: "A toggle enables save and cancel puts it back",
            requires: Requirement::Section(ConfigSection::Gnss),
            fixture: Fixture::Unlocked,
            run: cancel_reverts_selection,
        },
    ]
}

fn open(session: &mut DeviceSession) -> Result<GnssConfigPage<'_>, ConsoleError> {
    let profile = session.profile()?;
    Navigator::new(session.page()).goto_section(ConfigSection::Gnss)?;
    let mut page = GnssConfigPage::new(session.page(), profile);
    page.verify_loaded()?;
    Ok(page)
}

fn gps_mandatory(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    let gps = page.state(GnssConfigPage::MANDATORY)?;
    ctx.check("GPS visible", gps.visible);
    ctx.check("GPS checked", gps.checked);
    ctx.check("GPS locked", !gps.enabled);
    Ok(())
}

/// Toggle each optional constellation twice so the form ends where it began.
fn optional_constellations(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    for constellation in page.optional_constellations() {
        let before = page.state(constellation)?;
        ctx.check(format!("{} visible", constellation), before.visible);
        ctx.check(format!("{} editable", constellation), before.enabled);
        if !before.visible || !before.enabled {
            continue;
        }
        ctx.check(format!("{} toggles", constellation), page.toggle(constellation)? != before.checked);
        ctx.check(format!("{} toggles back", constellation), page.toggle(constellation)? == before.checked);
    }
    Ok(())
}

fn cancel_reverts_selection(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    let Some(constellation) = page.optional_constellations().first().copied() else {
        ctx.skip("model tracks GPS only");
        return Ok(());
    };
    let before = page.state(constellation)?.checked;
    ctx.check("save disabled before edits", !page.save_enabled()?);

    page.toggle(constellation)?;
    ctx.check("save enabled after toggle", page.save_enabled()?);

    page.cancel()?;
    ctx.check_eq(format!("{} after cancel", constellation), before, page.state(constellation)?.checked);
    ctx.check("save disabled after cancel", !page.save_enabled()?);
    Ok(())
}
