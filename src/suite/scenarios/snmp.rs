use crate::capability::ConfigSection;
use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::navigation::Navigator;
use crate::pages::snmp::{SnmpConfigPage, SnmpSection};
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "snmp.communities",
            group: "snmp",
            title: "Read-only community fields are present",
            requires: Requirement::Section(ConfigSection::Snmp),
            fixture: Fixture::Unlocked,
            run: communities,
        },
        Scenario {
            id: "snmp.section_buttons",
            group: "snmp",
            title: "Each SNMP section has its own save and cancel",
            requires: Requirement::Section(ConfigSection::Snmp),
            fixture: Fixture::Unlocked,
            run: section_buttons,
        },
        Scenario {
            id: "snmp.traps_and_v3",
            group: "snmp",
            title: "Trap and SNMPv3 settings are exposed",
            requires: Requirement::Section(ConfigSection::Snmp),
            fixture: Fixture::Unlocked,
            run: traps_and_v3,
        },
        Scenario {
            id: "snmp.cancel_discards_edits",
            group: "snmp",
            title: "Cancel leaves the page without saving typed values",
            requires: Requirement::Section(ConfigSection::Snmp),
            fixture: Fixture::Unlocked,
            run: cancel_discards_edits,
        },
    ]
}

fn open(session: &mut DeviceSession) -> Result<SnmpConfigPage<'_>, ConsoleError> {
    Navigator::new(session.page()).goto_section(ConfigSection::Snmp)?;
    let mut page = SnmpConfigPage::new(session.page());
    page.verify_loaded()?;
    Ok(page)
}

fn communities(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    ctx.check("community 1 readable", page.community(1)?.is_some());
    ctx.check("community 2 readable", page.community(2)?.is_some());
    Ok(())
}

fn section_buttons(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    for section in [SnmpSection::V1V2c, SnmpSection::Traps, SnmpSection::V3] {
        ctx.check(format!("{:?} save present", section), page.save_present(section)?);
        ctx.check(format!("{:?} cancel present", section), page.cancel_present(section)?);
    }
    Ok(())
}

fn traps_and_v3(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    ctx.check("trap community and destination present", page.trap_fields_present()?);
    ctx.check("SNMPv3 enable present", page.v3_enable_present()?);
    Ok(())
}

/// Type into the v1/v2c and trap sections, then cancel both. Nothing is
/// saved, so the device keeps its configuration.
fn cancel_discards_edits(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let original = {
        let mut page = open(session)?;
        let original = page.community(1)?;
        page.set_community(1, "e2e-unsaved")?;
        page.set_trap_destination("192.0.2.10")?;
        page.cancel(SnmpSection::Traps)?;
        page.cancel(SnmpSection::V1V2c)?;
        original
    };
    let mut page = open(session)?;
    ctx.check_eq("community 1 after cancel", original, page.community(1)?);
    Ok(())
}
