use crate::capability::ConfigSection;
use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::navigation::Navigator;
use crate::pages::syslog::SyslogConfigPage;
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "syslog.dual_targets",
            group: "syslog",
            title: "Two independent syslog targets",
            requires: Requirement::Section(ConfigSection::Syslog),
            fixture: Fixture::Unlocked,
            run: dual_targets,
        },
        Scenario {
            id: "syslog.target_ports",
            group: "syslog",
            title: "Target ports hold valid port numbers",
            requires: Requirement::Section(ConfigSection::Syslog),
            fixture: Fixture::Unlocked,
            run: target_ports,
        },
        Scenario {
            id: "syslog.message_filters",
            group: "syslog",
            title: "Protocol, facility and severity selects are populated",
            requires: Requirement::Section(ConfigSection::Syslog),
            fixture: Fixture::Unlocked,
            run: message_filters,
        },
    ]
}

fn open(session: &mut DeviceSession) -> Result<SyslogConfigPage<'_>, ConsoleError> {
    Navigator::new(session.page()).goto_section(ConfigSection::Syslog)?;
    let mut page = SyslogConfigPage::new(session.page());
    page.verify_loaded()?;
    Ok(page)
}

fn dual_targets(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    let targets = page.target_count()?;
    ctx.check(
        format!("{} server fields (want {})", targets, SyslogConfigPage::TARGETS),
        targets >= SyslogConfigPage::TARGETS,
    );
    for index in 0..SyslogConfigPage::TARGETS {
        ctx.check(format!("target {} toggles", index + 1), page.toggle_target(index)?);
    }
    Ok(())
}

fn target_ports(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    for index in 0..SyslogConfigPage::TARGETS {
        let value = page.port_value(index)?;
        let valid = value
            .as_deref()
            .and_then(|v| v.trim().parse::<u16>().ok())
            .is_some_and(|p| p > 0);
        ctx.check(format!("target {} port {:?} valid", index + 1, value), valid);
    }
    Ok(())
}

fn message_filters(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    for target in ['a', 'b'] {
        let protocols = page.protocol_options(target)?;
        ctx.check(format!("target {} protocol options", target), !protocols.is_empty());
    }
    ctx.check("facility options", !page.facility_options()?.is_empty());
    ctx.check("severity options", !page.severity_options()?.is_empty());
    Ok(())
}
