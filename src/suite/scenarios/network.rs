use crate::capability::{ConfigSection, Series};
use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::navigation::Navigator;
use crate::pages::network::NetworkConfigPage;
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "network.interface_fields",
            group: "network",
            title: "Every interface renders the fields its profile lists",
            requires: Requirement::Section(ConfigSection::Network),
            fixture: Fixture::Unlocked,
            run: interface_fields,
        },
        Scenario {
            id: "network.gateway",
            group: "network",
            title: "Default gateway field is populated",
            requires: Requirement::Section(ConfigSection::Network),
            fixture: Fixture::Unlocked,
            run: gateway,
        },
        Scenario {
            id: "network.port_save_buttons",
            group: "network",
            title: "Series 3 has one save button per interface",
            requires: Requirement::Series(Series::Three),
            fixture: Fixture::Unlocked,
            run: port_save_buttons,
        },
    ]
}

fn open(session: &mut DeviceSession) -> Result<NetworkConfigPage<'_>, ConsoleError> {
    let profile = session.profile()?;
    Navigator::new(session.page()).goto_section(ConfigSection::Network)?;
    let mut page = NetworkConfigPage::new(session.page(), profile);
    page.verify_loaded()?;
    Ok(page)
}

fn interface_fields(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let profile = session.profile()?;
    let mut page = open(session)?;
    for iface in profile.interfaces {
        for &field in iface.fields {
            let present = page.field_present(iface.name, field)?;
            ctx.check(format!("{} {} field present", iface.name, field.as_str()), present);
        }
    }
    Ok(())
}

fn gateway(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    let value = page.gateway_value()?;
    ctx.check(
        format!("gateway populated ({:?})", value),
        value.is_some_and(|v| !v.trim().is_empty()),
    );
    Ok(())
}

fn port_save_buttons(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let profile = session.profile()?;
    let mut page = open(session)?;
    for iface in profile.interface_names() {
        let present = page.save_button_present(iface)?;
        ctx.check(format!("{} save button present", iface), present);
    }
    Ok(())
}
