use crate::capability::ptp_profile::{DELAY_MECHANISMS, NETWORK_TRANSPORTS};
use crate::capability::{CapabilityError, ConfigSection, PtpProfile};
use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::navigation::Navigator;
use crate::pages::ptp::PtpConfigPage;
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "ptp.panels_expand",
            group: "ptp",
            title: "Each PTP port panel can be expanded",
            requires: Requirement::Ptp,
            fixture: Fixture::Unlocked,
            run: panels_expand,
        },
        Scenario {
            id: "ptp.profile_options",
            group: "ptp",
            title: "Profile select offers every supported PTP profile",
            requires: Requirement::Ptp,
            fixture: Fixture::Unlocked,
            run: profile_options,
        },
        Scenario {
            id: "ptp.power_profile_priority1",
            group: "ptp",
            title: "C37.238-2011 locks priority 1 and leaves priority 2 editable",
            requires: Requirement::Ptp,
            fixture: Fixture::Unlocked,
            run: power_profile_priority1,
        },
        Scenario {
            id: "ptp.custom_port_options",
            group: "ptp",
            title: "Custom profile unlocks delay mechanism and transport",
            requires: Requirement::Ptp,
            fixture: Fixture::Unlocked,
            run: custom_port_options,
        },
        Scenario {
            id: "ptp.non_ptp_port_rejected",
            group: "ptp",
            title: "Ports outside the PTP list are refused",
            requires: Requirement::Ptp,
            fixture: Fixture::Unlocked,
            run: non_ptp_port_rejected,
        },
        Scenario {
            id: "ptp.domain_number_input",
            group: "ptp",
            title: "Domain number accepts input and the port save stays available",
            requires: Requirement::Ptp,
            fixture: Fixture::Unlocked,
            run: domain_number_input,
        },
    ]
}

fn open(session: &mut DeviceSession) -> Result<PtpConfigPage<'_>, ConsoleError> {
    let profile = session.profile()?;
    Navigator::new(session.page()).goto_section(ConfigSection::Ptp)?;
    Ok(PtpConfigPage::new(session.page(), profile))
}

fn panels_expand(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    for &port in page.available_ports() {
        page.expand_panel(port)?;
        let expanded = page.is_panel_expanded(port)?;
        ctx.check(format!("{} panel expanded", port), expanded);
    }
    Ok(())
}

fn profile_options(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    let Some(&port) = page.available_ports().first() else {
        ctx.skip("no PTP ports");
        return Ok(());
    };
    let options = page.profile_options(port)?;
    for profile in PtpProfile::all() {
        ctx.check(
            format!("{} offers '{}'", port, profile.label()),
            options.iter().any(|o| o == profile.label()),
        );
    }
    Ok(())
}

fn power_profile_priority1(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let profile = PtpProfile::PowerC37_238_2011;
    let mut page = open(session)?;
    for &port in page.available_ports() {
        page.configure_profile(port, profile)?;
        let p1 = page.field_read_only(port, "priority_1")?;
        let p2 = page.field_read_only(port, "priority_2")?;
        let domain = page.field_read_only(port, "domain_number")?;
        ctx.check_eq(format!("{} priority 1 read-only", port), profile.is_field_read_only("priority1"), p1);
        ctx.check_eq(format!("{} priority 2 read-only", port), profile.is_field_read_only("priority2"), p2);
        ctx.check(format!("{} domain number editable", port), !domain);
    }
    Ok(())
}

fn custom_port_options(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    for &port in page.available_ports() {
        page.configure_profile(port, PtpProfile::Custom)?;
        ctx.check(format!("{} delay mechanism enabled", port), page.delay_mechanism_enabled(port)?);

        let delay = page.delay_mechanism_options(port)?;
        for want in DELAY_MECHANISMS {
            ctx.check(format!("{} delay mechanism offers {}", port, want), delay.iter().any(|o| o == want));
        }
        let transport = page.network_transport_options(port)?;
        for want in NETWORK_TRANSPORTS {
            ctx.check(format!("{} transport offers {}", port, want), transport.iter().any(|o| o == want));
        }

        page.configure_profile(port, PtpProfile::DefaultUdpV4)?;
        let locked = !page.delay_mechanism_enabled(port)?;
        ctx.check_eq(
            format!("{} delay mechanism locked outside Custom", port),
            !PtpProfile::DefaultUdpV4.unlocks_port_options(),
            locked,
        );
    }
    Ok(())
}

fn non_ptp_port_rejected(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let profile = session.profile()?;
    let mut page = open(session)?;
    let outsiders: Vec<&str> = profile
        .interface_names()
        .into_iter()
        .filter(|name| !profile.is_ptp_interface(name))
        .collect();
    for port in outsiders {
        let refused = matches!(
            page.expand_panel(port),
            Err(ConsoleError::Capability(CapabilityError::NotPtpCapable { .. }))
        );
        ctx.check(format!("{} refused as PTP port", port), refused);
    }
    Ok(())
}

fn domain_number_input(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    for &port in page.available_ports() {
        page.set_domain_number(port, 24)?;
        let value = page.field_value(port, "domain_number")?;
        ctx.check_eq(format!("{} domain number", port), Some("24".to_string()), value);
        ctx.check(format!("{} save enabled", port), page.save_enabled(port)?);
    }
    Ok(())
}
