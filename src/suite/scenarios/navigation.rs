use crate::capability::{ConfigSection, Series};
use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::dashboard::DashboardPage;
use crate::pages::navigation::Navigator;
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

/// Time, GNSS, device info and satellites.
const DASHBOARD_TABLES: u32 = 4;

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "navigation.dashboard_tables",
            group: "navigation",
            title: "Dashboard renders its status tables",
            requires: Requirement::Any,
            fixture: Fixture::LoggedIn,
            run: dashboard_tables,
        },
        Scenario {
            id: "navigation.menu_links",
            group: "navigation",
            title: "Menu offers every section the model supports",
            requires: Requirement::Any,
            fixture: Fixture::Unlocked,
            run: menu_links,
        },
        Scenario {
            id: "navigation.section_pages",
            group: "navigation",
            title: "Each section link loads its page",
            requires: Requirement::Any,
            fixture: Fixture::Unlocked,
            run: section_pages,
        },
        Scenario {
            id: "navigation.series2_no_ptp",
            group: "navigation",
            title: "Series 2 menu has no PTP section",
            requires: Requirement::Series(Series::Two),
            fixture: Fixture::Unlocked,
            run: series2_no_ptp,
        },
    ]
}

fn dashboard_tables(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let tables = DashboardPage::new(session.page()).status_table_count()?;
    ctx.check(
        format!("at least {} status tables (found {})", DASHBOARD_TABLES, tables),
        tables >= DASHBOARD_TABLES,
    );
    Ok(())
}

fn menu_links(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let profile = session.profile()?;
    let mut nav = Navigator::new(session.page());
    for section in profile.available_sections() {
        let visible = nav.section_link_visible(section)?;
        ctx.check(format!("{} link visible", section), visible);
    }
    Ok(())
}

fn section_pages(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let profile = session.profile()?;
    for section in profile.available_sections() {
        match Navigator::new(session.page()).goto_section(section) {
            Ok(()) => ctx.check(format!("{} page loads", section), true),
            Err(e) => ctx.check(format!("{} page loads: {}", section, e), false),
        };
        Navigator::new(session.page()).ensure_dashboard()?;
    }
    Ok(())
}

fn series2_no_ptp(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let visible = Navigator::new(session.page()).section_link_visible(ConfigSection::Ptp)?;
    ctx.check("PTP link absent", !visible);
    Ok(())
}
