use crate::capability::ConfigSection;
use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::display::DisplayConfigPage;
use crate::pages::locators::display;
use crate::pages::navigation::Navigator;
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "display.mode_checkboxes",
            group: "display",
            title: "All five display modes are checkboxes",
            requires: Requirement::Section(ConfigSection::Display),
            fixture: Fixture::Unlocked,
            run: mode_checkboxes,
        },
        Scenario {
            id: "display.edit_enables_save",
            group: "display",
            title: "Toggling a mode enables save",
            requires: Requirement::Section(ConfigSection::Display),
            fixture: Fixture::Unlocked,
            run: edit_enables_save,
        },
    ]
}

fn open(session: &mut DeviceSession) -> Result<DisplayConfigPage<'_>, ConsoleError> {
    Navigator::new(session.page()).goto_section(ConfigSection::Display)?;
    let mut page = DisplayConfigPage::new(session.page());
    page.verify_loaded()?;
    Ok(page)
}

fn mode_checkboxes(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    let modes = page.checkbox_modes()?;
    ctx.check_eq("mode checkboxes", (1..=display::MODES).collect::<Vec<_>>(), modes);
    Ok(())
}

/// Not saved; the next scenario's fresh context drops the change.
fn edit_enables_save(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    ctx.check("save disabled before edits", !page.save_enabled()?);
    let before = page.mode_checked(1)?;
    ctx.check("mode 1 toggles", page.toggle_mode(1)? != before);
    ctx.check("save enabled after toggle", page.save_enabled()?);
    Ok(())
}
