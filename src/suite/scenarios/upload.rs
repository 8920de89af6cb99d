use crate::capability::ConfigSection;
use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::navigation::Navigator;
use crate::pages::upload::UploadConfigPage;
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

pub fn scenarios() -> Vec<Scenario> {
    vec![Scenario {
        id: "upload.form_present",
        group: "upload",
        title: "Firmware upload form is offered without a stale result",
        requires: Requirement::Section(ConfigSection::Upload),
        fixture: Fixture::Unlocked,
        run: form_present,
    }]
}

fn form_present(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    Navigator::new(session.page()).goto_section(ConfigSection::Upload)?;
    let mut page = UploadConfigPage::new(session.page());
    page.verify_loaded()?;
    ctx.check("file input present", page.file_input_present()?);
    ctx.check("upload button present", page.submit_present()?);
    ctx.check("no upload result shown", !page.result_shown()?);
    Ok(())
}
