use tracing::debug;

use crate::capability::ConfigSection;
use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::general::{GeneralConfigPage, GeneralField};
use crate::pages::navigation::Navigator;
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "general.identity_fields",
            group: "general",
            title: "Identifier, location and description inputs are shown",
            requires: Requirement::Section(ConfigSection::General),
            fixture: Fixture::Unlocked,
            run: identity_fields,
        },
        Scenario {
            id: "general.field_length_limit",
            group: "general",
            title: "Text inputs carry the model's length limit",
            requires: Requirement::Section(ConfigSection::General),
            fixture: Fixture::Unlocked,
            run: field_length_limit,
        },
        Scenario {
            id: "general.cancel_reverts_identifier",
            group: "general",
            title: "Editing enables save and cancel restores the identifier",
            requires: Requirement::Section(ConfigSection::General),
            fixture: Fixture::Unlocked,
            run: cancel_reverts_identifier,
        },
    ]
}

fn open(session: &mut DeviceSession) -> Result<GeneralConfigPage<'_>, ConsoleError> {
    let profile = session.profile()?;
    Navigator::new(session.page()).goto_section(ConfigSection::General)?;
    let mut page = GeneralConfigPage::new(session.page(), profile);
    page.verify_loaded()?;
    Ok(page)
}

fn identity_fields(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    for field in GeneralField::ALL {
        let present = page.field_present(field)?;
        if field.is_optional() {
            debug!(field = field.as_str(), present, "optional field");
            continue;
        }
        ctx.check(format!("{} field present", field.as_str()), present);
    }
    Ok(())
}

fn field_length_limit(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let expected = session.profile()?.general_field_max_length();
    let mut page = open(session)?;
    for field in [GeneralField::Identifier, GeneralField::Location] {
        ctx.check_eq(format!("{} maxlength", field.as_str()), expected, page.max_length(field)?);
    }
    Ok(())
}

fn cancel_reverts_identifier(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let mut page = open(session)?;
    let original = page.field_value(GeneralField::Identifier)?;
    ctx.check("save disabled before edits", !page.save_enabled()?);

    page.set_field(GeneralField::Identifier, "e2e-unsaved")?;
    ctx.check("save enabled after edit", page.save_enabled()?);

    page.cancel()?;
    ctx.check_eq("identifier after cancel", original, page.field_value(GeneralField::Identifier)?);
    ctx.check("save disabled after cancel", !page.save_enabled()?);
    Ok(())
}
