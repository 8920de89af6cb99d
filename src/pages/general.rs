use crate::capability::DeviceProfile;
use crate::error::ConsoleError;
use crate::pages::base::ConsolePage;
use crate::pages::locators::{form, general};

/// Text inputs on the General page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneralField {
    Identifier,
    Location,
    Contact,
    Description,
}

impl GeneralField {
    pub const ALL: [GeneralField; 4] = [
        GeneralField::Identifier,
        GeneralField::Location,
        GeneralField::Contact,
        GeneralField::Description,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GeneralField::Identifier => "identifier",
            GeneralField::Location => "location",
            GeneralField::Contact => "contact",
            GeneralField::Description => "description",
        }
    }

    /// Older firmware omits the contact field.
    pub fn is_optional(self) -> bool {
        self == GeneralField::Contact
    }

    fn selector(self) -> String {
        general::field(self.as_str())
    }
}

/// General page: device identity text fields behind one save button.
pub struct GeneralConfigPage<'a> {
    page: ConsolePage<'a>,
    profile: &'static DeviceProfile,
}

impl<'a> GeneralConfigPage<'a> {
    pub fn new(page: ConsolePage<'a>, profile: &'static DeviceProfile) -> Self {
        Self { page, profile }
    }

    pub fn verify_loaded(&mut self) -> Result<(), ConsoleError> {
        let timeout = self.page.timeouts.default;
        self.page.wait_visible(&GeneralField::Identifier.selector(), timeout)
    }

    pub fn field_present(&mut self, field: GeneralField) -> Result<bool, ConsoleError> {
        self.page.is_visible(&field.selector())
    }

    pub fn field_value(&mut self, field: GeneralField) -> Result<Option<String>, ConsoleError> {
        Ok(self.page.driver.input_value(&field.selector())?)
    }

    pub fn set_field(&mut self, field: GeneralField, value: &str) -> Result<(), ConsoleError> {
        let selector = field.selector();
        self.page.require_visible(&selector, field.as_str())?;
        self.page.driver.fill(&selector, value)?;
        Ok(())
    }

    /// The input's `maxlength`, if the firmware sets one.
    pub fn max_length(&mut self, field: GeneralField) -> Result<Option<usize>, ConsoleError> {
        let raw = self.page.driver.attribute(&field.selector(), "maxlength")?;
        Ok(raw.and_then(|v| v.trim().parse().ok()))
    }

    /// Whether the rendered limit is the one this model is known for.
    pub fn length_limit_matches(&mut self, field: GeneralField) -> Result<bool, ConsoleError> {
        Ok(self.max_length(field)? == self.profile.general_field_max_length())
    }

    pub fn save_enabled(&mut self) -> Result<bool, ConsoleError> {
        Ok(self.page.driver.is_enabled(form::SAVE)?)
    }

    /// Discard unsaved edits.
    pub fn cancel(&mut self) -> Result<(), ConsoleError> {
        self.page.require_visible(form::CANCEL, "General cancel button")?;
        self.page.driver.click(form::CANCEL)?;
        Ok(())
    }
}
