use crate::capability::{DeviceProfile, Series, canonical_timezone};
use crate::error::ConsoleError;
use crate::pages::base::ConsolePage;
use crate::pages::locators::time;

/// Time page. Series 3 keeps the timezone select in a collapsed panel;
/// Series 2 renders it directly.
pub struct TimeConfigPage<'a> {
    page: ConsolePage<'a>,
    profile: &'static DeviceProfile,
}

impl<'a> TimeConfigPage<'a> {
    pub fn new(page: ConsolePage<'a>, profile: &'static DeviceProfile) -> Self {
        Self { page, profile }
    }

    pub fn verify_loaded(&mut self) -> Result<(), ConsoleError> {
        if self.profile.series == Series::Three {
            self.page.expand_panel(time::TIMEZONE_PANEL)?;
        }
        let timeout = self.page.timeouts.default;
        self.page.wait_visible(time::TIMEZONE, timeout)
    }

    /// Timezone choices as the select shows them (display names).
    pub fn timezone_options(&mut self) -> Result<Vec<String>, ConsoleError> {
        Ok(self.page.driver.option_texts(time::TIMEZONE)?)
    }

    /// Options mapped to canonical zone names.
    pub fn canonical_timezones(&mut self) -> Result<Vec<String>, ConsoleError> {
        Ok(self
            .timezone_options()?
            .iter()
            .map(|shown| canonical_timezone(shown).to_string())
            .collect())
    }

    pub fn selected_timezone(&mut self) -> Result<Option<String>, ConsoleError> {
        Ok(self.page.driver.selected_option(time::TIMEZONE)?)
    }

    pub fn select_timezone(&mut self, display_name: &str) -> Result<(), ConsoleError> {
        self.page.require_visible(time::TIMEZONE, "timezone select")?;
        self.page.driver.select_option(time::TIMEZONE, display_name)?;
        Ok(())
    }
}
