use crate::capability::DeviceProfile;
use crate::error::ConsoleError;
use crate::pages::base::ConsolePage;
use crate::pages::locators::{form, gnss};

/// Rendered state of one constellation checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxState {
    pub visible: bool,
    pub checked: bool,
    pub enabled: bool,
}

/// GNSS page. GPS is mandatory and rendered checked and disabled; the
/// other constellations are optional.
pub struct GnssConfigPage<'a> {
    page: ConsolePage<'a>,
    profile: &'static DeviceProfile,
}

impl<'a> GnssConfigPage<'a> {
    pub const MANDATORY: &'static str = "GPS";

    pub fn new(page: ConsolePage<'a>, profile: &'static DeviceProfile) -> Self {
        Self { page, profile }
    }

    fn checkbox(&self, constellation: &str) -> String {
        gnss::constellation(&self.profile.gnss_checkbox_name(constellation))
    }

    pub fn verify_loaded(&mut self) -> Result<(), ConsoleError> {
        let timeout = self.page.timeouts.default;
        let gps = self.checkbox(Self::MANDATORY);
        self.page.wait_visible(&gps, timeout)
    }

    /// Constellations the model can track, GPS excluded.
    pub fn optional_constellations(&self) -> Vec<&'static str> {
        self.profile
            .gnss_constellations
            .iter()
            .copied()
            .filter(|c| *c != Self::MANDATORY)
            .collect()
    }

    pub fn state(&mut self, constellation: &str) -> Result<CheckboxState, ConsoleError> {
        let selector = self.checkbox(constellation);
        Ok(CheckboxState {
            visible: self.page.driver.is_visible(&selector)?,
            checked: self.page.driver.is_checked(&selector)?,
            enabled: self.page.driver.is_enabled(&selector)?,
        })
    }

    /// Flip a constellation and return its new checked state.
    pub fn toggle(&mut self, constellation: &str) -> Result<bool, ConsoleError> {
        let selector = self.checkbox(constellation);
        self.page.require_visible(&selector, "constellation checkbox")?;
        let before = self.page.driver.is_checked(&selector)?;
        self.page.driver.set_checked(&selector, !before)?;
        Ok(self.page.driver.is_checked(&selector)?)
    }

    pub fn save_enabled(&mut self) -> Result<bool, ConsoleError> {
        Ok(self.page.driver.is_enabled(gnss::SAVE)?)
    }

    pub fn cancel(&mut self) -> Result<(), ConsoleError> {
        self.page.require_visible(form::CANCEL, "GNSS cancel button")?;
        self.page.driver.click(form::CANCEL)?;
        Ok(())
    }
}
