use crate::error::ConsoleError;
use crate::pages::base::ConsolePage;
use crate::pages::locators::{display, form};

/// Front-panel display modes, one checkbox each.
pub struct DisplayConfigPage<'a> {
    page: ConsolePage<'a>,
}

impl<'a> DisplayConfigPage<'a> {
    pub fn new(page: ConsolePage<'a>) -> Self {
        Self { page }
    }

    pub fn verify_loaded(&mut self) -> Result<(), ConsoleError> {
        let timeout = self.page.timeouts.default;
        self.page.wait_visible(&display::mode(1), timeout)
    }

    /// Modes that are rendered as visible checkboxes.
    pub fn checkbox_modes(&mut self) -> Result<Vec<u8>, ConsoleError> {
        let mut modes = Vec::new();
        for n in 1..=display::MODES {
            let selector = display::mode(n);
            if !self.page.driver.is_visible(&selector)? {
                continue;
            }
            if self.page.driver.attribute(&selector, "type")?.as_deref() == Some("checkbox") {
                modes.push(n);
            }
        }
        Ok(modes)
    }

    pub fn mode_checked(&mut self, n: u8) -> Result<bool, ConsoleError> {
        Ok(self.page.driver.is_checked(&display::mode(n))?)
    }

    pub fn toggle_mode(&mut self, n: u8) -> Result<bool, ConsoleError> {
        let selector = display::mode(n);
        self.page.require_visible(&selector, "display mode checkbox")?;
        let before = self.page.driver.is_checked(&selector)?;
        self.page.driver.set_checked(&selector, !before)?;
        Ok(self.page.driver.is_checked(&selector)?)
    }

    pub fn save_enabled(&mut self) -> Result<bool, ConsoleError> {
        Ok(self.page.driver.is_enabled(form::SAVE)?)
    }
}
