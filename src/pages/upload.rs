use crate::error::ConsoleError;
use crate::pages::base::ConsolePage;
use crate::pages::locators::upload;

/// Firmware upload form (Series 3). Submitting flashes the device, so only
/// the form itself is inspected.
pub struct UploadConfigPage<'a> {
    page: ConsolePage<'a>,
}

impl<'a> UploadConfigPage<'a> {
    pub fn new(page: ConsolePage<'a>) -> Self {
        Self { page }
    }

    pub fn verify_loaded(&mut self) -> Result<(), ConsoleError> {
        let timeout = self.page.timeouts.default;
        self.page.wait_visible(upload::FILE_INPUT, timeout)
    }

    pub fn file_input_present(&mut self) -> Result<bool, ConsoleError> {
        Ok(self.page.driver.count(upload::FILE_INPUT)? > 0)
    }

    pub fn submit_present(&mut self) -> Result<bool, ConsoleError> {
        self.page.is_visible(upload::SUBMIT)
    }

    /// Whether a completion or rejection banner is showing.
    pub fn result_shown(&mut self) -> Result<bool, ConsoleError> {
        Ok(self.page.is_visible(upload::SUCCESS)? || self.page.is_visible(upload::FAILURE)?)
    }
}
