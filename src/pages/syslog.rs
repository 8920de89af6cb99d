use crate::error::ConsoleError;
use crate::pages::base::ConsolePage;
use crate::pages::locators::syslog;

/// Syslog page with two independent remote targets.
pub struct SyslogConfigPage<'a> {
    page: ConsolePage<'a>,
}

impl<'a> SyslogConfigPage<'a> {
    pub const TARGETS: usize = 2;

    pub fn new(page: ConsolePage<'a>) -> Self {
        Self { page }
    }

    pub fn verify_loaded(&mut self) -> Result<(), ConsoleError> {
        let timeout = self.page.timeouts.default;
        self.page.wait_visible(syslog::SERVERS, timeout)
    }

    pub fn target_count(&mut self) -> Result<usize, ConsoleError> {
        Ok(self.page.driver.count(syslog::SERVERS)? as usize)
    }

    /// Flip target `index` (0-based) and report whether the checkbox changed.
    pub fn toggle_target(&mut self, index: usize) -> Result<bool, ConsoleError> {
        let selector = format!("{} >> nth={}", syslog::ENABLE_CHECKBOXES, index);
        self.page.require_visible(&selector, "syslog enable checkbox")?;
        let before = self.page.driver.is_checked(&selector)?;
        self.page.driver.set_checked(&selector, !before)?;
        Ok(self.page.driver.is_checked(&selector)? != before)
    }

    pub fn port_value(&mut self, index: usize) -> Result<Option<String>, ConsoleError> {
        let selector = format!("{} >> nth={}", syslog::PORTS, index);
        Ok(self.page.driver.input_value(&selector)?)
    }

    /// Target `a` or `b`.
    pub fn protocol_options(&mut self, target: char) -> Result<Vec<String>, ConsoleError> {
        Ok(self.page.driver.option_texts(&syslog::protocol(target))?)
    }

    pub fn facility_options(&mut self) -> Result<Vec<String>, ConsoleError> {
        Ok(self.page.driver.option_texts(syslog::FACILITY)?)
    }

    pub fn severity_options(&mut self) -> Result<Vec<String>, ConsoleError> {
        Ok(self.page.driver.option_texts(syslog::SEVERITY)?)
    }
}
