use tracing::info;

use crate::browser::wait::poll_until;
use crate::capability::ConfigSection;
use crate::error::ConsoleError;
use crate::pages::base::{ConsolePage, LoginOutcome};
use crate::pages::locators::{login, nav, unlock};

/// Second-level password prompt that unlocks the configuration menu.
pub struct ConfigurationUnlockPage<'a> {
    page: ConsolePage<'a>,
}

impl<'a> ConfigurationUnlockPage<'a> {
    pub fn new(page: ConsolePage<'a>) -> Self {
        Self { page }
    }

    /// Click the dashboard's locked "Configure" link.
    pub fn open_from_dashboard(&mut self) -> Result<(), ConsoleError> {
        self.page
            .require_visible(unlock::CONFIGURE_LINK, "configure link on dashboard")?;
        self.page.driver.click(unlock::CONFIGURE_LINK)?;
        let timeout = self.page.timeouts.default;
        self.page.wait_visible(unlock::PASSWORD, timeout)
    }

    /// Submit the configuration password. Accepted once the General menu
    /// link shows up.
    pub fn unlock(&mut self, password: &str) -> Result<LoginOutcome, ConsoleError> {
        self.page.driver.fill(unlock::PASSWORD, password)?;
        self.page.driver.click(unlock::SUBMIT)?;

        let general = nav::section_link(ConfigSection::General.label());
        let timeout = self.page.timeouts.long;
        let interval = self.page.timeouts.poll_interval;
        match poll_until(self.page.driver, "configuration menu", timeout, interval, |d| {
            d.is_visible(&general)
        }) {
            Ok(()) => {
                info!("configuration unlocked");
                Ok(LoginOutcome::Accepted)
            }
            Err(e) if e.is_recoverable() => {
                let message = self.page.driver.text(login::ERROR)?;
                Ok(LoginOutcome::Rejected(message))
            }
            Err(e) => Err(e.into()),
        }
    }
}
