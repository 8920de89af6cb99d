use tracing::{debug, info};

use crate::browser::wait::poll_until;
use crate::error::ConsoleError;
use crate::pages::base::{ConsolePage, LoginOutcome};
use crate::pages::locators::login;

/// Status-level login form shown at `/authenticate`.
pub struct LoginPage<'a> {
    page: ConsolePage<'a>,
}

impl<'a> LoginPage<'a> {
    pub fn new(page: ConsolePage<'a>) -> Self {
        Self { page }
    }

    pub fn verify_loaded(&mut self) -> Result<(), ConsoleError> {
        let timeout = self.page.timeouts.default;
        self.page.wait_visible(login::PASSWORD, timeout)
    }

    pub fn is_on_login_page(&mut self) -> Result<bool, ConsoleError> {
        let url = self.page.driver.current_url()?;
        Ok(url.contains(login::AUTH_PATH) || self.page.is_visible(login::PASSWORD)?)
    }

    /// Submit `password` and wait for the console to leave `/authenticate`.
    ///
    /// A visible error message or a URL that never changes is a rejection,
    /// not an error.
    pub fn login(&mut self, password: &str) -> Result<LoginOutcome, ConsoleError> {
        self.verify_loaded()?;
        self.page.driver.fill(login::PASSWORD, password)?;
        self.page.driver.click(login::SUBMIT)?;

        let timeout = self.page.timeouts.default;
        let interval = self.page.timeouts.poll_interval;
        let settled = poll_until(self.page.driver, "login result", timeout, interval, |d| {
            Ok(!d.current_url()?.contains(login::AUTH_PATH) || d.is_visible(login::ERROR)?)
        });

        let url = self.page.driver.current_url()?;
        if !url.contains(login::AUTH_PATH) {
            info!(%url, "login accepted");
            return Ok(LoginOutcome::Accepted);
        }
        if let Err(e) = settled {
            debug!(error = %e, "login did not settle");
        }
        let message = self.authentication_error()?;
        Ok(LoginOutcome::Rejected(message))
    }

    pub fn authentication_error(&mut self) -> Result<Option<String>, ConsoleError> {
        if !self.page.is_visible(login::ERROR)? {
            return Ok(None);
        }
        Ok(self.page.driver.text(login::ERROR)?)
    }
}
