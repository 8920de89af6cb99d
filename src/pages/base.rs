use std::time::Duration;

use tracing::debug;

use crate::browser::ConsoleDriver;
use crate::browser::wait::poll_until;
use crate::error::ConsoleError;
use crate::pages::locators::panel;
use crate::pages::timeouts::Timeouts;

/// Result of submitting a password form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    /// Still on the form; carries the error text the console showed, if any.
    Rejected(Option<String>),
}

impl LoginOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, LoginOutcome::Accepted)
    }
}

/// Shared handle every page object wraps: the driver, the device base URL
/// and the wait budgets for the detected model.
pub struct ConsolePage<'a> {
    pub driver: &'a mut dyn ConsoleDriver,
    pub base_url: &'a str,
    pub timeouts: Timeouts,
}

impl<'a> ConsolePage<'a> {
    pub fn new(driver: &'a mut dyn ConsoleDriver, base_url: &'a str, timeouts: Timeouts) -> Self {
        Self {
            driver,
            base_url,
            timeouts,
        }
    }

    /// Absolute URL for a console path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn open(&mut self, path: &str) -> Result<(), ConsoleError> {
        let url = self.url(path);
        debug!(%url, "open");
        self.driver.navigate(&url)?;
        Ok(())
    }

    pub fn current_path(&mut self) -> Result<String, ConsoleError> {
        let url = self.driver.current_url()?;
        Ok(url
            .strip_prefix(self.base_url.trim_end_matches('/'))
            .map(str::to_string)
            .unwrap_or(url))
    }

    pub fn wait_visible(&mut self, selector: &str, timeout: Duration) -> Result<(), ConsoleError> {
        let interval = self.timeouts.poll_interval;
        poll_until(self.driver, selector, timeout, interval, |d| d.is_visible(selector))?;
        Ok(())
    }

    /// Wait until the browser URL no longer contains `fragment`.
    pub fn wait_url_leaves(&mut self, fragment: &str, timeout: Duration) -> Result<(), ConsoleError> {
        let interval = self.timeouts.poll_interval;
        let what = format!("url to leave {}", fragment);
        poll_until(self.driver, &what, timeout, interval, |d| {
            Ok(!d.current_url()?.contains(fragment))
        })?;
        Ok(())
    }

    pub fn is_visible(&mut self, selector: &str) -> Result<bool, ConsoleError> {
        Ok(self.driver.is_visible(selector)?)
    }

    pub fn require_visible(&mut self, selector: &str, context: &str) -> Result<(), ConsoleError> {
        if self.driver.is_visible(selector)? {
            Ok(())
        } else {
            Err(ConsoleError::missing(selector, context))
        }
    }

    /// Read-only when the input carries `readonly` or is disabled.
    pub fn is_read_only(&mut self, selector: &str) -> Result<bool, ConsoleError> {
        if self.driver.attribute(selector, "readonly")?.is_some() {
            return Ok(true);
        }
        Ok(!self.driver.is_enabled(selector)?)
    }

    /// Bootstrap collapse panels are open when the body has `in` or `show`.
    pub fn is_panel_expanded(&mut self, id: &str) -> Result<bool, ConsoleError> {
        let class = self.driver.attribute(&panel::collapse(id), "class")?;
        Ok(class
            .map(|c| c.split_whitespace().any(|t| t == "in" || t == "show"))
            .unwrap_or(false))
    }

    pub fn expand_panel(&mut self, id: &str) -> Result<(), ConsoleError> {
        if self.is_panel_expanded(id)? {
            return Ok(());
        }
        let toggle = panel::toggle(id);
        self.require_visible(&toggle, "panel toggle")?;
        self.driver.click(&toggle)?;

        let timeout = self.timeouts.short;
        let interval = self.timeouts.poll_interval;
        let collapse = panel::collapse(id);
        poll_until(self.driver, &collapse, timeout, interval, |d| {
            let class = d.attribute(&collapse, "class")?.unwrap_or_default();
            Ok(class.split_whitespace().any(|t| t == "in" || t == "show"))
        })?;
        Ok(())
    }
}
