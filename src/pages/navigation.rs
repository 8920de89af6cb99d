use tracing::debug;

use crate::browser::wait::poll_until;
use crate::capability::ConfigSection;
use crate::error::ConsoleError;
use crate::pages::base::ConsolePage;
use crate::pages::locators::{dashboard, nav};

/// Menu navigation between configuration sections.
pub struct Navigator<'a> {
    page: ConsolePage<'a>,
}

impl<'a> Navigator<'a> {
    pub fn new(page: ConsolePage<'a>) -> Self {
        Self { page }
    }

    pub fn section_link_visible(&mut self, section: ConfigSection) -> Result<bool, ConsoleError> {
        self.page.is_visible(&nav::section_link(section.label()))
    }

    /// Click the section's menu link and wait for its path to load.
    pub fn goto_section(&mut self, section: ConfigSection) -> Result<(), ConsoleError> {
        let link = nav::section_link(section.label());
        self.page
            .require_visible(&link, &format!("{} menu link", section.label()))?;
        self.page.driver.click(&link)?;

        let path = section.path();
        let timeout = self.page.timeouts.default;
        let interval = self.page.timeouts.poll_interval;
        poll_until(self.page.driver, path, timeout, interval, |d| {
            Ok(d.current_url()?.contains(path))
        })?;
        debug!(section = section.label(), "section loaded");
        Ok(())
    }

    /// Return to the dashboard unless already there.
    pub fn ensure_dashboard(&mut self) -> Result<(), ConsoleError> {
        if self.page.driver.count(dashboard::TABLES)? > 0 && self.page.current_path()? == "/" {
            return Ok(());
        }
        self.page.open("/")?;
        let timeout = self.page.timeouts.default;
        self.page.wait_visible(dashboard::TABLES, timeout)
    }
}
