use std::collections::BTreeMap;

use crate::error::ConsoleError;
use crate::pages::base::ConsolePage;
use crate::pages::locators::dashboard;

/// Status dashboard shown after login: time, GNSS, device info and
/// satellite tables.
pub struct DashboardPage<'a> {
    page: ConsolePage<'a>,
}

impl<'a> DashboardPage<'a> {
    pub fn new(page: ConsolePage<'a>) -> Self {
        Self { page }
    }

    pub fn status_table_count(&mut self) -> Result<u32, ConsoleError> {
        Ok(self.page.driver.count(dashboard::TABLES)?)
    }

    /// Key/value rows of the device information table. Rows without two
    /// cells are skipped.
    pub fn device_info(&mut self) -> Result<BTreeMap<String, String>, ConsoleError> {
        let timeout = self.page.timeouts.default;
        self.page.wait_visible(dashboard::DEVICE_INFO_TABLE, timeout)?;
        let rows = self.page.driver.table_rows(dashboard::DEVICE_INFO_TABLE)?;
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let mut cells = row.into_iter();
                let key = cells.next()?;
                let value = cells.next()?;
                let key = key.trim().trim_end_matches(':').trim().to_string();
                (!key.is_empty()).then(|| (key, value.trim().to_string()))
            })
            .collect())
    }

    /// Hardware model string as shown in the "Model Number" row.
    pub fn model_number(&mut self) -> Result<String, ConsoleError> {
        self.device_info()?
            .remove(dashboard::MODEL_KEY)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| {
                ConsoleError::missing(dashboard::DEVICE_INFO_TABLE, "Model Number row on dashboard")
            })
    }

    pub fn is_configuration_locked(&mut self) -> Result<bool, ConsoleError> {
        self.page.is_visible(dashboard::LOCKED_INDICATOR)
    }
}
