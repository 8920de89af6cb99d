use crate::error::ConsoleError;
use crate::pages::base::ConsolePage;
use crate::pages::locators::snmp;

/// SNMP form sections, each with its own save and cancel buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnmpSection {
    V1V2c,
    Traps,
    V3,
}

impl SnmpSection {
    fn index(self) -> u8 {
        match self {
            SnmpSection::V1V2c => 1,
            SnmpSection::Traps => 2,
            SnmpSection::V3 => 3,
        }
    }
}

pub struct SnmpConfigPage<'a> {
    page: ConsolePage<'a>,
}

impl<'a> SnmpConfigPage<'a> {
    pub fn new(page: ConsolePage<'a>) -> Self {
        Self { page }
    }

    pub fn verify_loaded(&mut self) -> Result<(), ConsoleError> {
        let timeout = self.page.timeouts.default;
        self.page.wait_visible(snmp::RO_COMMUNITY_1, timeout)
    }

    pub fn community(&mut self, slot: u8) -> Result<Option<String>, ConsoleError> {
        let selector = match slot {
            1 => snmp::RO_COMMUNITY_1,
            _ => snmp::RO_COMMUNITY_2,
        };
        Ok(self.page.driver.input_value(selector)?)
    }

    pub fn set_community(&mut self, slot: u8, value: &str) -> Result<(), ConsoleError> {
        let selector = match slot {
            1 => snmp::RO_COMMUNITY_1,
            _ => snmp::RO_COMMUNITY_2,
        };
        self.page.require_visible(selector, "read-only community field")?;
        self.page.driver.fill(selector, value)?;
        Ok(())
    }

    pub fn trap_fields_present(&mut self) -> Result<bool, ConsoleError> {
        Ok(self.page.driver.count(snmp::TRAP_COMMUNITY)? > 0
            && self.page.driver.count(snmp::TRAP_DESTINATION)? > 0)
    }

    pub fn set_trap_destination(&mut self, host: &str) -> Result<(), ConsoleError> {
        self.page.require_visible(snmp::TRAP_DESTINATION, "trap destination")?;
        self.page.driver.fill(snmp::TRAP_DESTINATION, host)?;
        Ok(())
    }

    pub fn v3_enable_present(&mut self) -> Result<bool, ConsoleError> {
        Ok(self.page.driver.count(snmp::V3_ENABLE)? > 0)
    }

    pub fn save_present(&mut self, section: SnmpSection) -> Result<bool, ConsoleError> {
        Ok(self.page.driver.count(&snmp::save(section.index()))? > 0)
    }

    pub fn cancel_present(&mut self, section: SnmpSection) -> Result<bool, ConsoleError> {
        Ok(self.page.driver.count(&snmp::cancel(section.index()))? > 0)
    }

    pub fn cancel(&mut self, section: SnmpSection) -> Result<(), ConsoleError> {
        let selector = snmp::cancel(section.index());
        self.page.require_visible(&selector, "SNMP cancel button")?;
        self.page.driver.click(&selector)?;
        Ok(())
    }
}
