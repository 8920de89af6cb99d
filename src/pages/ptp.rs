use tracing::{debug, info};

use crate::capability::{CapabilityError, ConfigKind, DeviceProfile, PtpProfile};
use crate::error::ConsoleError;
use crate::pages::base::ConsolePage;
use crate::pages::locators::ptp;

/// Per-port PTP configuration on Series 3 devices. Every port sits in a
/// collapsed panel named after the interface.
pub struct PtpConfigPage<'a> {
    page: ConsolePage<'a>,
    profile: &'static DeviceProfile,
}

impl<'a> PtpConfigPage<'a> {
    pub fn new(page: ConsolePage<'a>, profile: &'static DeviceProfile) -> Self {
        Self { page, profile }
    }

    /// PTP-capable ports, from the capability table rather than the DOM.
    pub fn available_ports(&self) -> &'static [&'static str] {
        self.profile.ptp_interfaces
    }

    fn check_port(&self, port: &str) -> Result<(), ConsoleError> {
        if self.profile.is_ptp_interface(port) {
            Ok(())
        } else {
            Err(CapabilityError::NotPtpCapable {
                model: self.profile.model.to_string(),
                interface: port.to_string(),
            }
            .into())
        }
    }

    pub fn is_panel_expanded(&mut self, port: &str) -> Result<bool, ConsoleError> {
        self.check_port(port)?;
        self.page.is_panel_expanded(port)
    }

    pub fn expand_panel(&mut self, port: &str) -> Result<(), ConsoleError> {
        self.check_port(port)?;
        self.page.expand_panel(port)
    }

    pub fn profile_options(&mut self, port: &str) -> Result<Vec<String>, ConsoleError> {
        self.expand_panel(port)?;
        Ok(self.page.driver.option_texts(&ptp::profile(port))?)
    }

    pub fn selected_profile(&mut self, port: &str) -> Result<Option<PtpProfile>, ConsoleError> {
        self.expand_panel(port)?;
        let label = self.page.driver.selected_option(&ptp::profile(port))?;
        Ok(label.as_deref().and_then(PtpProfile::from_label))
    }

    pub fn configure_profile(&mut self, port: &str, profile: PtpProfile) -> Result<(), ConsoleError> {
        self.expand_panel(port)?;
        let select = ptp::profile(port);
        self.page.require_visible(&select, "PTP profile select")?;
        self.page.driver.select_option(&select, profile.label())?;
        debug!(port, profile = profile.label(), "ptp profile selected");
        Ok(())
    }

    /// `field` is the form field stem, e.g. `priority_1` or `domain_number`.
    pub fn field_read_only(&mut self, port: &str, field: &str) -> Result<bool, ConsoleError> {
        self.expand_panel(port)?;
        self.page.is_read_only(&ptp::field(port, field))
    }

    pub fn field_value(&mut self, port: &str, field: &str) -> Result<Option<String>, ConsoleError> {
        self.expand_panel(port)?;
        Ok(self.page.driver.input_value(&ptp::field(port, field))?)
    }

    pub fn delay_mechanism_enabled(&mut self, port: &str) -> Result<bool, ConsoleError> {
        self.expand_panel(port)?;
        Ok(self.page.driver.is_enabled(&ptp::delay_mechanism(port))?)
    }

    pub fn delay_mechanism_options(&mut self, port: &str) -> Result<Vec<String>, ConsoleError> {
        self.expand_panel(port)?;
        Ok(self.page.driver.option_texts(&ptp::delay_mechanism(port))?)
    }

    pub fn network_transport_options(&mut self, port: &str) -> Result<Vec<String>, ConsoleError> {
        self.expand_panel(port)?;
        Ok(self.page.driver.option_texts(&ptp::network_transport(port))?)
    }

    pub fn set_domain_number(&mut self, port: &str, domain: u8) -> Result<(), ConsoleError> {
        self.expand_panel(port)?;
        let selector = ptp::field(port, "domain_number");
        self.page.require_visible(&selector, "PTP domain number")?;
        self.page.driver.fill(&selector, &domain.to_string())?;
        Ok(())
    }

    /// Whether the port's save button is currently clickable.
    pub fn save_enabled(&mut self, port: &str) -> Result<bool, ConsoleError> {
        let button = self.profile.save_button(ConfigKind::Ptp, Some(port))?;
        if button.panel_expansion_required {
            self.page.expand_panel(port)?;
        }
        Ok(self.page.driver.is_enabled(&button.selector)?)
    }

    pub fn save_port(&mut self, port: &str) -> Result<(), ConsoleError> {
        let button = self.profile.save_button(ConfigKind::Ptp, Some(port))?;
        if button.panel_expansion_required {
            self.page.expand_panel(port)?;
        }
        self.page.require_visible(&button.selector, "PTP port save button")?;
        self.page.driver.click(&button.selector)?;
        info!(port, "ptp port saved");
        Ok(())
    }
}
