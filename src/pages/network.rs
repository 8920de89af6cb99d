use crate::capability::{ConfigKind, DeviceProfile, InterfaceField, Series};
use crate::error::ConsoleError;
use crate::pages::base::ConsolePage;
use crate::pages::locators::{network, panel};

/// Network page. Series 3 shows one collapsible panel per interface;
/// Series 2 has a single form.
pub struct NetworkConfigPage<'a> {
    page: ConsolePage<'a>,
    profile: &'static DeviceProfile,
}

impl<'a> NetworkConfigPage<'a> {
    pub fn new(page: ConsolePage<'a>, profile: &'static DeviceProfile) -> Self {
        Self { page, profile }
    }

    pub fn verify_loaded(&mut self) -> Result<(), ConsoleError> {
        let timeout = self.page.timeouts.default;
        let marker = match self.profile.series {
            Series::Three => network::MODE,
            Series::Two => network::GATEWAY,
        };
        self.page.wait_visible(marker, timeout)
    }

    pub fn interface_panel_present(&mut self, iface: &str) -> Result<bool, ConsoleError> {
        self.profile.interface(iface)?;
        Ok(self.page.driver.count(&network::interface_ip(iface))? > 0
            || self.page.driver.count(&panel::collapse(iface))? > 0)
    }

    /// Whether `field` is rendered for `iface`. Panels are expanded first
    /// on Series 3.
    pub fn field_present(&mut self, iface: &str, field: InterfaceField) -> Result<bool, ConsoleError> {
        self.profile.interface(iface)?;
        if self.profile.series == Series::Three {
            self.page.expand_panel(iface)?;
        }
        let selector = self.profile.field_selector(field, iface);
        Ok(self.page.driver.count(&selector)? > 0)
    }

    pub fn gateway_value(&mut self) -> Result<Option<String>, ConsoleError> {
        Ok(self.page.driver.input_value(network::GATEWAY)?)
    }

    pub fn ntp_enabled(&mut self, iface: &str) -> Result<bool, ConsoleError> {
        let selector = self.profile.field_selector(InterfaceField::Ntp, iface);
        Ok(self.page.driver.is_checked(&selector)?)
    }

    /// Whether the save button for `iface` is rendered.
    pub fn save_button_present(&mut self, iface: &str) -> Result<bool, ConsoleError> {
        let button = self.profile.save_button(ConfigKind::Network, Some(iface))?;
        if button.panel_expansion_required {
            self.page.expand_panel(iface)?;
        }
        Ok(self.page.driver.count(&button.selector)? > 0)
    }
}
