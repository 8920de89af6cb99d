use serde::Serialize;
use tracing::{info, warn};

use crate::browser::ConsoleDriver;
use crate::browser::DriverError;
use crate::browser::wait::navigate_with_retry;
use crate::capability::{DeviceProfile, lookup};
use crate::error::ConsoleError;
use crate::pages::base::{ConsolePage, LoginOutcome};
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::timeouts::Timeouts;
use crate::pages::unlock::ConfigurationUnlockPage;

pub const NAVIGATION_RETRIES: u32 = 3;

/// The appliance under test.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceTarget {
    pub ip: String,
    pub base_url: String,
    #[serde(skip)]
    pub password: String,
    /// Accept the device's self-signed certificate in direct HTTP probes.
    pub ignore_ssl: bool,
}

impl DeviceTarget {
    /// The console is served over HTTPS. When only the HTTP fallback
    /// answers, the session switches `base_url` to HTTP for good.
    pub fn new(ip: &str, password: &str, ignore_ssl: bool) -> Self {
        Self {
            ip: ip.to_string(),
            base_url: format!("https://{}", ip),
            password: password.to_string(),
            ignore_ssl,
        }
    }
}

/// One browser driving one device.
///
/// The detected capability profile is cached for the life of the session;
/// browser contexts come and go between scenarios but the model does not.
pub struct DeviceSession {
    driver: Box<dyn ConsoleDriver>,
    target: DeviceTarget,
    profile: Option<&'static DeviceProfile>,
}

impl DeviceSession {
    pub fn new(driver: Box<dyn ConsoleDriver>, target: DeviceTarget) -> Self {
        Self {
            driver,
            target,
            profile: None,
        }
    }

    pub fn target(&self) -> &DeviceTarget {
        &self.target
    }

    pub fn detected(&self) -> Option<&'static DeviceProfile> {
        self.profile
    }

    pub fn profile(&self) -> Result<&'static DeviceProfile, ConsoleError> {
        self.profile.ok_or(ConsoleError::NotDetected)
    }

    pub fn timeouts(&self) -> Timeouts {
        Timeouts::for_profile(self.profile)
    }

    pub fn driver(&mut self) -> &mut dyn ConsoleDriver {
        self.driver.as_mut()
    }

    pub fn page(&mut self) -> ConsolePage<'_> {
        let timeouts = self.timeouts();
        ConsolePage::new(self.driver.as_mut(), &self.target.base_url, timeouts)
    }

    /// New browser context: no cookies, no session.
    pub fn fresh(&mut self) -> Result<(), ConsoleError> {
        self.driver.reset_context()?;
        let timeout = self.timeouts().default;
        self.driver.set_timeout(timeout)?;
        Ok(())
    }

    /// Load the console root, which lands on the login form when signed out.
    pub fn open_console(&mut self) -> Result<(), ConsoleError> {
        let url = self.target.base_url.clone();
        if !navigate_with_retry(self.driver.as_mut(), &url, NAVIGATION_RETRIES)? {
            return Err(DriverError::Timeout {
                what: format!("console at {}", url),
                attempts: NAVIGATION_RETRIES,
            }
            .into());
        }
        let landed = self.driver.current_url()?;
        if url.starts_with("https://") && landed.starts_with("http://") {
            let fallback = format!("http://{}", self.target.ip);
            warn!(base_url = %fallback, "console only answered over HTTP");
            self.target.base_url = fallback;
        }
        Ok(())
    }

    /// Status login, then model detection.
    ///
    /// Navigation retries leave their own per-attempt timeout on the
    /// driver, so the model's default is reapplied before the form.
    pub fn login(&mut self) -> Result<&'static DeviceProfile, ConsoleError> {
        self.open_console()?;
        let timeout = self.timeouts().default;
        self.driver.set_timeout(timeout)?;
        let password = self.target.password.clone();
        match LoginPage::new(self.page()).login(&password)? {
            LoginOutcome::Accepted => {}
            LoginOutcome::Rejected(message) => {
                return Err(ConsoleError::AuthenticationFailed(
                    message.unwrap_or_else(|| "status password rejected".into()),
                ));
            }
        }
        self.detect()
    }

    /// Resolve the model shown on the dashboard. Runs once per session; an
    /// unknown model is an error, never a default.
    pub fn detect(&mut self) -> Result<&'static DeviceProfile, ConsoleError> {
        if let Some(profile) = self.profile {
            return Ok(profile);
        }
        let model = DashboardPage::new(self.page()).model_number()?;
        let profile = lookup(&model)?;
        info!(
            model = profile.model,
            series = %profile.series,
            multiplier = profile.timeout_multiplier(),
            "device detected"
        );
        self.profile = Some(profile);
        let timeout = self.timeouts().default;
        self.driver.set_timeout(timeout)?;
        Ok(profile)
    }

    /// Status login followed by the configuration unlock.
    pub fn unlock(&mut self) -> Result<&'static DeviceProfile, ConsoleError> {
        let profile = self.login()?;
        let password = self.target.password.clone();
        let mut unlock = ConfigurationUnlockPage::new(self.page());
        unlock.open_from_dashboard()?;
        match unlock.unlock(&password)? {
            LoginOutcome::Accepted => Ok(profile),
            LoginOutcome::Rejected(message) => Err(ConsoleError::AuthenticationFailed(
                message.unwrap_or_else(|| "configuration password rejected".into()),
            )),
        }
    }

    pub fn screenshot(&mut self, path: &str) -> Result<(), ConsoleError> {
        self.driver.screenshot(path)?;
        Ok(())
    }
}
