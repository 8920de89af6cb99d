use crate::error::ConsoleError;
use crate::pages::base::ConsolePage;
use crate::pages::locators::access;
use crate::probe::HttpsEnforcement;

pub struct AccessConfigPage<'a> {
    page: ConsolePage<'a>,
}

impl<'a> AccessConfigPage<'a> {
    pub fn new(page: ConsolePage<'a>) -> Self {
        Self { page }
    }

    pub fn verify_loaded(&mut self) -> Result<(), ConsoleError> {
        let timeout = self.page.timeouts.default;
        self.page.wait_visible(access::STATUS_PASSWORD, timeout)
    }

    /// Status, configuration and upload password inputs that are present.
    pub fn password_fields(&mut self) -> Result<Vec<&'static str>, ConsoleError> {
        let mut present = Vec::new();
        for selector in [
            access::STATUS_PASSWORD,
            access::CONFIG_PASSWORD,
            access::UPLOAD_PASSWORD,
        ] {
            if self.page.driver.count(selector)? > 0 {
                present.push(selector);
            }
        }
        Ok(present)
    }

    /// Whether every present password input masks its value.
    pub fn passwords_masked(&mut self) -> Result<bool, ConsoleError> {
        for selector in self.password_fields()? {
            let kind = self.page.driver.attribute(selector, "type")?;
            if kind.as_deref() != Some("password") {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Current HTTPS enforcement setting. Firmware without the select
    /// behaves as `Never`.
    pub fn https_enforcement(&mut self) -> Result<HttpsEnforcement, ConsoleError> {
        if self.page.driver.count(access::ENFORCE_HTTPS)? == 0 {
            return Ok(HttpsEnforcement::Never);
        }
        let selected = self.page.driver.selected_option(access::ENFORCE_HTTPS)?;
        Ok(selected
            .as_deref()
            .and_then(HttpsEnforcement::parse)
            .unwrap_or(HttpsEnforcement::Never))
    }
}
