use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use serde::Serialize;
use tracing::debug;

use crate::error::ConsoleError;

pub const DASHBOARD_PATH: &str = "/";
/// Target of the dashboard's "Configure" link.
pub const CONFIG_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => f.write_str("http"),
            Protocol::Https => f.write_str("https"),
        }
    }
}

/// The access page's `enforce_https` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HttpsEnforcement {
    #[serde(rename = "NEVER")]
    Never,
    #[serde(rename = "CFG_ONLY")]
    CfgOnly,
    #[serde(rename = "ALWAYS")]
    Always,
}

impl HttpsEnforcement {
    /// Accepts the option value or its label, any case.
    pub fn parse(text: &str) -> Option<Self> {
        let normalized = text.trim().to_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "NEVER" => Some(HttpsEnforcement::Never),
            "CFG_ONLY" | "CONFIG_ONLY" | "CONFIGURATION_ONLY" => Some(HttpsEnforcement::CfgOnly),
            "ALWAYS" => Some(HttpsEnforcement::Always),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpsEnforcement::Never => "NEVER",
            HttpsEnforcement::CfgOnly => "CFG_ONLY",
            HttpsEnforcement::Always => "ALWAYS",
        }
    }

    /// Protocols the dashboard and configuration pages should be served on.
    pub fn expected_protocols(self) -> (Protocol, Protocol) {
        match self {
            HttpsEnforcement::Never => (Protocol::Http, Protocol::Http),
            HttpsEnforcement::CfgOnly => (Protocol::Http, Protocol::Https),
            HttpsEnforcement::Always => (Protocol::Https, Protocol::Https),
        }
    }

    /// The mode that explains an observed protocol pair, if any does.
    pub fn infer(dashboard: Protocol, config: Protocol) -> Option<Self> {
        [
            HttpsEnforcement::Never,
            HttpsEnforcement::CfgOnly,
            HttpsEnforcement::Always,
        ]
        .into_iter()
        .find(|mode| mode.expected_protocols() == (dashboard, config))
    }
}

impl fmt::Display for HttpsEnforcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compare observed protocols with what `mode` promises.
pub fn check_consistency(
    mode: HttpsEnforcement,
    dashboard: Protocol,
    config: Protocol,
) -> Result<(), String> {
    let (want_dashboard, want_config) = mode.expected_protocols();
    let mut problems = Vec::new();
    if dashboard != want_dashboard {
        problems.push(format!("dashboard served over {}, expected {}", dashboard, want_dashboard));
    }
    if config != want_config {
        problems.push(format!("configuration served over {}, expected {}", config, want_config));
    }
    if problems.is_empty() {
        Ok(())
    } else {
        Err(format!("{} mode: {}", mode, problems.join("; ")))
    }
}

/// A plain-HTTP answer that redirects to `https://` means HTTPS is enforced
/// for that path.
pub fn classify_response(status: u16, location: Option<&str>) -> Protocol {
    let redirected = (300..400).contains(&status);
    match location {
        Some(loc) if redirected && loc.trim_start().to_lowercase().starts_with("https://") => {
            Protocol::Https
        }
        _ => Protocol::Http,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub host: String,
    pub https_available: bool,
    pub dashboard: Protocol,
    pub config: Protocol,
    pub inferred_mode: Option<HttpsEnforcement>,
}

/// Direct HTTP(S) checks against the device, outside the browser.
pub struct ProtocolProbe {
    client: Client,
    host: String,
}

impl ProtocolProbe {
    pub fn new(host: &str, ignore_ssl: bool, timeout: Duration) -> Result<Self, ConsoleError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .danger_accept_invalid_certs(ignore_ssl)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            host: host.to_string(),
        })
    }

    /// Protocol `path` ends up on when requested over plain HTTP.
    pub fn served_protocol(&self, path: &str) -> Result<Protocol, ConsoleError> {
        let url = format!("http://{}{}", self.host, path);
        let response = self.client.get(&url).send()?;
        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        debug!(%url, status, location = ?location, "protocol probe");
        Ok(classify_response(status, location.as_deref()))
    }

    /// Whether the HTTPS listener answers at all.
    pub fn https_available(&self) -> bool {
        let url = format!("https://{}{}", self.host, DASHBOARD_PATH);
        match self.client.get(&url).send() {
            Ok(_) => true,
            Err(e) => {
                debug!(%url, error = %e, "https unavailable");
                false
            }
        }
    }

    pub fn run(&self) -> Result<ProbeReport, ConsoleError> {
        let dashboard = self.served_protocol(DASHBOARD_PATH)?;
        let config = self.served_protocol(CONFIG_PATH)?;
        Ok(ProbeReport {
            host: self.host.clone(),
            https_available: self.https_available(),
            dashboard,
            config,
            inferred_mode: HttpsEnforcement::infer(dashboard, config),
        })
    }
}
