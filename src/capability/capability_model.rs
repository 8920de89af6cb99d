use std::fmt;

use serde::Serialize;

// ============================================================================
// Device capability model: static records describing each supported model
// ============================================================================

/// Hardware generation. PTP exists only on Series 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Series {
    Two,
    Three,
}

impl Series {
    pub fn number(self) -> u8 {
        match self {
            Series::Two => 2,
            Series::Three => 3,
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Series {}", self.number())
    }
}

/// A configurable field inside a network interface panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceField {
    Ip,
    Mask,
    Mtu,
    Redundancy,
    Ntp,
    Ptp,
    Snmp,
    Vlan,
    ChangeIp,
}

impl InterfaceField {
    /// Field token as it appears in element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            InterfaceField::Ip => "ip",
            InterfaceField::Mask => "mask",
            InterfaceField::Mtu => "mtu",
            InterfaceField::Redundancy => "redundancy",
            InterfaceField::Ntp => "ntp",
            InterfaceField::Ptp => "ptp",
            InterfaceField::Snmp => "snmp",
            InterfaceField::Vlan => "vlan",
            InterfaceField::ChangeIp => "changeip",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterfaceSpec {
    pub name: &'static str,
    pub fields: &'static [InterfaceField],
}

/// Everything the suite knows about one device model.
///
/// Records live in [`crate::capability::table::DEVICE_TABLE`] and are never
/// mutated; lookups hand out `&'static` references.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviceProfile {
    pub model: &'static str,
    pub series: Series,
    pub serial_number: &'static str,
    pub firmware_version: &'static str,
    pub interfaces: &'static [InterfaceSpec],
    /// PTP-capable interfaces, in panel order.
    pub ptp_interfaces: &'static [&'static str],
    pub max_outputs: u8,
    pub gnss_constellations: &'static [&'static str],
    pub known_issues: &'static [&'static str],
    pub timezones: &'static [&'static str],
    pub session_timeout_minutes: u32,
    pub max_concurrent_sessions: u32,
    /// Whether plain HTTP is redirected to HTTPS out of the box.
    pub http_redirect: bool,
}

/// Top-level configuration pages reachable from the console menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSection {
    General,
    Network,
    Time,
    Gnss,
    Outputs,
    Display,
    Access,
    Snmp,
    Syslog,
    Upload,
    Ptp,
}

impl ConfigSection {
    pub const BASE: [ConfigSection; 9] = [
        ConfigSection::General,
        ConfigSection::Network,
        ConfigSection::Time,
        ConfigSection::Gnss,
        ConfigSection::Outputs,
        ConfigSection::Display,
        ConfigSection::Access,
        ConfigSection::Snmp,
        ConfigSection::Syslog,
    ];

    pub fn path(self) -> &'static str {
        match self {
            ConfigSection::General => "/general",
            ConfigSection::Network => "/network",
            ConfigSection::Time => "/time",
            ConfigSection::Gnss => "/gnss",
            ConfigSection::Outputs => "/outputs",
            ConfigSection::Display => "/display",
            ConfigSection::Access => "/access",
            ConfigSection::Snmp => "/snmp",
            ConfigSection::Syslog => "/syslog",
            ConfigSection::Upload => "/upload",
            ConfigSection::Ptp => "/ptp",
        }
    }

    /// Text of the menu link.
    pub fn label(self) -> &'static str {
        match self {
            ConfigSection::General => "General",
            ConfigSection::Network => "Network",
            ConfigSection::Time => "Time",
            ConfigSection::Gnss => "GNSS",
            ConfigSection::Outputs => "Outputs",
            ConfigSection::Display => "Display",
            ConfigSection::Access => "Access",
            ConfigSection::Snmp => "SNMP",
            ConfigSection::Syslog => "Syslog",
            ConfigSection::Upload => "Upload",
            ConfigSection::Ptp => "PTP",
        }
    }
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Signal choice for a timing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalType {
    Off,
    /// IRIG-B with its three-digit format code (`122` for IRIG-B122).
    IrigB(u16),
    Pps,
    Ppm,
}

impl SignalType {
    /// Parse the option text shown by the outputs page.
    pub fn parse(text: &str) -> Option<SignalType> {
        let text = text.trim();
        match text {
            "OFF" => Some(SignalType::Off),
            "PPS" => Some(SignalType::Pps),
            "PPM" => Some(SignalType::Ppm),
            _ => {
                let code = text.strip_prefix("IRIG-B")?;
                if code.len() != 3 {
                    return None;
                }
                code.parse().ok().map(SignalType::IrigB)
            }
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalType::Off => f.write_str("OFF"),
            SignalType::IrigB(code) => write!(f, "IRIG-B{:03}", code),
            SignalType::Pps => f.write_str("PPS"),
            SignalType::Ppm => f.write_str("PPM"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeReference {
    #[serde(rename = "UTC")]
    Utc,
    #[serde(rename = "LOCAL")]
    Local,
}

impl TimeReference {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeReference::Utc => "UTC",
            TimeReference::Local => "LOCAL",
        }
    }
}

/// What kind of form a save button belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Network,
    Ptp,
    Time,
    Outputs,
    General,
    Other,
}

/// Where to find the save button for a form, and whether its panel
/// must be expanded first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveButton {
    pub selector: String,
    pub panel_expansion_required: bool,
}
