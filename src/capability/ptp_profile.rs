use std::fmt;

use serde::Serialize;

/// PTP profiles offered by the per-port profile select on Series 3 devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PtpProfile {
    PowerC37_238_2011,
    PowerC37_238_2017,
    UtilityIec61850_9_3,
    DefaultUdpV4,
    Default802_3,
    TelecomG8265_1,
    TelecomG8275_1,
    TelecomG8275_2,
    Custom,
}

/// Constraint a profile places on one port field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConstraint {
    pub hidden: bool,
    pub read_only: bool,
    pub default_value: u32,
}

const ALL: [PtpProfile; 9] = [
    PtpProfile::PowerC37_238_2011,
    PtpProfile::PowerC37_238_2017,
    PtpProfile::UtilityIec61850_9_3,
    PtpProfile::DefaultUdpV4,
    PtpProfile::Default802_3,
    PtpProfile::TelecomG8265_1,
    PtpProfile::TelecomG8275_1,
    PtpProfile::TelecomG8275_2,
    PtpProfile::Custom,
];

pub const DELAY_MECHANISMS: &[&str] = &["P2P", "E2E"];
pub const NETWORK_TRANSPORTS: &[&str] = &["L2", "UDPv4"];

impl PtpProfile {
    pub fn all() -> &'static [PtpProfile] {
        &ALL
    }

    /// Option text in the profile select.
    pub fn label(self) -> &'static str {
        match self {
            PtpProfile::PowerC37_238_2011 => "IEEE C37.238-2011 (Power Profile)",
            PtpProfile::PowerC37_238_2017 => "IEEE C37.238-2017 (Power Profile)",
            // Misspelling matches the device firmware.
            PtpProfile::UtilityIec61850_9_3 => "IEEC 61850-9-3:2016 (Utility Profile)",
            PtpProfile::DefaultUdpV4 => "Default Profile (UDPv4)",
            PtpProfile::Default802_3 => "Default Profile (802.3)",
            PtpProfile::TelecomG8265_1 => "Telecom G.8265.1 (frequency synchronization)",
            PtpProfile::TelecomG8275_1 => {
                "Telecom G.8275.1 (phase/time synchronization with full timing support from the network)"
            }
            PtpProfile::TelecomG8275_2 => {
                "Telecom G.8275.2 (time/phase synchronization with partial timing support from the network)"
            }
            PtpProfile::Custom => "Custom",
        }
    }

    pub fn from_label(label: &str) -> Option<PtpProfile> {
        let label = label.trim();
        ALL.iter().copied().find(|p| p.label() == label)
    }

    /// Constraint on `field` under this profile, if the profile governs it.
    pub fn field_constraint(self, field: &str) -> Option<FieldConstraint> {
        match field {
            "priority1" => Some(FieldConstraint {
                hidden: false,
                read_only: self == PtpProfile::PowerC37_238_2011,
                default_value: 128,
            }),
            "priority2" => Some(FieldConstraint {
                hidden: false,
                read_only: false,
                default_value: 128,
            }),
            _ => None,
        }
    }

    /// Fields the profile does not govern are editable.
    pub fn is_field_read_only(self, field: &str) -> bool {
        self.field_constraint(field)
            .map(|c| c.read_only)
            .unwrap_or(false)
    }

    pub fn default_value(self, field: &str) -> Option<u32> {
        self.field_constraint(field).map(|c| c.default_value)
    }

    /// Only the custom profile enables the delay-mechanism and
    /// network-transport selects.
    pub fn unlocks_port_options(self) -> bool {
        self == PtpProfile::Custom
    }
}

impl fmt::Display for PtpProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
