use crate::capability::capability_model::{DeviceProfile, InterfaceField, InterfaceSpec, Series};

use InterfaceField::*;

// ============================================================================
// Static capability table. One record per supported hardware model.
// ============================================================================

const SERIES2_ETH0: &[InterfaceField] = &[Ip, Mask, Ntp, Snmp];
const SERIES3_MGMT: &[InterfaceField] = &[Ip, Mask, Mtu, Ntp, Snmp, Vlan];
const SERIES3_MGMT_CHANGEIP: &[InterfaceField] = &[Ip, Mask, Mtu, ChangeIp, Ntp, Snmp, Vlan];
const SERIES3_TIMING: &[InterfaceField] = &[Ip, Mask, Mtu, Redundancy, Ntp, Ptp, Snmp, Vlan];

const GNSS: &[&str] = &["GPS", "Galileo", "GLONASS", "BeiDou"];

const SERIES2_TIMEZONES: &[&str] = &[
    "US/Eastern",
    "US/Central",
    "US/Mountain",
    "US/Pacific",
    "US/Alaska",
    "US/Hawaii",
    "America/Toronto",
    "America/Vancouver",
    "America/Edmonton",
    "America/Winnipeg",
    "America/Mexico_City",
    "America/Anchorage",
    "America/Puerto_Rico",
    "America/Sao_Paulo",
    "Europe/London",
    "UTC",
];

const SERIES3_TIMEZONES: &[&str] = &[
    "US/Eastern",
    "US/Central",
    "US/Mountain",
    "US/Pacific",
    "US/Alaska",
    "US/Hawaii",
    "America/Toronto",
    "America/Vancouver",
    "America/Edmonton",
    "America/Winnipeg",
    "America/Mexico_City",
    "America/Anchorage",
    "America/Puerto_Rico",
    "America/Sao_Paulo",
    "Europe/London",
    "Australia/Sydney",
    "UTC",
];

/// Display names the time page shows, mapped to canonical zone names.
/// Names not listed here are shown as-is.
pub const TIMEZONE_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("US/New York", "US/Eastern"),
    ("US/Chicago", "US/Central"),
    ("US/Denver", "US/Mountain"),
    ("US/Los Angeles", "US/Pacific"),
    ("US/Anchorage", "America/Anchorage"),
    ("Pacific/Honolulu", "US/Hawaii"),
    ("America/Mexico City", "America/Mexico_City"),
    ("America/Puerto Rico", "America/Puerto_Rico"),
    ("America/Sao Paulo", "America/Sao_Paulo"),
];

pub const ISSUE_HTTPS_REDIRECT: &str =
    "HTTP to HTTPS redirect causes browser compatibility test failures";
pub const ISSUE_PTP_COLLAPSED: &str = "PTP panels collapsed by default";
pub const ISSUE_LOCATOR_AMBIGUITY: &str = "Multi-interface locator ambiguity";
pub const ISSUE_UNLOCK_TIMEOUTS: &str =
    "Configuration unlock timeouts (3 errors vs 0-1 on other devices)";
pub const ISSUE_NAVIGATION_TIMEOUTS: &str = "Navigation timeout issues";

const SERIES3_SLOW_ISSUES: &[&str] = &[
    ISSUE_PTP_COLLAPSED,
    ISSUE_LOCATOR_AMBIGUITY,
    ISSUE_UNLOCK_TIMEOUTS,
    ISSUE_NAVIGATION_TIMEOUTS,
];

pub static DEVICE_TABLE: &[DeviceProfile] = &[
    DeviceProfile {
        model: "KRONOS-2R-HVXX-A2F",
        series: Series::Two,
        serial_number: "20245",
        firmware_version: "04.04.00",
        interfaces: &[InterfaceSpec { name: "eth0", fields: SERIES2_ETH0 }],
        ptp_interfaces: &[],
        max_outputs: 4,
        gnss_constellations: GNSS,
        known_issues: &[],
        timezones: SERIES2_TIMEZONES,
        session_timeout_minutes: 30,
        max_concurrent_sessions: 5,
        http_redirect: false,
    },
    DeviceProfile {
        model: "KRONOS-2P-HV-2",
        series: Series::Two,
        serial_number: "20216",
        firmware_version: "04.04.00",
        interfaces: &[InterfaceSpec { name: "eth0", fields: SERIES2_ETH0 }],
        ptp_interfaces: &[],
        max_outputs: 4,
        gnss_constellations: GNSS,
        known_issues: &[ISSUE_HTTPS_REDIRECT],
        timezones: SERIES2_TIMEZONES,
        session_timeout_minutes: 30,
        max_concurrent_sessions: 5,
        http_redirect: false,
    },
    DeviceProfile {
        model: "KRONOS-3R-HVLV-TCXO-A2F",
        series: Series::Three,
        serial_number: "30165",
        firmware_version: "02.06.04",
        interfaces: &[
            InterfaceSpec { name: "eth0", fields: SERIES3_MGMT },
            InterfaceSpec { name: "eth1", fields: SERIES3_TIMING },
            InterfaceSpec { name: "eth2", fields: SERIES3_TIMING },
            InterfaceSpec { name: "eth3", fields: SERIES3_TIMING },
        ],
        ptp_interfaces: &["eth1", "eth2", "eth3"],
        max_outputs: 6,
        gnss_constellations: GNSS,
        known_issues: &[ISSUE_PTP_COLLAPSED, ISSUE_LOCATOR_AMBIGUITY],
        timezones: SERIES3_TIMEZONES,
        session_timeout_minutes: 30,
        max_concurrent_sessions: 5,
        http_redirect: false,
    },
    DeviceProfile {
        model: "KRONOS-3R-HVXX-TCXO-44A",
        series: Series::Three,
        serial_number: "30134",
        firmware_version: "02.06.04",
        interfaces: &[
            InterfaceSpec { name: "eth0", fields: SERIES3_MGMT_CHANGEIP },
            InterfaceSpec { name: "eth1", fields: SERIES3_TIMING },
            InterfaceSpec { name: "eth3", fields: SERIES3_TIMING },
        ],
        ptp_interfaces: &["eth1", "eth3"],
        max_outputs: 6,
        gnss_constellations: GNSS,
        known_issues: SERIES3_SLOW_ISSUES,
        timezones: SERIES3_TIMEZONES,
        session_timeout_minutes: 30,
        max_concurrent_sessions: 5,
        http_redirect: false,
    },
    DeviceProfile {
        model: "KRONOS-3R-HVXX-TCXO-A2X",
        series: Series::Three,
        serial_number: "30134",
        firmware_version: "02.06.04",
        interfaces: &[
            InterfaceSpec { name: "eth0", fields: SERIES3_MGMT_CHANGEIP },
            InterfaceSpec { name: "eth1", fields: SERIES3_TIMING },
            InterfaceSpec { name: "eth2", fields: SERIES3_TIMING },
            InterfaceSpec { name: "eth3", fields: SERIES3_TIMING },
            InterfaceSpec { name: "eth4", fields: SERIES3_TIMING },
        ],
        ptp_interfaces: &["eth1", "eth3"],
        max_outputs: 6,
        gnss_constellations: GNSS,
        known_issues: SERIES3_SLOW_ISSUES,
        timezones: SERIES3_TIMEZONES,
        session_timeout_minutes: 30,
        max_concurrent_sessions: 5,
        http_redirect: false,
    },
];
