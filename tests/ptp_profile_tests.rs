use kronos_console_e2e::capability::PtpProfile;
use kronos_console_e2e::capability::ptp_profile::{DELAY_MECHANISMS, NETWORK_TRANSPORTS};

#[test]
fn nine_profiles_with_distinct_labels() {
    let all = PtpProfile::all();
    assert_eq!(all.len(), 9);
    let mut labels: Vec<&str> = all.iter().map(|p| p.label()).collect();
    labels.sort();
    labels.dedup();
    assert_eq!(labels.len(), 9);
}

#[test]
fn labels_round_trip_through_from_label() {
    for &profile in PtpProfile::all() {
        assert_eq!(PtpProfile::from_label(profile.label()), Some(profile));
    }
    assert_eq!(PtpProfile::from_label("  Custom "), Some(PtpProfile::Custom));
    assert_eq!(PtpProfile::from_label("Enterprise Profile"), None);
}

#[test]
fn utility_label_keeps_firmware_spelling() {
    assert!(PtpProfile::UtilityIec61850_9_3.label().starts_with("IEEC 61850-9-3"));
}

#[test]
fn power_2011_locks_priority1_only() {
    let profile = PtpProfile::PowerC37_238_2011;
    assert!(profile.is_field_read_only("priority1"));
    assert!(!profile.is_field_read_only("priority2"));
    assert!(!PtpProfile::PowerC37_238_2017.is_field_read_only("priority1"));
}

#[test]
fn priorities_default_to_128() {
    for &profile in PtpProfile::all() {
        assert_eq!(profile.default_value("priority1"), Some(128));
        assert_eq!(profile.default_value("priority2"), Some(128));
    }
}

#[test]
fn ungoverned_fields_are_editable() {
    assert_eq!(PtpProfile::Custom.field_constraint("domain_number"), None);
    assert!(!PtpProfile::PowerC37_238_2011.is_field_read_only("domain_number"));
    assert_eq!(PtpProfile::Custom.default_value("log_sync_interval"), None);
}

#[test]
fn only_custom_unlocks_port_options() {
    let unlocking: Vec<PtpProfile> = PtpProfile::all()
        .iter()
        .copied()
        .filter(|p| p.unlocks_port_options())
        .collect();
    assert_eq!(unlocking, vec![PtpProfile::Custom]);
}

#[test]
fn port_option_constants() {
    assert_eq!(DELAY_MECHANISMS, &["P2P", "E2E"]);
    assert_eq!(NETWORK_TRANSPORTS, &["L2", "UDPv4"]);
}
