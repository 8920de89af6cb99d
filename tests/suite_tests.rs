mod common;

use std::collections::HashSet;

use common::{DEVICE_IP, console_for, session_with, stock_pages};
use kronos_console_e2e::ConsoleError;
use kronos_console_e2e::capability::{ConfigSection, Series, lookup};
use kronos_console_e2e::device::DeviceSession;
use kronos_console_e2e::suite::artifacts::{ArtifactWriter, sanitize_filename};
use kronos_console_e2e::suite::{
    Fixture, Outcome, Requirement, RunOptions, Scenario, ScenarioContext, SuiteRunner, catalog,
    select,
};

// ============================================================================
// Scenario context
// ============================================================================

#[test]
fn context_outcome_rules() {
    let mut ctx = ScenarioContext::new();
    assert_eq!(ctx.outcome(false), Outcome::Passed);
    assert_eq!(ctx.outcome(true), Outcome::Failed);

    ctx.check("ok", true);
    ctx.skip("not applicable");
    assert_eq!(ctx.outcome(false), Outcome::Skipped);

    ctx.check_eq("count", 3, 4);
    assert_eq!(ctx.outcome(false), Outcome::Failed);
    assert_eq!(ctx.pass_count(), 1);
    assert_eq!(ctx.fail_count(), 1);
    assert_eq!(ctx.checks[1].expected.as_deref(), Some("3"));
    assert_eq!(ctx.checks[1].actual.as_deref(), Some("4"));
}

// ============================================================================
// Requirements
// ============================================================================

#[test]
fn requirement_gates_on_profile() {
    let s2 = lookup("KRONOS-2R-HVXX-A2F").unwrap();
    let s3 = lookup("KRONOS-3R-HVXX-TCXO-A2X").unwrap();

    assert!(Requirement::Any.check(s2).is_ok());
    assert!(Requirement::Series(Series::Three).check(s3).is_ok());
    assert!(Requirement::Ptp.check(s3).is_ok());
    assert!(Requirement::Section(ConfigSection::Upload).check(s3).is_ok());

    let reason = Requirement::Ptp.check(s2).unwrap_err();
    assert!(reason.contains("KRONOS-2R-HVXX-A2F"));
    assert!(Requirement::Series(Series::Three).check(s2).unwrap_err().contains("Series 3"));
    assert!(Requirement::Section(ConfigSection::Ptp).check(s2).is_err());
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn catalog_ids_are_unique_and_grouped() {
    let all = catalog();
    let ids: HashSet<&str> = all.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), all.len());
    for scenario in &all {
        assert!(
            scenario.id.starts_with(&format!("{}.", scenario.group)),
            "{} not in group {}",
            scenario.id,
            scenario.group
        );
    }
}

#[test]
fn catalog_covers_every_group() {
    let groups: HashSet<&str> = catalog().iter().map(|s| s.group).collect();
    for group in [
        "auth", "navigation", "capability", "general", "network", "ptp", "snmp", "syslog", "time",
        "gnss", "outputs", "display", "upload", "security", "session",
    ] {
        assert!(groups.contains(group), "missing group {group}");
    }
}

#[test]
fn ptp_scenarios_require_ptp() {
    for scenario in catalog().iter().filter(|s| s.group == "ptp") {
        assert_eq!(scenario.requires, Requirement::Ptp, "{}", scenario.id);
    }
}

#[test]
fn upload_scenarios_skip_series2() {
    let s2 = lookup("KRONOS-2P-HV-2").unwrap();
    let s3 = lookup("KRONOS-3R-HVXX-TCXO-44A").unwrap();
    let upload: Vec<Scenario> = catalog().into_iter().filter(|s| s.group == "upload").collect();
    assert!(!upload.is_empty());
    for scenario in &upload {
        assert_eq!(scenario.requires, Requirement::Section(ConfigSection::Upload));
        assert!(scenario.requires.check(s2).is_err(), "{}", scenario.id);
        assert!(scenario.requires.check(s3).is_ok(), "{}", scenario.id);
    }
}

#[test]
fn select_filters_by_group_and_pattern() {
    let all = catalog();
    let auth = select(&all, &["auth".to_string()], None);
    assert!(!auth.is_empty());
    assert!(auth.iter().all(|s| s.group == "auth"));

    let one = select(&all, &[], Some("invalid_password"));
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].id, "auth.invalid_password");

    assert_eq!(select(&all, &[], None).len(), all.len());
    assert!(select(&all, &["nope".to_string()], None).is_empty());
}

// ============================================================================
// Runner
// ============================================================================

fn options(groups: &[&str]) -> RunOptions {
    RunOptions {
        groups: groups.iter().map(|g| g.to_string()).collect(),
        ..RunOptions::default()
    }
}

#[test]
fn runner_aborts_on_unknown_model() {
    let state = console_for("KRONOS-9Z-PROTOTYPE", None);
    let mut session = session_with(&state);
    let report = SuiteRunner::new(&mut session, RunOptions::default()).run(&catalog());

    assert!(report.results.is_empty());
    assert!(!report.all_passed());
    let reason = report.aborted.unwrap();
    assert!(reason.contains("KRONOS-9Z-PROTOTYPE"), "{reason}");
    assert!(report.device.is_none());
}

#[test]
fn runner_aborts_on_rejected_password() {
    let state = console_for("KRONOS-2R-HVXX-A2F", None);
    state.borrow_mut().status_password = "other".into();
    let mut session = session_with(&state);
    let report = SuiteRunner::new(&mut session, RunOptions::default()).run(&catalog());
    assert!(report.aborted.unwrap().contains("authentication failed"));
}

#[test]
fn runner_passes_auth_group_on_series2() {
    let profile = lookup("KRONOS-2R-HVXX-A2F").unwrap();
    let state = console_for(profile.model, Some(profile));
    let mut session = session_with(&state);
    let report = SuiteRunner::new(&mut session, options(&["auth"])).run(&catalog());

    assert!(report.aborted.is_none());
    assert_eq!(report.total, 4);
    assert_eq!(report.passed, 4, "{:#?}", report.results);
    assert!(report.all_passed());
    let device = report.device.unwrap();
    assert_eq!(device.model, profile.model);
    assert_eq!(device.series, 2);
    assert_eq!(device.ip, DEVICE_IP);
}

#[test]
fn runner_passes_navigation_and_capability_on_series2() {
    let profile = lookup("KRONOS-2P-HV-2").unwrap();
    let state = console_for(profile.model, Some(profile));
    let mut session = session_with(&state);
    let report = SuiteRunner::new(&mut session, options(&["navigation", "capability"])).run(&catalog());
    assert_eq!(report.failed, 0, "{:#?}", report.results);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.passed, report.total);
}

/// Run `groups` against a fully rendered console for `model`.
fn run_stocked(model: &str, groups: &[&str]) -> kronos_console_e2e::report::SuiteReport {
    let profile = lookup(model).unwrap();
    let state = console_for(profile.model, Some(profile));
    stock_pages(&state, profile);
    let mut session = session_with(&state);
    SuiteRunner::new(&mut session, options(groups)).run(&catalog())
}

#[test]
fn runner_passes_time_and_network_on_series2() {
    let report = run_stocked("KRONOS-2R-HVXX-A2F", &["time", "network"]);
    assert!(report.aborted.is_none());
    assert_eq!(report.failed, 0, "{:#?}", report.results);
    // Per-port save buttons only exist on Series 3.
    assert_eq!(report.skipped, 1);
    let skipped = report.results.iter().find(|r| r.outcome == Outcome::Skipped).unwrap();
    assert_eq!(skipped.id, "network.port_save_buttons");
    assert_eq!(report.passed, report.total - 1);
}

#[test]
fn runner_passes_time_and_network_on_series3() {
    let report = run_stocked("KRONOS-3R-HVLV-TCXO-A2F", &["time", "network"]);
    assert!(report.aborted.is_none());
    assert_eq!(report.failed, 0, "{:#?}", report.results);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.passed, report.total);
    assert_eq!(report.total, 5);
}

#[test]
fn runner_passes_device_page_groups_on_series3() {
    let groups = ["general", "gnss", "display", "upload", "session"];
    let report = run_stocked("KRONOS-3R-HVXX-TCXO-A2X", &groups);
    assert_eq!(report.failed, 0, "{:#?}", report.results);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.passed, report.total);
    assert!(report.results.iter().any(|r| r.id == "upload.form_present"));
}

#[test]
fn runner_skips_upload_on_series2() {
    let groups = ["general", "gnss", "display", "upload", "session"];
    let report = run_stocked("KRONOS-2P-HV-2", &groups);
    assert_eq!(report.failed, 0, "{:#?}", report.results);
    assert_eq!(report.skipped, 1);
    let upload = report.results.iter().find(|r| r.id == "upload.form_present").unwrap();
    assert_eq!(upload.outcome, Outcome::Skipped);
    assert!(upload.checks.is_empty());
}

#[test]
fn runner_skips_ptp_on_series2_without_running() {
    let profile = lookup("KRONOS-2R-HVXX-A2F").unwrap();
    let state = console_for(profile.model, Some(profile));
    let mut session = session_with(&state);
    let resets_before = state.borrow().resets;
    let report = SuiteRunner::new(&mut session, options(&["ptp"])).run(&catalog());

    assert!(report.total > 0);
    assert_eq!(report.skipped, report.total);
    assert!(report.all_passed());
    for result in &report.results {
        assert!(result.skip_reason.as_deref().unwrap().contains("PTP"));
        assert!(result.checks.is_empty());
    }
    // Only the detection context was created.
    assert_eq!(state.borrow().resets, resets_before + 1);
}

#[test]
fn runner_skips_series2_only_scenario_on_series3() {
    let profile = lookup("KRONOS-3R-HVLV-TCXO-A2F").unwrap();
    let state = console_for(profile.model, Some(profile));
    let mut session = session_with(&state);
    let opts = RunOptions {
        scenario_filter: Some("series2_no_ptp".into()),
        ..RunOptions::default()
    };
    let report = SuiteRunner::new(&mut session, opts).run(&catalog());
    assert_eq!(report.total, 1);
    assert_eq!(report.results[0].outcome, Outcome::Skipped);
}

fn failing_check(ctx: &mut ScenarioContext, _session: &mut DeviceSession) -> Result<(), ConsoleError> {
    ctx.check("always false", false);
    Ok(())
}

fn erroring(_ctx: &mut ScenarioContext, _session: &mut DeviceSession) -> Result<(), ConsoleError> {
    Err(ConsoleError::missing("#gone", "test element"))
}

fn passing(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    ctx.check("profile cached", session.detected().is_some());
    Ok(())
}

fn custom(id: &'static str, run: kronos_console_e2e::suite::catalog::ScenarioFn) -> Scenario {
    Scenario {
        id,
        group: "custom",
        title: id,
        requires: Requirement::Any,
        fixture: Fixture::Fresh,
        run,
    }
}

#[test]
fn runner_records_checks_and_errors() {
    let state = console_for("KRONOS-2R-HVXX-A2F", None);
    let mut session = session_with(&state);
    let scenarios = vec![
        custom("custom.failing", failing_check),
        custom("custom.erroring", erroring),
        custom("custom.passing", passing),
    ];
    let report = SuiteRunner::new(&mut session, RunOptions::default()).run(&scenarios);

    assert_eq!((report.passed, report.failed, report.skipped), (1, 2, 0));
    assert!(!report.all_passed());
    let erroring = &report.results[1];
    assert_eq!(erroring.outcome, Outcome::Failed);
    assert!(erroring.error.as_deref().unwrap().contains("#gone"));
    assert_eq!(report.results[0].failed_checks().count(), 1);
}

// ============================================================================
// Artifacts
// ============================================================================

#[test]
fn artifact_paths_are_sanitized() {
    let writer = ArtifactWriter::new("/tmp/results");
    assert_eq!(sanitize_filename("ptp/eth1 profile"), "ptp_eth1_profile");
    assert!(writer
        .metadata_path("auth.valid_login")
        .ends_with("auth.valid_login_metadata.json"));
    assert!(writer
        .screenshot_path("auth.valid_login")
        .ends_with("screenshots/auth.valid_login_failure.png"));
}

#[test]
fn runner_writes_metadata_and_failure_screenshot() {
    let dir = tempfile::tempdir().unwrap();
    let state = console_for("KRONOS-2R-HVXX-A2F", None);
    let mut session = session_with(&state);
    let opts = RunOptions {
        results_dir: Some(dir.path().to_path_buf()),
        ..RunOptions::default()
    };
    let scenarios = vec![custom("custom.failing", failing_check), custom("custom.passing", passing)];
    SuiteRunner::new(&mut session, opts).run(&scenarios);

    let failing = dir.path().join("custom.failing_metadata.json");
    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&failing).unwrap()).unwrap();
    assert_eq!(json["id"], "custom.failing");
    assert_eq!(json["outcome"], "failed");
    assert_eq!(json["device"]["model"], "KRONOS-2R-HVXX-A2F");
    assert!(json["timestamp"].as_str().unwrap().contains('T'));
    assert_eq!(json["checks"][0]["passed"], false);

    let screenshot = dir.path().join("screenshots").join("custom.failing_failure.png");
    assert!(screenshot.exists());
    assert_eq!(json["screenshot"], screenshot.display().to_string());

    let passing = dir.path().join("custom.passing_metadata.json");
    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&passing).unwrap()).unwrap();
    assert_eq!(json["outcome"], "passed");
    assert!(json.get("screenshot").is_none());
    assert_eq!(state.borrow().screenshots.len(), 1);
}
