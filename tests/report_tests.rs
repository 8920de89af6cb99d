use kronos_console_e2e::capability::lookup;
use kronos_console_e2e::report::console::format_console_report;
use kronos_console_e2e::report::html::generate_html_report;
use kronos_console_e2e::report::junit::{escape_xml, generate_junit_xml};
use kronos_console_e2e::report::report_model::{DeviceSummary, SuiteReport};
use kronos_console_e2e::suite::{CheckResult, Outcome, ScenarioResult};

// ============================================================================
// Helper builders
// ============================================================================

fn result(id: &str, outcome: Outcome) -> ScenarioResult {
    ScenarioResult {
        id: id.to_string(),
        group: id.split('.').next().unwrap_or_default().to_string(),
        title: format!("Title of {}", id),
        outcome,
        checks: vec![CheckResult {
            description: "first check".into(),
            passed: true,
            expected: None,
            actual: None,
        }],
        skip_reason: None,
        error: None,
        duration_ms: 120,
    }
}

fn failing(id: &str) -> ScenarioResult {
    let mut r = result(id, Outcome::Failed);
    r.checks.push(CheckResult {
        description: "output count".into(),
        passed: false,
        expected: Some("6".into()),
        actual: Some("4".into()),
    });
    r
}

fn skipped(id: &str) -> ScenarioResult {
    let mut r = result(id, Outcome::Skipped);
    r.checks.clear();
    r.skip_reason = Some("KRONOS-2R-HVXX-A2F has no PTP-capable interfaces".into());
    r
}

fn device() -> DeviceSummary {
    DeviceSummary::new("10.0.0.5", lookup("KRONOS-3R-HVXX-TCXO-44A").unwrap())
}

fn mixed_report() -> SuiteReport {
    SuiteReport::from_results(
        "Kronos web console",
        vec![
            result("auth.valid_login", Outcome::Passed),
            failing("outputs.count"),
            skipped("ptp.profile_options"),
        ],
    )
    .with_duration(4200)
    .with_device(device())
}

// ============================================================================
// 1. Suite report counts
// ============================================================================

#[test]
fn suite_report_counts_outcomes() {
    let report = mixed_report();
    assert_eq!(report.total, 3);
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.skipped, 1);
    assert!(!report.all_passed());
}

#[test]
fn skips_do_not_fail_the_run() {
    let report = SuiteReport::from_results(
        "s",
        vec![result("a.b", Outcome::Passed), skipped("ptp.x")],
    );
    assert!(report.all_passed());
}

#[test]
fn aborted_report_never_passes() {
    let report = SuiteReport::aborted("s", "device detection failed: unknown device model");
    assert_eq!(report.total, 0);
    assert!(!report.all_passed());
}

#[test]
fn device_summary_carries_multiplier() {
    let d = device();
    assert_eq!(d.series, 3);
    assert_eq!(d.timeout_multiplier, 2.0);
    assert_eq!(d.firmware_version, "02.06.04");
}

#[test]
fn suite_report_json_round_trip() {
    let report = mixed_report();
    let json = serde_json::to_string(&report).unwrap();
    let back: SuiteReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.total, 3);
    assert_eq!(back.results[2].outcome, Outcome::Skipped);
    assert_eq!(back.device, report.device);
}

// ============================================================================
// 2. Console output
// ============================================================================

#[test]
fn console_report_lists_every_outcome() {
    let out = format_console_report(&mixed_report());
    assert!(out.starts_with("=== Test Suite: Kronos web console ===\n"));
    assert!(out.contains("Device: KRONOS-3R-HVXX-TCXO-44A (Series 3) at 10.0.0.5"));
    assert!(out.contains("\u{2713} PASS  auth.valid_login"));
    assert!(out.contains("\u{2717} FAIL  outputs.count"));
    assert!(out.contains("- SKIP  ptp.profile_options"));
    assert!(out.contains("[FAIL] output count: expected 6, actual 4"));
    assert!(out.contains("(KRONOS-2R-HVXX-A2F has no PTP-capable interfaces)"));
    assert!(out.contains("=== Results: 1 passed, 1 failed, 1 skipped (3 total) in 4.2s ==="));
}

#[test]
fn console_report_shows_errors_and_abort() {
    let mut r = result("network.gateway", Outcome::Failed);
    r.error = Some("timed out waiting for input[name='gateway']".into());
    let out = format_console_report(&SuiteReport::from_results("s", vec![r]));
    assert!(out.contains("[ERROR] timed out waiting"));

    let aborted = format_console_report(&SuiteReport::aborted("s", "unknown device model 'X'"));
    assert!(aborted.contains("[ABORTED] unknown device model 'X'"));
    assert!(aborted.contains("0 passed, 0 failed, 0 skipped (0 total)"));
}

// ============================================================================
// 3. HTML output
// ============================================================================

#[test]
fn html_report_is_red_when_something_failed() {
    let html = generate_html_report(&mixed_report());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("#f44336"));
    assert!(html.contains("SOME TESTS FAILED"));
    assert!(html.contains("1 passed, 1 failed, 1 skipped (3 total) in 4.2s"));
    assert!(html.contains("test-case skip"));
    assert!(html.contains("output count: expected 6, actual 4"));
}

#[test]
fn html_report_is_green_when_all_passed() {
    let report = SuiteReport::from_results("s", vec![result("auth.valid_login", Outcome::Passed)]);
    let html = generate_html_report(&report);
    assert!(html.contains("#4CAF50"));
    assert!(html.contains("ALL TESTS PASSED"));
}

#[test]
fn html_report_escapes_markup() {
    let mut r = failing("network.gateway");
    r.error = Some("<script>alert('x')</script>".into());
    let html = generate_html_report(&SuiteReport::from_results("s", vec![r]));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn html_report_marks_abort() {
    let html = generate_html_report(&SuiteReport::aborted("s", "no model"));
    assert!(html.contains("RUN ABORTED"));
    assert!(html.contains("Aborted: no model"));
}

// ============================================================================
// 4. JUnit output
// ============================================================================

#[test]
fn junit_counts_and_elements() {
    let xml = generate_junit_xml(&mixed_report());
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains(
        "<testsuite name=\"Kronos web console\" tests=\"3\" failures=\"1\" skipped=\"1\" time=\"4.200\">"
    ));
    assert!(xml.contains("<testcase name=\"auth.valid_login\" classname=\"kronos.auth\" />"));
    assert!(xml.contains("<skipped message=\"KRONOS-2R-HVXX-A2F has no PTP-capable interfaces\" />"));
    assert!(xml.contains("<failure message=\"1 check(s) failed\" type=\"AssertionFailure\">"));
    assert!(xml.contains("output count: expected 6, actual 4"));
}

#[test]
fn junit_execution_error_without_failed_checks() {
    let mut r = result("security.https_enforcement", Outcome::Failed);
    r.error = Some("HTTP error: connection refused".into());
    let xml = generate_junit_xml(&SuiteReport::from_results("s", vec![r]));
    assert!(xml.contains("message=\"execution error\""));
    assert!(xml.contains("Error: HTTP error: connection refused"));
}

#[test]
fn junit_aborted_run_is_one_failure() {
    let xml = generate_junit_xml(&SuiteReport::aborted("s", "unknown device model 'X'"));
    assert!(xml.contains("tests=\"1\" failures=\"1\""));
    assert!(xml.contains("<testcase name=\"device.detection\""));
    assert!(xml.contains("unknown device model &apos;X&apos;"));
}

#[test]
fn escape_xml_special_characters() {
    assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
}
