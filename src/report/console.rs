use crate::report::report_model::SuiteReport;
use crate::suite::suite_model::{Outcome, ScenarioResult};

// ============================================================================
// Console reporter: formatted terminal output
// ============================================================================

/// Format a suite report for terminal output.
///
/// Produces output like:
/// ```text
/// === Test Suite: Kronos web console ===
/// Device: 3R-HVXX-TCXO-44A (Series 3) at 10.0.0.5, firmware 3.1.0
///
/// ✓ PASS  auth.valid_login  Valid password reaches the dashboard
/// - SKIP  ptp.profile_options  PTP profile select  (device has no PTP ports)
/// ✗ FAIL  network.gateway  Gateway field present
///     [FAIL] gateway present
///
/// === Results: 1 passed, 1 failed, 1 skipped (3 total) in 4.2s ===
/// ```
pub fn format_console_report(report: &SuiteReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Test Suite: {} ===\n", report.suite_name));
    if let Some(device) = &report.device {
        out.push_str(&format!(
            "Device: {} (Series {}) at {}, firmware {}\n",
            device.model, device.series, device.ip, device.firmware_version
        ));
    }
    out.push('\n');

    if let Some(reason) = &report.aborted {
        out.push_str(&format!("[ABORTED] {}\n", reason));
    }

    for result in &report.results {
        out.push_str(&format_result(result));
    }

    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed, {} skipped ({} total)",
        report.passed, report.failed, report.skipped, report.total
    ));

    if let Some(ms) = report.duration_ms {
        let secs = ms as f64 / 1000.0;
        out.push_str(&format!(" in {:.1}s", secs));
    }

    out.push_str(" ===\n");

    out
}

fn format_result(result: &ScenarioResult) -> String {
    let marker = match result.outcome {
        Outcome::Passed => "\u{2713} PASS",
        Outcome::Failed => "\u{2717} FAIL",
        Outcome::Skipped => "- SKIP",
    };

    let mut out = format!("{}  {}  {}", marker, result.id, result.title);
    if let Some(reason) = &result.skip_reason {
        out.push_str(&format!("  ({})", reason));
    }
    out.push('\n');

    if let Some(ref error) = result.error {
        out.push_str(&format!("    [ERROR] {}\n", error));
    }
    for check in result.failed_checks() {
        out.push_str(&format!("    [FAIL] {}", check.description));
        if let (Some(expected), Some(actual)) = (&check.expected, &check.actual) {
            out.push_str(&format!(": expected {}, actual {}", expected, actual));
        }
        out.push('\n');
    }
    out
}
