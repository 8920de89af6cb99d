use crate::report::report_model::SuiteReport;
use crate::suite::suite_model::Outcome;

// ============================================================================
// HTML reporter: self-contained HTML report
// ============================================================================

/// Generate a self-contained HTML report.
///
/// Green header when nothing failed, red otherwise. Each scenario gets its
/// own card with failed checks and errors listed in red. Inline CSS only.
pub fn generate_html_report(report: &SuiteReport) -> String {
    let header_color = if report.all_passed() {
        "#4CAF50"
    } else {
        "#f44336"
    };

    let status_text = if report.aborted.is_some() {
        "RUN ABORTED"
    } else if report.all_passed() {
        "ALL TESTS PASSED"
    } else {
        "SOME TESTS FAILED"
    };

    let duration_text = report
        .duration_ms
        .map(|ms| format!(" in {:.1}s", ms as f64 / 1000.0))
        .unwrap_or_default();

    let device_text = report
        .device
        .as_ref()
        .map(|d| {
            format!(
                "<p>{} (Series {}) at {}, firmware {}, timeout x{:.1}</p>\n",
                escape_html(&d.model),
                d.series,
                escape_html(&d.ip),
                escape_html(&d.firmware_version),
                d.timeout_multiplier
            )
        })
        .unwrap_or_default();

    let mut test_cases = String::new();
    if let Some(reason) = &report.aborted {
        test_cases.push_str(&format!(
            "<div class=\"test-case fail\"><p class=\"error\">Aborted: {}</p></div>\n",
            escape_html(reason)
        ));
    }

    for result in &report.results {
        let (case_class, case_marker) = match result.outcome {
            Outcome::Passed => ("pass", "\u{2713}"),
            Outcome::Failed => ("fail", "\u{2717}"),
            Outcome::Skipped => ("skip", "-"),
        };

        test_cases.push_str(&format!(
            r#"<div class="test-case {class}">
<h3>{marker} {title}</h3>
<p>{id} | Checks: {checks} | {ms} ms</p>
"#,
            class = case_class,
            marker = case_marker,
            title = escape_html(&result.title),
            id = escape_html(&result.id),
            checks = result.checks.len(),
            ms = result.duration_ms,
        ));

        if let Some(ref reason) = result.skip_reason {
            test_cases.push_str(&format!(
                "<p class=\"skip-reason\">Skipped: {}</p>\n",
                escape_html(reason)
            ));
        }

        if let Some(ref error) = result.error {
            test_cases.push_str(&format!(
                "<p class=\"error\">Error: {}</p>\n",
                escape_html(error)
            ));
        }

        let failed: Vec<_> = result.failed_checks().collect();
        if !failed.is_empty() {
            test_cases.push_str("<ul class=\"failures\">\n");
            for check in failed {
                let detail = match (&check.expected, &check.actual) {
                    (Some(expected), Some(actual)) => {
                        format!("{}: expected {}, actual {}", check.description, expected, actual)
                    }
                    _ => check.description.clone(),
                };
                test_cases.push_str(&format!("<li>{}</li>\n", escape_html(&detail)));
            }
            test_cases.push_str("</ul>\n");
        }

        test_cases.push_str("</div>\n");
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{suite_name} Test Report</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }}
.header {{ background: {header_color}; color: white; padding: 20px 30px; }}
.header h1 {{ margin: 0 0 8px 0; font-size: 24px; }}
.header p {{ margin: 0; font-size: 16px; opacity: 0.9; }}
.content {{ max-width: 900px; margin: 20px auto; padding: 0 20px; }}
.test-case {{ background: white; border-radius: 6px; padding: 16px 20px; margin-bottom: 12px; border-left: 4px solid #ccc; }}
.test-case.pass {{ border-left-color: #4CAF50; }}
.test-case.fail {{ border-left-color: #f44336; }}
.test-case.skip {{ border-left-color: #9e9e9e; }}
.test-case h3 {{ margin: 0 0 8px 0; font-size: 16px; }}
.test-case p {{ margin: 4px 0; color: #666; font-size: 14px; }}
.test-case .error {{ color: #f44336; font-weight: bold; }}
.test-case .skip-reason {{ font-style: italic; }}
.failures {{ margin: 8px 0 0 0; padding-left: 20px; }}
.failures li {{ color: #c62828; font-size: 13px; margin-bottom: 4px; }}
</style>
</head>
<body>
<div class="header">
<h1>{status_text}</h1>
<p>{suite_name}: {passed} passed, {failed} failed, {skipped} skipped ({total} total){duration}</p>
{device}</div>
<div class="content">
{test_cases}
</div>
</body>
</html>"##,
        suite_name = escape_html(&report.suite_name),
        header_color = header_color,
        status_text = status_text,
        passed = report.passed,
        failed = report.failed,
        skipped = report.skipped,
        total = report.total,
        duration = duration_text,
        device = device_text,
        test_cases = test_cases,
    )
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
