use crate::report::report_model::SuiteReport;
use crate::suite::suite_model::{Outcome, ScenarioResult};

// ============================================================================
// JUnit XML reporter: standard CI integration format
// ============================================================================

/// Generate a JUnit XML report for CI systems.
///
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <testsuite name="Kronos web console" tests="3" failures="1" skipped="1" time="1.234">
///   <testcase name="auth.valid_login" classname="kronos.auth" />
///   <testcase name="ptp.profile_options" classname="kronos.ptp">
///     <skipped message="2R-HVXX-A2F has no PTP-capable interfaces" />
///   </testcase>
///   <testcase name="network.gateway" classname="kronos.network">
///     <failure message="1 check(s) failed" type="AssertionFailure">gateway present</failure>
///   </testcase>
/// </testsuite>
/// ```
///
/// An aborted run is reported as one failing `device.detection` case so CI
/// never sees an empty, green suite.
pub fn generate_junit_xml(report: &SuiteReport) -> String {
    let time_attr = report
        .duration_ms
        .map(|ms| format!(" time=\"{:.3}\"", ms as f64 / 1000.0))
        .unwrap_or_default();

    let mut cases = String::new();
    let mut failures = report.failed;
    let mut tests = report.total;

    if let Some(reason) = &report.aborted {
        failures += 1;
        tests += 1;
        cases.push_str(&format!(
            "  <testcase name=\"device.detection\" classname=\"kronos.device\">\n    <failure message=\"run aborted\" type=\"DetectionFailure\">{}</failure>\n  </testcase>\n",
            escape_xml(reason)
        ));
    }

    for result in &report.results {
        cases.push_str(&format_case(result));
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuite name=\"{name}\" tests=\"{tests}\" failures=\"{failures}\" skipped=\"{skipped}\"{time}>\n{cases}</testsuite>\n",
        name = escape_xml(&report.suite_name),
        tests = tests,
        failures = failures,
        skipped = report.skipped,
        time = time_attr,
        cases = cases,
    )
}

fn format_case(result: &ScenarioResult) -> String {
    let name = escape_xml(&result.id);
    let classname = escape_xml(&format!("kronos.{}", result.group));

    match result.outcome {
        Outcome::Passed => format!(
            "  <testcase name=\"{}\" classname=\"{}\" />\n",
            name, classname
        ),
        Outcome::Skipped => format!(
            "  <testcase name=\"{}\" classname=\"{}\">\n    <skipped message=\"{}\" />\n  </testcase>\n",
            name,
            classname,
            escape_xml(result.skip_reason.as_deref().unwrap_or("not applicable")),
        ),
        Outcome::Failed => {
            let mut body_parts: Vec<String> = result
                .failed_checks()
                .map(|check| match (&check.expected, &check.actual) {
                    (Some(expected), Some(actual)) => {
                        format!("{}: expected {}, actual {}", check.description, expected, actual)
                    }
                    _ => check.description.clone(),
                })
                .collect();
            let failure_count = body_parts.len();

            if let Some(error) = &result.error {
                body_parts.push(format!("Error: {}", error));
            }

            let failure_message = if failure_count > 0 {
                format!("{} check(s) failed", failure_count)
            } else {
                "execution error".to_string()
            };

            format!(
                "  <testcase name=\"{name}\" classname=\"{classname}\">\n    <failure message=\"{message}\" type=\"AssertionFailure\">{body}</failure>\n  </testcase>\n",
                name = name,
                classname = classname,
                message = escape_xml(&failure_message),
                body = escape_xml(&body_parts.join("\n")),
            )
        }
    }
}

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
