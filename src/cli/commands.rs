use std::time::Duration;

use tracing::info;

use crate::browser::{BrowserKind, BrowserSession};
use crate::capability::{DeviceProfile, all_models, lookup};
use crate::cli::config::{AppConfig, DeviceArgs, build_launch_options, resolve_device};
use crate::device::{DeviceSession, DeviceTarget};
use crate::probe::ProtocolProbe;
use crate::report::console::format_console_report;
use crate::report::html::generate_html_report;
use crate::report::junit::generate_junit_xml;
use crate::report::report_model::SuiteReport;
use crate::suite::{RunOptions, SuiteRunner, catalog, select};

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Arguments of the `run` subcommand, after clap.
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub device: DeviceArgs,
    pub results_dir: Option<std::path::PathBuf>,
    pub format: Option<String>,
    pub output: Option<String>,
    pub groups: Vec<String>,
    pub scenario: Option<String>,
    pub headed: bool,
    pub browser: Option<BrowserKind>,
}

// ============================================================================
// run subcommand
// ============================================================================

/// Run the catalog against the device and return whether all passed.
pub fn cmd_run(args: RunArgs, config: &AppConfig) -> Result<bool, Box<dyn std::error::Error>> {
    let device = resolve_device(&args.device, &config.device)?;
    let launch = build_launch_options(&config.browser, args.headed, args.browser, device.ignore_ssl);

    let options = RunOptions {
        groups: if args.groups.is_empty() {
            config.run.groups.clone()
        } else {
            args.groups
        },
        scenario_filter: args.scenario,
        results_dir: args.results_dir.or_else(|| config.run.results_dir.clone()),
    };
    let format = args.format.unwrap_or_else(|| config.run.format.clone());
    let output = args.output.or_else(|| config.run.output.clone());

    info!(ip = %device.ip, browser = launch.browser.as_str(), headless = launch.headless, "starting run");
    let driver = BrowserSession::launch(&launch)?;
    let target = DeviceTarget::new(&device.ip, &device.password, device.ignore_ssl);
    let mut session = DeviceSession::new(Box::new(driver), target);

    let scenarios = catalog();
    let report = SuiteRunner::new(&mut session, options).run(&scenarios);
    let all_passed = report.all_passed();

    let output_content = render_report(&report, &format);
    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(all_passed)
}

/// Unknown formats fall back to console text.
pub fn render_report(report: &SuiteReport, format: &str) -> String {
    match format {
        "html" => generate_html_report(report),
        "junit" => generate_junit_xml(report),
        _ => format_console_report(report),
    }
}

// ============================================================================
// models subcommand
// ============================================================================

pub fn cmd_models(model: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match model {
        Some(model) => print!("{}", describe_profile(lookup(model)?)),
        None => {
            for model in all_models() {
                let profile = lookup(model)?;
                println!(
                    "{:<28} Series {}  outputs {}  ptp [{}]  timeout x{:.1}",
                    profile.model,
                    profile.series.number(),
                    profile.max_outputs,
                    profile.ptp_interfaces.join(", "),
                    profile.timeout_multiplier()
                );
            }
        }
    }
    Ok(())
}

/// Multi-line description of one profile with its derived values.
pub fn describe_profile(profile: &DeviceProfile) -> String {
    let mut out = format!("{} ({})\n", profile.model, profile.series);
    out.push_str(&format!("  firmware:       {}\n", profile.firmware_version));
    out.push_str(&format!("  interfaces:     {}\n", profile.interface_names().join(", ")));
    out.push_str(&format!("  ptp interfaces: {}\n", profile.ptp_interfaces.join(", ")));
    out.push_str(&format!("  max outputs:    {}\n", profile.max_outputs));
    out.push_str(&format!("  gnss:           {}\n", profile.gnss_constellations.join(", ")));
    out.push_str(&format!("  timeout:        x{:.1}\n", profile.timeout_multiplier()));
    let sections: Vec<&str> = profile.available_sections().into_iter().map(|s| s.label()).collect();
    out.push_str(&format!("  sections:       {}\n", sections.join(", ")));
    if !profile.known_issues.is_empty() {
        out.push_str("  known issues:\n");
        for issue in profile.known_issues {
            out.push_str(&format!("    - {}\n", issue));
        }
    }
    out
}

// ============================================================================
// scenarios subcommand
// ============================================================================

pub fn cmd_scenarios(groups: &[String]) {
    let all = catalog();
    for scenario in select(&all, groups, None) {
        println!(
            "{:<44} {:?}  {}",
            scenario.id, scenario.requires, scenario.title
        );
    }
}

// ============================================================================
// probe subcommand
// ============================================================================

pub fn cmd_probe(args: &DeviceArgs, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let ip = args
        .device_ip
        .clone()
        .or_else(|| config.device.ip.clone())
        .ok_or("device IP missing: pass --device-ip")?;
    let ignore_ssl = args.ignore_ssl || config.device.ignore_ssl;

    let report = ProtocolProbe::new(&ip, ignore_ssl, PROBE_TIMEOUT)?.run()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
