use std::path::PathBuf;

use clap::Parser;
use kronos_console_e2e::ConsoleError;
use kronos_console_e2e::browser::BrowserKind;
use kronos_console_e2e::capability::lookup;
use kronos_console_e2e::cli::commands::{describe_profile, render_report};
use kronos_console_e2e::cli::config::{
    AppConfig, BrowserConfig, Cli, Commands, DeviceArgs, DeviceConfig, build_launch_options,
    load_config, parse_config, resolve_device,
};
use kronos_console_e2e::report::SuiteReport;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_run_all_args() {
    let cli = Cli::parse_from([
        "kronos-e2e",
        "-vv",
        "run",
        "--device-ip",
        "10.0.0.5",
        "--password",
        "secret",
        "--ignore-ssl",
        "--results-dir",
        "out",
        "--format",
        "junit",
        "--output",
        "report.xml",
        "--group",
        "ptp",
        "--group",
        "network",
        "--scenario",
        "eth1",
        "--headed",
        "--browser",
        "firefox",
    ]);
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Commands::Run {
            device,
            results_dir,
            format,
            output,
            groups,
            scenario,
            headed,
            browser,
        } => {
            assert_eq!(device.device_ip.as_deref(), Some("10.0.0.5"));
            assert_eq!(device.password.as_deref(), Some("secret"));
            assert!(device.ignore_ssl);
            assert_eq!(results_dir, Some(PathBuf::from("out")));
            assert_eq!(format.as_deref(), Some("junit"));
            assert_eq!(output.as_deref(), Some("report.xml"));
            assert_eq!(groups, vec!["ptp", "network"]);
            assert_eq!(scenario.as_deref(), Some("eth1"));
            assert!(headed);
            assert_eq!(browser, Some(BrowserKind::Firefox));
        }
        _ => panic!("Expected Run command"),
    }
}

#[test]
fn cli_parse_models_and_scenarios() {
    let cli = Cli::parse_from(["kronos-e2e", "models", "--model", "KRONOS-2P-HV-2"]);
    assert!(matches!(cli.command, Commands::Models { model: Some(ref m) } if m == "KRONOS-2P-HV-2"));

    let cli = Cli::parse_from(["kronos-e2e", "scenarios", "--group", "auth"]);
    assert!(matches!(cli.command, Commands::Scenarios { ref groups } if groups == &["auth"]));
}

#[test]
fn cli_global_config_flag_after_subcommand() {
    let cli = Cli::parse_from(["kronos-e2e", "probe", "--device-ip", "10.0.0.9", "--config", "lab.yaml"]);
    assert_eq!(cli.config.as_deref(), Some("lab.yaml"));
}

#[test]
fn cli_rejects_unknown_browser() {
    assert!(Cli::try_parse_from(["kronos-e2e", "run", "--browser", "netscape"]).is_err());
}

// ============================================================================
// Config file
// ============================================================================

#[test]
fn config_defaults_when_file_missing() {
    let config = load_config(Some("/nonexistent/kronos-e2e.yaml"));
    assert!(config.device.ip.is_none());
    assert_eq!(config.run.format, "console");
    assert!(config.browser.headless);
    assert_eq!(config.browser.viewport, (1024, 768));
}

#[test]
fn config_parses_all_sections() {
    let config = parse_config(
        r#"
device:
  ip: 192.168.1.50
  password: lab
  ignore_ssl: true
browser:
  kind: webkit
  headless: false
  viewport: [1280, 800]
run:
  results_dir: results
  format: html
  groups: [auth, ptp]
"#,
    )
    .unwrap();
    assert_eq!(config.device.ip.as_deref(), Some("192.168.1.50"));
    assert!(config.device.ignore_ssl);
    assert_eq!(config.browser.kind, BrowserKind::Webkit);
    assert!(!config.browser.headless);
    assert_eq!(config.browser.viewport, (1280, 800));
    assert_eq!(config.run.format, "html");
    assert_eq!(config.run.groups, vec!["auth", "ptp"]);
    assert_eq!(config.run.results_dir, Some(PathBuf::from("results")));
}

#[test]
fn config_partial_sections_fill_defaults() {
    let config = parse_config("run:\n  output: report.html\n").unwrap();
    assert_eq!(config.run.format, "console");
    assert_eq!(config.run.output.as_deref(), Some("report.html"));
    assert_eq!(config.browser.kind, BrowserKind::Chromium);
}

#[test]
fn config_malformed_is_error_but_load_falls_back() {
    assert!(matches!(parse_config("device: [unclosed"), Err(ConsoleError::Yaml(_))));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kronos-e2e.yaml");
    std::fs::write(&path, "device: [unclosed").unwrap();
    let config = load_config(path.to_str());
    assert!(config.device.ip.is_none());
}

// ============================================================================
// Precedence
// ============================================================================

fn args(ip: Option<&str>, password: Option<&str>) -> DeviceArgs {
    DeviceArgs {
        device_ip: ip.map(str::to_string),
        password: password.map(str::to_string),
        ignore_ssl: false,
    }
}

#[test]
fn flags_override_config_file() {
    let file = DeviceConfig {
        ip: Some("192.168.1.50".into()),
        password: Some("file".into()),
        ignore_ssl: true,
    };
    let device = resolve_device(&args(Some(" 10.0.0.5 "), Some("flag")), &file).unwrap();
    assert_eq!(device.ip, "10.0.0.5");
    assert_eq!(device.password, "flag");
    assert!(device.ignore_ssl);
}

#[test]
fn config_file_fills_missing_flags() {
    let file = DeviceConfig {
        ip: Some("192.168.1.50".into()),
        password: Some("file".into()),
        ignore_ssl: false,
    };
    let device = resolve_device(&args(None, None), &file).unwrap();
    assert_eq!(device.ip, "192.168.1.50");
    assert_eq!(device.password, "file");
}

#[test]
fn missing_ip_or_password_is_config_error() {
    let empty = DeviceConfig::default();
    assert!(matches!(
        resolve_device(&args(None, Some("p")), &empty),
        Err(ConsoleError::Config(ref m)) if m.contains("KRONOS_DEVICE_IP")
    ));
    assert!(matches!(
        resolve_device(&args(Some("10.0.0.5"), None), &empty),
        Err(ConsoleError::Config(ref m)) if m.contains("KRONOS_PASSWORD")
    ));
    assert!(resolve_device(&args(Some("  "), Some("p")), &empty).is_err());
}

#[test]
fn launch_options_merge_flags() {
    let browser = BrowserConfig::default();
    let launch = build_launch_options(&browser, true, Some(BrowserKind::Firefox), true);
    assert!(!launch.headless);
    assert_eq!(launch.browser, BrowserKind::Firefox);
    assert!(launch.ignore_https_errors);

    let launch = build_launch_options(&browser, false, None, false);
    assert!(launch.headless);
    assert_eq!(launch.browser, BrowserKind::Chromium);
}

// ============================================================================
// Command helpers
// ============================================================================

#[test]
fn render_report_picks_format() {
    let report = SuiteReport::from_results("s", Vec::new());
    assert!(render_report(&report, "junit").starts_with("<?xml"));
    assert!(render_report(&report, "html").starts_with("<!DOCTYPE html>"));
    assert!(render_report(&report, "console").starts_with("=== Test Suite: s ==="));
    assert!(render_report(&report, "yaml").starts_with("=== Test Suite"));
}

#[test]
fn describe_profile_includes_derived_values() {
    let text = describe_profile(lookup("KRONOS-3R-HVXX-TCXO-44A").unwrap());
    assert!(text.starts_with("KRONOS-3R-HVXX-TCXO-44A (Series 3)"));
    assert!(text.contains("timeout:        x2.0"));
    assert!(text.contains("ptp interfaces: eth1, eth3"));
    assert!(text.contains("Navigation timeout issues"));
}

#[test]
fn app_config_default_is_empty() {
    let config = AppConfig::default();
    assert!(config.device.password.is_none());
    assert!(config.run.groups.is_empty());
}
