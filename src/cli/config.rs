use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::browser::{BrowserKind, LaunchOptions};
use crate::error::ConsoleError;

pub const DEFAULT_CONFIG_PATH: &str = "kronos-e2e.yaml";
pub const ENV_DEVICE_IP: &str = "KRONOS_DEVICE_IP";
pub const ENV_PASSWORD: &str = "KRONOS_PASSWORD";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "kronos-e2e",
    version,
    about = "End-to-end tests for the Kronos time server web console"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: kronos-e2e.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

/// Where the device lives and how to sign in.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DeviceArgs {
    /// Device IP address or host name
    #[arg(long, env = ENV_DEVICE_IP)]
    pub device_ip: Option<String>,

    /// Console password, used for both status login and configuration unlock
    #[arg(long, env = ENV_PASSWORD, hide_env_values = true)]
    pub password: Option<String>,

    /// Accept the device's self-signed certificate
    #[arg(long)]
    pub ignore_ssl: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the scenario catalog against a device
    Run {
        #[command(flatten)]
        device: DeviceArgs,

        /// Directory for per-scenario metadata and failure screenshots
        #[arg(long)]
        results_dir: Option<PathBuf>,

        /// Output format: console, html, junit
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Only run these groups (repeatable)
        #[arg(long = "group")]
        groups: Vec<String>,

        /// Only run scenarios whose id contains this text
        #[arg(long)]
        scenario: Option<String>,

        /// Show the browser window
        #[arg(long)]
        headed: bool,

        /// Browser engine
        #[arg(long, value_enum)]
        browser: Option<BrowserKind>,
    },

    /// Print the capability table, or one model's profile
    Models {
        /// Model number as shown on the dashboard
        #[arg(long)]
        model: Option<String>,
    },

    /// List the scenario catalog
    Scenarios {
        /// Only list these groups (repeatable)
        #[arg(long = "group")]
        groups: Vec<String>,
    },

    /// Report which protocols the device serves its pages on
    Probe {
        #[command(flatten)]
        device: DeviceArgs,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `kronos-e2e.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub ip: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub ignore_ssl: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_script")]
    pub script: PathBuf,

    #[serde(default)]
    pub kind: BrowserKind,

    #[serde(default = "default_true")]
    pub headless: bool,

    #[serde(default = "default_viewport")]
    pub viewport: (u32, u32),
}

impl Default for BrowserConfig {
    fn default() -> Self {
        let launch = LaunchOptions::default();
        Self {
            script: launch.script,
            kind: launch.browser,
            headless: launch.headless,
            viewport: launch.viewport,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub results_dir: Option<PathBuf>,

    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,

    #[serde(default)]
    pub groups: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            results_dir: None,
            format: "console".to_string(),
            output: None,
            groups: Vec::new(),
        }
    }
}

// Serde default helpers
fn default_true() -> bool { true }
fn default_console() -> String { "console".to_string() }
fn default_script() -> PathBuf { LaunchOptions::default().script }
fn default_viewport() -> (u32, u32) { LaunchOptions::default().viewport }

// ============================================================================
// Config File Loading
// ============================================================================

pub fn parse_config(content: &str) -> Result<AppConfig, ConsoleError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            warn!(path = config_path, error = %e, "ignoring malformed config file");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// Device coordinates after merging flags, environment and config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDevice {
    pub ip: String,
    pub password: String,
    pub ignore_ssl: bool,
}

/// Clap already folds the environment into `args`, so flag > env > file
/// holds by taking `args` first.
pub fn resolve_device(args: &DeviceArgs, config: &DeviceConfig) -> Result<ResolvedDevice, ConsoleError> {
    let ip = args
        .device_ip
        .clone()
        .or_else(|| config.ip.clone())
        .filter(|ip| !ip.trim().is_empty())
        .ok_or_else(|| {
            ConsoleError::Config(format!("device IP missing: pass --device-ip or set {}", ENV_DEVICE_IP))
        })?;
    let password = args
        .password
        .clone()
        .or_else(|| config.password.clone())
        .ok_or_else(|| {
            ConsoleError::Config(format!("password missing: pass --password or set {}", ENV_PASSWORD))
        })?;
    Ok(ResolvedDevice {
        ip: ip.trim().to_string(),
        password,
        ignore_ssl: args.ignore_ssl || config.ignore_ssl,
    })
}

/// Browser launch options; `--headed` and `--browser` override the file.
pub fn build_launch_options(
    config: &BrowserConfig,
    headed: bool,
    browser: Option<BrowserKind>,
    ignore_ssl: bool,
) -> LaunchOptions {
    LaunchOptions {
        script: config.script.clone(),
        browser: browser.unwrap_or(config.kind),
        headless: config.headless && !headed,
        ignore_https_errors: ignore_ssl,
        viewport: config.viewport,
    }
}
