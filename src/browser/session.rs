use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::browser::driver::ConsoleDriver;
use crate::browser::error::DriverError;

pub const DEFAULT_SCRIPT: &str = "node/console-driver/browser_server.js";

/// Request sent to browser_server.js over stdin (one JSON line).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BrowserRequest {
    Navigate {
        cmd: &'static str,
        url: String,
    },
    Timeout {
        cmd: &'static str,
        ms: u64,
    },
    Query {
        cmd: &'static str,
        selector: String,
    },
    Attribute {
        cmd: &'static str,
        selector: String,
        name: String,
    },
    Input {
        cmd: &'static str,
        selector: String,
        value: String,
    },
    Check {
        cmd: &'static str,
        selector: String,
        checked: bool,
    },
    Screenshot {
        cmd: &'static str,
        path: String,
    },
    Bare {
        cmd: &'static str,
    },
}

impl BrowserRequest {
    pub fn navigate(url: &str) -> Self {
        BrowserRequest::Navigate {
            cmd: "navigate",
            url: url.to_string(),
        }
    }

    pub fn timeout(timeout: Duration) -> Self {
        BrowserRequest::Timeout {
            cmd: "set_timeout",
            ms: timeout.as_millis() as u64,
        }
    }

    /// Any command that takes only a selector (`count`, `visible`, `text`, ...).
    pub fn query(cmd: &'static str, selector: &str) -> Self {
        BrowserRequest::Query {
            cmd,
            selector: selector.to_string(),
        }
    }

    pub fn attribute(selector: &str, name: &str) -> Self {
        BrowserRequest::Attribute {
            cmd: "attribute",
            selector: selector.to_string(),
            name: name.to_string(),
        }
    }

    pub fn fill(selector: &str, value: &str) -> Self {
        BrowserRequest::Input {
            cmd: "fill",
            selector: selector.to_string(),
            value: value.to_string(),
        }
    }

    pub fn select(selector: &str, label: &str) -> Self {
        BrowserRequest::Input {
            cmd: "select",
            selector: selector.to_string(),
            value: label.to_string(),
        }
    }

    pub fn set_checked(selector: &str, checked: bool) -> Self {
        BrowserRequest::Check {
            cmd: "set_checked",
            selector: selector.to_string(),
            checked,
        }
    }

    pub fn screenshot(path: &str) -> Self {
        BrowserRequest::Screenshot {
            cmd: "screenshot",
            path: path.to_string(),
        }
    }

    pub fn bare(cmd: &'static str) -> Self {
        BrowserRequest::Bare { cmd }
    }
}

/// Response received from browser_server.js over stdout (one JSON line).
#[derive(Debug, Default, Deserialize)]
pub struct BrowserResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub ready: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub flag: Option<bool>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub items: Option<Vec<String>>,
    #[serde(default)]
    pub rows: Option<Vec<Vec<String>>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }
}

/// How to start the browser server.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchOptions {
    pub script: PathBuf,
    pub browser: BrowserKind,
    pub headless: bool,
    /// Accept the device's self-signed certificate.
    pub ignore_https_errors: bool,
    pub viewport: (u32, u32),
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            script: PathBuf::from(DEFAULT_SCRIPT),
            browser: BrowserKind::Chromium,
            headless: true,
            ignore_https_errors: false,
            viewport: (1024, 768),
        }
    }
}

impl LaunchOptions {
    /// Command-line arguments passed to the script.
    pub fn script_args(&self) -> Vec<String> {
        vec![
            self.script.display().to_string(),
            "--browser".into(),
            self.browser.as_str().into(),
            "--headless".into(),
            self.headless.to_string(),
            "--ignore-https-errors".into(),
            self.ignore_https_errors.to_string(),
            "--viewport".into(),
            format!("{}x{}", self.viewport.0, self.viewport.1),
        ]
    }
}

/// A persistent browser session backed by browser_server.js.
///
/// Launches a long-lived Node.js process that keeps one Playwright browser
/// open. Commands are sent as NDJSON over stdin, responses read from stdout.
pub struct BrowserSession {
    child: Child,
    stdin: ChildStdin,
    reader: BufReader<ChildStdout>,
    closed: bool,
}

impl BrowserSession {
    /// Spawn the browser server and wait for its ready signal.
    pub fn launch(options: &LaunchOptions) -> Result<Self, DriverError> {
        let script = options.script.display().to_string();
        debug!(%script, browser = options.browser.as_str(), headless = options.headless, "launching browser server");

        let mut child = Command::new("node")
            .args(options.script_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| DriverError::Spawn {
                script: script.clone(),
                source: e,
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| DriverError::SessionIo(format!("failed to capture stdin of {}", script)))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| DriverError::SessionIo(format!("failed to capture stdout of {}", script)))?;

        let mut session = BrowserSession {
            child,
            stdin,
            reader: BufReader::new(stdout),
            closed: false,
        };

        let response = session.read_response("ready signal")?;
        if !response.ok || response.ready != Some(true) {
            return Err(DriverError::Protocol {
                command: "launch".into(),
                error: response
                    .error
                    .unwrap_or_else(|| "did not receive ready signal".into()),
            });
        }

        Ok(session)
    }

    fn read_response(&mut self, context: &str) -> Result<BrowserResponse, DriverError> {
        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .map_err(|e| DriverError::SessionIo(format!("failed to read {}: {}", context, e)))?;

        if line.trim().is_empty() {
            return Err(DriverError::SessionIo(format!(
                "empty {} from browser server (process may have died)",
                context
            )));
        }

        serde_json::from_str(line.trim()).map_err(|e| DriverError::Json {
            context: context.to_string(),
            source: e,
        })
    }

    /// Send a request and read the response.
    fn send(&mut self, request: &BrowserRequest) -> Result<BrowserResponse, DriverError> {
        let json = serde_json::to_string(request).map_err(|e| DriverError::Json {
            context: "browser request".into(),
            source: e,
        })?;
        trace!(request = %json, "-> browser");

        writeln!(self.stdin, "{}", json)
            .map_err(|e| DriverError::SessionIo(format!("failed to write request: {}", e)))?;
        self.stdin
            .flush()
            .map_err(|e| DriverError::SessionIo(format!("failed to flush request: {}", e)))?;

        self.read_response("response")
    }

    /// Send a request and verify it succeeded.
    fn send_ok(&mut self, request: &BrowserRequest, command: &str) -> Result<BrowserResponse, DriverError> {
        let response = self.send(request)?;
        if !response.ok {
            return Err(DriverError::Protocol {
                command: command.into(),
                error: response.error.unwrap_or_else(|| "unknown error".into()),
            });
        }
        Ok(response)
    }

    fn query(&mut self, cmd: &'static str, selector: &str) -> Result<BrowserResponse, DriverError> {
        self.send_ok(&BrowserRequest::query(cmd, selector), cmd)
    }

    /// Close the browser and wait for the server to exit.
    pub fn quit(&mut self) -> Result<(), DriverError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        // Best-effort: the process may already be gone
        let _ = self.send(&BrowserRequest::bare("quit"));
        let _ = self.child.wait();
        Ok(())
    }
}

impl ConsoleDriver for BrowserSession {
    fn reset_context(&mut self) -> Result<(), DriverError> {
        self.send_ok(&BrowserRequest::bare("reset"), "reset")?;
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> Result<Option<u16>, DriverError> {
        let response = self.send_ok(&BrowserRequest::navigate(url), "navigate")?;
        Ok(response.status)
    }

    fn set_timeout(&mut self, timeout: Duration) -> Result<(), DriverError> {
        self.send_ok(&BrowserRequest::timeout(timeout), "set_timeout")?;
        Ok(())
    }

    fn current_url(&mut self) -> Result<String, DriverError> {
        let response = self.send_ok(&BrowserRequest::bare("current_url"), "current_url")?;
        response.url.ok_or_else(|| DriverError::Protocol {
            command: "current_url".into(),
            error: "no url in response".into(),
        })
    }

    fn title(&mut self) -> Result<String, DriverError> {
        let response = self.send_ok(&BrowserRequest::bare("title"), "title")?;
        Ok(response.text.unwrap_or_default())
    }

    fn count(&mut self, selector: &str) -> Result<u32, DriverError> {
        Ok(self.query("count", selector)?.count.unwrap_or(0))
    }

    fn is_visible(&mut self, selector: &str) -> Result<bool, DriverError> {
        Ok(self.query("visible", selector)?.flag.unwrap_or(false))
    }

    fn is_enabled(&mut self, selector: &str) -> Result<bool, DriverError> {
        Ok(self.query("enabled", selector)?.flag.unwrap_or(false))
    }

    fn is_checked(&mut self, selector: &str) -> Result<bool, DriverError> {
        Ok(self.query("checked", selector)?.flag.unwrap_or(false))
    }

    fn text(&mut self, selector: &str) -> Result<Option<String>, DriverError> {
        Ok(self.query("text", selector)?.text)
    }

    fn attribute(&mut self, selector: &str, name: &str) -> Result<Option<String>, DriverError> {
        let response = self.send_ok(&BrowserRequest::attribute(selector, name), "attribute")?;
        Ok(response.text)
    }

    fn input_value(&mut self, selector: &str) -> Result<Option<String>, DriverError> {
        Ok(self.query("input_value", selector)?.text)
    }

    fn option_texts(&mut self, selector: &str) -> Result<Vec<String>, DriverError> {
        Ok(self.query("options", selector)?.items.unwrap_or_default())
    }

    fn selected_option(&mut self, selector: &str) -> Result<Option<String>, DriverError> {
        Ok(self.query("selected", selector)?.text)
    }

    fn table_rows(&mut self, selector: &str) -> Result<Vec<Vec<String>>, DriverError> {
        Ok(self.query("table_rows", selector)?.rows.unwrap_or_default())
    }

    fn fill(&mut self, selector: &str, value: &str) -> Result<(), DriverError> {
        self.send_ok(&BrowserRequest::fill(selector, value), "fill")?;
        Ok(())
    }

    fn click(&mut self, selector: &str) -> Result<(), DriverError> {
        self.query("click", selector)?;
        Ok(())
    }

    fn select_option(&mut self, selector: &str, label: &str) -> Result<(), DriverError> {
        self.send_ok(&BrowserRequest::select(selector, label), "select")?;
        Ok(())
    }

    fn set_checked(&mut self, selector: &str, checked: bool) -> Result<(), DriverError> {
        self.send_ok(&BrowserRequest::set_checked(selector, checked), "set_checked")?;
        Ok(())
    }

    fn screenshot(&mut self, path: &str) -> Result<(), DriverError> {
        self.send_ok(&BrowserRequest::screenshot(path), "screenshot")?;
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        let _ = self.quit();
    }
}
