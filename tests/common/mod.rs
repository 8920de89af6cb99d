#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use kronos_console_e2e::browser::{ConsoleDriver, DriverError};
use kronos_console_e2e::capability::{ConfigKind, ConfigSection, DeviceProfile, Series};
use kronos_console_e2e::device::{DeviceSession, DeviceTarget};
use kronos_console_e2e::pages::locators::{
    dashboard, display, form, general, gnss, login, nav, network, session, time, unlock, upload,
};

pub const BASE_URL: &str = "https://10.0.0.5";
pub const HTTP_URL: &str = "http://10.0.0.5";
pub const DEVICE_IP: &str = "10.0.0.5";
pub const PASSWORD: &str = "secret";

// ============================================================================
// Scripted in-memory console
// ============================================================================

/// One element in the fake DOM, keyed by the exact selector string the
/// page objects use.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeElement {
    pub visible: bool,
    pub enabled: bool,
    pub checked: bool,
    pub count: u32,
    pub text: Option<String>,
    pub value: Option<String>,
    pub attributes: HashMap<String, String>,
    pub options: Vec<String>,
    pub selected: Option<String>,
    pub rows: Vec<Vec<String>>,
    /// Save buttons that stay disabled until the form is edited.
    pub enabled_on_edit: bool,
}

impl FakeElement {
    pub fn shown() -> Self {
        Self {
            visible: true,
            enabled: true,
            checked: false,
            count: 1,
            text: None,
            value: None,
            attributes: HashMap::new(),
            options: Vec::new(),
            selected: None,
            rows: Vec::new(),
            enabled_on_edit: false,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self.selected = self.options.first().cloned();
        self
    }

    pub fn with_rows(mut self, rows: &[&[&str]]) -> Self {
        self.rows = rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn enabled_on_edit(mut self) -> Self {
        self.enabled_on_edit = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Elements replaced when `label` is selected in `selector`.
#[derive(Debug, Clone)]
pub struct SelectHook {
    pub selector: String,
    pub label: String,
    pub updates: Vec<(String, FakeElement)>,
}

/// Device state the fake driver mutates. Shared through `Rc<RefCell<_>>`
/// so tests can inspect it after the session took the driver.
#[derive(Debug, Default)]
pub struct FakeState {
    pub url: String,
    pub status_password: String,
    pub config_password: String,
    pub logged_in: bool,
    pub unlocked: bool,
    pub login_error: bool,
    /// Section links shown once the configuration is unlocked.
    pub sections: Vec<ConfigSection>,
    /// Path -> selector -> element. Path `*` applies everywhere.
    pub pages: HashMap<String, HashMap<String, FakeElement>>,
    pub hooks: Vec<SelectHook>,
    pub filled: HashMap<String, String>,
    /// Unsaved edits on the current page.
    pub dirty: bool,
    /// (page key, selector, checked before the first edit).
    pub original_checks: Vec<(String, String, bool)>,
    /// Upcoming navigations that fail with a recoverable error.
    pub failing_navigations: u32,
    pub navigations: Vec<String>,
    pub clicks: Vec<String>,
    pub resets: u32,
    pub timeouts: Vec<Duration>,
    pub screenshots: Vec<String>,
    pub paused: Duration,
}

impl FakeState {
    pub fn path(&self) -> String {
        self.url
            .strip_prefix(BASE_URL)
            .or_else(|| self.url.strip_prefix(HTTP_URL))
            .map(|p| if p.is_empty() { "/".to_string() } else { p.to_string() })
            .unwrap_or_else(|| self.url.clone())
    }

    pub fn add(&mut self, path: &str, selector: &str, element: FakeElement) {
        self.pages
            .entry(path.to_string())
            .or_default()
            .insert(selector.to_string(), element);
    }

    /// A collapsed Bootstrap panel with its toggle link.
    pub fn add_panel(&mut self, path: &str, id: &str) {
        self.add(
            path,
            &format!("#{}_collapse", id),
            FakeElement::shown().with_attr("class", "panel-collapse collapse"),
        );
        self.add(path, &format!("a[href='#{}_collapse']", id), FakeElement::shown());
    }

    fn dynamic(&self, selector: &str) -> Option<FakeElement> {
        let path = self.path();
        if path == login::AUTH_PATH {
            if selector == login::PASSWORD || selector == login::SUBMIT {
                return Some(FakeElement::shown());
            }
        }
        if path == "/login" && (selector == unlock::PASSWORD || selector == unlock::SUBMIT) {
            return Some(FakeElement::shown());
        }
        if selector == login::ERROR && self.login_error {
            return Some(FakeElement::shown().with_text("Incorrect password"));
        }
        if self.logged_in && path != login::AUTH_PATH {
            if !self.unlocked
                && path == "/"
                && (selector == unlock::CONFIGURE_LINK || selector == dashboard::LOCKED_INDICATOR)
            {
                return Some(FakeElement::shown());
            }
            if self.unlocked && self.section_for_link(selector).is_some() {
                return Some(FakeElement::shown());
            }
        }
        None
    }

    fn section_for_link(&self, selector: &str) -> Option<ConfigSection> {
        self.sections
            .iter()
            .copied()
            .find(|s| nav::section_link(s.label()) == selector)
    }

    pub fn element(&self, selector: &str) -> Option<FakeElement> {
        if let Some(element) = self.dynamic(selector) {
            return Some(element);
        }
        let path = self.path();
        self.pages
            .get(&path)
            .and_then(|page| page.get(selector))
            .or_else(|| self.pages.get("*").and_then(|page| page.get(selector)))
            .cloned()
    }

    fn page_key(&self, selector: &str) -> String {
        let path = self.path();
        let on_page = self
            .pages
            .get(&path)
            .is_some_and(|page| page.contains_key(selector));
        if on_page { path } else { "*".to_string() }
    }

    fn element_mut(&mut self, selector: &str) -> Option<&mut FakeElement> {
        let key = self.page_key(selector);
        self.pages.get_mut(&key).and_then(|page| page.get_mut(selector))
    }

    /// What a cancel or a reload does: typed values and toggles are lost.
    fn discard_edits(&mut self) {
        for (key, selector, checked) in std::mem::take(&mut self.original_checks) {
            if let Some(element) = self.pages.get_mut(&key).and_then(|page| page.get_mut(&selector)) {
                element.checked = checked;
            }
        }
        self.filled.clear();
        self.dirty = false;
    }

    /// Redirects stay on whichever scheme the browser is using.
    fn navigate_to(&mut self, path: &str) {
        let origin = if self.url.starts_with(HTTP_URL) { HTTP_URL } else { BASE_URL };
        self.url = format!("{}{}", origin, path);
        self.dirty = false;
    }
}

fn protocol(command: &str, error: &str) -> DriverError {
    DriverError::Protocol {
        command: command.to_string(),
        error: error.to_string(),
    }
}

pub struct FakeDriver {
    pub state: Rc<RefCell<FakeState>>,
}

impl FakeDriver {
    pub fn new(state: Rc<RefCell<FakeState>>) -> Self {
        Self { state }
    }
}

impl ConsoleDriver for FakeDriver {
    fn reset_context(&mut self) -> Result<(), DriverError> {
        let mut s = self.state.borrow_mut();
        s.resets += 1;
        s.logged_in = false;
        s.unlocked = false;
        s.login_error = false;
        s.discard_edits();
        s.url = "about:blank".to_string();
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> Result<Option<u16>, DriverError> {
        let mut s = self.state.borrow_mut();
        s.navigations.push(url.to_string());
        if s.failing_navigations > 0 {
            s.failing_navigations -= 1;
            return Err(protocol("navigate", "net::ERR_CONNECTION_TIMED_OUT"));
        }
        s.url = url.trim_end_matches('/').to_string();
        let path = s.path();
        if !s.logged_in && path != login::AUTH_PATH {
            s.navigate_to(login::AUTH_PATH);
        }
        Ok(Some(200))
    }

    fn set_timeout(&mut self, timeout: Duration) -> Result<(), DriverError> {
        self.state.borrow_mut().timeouts.push(timeout);
        Ok(())
    }

    fn current_url(&mut self) -> Result<String, DriverError> {
        Ok(self.state.borrow().url.clone())
    }

    fn title(&mut self) -> Result<String, DriverError> {
        Ok("Kronos".to_string())
    }

    fn count(&mut self, selector: &str) -> Result<u32, DriverError> {
        Ok(self.state.borrow().element(selector).map(|e| e.count).unwrap_or(0))
    }

    fn is_visible(&mut self, selector: &str) -> Result<bool, DriverError> {
        Ok(self.state.borrow().element(selector).is_some_and(|e| e.visible))
    }

    fn is_enabled(&mut self, selector: &str) -> Result<bool, DriverError> {
        let s = self.state.borrow();
        Ok(s.element(selector)
            .is_some_and(|e| if e.enabled_on_edit { s.dirty } else { e.enabled }))
    }

    fn is_checked(&mut self, selector: &str) -> Result<bool, DriverError> {
        Ok(self.state.borrow().element(selector).is_some_and(|e| e.checked))
    }

    fn text(&mut self, selector: &str) -> Result<Option<String>, DriverError> {
        Ok(self.state.borrow().element(selector).and_then(|e| e.text))
    }

    fn attribute(&mut self, selector: &str, name: &str) -> Result<Option<String>, DriverError> {
        Ok(self
            .state
            .borrow()
            .element(selector)
            .and_then(|e| e.attributes.get(name).cloned()))
    }

    fn input_value(&mut self, selector: &str) -> Result<Option<String>, DriverError> {
        let s = self.state.borrow();
        if let Some(value) = s.filled.get(selector) {
            return Ok(Some(value.clone()));
        }
        Ok(s.element(selector).and_then(|e| e.value))
    }

    fn option_texts(&mut self, selector: &str) -> Result<Vec<String>, DriverError> {
        Ok(self
            .state
            .borrow()
            .element(selector)
            .map(|e| e.options)
            .unwrap_or_default())
    }

    fn selected_option(&mut self, selector: &str) -> Result<Option<String>, DriverError> {
        Ok(self.state.borrow().element(selector).and_then(|e| e.selected))
    }

    fn table_rows(&mut self, selector: &str) -> Result<Vec<Vec<String>>, DriverError> {
        Ok(self
            .state
            .borrow()
            .element(selector)
            .map(|e| e.rows)
            .unwrap_or_default())
    }

    fn fill(&mut self, selector: &str, value: &str) -> Result<(), DriverError> {
        let mut s = self.state.borrow_mut();
        if s.element(selector).is_none() {
            return Err(protocol("fill", "element not found"));
        }
        s.filled.insert(selector.to_string(), value.to_string());
        s.dirty = true;
        Ok(())
    }

    fn click(&mut self, selector: &str) -> Result<(), DriverError> {
        let mut s = self.state.borrow_mut();
        if s.element(selector).is_none() {
            return Err(protocol("click", "element not found"));
        }
        s.clicks.push(selector.to_string());
        let path = s.path();

        if selector == login::SUBMIT && path == login::AUTH_PATH {
            if s.filled.get(login::PASSWORD) == Some(&s.status_password) {
                s.logged_in = true;
                s.login_error = false;
                s.navigate_to("/");
            } else {
                s.login_error = true;
            }
        } else if selector == unlock::SUBMIT && path == "/login" {
            if s.filled.get(unlock::PASSWORD) == Some(&s.config_password) {
                s.unlocked = true;
                s.login_error = false;
                s.navigate_to("/");
            } else {
                s.login_error = true;
            }
        } else if selector.contains("button_cancel") {
            s.discard_edits();
        } else if selector == unlock::CONFIGURE_LINK {
            s.navigate_to("/login");
        } else if let Some(section) = s.section_for_link(selector) {
            s.navigate_to(section.path());
        } else if let Some(id) = selector
            .strip_prefix("a[href='#")
            .and_then(|rest| rest.strip_suffix("_collapse']"))
        {
            let collapse = format!("#{}_collapse", id);
            if let Some(panel) = s.element_mut(&collapse) {
                panel
                    .attributes
                    .insert("class".to_string(), "panel-collapse collapse in".to_string());
            }
        }
        Ok(())
    }

    fn select_option(&mut self, selector: &str, label: &str) -> Result<(), DriverError> {
        let mut s = self.state.borrow_mut();
        let updates: Vec<(String, FakeElement)> = s
            .hooks
            .iter()
            .filter(|h| h.selector == selector && h.label == label)
            .flat_map(|h| h.updates.clone())
            .collect();
        let path = s.path();
        match s.element_mut(selector) {
            Some(element) if element.options.iter().any(|o| o == label) => {
                element.selected = Some(label.to_string());
            }
            _ => return Err(protocol("select", "option not found")),
        }
        for (sel, element) in updates {
            s.add(&path, &sel, element);
        }
        Ok(())
    }

    fn set_checked(&mut self, selector: &str, checked: bool) -> Result<(), DriverError> {
        let mut s = self.state.borrow_mut();
        let key = s.page_key(selector);
        let before = match s.element_mut(selector) {
            Some(element) if element.enabled => {
                let before = element.checked;
                element.checked = checked;
                before
            }
            _ => return Err(protocol("set_checked", "element not found")),
        };
        if !s.original_checks.iter().any(|(k, sel, _)| *k == key && sel == selector) {
            s.original_checks.push((key, selector.to_string(), before));
        }
        s.dirty = true;
        Ok(())
    }

    fn screenshot(&mut self, path: &str) -> Result<(), DriverError> {
        std::fs::write(path, b"png").map_err(|e| DriverError::SessionIo(e.to_string()))?;
        self.state.borrow_mut().screenshots.push(path.to_string());
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.state.borrow_mut().paused += duration;
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// A console showing `model` on its dashboard, with both passwords set to
/// [`PASSWORD`] and every section of `profile` in the menu.
pub fn console_for(model: &str, profile: Option<&DeviceProfile>) -> Rc<RefCell<FakeState>> {
    let mut state = FakeState {
        url: "about:blank".to_string(),
        status_password: PASSWORD.to_string(),
        config_password: PASSWORD.to_string(),
        sections: profile
            .map(|p| p.available_sections())
            .unwrap_or_else(|| ConfigSection::BASE.to_vec()),
        ..FakeState::default()
    };
    state.add("/", dashboard::TABLES, FakeElement::shown().with_count(4));
    state.add(
        "/",
        dashboard::DEVICE_INFO_TABLE,
        FakeElement::shown().with_rows(&[
            &["Model Number:", model],
            &["Serial Number:", "0042"],
            &["Firmware Version:", "3.1.0"],
        ]),
    );
    Rc::new(RefCell::new(state))
}

pub fn session_with(state: &Rc<RefCell<FakeState>>) -> DeviceSession {
    let driver = FakeDriver::new(Rc::clone(state));
    DeviceSession::new(Box::new(driver), DeviceTarget::new(DEVICE_IP, PASSWORD, true))
}

/// Render the configuration pages the way `profile`'s firmware does, with
/// plausible saved values, so whole scenario groups can run.
pub fn stock_pages(state: &Rc<RefCell<FakeState>>, profile: &DeviceProfile) {
    let mut s = state.borrow_mut();
    s.add("/", session::LOGOUT, FakeElement::shown());
    stock_network(&mut s, profile);
    stock_time(&mut s, profile);
    stock_general(&mut s, profile);
    stock_gnss(&mut s, profile);
    stock_display(&mut s);
    if profile.series == Series::Three {
        s.add("/upload", upload::FILE_INPUT, FakeElement::shown().with_attr("type", "file"));
        s.add("/upload", upload::SUBMIT, FakeElement::shown());
    }
}

fn stock_network(s: &mut FakeState, profile: &DeviceProfile) {
    s.add("/network", network::GATEWAY, FakeElement::shown().with_value("10.0.0.1"));
    if profile.series == Series::Three {
        s.add("/network", network::MODE, FakeElement::shown().with_options(&["Static", "DHCP"]));
    }
    for iface in profile.interfaces {
        if profile.series == Series::Three {
            s.add_panel("/network", iface.name);
            if let Ok(button) = profile.save_button(ConfigKind::Network, Some(iface.name)) {
                s.add("/network", &button.selector, FakeElement::shown());
            }
        }
        for &field in iface.fields {
            s.add("/network", &profile.field_selector(field, iface.name), FakeElement::shown());
        }
    }
}

fn stock_time(s: &mut FakeState, profile: &DeviceProfile) {
    if profile.series == Series::Three {
        s.add_panel("/time", time::TIMEZONE_PANEL);
    }
    s.add("/time", time::TIMEZONE, FakeElement::shown().with_options(profile.timezones));
}

fn stock_general(s: &mut FakeState, profile: &DeviceProfile) {
    for (name, value) in [
        ("identifier", "kronos-lab"),
        ("location", "rack 4"),
        ("contact", "noc@example.com"),
        ("description", "grandmaster"),
    ] {
        let mut input = FakeElement::shown().with_value(value);
        if let Some(max) = profile.general_field_max_length() {
            input = input.with_attr("maxlength", &max.to_string());
        }
        s.add("/general", &general::field(name), input);
    }
    s.add("/general", form::SAVE, FakeElement::shown().enabled_on_edit());
    s.add("/general", form::CANCEL, FakeElement::shown());
}

fn stock_gnss(s: &mut FakeState, profile: &DeviceProfile) {
    for &constellation in profile.gnss_constellations {
        let checkbox = gnss::constellation(&profile.gnss_checkbox_name(constellation));
        let element = if constellation == "GPS" {
            FakeElement::shown().checked(true).disabled()
        } else {
            FakeElement::shown().checked(constellation == "Galileo")
        };
        s.add("/gnss", &checkbox, element);
    }
    s.add("/gnss", gnss::SAVE, FakeElement::shown().enabled_on_edit());
    s.add("/gnss", form::CANCEL, FakeElement::shown());
}

fn stock_display(s: &mut FakeState) {
    for n in 1..=display::MODES {
        let mode = FakeElement::shown().with_attr("type", "checkbox").checked(n == 1);
        s.add("/display", &display::mode(n), mode);
    }
    s.add("/display", form::SAVE, FakeElement::shown().enabled_on_edit());
}
