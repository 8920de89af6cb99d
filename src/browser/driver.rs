use std::time::Duration;

use crate::browser::error::DriverError;

/// Synchronous browser operations the page objects are written against.
///
/// Selectors are Playwright selectors (CSS plus `text=`, `:has-text()` and
/// `>> nth=` chains). Single-element queries act on the first match; a
/// missing element reads as `None`, `false` or an empty list rather than
/// an error.
pub trait ConsoleDriver {
    /// Drop cookies and storage and open a blank page.
    fn reset_context(&mut self) -> Result<(), DriverError>;

    /// Navigate and return the HTTP status of the main response, if any.
    fn navigate(&mut self, url: &str) -> Result<Option<u16>, DriverError>;

    /// Default timeout for subsequent actions and navigations.
    fn set_timeout(&mut self, timeout: Duration) -> Result<(), DriverError>;

    fn current_url(&mut self) -> Result<String, DriverError>;

    fn title(&mut self) -> Result<String, DriverError>;

    fn count(&mut self, selector: &str) -> Result<u32, DriverError>;

    fn is_visible(&mut self, selector: &str) -> Result<bool, DriverError>;

    fn is_enabled(&mut self, selector: &str) -> Result<bool, DriverError>;

    fn is_checked(&mut self, selector: &str) -> Result<bool, DriverError>;

    fn text(&mut self, selector: &str) -> Result<Option<String>, DriverError>;

    fn attribute(&mut self, selector: &str, name: &str) -> Result<Option<String>, DriverError>;

    fn input_value(&mut self, selector: &str) -> Result<Option<String>, DriverError>;

    /// Visible text of every `<option>` under a select.
    fn option_texts(&mut self, selector: &str) -> Result<Vec<String>, DriverError>;

    /// Text of the currently selected option.
    fn selected_option(&mut self, selector: &str) -> Result<Option<String>, DriverError>;

    /// Cell texts of each `<tr>` in the matched table.
    fn table_rows(&mut self, selector: &str) -> Result<Vec<Vec<String>>, DriverError>;

    fn fill(&mut self, selector: &str, value: &str) -> Result<(), DriverError>;

    fn click(&mut self, selector: &str) -> Result<(), DriverError>;

    /// Select an option by its label.
    fn select_option(&mut self, selector: &str, label: &str) -> Result<(), DriverError>;

    fn set_checked(&mut self, selector: &str, checked: bool) -> Result<(), DriverError>;

    fn screenshot(&mut self, path: &str) -> Result<(), DriverError>;

    /// Block between polling attempts.
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
