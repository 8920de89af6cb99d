use crate::error::ConsoleError;
use crate::pages::base::ConsolePage;
use crate::pages::locators::session;

/// Session expiry warning and the ways out of a signed-in session. The
/// console shows a modal with a countdown and an extend button shortly
/// before the session times out.
pub struct SessionControls<'a> {
    page: ConsolePage<'a>,
}

impl<'a> SessionControls<'a> {
    pub fn new(page: ConsolePage<'a>) -> Self {
        Self { page }
    }

    /// Modal markup or extend handlers exist in the page, shown or not.
    pub fn modal_markup_present(&mut self) -> Result<bool, ConsoleError> {
        Ok(self.page.driver.count(session::MODAL)? > 0 || self.page.driver.count(session::EXTEND)? > 0)
    }

    /// The expiry warning is on screen.
    pub fn expiry_warning_shown(&mut self) -> Result<bool, ConsoleError> {
        if !self.page.is_visible(session::MODAL)? {
            return Ok(false);
        }
        Ok(self.page.is_visible(session::EXPIRY_TEXT)?
            && (self.page.is_visible(session::COUNTDOWN)? || self.page.is_visible(session::EXTEND)?))
    }

    pub fn logout_available(&mut self) -> Result<bool, ConsoleError> {
        Ok(self.page.driver.count(session::LOGOUT)? > 0)
    }
}
