use crate::capability::{DeviceProfile, SignalType, TimeReference};
use crate::error::ConsoleError;
use crate::pages::base::ConsolePage;
use crate::pages::locators::outputs;

/// Timing outputs page: one signal select per output, plus UTC/LOCAL
/// radios that depend on the chosen signal.
pub struct OutputsConfigPage<'a> {
    page: ConsolePage<'a>,
    profile: &'static DeviceProfile,
}

impl<'a> OutputsConfigPage<'a> {
    pub fn new(page: ConsolePage<'a>, profile: &'static DeviceProfile) -> Self {
        Self { page, profile }
    }

    pub fn verify_loaded(&mut self) -> Result<(), ConsoleError> {
        let timeout = self.page.timeouts.default;
        self.page.wait_visible(&outputs::signal(1), timeout)
    }

    /// Number of outputs rendered, probing up to the table's maximum plus one.
    pub fn output_count(&mut self) -> Result<u8, ConsoleError> {
        let mut count = 0;
        for channel in 1..=self.profile.max_outputs.saturating_add(1) {
            if self.page.driver.count(&outputs::signal(channel))? == 0 {
                break;
            }
            count = channel;
        }
        Ok(count)
    }

    /// Parsed signal options; unparseable entries are dropped.
    pub fn signal_options(&mut self, channel: u8) -> Result<Vec<SignalType>, ConsoleError> {
        let texts = self.page.driver.option_texts(&outputs::signal(channel))?;
        Ok(texts.iter().filter_map(|t| SignalType::parse(t)).collect())
    }

    pub fn select_signal(&mut self, channel: u8, signal: SignalType) -> Result<(), ConsoleError> {
        let selector = outputs::signal(channel);
        self.page.require_visible(&selector, "output signal select")?;
        self.page.driver.select_option(&selector, &signal.to_string())?;
        Ok(())
    }

    pub fn time_reference_visible(
        &mut self,
        channel: u8,
        reference: TimeReference,
    ) -> Result<bool, ConsoleError> {
        self.page
            .is_visible(&outputs::time_reference(channel, reference.as_str()))
    }
}
