use thiserror::Error;

use crate::capability::capability_model::{
    ConfigKind, ConfigSection, DeviceProfile, InterfaceField, InterfaceSpec, SaveButton, Series,
    SignalType, TimeReference,
};
use crate::capability::table::{DEVICE_TABLE, TIMEZONE_DISPLAY_NAMES};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("unknown device model '{0}': no capability profile defined")]
    UnknownModel(String),

    #[error("output {output} out of range for {model} (1..={max})")]
    OutputOutOfRange { model: String, output: u8, max: u8 },

    #[error("interface '{interface}' not present on {model}")]
    UnknownInterface { model: String, interface: String },

    #[error("{kind} save on {model} needs an interface")]
    InterfaceRequired { model: String, kind: String },

    #[error("interface '{interface}' on {model} is not PTP-capable")]
    NotPtpCapable { model: String, interface: String },
}

/// Resolve a detected model string to its capability profile.
///
/// Surrounding whitespace is ignored. There is no fallback profile: an
/// unrecognized model is an error the caller must treat as fatal.
pub fn lookup(model: &str) -> Result<&'static DeviceProfile, CapabilityError> {
    let key = model.trim();
    DEVICE_TABLE
        .iter()
        .find(|p| p.model == key)
        .ok_or_else(|| CapabilityError::UnknownModel(key.to_string()))
}

/// All known model strings, in table order.
pub fn all_models() -> Vec<&'static str> {
    DEVICE_TABLE.iter().map(|p| p.model).collect()
}

/// Map a timezone display name to its canonical name.
pub fn canonical_timezone(display: &str) -> &str {
    let display = display.trim();
    TIMEZONE_DISPLAY_NAMES
        .iter()
        .find(|(shown, _)| *shown == display)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(display)
}

const LOW_OUTPUT_SIGNALS: &[SignalType] = &[
    SignalType::Off,
    SignalType::IrigB(120),
    SignalType::IrigB(122),
    SignalType::IrigB(124),
    SignalType::IrigB(126),
];

const HIGH_OUTPUT_SIGNALS: &[SignalType] = &[
    SignalType::Off,
    SignalType::IrigB(0),
    SignalType::IrigB(2),
    SignalType::IrigB(4),
    SignalType::IrigB(6),
    SignalType::Pps,
    SignalType::Ppm,
];

const BOTH_REFERENCES: &[TimeReference] = &[TimeReference::Utc, TimeReference::Local];
const LOCAL_ONLY: &[TimeReference] = &[TimeReference::Local];

const GENERIC_SAVE: &str = "button#button_save";
const SERIES3_TEXT_MAX_LENGTH: usize = 29;

impl DeviceProfile {
    /// Scale factor applied to every UI wait on this model.
    ///
    /// Timeout or navigation issues dominate (2.0), then PTP or
    /// multi-interface issues (1.5). The order issues are listed in has
    /// no effect.
    pub fn timeout_multiplier(&self) -> f64 {
        let mut multiplier = 1.0;
        for issue in self.known_issues {
            let issue = issue.to_lowercase();
            if issue.contains("timeout") || issue.contains("navigation") {
                return 2.0;
            }
            if issue.contains("ptp") || issue.contains("multi-interface") {
                multiplier = 1.5;
            }
        }
        multiplier
    }

    pub fn is_ptp_supported(&self) -> bool {
        !self.ptp_interfaces.is_empty()
    }

    pub fn interface_names(&self) -> Vec<&'static str> {
        self.interfaces.iter().map(|i| i.name).collect()
    }

    pub fn interface(&self, name: &str) -> Result<&'static InterfaceSpec, CapabilityError> {
        self.interfaces
            .iter()
            .find(|i| i.name == name)
            .ok_or_else(|| CapabilityError::UnknownInterface {
                model: self.model.to_string(),
                interface: name.to_string(),
            })
    }

    pub fn is_ptp_interface(&self, name: &str) -> bool {
        self.ptp_interfaces.contains(&name)
    }

    pub fn supports_field(&self, interface: &str, field: InterfaceField) -> bool {
        self.interface(interface)
            .map(|spec| spec.fields.contains(&field))
            .unwrap_or(false)
    }

    pub fn available_sections(&self) -> Vec<ConfigSection> {
        let mut sections = ConfigSection::BASE.to_vec();
        if self.series == Series::Three {
            sections.push(ConfigSection::Upload);
            sections.push(ConfigSection::Ptp);
        }
        sections
    }

    pub fn has_section(&self, section: ConfigSection) -> bool {
        self.available_sections().contains(&section)
    }

    /// `maxlength` on the General page's text inputs. Series 2 firmware
    /// sets none and accepts any length.
    pub fn general_field_max_length(&self) -> Option<usize> {
        match self.series {
            Series::Three => Some(SERIES3_TEXT_MAX_LENGTH),
            Series::Two => None,
        }
    }

    /// Name attribute of a constellation checkbox on the GNSS page. Only
    /// GPS differs by series.
    pub fn gnss_checkbox_name(&self, constellation: &str) -> String {
        match (self.series, constellation) {
            (Series::Two, "GPS") => "GPS".to_string(),
            _ => constellation.to_lowercase(),
        }
    }

    /// Signal choices offered by output `output` (1-based).
    pub fn output_signal_types(&self, output: u8) -> Result<&'static [SignalType], CapabilityError> {
        match output {
            1 | 2 if output <= self.max_outputs => Ok(LOW_OUTPUT_SIGNALS),
            n if n >= 3 && n <= self.max_outputs => Ok(HIGH_OUTPUT_SIGNALS),
            _ => Err(CapabilityError::OutputOutOfRange {
                model: self.model.to_string(),
                output,
                max: self.max_outputs,
            }),
        }
    }

    /// Whether `signal` is offered by output `output`. Out-of-range outputs
    /// offer nothing.
    pub fn validate_signal(&self, output: u8, signal: SignalType) -> bool {
        self.output_signal_types(output)
            .map(|offered| offered.contains(&signal))
            .unwrap_or(false)
    }

    /// Time reference radios the outputs page shows for `signal`.
    pub fn expected_time_references(&self, signal: SignalType) -> &'static [TimeReference] {
        match signal {
            SignalType::Pps | SignalType::Ppm => LOCAL_ONLY,
            SignalType::IrigB(_) | SignalType::Off => BOTH_REFERENCES,
        }
    }

    /// Accepts either a canonical zone name or its display name.
    pub fn validate_timezone(&self, name: &str) -> bool {
        let canonical = canonical_timezone(name);
        self.timezones.contains(&canonical)
    }

    /// Locate the save button for a form of kind `kind`.
    ///
    /// Series 3 network and PTP forms have one button per interface port;
    /// PTP ports sit in collapsed panels.
    pub fn save_button(
        &self,
        kind: ConfigKind,
        interface: Option<&str>,
    ) -> Result<SaveButton, CapabilityError> {
        let generic = SaveButton {
            selector: GENERIC_SAVE.to_string(),
            panel_expansion_required: false,
        };
        if self.series == Series::Two {
            return Ok(generic);
        }

        match kind {
            ConfigKind::Network | ConfigKind::Ptp => {
                let iface = interface.ok_or_else(|| CapabilityError::InterfaceRequired {
                    model: self.model.to_string(),
                    kind: format!("{:?}", kind).to_lowercase(),
                })?;
                self.interface(iface)?;
                if kind == ConfigKind::Ptp && !self.is_ptp_interface(iface) {
                    return Err(CapabilityError::NotPtpCapable {
                        model: self.model.to_string(),
                        interface: iface.to_string(),
                    });
                }
                Ok(SaveButton {
                    selector: format!("button#button_save_port_{}", iface),
                    panel_expansion_required: kind == ConfigKind::Ptp,
                })
            }
            _ => Ok(generic),
        }
    }

    /// CSS selector for a per-interface field.
    ///
    /// Series 3 prefixes ids with the interface; Series 2 has a single form
    /// with bare ids.
    pub fn field_selector(&self, field: InterfaceField, interface: &str) -> String {
        match self.series {
            Series::Three => format!("#{}_{}", interface, field.as_str()),
            Series::Two => format!("#{}", field.as_str()),
        }
    }
}
