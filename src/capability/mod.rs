pub mod capability_model;
pub mod lookup;
pub mod ptp_profile;
pub mod table;

pub use capability_model::{
    ConfigKind, ConfigSection, DeviceProfile, InterfaceField, InterfaceSpec, SaveButton, Series,
    SignalType, TimeReference,
};
pub use lookup::{CapabilityError, all_models, canonical_timezone, lookup};
pub use ptp_profile::{FieldConstraint, PtpProfile};
