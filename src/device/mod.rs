pub mod session;

pub use session::{DeviceSession, DeviceTarget};
