pub mod access;
pub mod base;
pub mod dashboard;
pub mod display;
pub mod general;
pub mod gnss;
pub mod locators;
pub mod login;
pub mod navigation;
pub mod network;
pub mod outputs;
pub mod ptp;
pub mod session_controls;
pub mod snmp;
pub mod syslog;
pub mod time;
pub mod timeouts;
pub mod unlock;
pub mod upload;

pub use base::{ConsolePage, LoginOutcome};
pub use timeouts::Timeouts;
