pub mod auth;
pub mod capability;
pub mod display;
pub mod general;
pub mod gnss;
pub mod navigation;
pub mod network;
pub mod outputs;
pub mod ptp;
pub mod security;
pub mod session;
pub mod snmp;
pub mod syslog;
pub mod time;
pub mod upload;
