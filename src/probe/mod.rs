pub mod https;

pub use https::{HttpsEnforcement, Protocol, ProtocolProbe, ProbeReport, check_consistency};
