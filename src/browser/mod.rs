pub mod driver;
pub mod error;
pub mod session;
pub mod wait;

pub use driver::ConsoleDriver;
pub use error::DriverError;
pub use session::{BrowserKind, BrowserSession, LaunchOptions};
