pub mod capture;
pub mod errors;
pub mod logging;
pub mod output;
pub mod root;

pub use capture::CaptureConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use output::{OutputConfig, OutputFormat};
pub use root::{CliOverrides, Config};
