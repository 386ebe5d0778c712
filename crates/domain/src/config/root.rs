use serde::{Deserialize, Serialize};

use super::capture::CaptureConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::{OutputConfig, OutputFormat};

const LOCAL_CONFIG_PATH: &str = "ferrous-sniffer.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-sniffer/config.toml";

/// Main configuration structure for Ferrous Sniffer
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Capture input and DNS port selection
    #[serde(default)]
    pub capture: CaptureConfig,

    /// Document output
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-sniffer.toml in current directory
    /// 3. /etc/ferrous-sniffer/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(input) = overrides.input {
            self.capture.input = Some(input);
        }
        if let Some(ports) = overrides.dns_ports {
            self.capture.dns_ports = ports;
        }
        if let Some(max) = overrides.max_packets {
            self.capture.max_packets = Some(max);
        }
        if let Some(format) = overrides.output_format {
            self.output.format = format;
        }
        if let Some(destination) = overrides.output_destination {
            self.output.destination = destination;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.capture.input.as_deref() {
            None | Some("") => {
                return Err(ConfigError::Validation(
                    "No capture input configured".to_string(),
                ));
            }
            Some(_) => {}
        }

        if self.capture.dns_ports.is_empty() {
            return Err(ConfigError::Validation(
                "At least one DNS port is required".to_string(),
            ));
        }

        if self.capture.dns_ports.contains(&0) {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.output.destination.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Output destination cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub input: Option<String>,
    pub dns_ports: Option<Vec<u16>>,
    pub max_packets: Option<u64>,
    pub output_format: Option<OutputFormat>,
    pub output_destination: Option<String>,
    pub log_level: Option<String>,
}
