use async_trait::async_trait;
use ferrous_sniffer_application::ports::DocumentSink;
use ferrous_sniffer_domain::config::{OutputConfig, OutputFormat};
use ferrous_sniffer_domain::{DomainError, PacketDocument};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tokio::sync::Mutex;
use tracing::info;

/// Writes every document as JSON to stdout or a file, flushing after each one
/// so a downstream reader sees documents as they are produced.
pub struct JsonConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
    format: OutputFormat,
}

impl JsonConsoleSink {
    pub fn new(writer: Box<dyn Write + Send>, format: OutputFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(Box::new(io::stdout()), format)
    }

    pub fn create(path: &str, format: OutputFormat) -> Result<Self, DomainError> {
        let file = File::create(path)
            .map_err(|e| DomainError::OutputError(format!("Failed to create {}: {}", path, e)))?;
        Ok(Self::new(Box::new(BufWriter::new(file)), format))
    }

    pub fn from_config(config: &OutputConfig) -> Result<Self, DomainError> {
        let sink = if config.is_stdout() {
            Self::stdout(config.format)
        } else {
            Self::create(&config.destination, config.format)?
        };

        info!(
            destination = %config.destination,
            format = %config.format,
            "Document sink ready"
        );

        Ok(sink)
    }

    fn render(&self, document: &PacketDocument) -> Result<String, DomainError> {
        let body = match self.format {
            OutputFormat::Pretty => serde_json::to_string_pretty(document),
            OutputFormat::Compact => serde_json::to_string(document),
        }
        .map_err(|e| DomainError::SerializationError(e.to_string()))?;

        Ok(match self.format {
            OutputFormat::Pretty => format!("{}\n\n", body),
            OutputFormat::Compact => format!("{}\n", body),
        })
    }
}

#[async_trait]
impl DocumentSink for JsonConsoleSink {
    async fn publish(&self, document: &PacketDocument) -> Result<(), DomainError> {
        let rendered = self.render(document)?;
        let mut writer = self.writer.lock().await;
        writer
            .write_all(rendered.as_bytes())
            .map_err(|e| DomainError::OutputError(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| DomainError::OutputError(e.to_string()))
    }

    async fn flush(&self) -> Result<(), DomainError> {
        self.writer
            .lock()
            .await
            .flush()
            .map_err(|e| DomainError::OutputError(e.to_string()))
    }
}
