use async_trait::async_trait;
use ferrous_sniffer_domain::{DomainError, PacketDocument};

#[async_trait]
pub trait DocumentSink: Send + Sync {
    async fn publish(&self, document: &PacketDocument) -> Result<(), DomainError>;

    async fn flush(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
