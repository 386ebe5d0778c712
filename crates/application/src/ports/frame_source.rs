use async_trait::async_trait;
use ferrous_sniffer_domain::{DomainError, RawFrame};

/// Supplies captured frames in arrival order.
#[async_trait]
pub trait FrameSource: Send + Sync {
    /// `Ok(None)` once the capture is exhausted.
    async fn next_frame(&self) -> Result<Option<RawFrame>, DomainError>;
}
