use crate::ports::{DocumentSink, FrameSource, PacketNormalizer};
use ferrous_sniffer_domain::DomainError;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Outcome counters for one capture run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureStats {
    pub frames: u64,
    pub published: u64,
    pub malformed: u64,
    pub skipped: u64,
}

/// Use case: Drain a frame source, normalise each frame and hand the
/// documents to a sink in arrival order.
///
/// A frame that fails to normalise is logged and skipped; the run only stops
/// when the source is exhausted, the packet cap is reached, the token is
/// cancelled, or the source or sink report an error.
pub struct NormalizeCaptureUseCase {
    source: Arc<dyn FrameSource>,
    normalizer: Arc<dyn PacketNormalizer>,
    sink: Arc<dyn DocumentSink>,
    max_packets: Option<u64>,
    shutdown: Option<CancellationToken>,
}

impl NormalizeCaptureUseCase {
    pub fn new(
        source: Arc<dyn FrameSource>,
        normalizer: Arc<dyn PacketNormalizer>,
        sink: Arc<dyn DocumentSink>,
    ) -> Self {
        Self {
            source,
            normalizer,
            sink,
            max_packets: None,
            shutdown: None,
        }
    }

    pub fn with_max_packets(mut self, max_packets: Option<u64>) -> Self {
        self.max_packets = max_packets;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub async fn execute(&self) -> Result<CaptureStats, DomainError> {
        let mut stats = CaptureStats::default();

        loop {
            if self.is_cancelled() {
                info!(frames = stats.frames, "Capture cancelled");
                break;
            }

            if self.max_packets.is_some_and(|max| stats.frames >= max) {
                debug!(frames = stats.frames, "Packet limit reached");
                break;
            }

            let Some(frame) = self.source.next_frame().await? else {
                break;
            };
            stats.frames += 1;

            match self.normalizer.normalize(&frame) {
                Ok(document) => {
                    self.sink.publish(&document).await?;
                    stats.published += 1;
                    debug!(
                        frame = stats.frames,
                        layers = ?document.layer_names(),
                        "Packet normalized"
                    );
                }
                Err(DomainError::Decode(e)) => {
                    stats.malformed += 1;
                    warn!(error = %e, frame = stats.frames, "Dropping packet with malformed DNS payload");
                }
                Err(e) => {
                    stats.skipped += 1;
                    warn!(error = %e, frame = stats.frames, "Skipping undecodable frame");
                }
            }
        }

        self.sink.flush().await?;

        info!(
            frames = stats.frames,
            published = stats.published,
            malformed = stats.malformed,
            skipped = stats.skipped,
            "Capture finished"
        );
        Ok(stats)
    }

    fn is_cancelled(&self) -> bool {
        self.shutdown
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }
}
