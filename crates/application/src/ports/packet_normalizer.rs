use ferrous_sniffer_domain::{DomainError, PacketDocument, RawFrame};

/// Turns one raw frame into its normalised document.
///
/// Implementations are stateless: the same frame always yields the same
/// document. A malformed DNS payload surfaces as `DomainError::Decode` and
/// no document is produced for that frame.
pub trait PacketNormalizer: Send + Sync {
    fn normalize(&self, frame: &RawFrame) -> Result<PacketDocument, DomainError>;
}
