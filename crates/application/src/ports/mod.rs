mod document_sink;
mod frame_source;
mod packet_normalizer;

pub use document_sink::DocumentSink;
pub use frame_source::FrameSource;
pub use packet_normalizer::PacketNormalizer;
