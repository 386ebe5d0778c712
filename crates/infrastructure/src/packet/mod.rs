pub mod assembler;
pub mod captured;
pub mod projectors;

pub use assembler::{assemble, FrameNormalizer};
pub use captured::{CapturedPacket, IcmpHeader};
