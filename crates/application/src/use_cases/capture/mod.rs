pub mod normalize_capture;

pub use normalize_capture::{CaptureStats, NormalizeCaptureUseCase};
