pub mod capture;

pub use capture::{CaptureStats, NormalizeCaptureUseCase};
