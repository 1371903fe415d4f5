use thiserror::Error;

/// Non-fatal analysis failures, surfaced to the UI as advisory strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Too few landmarks survived confidence filtering for this frame.
    #[error("insufficient detection: {found} of {required} confident landmarks")]
    InsufficientLandmarks { found: usize, required: usize },

    /// Frame size hint is degenerate; normalized thresholds are undefined.
    #[error("invalid frame size {width}x{height}")]
    InvalidFrameSize { width: u32, height: u32 },
}
