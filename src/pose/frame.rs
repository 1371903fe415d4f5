use serde::{Deserialize, Serialize};

/// Source image dimensions in the frame's pixel coordinate space.
///
/// Used to normalize distance-based classification thresholds so they hold
/// across camera resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
