//! Trait for pose-detection inference backends.

use std::fmt::Display;

use crate::pose::Pose;

/// Trait for pose-detection inference backends.
///
/// Implement this to connect any single-person 2D pose model to the
/// posture pipeline. The backend owns its model resources; dropping the
/// implementation releases them.
///
/// # Example
///
/// ```ignore
/// use posturekit_rs::{Pose, PoseSource};
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl PoseSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<Option<Pose>, Self::Error> {
///         // Run inference; Ok(None) when no body is in frame
///         Ok(None)
///     }
/// }
/// ```
pub trait PoseSource {
    /// Error type for detection failures. The display string is what the
    /// pipeline surfaces (truncated) as an advisory.
    type Error: Display;

    /// Run inference on raw image data.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// The detected pose, `Ok(None)` when no body was found, or an error.
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Option<Pose>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to [`Pose`].
pub trait IntoPose {
    /// Convert the output into a pose.
    fn into_pose(self) -> Pose;
}

impl IntoPose for Pose {
    fn into_pose(self) -> Pose {
        self
    }
}
