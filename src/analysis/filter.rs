//! Confidence filtering of raw detector output.

use crate::analysis::error::AnalysisError;
use crate::pose::Pose;

/// Minimum detector confidence for a landmark to be trusted downstream.
pub const CONFIDENCE_THRESHOLD: f32 = 0.7;

/// Minimum number of confident landmarks for a frame to be classifiable.
pub const MIN_CONFIDENT_LANDMARKS: usize = 4;

/// Keep only the landmarks with confidence at or above `threshold`.
///
/// Positions and scores of retained landmarks are unchanged.
pub fn retain_confident(pose: &Pose, threshold: f32) -> Pose {
    pose.iter()
        .filter(|(_, lm)| lm.score >= threshold)
        .map(|(kind, lm)| (*kind, *lm))
        .collect()
}

/// Reject the frame when fewer than `required` landmarks remain after
/// filtering. Non-fatal: callers surface the error as an advisory and
/// continue on the next frame.
pub fn require_detectable(pose: &Pose, required: usize) -> Result<(), AnalysisError> {
    if pose.len() < required {
        return Err(AnalysisError::InsufficientLandmarks {
            found: pose.len(),
            required,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Landmark, LandmarkKind};

    #[test]
    fn test_retain_confident_splits_on_threshold() {
        let pose: Pose = [
            (LandmarkKind::Nose, Landmark::new(10.0, 10.0, 0.95)),
            (LandmarkKind::LeftEar, Landmark::new(5.0, 12.0, 0.7)),
            (LandmarkKind::RightEar, Landmark::new(15.0, 12.0, 0.69)),
            (LandmarkKind::LeftWrist, Landmark::new(30.0, 90.0, 0.1)),
        ]
        .into_iter()
        .collect();

        let kept = retain_confident(&pose, CONFIDENCE_THRESHOLD);

        assert_eq!(kept.len(), 2);
        assert!(kept.contains(LandmarkKind::Nose));
        // Exactly at threshold is kept.
        assert!(kept.contains(LandmarkKind::LeftEar));
        assert!(!kept.contains(LandmarkKind::RightEar));
        assert!(!kept.contains(LandmarkKind::LeftWrist));

        // Survivors are unchanged.
        assert_eq!(
            kept.get(LandmarkKind::Nose),
            pose.get(LandmarkKind::Nose)
        );
    }

    #[test]
    fn test_require_detectable() {
        let pose: Pose = [
            (LandmarkKind::Nose, Landmark::new(0.0, 0.0, 0.9)),
            (LandmarkKind::LeftEar, Landmark::new(0.0, 0.0, 0.9)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            require_detectable(&pose, MIN_CONFIDENT_LANDMARKS),
            Err(AnalysisError::InsufficientLandmarks {
                found: 2,
                required: 4
            })
        );
        assert_eq!(require_detectable(&pose, 2), Ok(()));
    }
}
