//! Builder for assembling poses from raw detector output.

use crate::pose::{Landmark, LandmarkKind, Pose};

/// Builder for creating [`Pose`] values from various input formats.
#[derive(Debug, Clone, Default)]
pub struct PoseBuilder {
    pose: Pose,
}

impl PoseBuilder {
    /// Create a new pose builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a landmark with a 2D position and confidence score.
    pub fn landmark(mut self, kind: LandmarkKind, x: f32, y: f32, score: f32) -> Self {
        self.pose.insert(kind, Landmark::new(x, y, score));
        self
    }

    /// Add a landmark including the detector's depth estimate.
    pub fn landmark_3d(
        mut self,
        kind: LandmarkKind,
        x: f32,
        y: f32,
        z: f32,
        score: f32,
    ) -> Self {
        self.pose.insert(kind, Landmark::with_depth(x, y, z, score));
        self
    }

    /// Build the final [`Pose`].
    pub fn build(self) -> Pose {
        self.pose
    }

    /// Assemble a pose from `[x, y, z, score]` rows in detector index
    /// order, as emitted by BlazePose-style models. Rows whose index this
    /// crate does not track are skipped.
    pub fn from_detector_output(rows: &[[f32; 4]]) -> Pose {
        rows.iter()
            .enumerate()
            .filter_map(|(i, row)| {
                LandmarkKind::from_detector_index(i)
                    .map(|kind| (kind, Landmark::with_depth(row[0], row[1], row[2], row[3])))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_builder() {
        let pose = PoseBuilder::new()
            .landmark(LandmarkKind::LeftEar, 100.0, 50.0, 0.9)
            .landmark_3d(LandmarkKind::RightEar, 140.0, 52.0, -1.5, 0.85)
            .build();

        assert_eq!(pose.len(), 2);
        assert_eq!(pose.get(LandmarkKind::RightEar).unwrap().z, -1.5);
    }

    #[test]
    fn test_from_detector_output_skips_untracked_rows() {
        // 33-row BlazePose layout; only mapped indices survive.
        let mut rows = [[0.0f32; 4]; 33];
        rows[0] = [50.0, 40.0, 0.0, 0.9]; // nose
        rows[3] = [48.0, 38.0, 0.0, 0.9]; // left eye outer, untracked
        rows[15] = [20.0, 90.0, -2.0, 0.8]; // left wrist

        let pose = PoseBuilder::from_detector_output(&rows);

        assert!(pose.contains(LandmarkKind::Nose));
        let wrist = pose.get(LandmarkKind::LeftWrist).unwrap();
        assert_eq!(
            (wrist.x, wrist.y, wrist.z, wrist.score),
            (20.0, 90.0, -2.0, 0.8)
        );
        // Untracked rows are dropped; zero-score mapped rows still come
        // through (filtering is the analysis layer's job).
        assert_eq!(pose.len(), 15);
    }
}
