//! Threshold-based posture classification over a smoothed pose.

use crate::analysis::error::AnalysisError;
use crate::analysis::geometry::interior_angle;
use crate::pose::{FrameSize, Landmark, LandmarkKind, Pose};

/// Advisory emitted when no rule had enough confident landmarks to fire.
pub const FALLBACK_STATUS: &str = "move more to be better detected";

/// Configuration for the posture classification rules.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Per-rule confidence gate, independent of the pipeline filter threshold.
    pub min_rule_confidence: f32,
    /// Ear vertical offset, in pixels, beyond which the head counts as tilted.
    pub head_tilt_px: f32,
    /// Interior elbow angle, in degrees, below which the arm counts as bent.
    pub bent_elbow_degrees: f32,
    /// Knee-below-hip drop as a fraction of frame height for a standing call.
    pub standing_ratio: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_rule_confidence: 0.5,
            head_tilt_px: 15.0,
            bent_elbow_degrees: 120.0,
            standing_ratio: 0.15,
        }
    }
}

/// Stateless posture classifier.
///
/// Evaluates four independent rules in fixed order (head, elbow, hand,
/// body); the output order matches so the UI renders deterministically.
/// Each rule only fires when every landmark it needs is present with
/// confidence at or above the rule gate.
#[derive(Debug, Clone, Default)]
pub struct PostureClassifier {
    config: ClassifierConfig,
}

impl PostureClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Produce the frame's ordered status strings.
    ///
    /// Emits [`FALLBACK_STATUS`] alone when no rule fires.
    pub fn classify(
        &self,
        pose: &Pose,
        frame: FrameSize,
    ) -> Result<Vec<String>, AnalysisError> {
        if frame.height == 0 {
            return Err(AnalysisError::InvalidFrameSize {
                width: frame.width,
                height: frame.height,
            });
        }

        let mut statuses = Vec::with_capacity(4);
        statuses.extend(self.head_tilt(pose));
        statuses.extend(self.elbow_bend(pose));
        statuses.extend(self.hand_raise(pose));
        statuses.extend(self.body_stance(pose, frame));

        if statuses.is_empty() {
            statuses.push(FALLBACK_STATUS.to_string());
        }
        Ok(statuses)
    }

    fn confident(&self, pose: &Pose, kind: LandmarkKind) -> Option<Landmark> {
        pose.get(kind)
            .filter(|lm| lm.score >= self.config.min_rule_confidence)
            .copied()
    }

    fn head_tilt(&self, pose: &Pose) -> Option<String> {
        let left_ear = self.confident(pose, LandmarkKind::LeftEar)?;
        let right_ear = self.confident(pose, LandmarkKind::RightEar)?;

        let offset = left_ear.y - right_ear.y;
        let state = if offset > self.config.head_tilt_px {
            "tilted left"
        } else if offset < -self.config.head_tilt_px {
            "tilted right"
        } else {
            "normal"
        };
        Some(format!("Head: {state}"))
    }

    fn elbow_bend(&self, pose: &Pose) -> Option<String> {
        let left_wrist = self.confident(pose, LandmarkKind::LeftWrist)?;
        let left_elbow = self.confident(pose, LandmarkKind::LeftElbow)?;
        let left_shoulder = self.confident(pose, LandmarkKind::LeftShoulder)?;
        let right_wrist = self.confident(pose, LandmarkKind::RightWrist)?;
        let right_elbow = self.confident(pose, LandmarkKind::RightElbow)?;
        let right_shoulder = self.confident(pose, LandmarkKind::RightShoulder)?;

        let left_angle =
            interior_angle(left_wrist.point(), left_elbow.point(), left_shoulder.point());
        let right_angle = interior_angle(
            right_wrist.point(),
            right_elbow.point(),
            right_shoulder.point(),
        );

        let left_bent = left_angle < self.config.bent_elbow_degrees;
        let right_bent = right_angle < self.config.bent_elbow_degrees;

        let state = match (left_bent, right_bent) {
            (true, true) => "both bent",
            (true, false) => "left bent",
            (false, true) => "right bent",
            (false, false) => "both straight",
        };
        Some(format!("Elbow: {state}"))
    }

    fn hand_raise(&self, pose: &Pose) -> Option<String> {
        let left_wrist = self.confident(pose, LandmarkKind::LeftWrist)?;
        let left_shoulder = self.confident(pose, LandmarkKind::LeftShoulder)?;
        let right_wrist = self.confident(pose, LandmarkKind::RightWrist)?;
        let right_shoulder = self.confident(pose, LandmarkKind::RightShoulder)?;

        // Smaller y is higher in image coordinates.
        let left_raised = left_wrist.y < left_shoulder.y;
        let right_raised = right_wrist.y < right_shoulder.y;

        let state = match (left_raised, right_raised) {
            (true, true) => "both raised",
            (true, false) => "left raised",
            (false, true) => "right raised",
            (false, false) => "normal",
        };
        Some(format!("Hand movement: {state}"))
    }

    fn body_stance(&self, pose: &Pose, frame: FrameSize) -> Option<String> {
        let left_knee = self.confident(pose, LandmarkKind::LeftKnee)?;
        let right_knee = self.confident(pose, LandmarkKind::RightKnee)?;
        let left_hip = self.confident(pose, LandmarkKind::LeftHip)?;
        let right_hip = self.confident(pose, LandmarkKind::RightHip)?;

        let height = frame.height as f32;
        let left_drop = (left_knee.y - left_hip.y) / height;
        let right_drop = (right_knee.y - right_hip.y) / height;
        let ratio = (left_drop + right_drop) / 2.0;

        if ratio > self.config.standing_ratio {
            Some("Position: Standing".to_string())
        } else {
            // Crouch branch is intentionally suppressed; the placeholder
            // keeps the slot in the rendered list.
            Some(String::new())
        }
    }
}

/// Renderer contract for highlighting: values containing "normal", or equal
/// to the canonical good-posture values, are shown positively; everything
/// else neutrally. Matching is exact on the value part of `Label: Value`.
pub fn is_positive_status(status: &str) -> bool {
    match status.split_once(": ") {
        Some((_, value)) => {
            value.contains("normal") || value == "both straight" || value == "Standing"
        }
        None => false,
    }
}
