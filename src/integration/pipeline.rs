//! Per-session pipeline driving filter -> smooth -> classify per frame.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::analysis::{
    CONFIDENCE_THRESHOLD, ClassifierConfig, MIN_CONFIDENT_LANDMARKS, PostureClassifier,
    SmootherConfig, TemporalSmoother, require_detectable, retain_confident,
};
use crate::pose::FrameSize;

use super::PoseSource;

/// Advisory emitted when the detector found no body in the frame.
pub const NO_POSE_ADVISORY: &str = "no pose detected";

/// Advisory strings built from failure descriptions keep this many
/// characters.
const DIAGNOSTIC_LIMIT: usize = 50;

/// Configuration for one posture session.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Landmark confidence floor applied before smoothing.
    pub confidence_threshold: f32,
    /// Minimum confident landmarks for a frame to be classifiable.
    pub min_landmarks: usize,
    pub smoother: SmootherConfig,
    pub classifier: ClassifierConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: CONFIDENCE_THRESHOLD,
            min_landmarks: MIN_CONFIDENT_LANDMARKS,
            smoother: SmootherConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

/// Result of processing one camera frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Ordered classification strings for the overlay, one list per frame.
    Statuses(Vec<String>),
    /// Single advisory string; the pipeline continues on the next frame.
    Advisory(String),
    /// A frame was already in flight; this one was discarded, not queued.
    Dropped,
}

/// Single-slot in-flight marker.
///
/// Replaces the check-then-set busy flag of a naive implementation: the
/// compare-exchange acquires the slot atomically, and the guard releases it
/// on drop, so a concurrent frame delivery can never observe a stale value.
struct FrameGate {
    busy: AtomicBool,
}

impl FrameGate {
    fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
        }
    }

    fn try_acquire(&self) -> Option<FrameGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()?;
        Some(FrameGuard { gate: self })
    }
}

struct FrameGuard<'a> {
    gate: &'a FrameGate,
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}

/// A posture session that bundles pose inference with the analysis core.
///
/// One pipeline per camera session: frames arrive serially and are run
/// through confidence filtering, temporal smoothing, and classification.
/// All failures are non-fatal and surface as [`FrameOutcome::Advisory`];
/// processing resumes on the next frame.
pub struct PosturePipeline<S: PoseSource> {
    source: S,
    smoother: TemporalSmoother,
    classifier: PostureClassifier,
    config: PipelineConfig,
    gate: FrameGate,
}

impl<S: PoseSource> PosturePipeline<S> {
    /// Create a new posture pipeline with the given source and config.
    pub fn new(source: S, config: PipelineConfig) -> Self {
        Self {
            source,
            smoother: TemporalSmoother::new(config.smoother.clone()),
            classifier: PostureClassifier::new(config.classifier.clone()),
            config,
            gate: FrameGate::new(),
        }
    }

    /// Create a new posture pipeline with default configuration.
    pub fn with_default_config(source: S) -> Self {
        Self::new(source, PipelineConfig::default())
    }

    /// Process a single camera frame.
    ///
    /// Runs inference, filters low-confidence landmarks, updates the
    /// smoothing history, and classifies the smoothed pose. If a frame is
    /// still being processed when this is called, the new frame is dropped.
    pub fn process_frame(&mut self, input: &[u8], width: u32, height: u32) -> FrameOutcome {
        let Some(_guard) = self.gate.try_acquire() else {
            debug!("frame dropped: previous frame still in flight");
            return FrameOutcome::Dropped;
        };

        let pose = match self.source.detect(input, width, height) {
            Ok(Some(pose)) => pose,
            Ok(None) => {
                debug!("detector returned no pose");
                return FrameOutcome::Advisory(NO_POSE_ADVISORY.to_string());
            }
            Err(err) => {
                warn!(error = %err, "pose detection failed");
                return FrameOutcome::Advisory(truncate_diagnostic(&err.to_string()));
            }
        };

        let confident = retain_confident(&pose, self.config.confidence_threshold);
        if let Err(err) = require_detectable(&confident, self.config.min_landmarks) {
            debug!(%err, total = pose.len(), "frame rejected for classification");
            return FrameOutcome::Advisory(err.to_string());
        }

        let smoothed = self.smoother.smooth(&confident);
        match self
            .classifier
            .classify(&smoothed, FrameSize::new(width, height))
        {
            Ok(statuses) => FrameOutcome::Statuses(statuses),
            Err(err) => {
                warn!(%err, "classification failed");
                FrameOutcome::Advisory(truncate_diagnostic(&err.to_string()))
            }
        }
    }

    /// Start a fresh detection session, discarding all smoothing history.
    ///
    /// Call on camera switch; the detector resource is kept.
    pub fn reset_session(&mut self) {
        debug!("smoothing history reset");
        self.smoother.reset();
    }

    /// Tear the session down, returning the detector so the caller can
    /// release it. Smoothing history is discarded.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Get a reference to the underlying pose source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying pose source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

fn truncate_diagnostic(message: &str) -> String {
    message.chars().take(DIAGNOSTIC_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FALLBACK_STATUS;
    use crate::pose::{Landmark, LandmarkKind, Pose};

    struct MockSource {
        result: Result<Option<Pose>, String>,
    }

    impl PoseSource for MockSource {
        type Error = String;

        fn detect(
            &mut self,
            _input: &[u8],
            _width: u32,
            _height: u32,
        ) -> Result<Option<Pose>, Self::Error> {
            self.result.clone()
        }
    }

    fn confident_ears() -> Pose {
        [
            (LandmarkKind::LeftEar, Landmark::new(300.0, 100.0, 0.9)),
            (LandmarkKind::RightEar, Landmark::new(420.0, 80.0, 0.9)),
            (LandmarkKind::Nose, Landmark::new(360.0, 120.0, 0.9)),
            (LandmarkKind::LeftShoulder, Landmark::new(250.0, 300.0, 0.9)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_statuses_for_confident_pose() {
        let source = MockSource {
            result: Ok(Some(confident_ears())),
        };
        let mut pipeline = PosturePipeline::with_default_config(source);

        let outcome = pipeline.process_frame(&[], 720, 1280);
        assert_eq!(
            outcome,
            FrameOutcome::Statuses(vec!["Head: tilted left".to_string()])
        );
    }

    #[test]
    fn test_no_pose_advisory() {
        let source = MockSource { result: Ok(None) };
        let mut pipeline = PosturePipeline::with_default_config(source);

        assert_eq!(
            pipeline.process_frame(&[], 720, 1280),
            FrameOutcome::Advisory(NO_POSE_ADVISORY.to_string())
        );
    }

    #[test]
    fn test_insufficient_landmarks_advisory() {
        // Two confident landmarks plus one that the 0.7 filter removes.
        let pose: Pose = [
            (LandmarkKind::LeftEar, Landmark::new(300.0, 100.0, 0.9)),
            (LandmarkKind::RightEar, Landmark::new(420.0, 80.0, 0.9)),
            (LandmarkKind::Nose, Landmark::new(360.0, 120.0, 0.3)),
        ]
        .into_iter()
        .collect();
        let source = MockSource {
            result: Ok(Some(pose)),
        };
        let mut pipeline = PosturePipeline::with_default_config(source);

        assert_eq!(
            pipeline.process_frame(&[], 720, 1280),
            FrameOutcome::Advisory(
                "insufficient detection: 2 of 4 confident landmarks".to_string()
            )
        );
    }

    #[test]
    fn test_detector_error_truncated() {
        let source = MockSource {
            result: Err("x".repeat(120)),
        };
        let mut pipeline = PosturePipeline::with_default_config(source);

        match pipeline.process_frame(&[], 720, 1280) {
            FrameOutcome::Advisory(msg) => assert_eq!(msg, "x".repeat(50)),
            other => panic!("expected advisory, got {other:?}"),
        }
    }

    #[test]
    fn test_unclassifiable_but_sufficient_pose_falls_back() {
        // Four confident landmarks, but no rule's full subset is present.
        let pose: Pose = [
            (LandmarkKind::Nose, Landmark::new(100.0, 100.0, 0.9)),
            (LandmarkKind::LeftEar, Landmark::new(90.0, 95.0, 0.9)),
            (LandmarkKind::LeftWrist, Landmark::new(40.0, 300.0, 0.9)),
            (LandmarkKind::LeftAnkle, Landmark::new(80.0, 800.0, 0.9)),
        ]
        .into_iter()
        .collect();
        let source = MockSource {
            result: Ok(Some(pose)),
        };
        let mut pipeline = PosturePipeline::with_default_config(source);

        assert_eq!(
            pipeline.process_frame(&[], 720, 1280),
            FrameOutcome::Statuses(vec![FALLBACK_STATUS.to_string()])
        );
    }

    #[test]
    fn test_gate_drops_overlapping_frame() {
        let gate = FrameGate::new();
        let guard = gate.try_acquire().unwrap();
        assert!(gate.try_acquire().is_none());
        drop(guard);
        assert!(gate.try_acquire().is_some());
    }
}
