//! Post-processing core for real-time posture feedback.
//!
//! Given per-frame 2D landmark output from an external pose-detection
//! backend, this crate filters landmarks by confidence, temporally smooths
//! their positions across frames, and derives an ordered list of
//! human-readable posture classifications for an overlay renderer.
//!
//! Camera lifecycle, UI, and the ML inference itself live outside the
//! crate; backends plug in through [`PoseSource`] and sessions are driven
//! through [`PosturePipeline`].

pub mod analysis;
pub mod integration;
pub mod pose;

pub use analysis::{
    AnalysisError, ClassifierConfig, FALLBACK_STATUS, PostureClassifier, SmootherConfig,
    TemporalSmoother, interior_angle, is_positive_status,
};
pub use integration::{
    FrameOutcome, IntoPose, NO_POSE_ADVISORY, PipelineConfig, PoseBuilder, PoseSource,
    PosturePipeline,
};
pub use pose::{FrameSize, Landmark, LandmarkKind, Pose};
