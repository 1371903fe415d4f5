//! Per-frame numeric analysis: confidence filtering, temporal smoothing,
//! and posture classification.

mod classifier;
mod error;
mod filter;
mod geometry;
mod smoother;

pub use classifier::{ClassifierConfig, FALLBACK_STATUS, PostureClassifier, is_positive_status};
pub use error::AnalysisError;
pub use filter::{CONFIDENCE_THRESHOLD, MIN_CONFIDENT_LANDMARKS, require_detectable, retain_confident};
pub use geometry::interior_angle;
pub use smoother::{SmootherConfig, TemporalSmoother};
