//! Integration module for connecting pose-detection backends with the
//! posture analysis core.
//!
//! This module provides the trait seam for inference backends (ML Kit,
//! BlazePose over ONNX, MediaPipe, ...), a builder for assembling poses
//! from raw model output, and the per-session pipeline that drives
//! filter -> smooth -> classify for every camera frame.

mod builder;
mod pipeline;
mod source;

pub use builder::PoseBuilder;
pub use pipeline::{FrameOutcome, NO_POSE_ADVISORY, PipelineConfig, PosturePipeline};
pub use source::{IntoPose, PoseSource};
