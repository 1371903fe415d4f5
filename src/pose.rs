//! Data model for per-frame pose detection output.

mod frame;
mod landmark;

pub use frame::FrameSize;
pub use landmark::{Landmark, LandmarkKind, Pose};
