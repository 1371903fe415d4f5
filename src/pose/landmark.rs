//! Named body landmarks and the per-frame pose map.

use std::collections::HashMap;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Fixed enumeration of the body joints this crate reasons about.
///
/// Detector output uses the standard 33-point BlazePose index layout;
/// [`LandmarkKind::from_detector_index`] maps the indices this crate cares
/// about and ignores the rest (face contour, fingers, feet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandmarkKind {
    Nose,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl LandmarkKind {
    /// All supported kinds, in detector index order.
    pub const ALL: [LandmarkKind; 15] = [
        LandmarkKind::Nose,
        LandmarkKind::LeftEar,
        LandmarkKind::RightEar,
        LandmarkKind::LeftShoulder,
        LandmarkKind::RightShoulder,
        LandmarkKind::LeftElbow,
        LandmarkKind::RightElbow,
        LandmarkKind::LeftWrist,
        LandmarkKind::RightWrist,
        LandmarkKind::LeftHip,
        LandmarkKind::RightHip,
        LandmarkKind::LeftKnee,
        LandmarkKind::RightKnee,
        LandmarkKind::LeftAnkle,
        LandmarkKind::RightAnkle,
    ];

    /// Map a BlazePose / ML Kit landmark index to a kind.
    ///
    /// Returns `None` for indices this crate does not track.
    pub fn from_detector_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(LandmarkKind::Nose),
            7 => Some(LandmarkKind::LeftEar),
            8 => Some(LandmarkKind::RightEar),
            11 => Some(LandmarkKind::LeftShoulder),
            12 => Some(LandmarkKind::RightShoulder),
            13 => Some(LandmarkKind::LeftElbow),
            14 => Some(LandmarkKind::RightElbow),
            15 => Some(LandmarkKind::LeftWrist),
            16 => Some(LandmarkKind::RightWrist),
            23 => Some(LandmarkKind::LeftHip),
            24 => Some(LandmarkKind::RightHip),
            25 => Some(LandmarkKind::LeftKnee),
            26 => Some(LandmarkKind::RightKnee),
            27 => Some(LandmarkKind::LeftAnkle),
            28 => Some(LandmarkKind::RightAnkle),
            _ => None,
        }
    }
}

/// A detected body keypoint: 2D position, unused depth, and detector
/// confidence in [0, 1]. Immutable per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Depth estimate from the detector. Carried through smoothing but not
    /// used by any classification rule.
    pub z: f32,
    /// Detector confidence score in [0, 1].
    pub score: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, score: f32) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            score,
        }
    }

    pub fn with_depth(x: f32, y: f32, z: f32, score: f32) -> Self {
        Self { x, y, z, score }
    }

    /// Planar position, for geometry routines.
    #[inline]
    pub fn point(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

/// All landmarks detected for one body in one frame.
///
/// The key set depends on what the detector was confident about; callers
/// must not assume any particular kind is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pose {
    landmarks: HashMap<LandmarkKind, Landmark>,
}

impl Pose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: LandmarkKind, landmark: Landmark) {
        self.landmarks.insert(kind, landmark);
    }

    pub fn get(&self, kind: LandmarkKind) -> Option<&Landmark> {
        self.landmarks.get(&kind)
    }

    pub fn contains(&self, kind: LandmarkKind) -> bool {
        self.landmarks.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LandmarkKind, &Landmark)> {
        self.landmarks.iter()
    }
}

impl FromIterator<(LandmarkKind, Landmark)> for Pose {
    fn from_iter<I: IntoIterator<Item = (LandmarkKind, Landmark)>>(iter: I) -> Self {
        Self {
            landmarks: iter.into_iter().collect(),
        }
    }
}
