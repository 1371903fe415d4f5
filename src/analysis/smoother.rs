//! Temporal smoothing of landmark positions across frames.

use std::collections::{HashMap, VecDeque};

use crate::pose::{Landmark, LandmarkKind, Pose};

/// Configuration for the temporal smoother.
#[derive(Debug, Clone)]
pub struct SmootherConfig {
    /// Maximum retained samples per landmark kind.
    pub depth: usize,
    /// Exponential decay applied per step of sample age.
    pub decay: f32,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            decay: 0.5,
        }
    }
}

/// Exponentially weighted position smoother, stateful across frames.
///
/// Holds a bounded FIFO of raw samples per landmark kind for the lifetime of
/// one detection session. Owned by the session pipeline; [`reset`] discards
/// all history on camera switch or teardown.
///
/// [`reset`]: TemporalSmoother::reset
pub struct TemporalSmoother {
    config: SmootherConfig,
    history: HashMap<LandmarkKind, VecDeque<Landmark>>,
}

impl TemporalSmoother {
    pub fn new(config: SmootherConfig) -> Self {
        Self {
            config,
            history: HashMap::new(),
        }
    }

    /// Smooth the current frame's pose against the rolling history.
    ///
    /// For every landmark present in `pose`, the raw sample is appended to
    /// that kind's history (evicting the oldest past the configured depth)
    /// and the emitted position is the confidence-and-age weighted average
    /// of the retained samples. The emitted confidence is the current
    /// frame's, untouched.
    ///
    /// The output key set equals the input key set. Kinds absent from the
    /// current frame are not emitted, but their histories persist for
    /// future frames.
    pub fn smooth(&mut self, pose: &Pose) -> Pose {
        let mut smoothed = Pose::new();

        for (kind, raw) in pose.iter() {
            let history = self
                .history
                .entry(*kind)
                .or_insert_with(|| VecDeque::with_capacity(self.config.depth + 1));

            history.push_back(*raw);
            if history.len() > self.config.depth {
                history.pop_front();
            }

            smoothed.insert(*kind, self.weighted_average(*kind, *raw));
        }

        smoothed
    }

    /// Discard all history. Call on camera switch or session end.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Retained sample count for one landmark kind.
    pub fn history_len(&self, kind: LandmarkKind) -> usize {
        self.history.get(&kind).map_or(0, VecDeque::len)
    }

    fn weighted_average(&self, kind: LandmarkKind, raw: Landmark) -> Landmark {
        let history = &self.history[&kind];
        let len = history.len();

        let mut sum_x = 0.0f32;
        let mut sum_y = 0.0f32;
        let mut sum_z = 0.0f32;
        let mut total_weight = 0.0f32;

        // Oldest first; the most recent sample carries weight exp(0) = 1
        // scaled by its confidence.
        for (i, sample) in history.iter().enumerate() {
            let age = (len - 1 - i) as f32;
            let weight = (-age * self.config.decay).exp() * sample.score;
            sum_x += sample.x * weight;
            sum_y += sample.y * weight;
            sum_z += sample.z * weight;
            total_weight += weight;
        }

        if total_weight <= 0.0 {
            // All retained confidences are zero; pass the raw sample through.
            return raw;
        }

        Landmark {
            x: sum_x / total_weight,
            y: sum_y / total_weight,
            z: sum_z / total_weight,
            score: raw.score,
        }
    }
}

impl Default for TemporalSmoother {
    fn default() -> Self {
        Self::new(SmootherConfig::default())
    }
}
