//! Graph construction settings.

use crate::{CoreError, CoreResult};

/// Speed assumed when a road is added without an explicit `time`:
/// `time = distance / DEFAULT_SPEED`.
pub const DEFAULT_SPEED: f64 = 50.0;

/// Settings fixed when a graph is created.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and passed to `CityGraph::with_config`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphConfig {
    /// When `false`, every road that is not `one_way` is mirrored so both
    /// endpoints can reach each other.
    pub directed: bool,

    /// Average speed used to derive a missing road `time`.  Distance units
    /// per time unit; default 50.0.
    pub default_speed: f64,
}

impl GraphConfig {
    /// Undirected graph with the default speed policy.
    pub fn undirected() -> Self {
        Self::default()
    }

    /// Directed graph with the default speed policy.
    pub fn directed() -> Self {
        Self { directed: true, ..Self::default() }
    }

    /// Reject settings that would produce non-finite or negative times.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.default_speed.is_finite() || self.default_speed <= 0.0 {
            return Err(CoreError::Config(format!(
                "default_speed must be finite and positive, got {}",
                self.default_speed
            )));
        }
        Ok(())
    }

    /// Travel time for a road of length `distance` with no explicit time.
    #[inline]
    pub fn default_time(&self, distance: f64) -> f64 {
        distance / self.default_speed
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { directed: false, default_speed: DEFAULT_SPEED }
    }
}
