//! Which road attribute a search minimises.

use std::str::FromStr;

use crate::CoreError;

/// The road attribute used as edge cost by a search.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeightSelector {
    /// Road length.  The only selector the great-circle heuristic is
    /// admissible for.
    #[default]
    Distance,
    /// Travel time (explicit, or `distance / default_speed`).
    Time,
    /// Monetary cost (tolls etc.), `0.0` unless given.
    Cost,
}

impl WeightSelector {
    pub const ALL: [WeightSelector; 3] =
        [WeightSelector::Distance, WeightSelector::Time, WeightSelector::Cost];

    /// `true` if a straight-line distance estimate is a lower bound for this
    /// weight.  A* with the great-circle heuristic is only guaranteed optimal
    /// when this holds.
    #[inline]
    pub fn is_geodesic(self) -> bool {
        matches!(self, WeightSelector::Distance)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeightSelector::Distance => "distance",
            WeightSelector::Time     => "time",
            WeightSelector::Cost     => "cost",
        }
    }
}

impl FromStr for WeightSelector {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" => Ok(WeightSelector::Distance),
            "time"     => Ok(WeightSelector::Time),
            "cost"     => Ok(WeightSelector::Cost),
            other => Err(CoreError::Parse(format!(
                "invalid weight selector {other:?}: expected \"distance\", \"time\" or \"cost\""
            ))),
        }
    }
}

impl std::fmt::Display for WeightSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
