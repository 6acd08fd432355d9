//! `cr-core` — foundational types for the `cityroute` road router.
//!
//! This crate is a dependency of every other `cr-*` crate.  It has no `cr-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`                                              |
//! | [`geo`]         | `GeoPoint`, haversine great-circle distance           |
//! | [`weight`]      | `WeightSelector` enum                                 |
//! | [`config`]      | `GraphConfig`                                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod weight;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_SPEED, GraphConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{EARTH_RADIUS, GeoPoint, great_circle_distance};
pub use ids::NodeId;
pub use weight::WeightSelector;
