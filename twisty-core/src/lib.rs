//! road segment synthesis and curvature scoring.
//!
//! takes the raw polyline ways around a point, screens each one for length and
//! curviness, stitches name-compatible ways whose endpoints touch into continuous
//! roads, and optionally attaches elevation statistics to each road.
//!
//! this crate performs no I/O. way and elevation providers plug in through the
//! [`model::source::WaySource`] and [`model::source::ElevationService`] traits.

pub mod algorithm;
pub mod config;
pub mod model;

#[cfg(test)]
mod test_fixtures;

pub use algorithm::search_ops::{find_roads, find_roads_with_elevation, search};
pub use config::EngineConfig;
