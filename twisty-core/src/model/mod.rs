mod connected_road;
mod elevation_stats;
pub mod feature;
mod point;
mod scored_segment;
pub mod source;
mod twisty_error;
mod way;

pub use connected_road::ConnectedRoad;
pub use elevation_stats::ElevationStats;
pub use point::Point;
pub use scored_segment::ScoredSegment;
pub use twisty_error::TwistyError;
pub use way::{deserialize_way_id, Way};
