pub mod geometry_ops;

pub use geometry_ops::{distance, polyline_length, turn_angle, EARTH_RADIUS_M};
