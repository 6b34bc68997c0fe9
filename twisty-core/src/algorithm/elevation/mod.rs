pub mod elevation_ops;

pub use elevation_ops::{annotate_road, annotate_roads};
