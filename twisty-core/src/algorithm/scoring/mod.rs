mod curvature_measurement;
mod score_outcome;
pub mod scoring_ops;

pub use curvature_measurement::CurvatureMeasurement;
pub use score_outcome::{RejectionReason, ScoreOutcome};
pub use scoring_ops::{is_urban, score_way, score_ways};
