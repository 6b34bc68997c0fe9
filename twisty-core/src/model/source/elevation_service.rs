use crate::model::{Point, TwistyError};

/// provider of per-point elevations in meters.
///
/// `Ok(None)` means the service had no data for these points. errors are
/// recovered by the caller; a failed lookup never aborts road processing.
pub trait ElevationService: Send + Sync {
    fn get_elevations(&self, points: &[Point]) -> Result<Option<Vec<f64>>, TwistyError>;
}
