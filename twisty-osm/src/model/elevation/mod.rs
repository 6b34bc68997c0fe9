mod elevation_progress;
mod open_elevation_service;

pub use elevation_progress::ElevationProgress;
pub use open_elevation_service::{OpenElevationService, OpenElevationRequest, OpenElevationResponse};
