mod elevation_service;
mod way_query;
mod way_source;

pub use elevation_service::ElevationService;
pub use way_query::WayQuery;
pub use way_source::WaySource;
