mod elevation_service_config;
mod overpass_config;
mod twisty_configuration;

pub use elevation_service_config::ElevationServiceConfig;
pub use overpass_config::OverpassConfig;
pub use twisty_configuration::TwistyConfiguration;
