use thiserror::Error;

#[derive(Error, Debug)]
pub enum TwistyError {
    #[error("invalid engine configuration: {0}")]
    ConfigurationError(String),
    #[error("failure retrieving ways: {0}")]
    WaySourceError(String),
    #[error("failure retrieving elevations: {0}")]
    ElevationServiceError(String),
    #[error("{0}")]
    InternalError(String),
}
