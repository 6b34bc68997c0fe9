use thiserror::Error;
use twisty_core::model::TwistyError;

#[derive(Error, Debug)]
pub enum TwistyCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure writing output: {0}")]
    OutputError(String),
    #[error(transparent)]
    TwistyError {
        #[from]
        source: TwistyError,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
}
