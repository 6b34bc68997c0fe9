use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// file format for search results
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// a JSON array of roads
    #[default]
    Json,
    /// one row per road with WKT geometry, gzip-compressed when the file name ends in .gz
    Csv,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        write!(f, "{s}")
    }
}
