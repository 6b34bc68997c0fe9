pub mod elevation;
pub mod overpass;
mod twisty_cli_error;

pub use twisty_cli_error::TwistyCliError;
