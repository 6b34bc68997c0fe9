mod run_options;
pub mod search_app;

pub use run_options::RunOptions;
