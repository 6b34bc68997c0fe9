use crate::io::OutputFormat;

/// output and enrichment choices shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub format: OutputFormat,
    /// write to stdout when absent
    pub output_file: Option<String>,
    /// request elevation statistics even if the configuration has no elevation section
    pub elevation: bool,
}
