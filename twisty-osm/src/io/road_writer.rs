use super::{OutputFormat, RoadCsvRow};
use crate::model::TwistyCliError;
use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use kdam::tqdm;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use twisty_core::model::ConnectedRoad;

/// writes roads in the requested format to a file, or to stdout when no file is given.
/// an existing file is only replaced when overwrite is set. file names ending in
/// `.gz` are gzip-compressed.
pub fn write_roads(
    roads: &[ConnectedRoad],
    format: OutputFormat,
    output_file: Option<&Path>,
    overwrite: bool,
) -> Result<(), TwistyCliError> {
    match output_file {
        None => {
            let stdout = std::io::stdout();
            let handle = stdout.lock();
            write_to(roads, format, handle)?;
            Ok(())
        }
        Some(path) => {
            let file = create_file(path, overwrite)?;
            let gzip = path.extension().map(|ext| ext == "gz").unwrap_or(false);
            if gzip {
                let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
                let encoder = write_to(roads, format, encoder)?;
                encoder.finish()?.flush()?;
            } else {
                let mut buffer = write_to(roads, format, BufWriter::new(file))?;
                buffer.flush()?;
            }
            log::info!("wrote {} roads to {}", roads.len(), path.display());
            Ok(())
        }
    }
}

/// writes the roads into the writer, handing the writer back once complete.
pub fn write_to<W: Write>(
    roads: &[ConnectedRoad],
    format: OutputFormat,
    writer: W,
) -> Result<W, TwistyCliError> {
    match format {
        OutputFormat::Json => write_json(roads, writer),
        OutputFormat::Csv => write_csv(roads, writer),
    }
}

fn write_json<W: Write>(roads: &[ConnectedRoad], mut writer: W) -> Result<W, TwistyCliError> {
    serde_json::to_writer_pretty(&mut writer, roads)?;
    writeln!(writer)?;
    Ok(writer)
}

fn write_csv<W: Write>(roads: &[ConnectedRoad], writer: W) -> Result<W, TwistyCliError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);
    let rows = tqdm!(roads.iter(), total = roads.len(), desc = "write roads");
    for road in rows {
        csv_writer.serialize(RoadCsvRow::from(road))?;
    }
    eprintln!();
    csv_writer
        .into_inner()
        .map_err(|e| TwistyCliError::OutputError(format!("failure flushing CSV rows: {e}")))
}

fn create_file(path: &Path, overwrite: bool) -> Result<File, TwistyCliError> {
    if path.exists() && !overwrite {
        return Err(TwistyCliError::OutputError(format!(
            "{} already exists and overwrite is not enabled",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(file)
}
