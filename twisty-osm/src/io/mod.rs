mod output_format;
mod road_csv_row;
pub mod road_writer;

pub use output_format::OutputFormat;
pub use road_csv_row::RoadCsvRow;
