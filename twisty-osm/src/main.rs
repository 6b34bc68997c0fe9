use clap::{Parser, Subcommand};
use itertools::Itertools;
use twisty_core::model::{feature::Highway, source::WayQuery, Point};
use twisty_osm::{
    app::{search_app, RunOptions},
    config::TwistyConfiguration,
    io::OutputFormat,
    model::TwistyCliError,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TwistyAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    /// find curvy roads within a radius of a point using the Overpass API
    Search {
        #[arg(long, allow_hyphen_values = true, help = "latitude of the search center")]
        lat: f64,
        #[arg(long, allow_hyphen_values = true, help = "longitude of the search center")]
        lon: f64,
        #[arg(long, default_value_t = 25000.0, help = "search radius in meters")]
        radius_m: f64,
        #[arg(
            long,
            help = "highway classes to search, separated by '|', such as 'primary|secondary'"
        )]
        highway_filter: Option<String>,
        #[arg(long, help = "path to file with twisty search parameters (.toml or .json)")]
        configuration_file: Option<String>,
        #[arg(long, help = "output file path. writes to stdout when omitted")]
        output_file: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        #[arg(long, help = "annotate roads with elevation statistics")]
        elevation: bool,
    },
    /// find curvy roads in a saved Overpass JSON response or JSON array of ways
    Ways {
        #[arg(long, help = "path to the ways file")]
        ways_file: String,
        #[arg(long, help = "path to file with twisty search parameters (.toml or .json)")]
        configuration_file: Option<String>,
        #[arg(long, help = "output file path. writes to stdout when omitted")]
        output_file: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        #[arg(long, help = "annotate roads with elevation statistics")]
        elevation: bool,
    },
}

pub fn run(app: &App) -> Result<(), TwistyCliError> {
    env_logger::init();
    match app {
        App::Search {
            lat,
            lon,
            radius_m,
            highway_filter,
            configuration_file,
            output_file,
            format,
            elevation,
        } => {
            let conf = read_configuration(configuration_file)?;
            let highway_classes = match highway_filter {
                Some(filter) => parse_highway_filter(filter)?,
                None => conf.overpass.highway_classes.clone(),
            };
            let query = WayQuery::new(Point::new(*lat, *lon), *radius_m, highway_classes);
            let options = RunOptions {
                format: *format,
                output_file: output_file.clone(),
                elevation: *elevation,
            };
            match search_app::run_search(&query, &conf, &options) {
                Ok(_) => Ok(()),
                Err(e) => {
                    log::error!("twisty search failed: {e}");
                    Err(e)
                }
            }
        }
        App::Ways {
            ways_file,
            configuration_file,
            output_file,
            format,
            elevation,
        } => {
            let conf = read_configuration(configuration_file)?;
            let options = RunOptions {
                format: *format,
                output_file: output_file.clone(),
                elevation: *elevation,
            };
            match search_app::run_ways(ways_file, &conf, &options) {
                Ok(_) => Ok(()),
                Err(e) => {
                    log::error!("twisty ways failed: {e}");
                    Err(e)
                }
            }
        }
    }
}

fn read_configuration(
    configuration_file: &Option<String>,
) -> Result<TwistyConfiguration, TwistyCliError> {
    match configuration_file {
        None => Ok(TwistyConfiguration::default()),
        Some(f) => {
            log::info!("reading twisty configuration from {f}");
            TwistyConfiguration::try_from(f)
        }
    }
}

/// parses a '|'-separated list of highway classes, such as "primary|secondary"
fn parse_highway_filter(filter: &str) -> Result<Vec<Highway>, TwistyCliError> {
    let classes = filter
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Highway>()
                .map_err(|e| TwistyCliError::ConfigurationError(format!("--highway-filter: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if classes.is_empty() {
        return Err(TwistyCliError::ConfigurationError(String::from(
            "--highway-filter must name at least one highway class",
        )));
    }
    Ok(classes.into_iter().unique().collect_vec())
}

fn main() {
    let args = TwistyAppArguments::parse();
    if let Err(e) = run(&args.app) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
