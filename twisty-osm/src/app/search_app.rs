use super::RunOptions;
use crate::{
    config::{ElevationServiceConfig, TwistyConfiguration},
    io::road_writer,
    model::{
        elevation::{ElevationProgress, OpenElevationService},
        overpass::{FileWaySource, OverpassWaySource},
        TwistyCliError,
    },
};
use std::path::Path;
use twisty_core::model::{
    source::{ElevationService, WayQuery},
    ConnectedRoad,
};

/// runs a radius search against the configured Overpass endpoint and writes the roads.
pub fn run_search(
    query: &WayQuery,
    conf: &TwistyConfiguration,
    options: &RunOptions,
) -> Result<Vec<ConnectedRoad>, TwistyCliError> {
    let source = OverpassWaySource::new(
        &conf.overpass.url,
        conf.overpass.timeout_secs,
        conf.overpass.extra_filters.clone(),
    )?;
    let elevation_service = build_elevation_service(conf, options)?;
    let progress = match &elevation_service {
        Some(service) => Some(ElevationProgress::new(service)?),
        None => None,
    };
    let roads = twisty_core::search(
        &source,
        query,
        &conf.engine,
        progress.as_ref().map(|p| p as &dyn ElevationService),
    )?;
    finish(roads, conf, options)
}

/// runs the engine over ways previously saved to a file and writes the roads.
pub fn run_ways(
    ways_file: &str,
    conf: &TwistyConfiguration,
    options: &RunOptions,
) -> Result<Vec<ConnectedRoad>, TwistyCliError> {
    conf.engine.validate()?;
    let ways = FileWaySource::new(ways_file).read_ways()?;
    log::info!("read {} ways from {}", ways.len(), ways_file);
    let elevation_service = build_elevation_service(conf, options)?;
    let progress = match &elevation_service {
        Some(service) => Some(ElevationProgress::new(service)?),
        None => None,
    };
    let roads = twisty_core::find_roads_with_elevation(
        &ways,
        &conf.engine,
        progress.as_ref().map(|p| p as &dyn ElevationService),
    );
    finish(roads, conf, options)
}

fn build_elevation_service(
    conf: &TwistyConfiguration,
    options: &RunOptions,
) -> Result<Option<OpenElevationService>, TwistyCliError> {
    let elevation_conf = match (&conf.elevation, options.elevation) {
        (Some(c), _) => c.clone(),
        (None, true) => ElevationServiceConfig::default(),
        (None, false) => return Ok(None),
    };
    log::info!("annotating roads with elevation from {}", elevation_conf.url);
    Ok(Some(elevation_conf.build()?))
}

fn finish(
    roads: Vec<ConnectedRoad>,
    conf: &TwistyConfiguration,
    options: &RunOptions,
) -> Result<Vec<ConnectedRoad>, TwistyCliError> {
    log::info!("found {} roads", roads.len());
    let output_path = options.output_file.as_ref().map(Path::new);
    road_writer::write_roads(&roads, options.format, output_path, conf.overwrite)?;
    Ok(roads)
}
