use crate::{
    algorithm::{assembly, elevation, scoring},
    config::EngineConfig,
    model::{
        source::{ElevationService, WayQuery, WaySource},
        ConnectedRoad, TwistyError, Way,
    },
};

/// scores, filters and stitches raw ways into connected roads, longest first.
pub fn find_roads(ways: &[Way], config: &EngineConfig) -> Vec<ConnectedRoad> {
    let segments = scoring::score_ways(ways, &config.thresholds);
    assembly::assemble_roads(&segments, config)
}

/// runs [`find_roads`] and, if an elevation service is provided, annotates each road.
/// elevation failures never drop or reorder roads.
pub fn find_roads_with_elevation(
    ways: &[Way],
    config: &EngineConfig,
    elevation_service: Option<&dyn ElevationService>,
) -> Vec<ConnectedRoad> {
    let roads = find_roads(ways, config);
    match elevation_service {
        Some(service) => elevation::annotate_roads(roads, service, config.parallelize),
        None => roads,
    }
}

/// full radius search: fetches ways from the source, then runs the engine.
pub fn search(
    way_source: &dyn WaySource,
    query: &WayQuery,
    config: &EngineConfig,
    elevation_service: Option<&dyn ElevationService>,
) -> Result<Vec<ConnectedRoad>, TwistyError> {
    config.validate()?;
    query.validate()?;
    let ways = way_source.get_ways(query)?;
    log::info!(
        "received {} ways within {}m of {}",
        ways.len(),
        query.radius_m,
        query.center
    );
    Ok(find_roads_with_elevation(ways.as_slice(), config, elevation_service))
}
