use crate::model::{source::ElevationService, ConnectedRoad, ElevationStats};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// looks up the elevation profile of a road and attaches its summary. when the
/// service has no data or fails, the road is returned without elevation fields.
pub fn annotate_road(road: ConnectedRoad, service: &dyn ElevationService) -> ConnectedRoad {
    let stats = match service.get_elevations(&road.geometry) {
        Ok(Some(elevations)) => {
            let stats = ElevationStats::from_profile(&elevations);
            if stats.is_none() {
                log::debug!("elevation service returned no usable samples for road {}", road.id);
            }
            stats
        }
        Ok(None) => {
            log::debug!("no elevation data for road {}", road.id);
            None
        }
        Err(e) => {
            log::warn!("elevation lookup failed for road {}: {e}", road.id);
            None
        }
    };
    road.with_elevation(stats)
}

/// annotates every road with elevation statistics. a failed lookup only affects its
/// own road. the output order always matches the input order, even when lookups run
/// concurrently.
pub fn annotate_roads(
    roads: Vec<ConnectedRoad>,
    service: &dyn ElevationService,
    parallelize: bool,
) -> Vec<ConnectedRoad> {
    let n_roads = roads.len();
    let annotated: Vec<ConnectedRoad> = if parallelize {
        annotate_concurrently(roads, service)
    } else {
        roads
            .into_iter()
            .map(|road| annotate_road(road, service))
            .collect()
    };
    let n_with_elevation = annotated.iter().filter(|r| r.elevation.is_some()).count();
    log::info!("annotated {n_with_elevation} of {n_roads} roads with elevation data");
    annotated
}

#[cfg(feature = "parallel")]
fn annotate_concurrently(
    roads: Vec<ConnectedRoad>,
    service: &dyn ElevationService,
) -> Vec<ConnectedRoad> {
    roads
        .into_par_iter()
        .map(|road| annotate_road(road, service))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn annotate_concurrently(
    roads: Vec<ConnectedRoad>,
    service: &dyn ElevationService,
) -> Vec<ConnectedRoad> {
    log::debug!("built without the 'parallel' feature, annotating sequentially");
    roads
        .into_iter()
        .map(|road| annotate_road(road, service))
        .collect()
}
