use crate::{
    algorithm::geometry::EARTH_RADIUS_M,
    model::{Point, ScoredSegment},
};
use itertools::Itertools;
use rstar::{primitives::GeomWithData, RTree, AABB};

/// an endpoint stored as [lon, lat] along with the index of its segment
pub type IndexedEndpoint = GeomWithData<[f64; 2], usize>;

/// past this latitude the longitude span of a search envelope is unbounded
const MAX_INDEXED_LATITUDE: f64 = 89.0;

/// spatial index over the start and end points of a fixed list of segments, used
/// to find connection candidates without comparing against every segment.
pub struct EndpointIndex {
    rtree: RTree<IndexedEndpoint>,
    n_segments: usize,
}

impl EndpointIndex {
    pub fn new(segments: &[ScoredSegment]) -> EndpointIndex {
        let endpoints = segments
            .iter()
            .enumerate()
            .flat_map(|(idx, s)| {
                [s.start(), s.end()]
                    .into_iter()
                    .flatten()
                    .map(move |p| IndexedEndpoint::new([p.lon, p.lat], idx))
            })
            .collect_vec();
        EndpointIndex {
            rtree: RTree::bulk_load(endpoints),
            n_segments: segments.len(),
        }
    }

    /// indices of segments with an endpoint within `threshold_m` of either endpoint of
    /// `segment`, in ascending order. may include segments slightly beyond the threshold;
    /// never omits one within it.
    pub fn candidates(&self, segment: &ScoredSegment, threshold_m: f64) -> Vec<usize> {
        let mut found: Vec<usize> = vec![];
        for endpoint in [segment.start(), segment.end()].into_iter().flatten() {
            match search_envelope(endpoint, threshold_m) {
                Some(envelope) => found.extend(
                    self.rtree
                        .locate_in_envelope(&envelope)
                        .map(|obj| obj.data),
                ),
                None => {
                    // envelope wraps the antimeridian or a pole, every segment is a candidate
                    return (0..self.n_segments).collect_vec();
                }
            }
        }
        found.sort_unstable();
        found.dedup();
        found
    }
}

/// a lon/lat box containing every point within `radius_m` of `center`.
///
/// great-circle distance is bounded below by R * |dlat| and by
/// R * cos(max |lat|) * |dlon| * 2 / pi, so these spans are conservative.
fn search_envelope(center: &Point, radius_m: f64) -> Option<AABB<[f64; 2]>> {
    let lat_span = (radius_m / EARTH_RADIUS_M).to_degrees() * 1.000_001;
    let max_abs_lat = center.lat.abs() + lat_span;
    if max_abs_lat >= MAX_INDEXED_LATITUDE {
        return None;
    }
    let lon_span = lat_span * std::f64::consts::FRAC_PI_2 / max_abs_lat.to_radians().cos();
    if center.lon - lon_span < -180.0 || center.lon + lon_span > 180.0 {
        return None;
    }
    Some(AABB::from_corners(
        [center.lon - lon_span, center.lat - lat_span],
        [center.lon + lon_span, center.lat + lat_span],
    ))
}
