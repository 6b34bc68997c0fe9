use super::{AssemblyStrategy, EndpointIndex};
use crate::{
    algorithm::connection::{can_connect, merge},
    config::EngineConfig,
    model::{ConnectedRoad, ScoredSegment},
};
use fixedbitset::FixedBitSet;
use itertools::Itertools;

/// greedily stitches scored segments into continuous roads.
///
/// segments are visited in input order. each unconsumed segment seeds a road, which
/// repeatedly absorbs the lowest-indexed remaining segment it can connect to, restarting
/// the search after every merge, until nothing else connects. the result is deterministic
/// for a given input order but is not a globally optimal stitching.
///
/// roads are returned sorted by length, longest first. equal lengths keep assembly order.
pub fn assemble_roads(segments: &[ScoredSegment], config: &EngineConfig) -> Vec<ConnectedRoad> {
    let threshold_m = config.connection_threshold_m;
    let corner_angle_rad = config.thresholds.corner_angle_rad;
    let index = match config.assembly_strategy {
        AssemblyStrategy::SpatialIndex => Some(EndpointIndex::new(segments)),
        AssemblyStrategy::LinearScan => None,
    };

    let mut consumed = FixedBitSet::with_capacity(segments.len());
    let mut roads: Vec<ConnectedRoad> = Vec::with_capacity(segments.len());
    for (seed_idx, seed) in segments.iter().enumerate() {
        if consumed.contains(seed_idx) {
            continue;
        }
        consumed.insert(seed_idx);

        let mut current = seed.clone();
        while let Some(next_idx) =
            find_connection(&current, segments, &consumed, index.as_ref(), threshold_m)
        {
            consumed.insert(next_idx);
            match merge(&current, &segments[next_idx], corner_angle_rad) {
                Ok(merged) => current = merged,
                Err(e) => {
                    // segment is consumed either way so the search cannot revisit it
                    log::warn!("skipping segment {}: {e}", segments[next_idx].id);
                }
            }
        }
        roads.push(ConnectedRoad::from(current));
    }

    log::info!(
        "assembled {} roads from {} segments ({} stitched from multiple ways) using {}",
        roads.len(),
        segments.len(),
        roads.iter().filter(|r| r.is_connected).count(),
        config.assembly_strategy
    );

    // sort_by is stable
    roads.sort_by(|a, b| b.length_m.total_cmp(&a.length_m));
    roads
}

/// the lowest index of an unconsumed segment that can connect to `current`
fn find_connection(
    current: &ScoredSegment,
    segments: &[ScoredSegment],
    consumed: &FixedBitSet,
    index: Option<&EndpointIndex>,
    threshold_m: f64,
) -> Option<usize> {
    let candidates = match index {
        Some(idx) => idx.candidates(current, threshold_m),
        None => (0..segments.len()).collect_vec(),
    };
    candidates
        .into_iter()
        .filter(|idx| !consumed.contains(*idx))
        .find(|idx| can_connect(current, &segments[*idx], threshold_m))
}

#[cfg(test)]
mod tests {
    use super::assemble_roads;
    use crate::algorithm::{assembly::AssemblyStrategy, scoring::CurvatureMeasurement};
    use crate::config::EngineConfig;
    use crate::model::{Point, ScoredSegment};
    use crate::test_fixtures::{offset, zigzag};
    use std::collections::{BTreeMap, BTreeSet};

    fn segment(id: &str, name: &str, geometry: Vec<Point>) -> ScoredSegment {
        let m = CurvatureMeasurement::measure(&geometry, 0.087)
            .expect("test invariant: fixture geometry is measurable");
        ScoredSegment {
            id: String::from(id),
            name: String::from(name),
            geometry,
            tags: BTreeMap::new(),
            twistiness: m.twistiness,
            corner_count: m.corner_count,
            length_m: m.length_m,
            way_ids: vec![String::from(id)],
        }
    }

    fn config(strategy: AssemblyStrategy) -> EngineConfig {
        EngineConfig {
            assembly_strategy: strategy,
            ..Default::default()
        }
    }

    /// a chain of three zig-zags out of order, a disconnected road, and a road
    /// with a conflicting name touching the chain
    fn fixture() -> Vec<ScoredSegment> {
        let origin = Point::new(0.0, 0.0);
        let first = zigzag(origin, 60.0, 200.0, 10);
        let first_end = first[first.len() - 1];
        let second = zigzag(offset(&first_end, 0.0, 20.0), 60.0, 200.0, 12);
        let second_end = second[second.len() - 1];
        let mut third = zigzag(offset(&second_end, 0.0, 15.0), 60.0, 200.0, 8);
        third.reverse();
        let elsewhere = zigzag(offset(&origin, 90.0, 10_000.0), 60.0, 200.0, 20);
        let conflicting = zigzag(offset(&first_end, 90.0, 10.0), 60.0, 200.0, 30);
        vec![
            segment("3", "Ridge Rd", third),
            segment("9", "Elm St", elsewhere),
            segment("1", "Ridge Rd", first),
            segment("7", "Canyon Dr", conflicting),
            segment("2", ScoredSegment::DEFAULT_NAME, second),
        ]
    }

    #[test]
    fn stitches_chain_in_index_order() {
        let roads = assemble_roads(&fixture(), &config(AssemblyStrategy::LinearScan));
        let ids = roads.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
        // "3" seeds the chain: it reaches "2" first (end-end), then "1" through "2"
        assert_eq!(ids, vec!["3_2_1", "7", "9"]);

        let chain = &roads[0];
        assert!(chain.is_connected);
        assert_eq!(chain.name, "Ridge Rd");
        assert_eq!(chain.way_ids, vec!["3", "2", "1"]);
        assert!(!roads[1].is_connected);
        assert!(!roads[2].is_connected);
        let expected_len = 2000.0 + 2400.0 + 1600.0 + 20.0 + 15.0;
        assert!(
            (chain.length_m - expected_len).abs() < 1.0,
            "length {} should be near {expected_len}",
            chain.length_m
        );
    }

    #[test]
    fn sorted_longest_first() {
        let roads = assemble_roads(&fixture(), &config(AssemblyStrategy::SpatialIndex));
        assert!(roads
            .windows(2)
            .all(|w| w[0].length_m >= w[1].length_m));
    }

    #[test]
    fn strategies_agree() {
        let linear = assemble_roads(&fixture(), &config(AssemblyStrategy::LinearScan));
        let indexed = assemble_roads(&fixture(), &config(AssemblyStrategy::SpatialIndex));
        assert_eq!(linear, indexed);
    }

    #[test]
    fn assembly_is_repeatable() {
        let conf = config(AssemblyStrategy::SpatialIndex);
        let ids = |roads: Vec<crate::model::ConnectedRoad>| {
            roads.into_iter().map(|r| r.id).collect::<BTreeSet<_>>()
        };
        let first = ids(assemble_roads(&fixture(), &conf));
        let second = ids(assemble_roads(&fixture(), &conf));
        assert_eq!(first, second);
    }

    #[test]
    fn equal_lengths_keep_assembly_order() {
        // same geometry, but conflicting names keep them apart
        let geometry = zigzag(Point::new(0.0, 0.0), 60.0, 200.0, 12);
        let a = segment("a", "A", geometry.clone());
        let b = segment("b", "B", geometry);
        let roads = assemble_roads(&[a, b], &EngineConfig::default());
        let ids = roads.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn unnamed_seed_keeps_its_name_and_absorbs_any_named_way() {
        let a_geom = zigzag(Point::new(0.0, 0.0), 60.0, 200.0, 10);
        let a_end = a_geom[a_geom.len() - 1];
        let b_geom = zigzag(offset(&a_end, 0.0, 10.0), 60.0, 200.0, 10);
        let b_end = b_geom[b_geom.len() - 1];
        let c_geom = zigzag(offset(&b_end, 0.0, 10.0), 60.0, 200.0, 10);
        let segments = vec![
            segment("a", ScoredSegment::DEFAULT_NAME, a_geom),
            segment("b", "Ridge Rd", b_geom),
            segment("c", "Elm St", c_geom),
        ];
        for strategy in [AssemblyStrategy::LinearScan, AssemblyStrategy::SpatialIndex] {
            let roads = assemble_roads(&segments, &config(strategy));
            let ids = roads.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
            assert_eq!(ids, vec!["a_b_c"]);
            assert_eq!(roads[0].name, ScoredSegment::DEFAULT_NAME);
            assert_eq!(roads[0].way_ids, vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn empty_input() {
        assert!(assemble_roads(&[], &EngineConfig::default()).is_empty());
    }
}
