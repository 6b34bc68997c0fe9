use super::EndpointPairing;
use crate::{
    algorithm::{geometry::distance, scoring::CurvatureMeasurement},
    model::{ScoredSegment, TwistyError},
};
use itertools::Itertools;

/// two segments may be stitched only if their names agree, or at least one of them
/// is unnamed.
pub fn names_compatible(a: &ScoredSegment, b: &ScoredSegment) -> bool {
    a.has_default_name() || b.has_default_name() || a.name == b.name
}

/// finds the closest pair of endpoints between two segments, along with their
/// distance in meters. on equal distances the earlier pairing in
/// [`EndpointPairing::ALL`] wins. None if either segment has no geometry.
pub fn closest_pairing(a: &ScoredSegment, b: &ScoredSegment) -> Option<(EndpointPairing, f64)> {
    let a_ends = (a.start()?, a.end()?);
    let b_ends = (b.start()?, b.end()?);
    EndpointPairing::ALL
        .iter()
        .map(|pairing| {
            let (p, q) = pairing.endpoints(a_ends, b_ends);
            (*pairing, distance(p, q))
        })
        .fold(None, |best: Option<(EndpointPairing, f64)>, (pairing, d)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((pairing, d)),
        })
}

/// true if the two segments are name-compatible and some pair of their endpoints
/// lies within `threshold_m` meters.
pub fn can_connect(a: &ScoredSegment, b: &ScoredSegment, threshold_m: f64) -> bool {
    if !names_compatible(a, b) {
        return false;
    }
    match closest_pairing(a, b) {
        Some((_, d)) => d <= threshold_m,
        None => false,
    }
}

/// stitches B onto A at their closest endpoints and re-measures the result.
///
/// the merged id is "<A.id>_<B.id>". the name is A's name unless it is blank, then B's,
/// then the default name. tags are a union where B's values win on key collisions. a
/// junction point shared by both segments appears only once in the merged geometry.
///
/// callers are expected to check [`can_connect`] first; merge does not re-apply the
/// connection threshold.
pub fn merge(
    a: &ScoredSegment,
    b: &ScoredSegment,
    corner_angle_rad: f64,
) -> Result<ScoredSegment, TwistyError> {
    let (pairing, gap) = closest_pairing(a, b).ok_or_else(|| {
        TwistyError::InternalError(format!(
            "attempting to merge segments {} and {} where one has no geometry",
            a.id, b.id
        ))
    })?;
    debug_assert!(
        names_compatible(a, b),
        "merging segments with conflicting names '{}' and '{}'",
        a.name,
        b.name
    );

    let mut geometry = pairing.join(&a.geometry, &b.geometry);
    let junction = match pairing {
        EndpointPairing::StartEnd => b.geometry.len(),
        _ => a.geometry.len(),
    };
    if junction > 0 && geometry.get(junction - 1) == geometry.get(junction) {
        geometry.remove(junction);
    }

    let name = [a, b]
        .iter()
        .map(|s| s.name.trim())
        .find(|n| !n.is_empty())
        .map(String::from)
        .unwrap_or_else(|| String::from(ScoredSegment::DEFAULT_NAME));

    let mut tags = a.tags.clone();
    tags.extend(b.tags.iter().map(|(k, v)| (k.clone(), v.clone())));

    let way_ids = a.way_ids.iter().chain(b.way_ids.iter()).cloned().collect_vec();
    let id = format!("{}{}{}", a.id, ScoredSegment::ID_SEPARATOR, b.id);

    let measurement =
        CurvatureMeasurement::measure(&geometry, corner_angle_rad).ok_or_else(|| {
            TwistyError::InternalError(format!(
                "merged segment {id} has no curvature signal"
            ))
        })?;
    log::debug!(
        "merged {} and {} at {} with a {:.1}m gap",
        a.id,
        b.id,
        pairing,
        gap
    );

    Ok(ScoredSegment {
        id,
        name,
        geometry,
        tags,
        twistiness: measurement.twistiness,
        corner_count: measurement.corner_count,
        length_m: measurement.length_m,
        way_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;
    use crate::test_fixtures::{offset, straight, zigzag};
    use std::collections::BTreeMap;

    const CORNER: f64 = 0.087;

    fn segment(id: &str, name: &str, geometry: Vec<Point>) -> ScoredSegment {
        let m = CurvatureMeasurement::measure(&geometry, CORNER)
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

    /// a northbound run of `n` points over `total_m` meters
    fn north(id: &str, name: &str, start: Point, total_m: f64, n: usize) -> ScoredSegment {
        segment(id, name, straight(start, 0.0, total_m, n))
    }

    #[test]
    fn names_must_agree_unless_unnamed() {
        let start = Point::new(0.0, 0.0);
        let oak = north("1", "Oak St", start, 1000.0, 3);
        let oak2 = north("2", "Oak St", start, 1000.0, 3);
        let elm = north("3", "Elm St", start, 1000.0, 3);
        let unnamed = north("4", ScoredSegment::DEFAULT_NAME, start, 1000.0, 3);
        assert!(names_compatible(&oak, &oak2));
        assert!(!names_compatible(&oak, &elm));
        assert!(names_compatible(&oak, &unnamed));
        assert!(names_compatible(&unnamed, &elm));
    }

    #[test]
    fn connection_threshold() {
        let a = north("a", "Oak St", Point::new(0.0, 0.0), 1000.0, 3);
        let a_end = *a.end().expect("has geometry");
        let near = north("b", "Oak St", offset(&a_end, 0.0, 49.0), 1000.0, 3);
        let far = north("c", "Oak St", offset(&a_end, 0.0, 51.0), 1000.0, 3);
        let conflicting = north("d", "Elm St", offset(&a_end, 0.0, 10.0), 1000.0, 3);
        assert!(can_connect(&a, &near, 50.0));
        assert!(!can_connect(&a, &far, 50.0));
        assert!(!can_connect(&a, &conflicting, 50.0));
    }

    #[test]
    fn merge_orientations() {
        let origin = Point::new(0.0, 0.0);
        let a = north("a", "Oak St", origin, 1000.0, 3);
        let a_start = *a.start().expect("has geometry");
        let a_end = *a.end().expect("has geometry");

        // B continues north from A's end
        let b = north("b", "Oak St", offset(&a_end, 0.0, 10.0), 1000.0, 3);
        match closest_pairing(&a, &b) {
            Some((EndpointPairing::EndStart, d)) => assert!((d - 10.0).abs() < 0.01),
            other => panic!("unexpected pairing {other:?}"),
        }
        let merged = merge(&a, &b, CORNER).expect("merge should succeed");
        assert_eq!(merged.geometry.first(), Some(&a_start));
        assert_eq!(merged.geometry.last(), b.end());

        // B ends just south of A's start
        let c_geom = straight(offset(&a_start, 180.0, 1010.0), 0.0, 1000.0, 3);
        let c = segment("c", "Oak St", c_geom);
        assert!(matches!(
            closest_pairing(&a, &c),
            Some((EndpointPairing::StartEnd, _))
        ));
        let merged = merge(&a, &c, CORNER).expect("merge should succeed");
        assert_eq!(merged.geometry.first(), c.start());
        assert_eq!(merged.geometry.last(), Some(&a_end));

        // B runs south back toward A's end
        let mut d_geom = straight(offset(&a_end, 0.0, 10.0), 0.0, 1000.0, 3);
        d_geom.reverse();
        let d = segment("d", "Oak St", d_geom);
        assert!(matches!(
            closest_pairing(&a, &d),
            Some((EndpointPairing::EndEnd, _))
        ));
        let merged = merge(&a, &d, CORNER).expect("merge should succeed");
        assert_eq!(merged.geometry.first(), Some(&a_start));
        assert_eq!(merged.geometry.last(), d.start());
        assert_eq!(merged.corner_count, 0);

        // B starts just south of A's start and heads south
        let e = segment("e", "Oak St", straight(offset(&a_start, 180.0, 10.0), 180.0, 1000.0, 3));
        assert!(matches!(
            closest_pairing(&a, &e),
            Some((EndpointPairing::StartStart, _))
        ));
        let merged = merge(&a, &e, CORNER).expect("merge should succeed");
        assert_eq!(merged.geometry.first(), Some(&a_end));
        assert_eq!(merged.geometry.last(), e.end());
        assert_eq!(merged.corner_count, 0);
    }

    #[test]
    fn merge_identity_name_and_tags() {
        let origin = Point::new(0.0, 0.0);
        let mut a = north("1", ScoredSegment::DEFAULT_NAME, origin, 1000.0, 3);
        a.tags.insert(String::from("highway"), String::from("secondary"));
        a.tags.insert(String::from("surface"), String::from("asphalt"));
        let a_end = *a.end().expect("has geometry");
        let mut b = north("2", "Ridge Rd", offset(&a_end, 0.0, 5.0), 1000.0, 3);
        b.tags.insert(String::from("highway"), String::from("tertiary"));

        let merged = merge(&a, &b, CORNER).expect("merge should succeed");
        assert_eq!(merged.id, "1_2");
        // A's name is kept even when it is the default
        assert_eq!(merged.name, ScoredSegment::DEFAULT_NAME);
        let merged = merge(&b, &a, CORNER).expect("merge should succeed");
        assert_eq!(merged.name, "Ridge Rd");
        assert_eq!(merged.way_ids, vec![String::from("1"), String::from("2")]);
        assert_eq!(merged.tags.get("highway").map(String::as_str), Some("tertiary"));
        assert_eq!(merged.tags.get("surface").map(String::as_str), Some("asphalt"));

        let both_unnamed = north("3", ScoredSegment::DEFAULT_NAME, offset(&a_end, 0.0, 5.0), 1000.0, 3);
        let merged = merge(&a, &both_unnamed, CORNER).expect("merge should succeed");
        assert_eq!(merged.name, ScoredSegment::DEFAULT_NAME);
    }

    #[test]
    fn merge_drops_shared_junction_point() {
        let a = segment("a", "Oak St", zigzag(Point::new(0.0, 0.0), 60.0, 200.0, 6));
        let a_end = *a.end().expect("has geometry");
        let b = segment("b", "Oak St", zigzag(a_end, 60.0, 200.0, 6));
        let merged = merge(&a, &b, CORNER).expect("merge should succeed");
        assert_eq!(merged.geometry.len(), a.geometry.len() + b.geometry.len() - 1);
        assert!(merged.geometry.windows(2).all(|w| w[0] != w[1]));
        assert!((merged.length_m - (a.length_m + b.length_m)).abs() < 1e-6);
        // every interior point of both zig-zags plus the junction is a corner
        assert_eq!(merged.corner_count, a.corner_count + b.corner_count + 1);
    }

    #[test]
    fn merge_keeps_repeated_vertices_away_from_junction() {
        let mut a_geom = zigzag(Point::new(0.0, 0.0), 60.0, 200.0, 6);
        a_geom.insert(3, a_geom[3]);
        let a = segment("a", "Oak St", a_geom);
        let a_end = *a.end().expect("has geometry");
        let b = segment("b", "Oak St", zigzag(a_end, 60.0, 200.0, 6));
        let merged = merge(&a, &b, CORNER).expect("merge should succeed");
        assert_eq!(merged.geometry.len(), a.geometry.len() + b.geometry.len() - 1);
        assert_eq!(&merged.geometry[..a.geometry.len()], a.geometry.as_slice());
        assert_eq!(&merged.geometry[a.geometry.len()..], &b.geometry[1..]);
    }

    #[test]
    fn merge_length_within_gap_of_sum() {
        let a = segment("a", "Oak St", zigzag(Point::new(0.0, 0.0), 60.0, 200.0, 6));
        let a_end = *a.end().expect("has geometry");
        let b = segment("b", "Oak St", zigzag(offset(&a_end, 0.0, 30.0), 60.0, 200.0, 6));
        let merged = merge(&a, &b, CORNER).expect("merge should succeed");
        let sum = a.length_m + b.length_m;
        assert!(merged.length_m >= sum);
        assert!(merged.length_m <= sum + 30.0 + 1e-6);
    }
}
