use super::{CurvatureMeasurement, RejectionReason, ScoreOutcome};
use crate::{
    algorithm::geometry::polyline_length,
    config::CurvatureThresholds,
    model::{
        feature::{maxspeed, Highway},
        ScoredSegment, Way,
    },
};
use itertools::Itertools;
use std::str::FromStr;

/// screens a single way, returning its curvature measurements if it is long and
/// curvy enough for its road class. pure and infallible: malformed ways are rejected.
pub fn score_way(way: &Way, thresholds: &CurvatureThresholds) -> ScoreOutcome {
    if !way.has_valid_geometry() {
        return ScoreOutcome::Rejected(RejectionReason::InvalidGeometry);
    }

    let length_m = polyline_length(&way.geometry);
    if length_m < thresholds.min_length_m {
        return ScoreOutcome::Rejected(RejectionReason::TooShort);
    }

    let measurement = match CurvatureMeasurement::measure(&way.geometry, thresholds.corner_angle_rad)
    {
        Some(m) => m,
        None => return ScoreOutcome::Rejected(RejectionReason::NoCurvatureSignal),
    };

    if measurement.twistiness < thresholds.min_twistiness
        && measurement.corner_count < thresholds.min_corner_count
    {
        return ScoreOutcome::Rejected(RejectionReason::NotCurvyEnough);
    }

    if is_urban(way, thresholds) && measurement.twistiness <= thresholds.urban_min_twistiness {
        return ScoreOutcome::Rejected(RejectionReason::UrbanNotCurvyEnough);
    }

    let name = way
        .road_name()
        .map(String::from)
        .unwrap_or_else(|| String::from(ScoredSegment::DEFAULT_NAME));
    ScoreOutcome::Scored(ScoredSegment {
        id: way.id.clone(),
        name,
        geometry: way.geometry.clone(),
        tags: way.tags.clone(),
        twistiness: measurement.twistiness,
        corner_count: measurement.corner_count,
        length_m,
        way_ids: vec![way.id.clone()],
    })
}

/// a way is urban when its highway class is one of the configured urban classes, or
/// when its posted maxspeed is at or below the urban speed. unparseable tags never
/// make a way urban.
pub fn is_urban(way: &Way, thresholds: &CurvatureThresholds) -> bool {
    let urban_class = way
        .get_tag(Way::HIGHWAY_TAG)
        .and_then(|h| Highway::from_str(h).ok())
        .map(|h| thresholds.urban_highway_classes.contains(&h))
        .unwrap_or_default();
    if urban_class {
        return true;
    }
    way.get_tag(Way::MAXSPEED_TAG)
        .and_then(maxspeed::maxspeed_kph)
        .map(|kph| kph <= thresholds.urban_max_speed_kph)
        .unwrap_or_default()
}

/// screens every way, preserving input order among the survivors.
pub fn score_ways(ways: &[Way], thresholds: &CurvatureThresholds) -> Vec<ScoredSegment> {
    let mut segments: Vec<ScoredSegment> = Vec::with_capacity(ways.len());
    let mut rejections: Vec<RejectionReason> = vec![];
    for way in ways.iter() {
        match score_way(way, thresholds) {
            ScoreOutcome::Scored(segment) => segments.push(segment),
            ScoreOutcome::Rejected(reason) => {
                log::debug!("way {} rejected: {}", way.id, reason);
                rejections.push(reason);
            }
        }
    }

    let summary = rejections
        .into_iter()
        .counts()
        .into_iter()
        .sorted()
        .map(|(reason, count)| format!("{reason}: {count}"))
        .join(", ");
    log::info!(
        "scored {} of {} ways as curvy candidates (rejected: [{}])",
        segments.len(),
        ways.len(),
        summary
    );
    segments
}
