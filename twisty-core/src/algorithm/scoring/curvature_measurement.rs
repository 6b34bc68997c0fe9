use crate::{
    algorithm::geometry::{distance, polyline_length, turn_angle},
    model::Point,
};
use serde::{Deserialize, Serialize};

/// curvature of a polyline, measured without applying any rejection thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvatureMeasurement {
    pub length_m: f64,
    /// accumulated turn angle per meter, in radians per meter
    pub twistiness: f64,
    pub corner_count: u32,
}

impl CurvatureMeasurement {
    /// walks the interior points of a polyline, summing each turn angle and the length of
    /// the sub-segment leading into it. any turn sharper than `corner_angle_rad` is a corner.
    ///
    /// returns None when there is no curvature signal, i.e., the polyline has no interior
    /// points or the walked distance is zero.
    pub fn measure(geometry: &[Point], corner_angle_rad: f64) -> Option<CurvatureMeasurement> {
        let length_m = polyline_length(geometry);
        let mut total_angle = 0.0;
        let mut total_distance = 0.0;
        let mut corner_count: u32 = 0;
        for w in geometry.windows(3) {
            let (prev, curr, next) = (&w[0], &w[1], &w[2]);
            let angle = turn_angle(prev, curr, next);
            total_angle += angle;
            total_distance += distance(prev, curr);
            if angle > corner_angle_rad {
                corner_count += 1;
            }
        }

        if total_distance <= 0.0 || !total_angle.is_finite() {
            return None;
        }
        Some(CurvatureMeasurement {
            length_m,
            twistiness: total_angle / total_distance,
            corner_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::CurvatureMeasurement;
    use crate::model::Point;
    use std::f64::consts::FRAC_PI_2;

    const CORNER: f64 = 0.087;

    #[test]
    fn straight_line_has_no_corners() {
        let points = (0..12)
            .map(|i| Point::new(0.001 * i as f64, 10.0))
            .collect::<Vec<_>>();
        match CurvatureMeasurement::measure(&points, CORNER) {
            Some(m) => {
                assert_eq!(m.corner_count, 0);
                assert_eq!(m.twistiness, 0.0);
                assert!(m.length_m > 0.0);
            }
            None => panic!("straight line should still be measurable"),
        }
    }

    #[test]
    fn single_right_angle() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.001, 0.0),
            Point::new(0.001, 0.001),
        ];
        let m = CurvatureMeasurement::measure(&points, CORNER).expect("measurable");
        assert_eq!(m.corner_count, 1);
        // only the leading sub-segment counts toward the walked distance
        let lead = crate::algorithm::geometry::distance(&points[0], &points[1]);
        assert!((m.twistiness - FRAC_PI_2 / lead).abs() < 1e-12);
    }

    #[test]
    fn small_turns_are_not_corners() {
        // a ~2.9 degree wiggle
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.001, 0.0),
            Point::new(0.002, 0.00005),
        ];
        let m = CurvatureMeasurement::measure(&points, CORNER).expect("measurable");
        assert_eq!(m.corner_count, 0);
        assert!(m.twistiness > 0.0);
    }

    #[test]
    fn no_curvature_signal() {
        let two_points = vec![Point::new(0.0, 0.0), Point::new(0.001, 0.0)];
        assert!(CurvatureMeasurement::measure(&two_points, CORNER).is_none());
        let stacked = vec![Point::new(0.0, 0.0); 4];
        assert!(CurvatureMeasurement::measure(&stacked, CORNER).is_none());
        assert!(CurvatureMeasurement::measure(&[], CORNER).is_none());
    }
}
