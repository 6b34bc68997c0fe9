use itertools::Itertools;
use std::cmp::Ordering;
use uom::si::f64::Velocity;
use uom::si::velocity;

pub const DEFAULT_WALK_SPEED_KPH: f64 = 5.0;
pub const MAXSPEED_SEPARATOR: &str = ";";

/// deals with the various ways that maxspeed tags can appear. handles
/// valid cases such as:
///   - 45        (45 kph)
///   - 45 mph    (72.4203 kph)
///   - 45mph     (72.4203 kph)
///   - walk      (5 kph)
///
/// and documented tagging mistakes such as:
///   - 45; 80    (takes the smaller of the two, so, 45 kph)
///
/// tags without a numeric limit ("none", "signals", "national", ...) produce None.
///
/// see <https://wiki.openstreetmap.org/wiki/Key:maxspeed>
pub fn deserialize_speed(
    s: &str,
    separator: Option<&str>,
    ignore_invalid_entries: bool,
) -> Result<Option<Velocity>, String> {
    let separated_entries = match separator {
        Some(sep) => s.split(sep).map(str::trim).collect_vec(),
        None => vec![s.trim()],
    };
    match separated_entries[..] {
        [] => Err(format!(
            "internal error: attempting to unpack empty maxspeed value '{s}'"
        )),
        [entry] => deserialize_single_speed(entry, ignore_invalid_entries),
        _ => {
            let maxspeeds = separated_entries
                .iter()
                .map(|e| deserialize_single_speed(e, ignore_invalid_entries))
                .collect::<Result<Vec<_>, _>>()?;
            let min = maxspeeds
                .into_iter()
                .min_by(|a, b| match (a, b) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Greater,
                    (Some(_), None) => Ordering::Less,
                    (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Greater),
                })
                .flatten();
            Ok(min)
        }
    }
}

/// convenience wrapper returning the tag value in kilometers per hour. invalid
/// entries are ignored.
pub fn maxspeed_kph(s: &str) -> Option<f64> {
    deserialize_speed(s, Some(MAXSPEED_SEPARATOR), true)
        .ok()
        .flatten()
        .map(|v| v.get::<velocity::kilometer_per_hour>())
}

fn deserialize_single_speed(
    entry: &str,
    ignore_invalid_entries: bool,
) -> Result<Option<Velocity>, String> {
    // "45mph" is a common variant of "45 mph"
    let (speed_str, unit_str) = match entry.split_whitespace().collect_vec()[..] {
        [] => return Ok(None),
        [single] => match single.find(|c: char| c.is_ascii_alphabetic()) {
            Some(idx) if idx > 0 => (&single[..idx], Some(&single[idx..])),
            _ => (single, None),
        },
        [speed, unit] => (speed, Some(unit)),
        _ if ignore_invalid_entries => return Ok(None),
        _ => return Err(format!("unexpected maxspeed entry '{entry}'")),
    };

    match speed_str {
        // see https://wiki.openstreetmap.org/wiki/Key:maxspeed#Possible_tagging_mistakes
        "none" | "signals" | "unposted" | "unknown" | "default" | "variable" | "national" => {
            return Ok(None)
        }
        "walk" => {
            return Ok(Some(Velocity::new::<velocity::kilometer_per_hour>(
                DEFAULT_WALK_SPEED_KPH,
            )))
        }
        _ => {}
    }

    let speed = match speed_str.parse::<f64>() {
        Ok(speed) => speed,
        Err(e) if !ignore_invalid_entries => {
            return Err(format!("speed value {speed_str} not a valid number: {e}"));
        }
        Err(_) => return Ok(None),
    };
    if speed <= 0.0 || !speed.is_finite() {
        return Ok(None);
    }

    match unit_str {
        None | Some("kph") | Some("km/h") | Some("kmh") => {
            Ok(Some(Velocity::new::<velocity::kilometer_per_hour>(speed)))
        }
        Some("mph") => Ok(Some(Velocity::new::<velocity::mile_per_hour>(speed))),
        Some("knots") => Ok(Some(Velocity::new::<velocity::knot>(speed))),
        Some(unit) if !ignore_invalid_entries => {
            Err(format!("unknown speed unit {unit} with value {speed}"))
        }
        Some(_) => Ok(None),
    }
}
