use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// values of the OSM "highway" tag that can appear on a drivable way.
/// see <https://wiki.openstreetmap.org/wiki/Key:highway>
///
/// variants are ordered by road hierarchy, most important first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highway {
    Motorway,
    Trunk,
    Primary,
    Secondary,
    Tertiary,
    Unclassified,
    Residential,
    MotorwayLink,
    TrunkLink,
    PrimaryLink,
    SecondaryLink,
    TertiaryLink,
    LivingStreet,
    Service,
    Track,
    Road,
}

impl Highway {
    /// highway classes searched for curvy roads when no filter is configured
    pub const DEFAULT_SEARCH_CLASSES: [Highway; 6] = [
        Highway::Motorway,
        Highway::Trunk,
        Highway::Primary,
        Highway::Secondary,
        Highway::Tertiary,
        Highway::Unclassified,
    ];

    /// streets where a stricter curvature bar applies by default
    pub const URBAN_CLASSES: [Highway; 2] = [Highway::Residential, Highway::LivingStreet];
}

impl FromStr for Highway {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "motorway" => Ok(Highway::Motorway),
            "trunk" => Ok(Highway::Trunk),
            "primary" => Ok(Highway::Primary),
            "secondary" => Ok(Highway::Secondary),
            "tertiary" => Ok(Highway::Tertiary),
            "unclassified" => Ok(Highway::Unclassified),
            "residential" => Ok(Highway::Residential),
            "motorway_link" => Ok(Highway::MotorwayLink),
            "trunk_link" => Ok(Highway::TrunkLink),
            "primary_link" => Ok(Highway::PrimaryLink),
            "secondary_link" => Ok(Highway::SecondaryLink),
            "tertiary_link" => Ok(Highway::TertiaryLink),
            "living_street" => Ok(Highway::LivingStreet),
            "service" => Ok(Highway::Service),
            "track" => Ok(Highway::Track),
            "road" => Ok(Highway::Road),
            other => Err(format!("unknown highway tag value '{other}'")),
        }
    }
}

impl Display for Highway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Highway::Motorway => "motorway",
            Highway::Trunk => "trunk",
            Highway::Primary => "primary",
            Highway::Secondary => "secondary",
            Highway::Tertiary => "tertiary",
            Highway::Unclassified => "unclassified",
            Highway::Residential => "residential",
            Highway::MotorwayLink => "motorway_link",
            Highway::TrunkLink => "trunk_link",
            Highway::PrimaryLink => "primary_link",
            Highway::SecondaryLink => "secondary_link",
            Highway::TertiaryLink => "tertiary_link",
            Highway::LivingStreet => "living_street",
            Highway::Service => "service",
            Highway::Track => "track",
            Highway::Road => "road",
        };
        write!(f, "{s}")
    }
}
