use super::FilterOp;
use itertools::Itertools;
use regex::Regex;
use serde::{de::Visitor, Deserialize, Deserializer, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
    sync::OnceLock,
};
use twisty_core::model::feature::Highway;

#[derive(Debug, Clone, PartialEq, Eq)]
/// represents a single fragment of an overpass API filter query
/// see <https://wiki.openstreetmap.org/wiki/Overpass_API/Language_Guide#Tag_request_clauses_(or_%22tag_filters%22)>
pub struct FilterQuery {
    /// the key in the tag's key/value pair to match against
    tag: String,
    /// operation/predicate used on this query
    op: FilterOp,
    /// alternatives for the value, written as "a|b|c". order is preserved so the
    /// rendered query is stable.
    values: Vec<String>,
}

impl FilterQuery {
    const QUERY_REGEX: &'static str = r#"^\["([\w:*]+)"(=|!=|~|!~)"([\w|:\-]+)"\]$"#;

    pub fn new(tag: &str, op: FilterOp, values: Vec<String>) -> FilterQuery {
        FilterQuery {
            tag: String::from(tag),
            op,
            values: values.into_iter().unique().collect_vec(),
        }
    }

    /// the `["highway"~"a|b|c"]` clause selecting the given road classes
    pub fn highway_classes(classes: &[Highway]) -> FilterQuery {
        let values = classes.iter().map(|h| h.to_string()).collect_vec();
        FilterQuery::new("highway", FilterOp::Matches, values)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    fn regex() -> Result<&'static Regex, String> {
        static QUERY_RE: OnceLock<Result<Regex, String>> = OnceLock::new();
        QUERY_RE
            .get_or_init(|| {
                Regex::new(Self::QUERY_REGEX)
                    .map_err(|e| format!("internal error building overpass query regex: {e}"))
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl Display for FilterQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = self.values.iter().join("|");
        write!(f, "[\"{}\"{}\"{}\"]", self.tag, self.op, values)
    }
}

impl FromStr for FilterQuery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = Self::regex()?;
        match re.captures(s.trim()) {
            None => Err(format!("unable to parse overpass query: '{s}'")),
            Some(groups) => {
                let tag = &groups[1];
                let op = FilterOp::from_str(&groups[2])?;
                let values = groups[3]
                    .split('|')
                    .filter(|v| !v.is_empty())
                    .map(String::from)
                    .collect_vec();
                if values.is_empty() {
                    return Err(format!("overpass query has no values: '{s}'"));
                }
                Ok(FilterQuery::new(tag, op, values))
            }
        }
    }
}

struct OverpassFilterQueryVisitor;

impl Visitor<'_> for OverpassFilterQueryVisitor {
    type Value = FilterQuery;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a valid overpass filter query. see https://wiki.openstreetmap.org/wiki/Overpass_API/Language_Guide#Tag_request_clauses_(or_%22tag_filters%22).")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        FilterQuery::from_str(v).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for FilterQuery {
    fn deserialize<D>(deserializer: D) -> Result<FilterQuery, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(OverpassFilterQueryVisitor)
    }
}

impl Serialize for FilterQuery {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
