use super::WayQuery;
use crate::model::{TwistyError, Way};

/// provider of raw ways around a point, such as an Overpass API endpoint.
/// the engine never builds or runs the query itself; it only consumes the result.
pub trait WaySource {
    fn get_ways(&self, query: &WayQuery) -> Result<Vec<Way>, TwistyError>;
}
