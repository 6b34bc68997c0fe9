mod filter_op;
mod filter_query;
mod overpass_query;
mod overpass_response;
mod overpass_way_source;

pub use filter_op::FilterOp;
pub use filter_query::FilterQuery;
pub use overpass_query::OverpassQuery;
pub use overpass_response::{OverpassElement, OverpassResponse};
pub use overpass_way_source::{FileWaySource, OverpassWaySource};
