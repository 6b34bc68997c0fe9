pub mod connection_ops;
mod endpoint_pairing;

pub use connection_ops::{can_connect, closest_pairing, merge, names_compatible};
pub use endpoint_pairing::EndpointPairing;
