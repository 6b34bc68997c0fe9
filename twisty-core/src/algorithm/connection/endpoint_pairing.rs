use crate::model::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// which endpoints of two segments A and B face each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndpointPairing {
    /// A's end meets B's start: A ++ B
    EndStart,
    /// A's start meets B's end: B ++ A
    StartEnd,
    /// A's end meets B's end: A ++ reverse(B)
    EndEnd,
    /// A's start meets B's start: reverse(A) ++ B
    StartStart,
}

impl EndpointPairing {
    /// every pairing, in the order used to break ties between equal gaps
    pub const ALL: [EndpointPairing; 4] = [
        EndpointPairing::EndStart,
        EndpointPairing::StartEnd,
        EndpointPairing::EndEnd,
        EndpointPairing::StartStart,
    ];

    /// the (A endpoint, B endpoint) pair this pairing compares
    pub fn endpoints<'a>(
        &self,
        a: (&'a Point, &'a Point),
        b: (&'a Point, &'a Point),
    ) -> (&'a Point, &'a Point) {
        let ((a_start, a_end), (b_start, b_end)) = (a, b);
        match self {
            EndpointPairing::EndStart => (a_end, b_start),
            EndpointPairing::StartEnd => (a_start, b_end),
            EndpointPairing::EndEnd => (a_end, b_end),
            EndpointPairing::StartStart => (a_start, b_start),
        }
    }

    /// concatenates two polylines so that the paired endpoints are adjacent.
    pub fn join(&self, a: &[Point], b: &[Point]) -> Vec<Point> {
        let mut joined = Vec::with_capacity(a.len() + b.len());
        match self {
            EndpointPairing::EndStart => {
                joined.extend_from_slice(a);
                joined.extend_from_slice(b);
            }
            EndpointPairing::StartEnd => {
                joined.extend_from_slice(b);
                joined.extend_from_slice(a);
            }
            EndpointPairing::EndEnd => {
                joined.extend_from_slice(a);
                joined.extend(b.iter().rev());
            }
            EndpointPairing::StartStart => {
                joined.extend(a.iter().rev());
                joined.extend_from_slice(b);
            }
        }
        joined
    }
}

impl Display for EndpointPairing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EndpointPairing::EndStart => "end-start",
            EndpointPairing::StartEnd => "start-end",
            EndpointPairing::EndEnd => "end-end",
            EndpointPairing::StartStart => "start-start",
        };
        write!(f, "{s}")
    }
}
