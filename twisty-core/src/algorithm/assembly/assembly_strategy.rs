use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// how the assembler finds connection candidates for the road it is growing. both
/// strategies test candidates in input order and produce identical roads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssemblyStrategy {
    /// compare against every remaining segment. quadratic per merge step.
    LinearScan,
    /// only compare against segments with an endpoint near the road's endpoints.
    #[default]
    SpatialIndex,
}

impl Display for AssemblyStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssemblyStrategy::LinearScan => write!(f, "linear_scan"),
            AssemblyStrategy::SpatialIndex => write!(f, "spatial_index"),
        }
    }
}
