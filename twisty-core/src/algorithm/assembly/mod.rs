pub mod assembly_ops;
mod assembly_strategy;
mod endpoint_index;

pub use assembly_ops::assemble_roads;
pub use assembly_strategy::AssemblyStrategy;
pub use endpoint_index::EndpointIndex;
