pub mod assembly;
pub mod connection;
pub mod elevation;
pub mod geometry;
pub mod scoring;
pub mod search_ops;
