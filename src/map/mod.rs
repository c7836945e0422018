//! Strategic map: territories and their ring adjacency

pub mod graph;
pub mod territory;

pub use graph::TerritoryGraph;
pub use territory::Territory;
