pub mod donut;
pub mod force_graph;
