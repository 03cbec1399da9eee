pub mod dataset;
pub mod service;
pub mod view_graph;
