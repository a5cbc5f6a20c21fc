pub mod traits;
pub mod dijkstra;

pub use traits::{ShortestPath, ShortestPathAlgorithm, INVALID_VERTEX_ID, NO_PATH_EXISTS};
