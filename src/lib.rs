//! Transit Router - tagged weighted graphs with single-source shortest-path routing
//!
//! The core of this library is the [`PathRouter`], which owns a graph of vertices
//! carrying arbitrary caller-defined tags and answers shortest-path queries between
//! two vertices using Dijkstra's algorithm with a lazy-deletion priority queue.
//!
//! The [`transit`] module contains a loader for delimiter-separated bus-system data
//! (stops and routes) and a helper that turns a loaded system into a router graph.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod router;
pub mod transit;

pub use algorithm::{
    dijkstra::Dijkstra, ShortestPath, ShortestPathAlgorithm, INVALID_VERTEX_ID, NO_PATH_EXISTS,
};
/// Re-export main types for convenient use
pub use graph::{TaggedGraph, VertexId};
pub use router::{DijkstraPathRouter, PathRouter};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge weight: {0} (weights must be strictly positive)")]
    InvalidWeight(f64),

    #[error("Unknown stop ID: {0}")]
    UnknownStop(u64),

    #[error("Row source error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
