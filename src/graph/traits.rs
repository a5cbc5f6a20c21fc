use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::Result;

/// Dense, zero-based vertex identifier assigned at creation time
pub type VertexId = usize;

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: VertexId, to: VertexId) -> Option<W>;
}

/// Trait for graphs that grow by adding tagged vertices and weighted edges.
///
/// There is no removal: identifiers stay contiguous in `[0, vertex_count)`.
pub trait MutableGraph<T, W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex carrying `tag` and returns its ID
    fn add_vertex(&mut self, tag: T) -> VertexId;

    /// Returns the tag stored on a vertex
    fn vertex_tag(&self, vertex: VertexId) -> Result<&T>;

    /// Returns a mutable reference to the tag stored on a vertex
    fn vertex_tag_mut(&mut self, vertex: VertexId) -> Result<&mut T>;

    /// Adds a directed edge, or a pair of opposite edges when `bidirectional` is set.
    ///
    /// Fails without mutating the graph when either endpoint is unknown or the
    /// weight is not strictly positive.
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W, bidirectional: bool)
        -> Result<()>;
}
