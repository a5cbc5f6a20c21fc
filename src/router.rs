use std::fmt::Debug;
use std::time::Instant;

use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;
use rayon::prelude::*;

use crate::algorithm::{dijkstra::Dijkstra, ShortestPath, ShortestPathAlgorithm};
use crate::graph::{Graph, MutableGraph, TaggedGraph, VertexId};
use crate::Result;

/// Path router over a graph of tagged vertices.
///
/// The router owns its graph. Vertices and edges may be added at any time,
/// including between queries; each query sees the graph as it is at call time.
/// Mutation takes `&mut self`, so sharing a router across threads for
/// read-only queries is the only concurrent use the type allows.
#[derive(Debug)]
pub struct PathRouter<T, W, A = Dijkstra>
where
    W: Float + Zero + Debug + Copy,
{
    graph: TaggedGraph<T, W>,
    algorithm: A,
}

/// Router using Dijkstra's algorithm over `f64` weights
pub type DijkstraPathRouter<T> = PathRouter<T, OrderedFloat<f64>, Dijkstra>;

impl<T, W> PathRouter<T, W, Dijkstra>
where
    T: Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates an empty router using Dijkstra's algorithm
    pub fn new() -> Self {
        Self::with_algorithm(Dijkstra::new())
    }

    /// Creates an empty Dijkstra router with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        PathRouter {
            graph: TaggedGraph::with_capacity(vertices),
            algorithm: Dijkstra::new(),
        }
    }
}

impl<T, W> Default for PathRouter<T, W, Dijkstra>
where
    T: Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W, A> PathRouter<T, W, A>
where
    T: Debug,
    W: Float + Zero + Debug + Copy,
    A: ShortestPathAlgorithm<W, TaggedGraph<T, W>>,
{
    /// Creates an empty router using the given strategy
    pub fn with_algorithm(algorithm: A) -> Self {
        PathRouter {
            graph: TaggedGraph::new(),
            algorithm,
        }
    }

    /// Read access to the underlying graph
    pub fn graph(&self) -> &TaggedGraph<T, W> {
        &self.graph
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Adds a vertex carrying `tag` and returns the next sequential ID
    pub fn add_vertex(&mut self, tag: T) -> VertexId {
        self.graph.add_vertex(tag)
    }

    /// Returns the tag of a vertex, or [`Error::InvalidVertex`](crate::Error::InvalidVertex)
    pub fn vertex_tag(&self, vertex: VertexId) -> Result<&T> {
        self.graph.vertex_tag(vertex)
    }

    pub fn vertex_tag_mut(&mut self, vertex: VertexId) -> Result<&mut T> {
        self.graph.vertex_tag_mut(vertex)
    }

    /// Adds a weighted edge. Nothing is added if the call fails.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: W,
        bidirectional: bool,
    ) -> Result<()> {
        self.graph
            .add_edge(from, to, weight, bidirectional)
            .map_err(|err| {
                log::debug!("rejected edge {} -> {}: {}", from, to, err);
                err
            })
    }

    /// Lets the strategy preprocess the current graph before `deadline`
    pub fn precompute(&mut self, deadline: Instant) -> bool {
        let done = self.algorithm.precompute(&self.graph, deadline);
        if !done {
            log::warn!("{} precompute did not finish before the deadline", self.algorithm.name());
        }
        done
    }

    /// Finds the cheapest path from `source` to `target`.
    ///
    /// An unreachable target yields [`ShortestPath::unreachable`]; only invalid
    /// vertex IDs produce an error.
    pub fn find_shortest_path(&self, source: VertexId, target: VertexId) -> Result<ShortestPath<W>> {
        self.algorithm.find_path(&self.graph, source, target)
    }
}

impl<T, W, A> PathRouter<T, W, A>
where
    T: Debug + Sync,
    W: Float + Zero + Debug + Copy + Send + Sync,
    A: ShortestPathAlgorithm<W, TaggedGraph<T, W>> + Sync,
{
    /// Answers a batch of independent queries in parallel, results in input order
    pub fn find_shortest_paths(&self, queries: &[(VertexId, VertexId)]) -> Vec<Result<ShortestPath<W>>> {
        queries
            .par_iter()
            .map(|&(source, target)| self.find_shortest_path(source, target))
            .collect()
    }
}
