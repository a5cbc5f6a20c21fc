use std::fmt::Debug;
use std::time::Instant;
use num_traits::{Float, Zero};
use crate::graph::{Graph, VertexId};
use crate::Result;

/// Cost reported when no path exists. Real path costs are never negative.
pub const NO_PATH_EXISTS: f64 = -1.0;

/// Vertex ID that never names a real vertex
pub const INVALID_VERTEX_ID: VertexId = VertexId::MAX;

/// Result of a single shortest path query
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Total weight along `vertices`, or [`NO_PATH_EXISTS`] when unreachable
    pub cost: W,

    /// Vertices from source to target inclusive; empty when unreachable
    pub vertices: Vec<VertexId>,
}

impl<W> ShortestPath<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// The "no path" outcome: sentinel cost and an empty vertex sequence
    pub fn unreachable() -> Self {
        ShortestPath {
            cost: -W::one(),
            vertices: Vec::new(),
        }
    }

    /// The trivial path from a vertex to itself
    pub fn trivial(vertex: VertexId) -> Self {
        ShortestPath {
            cost: W::zero(),
            vertices: vec![vertex],
        }
    }

    /// Returns true unless this is the unreachable outcome
    pub fn is_found(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// Number of edges along the path
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Trait for point-to-point shortest path strategies
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Runs any preprocessing the strategy needs, giving up at `deadline`.
    ///
    /// Returns false if the preprocessing could not finish in time. Strategies
    /// without a setup phase keep this default.
    fn precompute(&mut self, _graph: &G, _deadline: Instant) -> bool {
        true
    }

    /// Compute the shortest path from `source` to `target`.
    ///
    /// Out-of-range vertices are an error; an unreachable target is not.
    fn find_path(&self, graph: &G, source: VertexId, target: VertexId) -> Result<ShortestPath<W>>;
}

/// Walks `predecessors` back from `target` to `source` and returns the path in order.
///
/// Returns `None` when the chain is broken or loops, which means the
/// predecessor table is inconsistent with the search that produced it.
pub fn reconstruct_path(
    predecessors: &[Option<VertexId>],
    source: VertexId,
    target: VertexId,
) -> Option<Vec<VertexId>> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        match predecessors.get(current).copied().flatten() {
            Some(pred) => {
                current = pred;
                path.push(current);
            }
            None => {
                log::warn!("broken predecessor chain at vertex {} while reconstructing path", current);
                return None;
            }
        }

        if path.len() > predecessors.len() {
            log::warn!("path from {} to {} exceeds graph size, likely a cycle", source, target);
            return None;
        }
    }

    path.reverse();
    Some(path)
}
