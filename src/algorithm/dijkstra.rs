use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::traits::reconstruct_path;
use crate::algorithm::{ShortestPath, ShortestPathAlgorithm};
use crate::data_structures::MinQueue;
use crate::graph::{Graph, VertexId};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion and early exit at the target.
///
/// Needs no preprocessing, so `precompute` keeps the trait's default. Every
/// query allocates its own tables, so concurrent queries on an unchanging graph
/// do not interfere.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_path(&self, graph: &G, source: VertexId, target: VertexId) -> Result<ShortestPath<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }
        if source == target {
            return Ok(ShortestPath::trivial(source));
        }

        let n = graph.vertex_count();

        // None stands for an infinite tentative distance
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut queue = MinQueue::new();
        queue.push(source, W::zero());

        let mut settled = 0usize;
        let mut found = false;

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry: u was improved after this one was pushed
            if let Some(best) = distances[u] {
                if dist_u > best {
                    continue;
                }
            }

            settled += 1;
            if u == target {
                found = true;
                break;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + weight;

                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    queue.push(v, candidate);
                }
            }
        }

        log::debug!(
            "dijkstra {} -> {}: settled {} vertices, {} entries left in queue",
            source,
            target,
            settled,
            queue.len()
        );

        let cost = match distances[target] {
            Some(cost) if found => cost,
            _ => return Ok(ShortestPath::unreachable()),
        };

        Ok(match reconstruct_path(&predecessors, source, target) {
            Some(vertices) => ShortestPath { cost, vertices },
            None => ShortestPath::unreachable(),
        })
    }
}
