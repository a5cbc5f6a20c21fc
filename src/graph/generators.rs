use crate::graph::{MutableGraph, TaggedGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with `n` vertices and about `edge_factor * n` edges.
///
/// Weights are drawn uniformly from `[1, 100)`. The same seed always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, seed: u64) -> TaggedGraph<(), OrderedFloat<f64>> {
    let mut graph = TaggedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..n {
        graph.add_vertex(());
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            // Endpoints are in range and the weight is positive
            let _ = graph.add_edge(u, v, weight, false);
        }
    }

    graph
}

/// Generates a `width` x `height` grid tagged with `(x, y)` coordinates.
///
/// Every cell is connected bidirectionally to its 8 neighbours: cardinal moves
/// cost 1.0 and diagonal moves cost 1.4.
pub fn generate_grid(width: usize, height: usize) -> TaggedGraph<(usize, usize), OrderedFloat<f64>> {
    let mut graph = TaggedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex((x, y));
        }
    }

    // Only east/south-facing moves; the reverse direction comes from `bidirectional`
    let directions = [(1, 0, 1.0), (0, 1, 1.0), (1, 1, 1.4), (-1, 1, 1.4)];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    // In-range endpoints and a positive cost, so this cannot fail
                    let _ = graph.add_edge(vertex, neighbor, OrderedFloat(cost), true);
                }
            }
        }
    }

    graph
}
