use std::time::Instant;
use rand::Rng;
use transit_router::graph::generators::generate_random;
use transit_router::graph::{Graph, VertexId};
use transit_router::DijkstraPathRouter;

// Copies a generated graph into a router, tagging each vertex with its index
fn build_router(num_vertices: usize, edge_factor: f64, seed: u64) -> DijkstraPathRouter<usize> {
    let graph = generate_random(num_vertices, edge_factor, seed);
    let mut router = DijkstraPathRouter::with_capacity(num_vertices);

    for v in 0..graph.vertex_count() {
        router.add_vertex(v);
    }
    for u in 0..graph.vertex_count() {
        for (v, weight) in graph.outgoing_edges(u) {
            router
                .add_edge(u, v, weight, false)
                .expect("generated edges are valid");
        }
    }

    router
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];
    let edge_factor = 4.0;
    let queries_per_size = 200;

    println!("=====================================================");
    println!("Benchmark: point-to-point Dijkstra queries");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut rng = rand::thread_rng();
    let mut results = Vec::new();

    for &size in &graph_sizes {
        let router = build_router(size, edge_factor, size as u64);
        let queries: Vec<(VertexId, VertexId)> = (0..queries_per_size)
            .map(|_| (rng.gen_range(0..size), rng.gen_range(0..size)))
            .collect();

        println!("\nGraph has {} vertices and {} edges", router.vertex_count(), router.edge_count());

        let start = Instant::now();
        let mut reachable = 0;
        for &(source, target) in &queries {
            let path = router.find_shortest_path(source, target).expect("query vertices are valid");
            if path.is_found() {
                reachable += 1;
            }
        }
        let sequential = start.elapsed();

        let start = Instant::now();
        let batch = router.find_shortest_paths(&queries);
        let parallel = start.elapsed();

        let total_cost: f64 = batch
            .iter()
            .filter_map(|result| result.as_ref().ok())
            .filter(|path| path.is_found())
            .map(|path| path.cost.into_inner())
            .sum();

        println!("  - {} of {} targets reachable, total cost {:.1}", reachable, queries.len(), total_cost);
        println!("  - sequential: {:?}, parallel batch: {:?}", sequential, parallel);

        results.push((size, sequential, parallel));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Sequential (ms)", "Parallel (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, sequential, parallel) in &results {
        let speedup = sequential.as_secs_f64() / parallel.as_secs_f64();
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            sequential.as_millis(),
            parallel.as_millis(),
            speedup
        );
    }
}
