use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::algorithm::ShortestPath;
use crate::graph::VertexId;
use crate::router::DijkstraPathRouter;
use crate::transit::bus_system::{BusSystem, Stop, StopId};
use crate::{Error, Result};

/// How route legs become graph edges
#[derive(Debug, Clone, Copy)]
pub struct NetworkOptions {
    /// Weight of the edge between consecutive stops on a route
    pub hop_weight: f64,
    /// Whether buses are assumed to run a route in both directions
    pub bidirectional: bool,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        Self {
            hop_weight: 1.0,
            bidirectional: true,
        }
    }
}

impl NetworkOptions {
    pub fn with_hop_weight(mut self, hop_weight: f64) -> Self {
        self.hop_weight = hop_weight;
        self
    }

    pub fn with_bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = bidirectional;
        self
    }
}

/// A router graph with one vertex per stop, tagged with the stop itself
#[derive(Debug)]
pub struct TransitNetwork {
    router: DijkstraPathRouter<Stop>,
    vertices: HashMap<StopId, VertexId>,
    /// Route stops that were never loaded as stops, in order of discovery
    unknown_stops: Vec<StopId>,
}

impl TransitNetwork {
    /// Builds the network for `system`.
    ///
    /// Consecutive stops on each route are joined by an edge of
    /// `options.hop_weight`. Legs that touch a stop missing from the stop list
    /// are left out and the stop is recorded in [`unknown_stops`](Self::unknown_stops).
    pub fn build(system: &BusSystem, options: NetworkOptions) -> Result<Self> {
        let mut router = DijkstraPathRouter::with_capacity(system.stop_count());
        let mut vertices = HashMap::with_capacity(system.stop_count());

        for stop in system.stops() {
            if !vertices.contains_key(&stop.id) {
                // Tag with the stop that wins ID lookups
                let tagged = system.stop_by_id(stop.id).copied().unwrap_or(*stop);
                vertices.insert(stop.id, router.add_vertex(tagged));
            }
        }

        let mut unknown_stops = Vec::new();
        let weight = OrderedFloat(options.hop_weight);

        for route in system.routes() {
            for leg in route.stops().windows(2) {
                let (from, to) = (leg[0], leg[1]);
                let (Some(&u), Some(&v)) = (vertices.get(&from), vertices.get(&to)) else {
                    for id in [from, to] {
                        if !vertices.contains_key(&id) && !unknown_stops.contains(&id) {
                            log::warn!("route {} references unknown stop {}", route.name(), id);
                            unknown_stops.push(id);
                        }
                    }
                    continue;
                };
                if u == v {
                    continue;
                }
                router.add_edge(u, v, weight, options.bidirectional)?;
            }
        }

        log::debug!(
            "built transit network: {} vertices, {} edges",
            router.vertex_count(),
            router.edge_count()
        );

        Ok(TransitNetwork {
            router,
            vertices,
            unknown_stops,
        })
    }

    pub fn router(&self) -> &DijkstraPathRouter<Stop> {
        &self.router
    }

    pub fn vertex_for_stop(&self, id: StopId) -> Option<VertexId> {
        self.vertices.get(&id).copied()
    }

    pub fn unknown_stops(&self) -> &[StopId] {
        &self.unknown_stops
    }

    /// Shortest trip between two stops, as graph vertices
    pub fn shortest_trip(&self, from: StopId, to: StopId) -> Result<ShortestPath<OrderedFloat<f64>>> {
        let source = self.vertex_for_stop(from).ok_or(Error::UnknownStop(from))?;
        let target = self.vertex_for_stop(to).ok_or(Error::UnknownStop(to))?;
        self.router.find_shortest_path(source, target)
    }

    /// Maps the vertices of a path back to their stops
    pub fn stops_on(&self, path: &ShortestPath<OrderedFloat<f64>>) -> Result<Vec<Stop>> {
        path.vertices
            .iter()
            .map(|&vertex| self.router.vertex_tag(vertex).copied())
            .collect()
    }
}
