use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::transit::row_source::RowSource;
use crate::Result;

/// Identifier of a bus stop in the source data
pub type StopId = u64;

/// Identifier of the street-map node a stop sits on
pub type NodeId = u64;

/// A bus stop and the street-map node it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Stop {
    pub id: StopId,
    pub node_id: NodeId,
}

/// A named bus route and its stops in travel order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    name: String,
    stops: Vec<StopId>,
}

impl Route {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Stop at `index` along the route
    pub fn stop_id(&self, index: usize) -> Option<StopId> {
        self.stops.get(index).copied()
    }

    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }
}

/// Which input a row came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrigin {
    Stops,
    Routes,
}

impl fmt::Display for RowOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOrigin::Stops => write!(f, "stops"),
            RowOrigin::Routes => write!(f, "routes"),
        }
    }
}

/// Why a row was skipped
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RowIssue {
    #[error("expected at least 2 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("invalid stop id {value:?}")]
    InvalidStopId { value: String },

    #[error("invalid node id {value:?}")]
    InvalidNodeId { value: String },
}

/// A skipped input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub origin: RowOrigin,
    /// 1-based row number within its source
    pub row: usize,
    pub issue: RowIssue,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} row {}: {}", self.origin, self.row, self.issue)
    }
}

/// A loaded bus system together with every row that had to be skipped
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub system: BusSystem,
    pub warnings: Vec<LoadWarning>,
}

/// Stops and routes read from row sources
#[derive(Debug, Clone, Default)]
pub struct BusSystem {
    stops: Vec<Stop>,
    stop_index: HashMap<StopId, usize>,
    routes: Vec<Route>,
    route_index: HashMap<String, usize>,
}

fn parse_id(field: &str) -> Option<u64> {
    field.trim().parse().ok()
}

impl BusSystem {
    /// Reads every row from the given sources.
    ///
    /// Stop rows are `stop_id, node_id`; route rows are `route_name, stop_id`
    /// and append to the named route in row order. Rows with fewer than two
    /// fields or unparsable IDs are skipped and reported in the returned
    /// warnings. Only a failing source (such as an I/O error) aborts the load.
    pub fn load(
        stops: Option<&mut dyn RowSource>,
        routes: Option<&mut dyn RowSource>,
    ) -> Result<LoadReport> {
        let mut system = BusSystem::default();
        let mut warnings = Vec::new();

        let mut skip = |origin: RowOrigin, row: usize, issue: RowIssue| {
            log::warn!("skipping {} row {}: {}", origin, row, issue);
            warnings.push(LoadWarning { origin, row, issue });
        };

        if let Some(source) = stops {
            let mut row_number = 0;
            while let Some(row) = source.read_row()? {
                row_number += 1;
                if row.len() < 2 {
                    skip(RowOrigin::Stops, row_number, RowIssue::TooFewFields { found: row.len() });
                    continue;
                }
                let Some(id) = parse_id(&row[0]) else {
                    skip(RowOrigin::Stops, row_number, RowIssue::InvalidStopId { value: row[0].clone() });
                    continue;
                };
                let Some(node_id) = parse_id(&row[1]) else {
                    skip(RowOrigin::Stops, row_number, RowIssue::InvalidNodeId { value: row[1].clone() });
                    continue;
                };
                system.insert_stop(Stop { id, node_id });
            }
        }

        if let Some(source) = routes {
            let mut row_number = 0;
            while let Some(mut row) = source.read_row()? {
                row_number += 1;
                if row.len() < 2 {
                    skip(RowOrigin::Routes, row_number, RowIssue::TooFewFields { found: row.len() });
                    continue;
                }
                let Some(stop_id) = parse_id(&row[1]) else {
                    skip(RowOrigin::Routes, row_number, RowIssue::InvalidStopId { value: row[1].clone() });
                    continue;
                };
                let name = row.swap_remove(0);
                system.append_route_stop(name, stop_id);
            }
        }

        log::debug!(
            "loaded {} stops and {} routes ({} rows skipped)",
            system.stops.len(),
            system.routes.len(),
            warnings.len()
        );

        Ok(LoadReport { system, warnings })
    }

    /// A repeated stop ID replaces the earlier one for ID lookups; both stay indexed.
    fn insert_stop(&mut self, stop: Stop) {
        self.stop_index.insert(stop.id, self.stops.len());
        self.stops.push(stop);
    }

    fn append_route_stop(&mut self, name: String, stop_id: StopId) {
        let index = match self.route_index.get(&name) {
            Some(&index) => index,
            None => {
                let index = self.routes.len();
                self.route_index.insert(name.clone(), index);
                self.routes.push(Route { name, stops: Vec::new() });
                index
            }
        };
        self.routes[index].stops.push(stop_id);
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Stops in load order
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Routes in order of first appearance
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn stop_by_index(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    pub fn stop_by_id(&self, id: StopId) -> Option<&Stop> {
        self.stop_index.get(&id).map(|&index| &self.stops[index])
    }

    pub fn route_by_index(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.route_index.get(name).map(|&index| &self.routes[index])
    }
}

impl fmt::Display for BusSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "StopCount: {}", self.stop_count())?;
        writeln!(f, "RouteCount: {}", self.route_count())?;
        for (index, stop) in self.stops.iter().enumerate() {
            writeln!(f, "Index {} ID: {} NodeID: {}", index, stop.id, stop.node_id)?;
        }
        for (index, route) in self.routes.iter().enumerate() {
            writeln!(
                f,
                "Route Index {} Name: {} StopCount: {}",
                index,
                route.name,
                route.stop_count()
            )?;
        }
        Ok(())
    }
}
