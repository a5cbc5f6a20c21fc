//! Bus-system data: a tolerant loader for delimiter-separated stop and route
//! rows, and a builder that turns the loaded system into a router graph.

pub mod bus_system;
pub mod network;
pub mod row_source;

pub use bus_system::{BusSystem, LoadReport, LoadWarning, NodeId, Route, RowIssue, RowOrigin, Stop, StopId};
pub use network::{NetworkOptions, TransitNetwork};
pub use row_source::{DsvReader, DsvReaderBuilder, RowSource, VecRowSource};
