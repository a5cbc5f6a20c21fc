pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{Graph, MutableGraph, VertexId};
pub use directed::{TaggedGraph, Vertex};
