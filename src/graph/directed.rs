use crate::graph::traits::{Graph, MutableGraph, VertexId};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// A single vertex: its caller-supplied tag plus its outgoing edges
#[derive(Debug, Clone)]
pub struct Vertex<T, W> {
    /// Opaque payload, never inspected by the graph
    tag: T,

    /// Outgoing neighbors in insertion order, each listed once
    neighbors: Vec<VertexId>,

    /// Latest weight set for each outgoing neighbor
    weights: HashMap<VertexId, W>,
}

impl<T, W> Vertex<T, W>
where
    W: Float + Zero + Debug + Copy,
{
    fn new(tag: T) -> Self {
        Vertex {
            tag,
            neighbors: Vec::new(),
            weights: HashMap::new(),
        }
    }

    /// Records the weight for `target`, overwriting any earlier weight for the same pair
    fn set_weight(&mut self, target: VertexId, weight: W) {
        if self.weights.insert(target, weight).is_none() {
            self.neighbors.push(target);
        }
    }

    /// Number of distinct outgoing neighbors
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// A directed graph of tagged vertices using adjacency lists
#[derive(Debug, Clone)]
pub struct TaggedGraph<T, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Vertices indexed by their ID
    vertices: Vec<Vertex<T, W>>,
}

impl<T, W> TaggedGraph<T, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        TaggedGraph {
            vertices: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        TaggedGraph {
            vertices: Vec::with_capacity(vertices),
        }
    }

    /// Returns the vertex record for an ID
    pub fn vertex(&self, vertex: VertexId) -> Option<&Vertex<T, W>> {
        self.vertices.get(vertex)
    }

    /// Iterates over `(id, tag)` for every vertex in ID order
    pub fn tags(&self) -> impl Iterator<Item = (VertexId, &T)> + '_ {
        self.vertices.iter().enumerate().map(|(id, v)| (id, &v.tag))
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex >= self.vertices.len() {
            return Err(Error::InvalidVertex(vertex));
        }
        Ok(())
    }
}

impl<T, W> Default for TaggedGraph<T, W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> Graph<W> for TaggedGraph<T, W>
where
    T: Debug,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum()
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        match self.vertices.get(vertex) {
            Some(v) => Box::new(v.neighbors.iter().map(move |&target| (target, v.weights[&target]))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn get_edge_weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.vertices
            .get(from)
            .and_then(|v| v.weights.get(&to))
            .copied()
    }
}

impl<T, W> MutableGraph<T, W> for TaggedGraph<T, W>
where
    T: Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, tag: T) -> VertexId {
        let new_id = self.vertices.len();
        self.vertices.push(Vertex::new(tag));
        new_id
    }

    fn vertex_tag(&self, vertex: VertexId) -> Result<&T> {
        self.vertices
            .get(vertex)
            .map(|v| &v.tag)
            .ok_or(Error::InvalidVertex(vertex))
    }

    fn vertex_tag_mut(&mut self, vertex: VertexId) -> Result<&mut T> {
        self.vertices
            .get_mut(vertex)
            .map(|v| &mut v.tag)
            .ok_or(Error::InvalidVertex(vertex))
    }

    fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: W,
        bidirectional: bool,
    ) -> Result<()> {
        // Ordered wrappers sort NaN above every number, so test it explicitly
        if !weight.is_finite() || weight <= W::zero() {
            return Err(Error::InvalidWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        self.vertices[from].set_weight(to, weight);
        if bidirectional {
            self.vertices[to].set_weight(from, weight);
        }

        Ok(())
    }
}
