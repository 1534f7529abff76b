//! Vertex bound shared by the graph module.

use std::fmt::Debug;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Bound on caller-supplied vertex values.
///
/// Vertices are identified by value equality, not by their position inside
/// the store. `Hash` backs the value-to-slot index, `Debug` renders vertices
/// in error messages, and the serde bounds fix the persistence scheme for the
/// generic vertex type. Blanket-implemented, so any suitable type qualifies:
///
/// ```rust
/// use matgraph_core::MatrixGraph;
///
/// let mut graph: MatrixGraph<u32> = MatrixGraph::new();
/// graph.insert_vertex(7).unwrap();
/// assert!(graph.contains_vertex(&7));
/// ```
pub trait Vertex: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned {}
