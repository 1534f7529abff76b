//! # MatGraph Core
//!
//! In-memory weighted graph engine with dense adjacency-matrix storage.
//!
//! The graph is strictly undirected with a single positive weight per vertex
//! pair, bounded by a capacity fixed at construction. On top of vertex/edge
//! CRUD it provides breadth-first and depth-first traversal, Dijkstra
//! single-source shortest paths, and binary save/load persistence.
//!
//! ## Features
//!
//! - **O(1) edge access**: the full matrix is allocated up front, trading
//!   memory for constant-time weight lookup and update
//! - **Value-keyed vertices**: any `Clone + Eq + Hash + Debug + Serialize`
//!   type works as a vertex; identity is by value, never by internal slot
//! - **Deterministic traversal**: BFS level order and recursion-free DFS
//!   preorder, both tie-broken by vertex insertion order
//! - **Exact round-trip persistence**: bincode snapshot validated on load,
//!   swapped in atomically
//!
//! ## Quick Start
//!
//! ```rust
//! use matgraph_core::MatrixGraph;
//!
//! let mut graph = MatrixGraph::new();
//! for station in 1_u32..=4 {
//!     graph.insert_vertex(station).unwrap();
//! }
//! graph.insert_edge(&1, &2, 1.0).unwrap();
//! graph.insert_edge(&2, &3, 2.0).unwrap();
//! graph.insert_edge(&1, &4, 4.0).unwrap();
//! graph.insert_edge(&3, &4, 1.0).unwrap();
//!
//! // Level-order traversal from station 1.
//! let order = graph.breadth_first(&1).unwrap();
//! assert_eq!(order, vec![1, 2, 4, 3]);
//!
//! // Shortest distances from station 1.
//! let distances = graph.shortest_paths(&1).unwrap();
//! assert_eq!(distances[&3], 3.0);
//! assert_eq!(distances[&4], 4.0);
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod config;
pub mod error;
pub mod graph;
mod persistence;

#[cfg(test)]
mod config_tests;

pub use config::{GraphConfig, DEFAULT_CAPACITY};
pub use error::{Error, Result};
pub use graph::{MatrixGraph, Vertex};
