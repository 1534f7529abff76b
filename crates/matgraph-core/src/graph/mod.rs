//! Adjacency-matrix graph module.
//!
//! Provides the [`MatrixGraph`] store plus its traversal (BFS/DFS) and
//! shortest-path (Dijkstra) algorithms. The graph is undirected, holds a
//! single positive weight per vertex pair, and is bounded by a capacity fixed
//! at construction.
//!
//! # Example
//!
//! ```rust
//! use matgraph_core::MatrixGraph;
//!
//! let mut graph = MatrixGraph::new();
//! graph.insert_vertex("riga".to_string()).unwrap();
//! graph.insert_vertex("tallinn".to_string()).unwrap();
//! graph.insert_edge(&"riga".to_string(), &"tallinn".to_string(), 310.0).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.weight(&"tallinn".to_string(), &"riga".to_string()).unwrap(), 310.0);
//! ```

mod shortest_path;
mod store;
mod traversal;
mod types;


pub use store::MatrixGraph;
pub use types::Vertex;
