//! Dense adjacency-matrix store for undirected weighted graphs.
//!
//! The matrix is allocated at full `capacity x capacity` size up front and
//! never resized, so memory is bounded by the capacity regardless of how many
//! edges exist. Sparse graphs pay for that with O(capacity^2) space; edge
//! lookup and update stay O(1) in return.

use std::collections::HashMap;

use crate::config::{GraphConfig, DEFAULT_CAPACITY};
use crate::error::{Error, Result};

use super::types::Vertex;

/// Undirected weighted graph backed by a symmetric adjacency matrix.
///
/// Vertices are caller-supplied values compared by equality; the integer slot
/// a vertex occupies inside the matrix is internal and unstable across
/// deletions. A cell value of `0.0` means "no edge"; edge weights are always
/// strictly positive.
///
/// All operations are synchronous and take `&self`/`&mut self` without any
/// internal locking. Callers sharing a graph across threads must serialize
/// access externally.
#[derive(Debug, Clone)]
pub struct MatrixGraph<V: Vertex> {
    /// Vertices in insertion order; index is the vertex's current slot.
    pub(crate) vertices: Vec<V>,
    /// Symmetric `capacity x capacity` weight matrix, `0.0` = no edge.
    pub(crate) weights: Vec<Vec<f64>>,
    /// Value-to-slot index, kept consistent on every insert, delete and load.
    pub(crate) slots: HashMap<V, usize>,
    /// Maximum number of vertices; fixed at construction.
    pub(crate) capacity: usize,
}

impl<V: Vertex> Default for MatrixGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> MatrixGraph<V> {
    /// Creates an empty graph with the default capacity of 1000 vertices.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty graph bounded by the given capacity.
    ///
    /// The full weight matrix is allocated here; capacity cannot change later.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::new(),
            weights: vec![vec![0.0; capacity]; capacity],
            slots: HashMap::new(),
            capacity,
        }
    }

    /// Creates an empty graph from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration is invalid.
    pub fn with_config(config: &GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_capacity(config.capacity))
    }

    /// Resolves a vertex value to its current slot.
    pub(crate) fn slot_of(&self, vertex: &V) -> Result<usize> {
        self.slots
            .get(vertex)
            .copied()
            .ok_or_else(|| Error::VertexNotFound(format!("{vertex:?}")))
    }

    // ── Vertex CRUD ────────────────────────────────────────────────────

    /// Inserts a vertex, assigning it the next free slot.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateVertex` if the value is already present, or
    /// `Error::CapacityExceeded` if the graph is full. The store is left
    /// unchanged on failure.
    pub fn insert_vertex(&mut self, vertex: V) -> Result<()> {
        if self.slots.contains_key(&vertex) {
            return Err(Error::DuplicateVertex(format!("{vertex:?}")));
        }
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        // The new row/column is already zero: the matrix is pre-allocated and
        // deletion re-zeroes everything it vacates.
        self.slots.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        Ok(())
    }

    /// Deletes a vertex and every edge incident to it.
    ///
    /// Vertices after the deleted slot shift down by one; the matrix is
    /// physically re-packed so the weight between any two remaining vertices
    /// lands in the cell matching their post-deletion slots.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if the vertex is absent.
    pub fn delete_vertex(&mut self, vertex: &V) -> Result<()> {
        let slot = self.slot_of(vertex)?;
        let size = self.vertices.len();

        self.slots.remove(vertex);
        self.vertices.remove(slot);

        // Re-pack rows: shift everything after the vacated row up by one,
        // then zero the old contents now sitting in the last live row.
        for row in slot..size - 1 {
            self.weights.swap(row, row + 1);
        }
        self.weights[size - 1].fill(0.0);

        // Re-pack columns the same way within each remaining live row.
        for row in self.weights.iter_mut().take(size - 1) {
            row.copy_within(slot + 1..size, slot);
            row[size - 1] = 0.0;
        }

        // Slots after the removed one all moved down by one.
        for (new_slot, moved) in self.vertices.iter().enumerate().skip(slot) {
            self.slots.insert(moved.clone(), new_slot);
        }
        Ok(())
    }

    /// Returns true if the vertex value is present.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.slots.contains_key(vertex)
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if the graph holds `capacity` vertices.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.vertices.len() >= self.capacity
    }

    /// Returns the current number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the maximum number of vertices the graph can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the vertices in slot order (insertion order, compacted after
    /// deletions).
    #[must_use]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    // ── Edge CRUD ──────────────────────────────────────────────────────

    /// Inserts or overwrites the undirected edge between `u` and `v`.
    ///
    /// Insertion is an idempotent upsert: an existing weight is replaced
    /// without error. Both matrix cells are written to keep the matrix
    /// symmetric.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either endpoint is absent,
    /// `Error::SelfLoop` if both endpoints are the same vertex, or
    /// `Error::InvalidWeight` unless `weight` is strictly positive and finite.
    pub fn insert_edge(&mut self, u: &V, v: &V, weight: f64) -> Result<()> {
        let a = self.slot_of(u)?;
        let b = self.slot_of(v)?;
        if a == b {
            return Err(Error::SelfLoop(format!("{u:?}")));
        }
        if weight <= 0.0 || !weight.is_finite() {
            return Err(Error::InvalidWeight(weight));
        }
        self.weights[a][b] = weight;
        self.weights[b][a] = weight;
        Ok(())
    }

    /// Deletes the edge between `u` and `v`, if any.
    ///
    /// Deleting a non-existent edge is not an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either endpoint is absent.
    pub fn delete_edge(&mut self, u: &V, v: &V) -> Result<()> {
        let a = self.slot_of(u)?;
        let b = self.slot_of(v)?;
        self.weights[a][b] = 0.0;
        self.weights[b][a] = 0.0;
        Ok(())
    }

    /// Returns the weight of the edge between `u` and `v`, or `0.0` when no
    /// edge exists.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either endpoint is absent.
    pub fn weight(&self, u: &V, v: &V) -> Result<f64> {
        let a = self.slot_of(u)?;
        let b = self.slot_of(v)?;
        Ok(self.weights[a][b])
    }

    /// Returns all vertices adjacent to `vertex`, in slot order.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if the vertex is absent.
    pub fn neighbors(&self, vertex: &V) -> Result<Vec<&V>> {
        let slot = self.slot_of(vertex)?;
        Ok((0..self.vertices.len())
            .filter(|&other| self.weights[slot][other] != 0.0)
            .map(|other| &self.vertices[other])
            .collect())
    }

    /// Returns the total number of edges.
    ///
    /// Counts nonzero cells in the live region and halves the total: the
    /// matrix is symmetric and the diagonal is always zero because self-loops
    /// are rejected at insertion. O(n^2).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let size = self.vertices.len();
        let nonzero: usize = self
            .weights
            .iter()
            .take(size)
            .map(|row| row.iter().take(size).filter(|&&w| w != 0.0).count())
            .sum();
        nonzero / 2
    }
}
