//! Binary persistence for [`MatrixGraph`].
//!
//! # On-Disk Format
//!
//! A single bincode stream (little-endian, length-prefixed sequences), in
//! this order:
//! - `u32`: capacity
//! - `u32`: current size
//! - vertex list: `size` vertex values in slot order
//! - weight matrix: `capacity x capacity` `f64` values, row-major
//!
//! Saving is a full rewrite every call, never a diff. Loading replaces the
//! store's entire contents; the decoded snapshot is validated before anything
//! is swapped in, so a failed load leaves the prior state untouched.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{Error, Result};
use crate::graph::{MatrixGraph, Vertex};

impl<V: Vertex> MatrixGraph<V> {
    /// Saves the graph to `path`, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` on any write failure. The in-memory store is
    /// never modified by a save.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let capacity = u32::try_from(self.capacity).map_err(|_| {
            Error::Config(format!(
                "capacity {} exceeds the persistable u32 range",
                self.capacity
            ))
        })?;
        // size <= capacity, so this cannot truncate once capacity fits.
        let size = u32::try_from(self.vertices.len())
            .map_err(|_| Error::Corrupt("vertex count exceeds capacity".to_string()))?;

        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, &(capacity, size, &self.vertices, &self.weights))
            .map_err(std::io::Error::other)?;

        tracing::debug!(path = %path.display(), vertices = self.vertices.len(), "graph saved");
        Ok(())
    }

    /// Loads a graph from `path`, replacing this store's entire contents
    /// (capacity included). No merging.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` on read failure and `Error::Corrupt` if the
    /// decoded data violates a structural invariant (declared size mismatch,
    /// wrong matrix dimensions, asymmetry, nonzero diagonal, invalid weight,
    /// data outside the live region, duplicate vertex). On failure the store
    /// keeps its previous contents.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let (capacity, size, vertices, weights): (u32, u32, Vec<V>, Vec<Vec<f64>>) =
            bincode::deserialize_from(reader).map_err(|err| match *err {
                bincode::ErrorKind::Io(io) => Error::Io(io),
                other => Error::Corrupt(other.to_string()),
            })?;
        let capacity = capacity as usize;
        let size = size as usize;

        let slots = match validate_snapshot(capacity, size, &vertices, &weights) {
            Ok(slots) => slots,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "rejecting corrupt graph file");
                return Err(err);
            }
        };

        self.capacity = capacity;
        self.vertices = vertices;
        self.weights = weights;
        self.slots = slots;

        tracing::info!(path = %path.display(), vertices = size, "graph loaded");
        Ok(())
    }

    /// Reads a graph from `path` into a fresh store.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`MatrixGraph::load`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut graph = Self::with_capacity(0);
        graph.load(path)?;
        Ok(graph)
    }
}

/// Checks the structural invariants of a decoded snapshot and builds the
/// value-to-slot index. Nothing is swapped into the store until this passes.
fn validate_snapshot<V: Vertex>(
    capacity: usize,
    size: usize,
    vertices: &[V],
    weights: &[Vec<f64>],
) -> Result<HashMap<V, usize>> {
    if vertices.len() != size {
        return Err(Error::Corrupt(format!(
            "vertex list length {} does not match declared size {size}",
            vertices.len()
        )));
    }
    if size > capacity {
        return Err(Error::Corrupt(format!(
            "declared size {size} exceeds capacity {capacity}"
        )));
    }
    if weights.len() != capacity || weights.iter().any(|row| row.len() != capacity) {
        return Err(Error::Corrupt(format!(
            "weight matrix is not {capacity}x{capacity}"
        )));
    }

    for i in 0..capacity {
        for j in 0..=i {
            let w = weights[i][j];
            if weights[j][i] != w {
                return Err(Error::Corrupt(format!(
                    "matrix is asymmetric at slots {i} and {j}"
                )));
            }
            if w == 0.0 {
                continue;
            }
            if i == j {
                return Err(Error::Corrupt(format!("nonzero diagonal at slot {i}")));
            }
            if i >= size || j >= size {
                return Err(Error::Corrupt(format!(
                    "nonzero weight outside the live region at slots {i} and {j}"
                )));
            }
            if w < 0.0 || !w.is_finite() {
                return Err(Error::Corrupt(format!(
                    "invalid edge weight {w} between slots {i} and {j}"
                )));
            }
        }
    }

    let mut slots = HashMap::with_capacity(size);
    for (slot, vertex) in vertices.iter().enumerate() {
        if slots.insert(vertex.clone(), slot).is_some() {
            return Err(Error::Corrupt(format!("duplicate vertex {vertex:?}")));
        }
    }
    Ok(slots)
}
