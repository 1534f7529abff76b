//! Single-source shortest paths (Dijkstra) over the matrix store.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::{Error, Result};

use super::store::MatrixGraph;
use super::types::Vertex;

/// Frontier entry ordered as a min-heap on distance.
///
/// Ties break on slot so extraction order is deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FrontierEntry {
    distance: f64,
    slot: usize,
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the smallest distance.
        // Distances are finite (positive weights only), so total_cmp agrees
        // with the numeric order.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Vertex> MatrixGraph<V> {
    /// Computes shortest distances from `start` to every reachable vertex.
    ///
    /// Unreachable vertices are omitted from the result entirely, never
    /// reported with an infinite sentinel. Relaxation re-inserts a vertex
    /// into the frontier instead of decreasing its key; stale duplicate
    /// entries are discarded by the visited check at extraction (lazy
    /// deletion). Each slot is finalized at most once and its recorded
    /// distance never decreases afterwards.
    ///
    /// Correctness relies on every edge weight being strictly positive,
    /// which `insert_edge` enforces. O(n^2) against the dense matrix.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyGraph` if the graph has no vertices, or
    /// `Error::VertexNotFound` if `start` is absent.
    pub fn shortest_paths(&self, start: &V) -> Result<HashMap<V, f64>> {
        if self.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let start_slot = self.slot_of(start)?;
        let size = self.vertex_count();

        let mut distances = vec![f64::INFINITY; size];
        let mut visited = vec![false; size];
        distances[start_slot] = 0.0;

        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            distance: 0.0,
            slot: start_slot,
        });

        while let Some(FrontierEntry { distance, slot }) = frontier.pop() {
            if visited[slot] {
                // Stale entry left behind by a later relaxation.
                continue;
            }
            visited[slot] = true;

            for next in 0..size {
                let weight = self.weights[slot][next];
                if weight == 0.0 || visited[next] {
                    continue;
                }
                let candidate = distance + weight;
                if candidate < distances[next] {
                    distances[next] = candidate;
                    frontier.push(FrontierEntry {
                        distance: candidate,
                        slot: next,
                    });
                }
            }
        }

        Ok(self
            .vertices
            .iter()
            .enumerate()
            .filter(|&(slot, _)| distances[slot].is_finite())
            .map(|(slot, vertex)| (vertex.clone(), distances[slot]))
            .collect())
    }
}
