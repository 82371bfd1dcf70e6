// engine.rs - Generation stepping over a sparse live set
//
// Counts are taken from the pre-step live set only. Nothing is inserted or
// removed while counting, so iteration order cannot change the outcome.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{grid::LiveSet, Cell};

/// Live-neighbor counts for dead cells touching at least one live cell.
pub type NeighborCounts = HashMap<Cell, u8>;

/// One generation's delta. `died` and `born` never overlap: a cell has to
/// be alive to die and dead to be born.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub died: HashSet<Cell>,
    pub born: HashSet<Cell>,
}

impl StepResult {
    /// Nothing died and nothing was born.
    pub fn is_still(&self) -> bool {
        self.died.is_empty() && self.born.is_empty()
    }
}

/// Applies the B3/S23 rule to a live set.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerationEngine;

impl GenerationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the next generation of `live` without touching it.
    pub fn step(&self, live: &LiveSet) -> StepResult {
        let mut spawn_counts = NeighborCounts::new();
        let mut died = HashSet::new();

        for &cell in live {
            let mut live_neighbors = 0u8;

            // Neighbors past the origin are skipped, so edge cells are undercounted
            for neighbor in cell.neighbors() {
                if live.contains(&neighbor) {
                    live_neighbors += 1;
                } else {
                    *spawn_counts.entry(neighbor).or_insert(0) += 1;
                }
            }

            if !survives(live_neighbors) {
                died.insert(cell);
            }
        }

        let born: HashSet<Cell> = spawn_counts
            .into_iter()
            .filter(|&(_, count)| is_born(count))
            .map(|(cell, _)| cell)
            .collect();

        debug!(
            population = live.len(),
            died = died.len(),
            born = born.len(),
            "generation computed"
        );

        StepResult { died, born }
    }
}

fn survives(live_neighbors: u8) -> bool {
    matches!(live_neighbors, 2 | 3)
}

fn is_born(live_neighbors: u8) -> bool {
    live_neighbors == 3
}
