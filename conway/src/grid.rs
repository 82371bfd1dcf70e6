// grid.rs - Sparse live-cell storage for Conway's Game of Life

use std::collections::HashSet;

use tracing::trace;

use crate::{
    engine::StepResult,
    error::{Error, Result},
    Cell,
};

/// All currently alive cells.
pub type LiveSet = HashSet<Cell>;

/// The canonical set of live cells. Grown by placement, then updated once
/// per generation from the engine's delta.
#[derive(Debug, Default, Clone)]
pub struct GridState {
    live: LiveSet,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.live.contains(&cell)
    }

    /// Bring `cell` to life. Returns `false` if it was already alive.
    pub fn mark_alive(&mut self, cell: Cell) -> bool {
        let inserted = self.live.insert(cell);
        if inserted {
            trace!(%cell, "cell placed");
        }
        inserted
    }

    /// Remove `died`, then insert `born`.
    ///
    /// Every dead cell must currently be alive and no born cell may be.
    /// Both are checked before anything is touched, so a rejected result
    /// leaves the grid as it was.
    pub fn apply(&mut self, step: &StepResult) -> Result<()> {
        if let Some(&cell) = step.died.iter().find(|cell| !self.live.contains(cell)) {
            return Err(Error::PreconditionViolation {
                cell,
                reason: "died cell is not alive",
            });
        }
        if let Some(&cell) = step.born.iter().find(|cell| self.live.contains(cell)) {
            return Err(Error::PreconditionViolation {
                cell,
                reason: "born cell is already alive",
            });
        }

        for cell in &step.died {
            self.live.remove(cell);
        }
        self.live.extend(step.born.iter().copied());
        Ok(())
    }

    pub fn live_cells(&self) -> &LiveSet {
        &self.live
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Smallest box holding every live cell, as (top-left, bottom-right).
    pub fn bounds(&self) -> Option<(Cell, Cell)> {
        let mut cells = self.live.iter();
        let first = *cells.next()?;
        let (min, max) = cells.fold((first, first), |(min, max), c| {
            (
                Cell::new(min.x.min(c.x), min.y.min(c.y)),
                Cell::new(max.x.max(c.x), max.y.max(c.y)),
            )
        });
        Some((min, max))
    }
}

impl FromIterator<Cell> for GridState {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self { live: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(u32, u32)]) -> HashSet<Cell> {
        coords.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn starts_empty() {
        let grid = GridState::new();
        assert!(grid.is_empty());
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.bounds(), None);
        assert!(!grid.is_alive(Cell::new(0, 0)));
    }

    #[test]
    fn mark_alive_is_idempotent() {
        let mut grid = GridState::new();
        assert!(grid.mark_alive(Cell::new(3, 4)));
        assert!(!grid.mark_alive(Cell::new(3, 4)));
        assert_eq!(grid.population(), 1);
        assert!(grid.is_alive(Cell::new(3, 4)));
        assert!(!grid.is_alive(Cell::new(4, 3)));
    }

    #[test]
    fn apply_removes_died_and_adds_born() {
        let mut grid: GridState = cells(&[(2, 1), (2, 2), (2, 3)]).into_iter().collect();
        let step = StepResult {
            died: cells(&[(2, 1), (2, 3)]),
            born: cells(&[(1, 2), (3, 2)]),
        };

        grid.apply(&step).unwrap();

        assert_eq!(grid.live_cells(), &cells(&[(1, 2), (2, 2), (3, 2)]));
    }

    #[test]
    fn apply_rejects_dead_cell_in_died() {
        let mut grid: GridState = cells(&[(1, 1)]).into_iter().collect();
        let step = StepResult {
            died: cells(&[(1, 1), (9, 9)]),
            born: cells(&[(0, 0)]),
        };

        let err = grid.apply(&step).unwrap_err();

        assert!(matches!(
            err,
            Error::PreconditionViolation { cell, .. } if cell == Cell::new(9, 9)
        ));
        assert_eq!(grid.live_cells(), &cells(&[(1, 1)]));
    }

    #[test]
    fn apply_rejects_live_cell_in_born() {
        let mut grid: GridState = cells(&[(1, 1), (2, 2)]).into_iter().collect();
        let step = StepResult {
            died: cells(&[(1, 1)]),
            born: cells(&[(2, 2)]),
        };

        assert!(grid.apply(&step).is_err());
        assert_eq!(grid.population(), 2);
        assert!(grid.is_alive(Cell::new(1, 1)));
    }

    #[test]
    fn bounds_cover_all_live_cells() {
        let grid: GridState = cells(&[(4, 9), (7, 2), (5, 5)]).into_iter().collect();
        assert_eq!(grid.bounds(), Some((Cell::new(4, 2), Cell::new(7, 9))));
    }
}
