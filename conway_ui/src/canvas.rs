// canvas.rs - Pixel-side mirror of the grid: which squares are filled,
// where they sit, and which cell a pointer lands on.

use std::collections::HashSet;

use conway::{Cell, StepResult};
use egui::{Pos2, Rect, Vec2};

/// Squares drawn so far. Updated only from placements and step deltas,
/// never by re-reading the grid.
#[derive(Debug, Clone)]
pub struct Canvas {
    filled: HashSet<Cell>,
    unit: f32,
}

impl Canvas {
    pub fn new(grid_unit: u32) -> Self {
        Self { filled: HashSet::new(), unit: grid_unit as f32 }
    }

    pub fn unit(&self) -> f32 {
        self.unit
    }

    pub fn fill(&mut self, cell: Cell) {
        self.filled.insert(cell);
    }

    pub fn clear(&mut self, cell: Cell) {
        self.filled.remove(&cell);
    }

    /// Clear the squares that died, then fill the ones that were born.
    pub fn apply(&mut self, step: &StepResult) {
        for &cell in &step.died {
            self.clear(cell);
        }
        for &cell in &step.born {
            self.fill(cell);
        }
    }

    pub fn filled(&self) -> impl Iterator<Item = Cell> + '_ {
        self.filled.iter().copied()
    }

    /// The drawn square for `cell`, inset from its grid lines.
    pub fn square(&self, origin: Pos2, cell: Cell) -> Rect {
        let min = origin + Vec2::new(cell.x as f32 * self.unit + 2.5, cell.y as f32 * self.unit + 2.5);
        Rect::from_min_size(min, Vec2::splat((self.unit - 4.0).max(1.0)))
    }

    /// The cell under `pointer`, for a surface whose top-left is `origin`.
    pub fn cell_at(&self, origin: Pos2, pointer: Pos2) -> conway::Result<Cell> {
        let offset = pointer - origin;
        cell_at(offset.x, offset.y, self.unit)
    }
}

/// Integer-divide surface coordinates by the grid unit. Points above or
/// left of the origin have no cell.
pub fn cell_at(x: f32, y: f32, unit: f32) -> conway::Result<Cell> {
    let col = (x / unit).floor() as i64;
    let row = (y / unit).floor() as i64;
    Cell::try_new(col, row)
}
