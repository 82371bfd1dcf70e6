// config.rs - Simulation options

use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_INTERVAL_MS: u64 = 250;
pub const DEFAULT_GRID_UNIT: u32 = 20;
pub const DEFAULT_CANVAS_SIZE: u32 = 1280;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Time between generations.
    pub interval_ms: u64,
    /// Side of one cell on the drawing surface, in pixels.
    pub grid_unit: u32,
    /// Side of the (square) drawing surface, in pixels.
    pub canvas_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            grid_unit: DEFAULT_GRID_UNIT,
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(Error::InvalidConfig("interval_ms must be positive"));
        }
        if self.grid_unit == 0 {
            return Err(Error::InvalidConfig("grid_unit must be positive"));
        }
        if self.canvas_size < self.grid_unit {
            return Err(Error::InvalidConfig("canvas_size is smaller than one grid unit"));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Whole cells visible along one side of the surface.
    pub fn cells_across(&self) -> u32 {
        self.canvas_size / self.grid_unit.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_64_cell_board() {
        let config = Config::default();
        assert_eq!(config.interval(), Duration::from_millis(250));
        assert_eq!(config.cells_across(), 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_values_are_rejected() {
        let config = Config { interval_ms: 0, ..Config::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = Config { grid_unit: 0, ..Config::default() };
        assert!(config.validate().is_err());

        let config = Config { canvas_size: 10, ..Config::default() };
        assert!(config.validate().is_err());
    }
}
