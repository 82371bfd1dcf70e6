// simulation.rs - Owns the grid, the engine and the trigger for one run

use std::{ops::ControlFlow, time::Instant};

use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::{
    config::Config,
    engine::{GenerationEngine, StepResult},
    error::Result,
    patterns::Pattern,
    scheduler::Scheduler,
    Cell, GridState,
};

#[derive(Debug, Clone)]
pub struct Simulation {
    grid: GridState,
    engine: GenerationEngine,
    scheduler: Scheduler,
    generation: u64,
}

impl Simulation {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid: GridState::new(),
            engine: GenerationEngine::new(),
            scheduler: Scheduler::new(config.interval()),
            generation: 0,
        })
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// User placement. Returns `true` when the cell was not already alive.
    pub fn place(&mut self, cell: Cell) -> bool {
        self.grid.mark_alive(cell)
    }

    pub fn place_pattern(&mut self, pattern: &Pattern, origin: Cell) -> usize {
        let placed = pattern.place(&mut self.grid, origin);
        debug!(pattern = pattern.name, %origin, placed, "pattern placed");
        placed
    }

    /// Run one generation and apply it. The returned delta is what the
    /// renderer has to clear (`died`) and fill (`born`).
    pub fn advance(&mut self) -> Result<StepResult> {
        let result = self.engine.step(self.grid.live_cells());
        self.grid.apply(&result)?;
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "generation applied"
        );
        Ok(result)
    }

    pub fn start(&mut self, now: Instant) -> bool {
        self.scheduler.start(now)
    }

    pub fn stop(&mut self) -> bool {
        self.scheduler.stop()
    }

    /// Advance if the trigger says a step is due.
    pub fn tick(&mut self, now: Instant) -> Result<Option<StepResult>> {
        if !self.scheduler.poll(now) {
            return Ok(None);
        }
        self.advance().map(Some)
    }

    /// Drive the simulation from a tokio interval until `limit` steps have
    /// run, the population dies out, or `on_step` breaks. Returns the
    /// number of steps taken.
    ///
    /// Each step completes before the next tick is awaited.
    pub async fn run<F>(&mut self, limit: Option<u64>, mut on_step: F) -> Result<u64>
    where
        F: FnMut(u64, &StepResult) -> ControlFlow<()>,
    {
        let mut interval = tokio::time::interval(self.scheduler.interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        interval.tick().await;

        self.start(Instant::now());
        let mut steps = 0;

        while self.scheduler.is_running() {
            if limit.is_some_and(|limit| steps >= limit) {
                break;
            }
            if self.grid.is_empty() {
                info!(generation = self.generation, "population died out");
                break;
            }

            interval.tick().await;
            let result = match self.advance() {
                Ok(result) => result,
                Err(e) => {
                    self.stop();
                    return Err(e);
                }
            };
            steps += 1;

            if on_step(self.generation, &result).is_break() {
                break;
            }
        }

        self.stop();
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, time::Duration};

    use super::*;

    fn fast_config() -> Config {
        Config { interval_ms: 1, ..Config::default() }
    }

    fn blinker(sim: &mut Simulation) {
        for cell in [Cell::new(2, 1), Cell::new(2, 2), Cell::new(2, 3)] {
            assert!(sim.place(cell));
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let config = Config { interval_ms: 0, ..Config::default() };
        assert!(Simulation::new(&config).is_err());
    }

    #[test]
    fn advance_applies_delta_and_counts_generations() {
        let mut sim = Simulation::new(&Config::default()).unwrap();
        blinker(&mut sim);

        let result = sim.advance().unwrap();

        assert_eq!(sim.generation(), 1);
        assert!(result.born.iter().all(|&c| sim.grid().is_alive(c)));
        assert!(result.died.iter().all(|&c| !sim.grid().is_alive(c)));
        assert_eq!(sim.grid().population(), 3);
    }

    #[test]
    fn tick_only_steps_when_due() {
        let mut sim = Simulation::new(&Config::default()).unwrap();
        blinker(&mut sim);
        let t0 = Instant::now();

        assert!(sim.tick(t0 + Duration::from_secs(1)).unwrap().is_none());

        sim.start(t0);
        assert!(sim.tick(t0 + Duration::from_millis(100)).unwrap().is_none());
        assert!(sim.tick(t0 + Duration::from_millis(250)).unwrap().is_some());
        assert_eq!(sim.generation(), 1);

        sim.stop();
        assert!(sim.tick(t0 + Duration::from_secs(5)).unwrap().is_none());
        assert_eq!(sim.generation(), 1);
    }

    #[tokio::test]
    async fn run_stops_at_limit() {
        let mut sim = Simulation::new(&fast_config()).unwrap();
        blinker(&mut sim);
        let start: HashSet<Cell> = sim.grid().live_cells().clone();

        let mut seen = Vec::new();
        let steps = sim
            .run(Some(4), |generation, result| {
                seen.push((generation, result.died.len(), result.born.len()));
                ControlFlow::Continue(())
            })
            .await
            .unwrap();

        assert_eq!(steps, 4);
        assert_eq!(seen, vec![(1, 2, 2), (2, 2, 2), (3, 2, 2), (4, 2, 2)]);
        assert_eq!(sim.grid().live_cells(), &start);
        assert!(!sim.scheduler().is_running());
    }

    #[tokio::test]
    async fn run_ends_on_extinction() {
        let mut sim = Simulation::new(&fast_config()).unwrap();
        sim.place(Cell::new(5, 5));

        let steps = sim.run(None, |_, _| ControlFlow::Continue(())).await.unwrap();

        assert_eq!(steps, 1);
        assert!(sim.grid().is_empty());
    }

    #[tokio::test]
    async fn run_stops_when_callback_breaks() {
        let mut sim = Simulation::new(&fast_config()).unwrap();
        sim.place_pattern(Pattern::find("Glider").unwrap(), Cell::new(1, 1));

        let steps = sim
            .run(None, |generation, _| {
                if generation == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .await
            .unwrap();

        assert_eq!(steps, 3);
        assert_eq!(sim.generation(), 3);
    }
}
