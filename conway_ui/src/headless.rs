// headless.rs - Run generations from a tokio interval, no window

use std::ops::ControlFlow;

use conway::{Cell, GridState, Simulation};
use tracing::info;

/// Step until `generations` have run or nothing is left alive.
pub fn run(sim: &mut Simulation, generations: Option<u64>) -> anyhow::Result<u64> {
    // One thread: each step finishes before the next tick is awaited
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let steps = runtime.block_on(sim.run(generations, |generation, result| {
        info!(generation, died = result.died.len(), born = result.born.len(), "step");
        ControlFlow::Continue(())
    }))?;

    info!(
        steps,
        generation = sim.generation(),
        population = sim.grid().population(),
        "run finished"
    );
    Ok(steps)
}

/// Live cells inside the bounding box as rows of `#` and `.`.
pub fn render_text(grid: &GridState) -> String {
    let Some((min, max)) = grid.bounds() else {
        return String::new();
    };

    let mut out = String::new();
    for y in min.y..=max.y {
        for x in min.x..=max.x {
            out.push(if grid.is_alive(Cell::new(x, y)) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}
