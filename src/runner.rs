//! Drive loop: draw, then {sleep, advance, draw} a fixed number of times.

use std::time::Duration;

use anyhow::Result;

use crate::config::Config;
use crate::core::Simulation;
use crate::term::Draw;

/// Run `config.generations` steps, drawing after each one.
///
/// `sleep` is called with `config.interval` before every step. The binary
/// passes `std::thread::sleep`; tests pass a no-op.
pub fn run<D: Draw>(
    sim: &mut Simulation,
    sink: &mut D,
    config: &Config,
    mut sleep: impl FnMut(Duration),
) -> Result<()> {
    sink.draw(sim.grid())?;

    for _ in 0..config.generations {
        sleep(config.interval);
        sim.advance();
        tracing::debug!(
            generation = sim.generation(),
            population = sim.grid().population(),
            "step"
        );
        sink.draw(sim.grid())?;
    }

    tracing::info!(
        generations = sim.generation(),
        population = sim.grid().population(),
        "simulation finished"
    );
    Ok(())
}
