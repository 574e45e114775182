//! Headless simulation driver.
//!
//! Plays the role of the outer game layer: a fixed-rate loop keeps food and
//! bushes topped up and lets a few bot players spawn, split and get eliminated.

mod bots;

pub use bots::{Bot, BotManager, BotTick};

use crate::config::SimConfig;
use crate::error::FieldError;
use crate::field::GameField;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Totals gathered over a simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimReport {
    pub ticks: u64,
    pub food_spawned: usize,
    pub bushes_spawned: usize,
    pub cells_spawned: usize,
    pub splits: usize,
    pub eliminations: usize,
    pub saturations: usize,
}

/// Spawn with `spawn` until `current` reaches `target`. Stops early on a
/// saturated field. Returns (spawned, saturated).
fn top_up<F>(current: usize, target: usize, mut spawn: F) -> (usize, bool)
where
    F: FnMut() -> Result<(), FieldError>,
{
    let mut spawned = 0;
    for _ in current..target {
        match spawn() {
            Ok(()) => spawned += 1,
            Err(FieldError::Saturated { attempts }) => {
                warn!("Stopped topping up after {} spawns: no free spot in {} attempts", spawned, attempts);
                return (spawned, true);
            }
            Err(e) => {
                warn!("Spawn failed: {}", e);
                return (spawned, false);
            }
        }
    }
    (spawned, false)
}

/// Run one simulation tick.
pub fn tick(field: &GameField, bots: &mut BotManager, tick: u64, config: &SimConfig, report: &mut SimReport) {
    let counts = field.counts();

    let (food, food_saturated) = top_up(counts.food, config.food_target, || field.spawn_food().map(drop));
    let (bushes, bush_saturated) = top_up(counts.bushes, config.bush_target, || field.spawn_bush().map(drop));
    report.food_spawned += food;
    report.bushes_spawned += bushes;
    report.saturations += usize::from(food_saturated) + usize::from(bush_saturated);

    let stats = bots.update(field, tick, config, &mut rand::rng());
    report.cells_spawned += stats.spawned;
    report.splits += stats.splits;
    report.eliminations += stats.eliminated;
    report.saturations += stats.saturated;

    report.ticks = tick;
}

/// Run the simulation loop until `config.ticks` ticks have run, or until
/// Ctrl-C when `config.ticks` is 0.
pub async fn run(field: Arc<GameField>, config: SimConfig) -> anyhow::Result<SimReport> {
    config.validate()?;
    let interval = Duration::from_millis(config.tick_interval_ms.max(1));
    let mut ticker = interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut bots = BotManager::new(config.bots);
    let mut report = SimReport::default();

    info!(
        "Simulation starting: {} bots, food target {}, bush target {}",
        config.bots, config.food_target, config.bush_target
    );

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut tick_count = 0u64;
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            result = &mut shutdown => {
                result?;
                info!("Shutdown requested");
                break;
            }
        }

        tick_count += 1;
        let tick_start = std::time::Instant::now();
        tick(&field, &mut bots, tick_count, &config, &mut report);
        debug!("Tick {} took {:?}", tick_count, tick_start.elapsed());

        if config.stats_every_ticks > 0 && tick_count % config.stats_every_ticks == 0 {
            let counts = field.counts();
            info!(
                "Tick {}: {} cells, {} food, {} bushes ({} total)",
                tick_count, counts.cells, counts.food, counts.bushes, counts.total
            );
        }

        if config.ticks > 0 && tick_count >= config.ticks {
            break;
        }
    }

    info!(
        "Simulation finished after {} ticks: {} splits, {} eliminations",
        report.ticks, report.splits, report.eliminations
    );
    Ok(report)
}
