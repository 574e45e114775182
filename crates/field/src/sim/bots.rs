//! Bot players for the headless simulation.

use crate::config::SimConfig;
use crate::error::FieldError;
use crate::field::GameField;
use crate::player::Player;
use rand::Rng;
use tracing::{debug, warn};

/// Bot names to use.
const BOT_NAMES: &[&str] = &[
    "Blob", "Hunter", "Hungry", "Nomnom", "Seeker", "Roamer", "Ghost", "Swift",
];

/// A bot player acting on the field.
#[derive(Debug)]
pub struct Bot {
    pub player: Player,
    /// Times this bot has been eliminated.
    pub eliminations: u32,
}

impl Bot {
    pub fn new(index: usize) -> Self {
        let name = format!("{}{}", BOT_NAMES[index % BOT_NAMES.len()], index);
        Self {
            player: Player::new(name),
            eliminations: 0,
        }
    }
}

/// What the bots did during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BotTick {
    pub spawned: usize,
    pub splits: usize,
    pub eliminated: usize,
    pub saturated: usize,
}

/// Bot manager.
#[derive(Debug, Default)]
pub struct BotManager {
    pub bots: Vec<Bot>,
}

impl BotManager {
    /// Create `count` bots.
    pub fn new(count: usize) -> Self {
        Self {
            bots: (0..count).map(Bot::new).collect(),
        }
    }

    /// Run one tick of bot actions: respawn, periodic split, random elimination.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        field: &GameField,
        tick: u64,
        config: &SimConfig,
        rng: &mut R,
    ) -> BotTick {
        let mut stats = BotTick::default();
        let split_due = config.split_every_ticks > 0 && tick % config.split_every_ticks == 0;

        for bot in &mut self.bots {
            if field.player_cell_count(&bot.player) == 0 {
                match field.spawn_player_cell(&bot.player) {
                    Ok(_) => stats.spawned += 1,
                    Err(FieldError::Saturated { .. }) => {
                        stats.saturated += 1;
                        continue;
                    }
                    Err(e) => {
                        debug!("Bot {} could not spawn: {}", bot.player, e);
                        continue;
                    }
                }
            }

            if split_due {
                match field.split_player_cells(&bot.player, config.split_children) {
                    Ok(count) => {
                        debug!("Bot {} now has {} cells", bot.player, count);
                        stats.splits += 1;
                    }
                    Err(e) => warn!("Bot {} could not split: {}", bot.player, e),
                }
            }

            if rng.random_bool(config.elimination_chance.clamp(0.0, 1.0)) {
                field.remove_player_cells(&bot.player);
                bot.eliminations += 1;
                stats.eliminated += 1;
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;

    #[test]
    fn test_bots_spawn_and_split() {
        let field = GameField::new(FieldConfig::default()).unwrap();
        let mut bots = BotManager::new(3);
        let config = SimConfig {
            split_every_ticks: 2,
            split_children: 2,
            elimination_chance: 0.0,
            ..Default::default()
        };
        let mut rng = rand::rng();

        let first = bots.update(&field, 1, &config, &mut rng);
        assert_eq!(first.spawned, 3);
        assert_eq!(first.splits, 0);
        assert_eq!(field.counts().cells, 3);

        let second = bots.update(&field, 2, &config, &mut rng);
        assert_eq!(second.spawned, 0);
        assert_eq!(second.splits, 3);
        assert_eq!(field.counts().cells, 6);
    }

    #[test]
    fn test_eliminated_bots_respawn() {
        let field = GameField::new(FieldConfig::default()).unwrap();
        let mut bots = BotManager::new(2);
        let mut config = SimConfig {
            split_every_ticks: 0,
            elimination_chance: 1.0,
            ..Default::default()
        };
        let mut rng = rand::rng();

        let tick = bots.update(&field, 1, &config, &mut rng);
        assert_eq!(tick.eliminated, 2);
        assert_eq!(field.counts().cells, 0);

        config.elimination_chance = 0.0;
        let tick = bots.update(&field, 2, &config, &mut rng);
        assert_eq!(tick.spawned, 2);
        assert!(bots.bots.iter().all(|b| b.eliminations == 1));
    }

    #[test]
    fn test_failed_split_is_not_counted() {
        let field = GameField::new(FieldConfig::default()).unwrap();
        let mut bots = BotManager::new(1);
        let config = SimConfig {
            split_every_ticks: 1,
            split_children: 0,
            elimination_chance: 0.0,
            ..Default::default()
        };

        let tick = bots.update(&field, 1, &config, &mut rand::rng());
        assert_eq!(tick.spawned, 1);
        assert_eq!(tick.splits, 0);
        assert_eq!(field.counts().cells, 1);
    }

    #[test]
    fn test_bot_names_are_distinct() {
        let bots = BotManager::new(12);
        for (i, a) in bots.bots.iter().enumerate() {
            for b in &bots.bots[i + 1..] {
                assert_ne!(a.player, b.player);
            }
        }
    }
}
