use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game::{Game, GameConfig};
use crate::player::Bot;
use crate::strategy::Strategy;

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotSpec {
    pub name: String,
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub bet: i64,
}

impl BotSpec {
    pub fn new(name: impl Into<String>, strategy: Strategy, bet: i64) -> Self {
        Self {
            name: name.into(),
            strategy,
            bet,
        }
    }

    pub fn build(&self) -> Result<Bot, GameError> {
        Bot::with_strategy(self.name.clone(), self.strategy, self.bet)
    }
}

/// Game parameters plus the ordered roster, loadable from JSON.
///
/// ```
/// use cardsim_engine::config::TableConfig;
///
/// let table = TableConfig::from_json_str(
///     r#"{ "game": { "max_steps": 5, "seed": 3 },
///          "bots": [ { "name": "A", "strategy": "balanced", "bet": 50 },
///                    { "name": "B" } ] }"#,
/// ).unwrap();
/// let game = table.build().unwrap();
/// assert_eq!(game.target_score(), 21);
/// assert_eq!(game.bots().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub bots: Vec<BotSpec>,
}

impl TableConfig {
    pub fn from_json_str(s: &str) -> Result<Self, GameError> {
        let cfg: TableConfig =
            serde_json::from_str(s).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        cfg.game.validate()?;
        Ok(cfg)
    }

    pub fn to_json_string(&self) -> Result<String, GameError> {
        serde_json::to_string_pretty(self).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }

    /// Three-bot demo table: conservative, aggressive and mixed players.
    pub fn demo() -> Self {
        Self {
            game: GameConfig::default(),
            bots: vec![
                BotSpec::new("Bot-Conservative", Strategy::Conservative, 100),
                BotSpec::new("Bot-Aggressive", Strategy::Aggressive, 200),
                BotSpec::new("Bot-Mixed", Strategy::Mixed, 100),
            ],
        }
    }

    pub fn build(&self) -> Result<Game, GameError> {
        let bots = self
            .bots
            .iter()
            .map(BotSpec::build)
            .collect::<Result<Vec<_>, _>>()?;
        Game::from_config(bots, &self.game)
    }
}
