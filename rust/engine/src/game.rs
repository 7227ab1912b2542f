use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::logger::EventSink;
use crate::player::Bot;
use crate::pot::settle;
use crate::rules::{classify, heuristic_winner, Standing};

pub const DEFAULT_TARGET_SCORE: u32 = 21;
pub const DEFAULT_MAX_STEPS: u32 = 10;

fn default_max_steps() -> u32 {
    DEFAULT_MAX_STEPS
}

fn default_target_score() -> u32 {
    DEFAULT_TARGET_SCORE
}

/// Session parameters fixed for the lifetime of a [`Game`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Upper bound on rounds played
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,
    /// Score every bot is chasing
    #[serde(default = "default_target_score")]
    pub target_score: u32,
    /// Deck seed; `None` shuffles with the process-wide generator
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            target_score: DEFAULT_TARGET_SCORE,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_steps == 0 {
            return Err(GameError::InvalidMaxSteps(self.max_steps));
        }
        if self.target_score == 0 {
            return Err(GameError::InvalidTargetScore(self.target_score));
        }
        Ok(())
    }

    fn deck(&self) -> Deck {
        match self.seed {
            Some(seed) => Deck::new_with_seed(seed),
            None => Deck::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Status {
    Running,
    Concluded,
}

/// Why the winner won.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum WinReason {
    /// Every other bot stopped acting
    LastRemainingBot,
    /// Hit the target score exactly
    ReachedTarget(u32),
    /// Best non-bust score when the round limit ran out
    HighestScore,
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinReason::LastRemainingBot => f.write_str("last remaining bot"),
            WinReason::ReachedTarget(target) => write!(f, "reached {} points", target),
            WinReason::HighestScore => f.write_str("highest score after the round limit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    /// Position in construction order
    pub index: usize,
    pub name: String,
    pub reason: WinReason,
}

/// Snapshot of one bot after settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotSummary {
    pub name: String,
    pub strategy: String,
    pub score: u32,
    pub balance: i64,
    pub is_active: bool,
    pub hand: Vec<Card>,
}

/// Result of a finished game, serializable for hand-history style records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Option<Winner>,
    /// Sum of the losing bets paid to the winner
    pub pot: i64,
    pub rounds_played: u32,
    pub target_score: u32,
    pub bots: Vec<BotSummary>,
}

/// Round-driven game engine: owns the deck and the bots, plays rounds until
/// a bot wins or the round limit runs out, then settles the bets.
///
/// # Examples
///
/// ```
/// use cardsim_engine::game::{Game, GameConfig, Status};
/// use cardsim_engine::player::Bot;
/// use cardsim_engine::strategy::Strategy;
///
/// let bots = vec![
///     Bot::with_strategy("Careful", Strategy::Conservative, 100).unwrap(),
///     Bot::with_strategy("Bold", Strategy::Aggressive, 200).unwrap(),
/// ];
/// let config = GameConfig { seed: Some(7), ..GameConfig::default() };
/// let mut game = Game::from_config(bots, &config).unwrap();
///
/// let mut lines: Vec<String> = Vec::new();
/// let outcome = game.play(&mut lines).unwrap();
///
/// assert_eq!(game.status(), Status::Concluded);
/// assert!(outcome.rounds_played >= 1);
/// assert!(game.bots().iter().all(|b| b.current_bet() == 0));
/// ```
#[derive(Debug)]
pub struct Game {
    /// Shared deck every hit draws from
    deck: Deck,
    /// Participants in construction order
    bots: Vec<Bot>,
    max_steps: u32,
    /// Rounds played so far
    current_step: u32,
    target_score: u32,
    status: Status,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Game on a freshly shuffled deck; `target_score` defaults to 21.
    pub fn new(
        bots: Vec<Bot>,
        max_steps: u32,
        target_score: Option<u32>,
    ) -> Result<Self, GameError> {
        let config = GameConfig {
            max_steps,
            target_score: target_score.unwrap_or(DEFAULT_TARGET_SCORE),
            seed: None,
        };
        Self::from_config(bots, &config)
    }

    /// Game whose deck is seeded from `config.seed` when present.
    pub fn from_config(bots: Vec<Bot>, config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Self::with_deck(bots, config, config.deck())
    }

    /// Game on an injected deck; `config.seed` is ignored.
    pub fn with_deck(bots: Vec<Bot>, config: &GameConfig, deck: Deck) -> Result<Self, GameError> {
        config.validate()?;
        let mut names = HashSet::with_capacity(bots.len());
        for bot in &bots {
            if !names.insert(bot.name()) {
                return Err(GameError::DuplicateBotName(bot.name().to_string()));
            }
        }
        Ok(Self {
            deck,
            bots,
            max_steps: config.max_steps,
            current_step: 0,
            target_score: config.target_score,
            status: Status::Running,
            outcome: None,
        })
    }

    pub fn bots(&self) -> &[Bot] {
        &self.bots
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn current_step(&self) -> u32 {
        self.current_step
    }
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }
    pub fn target_score(&self) -> u32 {
        self.target_score
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// Plays the whole game, narrating to `sink`. A game can be played once.
    pub fn play<S: EventSink>(&mut self, mut sink: S) -> Result<GameOutcome, GameError> {
        if self.status == Status::Concluded {
            return Err(GameError::AlreadyConcluded);
        }
        self.show_initial_state(&mut sink);

        while self.current_step < self.max_steps {
            self.play_round(&mut sink);
            self.current_step += 1;

            if let Some((idx, reason)) = self.early_winner() {
                return Ok(self.conclude(Some((idx, reason)), &mut sink));
            }
        }

        sink.emit("Max number of rounds reached, determining winner by score");
        let scores: Vec<u32> = self
            .bots
            .iter()
            .map(|b| b.score(self.target_score))
            .collect();
        let winner = heuristic_winner(&scores, self.target_score);
        if winner.is_none() {
            sink.emit("All bots bust. No winner.");
        }
        Ok(self.conclude(winner.map(|idx| (idx, WinReason::HighestScore)), &mut sink))
    }

    fn play_round<S: EventSink>(&mut self, sink: &mut S) {
        sink.emit(&format!("--- Round {} ---", self.current_step + 1));
        let target = self.target_score;

        for bot in self.bots.iter_mut() {
            if !bot.is_active() {
                continue;
            }
            let score = bot.score(target);
            let tag = match classify(score, target) {
                Standing::Open => None,
                Standing::Stay => Some("stay"),
                Standing::Bust => Some("bust"),
            };
            if let Some(tag) = tag {
                bot.deactivate();
                sink.emit(&format!("{} stays with score {} ({})", bot.name(), score, tag));
                continue;
            }

            if bot.decide(target) {
                let Some(card) = self.deck.draw() else {
                    sink.emit("Deck is empty!");
                    break;
                };
                sink.emit(&format!("{} draws {}", bot.name(), card));
                bot.add_card(card);
            } else {
                sink.emit(&format!("{} stays with score {}", bot.name(), score));
            }
        }

        self.show_state(sink);
    }

    /// Single survivor first, then the first active bot sitting on the target.
    fn early_winner(&self) -> Option<(usize, WinReason)> {
        let active: Vec<usize> = self
            .bots
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_active())
            .map(|(idx, _)| idx)
            .collect();

        if let [only] = active.as_slice() {
            return Some((*only, WinReason::LastRemainingBot));
        }
        active
            .into_iter()
            .find(|&idx| self.bots[idx].score(self.target_score) == self.target_score)
            .map(|idx| (idx, WinReason::ReachedTarget(self.target_score)))
    }

    fn conclude<S: EventSink>(
        &mut self,
        winner: Option<(usize, WinReason)>,
        sink: &mut S,
    ) -> GameOutcome {
        let pot = settle(&mut self.bots, winner.map(|(idx, _)| idx));
        let winner = winner.map(|(index, reason)| Winner {
            index,
            name: self.bots[index].name().to_string(),
            reason,
        });

        match &winner {
            Some(w) => {
                sink.emit(&format!("Game over: {} wins, {}!", w.name, w.reason));
                self.show_final_state(sink, Some(w.index));
            }
            None => {
                self.show_final_state(sink, None);
                sink.emit("Game ended with no winner.");
            }
        }

        let outcome = GameOutcome {
            winner,
            pot,
            rounds_played: self.current_step,
            target_score: self.target_score,
            bots: self.bots.iter().map(|b| self.summarize(b)).collect(),
        };
        self.status = Status::Concluded;
        self.outcome = Some(outcome.clone());
        outcome
    }

    fn summarize(&self, bot: &Bot) -> BotSummary {
        BotSummary {
            name: bot.name().to_string(),
            strategy: bot.strategy_label().to_string(),
            score: bot.score(self.target_score),
            balance: bot.balance(),
            is_active: bot.is_active(),
            hand: bot.hand().cards(),
        }
    }

    fn show_initial_state<S: EventSink>(&self, sink: &mut S) {
        sink.emit("--- Initial Game State ---");
        for bot in &self.bots {
            sink.emit(&format!(
                "{}: Initial Balance = {}, Initial Bet = {}",
                bot.name(),
                bot.balance(),
                bot.current_bet()
            ));
        }
    }

    fn show_state<S: EventSink>(&self, sink: &mut S) {
        sink.emit("Current game state:");
        for bot in &self.bots {
            sink.emit(&format!(
                "{} ({}) score: {} | Hand: [{}]",
                bot.name(),
                bot.strategy_label(),
                bot.score(self.target_score),
                bot.hand()
            ));
        }
    }

    fn show_final_state<S: EventSink>(&self, sink: &mut S, winner: Option<usize>) {
        sink.emit("--- Final Game State ---");
        for bot in &self.bots {
            sink.emit(&format!("{}: Final Balance = {}", bot.name(), bot.balance()));
        }
        if let Some(w) = winner.and_then(|idx| self.bots.get(idx)) {
            sink.emit(&format!("Winner: {} (Balance = {})", w.name(), w.balance()));
        }
    }
}
