//! # cardsim-engine: Bot Card-Game Simulation Core
//!
//! A turn-based, target-score card game played by autonomous bots. Bots draw
//! from a shared shuffled deck according to pluggable strategies until one of
//! them wins, then the engine settles their bets.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Shuffled deck with injectable or seeded ChaCha20 RNG
//! - [`hand`] - Hand ownership and soft-ace score calculation
//! - [`strategy`] - Built-in and custom hit-or-stay predicates
//! - [`player`] - Bot state, bets and balance
//! - [`rules`] - Bet validation, bust classification, winner heuristic
//! - [`pot`] - Bet settlement
//! - [`game`] - Round loop and termination state machine
//! - [`logger`] - Line-oriented narration sinks
//! - [`config`] - JSON table rosters
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cardsim_engine::game::{Game, GameConfig};
//! use cardsim_engine::logger::NullSink;
//! use cardsim_engine::player::Bot;
//! use cardsim_engine::strategy::Strategy;
//!
//! let bots = vec![
//!     Bot::with_strategy("Bot-Conservative", Strategy::Conservative, 100).unwrap(),
//!     Bot::with_strategy("Bot-Aggressive", Strategy::Aggressive, 200).unwrap(),
//!     Bot::with_strategy("Bot-Mixed", Strategy::Mixed, 100).unwrap(),
//! ];
//! let config = GameConfig { seed: Some(42), ..GameConfig::default() };
//! let mut game = Game::from_config(bots, &config).unwrap();
//! let outcome = game.play(NullSink).unwrap();
//!
//! if let Some(winner) = &outcome.winner {
//!     println!("{} won {} chips: {}", winner.name, outcome.pot, winner.reason);
//! }
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use cardsim_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! assert_eq!(d1.draw(), d2.draw());
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
pub mod strategy;
