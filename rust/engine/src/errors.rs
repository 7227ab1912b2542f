use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Bet amount must be non-negative, got {amount}")]
    NegativeBet { amount: i64 },
    #[error("Insufficient balance for bet: {amount} requested, {balance} available")]
    InsufficientBalance { amount: i64, balance: i64 },
    #[error("max_steps must be a positive integer, got {0}")]
    InvalidMaxSteps(u32),
    #[error("target_score must be a positive integer, got {0}")]
    InvalidTargetScore(u32),
    #[error("Duplicate card in deck: {0}")]
    DuplicateCard(Card),
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error("Duplicate bot name: {0}")]
    DuplicateBotName(String),
    #[error("Game already concluded")]
    AlreadyConcluded,
    #[error("Invalid table config: {0}")]
    InvalidConfig(String),
}
