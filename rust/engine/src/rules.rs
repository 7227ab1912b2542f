use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::Bet;

/// Where a score stands relative to the target.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Standing {
    /// Below the target; the bot may still act
    Open,
    /// Exactly on the target
    Stay,
    /// Over the target
    Bust,
}

pub fn classify(score: u32, target: u32) -> Standing {
    if score > target {
        Standing::Bust
    } else if score == target {
        Standing::Stay
    } else {
        Standing::Open
    }
}

/// Validates a wager against the bettor's balance.
///
/// # Errors
///
/// - [`GameError::NegativeBet`] - amount is below zero
/// - [`GameError::InsufficientBalance`] - amount exceeds `balance`
///
/// ```
/// use cardsim_engine::errors::GameError;
/// use cardsim_engine::rules::validate_bet;
///
/// assert_eq!(validate_bet(1000, 250).unwrap().amount(), 250);
/// assert!(matches!(validate_bet(100, 101), Err(GameError::InsufficientBalance { .. })));
/// assert!(matches!(validate_bet(100, -1), Err(GameError::NegativeBet { .. })));
/// ```
pub fn validate_bet(balance: i64, amount: i64) -> Result<Bet, GameError> {
    let bet = Bet::new(amount)?;
    if bet.amount() > balance {
        return Err(GameError::InsufficientBalance { amount, balance });
    }
    Ok(bet)
}

/// Picks a winner by score once the round limit is reached.
///
/// Only non-bust scores qualify. The first exact-target score wins; otherwise
/// the first of the highest scores wins. Returns `None` when every score busts.
pub fn heuristic_winner(scores: &[u32], target: u32) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        if score > target {
            continue;
        }
        if score == target {
            return Some(idx);
        }
        match best {
            Some((_, top)) if top >= score => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}
