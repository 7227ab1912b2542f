use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::Hand;

/// Built-in decision strategies a bot can be constructed with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Hit while the score is below 17
    #[default]
    Default,
    /// Hit while the score is below `target - 5`
    Conservative,
    /// Hit while the score is below `target - 2`
    Aggressive,
    /// Hit while the score is even
    Mixed,
    /// Hit while the score is below `target - 4`
    Balanced,
    /// Card-count aware: hit on one card under 15 or two cards under 17
    Intuitive,
}

impl Strategy {
    pub fn all() -> [Strategy; 6] {
        [
            Strategy::Default,
            Strategy::Conservative,
            Strategy::Aggressive,
            Strategy::Mixed,
            Strategy::Balanced,
            Strategy::Intuitive,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Default => "default",
            Strategy::Conservative => "conservative",
            Strategy::Aggressive => "aggressive",
            Strategy::Mixed => "mixed",
            Strategy::Balanced => "balanced",
            Strategy::Intuitive => "intuitive",
        }
    }

    /// Resolves the tag into its hit predicate.
    pub fn decision(self) -> Decision {
        let rule: fn(&Hand, u32) -> bool = match self {
            Strategy::Default => default_hit,
            Strategy::Conservative => conservative_hit,
            Strategy::Aggressive => aggressive_hit,
            Strategy::Mixed => mixed_hit,
            Strategy::Balanced => balanced_hit,
            Strategy::Intuitive => intuitive_hit,
        };
        Decision {
            label: self.name().to_string(),
            strategy: Some(self),
            rule: Arc::new(rule),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Strategy::all()
            .into_iter()
            .find(|st| st.name() == needle)
            .ok_or_else(|| GameError::UnknownStrategy(s.to_string()))
    }
}

fn below(score: u32, target: u32, margin: u32) -> bool {
    score + margin < target
}

fn default_hit(hand: &Hand, target: u32) -> bool {
    hand.calculate_score(target) < 17
}

fn conservative_hit(hand: &Hand, target: u32) -> bool {
    below(hand.calculate_score(target), target, 5)
}

fn aggressive_hit(hand: &Hand, target: u32) -> bool {
    below(hand.calculate_score(target), target, 2)
}

fn mixed_hit(hand: &Hand, target: u32) -> bool {
    hand.calculate_score(target) % 2 == 0
}

fn balanced_hit(hand: &Hand, target: u32) -> bool {
    below(hand.calculate_score(target), target, 4)
}

fn intuitive_hit(hand: &Hand, target: u32) -> bool {
    let score = hand.calculate_score(target);
    match hand.len() {
        0 | 1 => score < 15,
        2 => score < 17,
        _ => false,
    }
}

type Rule = dyn Fn(&Hand, u32) -> bool + Send + Sync;

/// A hit-or-stay predicate bound to a bot at construction.
///
/// Built-in strategies resolve through [`Strategy::decision`]; arbitrary
/// predicates are wrapped with [`Decision::custom`].
#[derive(Clone)]
pub struct Decision {
    label: String,
    strategy: Option<Strategy>,
    rule: Arc<Rule>,
}

impl Decision {
    pub fn custom<F>(label: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&Hand, u32) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            strategy: None,
            rule: Arc::new(rule),
        }
    }

    /// `true` means hit.
    pub fn hit(&self, hand: &Hand, target: u32) -> bool {
        (self.rule)(hand, target)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The built-in tag this predicate came from, `None` for custom ones.
    pub fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }
}

impl Default for Decision {
    fn default() -> Self {
        Strategy::Default.decision()
    }
}

impl From<Strategy> for Decision {
    fn from(strategy: Strategy) -> Self {
        strategy.decision()
    }
}

impl fmt::Debug for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decision")
            .field("label", &self.label)
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Aggressive".parse::<Strategy>(), Ok(Strategy::Aggressive));
        assert_eq!(" mixed ".parse::<Strategy>(), Ok(Strategy::Mixed));
        assert_eq!(
            "reckless".parse::<Strategy>(),
            Err(GameError::UnknownStrategy("reckless".to_string()))
        );
    }

    #[test]
    fn thresholds_do_not_underflow_on_tiny_targets() {
        let hand = Hand::new();
        assert!(!Strategy::Conservative.decision().hit(&hand, 3));
        assert!(Strategy::Aggressive.decision().hit(&hand, 3));
    }
}
