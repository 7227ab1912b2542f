use crate::cards::Card;

/// Bonus added when an Ace is counted as 11 instead of 1.
pub const SOFT_ACE_BONUS: u32 = 10;

/// Computes the target-seeking score of a set of cards.
///
/// Every card contributes its [`Card::value`]. Aces are then promoted from 1 to
/// 11, one at a time, for as long as the promotion keeps the total at or below
/// `target`.
///
/// ```
/// use cardsim_engine::cards::{Card, Rank, Suit};
/// use cardsim_engine::hand::calculate_score;
///
/// let cards = [
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Spades, Rank::Six),
/// ];
/// assert_eq!(calculate_score(&cards, 21), 17);
/// assert_eq!(calculate_score(&cards, 15), 7);
/// ```
pub fn calculate_score(cards: &[Card], target: u32) -> u32 {
    let mut score: u32 = cards.iter().map(Card::value).sum();
    let mut aces = cards.iter().filter(|c| c.is_ace()).count();

    while aces > 0 && score + SOFT_ACE_BONUS <= target {
        score += SOFT_ACE_BONUS;
        aces -= 1;
    }
    score
}

/// Ordered cards held by one bot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Owned copy of the held cards; mutating it leaves the hand untouched.
    pub fn cards(&self) -> Vec<Card> {
        self.cards.clone()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn reset(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn aces(&self) -> usize {
        self.cards.iter().filter(|c| c.is_ace()).count()
    }

    pub fn calculate_score(&self, target: u32) -> u32 {
        calculate_score(&self.cards, target)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
