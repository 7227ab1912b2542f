use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Standard 52-card deck, shuffled at construction.
/// Cards are drawn from the top (the end of the internal vector) until empty.
///
/// # Examples
///
/// ```
/// use cardsim_engine::deck::Deck;
///
/// let mut deck = Deck::new_with_seed(42);
/// assert_eq!(deck.len(), 52);
/// let first = deck.draw();
/// assert!(first.is_some());
/// assert_eq!(deck.len(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full deck shuffled with the process-wide generator.
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    /// Full deck shuffled with the supplied random source.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Full deck shuffled with a seeded ChaCha20 generator; same seed, same order.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::with_rng(&mut rng)
    }

    /// Stacked deck in the given order. The last card is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for &c in &cards {
            if !seen.insert(c) {
                return Err(GameError::DuplicateCard(c));
            }
        }
        Ok(Self { cards })
    }

    /// Removes and returns the top card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom to top, without drawing them.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
