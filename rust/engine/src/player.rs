use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::rules::validate_bet;
use crate::strategy::{Decision, Strategy};

/// Balance every bot starts with.
pub const STARTING_BALANCE: i64 = 1000;

/// A validated, non-negative wager.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct Bet {
    amount: i64,
}

impl Bet {
    pub fn new(amount: i64) -> Result<Self, GameError> {
        if amount < 0 {
            return Err(GameError::NegativeBet { amount });
        }
        Ok(Self { amount })
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }
}

/// An autonomous participant: balance, wager, hand and a hit-or-stay predicate.
///
/// The predicate is resolved once at construction and stored with the bot.
///
/// # Examples
///
/// ```
/// use cardsim_engine::cards::{Card, Rank, Suit};
/// use cardsim_engine::player::Bot;
/// use cardsim_engine::strategy::Strategy;
///
/// let mut bot = Bot::with_strategy("Con", Strategy::Conservative, 100).unwrap();
/// bot.add_card(Card::new(Suit::Hearts, Rank::Ten));
/// bot.add_card(Card::new(Suit::Clubs, Rank::Five));
/// assert!(bot.decide(21));
/// assert_eq!(bot.balance(), 1000);
/// assert_eq!(bot.current_bet(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct Bot {
    /// Unique, human-readable name
    name: String,
    /// Chips owned; only settlement changes it
    balance: i64,
    /// Wager recorded for the current game
    current_bet: i64,
    /// Still eligible to act
    is_active: bool,
    hand: Hand,
    decision: Decision,
}

impl Bot {
    /// Bot with the default strategy (hit below 17).
    pub fn new(name: impl Into<String>, bet: i64) -> Result<Self, GameError> {
        Self::with_decision(name, Decision::default(), bet)
    }

    pub fn with_strategy(
        name: impl Into<String>,
        strategy: Strategy,
        bet: i64,
    ) -> Result<Self, GameError> {
        Self::with_decision(name, strategy.decision(), bet)
    }

    /// Bot driven by an arbitrary predicate, e.g. one built with [`Decision::custom`].
    pub fn with_decision(
        name: impl Into<String>,
        decision: Decision,
        bet: i64,
    ) -> Result<Self, GameError> {
        let mut bot = Self {
            name: name.into(),
            balance: STARTING_BALANCE,
            current_bet: 0,
            is_active: true,
            hand: Hand::new(),
            decision,
        };
        bot.place_bet(bet)?;
        Ok(bot)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn balance(&self) -> i64 {
        self.balance
    }
    pub fn current_bet(&self) -> i64 {
        self.current_bet
    }
    pub fn is_active(&self) -> bool {
        self.is_active
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Built-in tag, or `None` when the bot runs a custom predicate.
    pub fn strategy(&self) -> Option<Strategy> {
        self.decision.strategy()
    }

    pub fn strategy_label(&self) -> &str {
        self.decision.label()
    }

    /// Records a wager; the balance is only debited at settlement.
    pub fn place_bet(&mut self, amount: i64) -> Result<(), GameError> {
        let bet = validate_bet(self.balance, amount)?;
        self.current_bet = bet.amount();
        Ok(())
    }

    /// `true` means hit.
    pub fn decide(&self, target: u32) -> bool {
        self.decision.hit(&self.hand, target)
    }

    pub fn score(&self, target: u32) -> u32 {
        self.hand.calculate_score(target)
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Clears the hand and reactivates the bot. Balance and bet are kept.
    pub fn reset_hand(&mut self) {
        self.hand.reset();
        self.is_active = true;
    }

    pub(crate) fn credit(&mut self, amount: i64) {
        self.balance += amount;
    }

    pub(crate) fn debit_bet(&mut self) -> i64 {
        self.balance -= self.current_bet;
        self.current_bet
    }

    pub(crate) fn clear_bet(&mut self) {
        self.current_bet = 0;
    }
}
