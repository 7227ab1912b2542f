use cardsim_engine::cards::{Card, Rank, Suit};
use cardsim_engine::hand::Hand;
use cardsim_engine::player::Bot;
use cardsim_engine::strategy::{Decision, Strategy};

fn bot_with(strategy: Strategy, ranks: &[Rank]) -> Bot {
    let mut bot = Bot::with_strategy("Test", strategy, 0).unwrap();
    for (i, &r) in ranks.iter().enumerate() {
        let suit = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades][i % 4];
        bot.add_card(Card::new(suit, r));
    }
    bot
}

#[test]
fn conservative_hits_below_sixteen() {
    assert!(bot_with(Strategy::Conservative, &[Rank::Ten, Rank::Five]).decide(21));
    assert!(!bot_with(Strategy::Conservative, &[Rank::Ten, Rank::Seven]).decide(21));
    assert!(!bot_with(Strategy::Conservative, &[Rank::Ten, Rank::Six]).decide(21));
}

#[test]
fn aggressive_hits_below_nineteen() {
    let mut bot = bot_with(Strategy::Aggressive, &[Rank::Ten, Rank::Eight]);
    assert!(bot.decide(21));
    bot.add_card(Card::new(Suit::Clubs, Rank::Two));
    assert!(!bot.decide(21));
}

#[test]
fn mixed_hits_on_even_scores() {
    let mut bot = bot_with(Strategy::Mixed, &[Rank::Three, Rank::Five]);
    assert!(bot.decide(21));
    bot.add_card(Card::new(Suit::Spades, Rank::Two));
    assert!(bot.decide(21));
    bot.add_card(Card::new(Suit::Clubs, Rank::Ace));
    assert!(!bot.decide(21));
}

#[test]
fn balanced_hits_below_seventeen() {
    assert!(bot_with(Strategy::Balanced, &[Rank::Five, Rank::Five]).decide(21));
    assert!(bot_with(Strategy::Balanced, &[Rank::Ten, Rank::Six]).decide(21));
    assert!(!bot_with(Strategy::Balanced, &[Rank::Ten, Rank::Seven]).decide(21));
}

#[test]
fn thresholds_follow_the_target() {
    let bot = bot_with(Strategy::Conservative, &[Rank::Ten, Rank::Seven]);
    assert!(!bot.decide(21));
    assert!(bot.decide(25));
}

#[test]
fn default_strategy_hits_below_seventeen_regardless_of_target() {
    let bot = Bot::new("Plain", 0).unwrap();
    assert_eq!(bot.strategy(), Some(Strategy::Default));
    assert!(bot_with(Strategy::Default, &[Rank::Ten, Rank::Six]).decide(21));
    assert!(!bot_with(Strategy::Default, &[Rank::Ten, Rank::Seven]).decide(21));
    assert!(!bot_with(Strategy::Default, &[Rank::Ten, Rank::Seven]).decide(30));
}

#[test]
fn intuitive_looks_at_card_count() {
    assert!(bot_with(Strategy::Intuitive, &[]).decide(21));
    assert!(bot_with(Strategy::Intuitive, &[Rank::Nine]).decide(21));
    assert!(bot_with(Strategy::Intuitive, &[Rank::Ten, Rank::Six]).decide(21));
    assert!(!bot_with(Strategy::Intuitive, &[Rank::Ten, Rank::Seven]).decide(21));
    assert!(!bot_with(Strategy::Intuitive, &[Rank::Two, Rank::Three, Rank::Four]).decide(21));
    assert!(!bot_with(Strategy::Intuitive, &[Rank::Ten, Rank::Ten, Rank::Five]).decide(21));
}

#[test]
fn custom_predicate_replaces_the_tag() {
    let always = Decision::custom("always-hit", |_: &Hand, _| true);
    let mut bot = Bot::with_decision("Custom", always, 10).unwrap();
    for _ in 0..3 {
        bot.add_card(Card::new(Suit::Hearts, Rank::King));
    }
    assert!(bot.decide(21));
    assert_eq!(bot.strategy(), None);
    assert_eq!(bot.strategy_label(), "always-hit");
}

#[test]
fn custom_predicate_sees_hand_and_target() {
    let near = Decision::custom("near", |hand: &Hand, target| {
        hand.calculate_score(target) + 3 < target
    });
    let mut bot = Bot::with_decision("Near", near, 0).unwrap();
    bot.add_card(Card::new(Suit::Hearts, Rank::Ten));
    bot.add_card(Card::new(Suit::Hearts, Rank::Seven));
    assert!(bot.decide(21));
    bot.add_card(Card::new(Suit::Hearts, Rank::Two));
    assert!(!bot.decide(21));
}

#[test]
fn strategy_names_round_trip() {
    for s in Strategy::all() {
        assert_eq!(s.to_string().parse::<Strategy>(), Ok(s));
        assert_eq!(s.decision().label(), s.name());
    }
    let json = serde_json::to_string(&Strategy::Balanced).unwrap();
    assert_eq!(json, "\"balanced\"");
}
