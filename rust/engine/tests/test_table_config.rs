use cardsim_engine::config::{BotSpec, TableConfig};
use cardsim_engine::errors::GameError;
use cardsim_engine::game::GameOutcome;
use cardsim_engine::logger::NullSink;
use cardsim_engine::strategy::Strategy;

#[test]
fn demo_table_has_three_bots() {
    let table = TableConfig::demo();
    let game = table.build().unwrap();
    assert_eq!(game.max_steps(), 10);
    assert_eq!(game.target_score(), 21);
    let bets: Vec<i64> = game.bots().iter().map(|b| b.current_bet()).collect();
    assert_eq!(bets, vec![100, 200, 100]);
    assert_eq!(game.bots()[2].strategy(), Some(Strategy::Mixed));
}

#[test]
fn json_defaults_fill_missing_fields() {
    let table = TableConfig::from_json_str(r#"{ "bots": [ { "name": "Solo" } ] }"#).unwrap();
    assert_eq!(table.game.max_steps, 10);
    assert_eq!(table.game.target_score, 21);
    assert_eq!(table.game.seed, None);
    assert_eq!(table.bots, vec![BotSpec::new("Solo", Strategy::Default, 0)]);
}

#[test]
fn config_round_trips_through_json() {
    let mut table = TableConfig::demo();
    table.game.seed = Some(99);
    let json = table.to_json_string().unwrap();
    assert!(json.contains("\"aggressive\""));
    assert_eq!(TableConfig::from_json_str(&json).unwrap(), table);
}

#[test]
fn invalid_values_are_rejected() {
    let err = TableConfig::from_json_str(r#"{ "game": { "max_steps": 0 } }"#).unwrap_err();
    assert_eq!(err, GameError::InvalidMaxSteps(0));

    let err = TableConfig::from_json_str(r#"{ "bots": [ { "name": "X", "strategy": "lucky" } ] }"#)
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn roster_errors_surface_from_build() {
    let table = TableConfig {
        bots: vec![
            BotSpec::new("Rich", Strategy::Balanced, 2000),
            BotSpec::new("Poor", Strategy::Balanced, 10),
        ],
        ..TableConfig::default()
    };
    assert!(matches!(
        table.build(),
        Err(GameError::InsufficientBalance { .. })
    ));

    let twins = TableConfig {
        bots: vec![
            BotSpec::new("Twin", Strategy::Mixed, 0),
            BotSpec::new("Twin", Strategy::Intuitive, 0),
        ],
        ..TableConfig::default()
    };
    assert_eq!(
        twins.build().unwrap_err(),
        GameError::DuplicateBotName("Twin".to_string())
    );
}

#[test]
fn seeded_outcome_serializes_to_json() {
    let mut table = TableConfig::demo();
    table.game.seed = Some(2024);
    let mut game = table.build().unwrap();
    let outcome = game.play(NullSink).unwrap();

    let line = serde_json::to_string(&outcome).unwrap();
    let back: GameOutcome = serde_json::from_str(&line).unwrap();
    assert_eq!(back, outcome);
    assert_eq!(back.bots.len(), 3);
}
