//! Match controller integration tests.
//!
//! Full games driven through `Match`: owner and category bookkeeping,
//! seat registration, hands, and the scripted Plus game.

use rust_triad::{
    Card, Category, Coordinate, Match, MatchConfig, MatchOutcome, Ownership, RuleKind,
    FIELD_CAPACITY,
};

fn two_seat_match(rules: &[RuleKind]) -> Match {
    let mut game = Match::new(&MatchConfig::new().with_rules(rules.iter().copied())).unwrap();
    game.add_player(Ownership::Npc);
    game.add_player(Ownership::Player);

    assert_eq!(game.card_count_for_owner(Ownership::Npc), 0);
    assert_eq!(game.card_count_for_owner(Ownership::Player), 0);
    game
}

fn uniform(value: i32, owner: Ownership) -> Card {
    Card::uniform(value, Category::None).with_owner(owner)
}

/// Cells where `(x + y)` is even: the corners and the centre.
fn is_player_cell(at: Coordinate) -> bool {
    (at.x + at.y) % 2 == 0
}

// =============================================================================
// Owner counts
// =============================================================================

#[test]
fn test_card_count_by_owner() {
    for npc_cards in 1..FIELD_CAPACITY {
        let mut game = two_seat_match(&[]);
        for (i, at) in Coordinate::all().enumerate() {
            let owner = if i < npc_cards { Ownership::Npc } else { Ownership::Player };
            assert!(game.play_card(uniform(1, owner), at.x, at.y));
        }

        assert_eq!(game.card_count_for_owner(Ownership::Npc), npc_cards);
        assert_eq!(
            game.card_count_for_owner(Ownership::Player),
            FIELD_CAPACITY - npc_cards
        );
    }
}

#[test]
fn test_greater_than_equal_values_change_nothing() {
    let mut game = two_seat_match(&[RuleKind::GreaterThan]);

    for at in Coordinate::all() {
        let owner = if is_player_cell(at) { Ownership::Player } else { Ownership::Npc };
        assert!(game.play_card(uniform(1, owner), at.x, at.y));
    }

    assert_eq!(game.card_count_for_owner(Ownership::Player), 5);
    assert_eq!(game.card_count_for_owner(Ownership::Npc), 4);
    assert!(game.history().iter().all(|record| record.captures.is_empty()));
    assert_eq!(game.result(), Some(MatchOutcome::Winner(Ownership::Player)));
}

#[test]
fn test_greater_than_all_cards_go_to_npc() {
    let mut game = two_seat_match(&[RuleKind::GreaterThan]);
    let (player_cells, npc_cells): (Vec<_>, Vec<_>) =
        Coordinate::all().partition(|&at| is_player_cell(at));

    for at in player_cells {
        assert!(game.play_card(uniform(1, Ownership::Player), at.x, at.y));
    }
    for at in npc_cells {
        assert!(game.play_card(uniform(2, Ownership::Npc), at.x, at.y));
    }

    assert_eq!(game.card_count_for_owner(Ownership::Npc), 9);
    assert_eq!(game.card_count_for_owner(Ownership::Player), 0);
    assert_eq!(game.result(), Some(MatchOutcome::Winner(Ownership::Npc)));
}

#[test]
fn test_reset_between_games() {
    let mut game = two_seat_match(&[RuleKind::GreaterThan]);
    for at in Coordinate::all() {
        assert!(game.play_card(uniform(1, Ownership::Player), at.x, at.y));
    }
    assert!(!game.play_card(uniform(9, Ownership::Npc), 0, 0));

    game.reset_for_new_game();
    assert!(game.result().is_none());
    assert_eq!(game.card_count_for_owner(Ownership::Player), 0);
    assert!(game.play_card(uniform(9, Ownership::Npc), 0, 0));
    assert_eq!(game.history().len(), 1);
}

// =============================================================================
// Categories
// =============================================================================

#[test]
fn test_card_count_by_category() {
    let expected = [
        (Category::None, 1),
        (Category::Beastman, 2),
        (Category::Primal, 3),
        (Category::Garlean, 1),
        (Category::Scion, 2),
    ];
    let mut game = two_seat_match(&[]);
    let mut cells = Coordinate::all();

    for (category, count) in expected {
        for _ in 0..count {
            let at = cells.next().unwrap();
            let card = Card::uniform(1, category).with_owner(Ownership::Npc);
            assert!(game.play_card(card, at.x, at.y));
        }
    }

    for (category, count) in expected {
        assert_eq!(game.card_count_for_category(category), count, "{category:?}");
    }
}

// =============================================================================
// Seats and hands
// =============================================================================

#[test]
fn test_add_player() {
    let mut game = Match::new(&MatchConfig::new()).unwrap();
    for seat in Ownership::PLAYERS {
        game.add_player(seat);
        assert!(game.players().contains(&seat));
        assert_eq!(game.hand(seat).map(|hand| hand.owner()), Some(seat));
    }
}

#[test]
fn test_config_from_json() {
    let config = MatchConfig::from_json(r#"{ "rules": ["Plus", "GreaterThan"], "hand_size": 3 }"#)
        .unwrap();
    let game = Match::new(&config).unwrap();
    assert_eq!(game.rules().kinds(), &[RuleKind::Plus, RuleKind::GreaterThan]);
}

#[test]
fn test_scripted_plus_game() {
    let mut game = two_seat_match(&[RuleKind::Plus]);
    let catalog = game.catalog().clone();
    game.hand_mut(Ownership::Player)
        .unwrap()
        .add_many(&catalog, &["Dodo", "Tonberry", "Sabotender"])
        .unwrap();
    game.hand_mut(Ownership::Npc)
        .unwrap()
        .add_many(&catalog, &["Tonberry", "Sabotender"])
        .unwrap();

    assert_eq!(game.play_from_hand(Ownership::Player, 0, 0, 0), Ok(true));
    assert_eq!(game.play_from_hand(Ownership::Player, 1, 2, 0), Ok(true));

    // Tonberry touches Dodo with 2 + 2 and the other Tonberry with 2 + 2.
    assert_eq!(game.play_from_hand(Ownership::Npc, 0, 1, 0), Ok(true));
    assert_eq!(game.card_count_for_owner(Ownership::Npc), 3);
    assert_eq!(game.card_count_for_owner(Ownership::Player), 0);
    let last = game.history().last().unwrap();
    assert_eq!(last.flips(), 2);

    assert_eq!(game.play_from_hand(Ownership::Npc, 1, 2, 1), Ok(true));
    assert_eq!(game.play_from_hand(Ownership::Player, 2, 1, 1), Ok(true));

    assert_eq!(game.card_count_for_owner(Ownership::Npc), 4);
    assert_eq!(game.card_count_for_owner(Ownership::Player), 1);
    assert!(game.hand(Ownership::Player).unwrap().is_empty());
    assert!(game.result().is_none());
}
