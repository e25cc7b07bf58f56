//! Capture rule integration tests.
//!
//! Single placements on a prepared board, checking which neighbours each
//! rule captures and how rules combine.

use rust_triad::{
    Board, Card, CardCatalog, CardError, Category, Coordinate, Ownership, RuleError, RuleKind,
    RuleSet,
};

fn board_with(rules: &[RuleKind]) -> Board {
    Board::new(RuleSet::new(rules.iter().copied()).unwrap())
}

fn npc(name: &str, faces: [i32; 4]) -> Card {
    Card::new(name, faces, Category::None).with_owner(Ownership::Npc)
}

fn player(name: &str, faces: [i32; 4]) -> Card {
    Card::new(name, faces, Category::None).with_owner(Ownership::Player)
}

/// Neighbours for the Plus scenarios around the centre cell:
/// left touches with 4, up with 3, right with 1.
fn plus_neighbours(board: &mut Board) {
    assert!(board.try_place(0, 1, npc("Left", [1, 1, 4, 1])));
    assert!(board.try_place(1, 0, npc("Up", [1, 1, 1, 3])));
    assert!(board.try_place(2, 1, npc("Right", [1, 1, 1, 1])));
}

// =============================================================================
// Greater Than
// =============================================================================

#[test]
fn test_greater_than_captures_strictly_lower_faces() {
    let mut board = board_with(&[RuleKind::GreaterThan]);
    assert!(board.try_place(0, 1, Card::uniform(4, Category::None).with_owner(Ownership::Npc)));
    assert!(board.try_place(1, 0, Card::uniform(1, Category::None).with_owner(Ownership::Npc)));
    assert!(board.try_place(2, 1, Card::uniform(5, Category::None).with_owner(Ownership::Npc)));
    assert!(board.try_place(1, 2, Card::uniform(2, Category::None).with_owner(Ownership::Npc)));

    let captures = board
        .place(Coordinate::new(1, 1), player("Center", [5, 1, 5, 3]))
        .unwrap();

    let captured: Vec<_> = captures.iter().map(|c| c.at).collect();
    assert_eq!(captured, vec![Coordinate::new(0, 1), Coordinate::new(1, 2)]);
    assert!(captures.iter().all(|c| c.rule == RuleKind::GreaterThan && c.depth == 0));
    assert_eq!(board.owner_count(Ownership::Player), 3);
    assert_eq!(board.owner_count(Ownership::Npc), 2);
}

#[test]
fn test_greater_than_uses_modifiers() {
    let mut board = board_with(&[RuleKind::GreaterThan]);
    let weakened = Card::uniform(3, Category::None)
        .with_owner(Ownership::Npc)
        .with_modifier(-1);
    assert!(board.try_place(1, 0, weakened));
    assert!(board.try_place(0, 0, player("Even", [3, 3, 3, 3])));

    assert_eq!(board.get(1, 0).map(Card::owner), Some(Ownership::Player));
}

#[test]
fn test_no_rules_never_capture() {
    let mut board = Board::new(RuleSet::empty());
    assert!(board.try_place(1, 0, Card::uniform(1, Category::None).with_owner(Ownership::Npc)));
    let captures = board
        .place(Coordinate::new(0, 0), player("Strong", [9, 9, 9, 9]))
        .unwrap();

    assert!(captures.is_empty());
    assert_eq!(board.owner_count(Ownership::Npc), 1);
}

// =============================================================================
// Plus
// =============================================================================

#[test]
fn test_plus_captures_matching_sums() {
    let mut board = board_with(&[RuleKind::Plus]);
    plus_neighbours(&mut board);

    let captures = board
        .place(Coordinate::new(1, 1), player("Center", [2, 3, 9, 9]))
        .unwrap();

    let captured: Vec<_> = captures.iter().map(|c| (c.at, c.rule)).collect();
    assert_eq!(
        captured,
        vec![
            (Coordinate::new(0, 1), RuleKind::Plus),
            (Coordinate::new(1, 0), RuleKind::Plus),
        ]
    );
    assert_eq!(board.get(2, 1).map(Card::owner), Some(Ownership::Npc));
}

#[test]
fn test_plus_needs_two_neighbours() {
    let mut board = board_with(&[RuleKind::Plus]);
    assert!(board.try_place(1, 0, npc("Up", [1, 1, 1, 3])));

    let captures = board
        .place(Coordinate::new(1, 1), player("Center", [2, 3, 9, 9]))
        .unwrap();
    assert!(captures.is_empty());
}

#[test]
fn test_same_owner_neighbour_never_joins_plus_group() {
    let mut board = board_with(&[RuleKind::Plus]);
    assert!(board.try_place(0, 1, player("Ally", [1, 1, 4, 1])));
    assert!(board.try_place(1, 0, npc("Up", [1, 1, 1, 3])));

    // Ally sums to 6 like Up does, but does not count towards the group.
    let captures = board
        .place(Coordinate::new(1, 1), player("Center", [2, 3, 9, 9]))
        .unwrap();

    assert!(captures.is_empty());
    assert_eq!(board.owner_count(Ownership::Npc), 1);
}

#[test]
fn test_catalog_rejects_extreme_faces() {
    let json = r#"[{ "name": "Titan", "values": [2147483647, 2147483647, 2147483647, 2147483647] }]"#;
    assert!(matches!(
        CardCatalog::from_json(json),
        Err(CardError::FaceRange { .. })
    ));
}

#[test]
fn test_plus_with_extreme_faces_does_not_overflow() {
    let mut board = board_with(&[RuleKind::Plus]);
    assert!(board.try_place(0, 1, npc("Titan", [i32::MAX; 4])));
    assert!(board.try_place(1, 0, npc("Titan", [i32::MAX; 4])));

    let captures = board
        .place(Coordinate::new(1, 1), player("Titan", [i32::MAX; 4]))
        .unwrap();

    assert_eq!(captures.len(), 2);
    assert_eq!(board.owner_count(Ownership::Player), 3);
}

// =============================================================================
// Combined rules
// =============================================================================

#[test]
fn test_rules_are_additive() {
    let mut board = board_with(&[RuleKind::Plus, RuleKind::GreaterThan]);
    plus_neighbours(&mut board);

    let captures = board
        .place(Coordinate::new(1, 1), player("Center", [2, 3, 9, 9]))
        .unwrap();

    let captured: Vec<_> = captures.iter().map(|c| (c.at, c.rule)).collect();
    assert_eq!(
        captured,
        vec![
            (Coordinate::new(0, 1), RuleKind::Plus),
            (Coordinate::new(1, 0), RuleKind::Plus),
            (Coordinate::new(2, 1), RuleKind::GreaterThan),
        ]
    );
    assert_eq!(board.owner_count(Ownership::Npc), 0);
    assert_eq!(board.owner_count(Ownership::Player), 4);
}

#[test]
fn test_rule_order_decides_attribution() {
    // Left and up both sum to 9 for Plus, and both lose to Greater Than.
    let center = || player("Center", [5, 6, 9, 9]);

    let mut board = board_with(&[RuleKind::GreaterThan, RuleKind::Plus]);
    plus_neighbours(&mut board);
    let captures = board.place(Coordinate::new(1, 1), center()).unwrap();
    assert_eq!(captures.len(), 3);
    assert!(captures.iter().all(|c| c.rule == RuleKind::GreaterThan));

    let mut board = board_with(&[RuleKind::Plus, RuleKind::GreaterThan]);
    plus_neighbours(&mut board);
    let captures = board.place(Coordinate::new(1, 1), center()).unwrap();
    let rules: Vec<_> = captures.iter().map(|c| c.rule).collect();
    assert_eq!(rules, vec![RuleKind::Plus, RuleKind::Plus, RuleKind::GreaterThan]);
}

// =============================================================================
// Rule sets
// =============================================================================

#[test]
fn test_rule_set_validation() {
    assert_eq!(
        RuleSet::new([RuleKind::Same]).unwrap_err(),
        RuleError::Unregistered(RuleKind::Same)
    );
    assert_eq!(
        RuleSet::new([RuleKind::Plus, RuleKind::Plus]).unwrap_err(),
        RuleError::Duplicate(RuleKind::Plus)
    );

    let parsed: Vec<RuleKind> = ["plus", "Greater Than"]
        .iter()
        .map(|name| name.parse().unwrap())
        .collect();
    let rules = RuleSet::new(parsed).unwrap();
    assert_eq!(rules.kinds(), &[RuleKind::Plus, RuleKind::GreaterThan]);
}
