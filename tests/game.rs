//! Game integration tests.

use puntors::{
    CENTER, CellUpdate, DECK_SIZE, DrawMode, GRID_SIZE, Game, GameOptions, GameState, Grid,
    GridError, MAX_CARD, MIN_CARD, MoveOutcome, PlaceError, PlayerColor, Token, Turn, draw_card,
    has_won, is_adjacent_to_occupied, is_legal_placement, standard_deck,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rig_turn(game: &Game, player: PlayerColor, card: u8) {
    *game.turn.lock() = Turn { player, card };
}

fn rig_deck(game: &Game, color: PlayerColor, cards: &[u8]) {
    game.decks.lock()[color.index()] = cards.to_vec();
}

fn put(game: &Game, x: usize, y: usize, value: u8, owner: PlayerColor) {
    game.grid
        .lock()
        .set(x, y, Some(Token::new(value, owner)))
        .unwrap();
}

#[test]
fn a_new_game_starts_with_red_holding_a_drawn_card() {
    let game = Game::new(GameOptions::default(), 42);

    assert_eq!(game.state(), GameState::AwaitingMove);
    assert_eq!(game.current_player(), PlayerColor::Red);
    assert!((MIN_CARD..=MAX_CARD).contains(&game.card_in_hand()));
    assert_eq!(game.cards_remaining(PlayerColor::Red), DECK_SIZE - 1);
    assert_eq!(game.cards_remaining(PlayerColor::Green), DECK_SIZE);
    assert!(game.is_board_empty());
    assert_eq!(game.winner(), None);
}

#[test]
fn the_color_cycle_is_fixed() {
    assert_eq!(PlayerColor::Red.next(), PlayerColor::Green);
    assert_eq!(PlayerColor::Green.next(), PlayerColor::Yellow);
    assert_eq!(PlayerColor::Yellow.next(), PlayerColor::Blue);
    assert_eq!(PlayerColor::Blue.next(), PlayerColor::Red);
}

#[test]
fn only_the_center_opens_an_empty_board() {
    let grid = Grid::new();

    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            for value in [MIN_CARD, 5, MAX_CARD] {
                let legal = is_legal_placement(&grid, x, y, value).unwrap();
                assert_eq!(legal, (x, y) == CENTER, "({x}, {y}) with {value}");
            }
        }
    }
}

#[test]
fn opening_move_must_hit_the_center() {
    let game = Game::new(GameOptions::default(), 1);
    rig_turn(&game, PlayerColor::Red, 3);

    assert_eq!(game.place(0, 0).unwrap_err(), PlaceError::InvalidMove);
    assert!(game.is_board_empty());

    rig_deck(&game, PlayerColor::Green, &[2]);
    let outcome = game.place(CENTER.0, CENTER.1).unwrap();
    assert!(matches!(
        outcome,
        MoveOutcome::TurnChanged {
            next_player: PlayerColor::Green,
            next_card: 2,
            ..
        }
    ));
    assert!(!game.is_board_empty());
    assert_eq!(game.value_at(CENTER.0, CENTER.1).unwrap(), Some(3));
    assert_eq!(
        game.color_at(CENTER.0, CENTER.1).unwrap(),
        Some(PlayerColor::Red)
    );
}

#[test]
fn adjacency_requires_an_empty_cell_next_to_an_occupied_one() {
    let mut grid = Grid::new();
    grid.set(5, 5, Some(Token::new(3, PlayerColor::Red))).unwrap();

    assert!(is_adjacent_to_occupied(&grid, 5, 6).unwrap());
    assert!(is_adjacent_to_occupied(&grid, 4, 4).unwrap());
    assert!(!is_adjacent_to_occupied(&grid, 0, 0).unwrap());
    // the occupied cell itself is not an adjacency target
    assert!(!is_adjacent_to_occupied(&grid, 5, 5).unwrap());
}

#[test]
fn adjacency_clips_neighbors_at_the_edge() {
    let mut grid = Grid::new();
    grid.set(0, 0, Some(Token::new(4, PlayerColor::Blue))).unwrap();

    assert!(is_adjacent_to_occupied(&grid, 0, 1).unwrap());
    assert!(is_adjacent_to_occupied(&grid, 1, 1).unwrap());
    assert!(!is_adjacent_to_occupied(&grid, 2, 2).unwrap());
}

#[test]
fn overwrite_needs_a_strictly_higher_value() {
    let game = Game::new(GameOptions::default(), 3);
    rig_turn(&game, PlayerColor::Red, 3);
    rig_deck(&game, PlayerColor::Green, &[2]);
    game.place(5, 5).unwrap();

    rig_deck(&game, PlayerColor::Yellow, &[5]);
    game.place(5, 6).unwrap();

    // yellow's 5 tops green's 2 in place
    rig_deck(&game, PlayerColor::Blue, &[7]);
    let outcome = game.place(5, 6).unwrap();
    assert!(matches!(outcome, MoveOutcome::TurnChanged { .. }));
    assert_eq!(game.value_at(5, 6).unwrap(), Some(5));
    assert_eq!(game.color_at(5, 6).unwrap(), Some(PlayerColor::Yellow));

    // an equal value is not enough
    rig_turn(&game, PlayerColor::Blue, 5);
    assert_eq!(game.place(5, 6).unwrap_err(), PlaceError::InvalidMove);
}

#[test]
fn overwrite_ignores_adjacency() {
    let game = Game::new(GameOptions::default(), 4);
    put(&game, 5, 5, 4, PlayerColor::Red);
    put(&game, 0, 0, 1, PlayerColor::Green);
    rig_turn(&game, PlayerColor::Yellow, 9);
    rig_deck(&game, PlayerColor::Blue, &[6]);

    // (0, 0) has no occupied neighbor, but holds a lower card
    let outcome = game.place(0, 0).unwrap();
    assert!(matches!(outcome, MoveOutcome::TurnChanged { .. }));
    assert_eq!(game.value_at(0, 0).unwrap(), Some(9));
    assert_eq!(game.color_at(0, 0).unwrap(), Some(PlayerColor::Yellow));
}

#[test]
fn four_in_a_row_wins_on_every_axis() {
    for (dx, dy) in [(1_isize, 0_isize), (0, 1), (1, 1), (1, -1)] {
        let mut grid = Grid::new();
        for step in 0..4 {
            let x = usize::try_from(5 + dx * step).unwrap();
            let y = usize::try_from(5 + dy * step).unwrap();
            grid.set(x, y, Some(Token::new(3, PlayerColor::Blue))).unwrap();
        }

        assert!(has_won(&grid, PlayerColor::Blue), "axis ({dx}, {dy})");
        assert!(!has_won(&grid, PlayerColor::Red));
        assert!(!has_won(&grid, PlayerColor::Green));
        assert!(!has_won(&grid, PlayerColor::Yellow));
    }
}

#[test]
fn three_in_a_row_does_not_win() {
    let mut grid = Grid::new();
    for x in 5..8 {
        grid.set(x, 5, Some(Token::new(3, PlayerColor::Red))).unwrap();
    }
    assert!(!has_won(&grid, PlayerColor::Red));

    // a foreign token does not extend the run
    grid.set(8, 5, Some(Token::new(2, PlayerColor::Green))).unwrap();
    assert!(!has_won(&grid, PlayerColor::Red));
}

#[test]
fn runs_longer_than_four_are_detected() {
    let mut grid = Grid::new();
    for x in 2..7 {
        grid.set(x, 8, Some(Token::new(6, PlayerColor::Green))).unwrap();
    }
    assert!(has_won(&grid, PlayerColor::Green));
}

#[test]
fn completing_a_run_ends_the_game() {
    let game = Game::new(GameOptions::default(), 9);
    put(&game, 5, 5, 3, PlayerColor::Red);
    put(&game, 6, 5, 1, PlayerColor::Red);
    put(&game, 7, 5, 9, PlayerColor::Red);
    rig_turn(&game, PlayerColor::Red, 2);

    let outcome = game.place(8, 5).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Won {
            cell: CellUpdate {
                x: 8,
                y: 5,
                value: 2,
                color: PlayerColor::Red,
            },
            winner: PlayerColor::Red,
        }
    );
    assert_eq!(game.state(), GameState::Won(PlayerColor::Red));
    assert_eq!(game.winner(), Some(PlayerColor::Red));

    assert_eq!(game.place(8, 6).unwrap_err(), PlaceError::GameOver);
}

#[test]
fn turns_rotate_through_the_fixed_color_order() {
    let game = Game::new(GameOptions::default(), 2);
    rig_turn(&game, PlayerColor::Red, 1);

    // adjacent placements that never align four of one color
    let cells = [
        (5, 5),
        (5, 6),
        (6, 5),
        (6, 6),
        (4, 4),
        (4, 5),
        (5, 4),
        (6, 4),
    ];
    let mut expected = PlayerColor::Red;
    for (x, y) in cells {
        assert_eq!(game.current_player(), expected);
        rig_deck(&game, expected.next(), &[1]);
        game.place(x, y).unwrap();
        expected = expected.next();
    }
    assert_eq!(game.current_player(), PlayerColor::Red);
}

#[test]
fn a_full_deck_drains_to_exactly_two_of_each_value() {
    assert_eq!(standard_deck().len(), DECK_SIZE);

    let mut rng = ChaCha8Rng::seed_from_u64(123);
    let mut deck = standard_deck();
    let mut counts = [0_usize; 10];

    while let Some(card) = draw_card(&mut deck, &mut rng, DrawMode::Classic) {
        counts[card as usize] += 1;
    }

    assert!(deck.is_empty());
    assert_eq!(counts[0], 0);
    for value in 1..=9 {
        assert_eq!(counts[value], 2, "value {value}");
    }
}

#[test]
fn classic_draw_saves_the_back_card_for_last() {
    for seed in 0..32 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = vec![5, 9];

        assert_eq!(draw_card(&mut deck, &mut rng, DrawMode::Classic), Some(5));
        assert_eq!(draw_card(&mut deck, &mut rng, DrawMode::Classic), Some(9));
        assert!(draw_card(&mut deck, &mut rng, DrawMode::Classic).is_none());
    }
}

#[test]
fn classic_draw_never_picks_the_back_card_early() {
    for seed in 0..64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = vec![7, 8, 9];
        let first = draw_card(&mut deck, &mut rng, DrawMode::Classic).unwrap();
        assert_ne!(first, 9, "seed {seed}");
    }
}

#[test]
fn uniform_draw_reaches_the_back_card() {
    let mut saw_back_card = false;
    for seed in 0..64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = vec![7, 8, 9];
        if draw_card(&mut deck, &mut rng, DrawMode::Uniform) == Some(9) {
            saw_back_card = true;
        }
    }
    assert!(saw_back_card);
}

#[test]
fn an_empty_next_deck_ends_the_game() {
    let game = Game::new(GameOptions::default(), 8);
    rig_turn(&game, PlayerColor::Red, 6);
    rig_deck(&game, PlayerColor::Green, &[]);

    let outcome = game.place(CENTER.0, CENTER.1).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::DeckExhausted {
            cell: CellUpdate {
                x: CENTER.0,
                y: CENTER.1,
                value: 6,
                color: PlayerColor::Red,
            },
            player: PlayerColor::Green,
        }
    );
    assert_eq!(game.state(), GameState::DeckExhausted(PlayerColor::Green));
    assert_eq!(game.winner(), None);

    assert_eq!(game.place(5, 6).unwrap_err(), PlaceError::GameOver);
}

#[test]
fn out_of_bounds_coordinates_fail_fast() {
    let game = Game::new(GameOptions::default(), 5);
    assert_eq!(
        game.place(GRID_SIZE, 0).unwrap_err(),
        PlaceError::OutOfBounds { x: GRID_SIZE, y: 0 }
    );
    assert_eq!(
        game.value_at(0, GRID_SIZE).unwrap_err(),
        GridError::OutOfBounds { x: 0, y: GRID_SIZE }
    );

    let grid = Grid::new();
    assert_eq!(
        grid.get(GRID_SIZE, GRID_SIZE).unwrap_err(),
        GridError::OutOfBounds {
            x: GRID_SIZE,
            y: GRID_SIZE,
        }
    );
    assert!(is_legal_placement(&grid, 0, GRID_SIZE, 5).is_err());
}

#[test]
fn a_rejected_move_leaves_the_game_untouched() {
    let game = Game::new(GameOptions::default(), 7);
    rig_turn(&game, PlayerColor::Red, 3);
    rig_deck(&game, PlayerColor::Green, &[4]);
    game.place(CENTER.0, CENTER.1).unwrap();

    let board_before = game.board();
    let turn_before = game.turn();
    let decks_before: Vec<usize> = PlayerColor::ALL
        .iter()
        .map(|&color| game.cards_remaining(color))
        .collect();

    assert_eq!(game.place(0, 0).unwrap_err(), PlaceError::InvalidMove);

    assert_eq!(game.board(), board_before);
    assert_eq!(game.turn(), turn_before);
    let decks_after: Vec<usize> = PlayerColor::ALL
        .iter()
        .map(|&color| game.cards_remaining(color))
        .collect();
    assert_eq!(decks_after, decks_before);
    assert_eq!(game.state(), GameState::AwaitingMove);
}

#[test]
fn reset_restores_a_fresh_game() {
    let game = Game::new(GameOptions::default(), 6);
    rig_turn(&game, PlayerColor::Red, 2);
    rig_deck(&game, PlayerColor::Green, &[9]);
    game.place(CENTER.0, CENTER.1).unwrap();
    assert!(!game.is_board_empty());

    game.reset();

    assert!(game.is_board_empty());
    assert_eq!(game.state(), GameState::AwaitingMove);
    assert_eq!(game.current_player(), PlayerColor::Red);
    assert!((MIN_CARD..=MAX_CARD).contains(&game.card_in_hand()));
    assert_eq!(game.cards_remaining(PlayerColor::Red), DECK_SIZE - 1);
    for color in [PlayerColor::Green, PlayerColor::Yellow, PlayerColor::Blue] {
        assert_eq!(game.cards_remaining(color), DECK_SIZE);
    }
}

#[test]
fn options_builder_sets_fields() {
    assert_eq!(GameOptions::default().draw, DrawMode::Classic);

    let options = GameOptions::default().with_draw(DrawMode::Uniform);
    assert_eq!(options.draw, DrawMode::Uniform);
}
