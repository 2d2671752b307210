//! Integration tests for a game wrapped in undo/redo history.
//!
//! Every test builds a board from a one-row text map, plays moves through
//! [`UndoableGame`], and checks what undo and redo bring back: positions,
//! points, alive flags, food, and ghost positions.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use rewind_board::{Board, BoardError, Game, MoveOutcome, RulesConfig, Sprite, UndoableGame};
use rewind_history::{ActorTimer, HistoryConfig, UndoControls};
use rewind_types::{ActorId, Direction, Position, SpriteKind};

fn play(row: &str) -> UndoableGame {
    let game = Game::from_map(&[row], &RulesConfig::default()).unwrap();
    UndoableGame::new(game, &HistoryConfig::default())
}

fn board(game: &UndoableGame) -> &Board {
    game.simulation().board()
}

fn at(x: usize) -> Position {
    Position::new(x, 0)
}

fn player_at(game: &UndoableGame) -> Position {
    game.simulation().player().position
}

fn points(game: &UndoableGame) -> u32 {
    game.simulation().player().points
}

fn alive(game: &UndoableGame) -> bool {
    game.simulation().player().alive
}

fn ghost_in(game: &UndoableGame) -> ActorId {
    *board(game).ghost_ids().first().unwrap()
}

fn move_ghost(game: &mut UndoableGame, ghost: ActorId, direction: Direction) {
    game.move_unrecorded(ghost, direction).unwrap();
}

fn step(game: &mut UndoableGame, direction: Direction, times: usize) {
    for _ in 0..times {
        game.move_player(direction);
    }
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

#[test]
fn fresh_game_has_no_history() {
    let game = play("P");
    assert_eq!(board(&game).sprite_kind_at(at(0)), Some(SpriteKind::Player));
    assert_eq!(points(&game), 0);
    assert!(alive(&game));
    assert!(!game.can_undo());
    assert!(!game.can_redo());
}

#[test]
fn undo_and_redo_availability_follow_moves() {
    let mut game = play("P #");
    game.move_player(Direction::Right);
    assert!(game.can_undo());
    assert!(!game.can_redo());

    assert!(game.undo());
    assert!(!game.can_undo());
    assert!(game.can_redo());
}

#[test]
fn undo_before_any_move_changes_nothing() {
    let mut game = play("P");
    let before = board(&game).clone();
    assert!(!game.undo());
    assert_eq!(board(&game), &before);
}

// ---------------------------------------------------------------------------
// Blocked moves
// ---------------------------------------------------------------------------

#[test]
fn walking_into_a_wall_records_nothing() {
    let mut game = play("P#");
    game.move_player(Direction::Right);
    assert_eq!(player_at(&game), at(0));
    assert!(!game.can_undo());
}

#[test]
fn blocked_move_between_real_moves_is_skipped_by_undo() {
    let mut game = play("P #");
    game.move_player(Direction::Right);
    assert_eq!(player_at(&game), at(1));
    game.move_player(Direction::Right);
    assert_eq!(player_at(&game), at(1));

    assert!(game.undo());
    assert_eq!(player_at(&game), at(0));
    assert!(!game.can_undo());
}

// ---------------------------------------------------------------------------
// Food and points
// ---------------------------------------------------------------------------

#[test]
fn undo_returns_eaten_food_and_points() {
    let mut game = play("P.#");
    game.move_player(Direction::Right);
    assert_eq!(points(&game), 10);
    assert_eq!(board(&game).sprite_at(at(1)), Some(&Sprite::Player));
    assert_eq!(board(&game).remaining_food(), 0);

    assert!(game.undo());
    assert_eq!(points(&game), 0);
    assert_eq!(board(&game).sprite_at(at(0)), Some(&Sprite::Player));
    assert_eq!(board(&game).sprite_kind_at(at(1)), Some(SpriteKind::Food));
    assert_eq!(board(&game).remaining_food(), 1);
}

#[test]
fn open_space_then_food_round_trip() {
    let mut game = play("P .#");
    game.move_player(Direction::Right);
    game.move_player(Direction::Right);
    assert_eq!(player_at(&game), at(2));
    assert_eq!(points(&game), 10);

    assert!(game.undo());
    assert_eq!(player_at(&game), at(1));
    assert_eq!(points(&game), 0);

    assert!(game.redo());
    assert_eq!(player_at(&game), at(2));
    assert_eq!(points(&game), 10);
}

#[test]
fn undo_then_redo_restores_the_exact_board() {
    let mut game = play("#P..G.#");
    step(&mut game, Direction::Right, 2);
    let before = board(&game).clone();

    assert!(game.undo());
    assert_ne!(board(&game), &before);
    assert!(game.redo());
    assert_eq!(board(&game), &before);
}

#[test]
fn undoing_every_move_restores_the_start() {
    let mut game = play("#P.. ..#");
    let start = board(&game).clone();
    step(&mut game, Direction::Right, 5);
    assert_eq!(points(&game), 40);

    for _ in 0..5 {
        assert!(game.undo());
    }
    assert!(!game.undo());
    assert_eq!(board(&game), &start);
}

// ---------------------------------------------------------------------------
// Death
// ---------------------------------------------------------------------------

#[test]
fn undo_revives_player_who_walked_into_ghost() {
    let mut game = play("PG");
    game.move_player(Direction::Right);
    assert_eq!(board(&game).sprite_kind_at(at(1)), Some(SpriteKind::Player));
    assert!(!alive(&game));

    assert!(game.undo());
    assert_eq!(board(&game).sprite_kind_at(at(0)), Some(SpriteKind::Player));
    assert!(alive(&game));
}

#[test]
fn ghost_kill_alone_cannot_be_undone() {
    let mut game = play("PG#");
    let ghost = ghost_in(&game);

    move_ghost(&mut game, ghost, Direction::Left);
    assert!(!alive(&game));
    assert_eq!(board(&game).ghost_position(ghost), Some(at(0)));

    assert!(!game.undo());
    assert!(!alive(&game));
    assert_eq!(board(&game).ghost_position(ghost), Some(at(0)));
}

#[test]
fn undo_reverts_ghost_moves_since_the_last_player_move() {
    let mut game = play("P.G");
    let ghost = ghost_in(&game);

    game.move_player(Direction::Right);
    move_ghost(&mut game, ghost, Direction::Left);
    assert!(!alive(&game));
    assert_eq!(board(&game).ghost_position(ghost), Some(at(1)));

    assert!(game.undo());
    assert!(alive(&game));
    assert_eq!(board(&game).ghost_position(ghost), Some(at(2)));
    assert_eq!(player_at(&game), at(0));
    assert_eq!(board(&game).sprite_kind_at(at(1)), Some(SpriteKind::Food));
}

#[test]
fn ghost_wandering_over_food_creates_no_history() {
    let mut game = play("G.#P");
    let ghost = ghost_in(&game);

    move_ghost(&mut game, ghost, Direction::Right);
    assert_eq!(board(&game).ghost_position(ghost), Some(at(1)));
    move_ghost(&mut game, ghost, Direction::Left);

    assert!(!game.can_undo());
    assert_eq!(board(&game).ghost_position(ghost), Some(at(0)));
    assert_eq!(board(&game).sprite_kind_at(at(1)), Some(SpriteKind::Food));
}

#[test]
fn player_cannot_move_through_the_unrecorded_path() {
    let mut game = play("P.#");
    let player = game.simulation().player().id;

    assert_eq!(
        game.move_unrecorded(player, Direction::Right),
        Err(BoardError::UnknownGhost(player))
    );
    assert_eq!(player_at(&game), at(0));
    assert_eq!(points(&game), 0);
    assert_eq!(board(&game).sprite_kind_at(at(1)), Some(SpriteKind::Food));
    assert!(!game.can_undo());
}

#[test]
fn ghost_against_a_wall_stays_put() {
    let mut game = play("P#G");
    let ghost = ghost_in(&game);
    assert_eq!(
        game.move_unrecorded(ghost, Direction::Left),
        Ok(MoveOutcome::Blocked)
    );
    assert_eq!(board(&game).ghost_position(ghost), Some(at(2)));
}

// ---------------------------------------------------------------------------
// Branching
// ---------------------------------------------------------------------------

#[test]
fn moving_after_undo_discards_redo_branch() {
    let mut game = play("P   #");
    step(&mut game, Direction::Right, 3);
    assert!(game.undo());
    assert!(game.undo());
    assert!(game.can_redo());

    game.move_player(Direction::Left);
    assert!(!game.can_redo());
    assert_eq!(player_at(&game), at(0));

    assert!(game.undo());
    assert_eq!(player_at(&game), at(1));
    assert!(game.undo());
    assert_eq!(player_at(&game), at(0));
    assert!(!game.can_undo());
}

#[test]
fn blocked_move_after_undo_keeps_redo_branch() {
    let mut game = play("#P  ");
    step(&mut game, Direction::Right, 2);
    assert!(game.undo());
    assert!(game.undo());

    game.move_player(Direction::Left);
    assert!(game.can_redo());
    assert!(game.redo());
    assert_eq!(player_at(&game), at(2));
}

#[test]
fn long_session_of_undos_and_redos() {
    let mut game = play("#. P ... ..G#");
    assert_eq!(player_at(&game), at(3));
    assert_eq!(points(&game), 0);

    step(&mut game, Direction::Right, 2);
    assert_eq!(player_at(&game), at(5));
    assert_eq!(points(&game), 10);

    assert!(game.undo());
    assert_eq!(player_at(&game), at(4));
    assert_eq!(points(&game), 0);

    assert!(game.redo());
    assert_eq!(player_at(&game), at(5));
    assert_eq!(points(&game), 10);

    step(&mut game, Direction::Right, 6);
    assert_eq!(player_at(&game), at(11));
    assert_eq!(board(&game).sprite_kind_at(at(11)), Some(SpriteKind::Player));
    assert!(!alive(&game));
    assert_eq!(points(&game), 50);

    for _ in 0..3 {
        assert!(game.undo());
    }
    assert_eq!(player_at(&game), at(8));
    assert_eq!(points(&game), 30);
    assert!(alive(&game));

    assert!(game.redo());
    assert!(game.redo());
    assert_eq!(player_at(&game), at(10));
    assert_eq!(points(&game), 50);

    step(&mut game, Direction::Left, 9);
    assert_eq!(player_at(&game), at(1));
    assert_eq!(points(&game), 60);
    assert!(game.simulation().is_won());
    assert!(!game.can_redo());
}

// ---------------------------------------------------------------------------
// Presentation hooks
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Panel {
    undo: bool,
    redo: bool,
    timer_stops: u32,
    redraws: u32,
}

struct PanelControls(Rc<RefCell<Panel>>);

impl UndoControls for PanelControls {
    fn set_undo_enabled(&mut self, enabled: bool) {
        self.0.borrow_mut().undo = enabled;
    }

    fn set_redo_enabled(&mut self, enabled: bool) {
        self.0.borrow_mut().redo = enabled;
    }
}

struct PanelTimer(Rc<RefCell<Panel>>);

impl ActorTimer for PanelTimer {
    fn stop(&mut self) {
        let mut panel = self.0.borrow_mut();
        panel.timer_stops = panel.timer_stops.saturating_add(1);
    }
}

#[test]
fn buttons_and_timer_track_the_history() {
    let panel = Rc::new(RefCell::new(Panel::default()));
    let game = Game::from_map(&["P  #"], &RulesConfig::default()).unwrap();
    let mut game = UndoableGame::new(game, &HistoryConfig::default())
        .with_timer(Box::new(PanelTimer(Rc::clone(&panel))))
        .with_controls(Box::new(PanelControls(Rc::clone(&panel))));
    let redraws = Rc::clone(&panel);
    game.add_viewer(Box::new(move |_: &Board| {
        let mut panel = redraws.borrow_mut();
        panel.redraws = panel.redraws.saturating_add(1);
    }));

    game.move_player(Direction::Right);
    assert!(panel.borrow().undo);
    assert!(!panel.borrow().redo);
    assert_eq!(panel.borrow().timer_stops, 0);

    assert!(game.undo());
    assert!(!panel.borrow().undo);
    assert!(panel.borrow().redo);
    assert_eq!(panel.borrow().timer_stops, 1);

    assert!(game.redo());
    assert!(panel.borrow().undo);
    assert!(!panel.borrow().redo);
    assert_eq!(panel.borrow().timer_stops, 2);

    assert_eq!(panel.borrow().redraws, 3);
}
