//! Save/load integration tests.

use std::path::PathBuf;

use more_or_less::core::{GameRng, Settings};
use more_or_less::game::{GameController, Phase};
use more_or_less::persistence::PersistenceCodec;
use more_or_less::GameError;

const VALID_SAVE: &str = "Settings\n3|3|8|40\nMoves left\n6\nButtons\n1|2|3|4|5|6|7|8|9\nNext operators\n+|-|*|/|+|-";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn temp_save_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("more_or_less_{}_{name}.txt", std::process::id()))
}

/// Play a few legal moves so the state is not freshly generated.
fn play_some_moves(controller: &mut GameController) {
    for _ in 0..3 {
        let Some(state) = controller.state() else { return };
        let pos = match state.selection() {
            None => more_or_less::Position::new(0, 0),
            Some(_) => match controller.available().iter().next() {
                Some(pos) => pos,
                None => return,
            },
        };
        if controller.select_cell(pos.row, pos.col).is_err() {
            return;
        }
        if controller.phase() != Phase::Playing {
            return;
        }
    }
}

// =============================================================================
// Round Trip
// =============================================================================

#[test]
fn test_save_then_load_restores_state() {
    init_logging();
    let mut controller = GameController::new(GameRng::new(42));
    controller.start_new_game(Settings::new(5, 4, 40, 400)).unwrap();
    play_some_moves(&mut controller);
    assert_eq!(controller.phase(), Phase::Playing);

    let text = controller.save_game().unwrap();
    let saved = controller.state().unwrap().clone();

    let mut restored = GameController::new(GameRng::new(1));
    let state = restored.load_game(&text).unwrap();

    assert_eq!(state.grid(), saved.grid());
    assert_eq!(state.moves_remaining(), saved.moves_remaining());
    assert_eq!(state.visible_operators(), saved.visible_operators());
    assert_eq!(state.settings(), saved.settings());
    assert_eq!(state.selection(), None);
    assert_eq!(restored.settings(), saved.settings());
    assert_eq!(restored.phase(), Phase::Playing);
}

#[test]
fn test_saving_twice_is_stable() {
    let mut controller = GameController::new(GameRng::new(5));
    controller.start_new_game(Settings::new(2, 2, 9, 30)).unwrap();

    let first = controller.save_game().unwrap();
    let second = controller.save_game().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_loaded_game_is_playable() {
    let mut controller = GameController::new(GameRng::new(3));
    controller.load_game(VALID_SAVE).unwrap();

    assert_eq!(controller.current_sum(), Some(45));
    controller.select_cell(1, 1).unwrap();
    let report = controller.select_cell(1, 2).unwrap();

    // (1,1) = 5 + 6 = 11 -> 1
    assert_eq!(report.resolved.unwrap().result, 1);
    assert_eq!(report.moves_remaining, 5);
}

// =============================================================================
// Corrupt Saves
// =============================================================================

#[test]
fn test_missing_header_leaves_game_untouched() {
    init_logging();
    let mut controller = GameController::new(GameRng::new(42));
    controller.start_new_game(Settings::new(3, 3, 10, 50)).unwrap();
    controller.select_cell(0, 0).unwrap();
    let before = controller.state().unwrap().clone();

    let broken = VALID_SAVE.replace("Buttons\n", "");
    let err = controller.load_game(&broken).unwrap_err();

    assert!(err.is_corrupt_save());
    assert_eq!(controller.state().unwrap(), &before);
    assert_eq!(controller.phase(), Phase::Playing);
    assert_eq!(controller.settings(), &Settings::new(3, 3, 10, 50));
}

#[test]
fn test_failed_load_from_menu_stays_in_menu() {
    let mut controller = GameController::new(GameRng::new(42));
    let err = controller.load_game("Settings\nnot|a|save").unwrap_err();

    assert!(matches!(err, GameError::CorruptSaveFile { .. }));
    assert_eq!(controller.phase(), Phase::Menu);
}

#[test]
fn test_can_load_matches_load() {
    assert!(GameController::<GameRng>::can_load(VALID_SAVE));
    assert!(PersistenceCodec::can_load(VALID_SAVE));

    for broken in [
        VALID_SAVE.replace("Settings", "Setting"),
        VALID_SAVE.replace("Moves left", "Moves"),
        VALID_SAVE.replace("Next operators", "Operators"),
        VALID_SAVE.replace("|9\n", "|\n"),
        VALID_SAVE.replace("\n6\n", "\n6.5\n"),
        String::new(),
    ] {
        assert!(!PersistenceCodec::can_load(&broken), "accepted: {broken:?}");
        let mut controller = GameController::new(GameRng::new(1));
        assert!(controller.load_game(&broken).is_err());
    }
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn test_save_and_quit_round_trip() {
    let path = temp_save_path("round_trip");
    let mut controller = GameController::new(GameRng::new(11));
    controller.start_new_game(Settings::new(4, 4, 20, 70)).unwrap();
    let grid = controller.state().unwrap().grid().clone();

    controller.save_to_file(&path).unwrap();
    assert_eq!(controller.phase(), Phase::Menu);
    assert!(GameController::<GameRng>::can_load_file(&path));

    let state = controller.load_from_file(&path).unwrap();
    assert_eq!(state.grid(), &grid);
    assert_eq!(state.moves_remaining(), 20);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_failed_save_keeps_playing() {
    let dir = std::env::temp_dir().join(format!("more_or_less_{}_missing", std::process::id()));
    let path = dir.join("nested").join("save.txt");
    let mut controller = GameController::new(GameRng::new(11));
    controller.start_new_game(Settings::new(2, 2, 5, 10)).unwrap();

    let err = controller.save_to_file(&path).unwrap_err();

    assert!(matches!(err, GameError::Io(_)));
    assert_eq!(controller.phase(), Phase::Playing);
}

#[test]
fn test_missing_file() {
    let path = temp_save_path("does_not_exist");
    assert!(!GameController::<GameRng>::can_load_file(&path));

    let mut controller = GameController::new(GameRng::new(1));
    assert!(matches!(
        controller.load_from_file(&path),
        Err(GameError::Io(_))
    ));
    assert_eq!(controller.phase(), Phase::Menu);
}
