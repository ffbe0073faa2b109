//! UI-facing game controller.
//!
//! Drives the menu/play/post-game lifecycle around a [`GridEngine`]:
//!
//! ```text
//! Menu -> Playing -> Finished(Win | Loss) -> Menu | Playing
//! ```
//!
//! Every call is a complete state transition. Failed loads and saves leave
//! the current game exactly as it was.
//!
//! ```
//! use more_or_less::core::{Position, ScriptedRandom, Settings};
//! use more_or_less::game::{GameController, Phase};
//!
//! let mut controller = GameController::new(ScriptedRandom::new([3, 1]));
//! controller.start_new_game(Settings::new(2, 2, 1, 0)).unwrap();
//!
//! controller.select_cell(0, 0).unwrap();
//! let report = controller.select_cell(0, 1).unwrap();
//! assert!(report.outcome.is_some());
//! assert!(matches!(controller.phase(), Phase::Finished(_)));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::core::{GameRng, GameState, Operator, Position, RandomSource, Settings};
use crate::engine::{Availability, GridEngine, MoveReport};
use crate::error::{GameError, Result};
use crate::persistence::{PersistenceCodec, DEFAULT_SAVE_FILE};
use crate::rules::Outcome;

/// Where the player is in the game lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    Finished(Outcome),
}

/// Orchestrates engine, settings and persistence for one player.
#[derive(Debug)]
pub struct GameController<R = GameRng> {
    rng: R,
    settings: Settings,
    engine: Option<GridEngine>,
    save_path: PathBuf,
}

impl GameController<GameRng> {
    /// Controller with an entropy-seeded RNG.
    #[must_use]
    pub fn with_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl Default for GameController<GameRng> {
    fn default() -> Self {
        Self::with_entropy()
    }
}

impl<R: RandomSource> GameController<R> {
    /// Controller at the menu with default settings.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            settings: Settings::default(),
            engine: None,
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
        }
    }

    /// Use `path` for [`save_and_quit`](Self::save_and_quit) and
    /// [`load_saved`](Self::load_saved) instead of [`DEFAULT_SAVE_FILE`].
    #[must_use]
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    #[must_use]
    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.engine {
            None => Phase::Menu,
            Some(engine) => match engine.outcome() {
                Some(outcome) => Phase::Finished(outcome),
                None => Phase::Playing,
            },
        }
    }

    /// Settings of the current game, or the ones the menu will offer next.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Live state while playing or on the post-game screen.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.engine.as_ref().map(GridEngine::state)
    }

    /// Start a fresh random game.
    ///
    /// Invalid settings are rejected and the current phase is kept.
    pub fn start_new_game(&mut self, settings: Settings) -> Result<&GameState> {
        let engine = GridEngine::start(settings, &mut self.rng)?;
        info!(
            "new game: {}x{}, {} moves, target {}",
            settings.rows, settings.cols, settings.moves_total, settings.target
        );
        self.settings = settings;
        Ok(self.install(engine))
    }

    /// New random grid with the last settings.
    pub fn play_again(&mut self) -> Result<&GameState> {
        self.start_new_game(self.settings)
    }

    /// Install a prepared state as the game in progress.
    pub fn resume(&mut self, state: GameState) -> &GameState {
        self.settings = *state.settings();
        self.install(GridEngine::new(state))
    }

    /// Discard any game and show the menu with the last settings.
    pub fn return_to_menu(&mut self) {
        self.engine = None;
    }

    /// Apply a click on `(row, col)`.
    pub fn select_cell(&mut self, row: usize, col: usize) -> Result<MoveReport> {
        let engine = self.engine.as_mut().ok_or(GameError::NoActiveGame)?;
        let report = engine.select_cell(Position::new(row, col), &mut self.rng)?;
        if let Some(outcome) = report.outcome {
            info!("{}", outcome.message());
        }
        Ok(report)
    }

    /// Grid sum of the current game.
    #[must_use]
    pub fn current_sum(&self) -> Option<i64> {
        self.state().map(GameState::current_sum)
    }

    /// Operators shown in the side panel.
    #[must_use]
    pub fn visible_operators(&self) -> Vec<Operator> {
        self.state()
            .map(GameState::visible_operators)
            .unwrap_or_default()
    }

    /// Cells enabled for the next click.
    #[must_use]
    pub fn available(&self) -> Availability {
        self.engine
            .as_ref()
            .map(|engine| engine.available().clone())
            .unwrap_or_default()
    }

    /// Whether `(row, col)` accepts the next click.
    #[must_use]
    pub fn is_enabled(&self, row: usize, col: usize) -> bool {
        self.engine
            .as_ref()
            .is_some_and(|engine| engine.is_enabled(Position::new(row, col)))
    }

    /// Serialize the game in progress. Play continues afterwards.
    pub fn save_game(&mut self) -> Result<String> {
        let engine = self.engine.as_mut().filter(|engine| !engine.is_finished());
        let engine = engine.ok_or(GameError::NoActiveGame)?;
        engine.state_mut().materialize_operators(&mut self.rng);
        Ok(PersistenceCodec::encode(engine.state()))
    }

    /// Save & Quit: write the game to `path`, then return to the menu.
    ///
    /// On failure the game stays in progress.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.save_game()?;
        fs::write(path, text)?;
        info!("saved game to {}", path.display());
        self.return_to_menu();
        Ok(())
    }

    /// Replace the current game with one decoded from `text`.
    ///
    /// Nothing changes unless the whole text decodes.
    pub fn load_game(&mut self, text: &str) -> Result<&GameState> {
        let state = PersistenceCodec::decode(text).map_err(|err| {
            warn!("rejected save: {err}");
            err
        })?;
        info!("loaded game with {} moves left", state.moves_remaining());
        Ok(self.resume(state))
    }

    /// Load a save file. I/O and parse failures leave the current game intact.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<&GameState> {
        let text = fs::read_to_string(path)?;
        self.load_game(&text)
    }

    /// Whether `text` would load, without applying it.
    #[must_use]
    pub fn can_load(text: &str) -> bool {
        PersistenceCodec::can_load(text)
    }

    /// Whether the file at `path` exists and would load.
    #[must_use]
    pub fn can_load_file(path: impl AsRef<Path>) -> bool {
        fs::read_to_string(path)
            .map(|text| PersistenceCodec::can_load(&text))
            .unwrap_or(false)
    }

    /// Save & Quit to the configured save path.
    pub fn save_and_quit(&mut self) -> Result<()> {
        let path = self.save_path.clone();
        self.save_to_file(path)
    }

    /// Load the game stored at the configured save path.
    pub fn load_saved(&mut self) -> Result<&GameState> {
        let path = self.save_path.clone();
        self.load_from_file(path)
    }

    /// Whether the menu should offer "Load Game".
    #[must_use]
    pub fn saved_game_available(&self) -> bool {
        Self::can_load_file(&self.save_path)
    }

    fn install(&mut self, engine: GridEngine) -> &GameState {
        self.engine.insert(engine).state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRandom;

    #[test]
    fn test_starts_at_menu() {
        let controller = GameController::new(ScriptedRandom::default());
        assert_eq!(controller.phase(), Phase::Menu);
        assert_eq!(controller.settings(), &Settings::default());
        assert_eq!(controller.current_sum(), None);
        assert!(controller.visible_operators().is_empty());
        assert!(controller.available().is_empty());
        assert!(!controller.is_enabled(0, 0));
        assert_eq!(controller.save_path(), Path::new(DEFAULT_SAVE_FILE));
    }

    #[test]
    fn test_start_new_game() {
        let mut controller = GameController::new(GameRng::new(42));
        let state = controller.start_new_game(Settings::new(4, 3, 12, 30)).unwrap();

        assert_eq!(state.grid().len(), 12);
        assert_eq!(state.moves_remaining(), 12);
        assert_eq!(controller.phase(), Phase::Playing);
        assert_eq!(controller.visible_operators().len(), 4);
        assert_eq!(controller.available().len(), 12);
    }

    #[test]
    fn test_invalid_settings_keep_phase() {
        let mut controller = GameController::new(GameRng::new(42));
        assert!(matches!(
            controller.start_new_game(Settings::new(1, 4, 10, 10)),
            Err(GameError::InvalidDimensions { .. })
        ));
        assert_eq!(controller.phase(), Phase::Menu);
        assert_eq!(controller.settings(), &Settings::default());
    }

    #[test]
    fn test_select_without_game() {
        let mut controller = GameController::new(ScriptedRandom::default());
        assert!(matches!(
            controller.select_cell(0, 0),
            Err(GameError::NoActiveGame)
        ));
        assert!(matches!(controller.save_game(), Err(GameError::NoActiveGame)));
    }

    #[test]
    fn test_play_again_keeps_settings() {
        let mut controller = GameController::new(GameRng::new(7));
        let settings = Settings::new(3, 3, 5, 40);
        controller.start_new_game(settings).unwrap();
        controller.return_to_menu();
        assert_eq!(controller.phase(), Phase::Menu);

        controller.play_again().unwrap();
        assert_eq!(controller.settings(), &settings);
        assert_eq!(controller.phase(), Phase::Playing);
    }

    #[test]
    fn test_save_materializes_full_queue() {
        let mut controller = GameController::new(GameRng::new(9));
        controller.start_new_game(Settings::new(2, 2, 6, 99)).unwrap();

        let text = controller.save_game().unwrap();
        let ops_line = text.lines().last().unwrap();

        assert_eq!(ops_line.split('|').count(), 6);
        assert_eq!(controller.phase(), Phase::Playing);
        assert_eq!(controller.visible_operators().len(), 2);
    }

    #[test]
    fn test_save_and_quit_then_load_saved() {
        let path = std::env::temp_dir().join(format!(
            "more-or-less-controller-{}.txt",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let mut controller = GameController::new(GameRng::new(11)).with_save_path(&path);
        assert!(!controller.saved_game_available());

        controller.start_new_game(Settings::new(3, 2, 8, 25)).unwrap();
        assert!(controller.is_enabled(2, 1));
        let sum = controller.current_sum();

        controller.save_and_quit().unwrap();
        assert_eq!(controller.phase(), Phase::Menu);
        assert!(controller.saved_game_available());

        let state = controller.load_saved().unwrap();
        assert_eq!(state.moves_remaining(), 8);
        assert_eq!(controller.current_sum(), sum);
        assert_eq!(controller.phase(), Phase::Playing);

        fs::remove_file(&path).unwrap();
    }
}
