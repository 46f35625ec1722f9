//! Main menu and pause menu processing
//!
//! Menus are driven by discrete button presses from the input handler. The
//! main menu has a few read-only sub-screens; only "New Game" touches the
//! simulation.

use serde::{Deserialize, Serialize};

use crate::error::LanderError;
use crate::sim::state::{GameEvent, GamePhase, GameState};

/// Menu buttons reported by the input handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    NewGame,
    HighScores,
    Controls,
    Credits,
    Back,
    /// Pause menu: continue the level
    Resume,
    /// Pause menu: abandon the level
    Quit,
}

/// Main menu sub-screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MenuScreen {
    #[default]
    Main,
    Controls,
    HighScores,
    Credits,
}

/// Main menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuState {
    pub screen: MenuScreen,
}

/// Switch to the main menu's top screen
pub fn open_main_menu(state: &mut GameState) {
    state.phase = GamePhase::MainMenu;
    state.menu.screen = MenuScreen::Main;
    state.thrust_on = false;
    state.push_event(GameEvent::ClearParticles);
}

/// Open the pause menu over a running level
pub fn open_pause_menu(state: &mut GameState) {
    state.phase = GamePhase::Paused;
}

/// Handle a main menu button press
pub fn process_main_menu(
    state: &mut GameState,
    action: Option<MenuAction>,
) -> Result<(), LanderError> {
    let Some(action) = action else {
        return Ok(());
    };

    match (state.menu.screen, action) {
        (MenuScreen::Main, MenuAction::NewGame) => state.start_level(1)?,
        (MenuScreen::Main, MenuAction::HighScores) => state.menu.screen = MenuScreen::HighScores,
        (MenuScreen::Main, MenuAction::Controls) => state.menu.screen = MenuScreen::Controls,
        (MenuScreen::Main, MenuAction::Credits) => state.menu.screen = MenuScreen::Credits,
        (_, MenuAction::Back) => state.menu.screen = MenuScreen::Main,
        _ => {}
    }
    Ok(())
}

/// Handle the pause menu: resume (or pause pressed again) or quit
pub fn process_pause_menu(state: &mut GameState, action: Option<MenuAction>, pause: bool) {
    match action {
        Some(MenuAction::Quit) => open_main_menu(state),
        Some(MenuAction::Resume) => state.phase = GamePhase::Running,
        _ if pause => state.phase = GamePhase::Running,
        _ => {}
    }
}
