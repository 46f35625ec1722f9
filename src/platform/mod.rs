//! Platform abstraction layer
//!
//! The simulation talks to the outside world through three collaborators:
//! - `InputHandler`: per-frame button state
//! - `Renderer`: draws a read-only view of the game
//! - `ParticleController`: thrust plume and explosion effects
//!
//! Headless implementations live in `headless` (tests) and `autopilot`
//! (demo runner).

pub mod autopilot;
pub mod headless;

use crate::highscores::DISPLAYED_HIGH_SCORES;
use crate::menu::MenuScreen;
use crate::settings::ControlScheme;
use crate::sim::{Craft, GamePhase, GameState, Terrain, TickInput};

/// Source of per-frame input
pub trait InputHandler {
    /// Install the key bindings loaded at startup
    fn apply_control_scheme(&mut self, scheme: &ControlScheme);
    /// Sample the buttons pressed this frame
    fn poll(&mut self) -> TickInput;
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderView<'a> {
    pub phase: GamePhase,
    pub menu_screen: MenuScreen,
    pub craft: &'a Craft,
    pub thrust_on: bool,
    pub in_safe_area: bool,
    pub terrain: &'a Terrain,
    /// Terrain changed since the previous frame; rebuild any cached geometry
    pub terrain_regenerated: bool,
    pub running_score: f32,
    pub loading_time: f32,
    /// Best scores, best first
    pub high_scores: &'a [f32],
}

impl<'a> RenderView<'a> {
    pub fn new(state: &'a GameState, terrain_regenerated: bool) -> Self {
        Self {
            phase: state.phase,
            menu_screen: state.menu.screen,
            craft: &state.craft,
            thrust_on: state.thrust_on,
            in_safe_area: state.in_safe_area,
            terrain: &state.terrain,
            terrain_regenerated,
            running_score: state.running_score,
            loading_time: state.loading_time,
            high_scores: state.high_scores.top(DISPLAYED_HIGH_SCORES),
        }
    }
}

/// Draws the game; owns all board-unit to pixel mapping
pub trait Renderer {
    fn render(&mut self, view: &RenderView<'_>);
}

/// Visual particle effects. Receives events only; never feeds back.
pub trait ParticleController {
    /// Engine plume for this frame
    fn ship_thrust(&mut self, dt: f32, craft: &Craft, thrust_on: bool);
    /// Explosion for this frame
    fn ship_crash(&mut self, dt: f32, craft: &Craft);
    fn clear_all(&mut self);
}
