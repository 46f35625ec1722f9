//! Per-frame simulation tick
//!
//! One call per rendered frame. Each phase has its own handler; handlers are
//! the only place phase transitions happen.

use super::collision;
use super::craft::DifficultyLevel;
use super::kinematics::{self, Controls, thrust_active};
use super::landing::{self, LandingOutcome};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::LOADING_TIME;
use crate::error::LanderError;
use crate::menu::{self, MenuAction};

/// Countdown remainder treated as zero; absorbs f32 drift from summing frame steps
const TIMER_EPSILON: f32 = 1e-4;

/// Input signals for a single tick ("pressed" this frame)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Thrust / turn buttons held
    pub controls: Controls,
    /// Pause button
    pub pause: bool,
    /// Menu button pressed this frame, if any
    pub menu: Option<MenuAction>,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Result<(), LanderError> {
    match state.phase {
        GamePhase::MainMenu => menu::process_main_menu(state, input.menu)?,
        GamePhase::Running => tick_running(state, input, dt),
        GamePhase::Paused => menu::process_pause_menu(state, input.menu, input.pause),
        GamePhase::ShipCrashed => tick_ship_crashed(state, input),
        GamePhase::PassedLevel => tick_passed_level(state, dt)?,
        GamePhase::BeatGame => tick_beat_game(state, input),
    }
    Ok(())
}

/// Fly the craft and judge the first terrain contact
fn tick_running(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.pause {
        menu::open_pause_menu(state);
        return;
    }

    let thrust_on = thrust_active(&state.craft, &input.controls);
    state.craft = kinematics::step(&state.craft, &input.controls, dt);
    state.thrust_on = thrust_on;
    state.push_event(GameEvent::Thrust { on: thrust_on });

    state.in_safe_area = landing::within_safe_zone(&state.craft, &state.terrain.safe_zones);

    if !collision::detect(&state.craft, &state.terrain.points) {
        return;
    }

    match landing::evaluate(&state.craft, &state.terrain.safe_zones) {
        LandingOutcome::Safe => land_safely(state),
        LandingOutcome::Fatal => {
            log::info!(
                "Crashed on level {} (speed {:.2}, angle {:.1}°, in zone: {})",
                state.current_level.number(),
                state.craft.speed,
                state.craft.orientation_degrees,
                state.in_safe_area
            );
            state.phase = GamePhase::ShipCrashed;
            state.push_event(GameEvent::Crashed);
        }
    }
}

/// Bank the remaining fuel; level 1 moves on, level 2 ends the game
fn land_safely(state: &mut GameState) {
    state.running_score += state.craft.fuel;
    let level = state.current_level;
    log::info!(
        "Landed level {} with {:.2}s fuel, score {:.2}",
        level.number(),
        state.craft.fuel,
        state.running_score
    );
    state.push_event(GameEvent::Landed {
        level,
        score: state.running_score,
    });

    match level {
        DifficultyLevel::One => {
            state.phase = GamePhase::PassedLevel;
            state.loading_time = LOADING_TIME;
        }
        DifficultyLevel::Two => {
            let rank = state.high_scores.add_score(state.running_score);
            log::info!("New high score entry #{rank}: {:.2}", state.running_score);
            state.push_event(GameEvent::HighScoresChanged);
            state.phase = GamePhase::BeatGame;
        }
    }
}

/// Count down, then start level 2
fn tick_passed_level(state: &mut GameState, dt: f32) -> Result<(), LanderError> {
    state.push_event(GameEvent::Thrust { on: false });
    state.loading_time -= dt;
    if state.loading_time <= TIMER_EPSILON {
        state.start_level(2)?;
        state.push_event(GameEvent::ClearParticles);
    }
    Ok(())
}

fn tick_ship_crashed(state: &mut GameState, input: &TickInput) {
    if input.pause {
        menu::open_main_menu(state);
        return;
    }
    state.push_event(GameEvent::CrashBurst);
    state.push_event(GameEvent::Thrust { on: false });
}

fn tick_beat_game(state: &mut GameState, input: &TickInput) {
    if input.pause {
        menu::open_main_menu(state);
        return;
    }
    state.push_event(GameEvent::Thrust { on: false });
}
