//! Lunar Lander - simulation core for a 2D lander game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, physics, collisions, game state)
//! - `menu`: Main menu and pause menu processing
//! - `platform`: Renderer / input / particle collaborator interfaces
//! - `persistence`: Control scheme and high score storage
//! - `game`: Frame-driven controller wiring the sim to its collaborators

pub mod error;
pub mod game;
pub mod highscores;
pub mod menu;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::LanderError;
pub use game::LanderGameController;
pub use highscores::HighScores;
pub use settings::ControlScheme;

use std::f32::consts::{FRAC_PI_2, TAU};

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Board size in units (and meters); the board is square
    pub const BOARD_SIZE: f32 = 120.0;
    /// Terrain never rises above 80% of the board
    pub const MAX_TERRAIN_HEIGHT: f32 = BOARD_SIZE * 0.8;

    /// Moon gravity (m/s²)
    pub const MOON_GRAVITY: f32 = 1.62;
    /// Main engine acceleration (m/s²)
    pub const THRUST_ACCELERATION: f32 = 7.0;
    /// Turning rate (rad/s)
    pub const TURN_RATE: f32 = 2.0 * PI / 3.0;

    /// Lander defaults
    pub const LANDER_SIZE: f32 = 6.0;
    pub const LANDER_MASS: f32 = 4280.0; // kg
    /// Fuel in seconds of burn time
    pub const START_FUEL: f32 = 20.0;
    pub const START_POSITION: (f32, f32) = (BOARD_SIZE * 0.1, BOARD_SIZE * 0.9);

    /// Safe landing thresholds
    pub const MAX_SPEED: f32 = 4.0;
    pub const MAX_ANGLE: f32 = 5.0; // degrees
    pub const MIN_ANGLE: f32 = 355.0; // degrees

    /// Midpoint displacement roughness (0 = straight lines)
    pub const TERRAIN_ROUGHNESS: f32 = 0.7;
    /// Safe zones keep this fraction of the board clear on each side
    pub const SAFE_ZONE_MARGIN: f32 = 0.15;
    /// Minimum flat height of a safe zone
    pub const MIN_SAFE_ZONE_HEIGHT: f32 = 5.0;
    /// Placement attempts before terrain generation gives up
    pub const MAX_SAFE_ZONE_ATTEMPTS: u32 = 10_000;

    /// Delay between passing level 1 and starting level 2 (seconds)
    pub const LOADING_TIME: f32 = 3.0;

    /// Nominal frame timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta fed to the sim (prevents tunneling after a stall)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert an engine-space angle (0 = up, clockwise positive) to a standard
/// mathematical angle (0 = +x, counter-clockwise positive)
#[inline]
pub fn engine_to_standard(engine_angle: f32) -> f32 {
    -engine_angle + FRAC_PI_2
}
