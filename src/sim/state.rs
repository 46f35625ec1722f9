//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::craft::{Craft, DifficultyLevel};
use super::terrain::{Terrain, generate_terrain};
use crate::consts::*;
use crate::error::LanderError;
use crate::highscores::HighScores;
use crate::menu::MenuState;

/// Current phase of the game. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu (and its sub-screens)
    MainMenu,
    /// Craft in flight
    Running,
    /// Pause menu open over a running level
    Paused,
    /// Crash; waits for the player to return to the menu
    ShipCrashed,
    /// Level 1 cleared, counting down to level 2
    PassedLevel,
    /// Level 2 cleared, score recorded
    BeatGame,
}

/// Side effects produced by a tick, drained by the frame controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A level was (re)started and its terrain regenerated
    LevelStarted { level: DifficultyLevel },
    /// Engine plume state for this tick
    Thrust { on: bool },
    /// Explosion particles for this tick
    CrashBurst,
    /// Remove all particles
    ClearParticles,
    /// Safe landing; `score` is the running score after adding fuel
    Landed { level: DifficultyLevel, score: f32 },
    Crashed,
    /// The high score list changed and should be persisted
    HighScoresChanged,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Terrain RNG, seeded from `seed`
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Menu sub-screen (used while in MainMenu)
    pub menu: MenuState,
    /// Level being played (level 1 before the first game)
    pub current_level: DifficultyLevel,
    pub craft: Craft,
    pub terrain: Terrain,
    /// Fuel carried over from cleared levels
    pub running_score: f32,
    /// Countdown before level 2 starts (seconds)
    pub loading_time: f32,
    pub high_scores: HighScores,
    /// Engine fired during the last Running tick
    pub thrust_on: bool,
    /// Craft is horizontally inside a safe zone (HUD hint)
    pub in_safe_area: bool,
    /// Set when new terrain is generated; cleared by the renderer
    terrain_regenerated: bool,
    /// Events since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state at the main menu
    pub fn new(seed: u64, high_scores: HighScores) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::MainMenu,
            menu: MenuState::default(),
            current_level: DifficultyLevel::One,
            craft: Craft::default(),
            terrain: Terrain::default(),
            running_score: 0.0,
            loading_time: 0.0,
            high_scores,
            thrust_on: false,
            in_safe_area: false,
            terrain_regenerated: false,
            events: Vec::new(),
        }
    }

    /// Reset the craft, regenerate terrain and start flying.
    /// Level 1 also resets the running score.
    pub fn start_level(&mut self, level: u32) -> Result<(), LanderError> {
        let level = DifficultyLevel::try_from(level)?;
        self.terrain = generate_terrain(level, &mut self.rng)?;

        self.craft = Craft::new(Vec2::new(START_POSITION.0, START_POSITION.1));
        if level == DifficultyLevel::One {
            self.running_score = 0.0;
        }
        self.loading_time = 0.0;
        self.current_level = level;
        self.thrust_on = false;
        self.in_safe_area = false;
        self.terrain_regenerated = true;
        self.phase = GamePhase::Running;

        log::info!("Level {} started", level.number());
        self.push_event(GameEvent::LevelStarted { level });
        Ok(())
    }

    /// True if terrain was generated since the last call
    pub fn take_terrain_regenerated(&mut self) -> bool {
        std::mem::take(&mut self.terrain_regenerated)
    }

    pub fn terrain_generated(&self) -> bool {
        !self.terrain.is_empty()
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at pending events
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
