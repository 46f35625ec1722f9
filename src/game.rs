//! Frame controller
//!
//! Owns the game state and its collaborators. Each frame: poll input, tick
//! the sim, forward queued events to particles and persistence. Drawing is
//! a separate call so the platform can skip it.

use crate::consts::MAX_FRAME_DT;
use crate::error::LanderError;
use crate::persistence::PersistenceStore;
use crate::platform::{InputHandler, ParticleController, RenderView, Renderer};
use crate::settings::ControlScheme;
use crate::sim::{GameEvent, GamePhase, GameState, tick};

/// Drives one game from the main menu onward
pub struct LanderGameController {
    state: GameState,
    controls: ControlScheme,
    input: Box<dyn InputHandler>,
    renderer: Box<dyn Renderer>,
    particles: Box<dyn ParticleController>,
    store: Box<dyn PersistenceStore>,
}

impl LanderGameController {
    /// Load persisted data and build a controller at the main menu.
    /// Nothing ticks until both the control scheme and high scores are loaded.
    pub fn new(
        seed: u64,
        mut input: Box<dyn InputHandler>,
        renderer: Box<dyn Renderer>,
        particles: Box<dyn ParticleController>,
        store: Box<dyn PersistenceStore>,
    ) -> Result<Self, LanderError> {
        let controls = store.load_control_scheme()?;
        let high_scores = store.load_high_scores()?;
        log::info!(
            "Loaded {} high scores (best: {:?})",
            high_scores.len(),
            high_scores.top_score()
        );

        input.apply_control_scheme(&controls);

        Ok(Self {
            state: GameState::new(seed, high_scores),
            controls,
            input,
            renderer,
            particles,
            store,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn control_scheme(&self) -> &ControlScheme {
        &self.controls
    }

    /// Replace the key bindings, persist them and hand them to the input handler
    pub fn set_control_scheme(&mut self, scheme: ControlScheme) -> Result<(), LanderError> {
        self.store.save_control_scheme(&scheme)?;
        self.input.apply_control_scheme(&scheme);
        self.controls = scheme;
        Ok(())
    }

    /// Run one frame of simulation
    pub fn update(&mut self, dt: f32) -> Result<(), LanderError> {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        let input = self.input.poll();
        tick(&mut self.state, &input, dt)?;
        self.dispatch_events(dt);
        Ok(())
    }

    /// Render the current frame
    pub fn draw(&mut self) {
        let terrain_regenerated = self.state.take_terrain_regenerated();
        let view = RenderView::new(&self.state, terrain_regenerated);
        self.renderer.render(&view);
    }

    fn dispatch_events(&mut self, dt: f32) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Thrust { on } => {
                    self.particles.ship_thrust(dt, &self.state.craft, on);
                }
                GameEvent::CrashBurst => self.particles.ship_crash(dt, &self.state.craft),
                GameEvent::ClearParticles => self.particles.clear_all(),
                GameEvent::HighScoresChanged => {
                    // A failed save costs the entry, not the session
                    if let Err(e) = self.store.save_high_scores(&self.state.high_scores) {
                        log::warn!("Failed to save high scores: {e}");
                    }
                }
                GameEvent::LevelStarted { .. } | GameEvent::Landed { .. } | GameEvent::Crashed => {}
            }
        }
    }
}
