//! Lunar Lander entry point
//!
//! Runs a headless game flown by the autopilot and prints how it went.
//!
//! Environment:
//! - `LANDER_SEED`: terrain seed (random when unset)
//! - `LANDER_DATA_DIR`: where controls and high scores are kept
//! - `RUST_LOG`: log filter (default `info`)

mod native {
    use std::cell::RefCell;
    use std::rc::Rc;

    use lunar_lander::consts::SIM_DT;
    use lunar_lander::highscores::DISPLAYED_HIGH_SCORES;
    use lunar_lander::persistence::{JsonFileStore, MemoryStore, PersistenceStore};
    use lunar_lander::platform::autopilot::{Autopilot, Telemetry, TelemetryRenderer};
    use lunar_lander::platform::headless::CountingParticles;
    use lunar_lander::sim::GamePhase;
    use lunar_lander::{LanderError, LanderGameController};

    /// Give up after this many frames (10 minutes at 60 Hz)
    const MAX_FRAMES: u64 = 36_000;

    fn seed_from_env() -> u64 {
        match std::env::var("LANDER_SEED") {
            Ok(value) => match value.parse() {
                Ok(seed) => seed,
                Err(e) => {
                    log::warn!("Ignoring LANDER_SEED={value:?}: {e}");
                    rand::random()
                }
            },
            Err(_) => rand::random(),
        }
    }

    fn open_store() -> Box<dyn PersistenceStore> {
        if let Ok(dir) = std::env::var("LANDER_DATA_DIR") {
            return Box::new(JsonFileStore::new(dir));
        }
        match JsonFileStore::default_location() {
            Ok(store) => {
                log::info!("Data directory: {}", store.dir().display());
                Box::new(store)
            }
            Err(e) => {
                log::warn!("{e}; high scores will not be kept");
                Box::new(MemoryStore::new())
            }
        }
    }

    pub fn run() -> Result<(), LanderError> {
        let seed = seed_from_env();
        log::info!("Lunar Lander starting with seed {seed}");

        let telemetry = Rc::new(RefCell::new(Telemetry::default()));
        let particles = CountingParticles::default();
        let mut game = LanderGameController::new(
            seed,
            Box::new(Autopilot::new(telemetry.clone())),
            Box::new(TelemetryRenderer::new(telemetry.clone())),
            Box::new(particles.clone()),
            open_store(),
        )?;

        let mut frames = 0;
        loop {
            game.draw();
            game.update(SIM_DT)?;
            frames += 1;

            let phase = game.phase();
            if matches!(phase, GamePhase::ShipCrashed | GamePhase::BeatGame) {
                game.draw();
                break;
            }
            if frames >= MAX_FRAMES {
                log::warn!("Stopped after {frames} frames in {phase:?}");
                break;
            }
        }

        let state = game.state();
        let stats = particles.stats();
        println!("Seed:         {seed}");
        println!("Outcome:      {:?}", state.phase);
        println!("Level:        {}", state.current_level.number());
        println!("Flight time:  {:.1}s", frames as f32 * SIM_DT);
        println!("Fuel left:    {:.2}s", state.craft.fuel);
        println!("Score:        {:.2}", state.running_score);
        println!("Thrust ticks: {}", stats.thrust_frames);
        println!("High scores:");
        for (rank, score) in state.high_scores.top(DISPLAYED_HIGH_SCORES).iter().enumerate() {
            println!("  {}. {score:.2}", rank + 1);
        }
        Ok(())
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
