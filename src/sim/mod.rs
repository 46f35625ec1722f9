//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (terrain is the only consumer)
//! - Frame `dt` is the only time source
//! - No rendering or platform dependencies

pub mod collision;
pub mod craft;
pub mod kinematics;
pub mod landing;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{Circle, collision_circles, detect, segment_intersects_circle};
pub use craft::{Craft, DifficultyLevel};
pub use kinematics::{Controls, step, thrust_active};
pub use landing::{LandingOutcome, evaluate};
pub use state::{GameEvent, GamePhase, GameState};
pub use terrain::{SafeZone, Terrain, generate_terrain};
pub use tick::{TickInput, tick};
