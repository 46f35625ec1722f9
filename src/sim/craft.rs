//! Lander craft and difficulty levels

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::LanderError;

/// Difficulty level of a single landing attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    /// Two wide safe zones
    One,
    /// One narrow safe zone
    Two,
}

impl DifficultyLevel {
    pub fn number(self) -> u32 {
        match self {
            DifficultyLevel::One => 1,
            DifficultyLevel::Two => 2,
        }
    }

    /// Width of each safe zone (board units)
    pub fn safe_zone_width(self) -> f32 {
        match self {
            DifficultyLevel::One => LANDER_SIZE * 3.5,
            DifficultyLevel::Two => LANDER_SIZE * 2.5,
        }
    }

    /// Number of safe zones generated for this level
    pub fn safe_zone_count(self) -> usize {
        match self {
            DifficultyLevel::One => 2,
            DifficultyLevel::Two => 1,
        }
    }
}

impl TryFrom<u32> for DifficultyLevel {
    type Error = LanderError;

    fn try_from(level: u32) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(DifficultyLevel::One),
            2 => Ok(DifficultyLevel::Two),
            other => Err(LanderError::InvalidDifficulty(other)),
        }
    }
}

/// The lander
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    /// Center position (board units, y up)
    pub pos: Vec2,
    pub vel: Vec2,
    /// Magnitude of `vel`
    pub speed: f32,
    /// Engine-space orientation in radians, [0, 2π). 0 = upright.
    pub orientation: f32,
    /// `orientation` in degrees, [0, 360)
    pub orientation_degrees: f32,
    /// Remaining burn time (seconds)
    pub fuel: f32,
}

impl Craft {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            speed: 0.0,
            orientation: 0.0,
            orientation_degrees: 0.0,
            fuel: START_FUEL,
        }
    }

    /// Edge length of the craft's bounding square
    #[inline]
    pub fn size(&self) -> f32 {
        LANDER_SIZE
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        LANDER_MASS
    }

    /// Radius of the main collision circle
    #[inline]
    pub fn collision_radius(&self) -> f32 {
        LANDER_SIZE / 2.0
    }

    /// Leftmost and rightmost x covered by the craft
    pub fn horizontal_extent(&self) -> (f32, f32) {
        let half = self.size() / 2.0;
        (self.pos.x - half, self.pos.x + half)
    }
}

impl Default for Craft {
    fn default() -> Self {
        Self::new(Vec2::new(START_POSITION.0, START_POSITION.1))
    }
}
