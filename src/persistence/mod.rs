//! Control scheme and high score storage
//!
//! Stores:
//! - `JsonFileStore`: two JSON files in a data directory
//! - `MemoryStore`: in-memory, shared between clones, counts saves

mod json_store;

pub use json_store::JsonFileStore;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::LanderError;
use crate::highscores::HighScores;
use crate::settings::ControlScheme;

/// Loads and saves the data that outlives a session
pub trait PersistenceStore {
    fn load_control_scheme(&self) -> Result<ControlScheme, LanderError>;
    fn save_control_scheme(&mut self, scheme: &ControlScheme) -> Result<(), LanderError>;
    fn load_high_scores(&self) -> Result<HighScores, LanderError>;
    fn save_high_scores(&mut self, scores: &HighScores) -> Result<(), LanderError>;
}

#[derive(Debug, Default)]
struct MemoryData {
    scheme: ControlScheme,
    scores: HighScores,
    saves: u32,
}

/// In-memory store; clones share the same data
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Rc<RefCell<MemoryData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_scores(scores: HighScores) -> Self {
        let store = Self::default();
        store.data.borrow_mut().scores = scores;
        store
    }

    /// Number of save calls so far
    pub fn save_count(&self) -> u32 {
        self.data.borrow().saves
    }

    pub fn high_scores(&self) -> HighScores {
        self.data.borrow().scores.clone()
    }
}

impl PersistenceStore for MemoryStore {
    fn load_control_scheme(&self) -> Result<ControlScheme, LanderError> {
        Ok(self.data.borrow().scheme.clone())
    }

    fn save_control_scheme(&mut self, scheme: &ControlScheme) -> Result<(), LanderError> {
        let mut data = self.data.borrow_mut();
        data.scheme = scheme.clone();
        data.saves += 1;
        Ok(())
    }

    fn load_high_scores(&self) -> Result<HighScores, LanderError> {
        Ok(self.data.borrow().scores.clone())
    }

    fn save_high_scores(&mut self, scores: &HighScores) -> Result<(), LanderError> {
        let mut data = self.data.borrow_mut();
        data.scores = scores.clone();
        data.saves += 1;
        Ok(())
    }
}
