//! Control scheme (persisted key bindings)
//!
//! Bindings are stored as key names; mapping names to physical keys is the
//! input handler's job.

use serde::{Deserialize, Serialize};

/// Bindable flight actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlAction {
    Thrust,
    RotateLeft,
    RotateRight,
}

impl ControlAction {
    pub const ALL: [ControlAction; 3] = [
        ControlAction::Thrust,
        ControlAction::RotateLeft,
        ControlAction::RotateRight,
    ];
}

/// Keys bound to each flight action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlScheme {
    pub thrust_keys: Vec<String>,
    pub rotate_left_keys: Vec<String>,
    pub rotate_right_keys: Vec<String>,
}

impl Default for ControlScheme {
    fn default() -> Self {
        Self {
            thrust_keys: vec!["Up".to_string()],
            rotate_left_keys: vec!["Left".to_string()],
            rotate_right_keys: vec!["Right".to_string()],
        }
    }
}

impl ControlScheme {
    /// Keys bound to an action
    pub fn keys(&self, action: ControlAction) -> &[String] {
        match action {
            ControlAction::Thrust => &self.thrust_keys,
            ControlAction::RotateLeft => &self.rotate_left_keys,
            ControlAction::RotateRight => &self.rotate_right_keys,
        }
    }

    /// Replace the bindings of an action
    pub fn rebind(&mut self, action: ControlAction, keys: Vec<String>) {
        match action {
            ControlAction::Thrust => self.thrust_keys = keys,
            ControlAction::RotateLeft => self.rotate_left_keys = keys,
            ControlAction::RotateRight => self.rotate_right_keys = keys,
        }
    }

    /// Action bound to `key`, if any
    pub fn action_for(&self, key: &str) -> Option<ControlAction> {
        ControlAction::ALL
            .into_iter()
            .find(|&action| self.keys(action).iter().any(|k| k.eq_ignore_ascii_case(key)))
    }
}
