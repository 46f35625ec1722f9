//! Headless collaborators: scripted input, an observing renderer, and a
//! particle counter. Used by tests and the demo runner.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{InputHandler, ParticleController, RenderView, Renderer};
use crate::settings::ControlScheme;
use crate::sim::{Craft, TickInput};

/// Replays a fixed sequence of inputs, then idles
#[derive(Debug, Default)]
pub struct ScriptedInput {
    inputs: VecDeque<TickInput>,
    scheme: Option<ControlScheme>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            scheme: None,
        }
    }

    /// Bindings received from the controller, if any
    pub fn control_scheme(&self) -> Option<&ControlScheme> {
        self.scheme.as_ref()
    }
}

impl InputHandler for ScriptedInput {
    fn apply_control_scheme(&mut self, scheme: &ControlScheme) {
        self.scheme = Some(scheme.clone());
    }

    fn poll(&mut self) -> TickInput {
        self.inputs.pop_front().unwrap_or_default()
    }
}

/// Renderer that draws nothing
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &RenderView<'_>) {}
}

/// Particle effect counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParticleStats {
    pub thrust_frames: u32,
    pub crash_frames: u32,
    pub clears: u32,
}

/// Counts particle requests; clone the handle to inspect from outside
#[derive(Debug, Clone, Default)]
pub struct CountingParticles {
    stats: Rc<RefCell<ParticleStats>>,
}

impl CountingParticles {
    pub fn stats(&self) -> ParticleStats {
        *self.stats.borrow()
    }
}

impl ParticleController for CountingParticles {
    fn ship_thrust(&mut self, _dt: f32, _craft: &Craft, thrust_on: bool) {
        if thrust_on {
            self.stats.borrow_mut().thrust_frames += 1;
        }
    }

    fn ship_crash(&mut self, _dt: f32, _craft: &Craft) {
        self.stats.borrow_mut().crash_frames += 1;
    }

    fn clear_all(&mut self) {
        self.stats.borrow_mut().clears += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuAction;

    #[test]
    fn test_scripted_input_replays_then_idles() {
        let first = TickInput {
            menu: Some(MenuAction::NewGame),
            ..Default::default()
        };
        let mut input = ScriptedInput::new([first]);
        assert_eq!(input.poll(), first);
        assert_eq!(input.poll(), TickInput::default());
    }

    #[test]
    fn test_counting_particles_shares_stats() {
        let particles = CountingParticles::default();
        let mut handle = particles.clone();
        let craft = Craft::default();
        handle.ship_thrust(0.1, &craft, true);
        handle.ship_thrust(0.1, &craft, false);
        handle.ship_crash(0.1, &craft);
        handle.clear_all();
        assert_eq!(
            particles.stats(),
            ParticleStats {
                thrust_frames: 1,
                crash_frames: 1,
                clears: 1
            }
        );
    }
}
