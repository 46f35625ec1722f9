//! Demo autopilot
//!
//! `Autopilot` plays the game through the normal input boundary. It sees the
//! world only through what `TelemetryRenderer` copies out of each frame, the
//! same way a player only sees the screen.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use super::{InputHandler, RenderView, Renderer};
use crate::consts::*;
use crate::menu::MenuAction;
use crate::settings::ControlScheme;
use crate::sim::{Controls, Craft, GamePhase, SafeZone, TickInput};

/// Last frame seen by the renderer
#[derive(Debug, Clone, Default)]
pub struct Telemetry {
    pub phase: Option<GamePhase>,
    pub craft: Craft,
    pub terrain_points: Vec<Vec2>,
    pub safe_zones: Vec<SafeZone>,
    pub running_score: f32,
    pub frames: u64,
}

pub type SharedTelemetry = Rc<RefCell<Telemetry>>;

/// Renderer that records telemetry instead of drawing
#[derive(Debug, Clone, Default)]
pub struct TelemetryRenderer {
    telemetry: SharedTelemetry,
}

impl TelemetryRenderer {
    pub fn new(telemetry: SharedTelemetry) -> Self {
        Self { telemetry }
    }
}

impl Renderer for TelemetryRenderer {
    fn render(&mut self, view: &RenderView<'_>) {
        let mut t = self.telemetry.borrow_mut();
        t.phase = Some(view.phase);
        t.craft = view.craft.clone();
        t.running_score = view.running_score;
        t.frames += 1;
        if view.terrain_regenerated {
            t.terrain_points = view.terrain.points.clone();
            t.safe_zones = view.terrain.safe_zones.clone();
        }
    }
}

/// Extra clearance kept over peaks while travelling (board units)
const CRUISE_CLEARANCE: f32 = 12.0;
/// Below this altitude over the pad the craft only corrects tilt
const FINAL_APPROACH: f32 = 15.0;
/// Largest tilt the autopilot commands (radians)
const MAX_TILT: f32 = 0.5;
/// Largest horizontal speed the autopilot commands
const MAX_CRUISE_SPEED: f32 = 3.0;

/// Flies toward the nearest safe zone and settles onto it
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    telemetry: SharedTelemetry,
}

impl Autopilot {
    pub fn new(telemetry: SharedTelemetry) -> Self {
        Self { telemetry }
    }

    fn fly(&self, t: &Telemetry) -> Controls {
        let craft = &t.craft;
        let Some(zone) = nearest_zone(&t.safe_zones, craft.pos.x) else {
            return Controls::default();
        };

        let target_x = (zone.x_start + zone.x_stop) / 2.0;
        let dx = target_x - craft.pos.x;
        let over_pad = dx.abs() < (zone.width() - craft.size()) / 2.0;
        let altitude = craft.pos.y - craft.collision_radius() - zone.height;

        // Horizontal: lean toward the target, level out for the final approach
        let desired_vx = (dx * 0.15).clamp(-MAX_CRUISE_SPEED, MAX_CRUISE_SPEED);
        let desired_tilt = if over_pad && altitude < FINAL_APPROACH {
            0.0
        } else {
            ((desired_vx - craft.vel.x) * 0.25).clamp(-MAX_TILT, MAX_TILT)
        };

        // Vertical: hold altitude over the peaks, then descend slowly
        let desired_vy = if over_pad {
            -(altitude * 0.15).clamp(1.0, 5.0)
        } else {
            let peak = peak_between(&t.terrain_points, craft.pos.x, target_x);
            let clearance = craft.pos.y - craft.collision_radius() - peak;
            ((CRUISE_CLEARANCE - clearance) * 0.5).clamp(-5.0, 2.0)
        };

        let tilt = signed_tilt(craft.orientation);
        let deadband = TURN_RATE * SIM_DT;
        Controls {
            thrust: craft.vel.y < desired_vy,
            turn_left: tilt > desired_tilt + deadband,
            turn_right: tilt < desired_tilt - deadband,
        }
    }
}

impl InputHandler for Autopilot {
    fn apply_control_scheme(&mut self, _scheme: &ControlScheme) {}

    fn poll(&mut self) -> TickInput {
        let t = self.telemetry.borrow();
        match t.phase {
            // Nothing drawn yet counts as the main menu
            None | Some(GamePhase::MainMenu) => TickInput {
                menu: Some(MenuAction::NewGame),
                ..Default::default()
            },
            Some(GamePhase::Running) => TickInput {
                controls: self.fly(&t),
                ..Default::default()
            },
            Some(GamePhase::Paused) => TickInput {
                menu: Some(MenuAction::Resume),
                ..Default::default()
            },
            Some(GamePhase::PassedLevel | GamePhase::ShipCrashed | GamePhase::BeatGame) => {
                TickInput::default()
            }
        }
    }
}

/// Orientation as a signed angle in (-π, π], positive = leaning right
fn signed_tilt(orientation: f32) -> f32 {
    if orientation > std::f32::consts::PI {
        orientation - std::f32::consts::TAU
    } else {
        orientation
    }
}

fn nearest_zone(zones: &[SafeZone], x: f32) -> Option<&SafeZone> {
    zones.iter().min_by(|a, b| {
        let da = ((a.x_start + a.x_stop) / 2.0 - x).abs();
        let db = ((b.x_start + b.x_stop) / 2.0 - x).abs();
        da.total_cmp(&db)
    })
}

/// Highest terrain point between two x positions (inclusive of the craft's width)
fn peak_between(points: &[Vec2], x0: f32, x1: f32) -> f32 {
    let half = LANDER_SIZE;
    let (lo, hi) = if x0 <= x1 { (x0 - half, x1) } else { (x1, x0 + half) };
    points
        .iter()
        .filter(|p| p.x >= lo && p.x <= hi)
        .map(|p| p.y)
        .fold(0.0, f32::max)
}
