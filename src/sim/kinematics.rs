//! Craft kinematics: turning, thrust, gravity and integration
//!
//! Pure function of (craft, controls, dt). Forces are summed in standard
//! math space, so the craft's engine-space orientation is converted before
//! the thrust vector is built.

use glam::Vec2;

use super::craft::Craft;
use crate::consts::*;
use crate::{engine_to_standard, normalize_angle};

/// Flight controls held during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub thrust: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

/// Whether the main engine fires for these controls
#[inline]
pub fn thrust_active(craft: &Craft, controls: &Controls) -> bool {
    controls.thrust && craft.fuel > 0.0
}

/// Advance the craft by `dt` seconds
pub fn step(craft: &Craft, controls: &Controls, dt: f32) -> Craft {
    let mut orientation = craft.orientation;
    if controls.turn_left != controls.turn_right {
        let delta = TURN_RATE * dt;
        orientation += if controls.turn_left { -delta } else { delta };
    }

    let mass = craft.mass();
    let mut force = Vec2::new(0.0, mass * -MOON_GRAVITY);
    let mut fuel = craft.fuel;

    if thrust_active(craft, controls) {
        let angle = engine_to_standard(orientation);
        force += Vec2::new(angle.cos(), angle.sin()) * (mass * THRUST_ACCELERATION);
        fuel = (fuel - dt).max(0.0);
    }

    let accel = force / mass;
    let vel = craft.vel + accel * dt;
    let pos = craft.pos + craft.vel * dt + 0.5 * accel * dt * dt;

    let orientation = normalize_angle(orientation);
    Craft {
        pos,
        vel,
        speed: vel.length(),
        orientation,
        orientation_degrees: orientation.to_degrees() % 360.0,
        fuel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, TAU};

    fn craft_at_rest() -> Craft {
        Craft::new(Vec2::new(60.0, 60.0))
    }

    #[test]
    fn test_free_fall() {
        let craft = craft_at_rest();
        let next = step(&craft, &Controls::default(), 1.0);
        assert!((next.vel.y + MOON_GRAVITY).abs() < 1e-5);
        assert!((next.pos.y - (60.0 - 0.5 * MOON_GRAVITY)).abs() < 1e-4);
        assert!((next.speed - MOON_GRAVITY).abs() < 1e-5);
        assert_eq!(next.fuel, craft.fuel);
    }

    #[test]
    fn test_upright_thrust_counters_gravity() {
        let craft = craft_at_rest();
        let controls = Controls {
            thrust: true,
            ..Default::default()
        };
        let next = step(&craft, &controls, 0.5);
        let expected = (THRUST_ACCELERATION - MOON_GRAVITY) * 0.5;
        assert!((next.vel.y - expected).abs() < 1e-4);
        assert!(next.vel.x.abs() < 1e-4);
        assert!((next.fuel - (START_FUEL - 0.5)).abs() < 1e-5);
    }

    #[test]
    fn test_thrust_direction_when_turned_right() {
        // Engine-space π/2 points the nozzle thrust along +x
        let mut craft = craft_at_rest();
        craft.orientation = FRAC_PI_2;
        let controls = Controls {
            thrust: true,
            ..Default::default()
        };
        let next = step(&craft, &controls, 1.0);
        assert!((next.vel.x - THRUST_ACCELERATION).abs() < 1e-3);
        assert!((next.vel.y + MOON_GRAVITY).abs() < 1e-3);
    }

    #[test]
    fn test_no_thrust_without_fuel() {
        let mut craft = craft_at_rest();
        craft.fuel = 0.0;
        let controls = Controls {
            thrust: true,
            ..Default::default()
        };
        assert!(!thrust_active(&craft, &controls));
        let next = step(&craft, &controls, 1.0);
        assert!((next.vel.y + MOON_GRAVITY).abs() < 1e-5);
        assert_eq!(next.fuel, 0.0);
    }

    #[test]
    fn test_fuel_floors_at_zero() {
        let mut craft = craft_at_rest();
        craft.fuel = 0.01;
        let controls = Controls {
            thrust: true,
            ..Default::default()
        };
        let next = step(&craft, &controls, 0.1);
        assert_eq!(next.fuel, 0.0);
    }

    #[test]
    fn test_turning() {
        let craft = craft_at_rest();
        let right = Controls {
            turn_right: true,
            ..Default::default()
        };
        let next = step(&craft, &right, 0.75);
        assert!((next.orientation - TURN_RATE * 0.75).abs() < 1e-5);
        assert!((next.orientation_degrees - 90.0).abs() < 1e-3);

        let left = Controls {
            turn_left: true,
            ..Default::default()
        };
        let next = step(&craft, &left, 0.75);
        assert!((next.orientation - (TAU - TURN_RATE * 0.75)).abs() < 1e-4);
        assert!((next.orientation_degrees - 270.0).abs() < 1e-2);
    }

    #[test]
    fn test_both_turn_inputs_cancel() {
        let craft = craft_at_rest();
        let both = Controls {
            turn_left: true,
            turn_right: true,
            ..Default::default()
        };
        assert_eq!(step(&craft, &both, 1.0).orientation, 0.0);
    }

    proptest! {
        #[test]
        fn prop_orientation_stays_wrapped(
            start in 0.0f32..TAU,
            dt in 0.0f32..10.0,
            left in any::<bool>(),
            right in any::<bool>(),
        ) {
            let mut craft = craft_at_rest();
            craft.orientation = start;
            let controls = Controls { thrust: false, turn_left: left, turn_right: right };
            let next = step(&craft, &controls, dt);
            prop_assert!(next.orientation >= 0.0 && next.orientation < TAU);
            prop_assert!(next.orientation_degrees >= 0.0 && next.orientation_degrees < 360.0);
        }

        #[test]
        fn prop_step_is_deterministic(
            vx in -20.0f32..20.0,
            vy in -20.0f32..20.0,
            orientation in 0.0f32..TAU,
            thrust in any::<bool>(),
            dt in 0.001f32..0.1,
        ) {
            let mut craft = craft_at_rest();
            craft.vel = Vec2::new(vx, vy);
            craft.orientation = orientation;
            let controls = Controls { thrust, turn_left: false, turn_right: true };
            prop_assert_eq!(step(&craft, &controls, dt), step(&craft, &controls, dt));
        }
    }
}
