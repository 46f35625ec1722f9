//! Collision detection between the lander and terrain
//!
//! The lander is approximated by three circles: one big circle around its
//! center and two small ones hugging the bottom corners (the landing legs).
//! Each circle is tested against every terrain segment with the parametric
//! line-circle quadratic.

use glam::Vec2;

use super::craft::Craft;
use crate::engine_to_standard;
use std::f32::consts::FRAC_PI_4;

/// Small corner circle radius as a fraction of craft size.
/// (3 - 2√2) / 2, the largest circle fitting the gap between the big circle
/// and the bounding square's corner.
pub const LEG_RADIUS_FACTOR: f32 = 0.08579;

/// A collision circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// The three collision circles of a craft: body, then the two legs
pub fn collision_circles(craft: &Craft) -> [Circle; 3] {
    let body_radius = craft.collision_radius();
    let leg_radius = craft.size() * LEG_RADIUS_FACTOR;

    // Legs sit at 3π/4 and 5π/4 in engine space (bottom corners when upright)
    let leg = |offset: f32| {
        let angle = engine_to_standard(craft.orientation + offset);
        let dir = Vec2::new(angle.cos(), angle.sin());
        Circle {
            center: craft.pos + dir * (body_radius + leg_radius),
            radius: leg_radius,
        }
    };

    [
        Circle {
            center: craft.pos,
            radius: body_radius,
        },
        leg(3.0 * FRAC_PI_4),
        leg(5.0 * FRAC_PI_4),
    ]
}

/// Check whether a circle touches the segment p1-p2
///
/// Solves |p1 + u(p2 - p1) - c|² = r² for u. A negative discriminant means
/// the infinite line misses the circle. Otherwise the segment intersects if a
/// root lies in [0, 1], or if the roots straddle the segment (segment fully
/// inside the circle).
pub fn segment_intersects_circle(p1: Vec2, p2: Vec2, circle: &Circle) -> bool {
    if circle.radius <= 0.0 {
        return false;
    }

    let d = p2 - p1;
    let f = p1 - circle.center;

    let a = d.dot(d);
    if a <= f32::EPSILON {
        // Degenerate segment: a single point
        return f.length_squared() <= circle.radius * circle.radius;
    }

    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - circle.radius * circle.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return false;
    }

    let root = discriminant.sqrt();
    let u1 = (-b - root) / (2.0 * a);
    let u2 = (-b + root) / (2.0 * a);

    (0.0..=1.0).contains(&u1) || (0.0..=1.0).contains(&u2) || (u1 < 0.0 && u2 > 1.0)
}

/// Check a circle against every consecutive pair of terrain points
pub fn circle_hits_terrain(circle: &Circle, terrain: &[Vec2]) -> bool {
    terrain
        .windows(2)
        .any(|pair| segment_intersects_circle(pair[0], pair[1], circle))
}

/// True if any of the craft's collision circles touches the terrain
pub fn detect(craft: &Craft, terrain: &[Vec2]) -> bool {
    collision_circles(craft)
        .iter()
        .any(|circle| circle_hits_terrain(circle, terrain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::LANDER_SIZE;
    use std::f32::consts::PI;

    fn circle(x: f32, y: f32, radius: f32) -> Circle {
        Circle {
            center: Vec2::new(x, y),
            radius,
        }
    }

    #[test]
    fn test_zero_radius_on_vertex_misses() {
        let p1 = Vec2::new(10.0, 10.0);
        let p2 = Vec2::new(20.0, 15.0);
        assert!(!segment_intersects_circle(p1, p2, &circle(10.0, 10.0, 0.0)));
    }

    #[test]
    fn test_circle_enclosing_segment_hits() {
        let p1 = Vec2::new(-1.0, 0.0);
        let p2 = Vec2::new(1.0, 0.0);
        assert!(segment_intersects_circle(p1, p2, &circle(0.0, 0.0, 5.0)));
    }

    #[test]
    fn test_crossing_segment_hits() {
        let p1 = Vec2::new(-10.0, 0.0);
        let p2 = Vec2::new(10.0, 0.0);
        assert!(segment_intersects_circle(p1, p2, &circle(0.0, 1.0, 2.0)));
    }

    #[test]
    fn test_line_hits_outside_segment_misses() {
        // The infinite line passes through the circle, the segment stops short
        let p1 = Vec2::new(-10.0, 0.0);
        let p2 = Vec2::new(-5.0, 0.0);
        assert!(!segment_intersects_circle(p1, p2, &circle(0.0, 0.0, 2.0)));
    }

    #[test]
    fn test_negative_discriminant_misses() {
        let p1 = Vec2::new(-10.0, 0.0);
        let p2 = Vec2::new(10.0, 0.0);
        assert!(!segment_intersects_circle(p1, p2, &circle(0.0, 5.0, 2.0)));
    }

    #[test]
    fn test_tangent_touch_hits() {
        let p1 = Vec2::new(-10.0, 0.0);
        let p2 = Vec2::new(10.0, 0.0);
        assert!(segment_intersects_circle(p1, p2, &circle(0.0, 2.0, 2.0)));
    }

    #[test]
    fn test_leg_circles_upright() {
        let craft = Craft::new(Vec2::new(50.0, 50.0));
        let [body, right_leg, left_leg] = collision_circles(&craft);
        assert_eq!(body.center, craft.pos);
        assert!((body.radius - LANDER_SIZE / 2.0).abs() < 1e-6);

        // Legs hang below the body, one on each side
        assert!(right_leg.center.y < craft.pos.y);
        assert!(left_leg.center.y < craft.pos.y);
        assert!(right_leg.center.x > craft.pos.x);
        assert!(left_leg.center.x < craft.pos.x);

        // Each leg is tangent to the body circle
        let dist = (right_leg.center - body.center).length();
        assert!((dist - (body.radius + right_leg.radius)).abs() < 1e-4);
    }

    #[test]
    fn test_leg_circles_follow_rotation() {
        let mut craft = Craft::new(Vec2::new(50.0, 50.0));
        craft.orientation = PI;
        let [_, leg_a, leg_b] = collision_circles(&craft);
        // Upside down: the legs point up
        assert!(leg_a.center.y > craft.pos.y);
        assert!(leg_b.center.y > craft.pos.y);
    }

    #[test]
    fn test_detect_against_terrain() {
        let terrain = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(40.0, 10.0),
            Vec2::new(80.0, 10.0),
            Vec2::new(120.0, 0.0),
        ];
        let high = Craft::new(Vec2::new(60.0, 30.0));
        assert!(!detect(&high, &terrain));

        let touching = Craft::new(Vec2::new(60.0, 10.0 + LANDER_SIZE / 2.0 - 0.01));
        assert!(detect(&touching, &terrain));
    }

    #[test]
    fn test_leg_alone_can_collide() {
        // A spike that reaches the right leg but not the body circle
        let craft = Craft::new(Vec2::new(50.0, 50.0));
        let [body, right_leg, _] = collision_circles(&craft);
        let tip = right_leg.center;
        let terrain = vec![Vec2::new(tip.x - 0.1, 0.0), tip, Vec2::new(tip.x + 0.1, 0.0)];
        assert!(!circle_hits_terrain(&body, &terrain));
        assert!(detect(&craft, &terrain));
    }
}
