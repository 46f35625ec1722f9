//! Fractal terrain generation with flat safe zones
//!
//! Terrain is a polyline over the board, strictly increasing in x from
//! (0, 0) to (BOARD_SIZE, 0). Safe zones are placed first as flat pairs of
//! points; every other segment is roughened with midpoint displacement.

use glam::Vec2;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

use super::craft::DifficultyLevel;
use crate::consts::*;
use crate::error::LanderError;

/// Two terrain points closer than this in x are treated as the same point
const POINT_TOLERANCE: f32 = 0.001;
/// Subdivision stops once a segment is narrower than this
const MIN_SEGMENT_WIDTH: f32 = 1.0;

/// A flat, landing-eligible interval of terrain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeZone {
    pub x_start: f32,
    pub x_stop: f32,
    /// Ground height across the whole zone
    pub height: f32,
}

impl SafeZone {
    #[inline]
    pub fn width(&self) -> f32 {
        self.x_stop - self.x_start
    }

    /// True if [left, right] lies fully inside the zone
    pub fn contains_span(&self, left: f32, right: f32) -> bool {
        left >= self.x_start && right <= self.x_stop
    }

    /// True if `x` falls within `tolerance` of the zone (boundaries included)
    fn band_contains(&self, x: f32, tolerance: f32) -> bool {
        x >= self.x_start - tolerance && x <= self.x_stop + tolerance
    }
}

/// Generated terrain for one level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    /// Polyline vertices, sorted by x
    pub points: Vec<Vec2>,
    /// Safe zones, sorted by x_start
    pub safe_zones: Vec<SafeZone>,
}

impl Terrain {
    /// Build terrain from explicit parts (points are sorted by x)
    pub fn from_parts(mut points: Vec<Vec2>, mut safe_zones: Vec<SafeZone>) -> Self {
        sort_by_x(&mut points);
        safe_zones.sort_by(|a, b| a.x_start.total_cmp(&b.x_start));
        Self { points, safe_zones }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs as line segments
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Ground height at `x` by linear interpolation (None outside the board)
    pub fn height_at(&self, x: f32) -> Option<f32> {
        self.segments().find_map(|(a, b)| {
            if x < a.x || x > b.x {
                return None;
            }
            let span = b.x - a.x;
            if span <= f32::EPSILON {
                return Some(a.y.max(b.y));
            }
            Some(a.y + (b.y - a.y) * (x - a.x) / span)
        })
    }
}

/// Generate terrain and safe zones for a difficulty level
pub fn generate_terrain<R: Rng>(
    level: DifficultyLevel,
    rng: &mut R,
) -> Result<Terrain, LanderError> {
    // Edge heights seed the outer segments; they are grounded at the end
    let mut points = vec![
        Vec2::new(0.0, rng.random::<f32>() * MAX_TERRAIN_HEIGHT),
        Vec2::new(BOARD_SIZE, rng.random::<f32>() * MAX_TERRAIN_HEIGHT),
    ];

    let safe_zones = place_safe_zones(level, rng)?;
    for zone in &safe_zones {
        points.push(Vec2::new(zone.x_start, zone.height));
        points.push(Vec2::new(zone.x_stop, zone.height));
    }
    sort_by_x(&mut points);

    // Safe zone segments stay straight so the craft can land flush
    let skeleton = points.clone();
    for pair in skeleton.windows(2) {
        let starts_safe_zone = safe_zones
            .iter()
            .any(|z| (pair[0].x - z.x_start).abs() < POINT_TOLERANCE);
        if !starts_safe_zone {
            subdivide(pair[0], pair[1], rng, &mut points);
        }
    }
    sort_by_x(&mut points);

    if let Some(first) = points.first_mut() {
        first.y = 0.0;
    }
    if let Some(last) = points.last_mut() {
        last.y = 0.0;
    }

    log::info!(
        "Generated level {} terrain: {} points, {} safe zones",
        level.number(),
        points.len(),
        safe_zones.len()
    );

    Ok(Terrain { points, safe_zones })
}

/// Randomly place the level's safe zones, keeping 10% of a zone width
/// between any two of them
fn place_safe_zones<R: Rng>(
    level: DifficultyLevel,
    rng: &mut R,
) -> Result<Vec<SafeZone>, LanderError> {
    let width = level.safe_zone_width();
    let count = level.safe_zone_count();
    let tolerance = width * 0.1;

    let lowest_start = SAFE_ZONE_MARGIN * BOARD_SIZE;
    let highest_start = BOARD_SIZE - SAFE_ZONE_MARGIN * BOARD_SIZE - width;

    let mut zones: Vec<SafeZone> = Vec::with_capacity(count);
    let mut attempts = 0u32;

    while zones.len() < count {
        if attempts >= MAX_SAFE_ZONE_ATTEMPTS {
            return Err(LanderError::SafeZonePlacement { attempts });
        }
        attempts += 1;

        let x_start = rng.random_range(lowest_start..highest_start);
        let x_stop = x_start + width;

        let clear = zones
            .iter()
            .all(|z| !z.band_contains(x_start, tolerance) && !z.band_contains(x_stop, tolerance));
        if !clear {
            log::debug!("Safe zone at {x_start:.2} rejected (attempt {attempts})");
            continue;
        }

        let height = (rng.random::<f32>() * MAX_TERRAIN_HEIGHT).max(MIN_SAFE_ZONE_HEIGHT);
        zones.push(SafeZone {
            x_start,
            x_stop,
            height,
        });
    }

    zones.sort_by(|a, b| a.x_start.total_cmp(&b.x_start));
    Ok(zones)
}

/// Midpoint displacement: push displaced midpoints of (start, end) into `out`
/// until segments are narrower than one unit
fn subdivide<R: Rng>(start: Vec2, end: Vec2, rng: &mut R, out: &mut Vec<Vec2>) {
    let diff = end - start;
    if diff.x < MIN_SEGMENT_WIDTH {
        return;
    }

    let noise: f32 = StandardNormal.sample(rng);
    let mut mid = start + diff / 2.0;
    mid.y = (mid.y + TERRAIN_ROUGHNESS * noise * diff.x).clamp(0.0, MAX_TERRAIN_HEIGHT);

    out.push(mid);
    subdivide(start, mid, rng, out);
    subdivide(mid, end, rng, out);
}

fn sort_by_x(points: &mut [Vec2]) {
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
}
