//! Landing judgement, made once at the first terrain contact

use serde::{Deserialize, Serialize};

use super::craft::Craft;
use super::terrain::SafeZone;
use crate::consts::{MAX_ANGLE, MAX_SPEED, MIN_ANGLE};

/// Result of touching the ground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandingOutcome {
    Safe,
    Fatal,
}

/// Upright within the allowed tilt on either side of 0°
#[inline]
pub fn is_upright(craft: &Craft) -> bool {
    let degrees = craft.orientation_degrees;
    (0.0..=MAX_ANGLE).contains(&degrees) || (MIN_ANGLE..360.0).contains(&degrees)
}

/// Craft's full horizontal extent lies inside one of the zones
pub fn within_safe_zone(craft: &Craft, safe_zones: &[SafeZone]) -> bool {
    let (left, right) = craft.horizontal_extent();
    safe_zones.iter().any(|z| z.contains_span(left, right))
}

/// Judge a contact: safe only if upright, slow and fully inside a safe zone
pub fn evaluate(craft: &Craft, safe_zones: &[SafeZone]) -> LandingOutcome {
    if is_upright(craft) && craft.speed < MAX_SPEED && within_safe_zone(craft, safe_zones) {
        LandingOutcome::Safe
    } else {
        LandingOutcome::Fatal
    }
}
