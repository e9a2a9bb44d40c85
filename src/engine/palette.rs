//! Presentation sources: fallback background colors and card tilt

use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

/// WCAG AA background colors used when a prompt carries none
pub const PALETTE: [&str; 15] = [
    "#2563EB", "#7C3AED", "#DB2777", "#DC2626", "#EA580C", "#D97706", "#059669", "#0891B2",
    "#4F46E5", "#9333EA", "#C026D3", "#E11D48", "#F59E0B", "#10B981", "#06B6D4",
];

/// Card tilt range in degrees
pub const TILT_RANGE: RangeInclusive<f64> = -2.0..=2.0;

pub fn random_color<R: Rng>(rng: &mut R) -> &'static str {
    PALETTE.choose(rng).copied().unwrap_or(PALETTE[0])
}

pub fn random_tilt<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(TILT_RANGE)
}
