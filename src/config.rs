//! Configuration for the floating cats simulation

use bevy::prelude::*;
use std::ops::RangeInclusive;

// ============================================================================
// POPULATION SETTINGS
// ============================================================================

/// Default lower bound for the target population
pub const DEFAULT_MIN_CATS: usize = 1;

/// Default upper bound for the target population
pub const DEFAULT_MAX_CATS: usize = 8;

/// Seconds between population retarget decisions
pub const RETARGET_INTERVAL: f32 = 5.0;

/// Probability that a retarget decision grows the target by one (otherwise it shrinks by one)
pub const GROW_PROBABILITY: f64 = 0.7;

// ============================================================================
// SPAWN SETTINGS
// ============================================================================

/// Default lower bound for the spawn scale
pub const DEFAULT_MIN_SCALE: f32 = 0.3;

/// Default upper bound for the spawn scale
pub const DEFAULT_MAX_SCALE: f32 = 1.2;

/// Default spawn velocity range (each axis drawn from ±base speed)
pub const DEFAULT_BASE_SPEED: f32 = 0.5;

/// Spawn rotation speed range in degrees per frame (±)
pub const MAX_ROTATION_SPEED: f32 = 0.25;

/// Side length of a cat sprite in pixels before scaling
pub const CAT_SPRITE_SIZE: f32 = 100.0;

/// Cat images under `assets/`, one picked at random per spawn
pub const CAT_IMAGES: [&str; 3] = ["cats/cat1.png", "cats/cat2.png", "cats/cat3.png"];

/// Seconds for a new cat to go from transparent to opaque
pub const FADE_IN_DURATION: f32 = 0.1;

/// Seconds for a removed cat to fade out before its entity is despawned
pub const FADE_OUT_DURATION: f32 = 1.0;

// ============================================================================
// PHYSICS SETTINGS
// ============================================================================

/// Default pull toward the pointer outside orbit range (pixels per frame²)
pub const DEFAULT_ATTRACTION_FORCE: f32 = 0.02;

/// Default orbit radius around the pointer in pixels
pub const DEFAULT_ORBIT_DISTANCE: f32 = 150.0;

/// Default orbit phase advance in radians per frame
pub const DEFAULT_ORBIT_SPEED: f32 = 0.02;

/// Default restitution for wall and cat-to-cat bounces
pub const DEFAULT_BOUNCINESS: f32 = 0.7;

/// Default collision radius in pixels, copied into each cat at spawn
pub const DEFAULT_COLLISION_RADIUS: f32 = 50.0;

/// Per-frame velocity decay
pub const DAMPING: f32 = 0.99;

/// Fraction of the offset to the orbit target used as velocity each frame
pub const ORBIT_GAIN: f32 = 0.1;

/// Distances below this are treated as coincident
pub const DISTANCE_EPSILON: f32 = 1e-6;

// ============================================================================
// PANEL RANGES
// ============================================================================

pub const MIN_CATS_RANGE: RangeInclusive<usize> = 1..=10;
pub const MAX_CATS_RANGE: RangeInclusive<usize> = 1..=20;
pub const MIN_SCALE_RANGE: RangeInclusive<f32> = 0.1..=1.0;
pub const MAX_SCALE_RANGE: RangeInclusive<f32> = 0.1..=2.0;
pub const BASE_SPEED_RANGE: RangeInclusive<f32> = 0.1..=5.0;
pub const ATTRACTION_FORCE_RANGE: RangeInclusive<f32> = 0.001..=0.1;
pub const ORBIT_DISTANCE_RANGE: RangeInclusive<f32> = 50.0..=300.0;
pub const ORBIT_SPEED_RANGE: RangeInclusive<f32> = 0.001..=0.1;
pub const BOUNCINESS_RANGE: RangeInclusive<f32> = 0.1..=1.0;
pub const COLLISION_RADIUS_RANGE: RangeInclusive<f32> = 20.0..=100.0;

/// Default window background (#2c2c2c)
pub fn default_background_color() -> Color {
    Color::srgb_u8(0x2c, 0x2c, 0x2c)
}

/// Runtime-tunable parameters, mutated only by the control panel
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CatConfig {
    min_cats: usize,
    max_cats: usize,
    min_scale: f32,
    max_scale: f32,
    pub base_speed: f32,
    pub background_color: Color,
    pub attraction_force: f32,
    pub orbit_distance: f32,
    pub orbit_speed: f32,
    pub bounciness: f32,
    pub collision_radius: f32,
}

impl Default for CatConfig {
    fn default() -> Self {
        Self {
            min_cats: DEFAULT_MIN_CATS,
            max_cats: DEFAULT_MAX_CATS,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            base_speed: DEFAULT_BASE_SPEED,
            background_color: default_background_color(),
            attraction_force: DEFAULT_ATTRACTION_FORCE,
            orbit_distance: DEFAULT_ORBIT_DISTANCE,
            orbit_speed: DEFAULT_ORBIT_SPEED,
            bounciness: DEFAULT_BOUNCINESS,
            collision_radius: DEFAULT_COLLISION_RADIUS,
        }
    }
}

impl CatConfig {
    pub fn min_cats(&self) -> usize {
        self.min_cats
    }

    pub fn max_cats(&self) -> usize {
        self.max_cats
    }

    pub fn min_scale(&self) -> f32 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f32 {
        self.max_scale
    }

    /// Raising the minimum above the maximum drags the maximum up with it
    pub fn set_min_cats(&mut self, value: usize) {
        self.min_cats = value.clamp(*MIN_CATS_RANGE.start(), *MIN_CATS_RANGE.end());
        if self.min_cats > self.max_cats {
            self.max_cats = self.min_cats;
        }
    }

    /// Lowering the maximum below the minimum drags the minimum down with it
    pub fn set_max_cats(&mut self, value: usize) {
        self.max_cats = value.clamp(*MAX_CATS_RANGE.start(), *MAX_CATS_RANGE.end());
        if self.max_cats < self.min_cats {
            self.min_cats = self.max_cats;
        }
    }

    pub fn set_min_scale(&mut self, value: f32) {
        self.min_scale = value.clamp(*MIN_SCALE_RANGE.start(), *MIN_SCALE_RANGE.end());
        if self.min_scale > self.max_scale {
            self.max_scale = self.min_scale;
        }
    }

    pub fn set_max_scale(&mut self, value: f32) {
        self.max_scale = value.clamp(*MAX_SCALE_RANGE.start(), *MAX_SCALE_RANGE.end());
        if self.max_scale < self.min_scale {
            self.min_scale = self.max_scale;
        }
    }
}
