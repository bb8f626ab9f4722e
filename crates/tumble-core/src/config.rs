// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Tunables for a [`crate::World`].
//!
//! Every constant the step uses lives here so scenes and tools can override
//! them; the defaults reproduce the classic demo behaviour.

use crate::geom::Aabb;
use crate::impulse::ImpulseParams;
use crate::math::Vec3;

/// Upper bound applied to every integration step, in seconds.
///
/// Large frame hitches are truncated to this instead of being sub-stepped.
pub const MAX_TIME_STEP: f32 = 0.25;

/// Global simulation parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicsConfig {
    /// Gravitational acceleration; the force applied is `mass * gravity`.
    pub gravity: Vec3,
    /// Global gravity toggle.
    pub gravity_enabled: bool,
    /// Linear damping coefficient (force `-v * k`).
    pub linear_damping: f32,
    /// Angular damping coefficient (direct `ω -= ω * k` each step).
    pub angular_damping: f32,
    /// dt clamp for integration.
    pub max_time_step: f32,
    /// Optional hard cap on the number of bodies. `None` grows without bound.
    pub max_bodies: Option<usize>,
    /// Region a body must be inside to be tested against static geometry.
    pub static_bounds: StaticBounds,
    /// Impulse parameters for sphere-sphere contacts.
    pub sphere_contact: ImpulseParams,
    /// Impulse parameters for sphere-vs-static contacts.
    pub static_contact: ImpulseParams,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.8, 0.0),
            gravity_enabled: true,
            linear_damping: 0.05,
            angular_damping: 0.001,
            max_time_step: MAX_TIME_STEP,
            max_bodies: None,
            static_bounds: StaticBounds::default(),
            sphere_contact: ImpulseParams::sphere(),
            static_contact: ImpulseParams::static_geometry(),
        }
    }
}

impl PhysicsConfig {
    /// Defaults with gravity switched off; handy for isolated collision tests.
    pub fn without_gravity() -> Self {
        Self {
            gravity_enabled: false,
            ..Self::default()
        }
    }
}

/// Positional cull for static-geometry tests.
///
/// A body is considered only when `min_x < x < max_x`, `min_z < z < max_z`
/// and `y > floor_y`; there is no ceiling.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticBounds {
    /// Lower X bound (exclusive).
    pub min_x: f32,
    /// Upper X bound (exclusive).
    pub max_x: f32,
    /// Lower Z bound (exclusive).
    pub min_z: f32,
    /// Upper Z bound (exclusive).
    pub max_z: f32,
    /// Floor height (exclusive).
    pub floor_y: f32,
}

impl Default for StaticBounds {
    fn default() -> Self {
        Self::square(1000.0)
    }
}

impl StaticBounds {
    /// The classic terrain square `0 < x, z < extent` above `y = -200`.
    pub const fn square(extent: f32) -> Self {
        Self {
            min_x: 0.0,
            max_x: extent,
            min_z: 0.0,
            max_z: extent,
            floor_y: -200.0,
        }
    }

    /// No cull at all.
    pub const fn unbounded() -> Self {
        Self {
            min_x: f32::NEG_INFINITY,
            max_x: f32::INFINITY,
            min_z: f32::NEG_INFINITY,
            max_z: f32::INFINITY,
            floor_y: f32::NEG_INFINITY,
        }
    }

    /// The region as an open-topped box, or `None` if the bounds are inverted.
    pub fn region(&self) -> Option<Aabb> {
        Aabb::new(
            Vec3::new(self.min_x, self.floor_y, self.min_z),
            Vec3::new(self.max_x, f32::INFINITY, self.max_z),
        )
    }

    /// Strict containment test.
    pub fn contains(&self, point: &Vec3) -> bool {
        self.region()
            .is_some_and(|region| region.contains_point_strict(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_region_is_strict() {
        let bounds = StaticBounds::default();
        assert!(bounds.contains(&Vec3::new(500.0, 0.0, 500.0)));
        assert!(!bounds.contains(&Vec3::new(0.0, 0.0, 500.0)));
        assert!(!bounds.contains(&Vec3::new(500.0, -200.0, 500.0)));
    }

    #[test]
    fn inverted_or_nan_bounds_contain_nothing() {
        let inverted = StaticBounds {
            min_x: 10.0,
            max_x: 0.0,
            ..StaticBounds::default()
        };
        assert!(inverted.region().is_none());
        assert!(!inverted.contains(&Vec3::new(5.0, 0.0, 5.0)));
        let nan_floor = StaticBounds {
            floor_y: f32::NAN,
            ..StaticBounds::default()
        };
        assert!(!nan_floor.contains(&Vec3::new(5.0, 0.0, 5.0)));
    }

    #[test]
    fn unbounded_contains_everything_finite() {
        assert!(StaticBounds::unbounded().contains(&Vec3::new(-1.0e9, -1.0e9, 1.0e9)));
    }
}
