// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec3;

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Bounds may be infinite on any side (the static-collision region is open
///   upwards).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// Returns `None` when any component of `min` exceeds its counterpart in
    /// `max`, or when a component is NaN.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Option<Self> {
        let a = min.to_array();
        let b = max.to_array();
        let ordered = a.iter().zip(&b).all(|(lo, hi)| lo <= hi);
        ordered.then_some(Self { min, max })
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Returns `true` if `p` lies strictly inside the box.
    ///
    /// Points on a face are outside. The static-geometry cull uses this so a
    /// body sitting exactly on the boundary is not tested.
    #[must_use]
    pub fn contains_point_strict(&self, p: &Vec3) -> bool {
        let [x, y, z] = p.to_array();
        let [lx, ly, lz] = self.min.to_array();
        let [hx, hy, hz] = self.max.to_array();
        x > lx && x < hx && y > ly && y < hy && z > lz && z < hz
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn strict_containment_excludes_faces() {
        let bb = Aabb::new(Vec3::ZERO, Vec3::new(10.0, 10.0, 10.0)).expect("ordered");
        assert!(bb.contains_point_strict(&Vec3::new(5.0, 5.0, 5.0)));
        assert!(!bb.contains_point_strict(&Vec3::new(0.0, 5.0, 5.0)));
        assert!(!bb.contains_point_strict(&Vec3::new(5.0, 5.0, 10.0)));
    }

    #[test]
    fn open_top_box_accepts_any_height_above_floor() {
        let bb = Aabb::new(
            Vec3::new(0.0, -200.0, 0.0),
            Vec3::new(100.0, f32::INFINITY, 100.0),
        )
        .expect("ordered");
        assert!(bb.contains_point_strict(&Vec3::new(1.0, 1.0e30, 1.0)));
        assert!(!bb.contains_point_strict(&Vec3::new(1.0, -200.0, 1.0)));
    }

    #[test]
    fn inverted_or_nan_corners_are_rejected() {
        assert_eq!(Aabb::new(Vec3::UNIT_X, Vec3::ZERO), None);
        assert_eq!(Aabb::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::UNIT_X), None);
    }
}
