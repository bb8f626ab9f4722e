// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Mat4, Quat, Vec3};

/// Placement handed to renderers: translation, rotation and non-uniform scale.
///
/// Conventions:
/// - `rotation` is a unit quaternion (normalized internally when converting).
/// - `scale` is applied before rotation and translation.
/// - `to_mat4` builds `M = T * R * S` with plain `f32` ops.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale).
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Creates a transform from components.
    #[must_use]
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Rigid placement (unit scale).
    #[must_use]
    pub const fn rigid(translation: Vec3, rotation: Quat) -> Self {
        Self::new(translation, rotation, Vec3::new(1.0, 1.0, 1.0))
    }

    /// Translation component.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation component.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Returns the column-major `Mat4` corresponding to this transform.
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        let [sx, sy, sz] = self.scale.to_array();
        let [tx, ty, tz] = self.translation.to_array();
        let s = Mat4::scale(sx, sy, sz);
        let r = self.rotation.to_mat4();
        let t = Mat4::translation(tx, ty, tz);
        t.multiply(&r).multiply(&s)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
