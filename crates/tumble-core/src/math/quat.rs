// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Mat4, Vec3, EPSILON};

/// Quaternion stored as `(x, y, z, w)`.
///
/// * All angles are expressed in radians.
/// * Orientation quaternions are kept unit length by the integrator; the
///   arithmetic here never renormalises implicitly except in [`Quat::to_mat4`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f32; 4]", into = "[f32; 4]"))]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Pure-vector quaternion `(v, 0)`.
    ///
    /// Used by the integrator to lift `ω · dt / 2` into quaternion space.
    pub fn from_vector(v: Vec3) -> Self {
        Self::new(v.component(0), v.component(1), v.component(2), 0.0)
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `EPSILON`.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len_sq = axis.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::identity();
        }
        let len = len_sq.sqrt();
        let norm_axis = axis.scale(1.0 / len);
        let half = angle * 0.5;
        let (sin_half, cos_half) = half.sin_cos();
        let scaled = norm_axis.scale(sin_half);
        Self::new(
            scaled.component(0),
            scaled.component(1),
            scaled.component(2),
            cos_half,
        )
    }

    /// Component-wise sum.
    ///
    /// Not a rotation composition; the first-order orientation update adds
    /// a derivative quaternion to the current orientation and renormalises.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) + other.component(0),
            self.component(1) + other.component(1),
            self.component(2) + other.component(2),
            self.component(3) + other.component(3),
        )
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Component layout is `(x, y, z, w)` with `w` as the scalar part.
    /// Multiplication is non-commutative.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use tumble_core::math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    /// assert_ne!(yaw.multiply(&pitch).to_array(), pitch.multiply(&yaw).to_array());
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let aw = self.component(3);

        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        let bw = other.component(3);

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Euclidean norm of the four components.
    pub fn length(&self) -> f32 {
        (self.component(0) * self.component(0)
            + self.component(1) * self.component(1)
            + self.component(2) * self.component(2)
            + self.component(3) * self.component(3))
        .sqrt()
    }

    /// Normalises the quaternion; returns identity when norm is ~0.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::identity();
        }
        let inv = 1.0 / len;
        Self::new(
            self.component(0) * inv,
            self.component(1) * inv,
            self.component(2) * inv,
            self.component(3) * inv,
        )
    }

    /// Conjugate `(−x, −y, −z, w)`; the inverse rotation for unit quaternions.
    pub fn conjugate(&self) -> Self {
        Self::new(
            -self.component(0),
            -self.component(1),
            -self.component(2),
            self.component(3),
        )
    }

    /// Rotates `v` by this (unit) quaternion.
    pub fn rotate(&self, v: &Vec3) -> Vec3 {
        let p = Self::from_vector(*v);
        let r = self.multiply(&p).multiply(&self.conjugate());
        Vec3::new(r.component(0), r.component(1), r.component(2))
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Converts the quaternion to a rotation matrix (column-major 4×4).
    pub fn to_mat4(&self) -> Mat4 {
        let q = self.normalize();
        let x = q.component(0);
        let y = q.component(1);
        let z = q.component(2);
        let w = q.component(3);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

/// Converts a 4‑element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Quat> for [f32; 4] {
    fn from(value: Quat) -> Self {
        value.data
    }
}
