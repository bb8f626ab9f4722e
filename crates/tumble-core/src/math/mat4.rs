// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec3;

/// Column‑major 4×4 matrix.
///
/// - Stored in column‑major order to align with GPU uploads; renderers can
///   consume [`Mat4::to_array`] directly.
/// - Represents affine transforms and, for rigid bodies, 3×3 inertia tensors
///   embedded in the upper-left block with `w = 1`.
///
/// # Examples
/// ```
/// use tumble_core::math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                tx, ty, tz, 1.0, // col 3 (translation)
            ],
        }
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // col 0
                0.0, sy, 0.0, 0.0, // col 1
                0.0, 0.0, sz, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Diagonal matrix with `(d, d, d, 1)` on the diagonal.
    ///
    /// This is the body-local inverse inertia of a solid sphere.
    pub const fn diagonal(d: f32) -> Self {
        Self::scale(d, d, d)
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Element at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// # Examples
    /// ```
    /// use tumble_core::math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Returns the transpose.
    ///
    /// For a pure rotation this is its inverse.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Translation column as a vector.
    pub fn translation_vector(&self) -> Vec3 {
        Vec3::new(self.at(0, 3), self.at(1, 3), self.at(2, 3))
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let x = point.component(0);
        let y = point.component(1);
        let z = point.component(2);
        let w = 1.0;

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z + self.at(0, 3) * w;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z + self.at(1, 3) * w;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z + self.at(2, 3) * w;

        Vec3::new(nx, ny, nz)
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    ///
    /// This is also how an inertia tensor is applied to a torque or an
    /// angular impulse.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let x = direction.component(0);
        let y = direction.component(1);
        let z = direction.component(2);

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z;

        Vec3::new(nx, ny, nz)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
