// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::f32::consts::TAU;

use crate::error::PhysicsError;
use crate::math::{Vec3, EPSILON};

/// Maximum deviation (radians) of the angle sum from `2π` for a point to count
/// as inside a triangle.
pub const CONTAINMENT_TOLERANCE: f32 = 0.1;

/// World-space triangle of static collision geometry.
///
/// The face normal follows the winding `v0 → v1 → v2` (counter-clockwise seen
/// from the side the normal points to). Contacts always push along the
/// normal, even for a sphere whose centre is behind the face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
}

impl Triangle {
    /// Creates a triangle from three world-space vertices.
    pub const fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }

    /// The three vertices in winding order.
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Unit face normal, `normalize((v0 − v1) × (v0 − v2))`.
    ///
    /// Zero for a degenerate triangle.
    pub fn normal(&self) -> Vec3 {
        let side_a = self.v0 - self.v1;
        let side_b = self.v0 - self.v2;
        side_a.cross(&side_b).normalize()
    }

    /// Surface area.
    pub fn area(&self) -> f32 {
        (self.v1 - self.v0).cross(&(self.v2 - self.v0)).length() * 0.5
    }

    /// `true` when the triangle has (near) zero area and therefore no usable
    /// normal.
    pub fn is_degenerate(&self) -> bool {
        self.area() <= EPSILON
    }

    /// Signed distance from the triangle's plane; positive on the normal side.
    pub fn signed_distance(&self, point: &Vec3) -> f32 {
        (*point - self.v0).dot(&self.normal())
    }

    /// Orthogonal projection of `point` onto the triangle's plane.
    pub fn project(&self, point: &Vec3) -> Vec3 {
        let n = self.normal();
        *point - n * (*point - self.v0).dot(&n)
    }

    /// Sum of the angles subtended at `point` by the three edges.
    ///
    /// For a point in the triangle's plane the sum is `2π` inside (and on the
    /// edges) and strictly less outside. On a vertex two directions collapse
    /// to zero and the sum is meaningless. Dot products are clamped to `[-1, 1]`
    /// before `acos` so rounding on an edge cannot produce NaN.
    pub fn angle_sum(&self, point: &Vec3) -> f32 {
        let a = (*point - self.v0).normalize();
        let b = (*point - self.v1).normalize();
        let c = (*point - self.v2).normalize();
        let angle = |u: &Vec3, v: &Vec3| u.dot(v).clamp(-1.0, 1.0).acos();
        angle(&a, &b) + angle(&b, &c) + angle(&c, &a)
    }

    /// Angle-sum containment test on the projection of `point`.
    ///
    /// A projection within [`EPSILON`] of a vertex is contained; the angle sum
    /// is undefined there.
    pub fn contains_projected(&self, point: &Vec3) -> bool {
        let projected = self.project(point);
        let on_vertex = self
            .vertices()
            .iter()
            .any(|v| (projected - *v).length_squared() <= EPSILON * EPSILON);
        on_vertex || (self.angle_sum(&projected) - TAU).abs() <= CONTAINMENT_TOLERANCE
    }
}

/// Owned list of static triangles, e.g. a level or terrain mesh.
///
/// The world never stores one; callers pass `&soup` (it derefs to
/// `[Triangle]`) into every step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleSoup {
    triangles: Vec<Triangle>,
}

impl TriangleSoup {
    /// Creates an empty soup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a soup from a flat vertex list, three vertices per triangle.
    ///
    /// # Errors
    /// Returns [`PhysicsError::VertexCountNotMultipleOfThree`] when the list
    /// length is not a multiple of three.
    pub fn from_vertices(vertices: &[Vec3]) -> Result<Self, PhysicsError> {
        if vertices.len() % 3 != 0 {
            return Err(PhysicsError::VertexCountNotMultipleOfThree(vertices.len()));
        }
        let triangles = vertices
            .chunks_exact(3)
            .map(|v| Triangle::new(v[0], v[1], v[2]))
            .collect();
        Ok(Self { triangles })
    }

    /// Appends a triangle.
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Appends a planar quad `a → b → c → d` as triangles `(a, b, c)` and
    /// `(a, c, d)`; both share the quad's winding and normal.
    pub fn push_quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3) {
        self.triangles.push(Triangle::new(a, b, c));
        self.triangles.push(Triangle::new(a, c, d));
    }

    /// Rejects the first zero-area triangle.
    ///
    /// # Errors
    /// Returns [`PhysicsError::DegenerateTriangle`] with the offending index.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        match self.triangles.iter().position(Triangle::is_degenerate) {
            Some(index) => Err(PhysicsError::DegenerateTriangle(index)),
            None => Ok(()),
        }
    }
}

impl core::ops::Deref for TriangleSoup {
    type Target = [Triangle];
    fn deref(&self) -> &Self::Target {
        &self.triangles
    }
}

impl FromIterator<Triangle> for TriangleSoup {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}
