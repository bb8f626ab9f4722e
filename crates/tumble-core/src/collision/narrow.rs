// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::body::RigidBody;
use crate::collision::Manifold;
use crate::geom::Triangle;
use crate::math::Vec3;

/// Sphere-sphere test between two bodies.
///
/// See [`spheres`] for the contact geometry.
pub fn sphere_sphere(a: &RigidBody, b: &RigidBody) -> Option<Manifold> {
    spheres(a.position(), a.radius(), b.position(), b.radius())
}

/// Sphere-sphere test on raw centres and radii.
///
/// Touching spheres (distance exactly `ra + rb`) do not collide. The square
/// root is only taken on a hit. Coincident centres report `+Y` as the normal.
///
/// # Examples
/// ```
/// use tumble_core::collision::spheres;
/// use tumble_core::math::Vec3;
/// let hit = spheres(Vec3::ZERO, 1.0, Vec3::new(1.5, 0.0, 0.0), 1.0).unwrap();
/// assert!((hit.penetration - 0.5).abs() < 1e-6);
/// assert_eq!(hit.normal.to_array(), [-1.0, 0.0, 0.0]);
/// ```
pub fn spheres(center_a: Vec3, radius_a: f32, center_b: Vec3, radius_b: f32) -> Option<Manifold> {
    let delta = center_a - center_b;
    let dist_sq = delta.length_squared();
    let sum = radius_a + radius_b;
    if dist_sq >= sum * sum {
        return None;
    }
    let dist = dist_sq.sqrt();
    let penetration = sum - dist;
    let normal = match delta.normalize() {
        n if n == Vec3::ZERO => Vec3::UNIT_Y,
        n => n,
    };
    Some(Manifold {
        point: center_a - normal * (radius_a - penetration * 0.5),
        normal,
        penetration,
    })
}

/// Sphere vs static triangle test for a body.
pub fn sphere_triangle(body: &RigidBody, triangle: &Triangle) -> Option<Manifold> {
    sphere_vs_triangle(body.position(), body.radius(), triangle)
}

/// Sphere vs static triangle test on a raw centre and radius.
///
/// The centre is projected onto the triangle's plane and accepted when the
/// projection lies inside the triangle (angle-sum test). A hit needs the
/// signed distance along the face normal to be at most `radius`; spheres
/// behind the face also register. Degenerate triangles never collide.
///
/// The distance is measured from the plane through the triangle's own
/// vertices, not from a parallel plane through the origin.
pub fn sphere_vs_triangle(center: Vec3, radius: f32, triangle: &Triangle) -> Option<Manifold> {
    let normal = triangle.normal();
    if normal == Vec3::ZERO || !triangle.contains_projected(&center) {
        return None;
    }
    let distance = triangle.signed_distance(&center);
    if distance > radius {
        return None;
    }
    let penetration = radius - distance;
    Some(Manifold {
        point: center - normal * (radius - penetration * 0.5),
        normal,
        penetration,
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn ground() -> Triangle {
        // Counter-clockwise seen from +Y, so the normal points up.
        Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(10.0, 0.0, 0.0),
        )
    }

    #[test]
    fn ground_normal_points_up() {
        assert_eq!(ground().normal().to_array(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn touching_spheres_do_not_collide() {
        assert!(spheres(Vec3::ZERO, 1.0, Vec3::new(2.0, 0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn overlap_reports_midpoint_contact() {
        let hit = spheres(Vec3::ZERO, 1.0, Vec3::new(1.0, 0.0, 0.0), 1.0).expect("hit");
        assert_eq!(hit.penetration, 1.0);
        assert_eq!(hit.normal.to_array(), [-1.0, 0.0, 0.0]);
        // A − n (rA − pen/2) = 0 + (1)(0.5)
        assert_eq!(hit.point.to_array(), [0.5, 0.0, 0.0]);
    }

    #[test]
    fn coincident_centres_fall_back_to_up() {
        let hit = spheres(Vec3::ZERO, 1.0, Vec3::ZERO, 1.0).expect("hit");
        assert_eq!(hit.normal, Vec3::UNIT_Y);
        assert_eq!(hit.penetration, 2.0);
    }

    #[test]
    fn sphere_resting_on_triangle() {
        let hit = sphere_vs_triangle(Vec3::new(2.0, 0.5, 2.0), 1.0, &ground()).expect("hit");
        assert!((hit.penetration - 0.5).abs() < 1e-6);
        assert_eq!(hit.normal, Vec3::UNIT_Y);
        let p = hit.point.to_array();
        assert!((p[1] + 0.25).abs() < 1e-6, "point {p:?}");
    }

    #[test]
    fn sphere_above_triangle_misses() {
        assert!(sphere_vs_triangle(Vec3::new(2.0, 1.5, 2.0), 1.0, &ground()).is_none());
    }

    #[test]
    fn sphere_outside_footprint_misses() {
        assert!(sphere_vs_triangle(Vec3::new(9.0, 0.5, 9.0), 1.0, &ground()).is_none());
    }

    #[test]
    fn degenerate_triangle_never_collides() {
        let sliver = Triangle::new(Vec3::ZERO, Vec3::UNIT_X, Vec3::new(2.0, 0.0, 0.0));
        assert!(sphere_vs_triangle(Vec3::new(0.5, 0.0, 0.0), 1.0, &sliver).is_none());
    }
}
