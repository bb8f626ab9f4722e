// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Geometry used around the dynamics: the static-collision region, render
//! transforms, and the static triangle geometry spheres collide with.
//!
//! Point containment used by the static-collision cull is strict.

mod aabb;
mod transform;
mod triangle;

pub use aabb::Aabb;
pub use transform::Transform;
pub use triangle::{Triangle, TriangleSoup, CONTAINMENT_TOLERANCE};
