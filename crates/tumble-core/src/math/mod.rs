// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Vector, matrix and quaternion primitives for the physics core, plus a
//! seeded generator for scene layout.
//!
//! Everything is `f32` and free of fused multiply-add so a given sequence of
//! operations rounds identically on every target.

mod mat4;
mod prng;
mod quat;
mod vec3;

pub use mat4::Mat4;
pub use prng::Prng;
pub use quat::Quat;
pub use vec3::Vec3;

/// Degeneracy threshold for lengths (normalisation, axis construction).
pub const EPSILON: f32 = 1e-6;
