// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Narrow-phase contact tests and the events they produce.
//!
//! Tests are pure functions over bodies and triangles; the world drives them
//! and resolves each hit immediately.

mod events;
mod manifold;
mod narrow;

pub use events::{CollisionEvent, CollisionObserver};
pub use manifold::Manifold;
pub use narrow::{sphere_sphere, sphere_triangle, sphere_vs_triangle, spheres};
