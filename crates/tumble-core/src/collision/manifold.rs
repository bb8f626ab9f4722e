// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec3;

/// Contact data produced by a narrow-phase test.
///
/// A fresh value is returned per test; nothing is shared between calls.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Manifold {
    /// World-space contact point.
    pub point: Vec3,
    /// Unit contact normal pointing from body B (or the static surface)
    /// toward body A.
    pub normal: Vec3,
    /// Overlap depth along `normal`; never negative.
    pub penetration: f32,
}
