// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! State hashing.
//!
//! Determinism contract
//! - The state hash is a BLAKE3 digest over a canonical byte stream covering
//!   every body in the world.
//! - Bodies are visited in ascending [`crate::BodyId`] order, prefixed by the
//!   body count as an 8-byte little-endian integer.
//! - Each body contributes its index (8-byte LE) and then the raw `f32` bit
//!   patterns (4-byte LE each) of: position, linear velocity, orientation
//!   `(x, y, z, w)`, angular velocity, inverse mass, radius, followed by one
//!   byte for the static-collision flag.
//! - Force and torque accumulators are not hashed; they are zero between
//!   steps.
//!
//! Two worlds with the same hash are bit-identical in every hashed field.
//! Changing the encoding changes every hash and must be treated as a breaking
//! change for recorded runs.

use blake3::Hasher;

use crate::body::RigidBody;

/// 32-byte BLAKE3 digest.
pub type Hash = [u8; 32];

fn update_floats(hasher: &mut Hasher, values: &[f32]) {
    for value in values {
        hasher.update(&value.to_bits().to_le_bytes());
    }
}

/// Computes the canonical hash of a body registry.
pub(crate) fn compute_state_hash(bodies: &[RigidBody]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(&(bodies.len() as u64).to_le_bytes());
    for (index, body) in bodies.iter().enumerate() {
        hasher.update(&(index as u64).to_le_bytes());
        update_floats(&mut hasher, &body.position().to_array());
        update_floats(&mut hasher, &body.linear_velocity().to_array());
        update_floats(&mut hasher, &body.orientation().to_array());
        update_floats(&mut hasher, &body.angular_velocity().to_array());
        update_floats(&mut hasher, &[body.inverse_mass(), body.radius()]);
        hasher.update(&[u8::from(body.collides_with_static())]);
    }
    hasher.finalize().into()
}

/// Lowercase hex rendering of a hash, for logs and reports.
pub fn hash_to_hex(hash: &Hash) -> String {
    blake3::Hash::from(*hash).to_hex().to_string()
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::body::BodyDesc;
    use crate::math::Vec3;

    fn body(x: f32) -> RigidBody {
        RigidBody::from_desc(&BodyDesc::at(Vec3::new(x, 0.0, 0.0))).expect("valid body")
    }

    #[test]
    fn empty_registry_hash_is_stable() {
        assert_eq!(compute_state_hash(&[]), compute_state_hash(&[]));
    }

    #[test]
    fn hash_depends_on_order() {
        let forward = compute_state_hash(&[body(0.0), body(1.0)]);
        let reverse = compute_state_hash(&[body(1.0), body(0.0)]);
        assert_ne!(forward, reverse);
    }

    #[test]
    fn hex_is_sixty_four_chars() {
        let hex = hash_to_hex(&compute_state_hash(&[body(0.0)]));
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
