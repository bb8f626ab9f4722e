// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![cfg(feature = "serde")]
#![allow(missing_docs, clippy::float_cmp)]
use tumble_core::{ImpulseParams, PhysicsConfig};

#[test]
fn config_json_uses_plain_arrays_for_vectors() {
    let json = serde_json::to_value(PhysicsConfig::default()).unwrap();
    assert_eq!(json["gravity"], serde_json::json!([0.0, -9.8_f32, 0.0]));
    assert_eq!(json["max_bodies"], serde_json::Value::Null);
}

#[test]
fn partial_config_fills_in_defaults() {
    let cfg: PhysicsConfig =
        serde_json::from_str(r#"{ "gravity_enabled": false, "max_bodies": 8 }"#).unwrap();
    assert!(!cfg.gravity_enabled);
    assert_eq!(cfg.max_bodies, Some(8));
    assert_eq!(cfg.sphere_contact, ImpulseParams::sphere());
    assert_eq!(cfg.static_contact.restitution, 0.5);
}
