// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use std::cell::RefCell;
use std::collections::BTreeMap;

use tumble_app_core::config::{ConfigError, ConfigService, ConfigStore};
use tumble_app_core::settings::{SceneKind, SimSettings};

#[derive(Default)]
struct MemoryStore {
    blobs: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl ConfigStore for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        self.blobs
            .borrow()
            .get(key)
            .cloned()
            .ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        self.blobs.borrow_mut().insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

#[test]
fn missing_key_loads_as_none() {
    let service = ConfigService::new(MemoryStore::default());
    let loaded: Option<SimSettings> = service.load(SimSettings::KEY).unwrap();
    assert!(loaded.is_none());
    let fallback: SimSettings = service.load_or_default(SimSettings::KEY).unwrap();
    assert_eq!(fallback, SimSettings::default());
}

#[test]
fn empty_blob_loads_as_none() {
    let service = ConfigService::new(MemoryStore::default());
    service.store().save_raw("sim", &[]).unwrap();
    let loaded: Option<SimSettings> = service.load("sim").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn saved_settings_are_pretty_json() {
    let service = ConfigService::new(MemoryStore::default());
    let settings = SimSettings {
        scene: SceneKind::Pendulum,
        steps: 10,
        ..SimSettings::default()
    };
    service.save(SimSettings::KEY, &settings).unwrap();

    let raw = service.store().load_raw(SimSettings::KEY).unwrap();
    let text = String::from_utf8(raw).unwrap();
    assert!(text.contains("\n  \"physics\""), "not pretty: {text}");
    assert!(text.contains("\"pendulum\""));

    let loaded: SimSettings = service.load(SimSettings::KEY).unwrap().unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn corrupt_blob_is_a_serde_error() {
    let service = ConfigService::new(MemoryStore::default());
    service.store().save_raw("sim", b"{ not json").unwrap();
    let err = service.load::<SimSettings>("sim").unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)));
}
