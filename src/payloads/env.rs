// src/payloads/env.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Environment variables exposed by the service. Opaque to this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvPayload {
    pub env: BTreeMap<String, String>,
}

impl EnvPayload {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }
}
