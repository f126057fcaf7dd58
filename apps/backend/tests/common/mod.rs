#![allow(dead_code)]

// tests/common/mod.rs
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Player ids of a JSON array of `{"player": {"id": ...}}` or `{"playerId": ...}` entries.
pub fn player_ids(entries: &Value) -> Vec<String> {
    entries
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|e| {
                    e["playerId"]
                        .as_str()
                        .or_else(|| e["player"]["id"].as_str())
                        .map(str::to_owned)
                })
                .collect()
        })
        .unwrap_or_default()
}
