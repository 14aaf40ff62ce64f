//! Common test utilities for integration tests
//!
//! Scripted catalogs and PokeAPI-shaped JSON bodies shared across the
//! integration test files.

#![allow(dead_code)]

use pokedex::adapters::mock::MockRecordSource;
use pokedex::Record;
use serde_json::{json, Value};

/// Size of the first-generation catalog.
pub const GEN1_SIZE: u32 = 151;

const CATEGORY_CYCLE: [&str; 5] = ["grass", "fire", "water", "bug", "normal"];

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Deterministic stand-in for record `id`: a handful of real names, the
/// rest generated, categories assigned round-robin.
pub fn gen1_record(id: u32) -> Record {
    match id {
        1 => Record::new(1, "bulbasaur").with_categories(["grass", "poison"]),
        4 => Record::new(4, "charmander").with_categories(["fire"]),
        7 => Record::new(7, "squirtle").with_categories(["water"]),
        25 => Record::new(25, "pikachu").with_categories(["electric"]),
        26 => Record::new(26, "raichu").with_categories(["electric"]),
        _ => Record::new(id, format!("mon-{id}"))
            .with_categories([CATEGORY_CYCLE[id as usize % CATEGORY_CYCLE.len()]]),
    }
}

/// 151-entry catalog whose `failing` ids answer with a server error.
pub fn gen1_source(failing: &[u32]) -> MockRecordSource {
    let source = (1..=GEN1_SIZE).fold(MockRecordSource::new(), |source, id| {
        source.with_record(gen1_record(id))
    });
    failing
        .iter()
        .fold(source, |source, &id| source.with_failing_id(id))
}

/// `GET /pokemon?limit&offset` body listing `ids` under `base`.
pub fn list_body(base: &str, ids: &[(u32, &str)]) -> String {
    let results: Vec<Value> = ids
        .iter()
        .map(|(id, name)| json!({ "name": name, "url": format!("{base}/pokemon/{id}/") }))
        .collect();
    json!({
        "count": 1302,
        "next": null,
        "previous": null,
        "results": results,
    })
    .to_string()
}

/// `GET /pokemon/{id}` body with the fields the catalog reads.
pub fn pokemon_body(id: u32, name: &str, types: &[&str]) -> String {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(slot, t)| json!({ "slot": slot + 1, "type": { "name": t, "url": "" } }))
        .collect();
    json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "sprites": {
            "front_default": format!("https://img.invalid/{id}.png"),
            "other": {
                "official-artwork": { "front_default": format!("https://img.invalid/art/{id}.png") }
            }
        },
        "types": types,
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 300, "effort": 0, "stat": { "name": "speed", "url": "" } }
        ],
        "abilities": [
            { "ability": { "name": "static", "url": "" }, "is_hidden": false, "slot": 1 }
        ],
        "moves": [
            { "move": { "name": "mega-punch", "url": "" } },
            { "move": { "name": "pay-day", "url": "" } },
            { "move": { "name": "thunder-punch", "url": "" } },
            { "move": { "name": "slam", "url": "" } },
            { "move": { "name": "mega-kick", "url": "" } }
        ]
    })
    .to_string()
}
