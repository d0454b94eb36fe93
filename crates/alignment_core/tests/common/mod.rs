#![allow(dead_code)]

use alignment_core::AlignmentTables;
use chrono::NaiveDate;
use serde_json::{json, Value};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Minimal valid table document that tests mutate before loading.
pub fn fixture_document() -> Value {
    json!({
        "moon_deities": {
            "Worm Moon": "Hermes",
            "Hunter's Moon": "Gaia"
        },
        "weekday_deities": {
            "Monday": "Gaia, Selene",
            "Thursday": "Zeus, Poseidon"
        },
        "season_rulers": {
            "Spring": { "deity": "Zeus", "element": "Air" },
            "Summer": { "deity": "Hera", "element": "Fire" },
            "Autumn": { "deity": "Selene", "element": "Water" },
            "Winter": { "deity": "Demeter", "element": "Earth" }
        },
        "festivals": {
            "northern": [
                { "name": "Beltane", "date": "2025-05-01", "deity": "Ares", "element": "Fire" },
                { "name": "Imbolc", "date": "2025-02-02", "deity": "Hermes", "element": "Air" }
            ],
            "southern": [
                { "name": "Samhain", "date": "2025-04-30", "deity": "Hades", "element": "Earth" }
            ]
        },
        "zodiac": [
            { "sign": "Capricorn", "deity": "Hades", "range": [12, 22, 1, 19] }
        ],
        "eclipses": [
            { "name": "Total Lunar Eclipse", "date": "2025-03-14" }
        ],
        "meteor_showers": [
            { "name": "Lyrids", "date": "2025-04-22" }
        ],
        "planetary_alignments": [
            { "name": "Moon-Venus Conjunction", "date": "2025-04-22" }
        ],
        "dark_moons": [],
        "retrogrades": [
            { "planet": "Mercury", "start": "2025-03-15", "end": "2025-04-07" },
            { "planet": "Venus", "start": "2025-03-01", "end": "2025-04-12" }
        ]
    })
}

pub fn load(document: &Value) -> AlignmentTables {
    AlignmentTables::from_json_str(&document.to_string()).expect("fixture tables should load")
}

pub fn fixture_tables() -> AlignmentTables {
    load(&fixture_document())
}
