//! Export documents as they appear inside a data archive.

use serde_json::{json, Value};

/// A minimal document containing only the guild id.
pub fn empty_document(guild_id: u64) -> Value {
    json!({ "guild_id": guild_id.to_string() })
}

/// A representative export: two tags, one form with two inputs and five closed tickets.
pub fn document(guild_id: u64) -> Value {
    let tickets: Vec<Value> = (1..=5)
        .map(|id| {
            json!({
                "id": id,
                "user_id": "555000111",
                "open": false,
                "open_time": "2024-01-01T12:00:00Z",
                "has_transcript": true,
                "close_time": "2024-01-02T12:00:00Z",
            })
        })
        .collect();

    json!({
        "guild_id": guild_id.to_string(),
        "tags": [
            { "id": "rules", "content": "Read the rules." },
            { "id": "faq", "content": "See the FAQ channel." },
        ],
        "forms": [
            { "id": 10, "title": "Application", "custom_id": "abc" },
        ],
        "form_inputs": [
            { "id": 100, "form_id": 10, "position": 0, "custom_id": "q1", "style": 1,
              "label": "Name", "required": true },
            { "id": 101, "form_id": 10, "position": 1, "custom_id": "q2", "style": 2,
              "label": "Why?", "required": false },
        ],
        "tickets": tickets,
    })
}
