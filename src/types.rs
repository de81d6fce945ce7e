use serde::{Deserialize, Serialize};

/// One session record as the device reports it. Every field is display text.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Reading {
    pub title: String,
    pub date: String,
    pub time: String,
    pub category: String,
    pub percentage: String,
}

/// Body of `GET /readings` and of every `new_readings` event.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ReadingsPayload {
    pub readings: Vec<Reading>,
}

impl ReadingsPayload {
    pub fn from_json(text: &str) -> Result<Self, crate::error::ReadingsError> {
        Ok(serde_json::from_str(text)?)
    }
}
