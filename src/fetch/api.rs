//! Serde models for the Open511 events response
//!
//! Only the fields carried into the flattened CSV are declared; everything
//! else the API sends (`jurisdiction_url`, `+ivr_message`,
//! `+linear_reference_km`, `schedule.recurring_schedules`, pagination links)
//! is dropped by deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level body of `GET /events`
#[derive(Debug, Clone, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// One road event
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub url: String,
    pub id: String,
    pub headline: String,
    pub status: String,
    pub created: String,
    pub updated: String,
    #[serde(default)]
    pub description: String,
    pub event_type: String,
    #[serde(default)]
    pub event_subtypes: Vec<String>,
    #[serde(default)]
    pub severity: String,
    pub geography: Geography,
    #[serde(default)]
    pub roads: Vec<Road>,
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(default)]
    pub schedule: Schedule,
}

/// GeoJSON-shaped geometry: the coordinates stay an untyped JSON value here
/// and are only interpreted by the converter stage.
#[derive(Debug, Clone, Deserialize)]
pub struct Geography {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Value,
}

/// Road segment affected by an event
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Road {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Named area an event falls in
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Area {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Event schedule; only the interval list is carried downstream
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub intervals: Vec<String>,
}
