//! Flat serde shape of a telemetry record as it appears on the wire.
//!
//! Every kind shares one object layout; fields a kind does not use are simply
//! absent. Unknown fields are ignored. Missing fields and explicit `null`s fall
//! back to their defaults. Enumerated fields stay raw strings here and are
//! validated when the record is converted into an
//! [`Event`](erangel_types::events::Event).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Accepts `null` wherever a defaultable value is expected.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct WireEvent {
    #[serde(rename = "_V", deserialize_with = "nullable")]
    pub version: i64,
    #[serde(rename = "_D")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "_T")]
    pub kind: Option<String>,

    // player
    #[serde(deserialize_with = "nullable")]
    pub result: bool,
    #[serde(deserialize_with = "nullable")]
    pub error_message: String,
    #[serde(deserialize_with = "nullable")]
    pub account_id: String,
    pub character: Option<WireCharacter>,
    #[serde(deserialize_with = "nullable")]
    pub elapsed_time: f64,
    #[serde(deserialize_with = "nullable")]
    pub num_alive_players: i32,

    // combat
    #[serde(deserialize_with = "nullable")]
    pub attack_id: i64,
    pub attacker: Option<WireCharacter>,
    pub attack_type: Option<String>,
    pub weapon: Option<WireItem>,
    pub vehicle: Option<WireVehicle>,
    pub victim: Option<WireCharacter>,
    pub damage_type_category: Option<String>,
    pub damage_reason: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub damage: f64,
    #[serde(deserialize_with = "nullable")]
    pub damage_causer_name: String,
    pub killer: Option<WireCharacter>,
    #[serde(deserialize_with = "nullable")]
    pub distance: f64,

    // items
    pub item: Option<WireItem>,
    pub parent_item: Option<WireItem>,
    pub child_item: Option<WireItem>,

    // match
    #[serde(deserialize_with = "nullable")]
    pub characters: Vec<Option<WireCharacter>>,
    #[serde(deserialize_with = "nullable")]
    pub match_id: String,
    #[serde(deserialize_with = "nullable")]
    pub ping_quality: String,

    // world
    pub item_package: Option<WireItemPackage>,
    pub game_state: Option<WireGameState>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct WireCharacter {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub team_id: i32,
    #[serde(deserialize_with = "nullable")]
    pub health: f64,
    pub location: Option<WireLocation>,
    #[serde(deserialize_with = "nullable")]
    pub ranking: i32,
    #[serde(deserialize_with = "nullable")]
    pub account_id: String,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(default)]
pub(crate) struct WireLocation {
    #[serde(rename = "X", deserialize_with = "nullable")]
    pub x: f64,
    #[serde(rename = "Y", deserialize_with = "nullable")]
    pub y: f64,
    #[serde(rename = "Z", deserialize_with = "nullable")]
    pub z: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct WireItem {
    #[serde(deserialize_with = "nullable")]
    pub item_id: String,
    #[serde(deserialize_with = "nullable")]
    pub stack_count: i32,
    #[serde(deserialize_with = "nullable")]
    pub category: String,
    pub sub_category: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub attached_items: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct WireVehicle {
    #[serde(deserialize_with = "nullable")]
    pub vehicle_type: String,
    #[serde(deserialize_with = "nullable")]
    pub vehicle_id: String,
    #[serde(deserialize_with = "nullable")]
    pub health_percent: f64,
    // the feed spells it this way
    #[serde(rename = "feulPercent", deserialize_with = "nullable")]
    pub fuel_percent: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct WireItemPackage {
    #[serde(deserialize_with = "nullable")]
    pub item_package_id: String,
    pub location: Option<WireLocation>,
    #[serde(deserialize_with = "nullable")]
    pub items: Vec<WireItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct WireGameState {
    #[serde(deserialize_with = "nullable")]
    pub elapsed_time: i64,
    #[serde(deserialize_with = "nullable")]
    pub num_alive_teams: i32,
    #[serde(deserialize_with = "nullable")]
    pub num_join_players: i32,
    #[serde(deserialize_with = "nullable")]
    pub num_start_players: i32,
    #[serde(deserialize_with = "nullable")]
    pub num_alive_players: i32,
    pub safety_zone_position: Option<WireLocation>,
    #[serde(deserialize_with = "nullable")]
    pub safety_zone_radius: f64,
    pub poison_gas_warning_position: Option<WireLocation>,
    #[serde(deserialize_with = "nullable")]
    pub poison_gas_warning_radius: f64,
    pub red_zone_position: Option<WireLocation>,
    #[serde(deserialize_with = "nullable")]
    pub red_zone_radius: f64,
}
