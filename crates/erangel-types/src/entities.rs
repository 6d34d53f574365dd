use serde::Serialize;

use crate::vocabulary::ItemSubCategory;

/// World-space position in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Actor reference embedded in most events.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Character {
    pub name: String,
    pub team_id: i32,
    pub health: f64,
    pub location: Location,
    pub ranking: i32,
    pub account_id: String,
}

impl Character {
    /// Unset character blocks arrive with an empty name and are never attributed.
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Item {
    pub item_id: String,
    pub stack_count: i32,
    pub category: String,
    pub sub_category: Option<ItemSubCategory>,
    pub attached_items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Vehicle {
    pub vehicle_type: String,
    pub vehicle_id: String,
    pub health_percent: f64,
    pub fuel_percent: f64,
}

/// Care package contents.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ItemPackage {
    pub item_package_id: String,
    pub location: Location,
    pub items: Vec<Item>,
}

/// Periodic snapshot of zone and survivor state.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GameState {
    pub elapsed_time: i64,
    pub num_alive_teams: i32,
    pub num_join_players: i32,
    pub num_start_players: i32,
    pub num_alive_players: i32,
    pub safety_zone_position: Location,
    pub safety_zone_radius: f64,
    pub poison_gas_warning_position: Location,
    pub poison_gas_warning_radius: f64,
    pub red_zone_position: Location,
    pub red_zone_radius: f64,
}
