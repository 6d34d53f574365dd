use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::{Character, GameState, Item, ItemPackage, Vehicle};
use crate::vocabulary::{AttackType, DamageReason, DamageType, Vocabulary};

/// Every log record tag the decoder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    PlayerLogin,
    PlayerLogout,
    PlayerCreate,
    PlayerPosition,
    PlayerAttack,
    PlayerTakeDamage,
    PlayerKill,
    ItemPickup,
    ItemDrop,
    ItemEquip,
    ItemUnequip,
    ItemAttach,
    ItemDetach,
    ItemUse,
    VehicleRide,
    VehicleLeave,
    VehicleDestroy,
    MatchStart,
    MatchEnd,
    MatchDefinition,
    GameStatePeriodic,
    CarePackageSpawn,
    CarePackageLand,
}

impl Vocabulary for EventKind {
    const NAME: &'static str = "EventKind";
    const VARIANTS: &'static [Self] = &[
        EventKind::PlayerLogin,
        EventKind::PlayerLogout,
        EventKind::PlayerCreate,
        EventKind::PlayerPosition,
        EventKind::PlayerAttack,
        EventKind::PlayerTakeDamage,
        EventKind::PlayerKill,
        EventKind::ItemPickup,
        EventKind::ItemDrop,
        EventKind::ItemEquip,
        EventKind::ItemUnequip,
        EventKind::ItemAttach,
        EventKind::ItemDetach,
        EventKind::ItemUse,
        EventKind::VehicleRide,
        EventKind::VehicleLeave,
        EventKind::VehicleDestroy,
        EventKind::MatchStart,
        EventKind::MatchEnd,
        EventKind::MatchDefinition,
        EventKind::GameStatePeriodic,
        EventKind::CarePackageSpawn,
        EventKind::CarePackageLand,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            EventKind::PlayerLogin => "LogPlayerLogin",
            EventKind::PlayerLogout => "LogPlayerLogout",
            EventKind::PlayerCreate => "LogPlayerCreate",
            EventKind::PlayerPosition => "LogPlayerPosition",
            EventKind::PlayerAttack => "LogPlayerAttack",
            EventKind::PlayerTakeDamage => "LogPlayerTakeDamage",
            EventKind::PlayerKill => "LogPlayerKill",
            EventKind::ItemPickup => "LogItemPickup",
            EventKind::ItemDrop => "LogItemDrop",
            EventKind::ItemEquip => "LogItemEquip",
            EventKind::ItemUnequip => "LogItemUnequip",
            EventKind::ItemAttach => "LogItemAttach",
            EventKind::ItemDetach => "LogItemDetach",
            EventKind::ItemUse => "LogItemUse",
            EventKind::VehicleRide => "LogVehicleRide",
            EventKind::VehicleLeave => "LogVehicleLeave",
            EventKind::VehicleDestroy => "LogVehicleDestroy",
            EventKind::MatchStart => "LogMatchStart",
            EventKind::MatchEnd => "LogMatchEnd",
            EventKind::MatchDefinition => "LogMatchDefinition",
            EventKind::GameStatePeriodic => "LogGameStatePeriodic",
            EventKind::CarePackageSpawn => "LogCarePackageSpawn",
            EventKind::CarePackageLand => "LogCarePackageLand",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// One decoded telemetry record.
///
/// `character` is the record's primary actor; any kind may carry one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub version: i64,
    /// `None` when the record carries no `_D` field.
    pub timestamp: Option<DateTime<Utc>>,
    /// `None` when the record has no `character` block or it is `null`.
    pub character: Option<Character>,
    pub payload: EventPayload,
}

/// Kind-specific body of an [`Event`]. Variant order follows [`EventKind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EventPayload {
    #[serde(rename = "LogPlayerLogin")]
    PlayerLogin(Login),
    #[serde(rename = "LogPlayerLogout")]
    PlayerLogout(Logout),
    #[serde(rename = "LogPlayerCreate")]
    PlayerCreate,
    #[serde(rename = "LogPlayerPosition")]
    PlayerPosition(Position),
    #[serde(rename = "LogPlayerAttack")]
    PlayerAttack(Attack),
    #[serde(rename = "LogPlayerTakeDamage")]
    PlayerTakeDamage(TakeDamage),
    #[serde(rename = "LogPlayerKill")]
    PlayerKill(Kill),
    #[serde(rename = "LogItemPickup")]
    ItemPickup(ItemInteraction),
    #[serde(rename = "LogItemDrop")]
    ItemDrop(ItemInteraction),
    #[serde(rename = "LogItemEquip")]
    ItemEquip(ItemInteraction),
    #[serde(rename = "LogItemUnequip")]
    ItemUnequip(ItemInteraction),
    #[serde(rename = "LogItemAttach")]
    ItemAttach(ItemAttachment),
    #[serde(rename = "LogItemDetach")]
    ItemDetach(ItemAttachment),
    #[serde(rename = "LogItemUse")]
    ItemUse(ItemInteraction),
    #[serde(rename = "LogVehicleRide")]
    VehicleRide(VehicleInteraction),
    #[serde(rename = "LogVehicleLeave")]
    VehicleLeave(VehicleInteraction),
    #[serde(rename = "LogVehicleDestroy")]
    VehicleDestroy(VehicleDestruction),
    #[serde(rename = "LogMatchStart")]
    MatchStart(Roster),
    #[serde(rename = "LogMatchEnd")]
    MatchEnd(Roster),
    #[serde(rename = "LogMatchDefinition")]
    MatchDefinition(MatchDefinition),
    #[serde(rename = "LogGameStatePeriodic")]
    GameStatePeriodic(GameState),
    #[serde(rename = "LogCarePackageSpawn")]
    CarePackageSpawn(ItemPackage),
    #[serde(rename = "LogCarePackageLand")]
    CarePackageLand(ItemPackage),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Login {
    pub result: bool,
    pub error_message: String,
    pub account_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Logout {
    pub account_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Position {
    pub elapsed_time: f64,
    pub num_alive_players: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Attack {
    pub attack_id: i64,
    pub attacker: Character,
    pub attack_type: Option<AttackType>,
    pub weapon: Option<Item>,
    pub vehicle: Option<Vehicle>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TakeDamage {
    pub attack_id: i64,
    pub attacker: Character,
    pub victim: Character,
    pub damage_type: Option<DamageType>,
    pub damage_reason: Option<DamageReason>,
    pub damage: f64,
    pub damage_causer_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Kill {
    pub attack_id: i64,
    pub killer: Character,
    pub victim: Character,
    pub damage_type: Option<DamageType>,
    pub damage_causer_name: String,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ItemInteraction {
    pub item: Item,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ItemAttachment {
    pub parent_item: Item,
    pub child_item: Item,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VehicleInteraction {
    pub vehicle: Vehicle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VehicleDestruction {
    pub attack_id: i64,
    pub attacker: Character,
    pub vehicle: Vehicle,
    pub damage_type: Option<DamageType>,
    pub damage_causer_name: String,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Roster {
    pub characters: Vec<Character>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MatchDefinition {
    pub match_id: String,
    pub ping_quality: String,
}

impl Event {
    pub fn new(version: i64, timestamp: Option<DateTime<Utc>>, payload: EventPayload) -> Self {
        Self {
            version,
            timestamp,
            character: None,
            payload,
        }
    }

    pub fn with_character(mut self, character: Character) -> Self {
        self.character = Some(character);
        self
    }

    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }

    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::PlayerLogin(_) => EventKind::PlayerLogin,
            EventPayload::PlayerLogout(_) => EventKind::PlayerLogout,
            EventPayload::PlayerCreate => EventKind::PlayerCreate,
            EventPayload::PlayerPosition(_) => EventKind::PlayerPosition,
            EventPayload::PlayerAttack(_) => EventKind::PlayerAttack,
            EventPayload::PlayerTakeDamage(_) => EventKind::PlayerTakeDamage,
            EventPayload::PlayerKill(_) => EventKind::PlayerKill,
            EventPayload::ItemPickup(_) => EventKind::ItemPickup,
            EventPayload::ItemDrop(_) => EventKind::ItemDrop,
            EventPayload::ItemEquip(_) => EventKind::ItemEquip,
            EventPayload::ItemUnequip(_) => EventKind::ItemUnequip,
            EventPayload::ItemAttach(_) => EventKind::ItemAttach,
            EventPayload::ItemDetach(_) => EventKind::ItemDetach,
            EventPayload::ItemUse(_) => EventKind::ItemUse,
            EventPayload::VehicleRide(_) => EventKind::VehicleRide,
            EventPayload::VehicleLeave(_) => EventKind::VehicleLeave,
            EventPayload::VehicleDestroy(_) => EventKind::VehicleDestroy,
            EventPayload::MatchStart(_) => EventKind::MatchStart,
            EventPayload::MatchEnd(_) => EventKind::MatchEnd,
            EventPayload::MatchDefinition(_) => EventKind::MatchDefinition,
            EventPayload::GameStatePeriodic(_) => EventKind::GameStatePeriodic,
            EventPayload::CarePackageSpawn(_) => EventKind::CarePackageSpawn,
            EventPayload::CarePackageLand(_) => EventKind::CarePackageLand,
        }
    }
}
