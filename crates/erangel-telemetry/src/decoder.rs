//! Raw bytes to typed events.

use erangel_types::{
    entities::{Character, GameState, Item, ItemPackage, Location, Vehicle},
    events::{
        Attack, Event, EventKind, EventPayload, ItemAttachment, ItemInteraction, Kill, Login,
        Logout, MatchDefinition, Position, Roster, TakeDamage, VehicleDestruction,
        VehicleInteraction,
    },
    vocabulary::{decode_optional, AttackType, DamageReason, DamageType, Vocabulary},
    ErangelError, Result,
};
use serde::de::Error as _;
use tracing::debug;

use crate::wire::{
    WireCharacter, WireEvent, WireGameState, WireItem, WireItemPackage, WireLocation, WireVehicle,
};

/// Decode one JSON array of telemetry records, preserving input order.
///
/// The whole batch fails on the first malformed record or unknown enumerated
/// value.
pub fn decode_events(bytes: &[u8]) -> Result<Vec<Event>> {
    let records: Vec<WireEvent> = serde_json::from_slice(bytes)?;
    let events = records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            record.into_event().map_err(|err| {
                debug!(index = idx, error = %err, "rejecting telemetry record");
                err
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(count = events.len(), "decoded telemetry events");
    Ok(events)
}

impl WireEvent {
    pub(crate) fn into_event(self) -> Result<Event> {
        let tag = self
            .kind
            .as_deref()
            .ok_or_else(|| ErangelError::MalformedInput(serde_json::Error::missing_field("_T")))?;
        let kind = EventKind::decode(tag)?;

        // Enumerated fields are validated whenever present, whatever the kind.
        let attack_type = decode_optional::<AttackType>(self.attack_type.as_deref())?;
        let damage_type = decode_optional::<DamageType>(self.damage_type_category.as_deref())?;
        let damage_reason = decode_optional::<DamageReason>(self.damage_reason.as_deref())?;
        let weapon = self.weapon.map(WireItem::into_item).transpose()?;
        let item = self.item.map(WireItem::into_item).transpose()?;
        let parent_item = self.parent_item.map(WireItem::into_item).transpose()?;
        let child_item = self.child_item.map(WireItem::into_item).transpose()?;
        let item_package = self
            .item_package
            .map(WireItemPackage::into_package)
            .transpose()?;

        let character = self.character.map(WireCharacter::into_character);
        let vehicle = self.vehicle.map(WireVehicle::into_vehicle);
        let interaction = || ItemInteraction {
            item: item.clone().unwrap_or_default(),
        };
        let attachment = || ItemAttachment {
            parent_item: parent_item.clone().unwrap_or_default(),
            child_item: child_item.clone().unwrap_or_default(),
        };
        let riding = || VehicleInteraction {
            vehicle: vehicle.clone().unwrap_or_default(),
        };

        let payload = match kind {
            EventKind::PlayerLogin => EventPayload::PlayerLogin(Login {
                result: self.result,
                error_message: self.error_message,
                account_id: self.account_id,
            }),
            EventKind::PlayerLogout => EventPayload::PlayerLogout(Logout {
                account_id: self.account_id,
            }),
            EventKind::PlayerCreate => EventPayload::PlayerCreate,
            EventKind::PlayerPosition => EventPayload::PlayerPosition(Position {
                elapsed_time: self.elapsed_time,
                num_alive_players: self.num_alive_players,
            }),
            EventKind::PlayerAttack => EventPayload::PlayerAttack(Attack {
                attack_id: self.attack_id,
                attacker: actor(self.attacker),
                attack_type,
                weapon,
                vehicle: vehicle.clone(),
            }),
            EventKind::PlayerTakeDamage => EventPayload::PlayerTakeDamage(TakeDamage {
                attack_id: self.attack_id,
                attacker: actor(self.attacker),
                victim: actor(self.victim),
                damage_type,
                damage_reason,
                damage: self.damage,
                damage_causer_name: self.damage_causer_name,
            }),
            EventKind::PlayerKill => EventPayload::PlayerKill(Kill {
                attack_id: self.attack_id,
                killer: actor(self.killer),
                victim: actor(self.victim),
                damage_type,
                damage_causer_name: self.damage_causer_name,
                distance: self.distance,
            }),
            EventKind::ItemPickup => EventPayload::ItemPickup(interaction()),
            EventKind::ItemDrop => EventPayload::ItemDrop(interaction()),
            EventKind::ItemEquip => EventPayload::ItemEquip(interaction()),
            EventKind::ItemUnequip => EventPayload::ItemUnequip(interaction()),
            EventKind::ItemUse => EventPayload::ItemUse(interaction()),
            EventKind::ItemAttach => EventPayload::ItemAttach(attachment()),
            EventKind::ItemDetach => EventPayload::ItemDetach(attachment()),
            EventKind::VehicleRide => EventPayload::VehicleRide(riding()),
            EventKind::VehicleLeave => EventPayload::VehicleLeave(riding()),
            EventKind::VehicleDestroy => EventPayload::VehicleDestroy(VehicleDestruction {
                attack_id: self.attack_id,
                attacker: actor(self.attacker),
                vehicle: vehicle.clone().unwrap_or_default(),
                damage_type,
                damage_causer_name: self.damage_causer_name,
                distance: self.distance,
            }),
            EventKind::MatchStart => EventPayload::MatchStart(roster(self.characters)),
            EventKind::MatchEnd => EventPayload::MatchEnd(roster(self.characters)),
            EventKind::MatchDefinition => EventPayload::MatchDefinition(MatchDefinition {
                match_id: self.match_id,
                ping_quality: self.ping_quality,
            }),
            EventKind::GameStatePeriodic => EventPayload::GameStatePeriodic(
                self.game_state
                    .map(WireGameState::into_game_state)
                    .unwrap_or_default(),
            ),
            EventKind::CarePackageSpawn => {
                EventPayload::CarePackageSpawn(item_package.unwrap_or_default())
            }
            EventKind::CarePackageLand => {
                EventPayload::CarePackageLand(item_package.unwrap_or_default())
            }
        };

        let mut event = Event::new(self.version, self.timestamp, payload);
        event.character = character;
        Ok(event)
    }
}

/// Absent or `null` actor blocks become an unnamed character.
fn actor(wire: Option<WireCharacter>) -> Character {
    wire.map(WireCharacter::into_character).unwrap_or_default()
}

fn roster(characters: Vec<Option<WireCharacter>>) -> Roster {
    Roster {
        characters: characters
            .into_iter()
            .flatten()
            .map(WireCharacter::into_character)
            .collect(),
    }
}

fn location(wire: Option<WireLocation>) -> Location {
    wire.map(|loc| Location::new(loc.x, loc.y, loc.z))
        .unwrap_or_default()
}

impl WireCharacter {
    fn into_character(self) -> Character {
        Character {
            name: self.name,
            team_id: self.team_id,
            health: self.health,
            location: location(self.location),
            ranking: self.ranking,
            account_id: self.account_id,
        }
    }
}

impl WireItem {
    fn into_item(self) -> Result<Item> {
        Ok(Item {
            item_id: self.item_id,
            stack_count: self.stack_count,
            category: self.category,
            sub_category: decode_optional(self.sub_category.as_deref())?,
            attached_items: self.attached_items,
        })
    }
}

impl WireVehicle {
    fn into_vehicle(self) -> Vehicle {
        Vehicle {
            vehicle_type: self.vehicle_type,
            vehicle_id: self.vehicle_id,
            health_percent: self.health_percent,
            fuel_percent: self.fuel_percent,
        }
    }
}

impl WireItemPackage {
    fn into_package(self) -> Result<ItemPackage> {
        Ok(ItemPackage {
            item_package_id: self.item_package_id,
            location: location(self.location),
            items: self
                .items
                .into_iter()
                .map(WireItem::into_item)
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

impl WireGameState {
    fn into_game_state(self) -> GameState {
        GameState {
            elapsed_time: self.elapsed_time,
            num_alive_teams: self.num_alive_teams,
            num_join_players: self.num_join_players,
            num_start_players: self.num_start_players,
            num_alive_players: self.num_alive_players,
            safety_zone_position: location(self.safety_zone_position),
            safety_zone_radius: self.safety_zone_radius,
            poison_gas_warning_position: location(self.poison_gas_warning_position),
            poison_gas_warning_radius: self.poison_gas_warning_radius,
            red_zone_position: location(self.red_zone_position),
            red_zone_radius: self.red_zone_radius,
        }
    }
}
