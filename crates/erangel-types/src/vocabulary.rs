//! Closed enumerations carried as plain strings on the telemetry wire.

use serde::Serialize;

use crate::{ErangelError, Result};

/// A fixed, ordered set of wire symbols.
///
/// The position of a variant in [`Vocabulary::VARIANTS`] is its discriminant.
/// Decoding is an exact, case-sensitive match; anything outside the list is an
/// error rather than a fallback variant.
pub trait Vocabulary: Sized + Copy + PartialEq + 'static {
    /// Name reported in [`ErangelError::UnknownEnumValue`].
    const NAME: &'static str;
    const VARIANTS: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn index(&self) -> usize;

    fn from_index(index: usize) -> Option<Self> {
        Self::VARIANTS.get(index).copied()
    }

    fn decode(raw: &str) -> Result<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == raw)
            .ok_or_else(|| ErangelError::unknown_value(Self::NAME, raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AttackType {
    RedZone,
    Weapon,
}

impl Vocabulary for AttackType {
    const NAME: &'static str = "AttackType";
    const VARIANTS: &'static [Self] = &[AttackType::RedZone, AttackType::Weapon];

    fn as_str(&self) -> &'static str {
        match self {
            AttackType::RedZone => "RedZone",
            AttackType::Weapon => "Weapon",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemSubCategory {
    Backpack,
    Boost,
    Fuel,
    Handgun,
    Headgear,
    Heal,
    Main,
    Melee,
    Throwable,
    Vest,
    Jacket,
    None,
    #[serde(rename = "")]
    Empty,
}

impl Vocabulary for ItemSubCategory {
    const NAME: &'static str = "ItemSubCategory";
    const VARIANTS: &'static [Self] = &[
        ItemSubCategory::Backpack,
        ItemSubCategory::Boost,
        ItemSubCategory::Fuel,
        ItemSubCategory::Handgun,
        ItemSubCategory::Headgear,
        ItemSubCategory::Heal,
        ItemSubCategory::Main,
        ItemSubCategory::Melee,
        ItemSubCategory::Throwable,
        ItemSubCategory::Vest,
        ItemSubCategory::Jacket,
        ItemSubCategory::None,
        ItemSubCategory::Empty,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ItemSubCategory::Backpack => "Backpack",
            ItemSubCategory::Boost => "Boost",
            ItemSubCategory::Fuel => "Fuel",
            ItemSubCategory::Handgun => "Handgun",
            ItemSubCategory::Headgear => "Headgear",
            ItemSubCategory::Heal => "Heal",
            ItemSubCategory::Main => "Main",
            ItemSubCategory::Melee => "Melee",
            ItemSubCategory::Throwable => "Throwable",
            ItemSubCategory::Vest => "Vest",
            ItemSubCategory::Jacket => "Jacket",
            ItemSubCategory::None => "None",
            ItemSubCategory::Empty => "",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DamageType {
    #[serde(rename = "Damage_BlueZone")]
    BlueZone,
    #[serde(rename = "Damage_Drown")]
    Drown,
    #[serde(rename = "Damage_Explosion_Grenade")]
    ExplosionGrenade,
    #[serde(rename = "Damage_Explosion_RedZone")]
    ExplosionRedZone,
    #[serde(rename = "Damage_Explosion_Vehicle")]
    ExplosionVehicle,
    #[serde(rename = "Damage_Groggy")]
    Groggy,
    #[serde(rename = "Damage_Gun")]
    Gun,
    #[serde(rename = "Damage_Instant_Fall")]
    InstantFall,
    #[serde(rename = "Damage_Melee")]
    Melee,
    #[serde(rename = "Damage_Molotov")]
    Molotov,
    #[serde(rename = "Damage_VehicleCrashHit")]
    VehicleCrashHit,
    #[serde(rename = "Damage_VehicleHit")]
    VehicleHit,
    #[serde(rename = "")]
    Empty,
}

impl Vocabulary for DamageType {
    const NAME: &'static str = "DamageType";
    const VARIANTS: &'static [Self] = &[
        DamageType::BlueZone,
        DamageType::Drown,
        DamageType::ExplosionGrenade,
        DamageType::ExplosionRedZone,
        DamageType::ExplosionVehicle,
        DamageType::Groggy,
        DamageType::Gun,
        DamageType::InstantFall,
        DamageType::Melee,
        DamageType::Molotov,
        DamageType::VehicleCrashHit,
        DamageType::VehicleHit,
        DamageType::Empty,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            DamageType::BlueZone => "Damage_BlueZone",
            DamageType::Drown => "Damage_Drown",
            DamageType::ExplosionGrenade => "Damage_Explosion_Grenade",
            DamageType::ExplosionRedZone => "Damage_Explosion_RedZone",
            DamageType::ExplosionVehicle => "Damage_Explosion_Vehicle",
            DamageType::Groggy => "Damage_Groggy",
            DamageType::Gun => "Damage_Gun",
            DamageType::InstantFall => "Damage_Instant_Fall",
            DamageType::Melee => "Damage_Melee",
            DamageType::Molotov => "Damage_Molotov",
            DamageType::VehicleCrashHit => "Damage_VehicleCrashHit",
            DamageType::VehicleHit => "Damage_VehicleHit",
            DamageType::Empty => "",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DamageReason {
    ArmShot,
    HeadShot,
    LegShot,
    PelvisShot,
    TorsoShot,
    NonSpecific,
    None,
}

impl Vocabulary for DamageReason {
    const NAME: &'static str = "DamageReason";
    const VARIANTS: &'static [Self] = &[
        DamageReason::ArmShot,
        DamageReason::HeadShot,
        DamageReason::LegShot,
        DamageReason::PelvisShot,
        DamageReason::TorsoShot,
        DamageReason::NonSpecific,
        DamageReason::None,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            DamageReason::ArmShot => "ArmShot",
            DamageReason::HeadShot => "HeadShot",
            DamageReason::LegShot => "LegShot",
            DamageReason::PelvisShot => "PelvisShot",
            DamageReason::TorsoShot => "TorsoShot",
            DamageReason::NonSpecific => "NonSpecific",
            DamageReason::None => "None",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Decode an optional wire symbol; absence stays absence.
pub fn decode_optional<T: Vocabulary>(raw: Option<&str>) -> Result<Option<T>> {
    raw.map(T::decode).transpose()
}
