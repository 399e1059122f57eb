//! The eighteen elemental types

use std::str::FromStr;

use crate::chart::{Effectiveness, TYPE_CHART};
use crate::error::TypeError;

use super::flags::TypeFlags;
use super::typing::Typing;

/// Pokemon types (18 types as of Gen 6+)
///
/// Discriminants are the 1-based ordinals used to index the effectiveness
/// chart and to place the type's bit in a [`TypeFlags`] mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Type {
    Normal = 1,
    Fire = 2,
    Water = 3,
    Grass = 4,
    Electric = 5,
    Ice = 6,
    Fighting = 7,
    Poison = 8,
    Ground = 9,
    Flying = 10,
    Psychic = 11,
    Bug = 12,
    Rock = 13,
    Ghost = 14,
    Dragon = 15,
    Dark = 16,
    Steel = 17,
    Fairy = 18,
}

impl Type {
    /// Number of elemental types
    pub const COUNT: usize = 18;

    /// All 18 Pokemon types, in ordinal order
    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// 1-based position of this type (Normal = 1, Fairy = 18)
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a type by its 1-based ordinal
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1..=18 => Some(Self::ALL[usize::from(ordinal - 1)]),
            _ => None,
        }
    }

    /// The single bit representing this type in a mask
    pub const fn flag(self) -> TypeFlags {
        TypeFlags::from_bits_retain(1 << (self as u32 - 1))
    }

    /// Chart entry for this type attacking a single defending type
    pub fn effectiveness(self, defender: Type) -> Effectiveness {
        TYPE_CHART[usize::from(self.ordinal() - 1)][usize::from(defender.ordinal() - 1)]
    }

    /// Damage multiplier against a single defending type
    pub fn multiplier(self, defender: Type) -> f32 {
        self.effectiveness(defender).multiplier()
    }

    /// Damage multiplier against a single or dual typing (multiplied)
    pub fn multiplier_against(self, defender: &Typing) -> f32 {
        defender
            .types()
            .map(|t| self.multiplier(t))
            .product()
    }

    /// Parse from a type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "grass" => Some(Type::Grass),
            "electric" => Some(Type::Electric),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Grass => "Grass",
            Type::Electric => "Electric",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Type {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TypeError::UnknownName(s.to_string()))
    }
}
