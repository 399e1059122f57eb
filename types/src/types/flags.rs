//! Bit-flag representation of single and combined types

use bitflags::bitflags;

use crate::error::TypeError;

use super::pokemon_type::Type;

/// Highest bit position that names a real type
pub const MAX_ORDINAL: u8 = 18;

bitflags! {
    /// A set of elemental types packed into a mask, one bit per type.
    ///
    /// Bit `n - 1` is the type with ordinal `n`. Raw masks from callers are
    /// wrapped with [`TypeFlags::from_bits_retain`] so that [`validate`] can
    /// reject unknown bits instead of silently dropping them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TypeFlags: u32 {
        const NORMAL   = 1 << 0;
        const FIRE     = 1 << 1;
        const WATER    = 1 << 2;
        const GRASS    = 1 << 3;
        const ELECTRIC = 1 << 4;
        const ICE      = 1 << 5;
        const FIGHTING = 1 << 6;
        const POISON   = 1 << 7;
        const GROUND   = 1 << 8;
        const FLYING   = 1 << 9;
        const PSYCHIC  = 1 << 10;
        const BUG      = 1 << 11;
        const ROCK     = 1 << 12;
        const GHOST    = 1 << 13;
        const DRAGON   = 1 << 14;
        const DARK     = 1 << 15;
        const STEEL    = 1 << 16;
        const FAIRY    = 1 << 17;
    }
}

impl TypeFlags {
    /// Number of set bits
    pub fn count(self) -> u8 {
        self.bits().count_ones() as u8
    }

    /// Contained types, lowest ordinal first. Unknown bits are skipped.
    pub fn types(self) -> impl Iterator<Item = Type> {
        Type::ALL
            .into_iter()
            .filter(move |t| self.contains(t.flag()))
    }

    /// See [`validate`]
    pub fn validate(self, expected_max: u8) -> Result<Self, TypeError> {
        validate(self, expected_max)
    }
}

impl From<Type> for TypeFlags {
    fn from(t: Type) -> Self {
        t.flag()
    }
}

/// 1-based position of the highest set bit (Normal = 1, Fairy = 18).
///
/// Only meaningful on a single-type mask; a combined mask yields its highest
/// type and an empty mask yields 0.
pub fn ordinal_of(flags: TypeFlags) -> u8 {
    (u32::BITS - flags.bits().leading_zeros()) as u8
}

/// Check that `flags` names between one and `expected_max` real types.
///
/// `expected_max` must be 1 or 2. It is an upper bound only: a single type
/// passes with `expected_max = 2`, since a slot that may hold two types can
/// also hold one.
pub fn validate(flags: TypeFlags, expected_max: u8) -> Result<TypeFlags, TypeError> {
    if !(1..=2).contains(&expected_max) {
        return Err(TypeError::InvalidQuantity(expected_max));
    }

    let ordinal = ordinal_of(flags);
    if ordinal == 0 || ordinal > MAX_ORDINAL {
        return Err(TypeError::NoSuchType(flags.bits()));
    }

    let count = flags.count();
    if count > expected_max {
        return Err(TypeError::TooManyTypes {
            got: count,
            expected: expected_max,
        });
    }

    Ok(flags)
}
