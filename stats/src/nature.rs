//! Natures and their stat modifiers

use std::str::FromStr;

use crate::error::NatureError;
use crate::stat::Stat;

/// A Pokemon nature: +10% to one stat, -10% to another.
///
/// The five natures whose boosted and reduced stat coincide are neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    /// All 25 natures
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    /// (boosted, reduced)
    pub const fn roles(self) -> (Stat, Stat) {
        use Stat::*;

        match self {
            Nature::Hardy => (Attack, Attack),
            Nature::Lonely => (Attack, Defense),
            Nature::Brave => (Attack, Speed),
            Nature::Adamant => (Attack, SpecialAttack),
            Nature::Naughty => (Attack, SpecialDefense),
            Nature::Bold => (Defense, Attack),
            Nature::Docile => (Defense, Defense),
            Nature::Relaxed => (Defense, Speed),
            Nature::Impish => (Defense, SpecialAttack),
            Nature::Lax => (Defense, SpecialDefense),
            Nature::Timid => (Speed, Attack),
            Nature::Hasty => (Speed, Defense),
            Nature::Serious => (Speed, Speed),
            Nature::Jolly => (Speed, SpecialAttack),
            Nature::Naive => (Speed, SpecialDefense),
            Nature::Modest => (SpecialAttack, Attack),
            Nature::Mild => (SpecialAttack, Defense),
            Nature::Quiet => (SpecialAttack, Speed),
            Nature::Bashful => (SpecialAttack, SpecialAttack),
            Nature::Rash => (SpecialAttack, SpecialDefense),
            Nature::Calm => (SpecialDefense, Attack),
            Nature::Gentle => (SpecialDefense, Defense),
            Nature::Sassy => (SpecialDefense, Speed),
            Nature::Careful => (SpecialDefense, SpecialAttack),
            Nature::Quirky => (SpecialDefense, SpecialDefense),
        }
    }

    /// Stat raised by 10%
    pub const fn boosted(self) -> Stat {
        self.roles().0
    }

    /// Stat lowered by 10%
    pub const fn reduced(self) -> Stat {
        self.roles().1
    }

    /// Check whether this nature has no net effect
    pub fn is_neutral(self) -> bool {
        self.boosted() == self.reduced()
    }

    /// Modifier for `stat` in whole percent (90, 100 or 110)
    pub fn percent(self, stat: Stat) -> u8 {
        let mut percent = 100;
        if stat == self.boosted() {
            percent += 10;
        }
        if stat == self.reduced() {
            percent -= 10;
        }
        percent
    }

    /// Multiplier for `stat`: 1.1, 0.9, or exactly 1.0
    pub fn modifier(self, stat: Stat) -> f32 {
        f32::from(self.percent(stat)) / 100.0
    }

    /// Packed form: boosted role in the high nibble, reduced in the low
    pub const fn to_byte(self) -> u8 {
        (self.boosted().id() << 4) | self.reduced().id()
    }

    /// Unpack a nature byte
    pub fn from_byte(byte: u8) -> Result<Self, NatureError> {
        Self::ALL
            .iter()
            .copied()
            .find(|n| n.to_byte() == byte)
            .ok_or_else(|| {
                tracing::debug!(byte, "Rejected nature byte");
                NatureError::InvalidRole(byte)
            })
    }

    /// Parse from a nature name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|n| n.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Nature::Hardy => "Hardy",
            Nature::Lonely => "Lonely",
            Nature::Brave => "Brave",
            Nature::Adamant => "Adamant",
            Nature::Naughty => "Naughty",
            Nature::Bold => "Bold",
            Nature::Docile => "Docile",
            Nature::Relaxed => "Relaxed",
            Nature::Impish => "Impish",
            Nature::Lax => "Lax",
            Nature::Timid => "Timid",
            Nature::Hasty => "Hasty",
            Nature::Serious => "Serious",
            Nature::Jolly => "Jolly",
            Nature::Naive => "Naive",
            Nature::Modest => "Modest",
            Nature::Mild => "Mild",
            Nature::Quiet => "Quiet",
            Nature::Bashful => "Bashful",
            Nature::Rash => "Rash",
            Nature::Calm => "Calm",
            Nature::Gentle => "Gentle",
            Nature::Sassy => "Sassy",
            Nature::Careful => "Careful",
            Nature::Quirky => "Quirky",
        }
    }
}

impl std::fmt::Display for Nature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Nature {
    type Err = NatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| NatureError::UnknownName(s.to_string()))
    }
}

impl TryFrom<u8> for Nature {
    type Error = NatureError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte)
    }
}

impl From<Nature> for u8 {
    fn from(nature: Nature) -> Self {
        nature.to_byte()
    }
}

/// Nature multiplier for one stat, see [`Nature::modifier`]
pub fn nature_modifier(nature: Nature, stat: Stat) -> f32 {
    nature.modifier(stat)
}
