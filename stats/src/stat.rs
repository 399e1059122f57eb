//! Stat roles and per-role value tables

/// One of the six permanent stats
///
/// Discriminants are the role identifiers packed into nature bytes; 0 means
/// "no stat" and has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Stat {
    Hp = 1,
    Attack = 2,
    Defense = 3,
    SpecialAttack = 4,
    SpecialDefense = 5,
    Speed = 6,
}

impl Stat {
    /// All six stats in table order
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// The five stats a nature can touch
    pub const NON_HP: [Stat; 5] = [
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Role identifier (1..=6)
    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=6 => Some(Self::ALL[usize::from(id - 1)]),
            _ => None,
        }
    }

    /// Parse from short form ("hp", "atk", "def", "spa", "spd", "spe")
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hp" => Some(Stat::Hp),
            "atk" => Some(Stat::Attack),
            "def" => Some(Stat::Defense),
            "spa" => Some(Stat::SpecialAttack),
            "spd" => Some(Stat::SpecialDefense),
            "spe" => Some(Stat::Speed),
            _ => None,
        }
    }

    /// Convert to short form
    pub fn to_short(&self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "atk",
            Stat::Defense => "def",
            Stat::SpecialAttack => "spa",
            Stat::SpecialDefense => "spd",
            Stat::Speed => "spe",
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "Special Attack",
            Stat::SpecialDefense => "Special Defense",
            Stat::Speed => "Speed",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One value per stat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatTable<T> {
    pub hp: T,
    pub atk: T,
    pub def: T,
    pub spa: T,
    pub spd: T,
    pub spe: T,
}

/// Per-species base stats (0-255)
pub type BaseStats = StatTable<u8>;

/// Final computed stats
pub type Stats = StatTable<u16>;

/// Individual values (0-31) or effort values (0-255)
pub type StatSpread = StatTable<u8>;

impl<T: Copy> StatTable<T> {
    pub fn new(hp: T, atk: T, def: T, spa: T, spd: T, spe: T) -> Self {
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    /// Get value for a stat
    pub fn get(&self, stat: Stat) -> T {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.atk,
            Stat::Defense => self.def,
            Stat::SpecialAttack => self.spa,
            Stat::SpecialDefense => self.spd,
            Stat::Speed => self.spe,
        }
    }

    /// Set value for a stat
    pub fn set(&mut self, stat: Stat, value: T) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.atk = value,
            Stat::Defense => self.def = value,
            Stat::SpecialAttack => self.spa = value,
            Stat::SpecialDefense => self.spd = value,
            Stat::Speed => self.spe = value,
        }
    }

    /// Values in table order (HP, Atk, Def, SpA, SpD, Spe)
    pub fn to_array(&self) -> [T; 6] {
        Stat::ALL.map(|s| self.get(s))
    }
}

impl<T: Copy> From<[T; 6]> for StatTable<T> {
    fn from(values: [T; 6]) -> Self {
        let [hp, atk, def, spa, spd, spe] = values;
        Self::new(hp, atk, def, spa, spd, spe)
    }
}

impl<T: Copy> std::ops::Index<Stat> for StatTable<T> {
    type Output = T;

    fn index(&self, stat: Stat) -> &T {
        match stat {
            Stat::Hp => &self.hp,
            Stat::Attack => &self.atk,
            Stat::Defense => &self.def,
            Stat::SpecialAttack => &self.spa,
            Stat::SpecialDefense => &self.spd,
            Stat::Speed => &self.spe,
        }
    }
}
