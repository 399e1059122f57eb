//! Type effectiveness scale and the 18x18 chart

use crate::types::Type;

/// How well one attacking type hits one defending type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Effectiveness {
    /// No effect (0x)
    Immune = 0,
    /// Not very effective (0.5x)
    Resisted = 1,
    /// Neutral (1x)
    Neutral = 2,
    /// Super effective (2x)
    Weak = 3,
}

impl Effectiveness {
    /// Stored ordinal (0..=3)
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Damage multiplier: 0 when immune, otherwise 2^(ordinal - 1) / 2
    pub fn multiplier(self) -> f32 {
        match self.ordinal() {
            0 => 0.0,
            n => f32::from(1u8 << (n - 1)) / 2.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Effectiveness::Immune => "no effect",
            Effectiveness::Resisted => "not very effective",
            Effectiveness::Neutral => "neutral",
            Effectiveness::Weak => "super effective",
        }
    }
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const I: Effectiveness = Effectiveness::Immune;
const R: Effectiveness = Effectiveness::Resisted;
const N: Effectiveness = Effectiveness::Neutral;
const W: Effectiveness = Effectiveness::Weak;

/// 18x18 type effectiveness chart
/// Row = attacking type, Column = defending type, both at `ordinal - 1`
///
/// Order: Normal, Fire, Water, Grass, Electric, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
pub static TYPE_CHART: [[Effectiveness; Type::COUNT]; Type::COUNT] = [
    //  Nor Fir Wat Gra Ele Ice Fig Poi Gro Fly Psy Bug Roc Gho Dra Dar Ste Fai
    // Normal attacking
    [N, N, N, N, N, N, N, N, N, N, N, N, R, I, N, N, R, N],
    // Fire attacking
    [N, R, R, W, N, W, N, N, N, N, N, W, R, N, R, N, W, N],
    // Water attacking
    [N, W, R, R, N, N, N, N, W, N, N, N, W, N, R, N, N, N],
    // Grass attacking
    [N, R, W, R, N, N, N, R, W, R, N, R, W, N, R, N, R, N],
    // Electric attacking
    [N, N, W, R, R, N, N, N, I, W, N, N, N, N, R, N, N, N],
    // Ice attacking
    [N, R, R, W, N, R, N, N, W, W, N, N, N, N, W, N, R, N],
    // Fighting attacking
    [W, N, N, N, N, W, N, R, N, R, R, R, W, I, N, W, W, R],
    // Poison attacking
    [N, N, N, W, N, N, N, R, R, N, N, N, R, R, N, N, I, W],
    // Ground attacking
    [N, W, N, R, W, N, N, W, N, I, N, R, W, N, N, N, W, N],
    // Flying attacking
    [N, N, N, W, R, N, W, N, N, N, N, W, R, N, N, N, R, N],
    // Psychic attacking
    [N, N, N, N, N, N, W, W, N, N, R, N, N, N, N, I, R, N],
    // Bug attacking
    [N, R, N, W, N, N, R, R, N, R, W, N, N, R, N, W, R, R],
    // Rock attacking
    [N, W, N, N, N, W, R, N, R, W, N, W, N, N, N, N, R, N],
    // Ghost attacking
    [I, N, N, N, N, N, N, N, N, N, W, N, N, W, N, R, N, N],
    // Dragon attacking
    [N, N, N, N, N, N, N, N, N, N, N, N, N, N, W, N, R, I],
    // Dark attacking
    [N, N, N, N, N, N, R, N, N, N, W, N, N, W, N, R, N, R],
    // Steel attacking
    [N, R, R, N, R, W, N, N, N, N, N, N, W, N, N, N, R, W],
    // Fairy attacking
    [N, R, N, N, N, N, W, R, N, N, N, N, N, N, W, W, R, N],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_per_ordinal() {
        assert_eq!(Effectiveness::Immune.multiplier(), 0.0);
        assert_eq!(Effectiveness::Resisted.multiplier(), 0.5);
        assert_eq!(Effectiveness::Neutral.multiplier(), 1.0);
        assert_eq!(Effectiveness::Weak.multiplier(), 2.0);
    }

    #[test]
    fn test_ordinal_order_matches_multiplier_order() {
        let scale = [I, R, N, W];
        for (ordinal, eff) in scale.iter().enumerate() {
            assert_eq!(usize::from(eff.ordinal()), ordinal);
        }
        for pair in scale.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
    }

    #[test]
    fn test_chart_rows() {
        let row = |t: Type| &TYPE_CHART[usize::from(t.ordinal() - 1)];

        // Normal only struggles against Rock, Ghost and Steel
        let normal = row(Type::Normal);
        assert_eq!(normal.iter().filter(|e| **e != N).count(), 3);

        // Fairy is immune to Dragon, which hits itself super effectively
        let dragon = row(Type::Dragon);
        assert_eq!(dragon[usize::from(Type::Fairy.ordinal() - 1)], I);
        assert_eq!(dragon[usize::from(Type::Dragon.ordinal() - 1)], W);
    }

    #[test]
    fn test_chart_immunities() {
        let immunities: Vec<(Type, Type)> = Type::all()
            .iter()
            .flat_map(|a| Type::all().iter().map(move |d| (*a, *d)))
            .filter(|(a, d)| a.effectiveness(*d) == I)
            .collect();

        assert_eq!(
            immunities,
            vec![
                (Type::Normal, Type::Ghost),
                (Type::Electric, Type::Ground),
                (Type::Fighting, Type::Ghost),
                (Type::Poison, Type::Steel),
                (Type::Ground, Type::Flying),
                (Type::Psychic, Type::Dark),
                (Type::Ghost, Type::Normal),
                (Type::Dragon, Type::Fairy),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Effectiveness::Weak.to_string(), "super effective");
        assert_eq!(Effectiveness::Immune.to_string(), "no effect");
    }
}
