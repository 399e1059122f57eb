//! Defensive matchup of one typing against every attacking type

use crate::engine::type_multiplier;
use crate::error::EffectivenessError;
use crate::types::{Type, TypeFlags};

const SUPER_EFFECTIVE: [f32; 2] = [2.0, 4.0];
const NOT_VERY_EFFECTIVE: [f32; 2] = [0.25, 0.5];

/// Multiplier of every attacking type against a single defender.
///
/// Built through [`type_multiplier`], so the defender is validated once and
/// every entry is one of 0, 0.25, 0.5, 1, 2 or 4.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matchup {
    defender: TypeFlags,
    multipliers: [f32; Type::COUNT],
}

impl Matchup {
    /// Evaluate all 18 attacking types against `defender`.
    ///
    /// Fails with [`EffectivenessError::InvalidDefender`] when the mask is
    /// empty, names an unknown type, or holds more than two types.
    pub fn against(defender: impl Into<TypeFlags>) -> Result<Self, EffectivenessError> {
        let defender = defender.into();
        let mut multipliers = [1.0; Type::COUNT];
        for (slot, attacker) in multipliers.iter_mut().zip(Type::ALL) {
            *slot = type_multiplier(attacker, defender)?;
        }
        Ok(Self {
            defender,
            multipliers,
        })
    }

    pub fn defender(&self) -> TypeFlags {
        self.defender
    }

    /// Multiplier `attacker` deals to the defender
    pub fn multiplier(&self, attacker: Type) -> f32 {
        self.multipliers[usize::from(attacker.ordinal() - 1)]
    }

    /// Attacking types that deal exactly `multiplier`, lowest ordinal first
    pub fn dealing(&self, multiplier: f32) -> Vec<Type> {
        self.attackers(|m| m == multiplier)
    }

    /// Attacking types dealing 2x or 4x
    pub fn weaknesses(&self) -> Vec<Type> {
        self.attackers(|m| SUPER_EFFECTIVE.contains(&m))
    }

    /// Attacking types dealing 0.5x or 0.25x. Immunities are not included.
    pub fn resistances(&self) -> Vec<Type> {
        self.attackers(|m| NOT_VERY_EFFECTIVE.contains(&m))
    }

    /// Attacking types that have no effect
    pub fn immunities(&self) -> Vec<Type> {
        self.dealing(0.0)
    }

    pub fn is_immune_to(&self, attacker: Type) -> bool {
        self.multiplier(attacker) == 0.0
    }

    /// Check whether any of `attackers` is super effective
    pub fn is_weak_to_any(&self, attackers: &[Type]) -> bool {
        attackers
            .iter()
            .any(|t| SUPER_EFFECTIVE.contains(&self.multiplier(*t)))
    }

    /// Check whether every one of `attackers` is resisted. False when empty.
    pub fn resists_all(&self, attackers: &[Type]) -> bool {
        !attackers.is_empty()
            && attackers
                .iter()
                .all(|t| NOT_VERY_EFFECTIVE.contains(&self.multiplier(*t)))
    }

    fn attackers(&self, keep: impl Fn(f32) -> bool) -> Vec<Type> {
        Type::ALL
            .into_iter()
            .zip(self.multipliers)
            .filter(|(_, m)| keep(*m))
            .map(|(t, _)| t)
            .collect()
    }
}
