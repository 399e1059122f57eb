//! Effectiveness engine: validates type masks and folds chart lookups

use crate::chart::TYPE_CHART;
use crate::error::EffectivenessError;
use crate::types::{TypeFlags, ordinal_of, validate};

/// Total damage multiplier of an attacking type against a defender.
///
/// The attacker must be exactly one type and the defender one or two. For a
/// dual-typed defender the result is the product of both single-type
/// multipliers, so it is always one of 0, 0.25, 0.5, 1, 2 or 4.
///
/// Accepts raw [`TypeFlags`] as well as [`Type`](crate::Type) and
/// [`Typing`](crate::Typing) values.
pub fn type_multiplier(
    attacker: impl Into<TypeFlags>,
    defender: impl Into<TypeFlags>,
) -> Result<f32, EffectivenessError> {
    let attacker = attacker.into();
    let defender = defender.into();

    let attacker = validate(attacker, 1).map_err(|e| {
        tracing::debug!(attacker = attacker.bits(), error = %e, "Rejected attacker type");
        EffectivenessError::InvalidAttacker(e)
    })?;

    let defender = validate(defender, 2).map_err(|e| {
        tracing::debug!(defender = defender.bits(), error = %e, "Rejected defender type");
        EffectivenessError::InvalidDefender(e)
    })?;

    let attacker_ordinal = ordinal_of(attacker);
    let multiplier: f32 = defender
        .types()
        .map(|t| single_type_multiplier(attacker_ordinal, t.ordinal()))
        .product();

    tracing::trace!(
        attacker = attacker.bits(),
        defender = defender.bits(),
        multiplier,
        "Computed type multiplier"
    );

    Ok(multiplier)
}

/// Chart multiplier for one attacking ordinal against one defending ordinal.
///
/// Both ordinals must already be in 1..=18.
pub(crate) fn single_type_multiplier(attacker_ordinal: u8, defender_ordinal: u8) -> f32 {
    TYPE_CHART[usize::from(attacker_ordinal - 1)][usize::from(defender_ordinal - 1)].multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TypeError;
    use crate::types::{Type, Typing};

    #[test]
    fn test_single_type_multiplier() {
        let m = |a: Type, d: Type| single_type_multiplier(a.ordinal(), d.ordinal());

        assert_eq!(m(Type::Fire, Type::Grass), 2.0);
        assert_eq!(m(Type::Fire, Type::Normal), 1.0);
        assert_eq!(m(Type::Fire, Type::Rock), 0.5);
        assert_eq!(m(Type::Ghost, Type::Normal), 0.0);
    }

    #[test]
    fn test_guard_clauses_attacker() {
        assert!(type_multiplier(TypeFlags::FIRE, TypeFlags::FIRE).is_ok());

        assert_eq!(
            type_multiplier(TypeFlags::FIRE | TypeFlags::WATER, TypeFlags::FIRE),
            Err(EffectivenessError::InvalidAttacker(TypeError::TooManyTypes {
                got: 2,
                expected: 1
            }))
        );
        assert_eq!(
            type_multiplier(TypeFlags::empty(), TypeFlags::FIRE),
            Err(EffectivenessError::InvalidAttacker(TypeError::NoSuchType(0)))
        );
        assert!(matches!(
            type_multiplier(TypeFlags::from_bits_retain(1 << 18), TypeFlags::FIRE),
            Err(EffectivenessError::InvalidAttacker(TypeError::NoSuchType(_)))
        ));
    }

    #[test]
    fn test_guard_clauses_defender() {
        assert!(type_multiplier(TypeFlags::FIRE, TypeFlags::FIRE).is_ok());
        assert!(type_multiplier(TypeFlags::FIRE, TypeFlags::FIRE | TypeFlags::NORMAL).is_ok());

        assert_eq!(
            type_multiplier(TypeFlags::FIRE, TypeFlags::empty()),
            Err(EffectivenessError::InvalidDefender(TypeError::NoSuchType(0)))
        );
        assert_eq!(
            type_multiplier(
                TypeFlags::FIRE,
                TypeFlags::FIRE | TypeFlags::WATER | TypeFlags::GRASS
            ),
            Err(EffectivenessError::InvalidDefender(TypeError::TooManyTypes {
                got: 3,
                expected: 2
            }))
        );
    }

    #[test]
    fn test_attacker_checked_before_defender() {
        assert!(matches!(
            type_multiplier(TypeFlags::empty(), TypeFlags::empty()),
            Err(EffectivenessError::InvalidAttacker(_))
        ));
    }

    #[test]
    fn test_error_source_is_type_error() {
        use std::error::Error;

        let err = type_multiplier(TypeFlags::FIRE, TypeFlags::empty()).unwrap_err();
        let source = err.source().expect("wrapped type error");
        assert_eq!(source.to_string(), TypeError::NoSuchType(0).to_string());
    }

    #[test]
    fn test_immune() {
        assert_eq!(type_multiplier(TypeFlags::GROUND, TypeFlags::FLYING), Ok(0.0));
        assert_eq!(
            type_multiplier(TypeFlags::GROUND, TypeFlags::FLYING | TypeFlags::ELECTRIC),
            Ok(0.0)
        );
        assert_eq!(type_multiplier(TypeFlags::GHOST, TypeFlags::NORMAL), Ok(0.0));
    }

    #[test]
    fn test_resisted() {
        assert_eq!(type_multiplier(TypeFlags::FIRE, TypeFlags::WATER), Ok(0.5));
        assert_eq!(type_multiplier(TypeFlags::FIRE, TypeFlags::ROCK), Ok(0.5));
        assert_eq!(
            type_multiplier(TypeFlags::FIRE, TypeFlags::WATER | TypeFlags::FIRE),
            Ok(0.25)
        );
    }

    #[test]
    fn test_neutral() {
        assert_eq!(type_multiplier(TypeFlags::NORMAL, TypeFlags::FIGHTING), Ok(1.0));
        assert_eq!(type_multiplier(TypeFlags::FIRE, TypeFlags::NORMAL), Ok(1.0));
        assert_eq!(
            type_multiplier(TypeFlags::FIRE, TypeFlags::FIGHTING | TypeFlags::POISON),
            Ok(1.0)
        );
    }

    #[test]
    fn test_super_effective() {
        assert_eq!(type_multiplier(TypeFlags::FIRE, TypeFlags::GRASS), Ok(2.0));
        assert_eq!(type_multiplier(TypeFlags::FAIRY, TypeFlags::DRAGON), Ok(2.0));
        assert_eq!(
            type_multiplier(TypeFlags::FAIRY, TypeFlags::DRAGON | TypeFlags::FIGHTING),
            Ok(4.0)
        );
    }

    #[test]
    fn test_mixed() {
        let ground = TypeFlags::GROUND;
        assert_eq!(type_multiplier(ground, TypeFlags::FLYING | TypeFlags::GRASS), Ok(0.0));
        assert_eq!(type_multiplier(ground, TypeFlags::FLYING | TypeFlags::NORMAL), Ok(0.0));
        assert_eq!(type_multiplier(ground, TypeFlags::FLYING | TypeFlags::ROCK), Ok(0.0));
        assert_eq!(type_multiplier(ground, TypeFlags::GRASS | TypeFlags::NORMAL), Ok(0.5));
        assert_eq!(type_multiplier(ground, TypeFlags::GRASS | TypeFlags::STEEL), Ok(1.0));
        assert_eq!(type_multiplier(ground, TypeFlags::NORMAL | TypeFlags::STEEL), Ok(2.0));
    }

    #[test]
    fn test_ground_never_hits_flying() {
        for other in Type::all() {
            let defender = Type::Flying.flag() | other.flag();
            assert_eq!(type_multiplier(Type::Ground, defender), Ok(0.0));
        }
    }

    #[test]
    fn test_dual_is_product_of_singles() {
        for a in Type::all() {
            for (i, d1) in Type::all().iter().enumerate() {
                for d2 in &Type::all()[i + 1..] {
                    let dual = type_multiplier(*a, d1.flag() | d2.flag()).unwrap();
                    let product = single_type_multiplier(a.ordinal(), d1.ordinal())
                        * single_type_multiplier(a.ordinal(), d2.ordinal());
                    assert_eq!(dual, product, "{} vs {}/{}", a, d1, d2);
                }
            }
        }
    }

    #[test]
    fn test_multiplier_range_and_purity() {
        const ALLOWED: [f32; 6] = [0.0, 0.25, 0.5, 1.0, 2.0, 4.0];

        for a in Type::all() {
            for d1 in Type::all() {
                for d2 in Type::all() {
                    let typing = Typing::new(*d1, *d2);
                    let first = type_multiplier(*a, typing).unwrap();
                    let second = type_multiplier(*a, typing).unwrap();
                    assert_eq!(first, second);
                    assert!(ALLOWED.contains(&first), "{} vs {} gave {}", a, typing, first);
                }
            }
        }
    }

    #[test]
    fn test_agrees_with_typed_front_end() {
        for a in Type::all() {
            for d1 in Type::all() {
                for d2 in Type::all() {
                    let typing = Typing::new(*d1, *d2);
                    assert_eq!(
                        type_multiplier(*a, typing),
                        Ok(a.multiplier_against(&typing))
                    );
                }
            }
        }
    }
}
