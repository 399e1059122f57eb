//! Query helpers over the effectiveness engine
//!
//! Type-level matchup questions a battle simulator asks when choosing moves
//! or switches. Every answer is computed through [`type_multiplier`](crate::type_multiplier).

mod matchup;

pub use matchup::Matchup;
