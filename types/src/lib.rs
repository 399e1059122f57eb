//! Pokemon elemental types and the type effectiveness engine.
//!
//! # Overview
//!
//! `dexcore-types` answers one question for a battle simulator: how much
//! damage does an attacking type deal to a defender of one or two types?
//!
//! ```text
//! caller (type masks / enums)
//!        │
//!        ▼
//! validate ──> engine ──> TYPE_CHART (static 18x18)
//!        │
//!        ▼
//!       f32 multiplier (0, 0.25, 0.5, 1, 2, 4)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - the 18 elemental types, with chart lookups
//! - [`TypeFlags`] - bit-flag mask of one or more types
//! - [`Typing`] - single or dual typing as a tagged enum
//! - [`Effectiveness`] - the four-level chart scale
//! - [`type_multiplier`] - validating entry point for raw masks
//! - [`Matchup`] - every attacking type against one defender
//!
//! # Example Usage
//!
//! ```
//! use dexcore_types::{type_multiplier, Type, TypeFlags, Typing};
//!
//! // Raw masks are validated
//! let m = type_multiplier(TypeFlags::FAIRY, TypeFlags::DRAGON | TypeFlags::FIGHTING).unwrap();
//! assert_eq!(m, 4.0);
//! assert!(type_multiplier(TypeFlags::FIRE | TypeFlags::WATER, TypeFlags::FIRE).is_err());
//!
//! // Typed values cannot be invalid
//! let swampert = Typing::new(Type::Water, Type::Ground);
//! assert_eq!(Type::Grass.multiplier_against(&swampert), 4.0);
//! ```

pub mod chart;
pub mod engine;
pub mod error;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use chart::{Effectiveness, TYPE_CHART};
pub use engine::type_multiplier;
pub use error::{EffectivenessError, TypeError};
pub use query::Matchup;
pub use types::{MAX_ORDINAL, Type, TypeFlags, Typing, ordinal_of, validate};
