//! Pokemon stat calculation and nature modifiers.
//!
//! Independent of `dexcore-types`; no state is shared between the two.
//!
//! # Main Types
//!
//! - [`Stat`] - the six stat roles
//! - [`Nature`] - the 25 natures and their ±10% modifiers
//! - [`BaseStats`], [`Stats`], [`StatSpread`] - per-stat value tables
//! - [`calculate_stats`] - final stats from level, base stats and nature
//!
//! # Example Usage
//!
//! ```
//! use dexcore_stats::{calculate_stats, BaseStats, Nature, Stat};
//!
//! let garchomp = BaseStats::new(108, 130, 95, 80, 85, 102);
//! let stats = calculate_stats(100, &garchomp, Nature::Adamant);
//!
//! assert_eq!(stats.hp, 326);
//! assert_eq!(stats.get(Stat::Attack), 291);
//! assert_eq!(Nature::Adamant.modifier(Stat::Attack), 1.1);
//! ```

pub mod calc;
pub mod error;
pub mod nature;
pub mod stat;

pub use calc::{calculate_stat, calculate_stats, calculate_stats_with};
pub use error::NatureError;
pub use nature::{Nature, nature_modifier};
pub use stat::{BaseStats, Stat, StatSpread, StatTable, Stats};
