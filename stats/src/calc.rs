//! Final stat calculation
//!
//! Uses the Gen 3+ formulas:
//!
//! ```text
//! HP    = ((2 * Base + IV + EV / 4) * Level) / 100 + Level + 10
//! Other = (((2 * Base + IV + EV / 4) * Level) / 100 + 5) * Nature
//! ```
//!
//! Every division truncates. The nature is applied last, in whole percent.

use crate::nature::Nature;
use crate::stat::{BaseStats, Stat, StatSpread, Stats};

/// Final stats from base stats, level and nature, with no IVs or EVs
pub fn calculate_stats(level: u8, base: &BaseStats, nature: Nature) -> Stats {
    calculate_stats_with(level, base, nature, &StatSpread::default(), &StatSpread::default())
}

/// Final stats including individual and effort values
pub fn calculate_stats_with(
    level: u8,
    base: &BaseStats,
    nature: Nature,
    ivs: &StatSpread,
    evs: &StatSpread,
) -> Stats {
    let mut stats = Stats::default();
    for stat in Stat::ALL {
        let value = calculate_stat(
            stat,
            level,
            base.get(stat),
            ivs.get(stat),
            evs.get(stat),
            nature,
        );
        stats.set(stat, value);
    }
    stats
}

/// A single final stat. Values past `u16::MAX` saturate.
pub fn calculate_stat(stat: Stat, level: u8, base: u8, iv: u8, ev: u8, nature: Nature) -> u16 {
    let level = u32::from(level);
    let core = (2 * u32::from(base) + u32::from(iv) + u32::from(ev) / 4) * level / 100;

    let value = match stat {
        Stat::Hp => core + level + 10,
        _ => (core + 5) * u32::from(nature.percent(stat)) / 100,
    };

    u16::try_from(value).unwrap_or(u16::MAX)
}
