//! Expected drop chance heuristic.
//!
//! The numbers here reproduce the chances already present in `drop_data` for
//! skillbooks, including the truncating division on the level term. Changing
//! the arithmetic changes every generated row.

use crate::types::MonsterStats;

/// Starting chance before any multiplier
pub const BASE_CHANCE: u64 = 250;

/// Chance used when the dropper has no known stats
pub const UNKNOWN_MONSTER_CHANCE: u64 = 1287;

/// Smallest level multiplier
pub const MIN_LEVEL_MULTIPLIER: i64 = 2;

pub const BOSS_MULTIPLIER: u64 = 20;

pub const HIGH_TIER_MULTIPLIER: u64 = 3;

/// Level multiplier: `max(2, (level - 80) / 15)`, truncating toward zero.
///
/// Levels below 80 give a negative quotient and therefore always clamp to 2.
pub fn level_multiplier(level: u32) -> u64 {
    let quotient = (i64::from(level) - 80) / 15;
    quotient.max(MIN_LEVEL_MULTIPLIER).unsigned_abs()
}

/// Whether an item id is a high-tier book that drops more rarely.
///
/// `228xxxx` books from `2280013` up and `229xxxx` books from `2290126` up.
pub fn is_high_tier(item_id: i32) -> bool {
    match item_id / 10000 {
        228 => item_id >= 2_280_013,
        229 => item_id >= 2_290_126,
        _ => false,
    }
}

/// Compute the expected chance for one monster/item association.
///
/// `stats` is `None` when the monster is missing from the stats provider; that
/// takes the flat fallback instead of the level/boss scaling. The high-tier
/// multiplier applies either way. The result is always at least 250.
pub fn compute_chance(_monster_id: i32, item_id: i32, stats: Option<&MonsterStats>) -> u64 {
    let mut chance = match stats {
        Some(stats) => {
            let scaled = BASE_CHANCE * level_multiplier(stats.level);
            if stats.boss {
                scaled * BOSS_MULTIPLIER
            } else {
                scaled
            }
        }
        None => UNKNOWN_MONSTER_CHANCE,
    };

    if is_high_tier(item_id) {
        chance *= HIGH_TIER_MULTIPLIER;
    }

    chance
}
