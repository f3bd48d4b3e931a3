//! Core data types shared by every stage of a run.

use serde::{Deserialize, Serialize};

/// Per-monster attributes taken from the static game data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterStats {
    pub level: u32,
    #[serde(default, alias = "isBoss")]
    pub boss: bool,
}

impl MonsterStats {
    pub fn new(level: u32, boss: bool) -> Self {
        Self { level, boss }
    }
}

/// A recorded `drop_data` row: `monster_id` can drop `item_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Association {
    pub monster_id: i32,
    pub item_id: i32,
}

impl Association {
    pub fn new(monster_id: i32, item_id: i32) -> Self {
        Self {
            monster_id,
            item_id,
        }
    }

    pub fn key(&self) -> DropKey {
        DropKey {
            monster_id: self.monster_id,
            item_id: self.item_id,
        }
    }
}

/// Key of a proposed row.
///
/// Field order matters: the derived `Ord` sorts by monster first, then item,
/// which is the order rows are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DropKey {
    pub monster_id: i32,
    pub item_id: i32,
}

/// A computed row ready for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChanceEntry {
    pub key: DropKey,
    pub chance: u64,
}

/// Half-open item id range `[low, high)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemIdRange {
    pub low: i32,
    pub high: i32,
}

impl ItemIdRange {
    /// Skill and mastery books (`228xxxx` and `229xxxx`)
    pub const SKILLBOOKS: Self = Self {
        low: 2_280_000,
        high: 2_300_000,
    };

    pub fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, item_id: i32) -> bool {
        item_id >= self.low && item_id < self.high
    }

    pub fn is_empty(&self) -> bool {
        self.high <= self.low
    }
}

impl Default for ItemIdRange {
    fn default() -> Self {
        Self::SKILLBOOKS
    }
}

impl std::fmt::Display for ItemIdRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_half_open() {
        let range = ItemIdRange::SKILLBOOKS;
        assert!(range.contains(2_280_000));
        assert!(range.contains(2_299_999));
        assert!(!range.contains(2_300_000));
        assert!(!range.contains(2_279_999));
    }

    #[test]
    fn test_drop_key_orders_by_monster_then_item() {
        let a = DropKey {
            monster_id: 1,
            item_id: 2_290_000,
        };
        let b = DropKey {
            monster_id: 2,
            item_id: 2_280_000,
        };
        let c = DropKey {
            monster_id: 2,
            item_id: 2_280_001,
        };
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_monster_stats_accepts_is_boss_alias() {
        let stats: MonsterStats =
            serde_json::from_str(r#"{"level": 120, "isBoss": true}"#).unwrap();
        assert_eq!(stats, MonsterStats::new(120, true));

        let stats: MonsterStats = serde_json::from_str(r#"{"level": 7}"#).unwrap();
        assert!(!stats.boss);
    }
}
