//! Computed chances keyed by monster/item pair.

use crate::chance::compute_chance;
use crate::stats::MonsterStatsProvider;
use crate::types::{Association, ChanceEntry, DropKey};
use std::collections::BTreeMap;

/// One chance per distinct monster/item pair.
///
/// Entries iterate in ascending `(monster_id, item_id)` order regardless of
/// the order associations were folded in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChanceTable {
    entries: BTreeMap<DropKey, u64>,
}

impl ChanceTable {
    /// Fold associations into a table, computing each chance with `stats`.
    ///
    /// A pair seen twice keeps the later computation; chances never accumulate.
    pub fn build<S>(associations: &[Association], stats: &S) -> Self
    where
        S: MonsterStatsProvider + ?Sized,
    {
        associations
            .iter()
            .map(|a| ChanceEntry {
                key: a.key(),
                chance: compute_chance(a.monster_id, a.item_id, stats.stats(a.monster_id)),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, monster_id: i32, item_id: i32) -> Option<u64> {
        self.entries
            .get(&DropKey {
                monster_id,
                item_id,
            })
            .copied()
    }

    /// Entries sorted by monster id, then item id
    pub fn entries(&self) -> impl ExactSizeIterator<Item = ChanceEntry> + '_ {
        self.entries
            .iter()
            .map(|(&key, &chance)| ChanceEntry { key, chance })
    }

    /// Number of distinct droppers in the table
    pub fn monster_count(&self) -> usize {
        let mut count = 0;
        let mut last = None;
        for key in self.entries.keys() {
            if last != Some(key.monster_id) {
                count += 1;
                last = Some(key.monster_id);
            }
        }
        count
    }
}

impl FromIterator<ChanceEntry> for ChanceTable {
    fn from_iter<I: IntoIterator<Item = ChanceEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|e| (e.key, e.chance)).collect(),
        }
    }
}
