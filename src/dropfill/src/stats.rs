//! Monster stats lookup.
//!
//! Stats are materialized before a run starts and never change during it.
//! Monsters missing from the mapping are not an error; the chance calculator
//! has a fallback for them.

use crate::error::{DropfillError, Result};
use crate::types::MonsterStats;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Lookup of per-monster stats by monster id
pub trait MonsterStatsProvider {
    /// Stats for a monster, or `None` if the monster is unknown
    fn stats(&self, monster_id: i32) -> Option<&MonsterStats>;
}

impl MonsterStatsProvider for HashMap<i32, MonsterStats> {
    fn stats(&self, monster_id: i32) -> Option<&MonsterStats> {
        self.get(&monster_id)
    }
}

impl MonsterStatsProvider for BTreeMap<i32, MonsterStats> {
    fn stats(&self, monster_id: i32) -> Option<&MonsterStats> {
        self.get(&monster_id)
    }
}

/// Monster stats loaded from a static data file.
///
/// The file is a map from monster id to `{ "level": .., "boss": .. }`, as JSON
/// or YAML (picked by `.yaml`/`.yml` extension, JSON otherwise).
#[derive(Debug, Clone, Default)]
pub struct MonsterStatsMap {
    stats: HashMap<i32, MonsterStats>,
}

impl MonsterStatsMap {
    /// Load a stats mapping from a JSON or YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DropfillError::StatsLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        );

        let stats: HashMap<i32, MonsterStats> = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| DropfillError::StatsParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| DropfillError::StatsParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        Ok(Self { stats })
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

impl From<HashMap<i32, MonsterStats>> for MonsterStatsMap {
    fn from(stats: HashMap<i32, MonsterStats>) -> Self {
        Self { stats }
    }
}

impl FromIterator<(i32, MonsterStats)> for MonsterStatsMap {
    fn from_iter<I: IntoIterator<Item = (i32, MonsterStats)>>(iter: I) -> Self {
        Self {
            stats: iter.into_iter().collect(),
        }
    }
}

impl MonsterStatsProvider for MonsterStatsMap {
    fn stats(&self, monster_id: i32) -> Option<&MonsterStats> {
        self.stats.get(&monster_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("monster_stats.json");
        std::fs::write(
            &path,
            r#"{
                "100100": {"level": 1, "boss": false},
                "8800000": {"level": 110, "boss": true}
            }"#,
        )
        .unwrap();

        let stats = MonsterStatsMap::load(&path).unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats.stats(8_800_000), Some(&MonsterStats::new(110, true)));
        assert_eq!(stats.stats(100_100), Some(&MonsterStats::new(1, false)));
        assert_eq!(stats.stats(1), None);
    }

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("monster_stats.yaml");
        std::fs::write(&path, "9300028:\n  level: 95\n  boss: true\n").unwrap();

        let stats = MonsterStatsMap::load(&path).unwrap();
        assert_eq!(stats.stats(9_300_028), Some(&MonsterStats::new(95, true)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = MonsterStatsMap::load(dir.path().join("nope.json"));
        assert!(matches!(result, Err(DropfillError::StatsLoad { .. })));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("monster_stats.json");
        std::fs::write(&path, r#"{"100100": {"boss": true}}"#).unwrap();

        let result = MonsterStatsMap::load(&path);
        assert!(matches!(result, Err(DropfillError::StatsParse { .. })));
    }

    #[test]
    fn test_std_maps_are_providers() {
        let mut hash = HashMap::new();
        hash.insert(5, MonsterStats::new(90, false));
        assert_eq!(hash.stats(5).map(|s| s.level), Some(90));

        let btree: BTreeMap<_, _> = hash.into_iter().collect();
        assert_eq!(btree.stats(5).map(|s| s.level), Some(90));
        assert!(btree.stats(6).is_none());
    }
}
