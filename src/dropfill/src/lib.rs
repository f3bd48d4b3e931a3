//! Skillbook drop chance reconciliation
//!
//! This library traces skillbook drops recorded in a `drop_data` store, derives
//! the expected drop chance for each monster/item pair from the dropper's level
//! and boss flag, and renders a `REPLACE INTO` script proposing the rows.
//!
//! # Features
//!
//! - `sqlite` (default) - `drop_data` access through rusqlite
//!
//! # Example
//!
//! ```no_run
//! use dropfill::{reconcile, MonsterStatsMap, ReportWriter, SqliteDropStore, ItemIdRange};
//!
//! let store = SqliteDropStore::open("share/drop_data.db").unwrap();
//! let stats = MonsterStatsMap::load("share/monster_stats.json").unwrap();
//! let writer = ReportWriter::default();
//!
//! let summary = reconcile(
//!     store,
//!     &stats,
//!     ItemIdRange::SKILLBOOKS,
//!     &writer,
//!     "share/output/skillbook_drop_data.sql",
//! )
//! .unwrap();
//! println!("{} rows", summary.rows);
//! ```

pub mod chance;
pub mod error;
pub mod reconcile;
pub mod report;
pub mod source;
pub mod stats;
pub mod table;
pub mod types;

pub use chance::{compute_chance, is_high_tier};
pub use error::{DropfillError, Result};
pub use reconcile::{reconcile, ReconcileSummary};
pub use report::{ReportWriter, TrailingSeparator};
pub use source::AssociationSource;
pub use stats::{MonsterStatsMap, MonsterStatsProvider};
pub use table::ChanceTable;
pub use types::*;

#[cfg(feature = "sqlite")]
pub use source::sqlite::{SqliteDropStore, DEFAULT_DB_PATH};
