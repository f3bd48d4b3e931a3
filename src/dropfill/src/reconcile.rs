//! One reconciliation run: query, compute, write.

use crate::chance::is_high_tier;
use crate::error::Result;
use crate::report::ReportWriter;
use crate::source::AssociationSource;
use crate::stats::MonsterStatsProvider;
use crate::table::ChanceTable;
use crate::types::ItemIdRange;
use serde::Serialize;
use std::path::Path;

/// Counts describing a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileSummary {
    /// Rows written (distinct monster/item pairs)
    pub rows: usize,
    /// Distinct droppers
    pub monsters: usize,
    /// Rows whose monster had no stats and took the flat fallback
    pub unknown_monsters: usize,
    /// Rows for high-tier books
    pub high_tier: usize,
}

impl ReconcileSummary {
    fn from_table<S>(table: &ChanceTable, stats: &S) -> Self
    where
        S: MonsterStatsProvider + ?Sized,
    {
        let mut summary = Self {
            rows: table.len(),
            monsters: table.monster_count(),
            ..Self::default()
        };
        for entry in table.entries() {
            if stats.stats(entry.key.monster_id).is_none() {
                summary.unknown_monsters += 1;
            }
            if is_high_tier(entry.key.item_id) {
                summary.high_tier += 1;
            }
        }
        summary
    }
}

/// Query `source` once and fold every association in `range` into a table
pub fn build_table<A, S>(source: &A, stats: &S, range: ItemIdRange) -> Result<ChanceTable>
where
    A: AssociationSource + ?Sized,
    S: MonsterStatsProvider + ?Sized,
{
    let associations = source.associations(range).inspect_err(|e| {
        tracing::error!("Could not read drop associations in {}: {}", range, e);
    })?;
    Ok(ChanceTable::build(&associations, stats))
}

/// Run a full reconciliation and write the script to `output`.
///
/// `source` is queried once and dropped before the script is written, which
/// releases a store connection for the rest of the run. Nothing is written
/// unless the query succeeds. An existing file at `output` is replaced.
pub fn reconcile<A, S, P>(
    source: A,
    stats: &S,
    range: ItemIdRange,
    writer: &ReportWriter,
    output: P,
) -> Result<ReconcileSummary>
where
    A: AssociationSource,
    S: MonsterStatsProvider + ?Sized,
    P: AsRef<Path>,
{
    let output = output.as_ref();
    let table = build_table(&source, stats, range)?;
    drop(source);
    let summary = ReconcileSummary::from_table(&table, stats);

    writer.write_to_path(&table, output).inspect_err(|e| {
        tracing::error!("{}", e);
    })?;

    tracing::info!(
        "Wrote {} rows for {} monsters to {} ({} without stats, {} high-tier)",
        summary.rows,
        summary.monsters,
        output.display(),
        summary.unknown_monsters,
        summary.high_tier
    );

    Ok(summary)
}
