//! Access to existing drop associations.
//!
//! A source is queried once per run for every association whose item id falls
//! in the target range. Any failure is fatal to the run.

use crate::error::Result;
use crate::types::{Association, ItemIdRange};

#[cfg(feature = "sqlite")]
pub mod sqlite;

/// Queryable store of recorded monster → item drop associations
pub trait AssociationSource {
    /// All associations with `range.low <= item_id < range.high`, in no particular order
    fn associations(&self, range: ItemIdRange) -> Result<Vec<Association>>;
}

impl<T: AssociationSource + ?Sized> AssociationSource for &T {
    fn associations(&self, range: ItemIdRange) -> Result<Vec<Association>> {
        (**self).associations(range)
    }
}

/// In-memory associations, filtered on query
impl AssociationSource for [Association] {
    fn associations(&self, range: ItemIdRange) -> Result<Vec<Association>> {
        Ok(self
            .iter()
            .filter(|a| range.contains(a.item_id))
            .copied()
            .collect())
    }
}
