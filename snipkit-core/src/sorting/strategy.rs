//! Strategy pattern for keyed sorting
//!
//! A strategy owns everything fixed per call (field, direction, policy) and
//! can be applied to any number of record slices.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use snipkit_model::{FieldName, Record, SortOrder};
use tracing::{trace, warn};

use super::traits::{KeyResolver, SortKey};
use super::utils::{is_sorted_by, reorder_by_indices};
use crate::error::{Result, SnipkitError};

/// What to do when a sequence holds keys whose relative order is undefined
/// (for date sorts: parsed dates next to text no date rule recognised).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MixedKeyPolicy {
    /// Sort anyway and log a warning. Which group comes first is not part
    /// of the contract.
    #[default]
    Unspecified,
    /// Refuse to sort and leave the input untouched.
    Reject,
}

/// A sorting strategy over a slice of records
pub trait SortStrategy<T> {
    /// Sort the items. Never fails; undefined key pairs get an unspecified
    /// but consistent order.
    fn sort(&self, items: &mut [T]);

    /// Sort the items, honouring the strategy's [`MixedKeyPolicy`].
    fn try_sort(&self, items: &mut [T]) -> Result<()> {
        self.sort(items);
        Ok(())
    }
}

/// Single field sort strategy
#[derive(Debug, Clone)]
pub struct FieldSort<M: KeyResolver> {
    pub field: FieldName,
    pub order: SortOrder,
    pub mixed_keys: MixedKeyPolicy,
    _resolver: PhantomData<M>,
}

impl<M: KeyResolver> FieldSort<M> {
    /// Create a new field sort strategy
    pub fn new(field: impl Into<FieldName>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
            mixed_keys: MixedKeyPolicy::default(),
            _resolver: PhantomData,
        }
    }

    pub fn with_policy(mut self, mixed_keys: MixedKeyPolicy) -> Self {
        self.mixed_keys = mixed_keys;
        self
    }

    /// Resolve every record's key once, in input order.
    pub fn resolve_keys<R: Record>(&self, items: &[R]) -> Vec<M::Key> {
        items
            .iter()
            .map(|item| {
                M::resolve(item.field(self.field.as_str()).as_deref())
            })
            .collect()
    }

    fn resolve_traced<R: Record>(&self, items: &[R]) -> Vec<M::Key> {
        trace!(
            field = %self.field,
            resolver = M::ID,
            order = ?self.order,
            len = items.len(),
            "sorting records by key"
        );
        self.resolve_keys(items)
    }

    fn warn_conflict(&self, conflict: &SnipkitError) {
        warn!(
            field = %self.field,
            "{conflict}; order between the two groups is unspecified"
        );
    }

    /// Permute `items` into key order. `keys[i]` belongs to `items[i]`.
    fn reorder<R>(&self, items: &mut [R], keys: &[M::Key]) {
        if is_sorted_by(keys, |a, b| a.compare_with_order(b, self.order)) {
            trace!(field = %self.field, "records already in order");
            return;
        }

        // Stable: equal keys keep their input order.
        let mut indices: Vec<usize> = (0..keys.len()).collect();
        indices.sort_by(|&a, &b| {
            keys[a].compare_with_order(&keys[b], self.order)
        });
        reorder_by_indices(items, indices);
    }
}

impl<R: Record, M: KeyResolver> SortStrategy<R> for FieldSort<M> {
    fn sort(&self, items: &mut [R]) {
        let keys = self.resolve_traced(items);
        if let Some(conflict) = M::find_conflict(&self.field, &keys) {
            self.warn_conflict(&conflict);
        }
        self.reorder(items, &keys);
    }

    fn try_sort(&self, items: &mut [R]) -> Result<()> {
        let keys = self.resolve_traced(items);
        if let Some(conflict) = M::find_conflict(&self.field, &keys) {
            if self.mixed_keys == MixedKeyPolicy::Reject {
                return Err(conflict);
            }
            self.warn_conflict(&conflict);
        }
        self.reorder(items, &keys);
        Ok(())
    }
}
