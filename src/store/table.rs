//! Generic in-memory collection with monotonic handle issuance.

use crate::models::{Id, Insert, Patch, Record};
use std::collections::BTreeMap;

/// One entity collection.
///
/// Rows are keyed by handle in a `BTreeMap`; handles only grow, so iterating
/// the map yields rows in insertion order.
#[derive(Debug, Clone)]
pub struct Table<T> {
    next_id: Id,
    rows: BTreeMap<Id, T>,
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Table<T> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    /// Allocate a handle, materialize the insert record and store it.
    /// The counter advances on every call, so deleted handles never return.
    pub fn create<I>(&mut self, input: I) -> T
    where
        I: Insert<Output = T>,
    {
        let id = self.next_id;
        self.next_id += 1;

        let row = input.into_record(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: Id) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    pub fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    /// Shallow-merge `patch` over the stored row and return the merged row.
    pub fn update<P>(&mut self, id: Id, patch: P) -> Option<T>
    where
        P: Patch<T>,
    {
        let row = self.rows.get_mut(&id)?;
        patch.apply(row);
        Some(row.clone())
    }

    pub fn delete(&mut self, id: Id) -> bool {
        self.rows.remove(&id).is_some()
    }

    /// All rows matching `pred`, in insertion order.
    pub fn filter<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows.values().filter(|r| pred(r)).cloned().collect()
    }

    /// First row matching `pred`.
    pub fn find<F>(&self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows.values().find(|r| pred(r)).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
