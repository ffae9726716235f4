//! In-memory resource collections.
//!
//! [`ResourceStore`] owns the authoritative ordered collection for one
//! resource type together with the id counter. Ids are assigned from a
//! monotonically increasing counter that is never reset, so an id freed by a
//! delete is never handed out again. [`SharedStore`] wraps a store in a
//! mutex so Actix's multi-threaded runtime preserves that invariant; the
//! lock is held only for the duration of a single operation.

use std::sync::{Arc, Mutex};

use crate::domain::Error;

/// A record type that can live in a [`ResourceStore`].
///
/// `Draft` carries the client-supplied fields of a new record (everything
/// except the id). `Patch` carries optional overwrites for an update; fields
/// left unset keep their current value.
pub trait Resource: Clone + Send + 'static {
    /// Fields accepted on creation; the store supplies the id.
    type Draft;
    /// Field-level overwrites applied in place by an update.
    type Patch;

    /// Build a record from a store-assigned id and the draft fields.
    fn from_draft(id: u64, draft: Self::Draft) -> Self;

    /// The record's unique identifier within its collection.
    fn id(&self) -> u64;

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    fn apply(&mut self, patch: Self::Patch);
}

/// Ordered, mutable, in-memory collection of one resource type.
#[derive(Debug)]
pub struct ResourceStore<T> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Resource> ResourceStore<T> {
    /// Create an empty store; the first inserted record receives id 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-populated with fixture records.
    ///
    /// The id counter starts past the largest seeded id so later inserts
    /// cannot collide with fixtures.
    pub fn seeded(records: Vec<T>) -> Self {
        let next_id = records
            .iter()
            .map(Resource::id)
            .max()
            .map_or(1, |max| max + 1);
        Self { records, next_id }
    }

    /// All records in insertion order. Never fails.
    pub fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Linear scan for the record with the given id.
    pub fn get(&self, id: u64) -> Option<T> {
        self.records.iter().find(|record| record.id() == id).cloned()
    }

    /// Append a new record built from `draft` with a freshly assigned id.
    pub fn insert(&mut self, draft: T::Draft) -> T {
        let record = T::from_draft(self.next_id, draft);
        self.next_id += 1;
        self.records.push(record.clone());
        record
    }

    /// Overwrite the patched fields of the record with the given id, in
    /// place. Returns the updated record, or `None` if the id is unknown.
    pub fn update(&mut self, id: u64, patch: T::Patch) -> Option<T> {
        let record = self.records.iter_mut().find(|record| record.id() == id)?;
        record.apply(patch);
        Some(record.clone())
    }

    /// Remove the record with the given id, preserving the relative order of
    /// the remaining records. Returns whether a record was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        self.records.len() != before
    }

    /// Number of records currently in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Resource> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable handle to a mutex-guarded [`ResourceStore`].
///
/// Every operation locks, runs one store call, and unlocks. A poisoned lock
/// surfaces as an internal error rather than a panic.
#[derive(Debug)]
pub struct SharedStore<T>(Arc<Mutex<ResourceStore<T>>>);

impl<T> Clone for SharedStore<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: Resource> SharedStore<T> {
    /// Handle to a fresh empty store.
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(ResourceStore::new())))
    }

    /// Handle to a store pre-populated with fixture records.
    pub fn seeded(records: Vec<T>) -> Self {
        Self(Arc::new(Mutex::new(ResourceStore::seeded(records))))
    }

    fn with<R>(&self, op: impl FnOnce(&mut ResourceStore<T>) -> R) -> Result<R, Error> {
        let mut store = self
            .0
            .lock()
            .map_err(|_| Error::internal("resource store lock poisoned"))?;
        Ok(op(&mut store))
    }

    /// All records in insertion order.
    pub fn list(&self) -> Result<Vec<T>, Error> {
        self.with(|store| store.list())
    }

    /// The record with the given id, if any.
    pub fn get(&self, id: u64) -> Result<Option<T>, Error> {
        self.with(|store| store.get(id))
    }

    /// Insert a new record and return it.
    pub fn insert(&self, draft: T::Draft) -> Result<T, Error> {
        self.with(|store| store.insert(draft))
    }

    /// Patch the record with the given id; `None` if the id is unknown.
    pub fn update(&self, id: u64, patch: T::Patch) -> Result<Option<T>, Error> {
        self.with(|store| store.update(id, patch))
    }

    /// Remove the record with the given id; whether a record was removed.
    pub fn remove(&self, id: u64) -> Result<bool, Error> {
        self.with(|store| store.remove(id))
    }
}

impl<T: Resource> Default for SharedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
