use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use railbook_core::{Booking, User};

use crate::kv::{KeyValueStore, MemoryStore};
use crate::{seed, StoreError, StoreResult};

/// The four fixed keys of the persisted namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Routes,
    Users,
    Bookings,
    CurrentUser,
}

impl Collection {
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Routes => "routes",
            Collection::Users => "users",
            Collection::Bookings => "bookings",
            Collection::CurrentUser => "currentUser",
        }
    }
}

/// Typed access to the key-value namespace: collection reads/writes plus the
/// current-user singleton. Clones share the underlying backend.
#[derive(Clone)]
pub struct TicketStore {
    inner: Arc<dyn KeyValueStore>,
}

impl TicketStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    /// Fresh volatile store, mainly for tests.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Seed defaults for any absent key: four fixed routes, one admin
    /// account, an empty booking list, and no current user. Idempotent;
    /// existing data is never overwritten.
    pub fn initialize(&self) -> StoreResult<()> {
        self.seed_if_absent(Collection::Routes, &seed::routes())?;
        self.seed_if_absent(Collection::Users, &seed::users())?;
        self.seed_if_absent(Collection::Bookings, &Vec::<Booking>::new())?;

        if self.inner.get(Collection::CurrentUser.key())?.is_none() {
            self.inner
                .put(Collection::CurrentUser.key(), "null".to_string())?;
        }
        Ok(())
    }

    fn seed_if_absent<T: Serialize>(&self, collection: Collection, rows: &[T]) -> StoreResult<()> {
        if self.inner.get(collection.key())?.is_some() {
            return Ok(());
        }
        info!(collection = collection.key(), "seeding initial data");
        self.write_all(collection, rows)
    }

    /// Deserialized collection contents. An absent key reads as empty;
    /// text that no longer parses surfaces as `StoreError::Corrupt`.
    pub fn read<T: DeserializeOwned>(&self, collection: Collection) -> StoreResult<Vec<T>> {
        match self.inner.get(collection.key())? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                collection: collection.key(),
                source,
            }),
        }
    }

    /// Replace the whole collection in one synchronous write.
    pub fn write_all<T: Serialize>(&self, collection: Collection, rows: &[T]) -> StoreResult<()> {
        let raw = serde_json::to_string(rows).map_err(|source| StoreError::Encode {
            collection: collection.key(),
            source,
        })?;
        self.inner.put(collection.key(), raw)
    }

    /// The session singleton: whoever is currently using the client.
    pub fn current_user(&self) -> StoreResult<Option<User>> {
        match self.inner.get(Collection::CurrentUser.key())? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                collection: Collection::CurrentUser.key(),
                source,
            }),
        }
    }

    pub fn set_current_user(&self, user: Option<&User>) -> StoreResult<()> {
        let raw = serde_json::to_string(&user).map_err(|source| StoreError::Encode {
            collection: Collection::CurrentUser.key(),
            source,
        })?;
        self.inner.put(Collection::CurrentUser.key(), raw)
    }
}
