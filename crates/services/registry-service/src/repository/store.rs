//! Generic in-memory store shared by every entity kind.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use domain::{DomainError, DomainResult};

use super::id::IdGenerator;
use super::record::Record;

type Entries<V> = BTreeMap<String, V>;

/// Lock-protected map of live records of one kind.
///
/// Reads take the lock in shared mode, writes in exclusive mode for their
/// whole duration, so the uniqueness scan and the mutation it guards are
/// atomic with respect to other writers. Records are always cloned in and
/// out; callers never hold references into the map.
#[derive(Debug)]
pub struct MemoryStore<V> {
    entries: RwLock<Entries<V>>,
    ids: IdGenerator,
}

impl<V: Record> MemoryStore<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            ids: IdGenerator::new(),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Entries<V>>> {
        self.entries
            .read()
            .map_err(|_| DomainError::internal(format!("{} store lock poisoned", V::RESOURCE)))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Entries<V>>> {
        self.entries
            .write()
            .map_err(|_| DomainError::internal(format!("{} store lock poisoned", V::RESOURCE)))
    }

    /// Store a new record under a fresh identifier and return a copy of it.
    ///
    /// Whatever id the draft carries is replaced. An identifier is only
    /// consumed once the record passed its uniqueness checks.
    pub fn insert(&self, mut draft: V) -> DomainResult<V> {
        let mut entries = self.write()?;

        ensure_unique(&entries, &draft, None)?;

        let id = self.ids.next();
        draft.set_id(id.clone());
        entries.insert(id.clone(), draft.clone());

        debug!(resource = V::RESOURCE, id = %id, "Record created");
        Ok(draft)
    }

    /// Copy of the live record with the given id.
    pub fn get(&self, id: &str) -> DomainResult<V> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(V::RESOURCE, id))
    }

    /// Read-modify-write of one record.
    ///
    /// `patch` runs on a copy; the stored record is replaced only when the
    /// patched copy still satisfies every uniqueness constraint against the
    /// other live records.
    pub fn update<F>(&self, id: &str, patch: F) -> DomainResult<V>
    where
        F: FnOnce(&mut V),
    {
        let mut entries = self.write()?;

        let mut updated = entries
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(V::RESOURCE, id))?;
        patch(&mut updated);
        updated.set_id(id.to_string());

        ensure_unique(&entries, &updated, Some(id))?;

        entries.insert(id.to_string(), updated.clone());

        debug!(resource = V::RESOURCE, id = %id, "Record updated");
        Ok(updated)
    }

    /// Erase a record. Its identifier is never issued again.
    pub fn remove(&self, id: &str) -> DomainResult<()> {
        let mut entries = self.write()?;

        if entries.remove(id).is_none() {
            return Err(DomainError::not_found(V::RESOURCE, id));
        }

        debug!(resource = V::RESOURCE, id = %id, "Record deleted");
        Ok(())
    }

    /// Point-in-time copy of every live record matching `predicate`, in
    /// identifier order. The lock is released before this returns.
    pub fn select<P>(&self, predicate: P) -> DomainResult<Vec<V>>
    where
        P: Fn(&V) -> bool,
    {
        let entries = self.read()?;
        Ok(entries
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect())
    }
}

impl<V: Record> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fail with `AlreadyExists` if `candidate` shares a unique field value with
/// any live record other than `exclude_id`.
fn ensure_unique<V: Record>(
    entries: &Entries<V>,
    candidate: &V,
    exclude_id: Option<&str>,
) -> DomainResult<()> {
    let fields = V::unique_fields();
    if fields.is_empty() {
        return Ok(());
    }

    for existing in entries.values() {
        if Some(existing.id()) == exclude_id {
            continue;
        }
        for field in fields {
            let value = (field.get)(candidate);
            if (field.get)(existing) == value {
                warn!(
                    resource = V::RESOURCE,
                    field = field.name,
                    "Rejected write on duplicate value"
                );
                return Err(DomainError::already_exists(V::RESOURCE, field.name, value));
            }
        }
    }

    Ok(())
}
