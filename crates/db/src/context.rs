//! Request-scoped unit of work over the `advertisements` table.
//!
//! [`AdvertContext`] keeps an identity map of the records it has loaded and
//! a list of staged inserts and removals. Nothing reaches the database until
//! [`AdvertContext::save_changes`], which flushes everything in a single
//! transaction. Modifications are detected by comparing each tracked record
//! against the snapshot taken when it was loaded.
//!
//! Create one per request; the type is not meant to be shared.
//!
//! ```ignore
//! let mut ctx = AdvertContext::new(pool.clone());
//! if let Some(advert) = ctx.find(id).await? {
//!     advert.price = new_price;
//! }
//! ctx.save_changes().await?;
//! ```

use annos_core::types::DbId;

use crate::models::advertisement::Advertisement;
use crate::repositories::AdvertisementRepo;
use crate::DbPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryState {
    /// Staged for insert; has no store identity yet.
    Added,
    /// Loaded from the store. May have been modified in place.
    Tracked,
    /// Staged for delete.
    Deleted,
}

#[derive(Debug)]
struct Entry {
    state: EntryState,
    /// Store identity. Meaningless while `Added`.
    key: DbId,
    /// Values as last seen in the store.
    snapshot: Option<Advertisement>,
    current: Advertisement,
}

impl Entry {
    fn is_modified(&self) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(|snapshot| *snapshot != self.current)
    }

    fn has_pending_write(&self) -> bool {
        match self.state {
            EntryState::Added | EntryState::Deleted => true,
            EntryState::Tracked => self.is_modified(),
        }
    }
}

/// Change-tracking persistence context for advertisements.
pub struct AdvertContext {
    pool: DbPool,
    entries: Vec<Entry>,
}

impl AdvertContext {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            entries: Vec::new(),
        }
    }

    /// Stage a new record for insert. Its `id` is replaced on save.
    pub fn add(&mut self, advert: Advertisement) {
        self.entries.push(Entry {
            state: EntryState::Added,
            key: 0,
            snapshot: None,
            current: advert,
        });
    }

    /// Look up a record by id, loading and tracking it on first access.
    ///
    /// The returned reference may be mutated in place; the change is written
    /// by the next [`save_changes`](Self::save_changes). Records staged for
    /// removal are reported as absent.
    pub async fn find(&mut self, id: DbId) -> Result<Option<&mut Advertisement>, sqlx::Error> {
        if let Some(pos) = self.position(id) {
            let entry = &mut self.entries[pos];
            return Ok((entry.state != EntryState::Deleted).then_some(&mut entry.current));
        }

        let Some(row) = AdvertisementRepo::find_by_id(&self.pool, id).await? else {
            return Ok(None);
        };

        self.entries.push(Entry {
            state: EntryState::Tracked,
            key: row.id,
            snapshot: Some(row.clone()),
            current: row,
        });
        Ok(self.entries.last_mut().map(|entry| &mut entry.current))
    }

    /// Stage a tracked record for delete.
    ///
    /// The record must have been loaded through [`find`](Self::find) first.
    /// Returns `false` if it is not tracked or already staged for removal.
    pub fn remove(&mut self, id: DbId) -> bool {
        match self.position(id) {
            Some(pos) if self.entries[pos].state == EntryState::Tracked => {
                self.entries[pos].state = EntryState::Deleted;
                true
            }
            _ => false,
        }
    }

    /// All committed records ordered by id. Pending changes are not visible.
    pub async fn list_all(&self) -> Result<Vec<Advertisement>, sqlx::Error> {
        AdvertisementRepo::list(&self.pool).await
    }

    /// Whether [`save_changes`](Self::save_changes) would write anything.
    pub fn has_changes(&self) -> bool {
        self.entries.iter().any(Entry::has_pending_write)
    }

    /// Flush every staged insert, modification and delete in one transaction.
    ///
    /// Returns the number of rows written. If any statement fails the
    /// transaction is rolled back and the staged changes stay pending.
    pub async fn save_changes(&mut self) -> Result<usize, sqlx::Error> {
        if !self.has_changes() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut written = 0;
        // Rows as the store returned them, keyed by entry index.
        let mut stored = Vec::new();

        for (index, entry) in self.entries.iter().enumerate() {
            match entry.state {
                EntryState::Added => {
                    let row = AdvertisementRepo::insert(&mut *tx, &entry.current).await?;
                    stored.push((index, row));
                    written += 1;
                }
                EntryState::Tracked if entry.is_modified() => {
                    // The key is authoritative; an in-place edit of `id` is not a move.
                    let mut row = entry.current.clone();
                    row.id = entry.key;
                    if let Some(row) = AdvertisementRepo::update(&mut *tx, &row).await? {
                        stored.push((index, row));
                        written += 1;
                    }
                }
                EntryState::Deleted => {
                    if AdvertisementRepo::delete(&mut *tx, entry.key).await? {
                        written += 1;
                    }
                }
                EntryState::Tracked => {}
            }
        }

        tx.commit().await?;
        self.accept_changes(stored);

        tracing::debug!(written, tracked = self.entries.len(), "Saved persistence context");
        Ok(written)
    }

    /// Adopt the written rows so snapshots match the store's rounding.
    fn accept_changes(&mut self, stored: Vec<(usize, Advertisement)>) {
        for (index, row) in stored {
            self.entries[index].current = row;
        }
        self.entries.retain(|entry| entry.state != EntryState::Deleted);
        for entry in &mut self.entries {
            if entry.state == EntryState::Added {
                entry.key = entry.current.id;
            } else {
                entry.current.id = entry.key;
            }
            entry.state = EntryState::Tracked;
            entry.snapshot = Some(entry.current.clone());
        }
    }

    fn position(&self, id: DbId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.state != EntryState::Added && entry.key == id)
    }
}
