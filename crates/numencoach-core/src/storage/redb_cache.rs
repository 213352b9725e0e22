//! # redb-backed Profile Cache
//!
//! Keeps the most recent [`ProfileSnapshot`] in an embedded redb database,
//! under a single well-known key. Values are encoded with the snapshot
//! format from [`crate::formats`].
//!
//! Saving replaces the previous snapshot. Clearing removes it. Nothing
//! else is stored.

use std::path::Path;

use redb::{Database, ReadableDatabase, TableDefinition};

use crate::formats::{snapshot_from_bytes, snapshot_to_bytes};
use crate::primitives::LAST_PROFILE_KEY;
use crate::{NumerologyError, ProfileSnapshot};

/// Table for snapshots: key -> encoded snapshot bytes
const SNAPSHOTS: TableDefinition<&str, &[u8]> = TableDefinition::new("snapshots");

fn io_err(e: impl std::fmt::Display) -> NumerologyError {
    NumerologyError::IoError(e.to_string())
}

/// Disk-backed store for the last calculated profile.
pub struct ProfileCache {
    db: Database,
}

impl std::fmt::Debug for ProfileCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileCache").finish_non_exhaustive()
    }
}

impl ProfileCache {
    /// Open or create a cache database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, NumerologyError> {
        let db = Database::create(path.as_ref()).map_err(io_err)?;

        // Create the table up front so reads never see a missing table.
        {
            let write_txn = db.begin_write().map_err(io_err)?;
            let _ = write_txn.open_table(SNAPSHOTS).map_err(io_err)?;
            write_txn.commit().map_err(io_err)?;
        }

        Ok(Self { db })
    }

    /// Store `snapshot`, replacing any previous one.
    pub fn save(&self, snapshot: &ProfileSnapshot) -> Result<(), NumerologyError> {
        let bytes = snapshot_to_bytes(snapshot)?;

        let write_txn = self.db.begin_write().map_err(io_err)?;
        {
            let mut table = write_txn.open_table(SNAPSHOTS).map_err(io_err)?;
            table
                .insert(LAST_PROFILE_KEY, bytes.as_slice())
                .map_err(io_err)?;
        }
        write_txn.commit().map_err(io_err)?;
        Ok(())
    }

    /// The stored snapshot, if any.
    pub fn load(&self) -> Result<Option<ProfileSnapshot>, NumerologyError> {
        let read_txn = self.db.begin_read().map_err(io_err)?;
        let table = read_txn.open_table(SNAPSHOTS).map_err(io_err)?;

        match table.get(LAST_PROFILE_KEY).map_err(io_err)? {
            Some(data) => snapshot_from_bytes(data.value()).map(Some),
            None => Ok(None),
        }
    }

    /// Remove the stored snapshot. Returns whether one existed.
    pub fn clear(&self) -> Result<bool, NumerologyError> {
        let write_txn = self.db.begin_write().map_err(io_err)?;
        let existed;
        {
            let mut table = write_txn.open_table(SNAPSHOTS).map_err(io_err)?;
            existed = table.remove(LAST_PROFILE_KEY).map_err(io_err)?.is_some();
        }
        write_txn.commit().map_err(io_err)?;
        Ok(existed)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_all_numbers;
    use crate::{LetterSystem, Profile};
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn snapshot(name: &str) -> ProfileSnapshot {
        let at = Utc
            .with_ymd_and_hms(2026, 10, 19, 9, 0, 0)
            .single()
            .expect("instant");
        let profile = Profile::new(name, "07/09/2003", LetterSystem::Chaldean, true);
        let results = calculate_all_numbers(&profile, at).expect("bundle");
        ProfileSnapshot::new(profile, results, at)
    }

    #[test]
    fn empty_cache_loads_nothing() {
        let temp = tempdir().expect("temp dir");
        let cache = ProfileCache::open(temp.path().join("cache.redb")).expect("open");
        assert!(cache.load().expect("load").is_none());
    }

    #[test]
    fn save_then_load() {
        let temp = tempdir().expect("temp dir");
        let cache = ProfileCache::open(temp.path().join("cache.redb")).expect("open");
        let snap = snapshot("Aryan");

        cache.save(&snap).expect("save");
        assert_eq!(cache.load().expect("load"), Some(snap));
    }

    #[test]
    fn save_replaces_previous() {
        let temp = tempdir().expect("temp dir");
        let cache = ProfileCache::open(temp.path().join("cache.redb")).expect("open");

        cache.save(&snapshot("Aryan")).expect("save");
        cache.save(&snapshot("Maya")).expect("save");

        let loaded = cache.load().expect("load").expect("snapshot");
        assert_eq!(loaded.profile.full_name, "Maya");
    }

    #[test]
    fn clear_removes_snapshot() {
        let temp = tempdir().expect("temp dir");
        let cache = ProfileCache::open(temp.path().join("cache.redb")).expect("open");

        assert!(!cache.clear().expect("clear empty"));
        cache.save(&snapshot("Aryan")).expect("save");
        assert!(cache.clear().expect("clear"));
        assert!(cache.load().expect("load").is_none());
    }

    #[test]
    fn survives_reopen() {
        let temp = tempdir().expect("temp dir");
        let path = temp.path().join("cache.redb");
        let snap = snapshot("Aryan");

        {
            let cache = ProfileCache::open(&path).expect("open");
            cache.save(&snap).expect("save");
        }

        let cache = ProfileCache::open(&path).expect("reopen");
        assert_eq!(cache.load().expect("load"), Some(snap));
    }
}
