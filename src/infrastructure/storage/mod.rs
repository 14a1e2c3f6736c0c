// src/infrastructure/storage/mod.rs
// Cart snapshot repository implementations

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::cart::CartLine;
use crate::domain::errors::{StorageError, StorageResult};
use crate::domain::repository::CartSnapshotRepository;

/// Version tag written into every snapshot so future field changes can be
/// migrated instead of silently misparsed.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CartSnapshot {
    version: u32,
    lines: Vec<CartLine>,
}

/// Snapshot repository backed by a single JSON file on local disk — the
/// device-local equivalent of the browser's localStorage cart key.
pub struct JsonFileSnapshotRepository {
    path: PathBuf,
}

impl JsonFileSnapshotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartSnapshotRepository for JsonFileSnapshotRepository {
    fn save(&self, lines: &[CartLine]) -> StorageResult<()> {
        let snapshot = CartSnapshot {
            version: SNAPSHOT_VERSION,
            lines: lines.to_vec(),
        };

        let contents = serde_json::to_string(&snapshot)
            .map_err(|e| StorageError::Write(format!("Failed to serialize snapshot: {}", e)))?;

        fs::write(&self.path, contents).map_err(|e| {
            StorageError::Write(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    fn load(&self) -> StorageResult<Vec<CartLine>> {
        // No snapshot yet is a fresh session, not an error.
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            StorageError::Unavailable(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let snapshot: CartSnapshot = serde_json::from_str(&contents)
            .map_err(|e| StorageError::CorruptSnapshot(e.to_string()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion(snapshot.version));
        }

        Ok(snapshot.lines)
    }
}

/// Snapshot repository held entirely in memory. Used by tests and by demo
/// sessions that should not leave files behind. Clones share the same
/// underlying snapshot.
#[derive(Clone, Default)]
pub struct InMemorySnapshotRepository {
    lines: Arc<Mutex<Vec<CartLine>>>,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartSnapshotRepository for InMemorySnapshotRepository {
    fn save(&self, lines: &[CartLine]) -> StorageResult<()> {
        let mut stored = self
            .lines
            .lock()
            .map_err(|_| StorageError::Unavailable("snapshot lock poisoned".to_string()))?;
        *stored = lines.to_vec();
        Ok(())
    }

    fn load(&self) -> StorageResult<Vec<CartLine>> {
        let stored = self
            .lines
            .lock()
            .map_err(|_| StorageError::Unavailable("snapshot lock poisoned".to_string()))?;
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CatalogItem;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn line(id: &str, quantity: u32) -> CartLine {
        CartLine {
            item: CatalogItem {
                id: id.to_string(),
                name: format!("item-{}", id),
                description: "demo".to_string(),
                price: dec!(3.25),
                image: String::new(),
                category: "Mains".to_string(),
                is_vegetarian: false,
            },
            quantity,
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = TempDir::new().expect("create temp dir");
        let repo = JsonFileSnapshotRepository::new(tmp.path().join("cart.json"));

        let lines = vec![line("a", 2), line("b", 1)];
        repo.save(&lines).unwrap();

        let restored = repo.load().unwrap();
        assert_eq!(restored, lines);
    }

    #[test]
    fn missing_snapshot_loads_as_empty() {
        let tmp = TempDir::new().expect("create temp dir");
        let repo = JsonFileSnapshotRepository::new(tmp.path().join("cart.json"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_snapshot_is_reported() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("cart.json");
        fs::write(&path, "{not json").unwrap();

        let repo = JsonFileSnapshotRepository::new(path);
        assert!(matches!(
            repo.load(),
            Err(StorageError::CorruptSnapshot(_))
        ));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("cart.json");
        fs::write(&path, r#"{"version":99,"lines":[]}"#).unwrap();

        let repo = JsonFileSnapshotRepository::new(path);
        assert!(matches!(
            repo.load(),
            Err(StorageError::UnsupportedVersion(99))
        ));
    }

    #[test]
    fn save_overwrites_the_previous_snapshot() {
        let tmp = TempDir::new().expect("create temp dir");
        let repo = JsonFileSnapshotRepository::new(tmp.path().join("cart.json"));

        repo.save(&[line("a", 2)]).unwrap();
        repo.save(&[line("b", 5)]).unwrap();

        let restored = repo.load().unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].item.id, "b");
        assert_eq!(restored[0].quantity, 5);
    }
}
