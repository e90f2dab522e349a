use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tracing::{debug, warn};
use vidscout_models::{VideoClass, WatchLedger};

/// File-backed store for the cross-session watch ledger.
///
/// Single-writer by assumption. A file that fails to parse into the expected
/// three-field shape is treated the same as a missing one and silently reset
/// to defaults — deliberate policy, isolated here so callers never see it.
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create the backing file with empty defaults when it is absent or
    /// malformed; leave valid data untouched. Safe to call on every startup.
    pub fn initialize(&self) -> Result<()> {
        if self.load().is_none() {
            self.persist(&WatchLedger::default())?;
        }
        Ok(())
    }

    /// The current ledger. Absent or corrupt files read as empty defaults.
    pub fn read(&self) -> WatchLedger {
        self.load().unwrap_or_default()
    }

    /// Append `name` to the bucket for `class`, award its points, persist the
    /// whole record. Returns the points awarded.
    pub fn record(&self, class: VideoClass, name: &str) -> Result<u64> {
        let mut ledger = self.read();
        let points = class.points_value();
        match class {
            VideoClass::Short => ledger.short_videos.push(name.to_string()),
            VideoClass::Long => ledger.long_videos.push(name.to_string()),
        }
        ledger.points += points;
        self.persist(&ledger)?;
        debug!("Recorded {} video '{}' (+{} points)", class, name, points);
        Ok(points)
    }

    /// Zero the point counter, keeping both video lists.
    pub fn reset_points(&self) -> Result<()> {
        let mut ledger = self.read();
        ledger.points = 0;
        self.persist(&ledger)
    }

    fn load(&self) -> Option<WatchLedger> {
        if !self.path.exists() {
            debug!("Ledger file does not exist yet: {:?}", self.path);
            return None;
        }
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read ledger file {:?}: {}", self.path, e);
                return None;
            }
        };
        match serde_json::from_str::<WatchLedger>(&content) {
            Ok(ledger) => Some(ledger),
            Err(e) => {
                warn!(
                    "Ledger corruption detected in {:?}: {}. Resetting to defaults.",
                    self.path, e
                );
                None
            }
        }
    }

    fn persist(&self, ledger: &WatchLedger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(ledger)
            .map_err(|e| anyhow!("Failed to serialize ledger: {}", e))?;
        std::fs::write(&self.path, json)
            .map_err(|e| anyhow!("Failed to write ledger file {:?}: {}", self.path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> LedgerStore {
        LedgerStore::new(dir.path().join("watch_ledger.json"))
    }

    #[test]
    fn test_initialize_creates_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();

        let ledger = store.read();
        assert_eq!(ledger, WatchLedger::default());

        // The file itself must carry exactly the three keys.
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("watch_ledger.json")).unwrap())
                .unwrap();
        assert_eq!(
            raw,
            serde_json::json!({"short_videos": [], "long_videos": [], "points": 0})
        );
    }

    #[test]
    fn test_initialize_leaves_valid_data() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();
        store.record(VideoClass::Short, "X").unwrap();

        store.initialize().unwrap();
        assert_eq!(store.read().short_videos, vec!["X".to_string()]);
    }

    #[test]
    fn test_record_awards_points_by_class() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();

        assert_eq!(store.record(VideoClass::Short, "X").unwrap(), 5);
        let ledger = store.read();
        assert_eq!(ledger.points, 5);
        assert_eq!(ledger.short_videos, vec!["X".to_string()]);

        assert_eq!(store.record(VideoClass::Long, "Y").unwrap(), 10);
        let ledger = store.read();
        assert_eq!(ledger.points, 15);
        assert_eq!(ledger.long_videos, vec!["Y".to_string()]);
    }

    #[test]
    fn test_malformed_file_resets_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("watch_ledger.json");
        std::fs::write(&path, "{not json at all").unwrap();

        let store = LedgerStore::new(path.clone());
        assert_eq!(store.read(), WatchLedger::default());

        store.initialize().unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["points"], 0);
    }

    #[test]
    fn test_wrong_shape_counts_as_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("watch_ledger.json");
        std::fs::write(&path, r#"{"short_videos": "not a list"}"#).unwrap();

        let store = LedgerStore::new(path);
        assert_eq!(store.read(), WatchLedger::default());
    }

    #[test]
    fn test_reset_points_keeps_lists() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();
        store.record(VideoClass::Short, "X").unwrap();
        store.record(VideoClass::Long, "Y").unwrap();

        store.reset_points().unwrap();
        let ledger = store.read();
        assert_eq!(ledger.points, 0);
        assert_eq!(ledger.short_videos, vec!["X".to_string()]);
        assert_eq!(ledger.long_videos, vec!["Y".to_string()]);
    }

    #[test]
    fn test_record_without_initialize() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        // read() self-heals, so record on a missing file still works.
        assert_eq!(store.record(VideoClass::Long, "Y").unwrap(), 10);
        assert_eq!(store.read().points, 10);
    }
}
