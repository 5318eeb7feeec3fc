//! Persistent seen-markers for one-shot UI, currently just the guided tour.
//!
//! Small JSON set in the local data dir. Read failures degrade to "unseen"
//! so a corrupt file replays the tour instead of breaking the page.

use std::{
    collections::BTreeSet,
    fs, io,
    path::{Path, PathBuf},
};

const MARKERS_FILENAME: &str = "tour_markers.json";

pub struct SeenStore {
    path: PathBuf,
}

impl Default for SeenStore {
    fn default() -> Self {
        let base = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rox-toolbox");
        Self {
            path: base.join(MARKERS_FILENAME),
        }
    }
}

impl SeenStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn is_seen(&self, key: &str) -> bool {
        self.load().contains(key)
    }

    pub fn mark_seen(&self, key: &str) {
        let mut markers = self.load();
        if markers.insert(key.to_string()) {
            if let Err(err) = self.save(&markers) {
                println!("[seen] Failed to record marker {key}: {err}");
            }
        }
    }

    pub fn clear_seen(&self, key: &str) {
        let mut markers = self.load();
        if markers.remove(key) {
            if let Err(err) = self.save(&markers) {
                println!("[seen] Failed to clear marker {key}: {err}");
            }
        }
    }

    fn load(&self) -> BTreeSet<String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return BTreeSet::new();
        };
        match serde_json::from_str(&content) {
            Ok(markers) => markers,
            Err(err) => {
                println!(
                    "[seen] Ignoring unreadable marker file {}: {err}",
                    self.path.display()
                );
                BTreeSet::new()
            }
        }
    }

    fn save(&self, markers: &BTreeSet<String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let content = serde_json::to_string_pretty(markers)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(&self.path, content)
    }
}

fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> SeenStore {
        let dir = std::env::temp_dir().join(format!("rox-toolbox-seen-{name}"));
        let _ = fs::remove_dir_all(&dir);
        SeenStore::at(dir.join(MARKERS_FILENAME))
    }

    #[test]
    fn marker_round_trip() {
        let store = temp_store("round-trip");
        assert!(!store.is_seen("tour.v1"));

        store.mark_seen("tour.v1");
        assert!(store.is_seen("tour.v1"));
        assert!(!store.is_seen("tour.v2"));

        store.clear_seen("tour.v1");
        assert!(!store.is_seen("tour.v1"));
    }

    #[test]
    fn corrupt_file_reads_as_unseen() {
        let store = temp_store("corrupt");
        if let Some(parent) = store.path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&store.path, "definitely not json").unwrap();
        assert!(!store.is_seen("tour.v1"));
        // And it recovers on the next write.
        store.mark_seen("tour.v1");
        assert!(store.is_seen("tour.v1"));
    }
}
