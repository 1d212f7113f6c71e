use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ShellError;

/// Durable key for the visitor's theme choice (`"light"`; anything else means dark).
pub const THEME_KEY: &str = "hothub-theme";

/// Durable key for the persisted verification decision (`"granted"` / `"denied"`).
pub const VERIFICATION_KEY: &str = "age_verification";

/// Ephemeral key marking that the offer popup was already shown this session.
pub const POPUP_SHOWN_KEY: &str = "special_offer_popup_shown";

/// Sentinel value stored under [`POPUP_SHOWN_KEY`].
pub const SHOWN_SENTINEL: &str = "true";

/// String key-value storage. The shell never learns whether a store is backed
/// by a file or by memory; it only sees presence or absence of a value.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

impl<T: KvStore + ?Sized> KvStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key);
    }
}

/// Durable store: a flat TOML map on disk, written through on every mutation.
///
/// Reads degrade to an empty map — a missing, unreadable, or corrupt file is
/// indistinguishable from one that was never written. Write failures are
/// logged and swallowed; the in-memory view stays authoritative for the
/// session either way.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

/// On-disk shape of the state file: one flat table of string pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(flatten)]
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Platform state file path: `<config_dir>/hothub/state.toml`, with a
    /// CWD fallback when no config directory exists.
    pub fn state_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("hothub").join("state.toml"))
            .unwrap_or_else(|| PathBuf::from(".hothub-state.toml"))
    }

    pub fn open_default() -> Self {
        Self::open(Self::state_path())
    }

    pub fn open(path: PathBuf) -> Self {
        let entries = load_entries(&path);
        Self { path, entries }
    }

    fn persist(&self) -> Result<(), ShellError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = StateFile {
            entries: self.entries.clone(),
        };
        let content = toml::to_string_pretty(&file)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return BTreeMap::new();
    };
    match toml::from_str::<StateFile>(&content) {
        Ok(file) => file.entries,
        Err(e) => {
            tracing::warn!("ignoring corrupt state file {}: {e}", path.display());
            BTreeMap::new()
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            tracing::warn!("failed to persist state file {}: {e}", self.path.display());
        }
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some()
            && let Err(e) = self.persist()
        {
            tracing::warn!("failed to persist state file {}: {e}", self.path.display());
        }
    }
}

/// Ephemeral store: lives for the process, survives route-tree remounts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
