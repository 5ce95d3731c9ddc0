//! Best score persistence
//!
//! The game only ever needs one number across sessions. Stores keep it as a
//! JSON integer; anything missing or unreadable counts as 0.

/// Get/set access to the persisted best score
pub trait BestScoreStore {
    /// Best score from a previous session, 0 if absent or unparseable
    fn load_best_score(&self) -> u64;
    fn save_best_score(&mut self, score: u64);
}

/// Parse a stored best score. Malformed values are treated as absent.
///
/// The whole value must be a non-negative JSON integer. Values with trailing
/// junk or a fractional part (`"12abc"`, `"12.0"`) read as 0 rather than as
/// their leading digits.
pub fn parse_best_score(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };
    match serde_json::from_str::<u64>(raw.trim()) {
        Ok(score) => score,
        Err(e) => {
            log::warn!("Ignoring malformed best score {raw:?}: {e}");
            0
        }
    }
}

/// Serialize a best score for storage
pub fn encode_best_score(score: u64) -> String {
    serde_json::to_string(&score).unwrap_or_else(|_| score.to_string())
}

/// In-memory store (tests, headless runs)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
    /// Number of saves, so callers can check write frequency
    pub writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw stored value, as if read from disk
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            writes: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best_score(&self) -> u64 {
        parse_best_score(self.raw.as_deref())
    }

    fn save_best_score(&mut self, score: u64) {
        self.raw = Some(encode_best_score(score));
        self.writes += 1;
    }
}

/// Best score kept in a small file next to the binary (native only)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BestScoreStore for FileStore {
    fn load_best_score(&self) -> u64 {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let score = parse_best_score(Some(&raw));
                log::info!("Loaded best score {score} from {}", self.path.display());
                score
            }
            Err(_) => {
                log::info!("No best score found, starting fresh");
                0
            }
        }
    }

    fn save_best_score(&mut self, score: u64) {
        if let Err(e) = std::fs::write(&self.path, encode_best_score(score)) {
            log::warn!("Failed to save best score to {}: {e}", self.path.display());
        }
    }
}

/// Best score kept in LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "highScore";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl BestScoreStore for LocalStorageStore {
    fn load_best_score(&self) -> u64 {
        let raw = Self::storage().and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
        let score = parse_best_score(raw.as_deref());
        log::info!("Loaded best score {score}");
        score
    }

    fn save_best_score(&mut self, score: u64) {
        if let Some(storage) = Self::storage() {
            if storage
                .set_item(Self::STORAGE_KEY, &encode_best_score(score))
                .is_err()
            {
                log::warn!("Failed to save best score");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best_score() {
        assert_eq!(parse_best_score(None), 0);
        assert_eq!(parse_best_score(Some("42")), 42);
        assert_eq!(parse_best_score(Some(" 17\n")), 17);
        assert_eq!(parse_best_score(Some("")), 0);
        assert_eq!(parse_best_score(Some("lots")), 0);
        assert_eq!(parse_best_score(Some("-3")), 0);
        assert_eq!(parse_best_score(Some("12abc")), 0);
        assert_eq!(parse_best_score(Some("12.0")), 0);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::with_raw("garbage");
        assert_eq!(store.load_best_score(), 0);

        store.save_best_score(23);
        assert_eq!(store.raw(), Some("23"));
        assert_eq!(store.load_best_score(), 23);
        assert_eq!(store.writes, 1);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store() {
        let path = std::env::temp_dir().join(format!("fall_dodge_best_{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut store = FileStore::new(&path);
        assert_eq!(store.load_best_score(), 0);
        store.save_best_score(31);
        assert_eq!(FileStore::new(&path).load_best_score(), 31);

        let _ = std::fs::remove_file(&path);
    }
}
