use crate::storage::Storage;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Storage key holding the whole watchlist as one JSON array.
pub const WATCHLIST_KEY: &str = "watchlist";

/// One saved symbol.
/// ```json
/// { "symbol": "AAPL", "name": "Apple Inc." }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WatchlistEntry {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
}

impl WatchlistEntry {
    pub fn new(symbol: &str, name: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

impl AddOutcome {
    /// Notice shown to the user after an add.
    pub fn notice(&self, symbol: &str) -> String {
        match self {
            AddOutcome::Added => format!("{symbol} added to watchlist"),
            AddOutcome::AlreadyPresent => format!("{symbol} is already in your watchlist"),
        }
    }
}

/// Ordered, unique-by-symbol list of entries, persisted wholesale under
/// [`WATCHLIST_KEY`] after every mutation.
///
/// Mutations work on the list as of the last [`load()`], the same way a screen
/// works on the list it loaded when it gained focus.
///
/// [`load()`]: #method.load
#[derive(Debug, Clone)]
pub struct WatchlistStore {
    storage: Storage,
    entries: Vec<WatchlistEntry>,
}

impl WatchlistStore {
    /// A store with nothing loaded yet.
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            entries: Vec::new(),
        }
    }

    /// Create the store and load the persisted list.
    pub async fn open(storage: Storage) -> Self {
        let mut store = Self::new(storage);
        store.load().await;
        store
    }

    /// Re-read the persisted list. An absent or unreadable blob loads as an empty list.
    pub async fn load(&mut self) -> &[WatchlistEntry] {
        self.entries = match self.storage.get_json::<Vec<WatchlistEntry>>(WATCHLIST_KEY).await {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("failed to load watchlist; starting from an empty list: {e:#}");
                Vec::new()
            }
        };
        &self.entries
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.iter().any(|entry| entry.symbol == symbol)
    }

    /// Append `entry` and persist, unless its symbol is already present.
    pub async fn add(&mut self, entry: WatchlistEntry) -> Result<AddOutcome> {
        if self.contains(&entry.symbol) {
            log::debug!("{} already in the watchlist", entry.symbol);
            return Ok(AddOutcome::AlreadyPresent);
        }

        let mut updated = self.entries.clone();
        updated.push(entry);
        self.storage.set_json(WATCHLIST_KEY, &updated).await?;
        self.entries = updated;
        Ok(AddOutcome::Added)
    }

    /// Drop every entry for `symbol` and persist the result. Returns whether anything was removed.
    pub async fn remove(&mut self, symbol: &str) -> Result<bool> {
        let updated: Vec<WatchlistEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.symbol != symbol)
            .cloned()
            .collect();
        let removed = updated.len() != self.entries.len();
        self.storage.set_json(WATCHLIST_KEY, &updated).await?;
        self.entries = updated;
        Ok(removed)
    }
}
