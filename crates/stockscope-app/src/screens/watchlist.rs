use super::{error, heading, muted, EMPTY_WATCHLIST, SAVE_FAILED};
use stockscope_common::{Storage, Theme, WatchlistEntry, WatchlistStore};

#[derive(Debug)]
pub struct WatchlistScreen {
    store: WatchlistStore,
    refreshing: bool,
    error: Option<String>,
}

impl WatchlistScreen {
    pub fn new(storage: Storage) -> Self {
        Self {
            store: WatchlistStore::new(storage),
            refreshing: false,
            error: None,
        }
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        self.store.entries()
    }

    pub fn refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn on_focus(&mut self) {
        self.store.load().await;
    }

    /// Reload from storage, with the refreshing flag held for the duration.
    pub async fn refresh(&mut self) {
        self.refreshing = true;
        self.store.load().await;
        self.refreshing = false;
    }

    /// Drop the symbol and persist. Returns whether anything was removed.
    pub async fn remove(&mut self, symbol: &str) -> bool {
        match self.store.remove(symbol).await {
            Ok(removed) => {
                self.error = None;
                removed
            }
            Err(e) => {
                log::error!("Error removing {symbol} from watchlist: {e:#}");
                self.error = Some(SAVE_FAILED.to_string());
                false
            }
        }
    }

    pub fn render(&self, theme: &Theme) -> String {
        let mut lines = vec![heading(theme, "Watchlist").to_string()];
        if self.refreshing {
            lines.push(muted(theme, "Refreshing...").to_string());
        }
        if let Some(message) = &self.error {
            lines.push(error(theme, message).to_string());
        }

        if self.entries().is_empty() {
            lines.push(muted(theme, EMPTY_WATCHLIST).to_string());
        }
        for entry in self.entries() {
            lines.push(format!(
                "{} {}",
                heading(theme, &format!("{:<6}", entry.symbol)),
                muted(theme, &entry.name)
            ));
        }
        lines.join("\n")
    }
}
