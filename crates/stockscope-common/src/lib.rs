pub mod config;
pub mod storage;
pub mod theme;
pub mod watchlist;

pub use crate::config::{ApiConfig, Settings};
pub use crate::storage::Storage;
pub use crate::theme::{Palette, Theme, ThemeMode};
pub use crate::watchlist::{AddOutcome, WatchlistEntry, WatchlistStore};
