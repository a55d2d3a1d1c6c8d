//! Screen state and text rendering.
//!
//! Each screen owns its inputs, loading flag, error and results. Rendering is
//! a pure function of that state plus the [`Theme`] passed in.

mod compare;
mod detail;
mod home;
mod watchlist;

pub use compare::{CompareRequest, CompareScreen};
pub use detail::{DetailScreen, LABEL_POINTS, NEWS_LIMIT};
pub use home::{HomeScreen, SearchRequest};
pub use watchlist::WatchlistScreen;

use colored::{ColoredString, Colorize};
use stockscope_common::Theme;

pub const FETCH_FAILED: &str = "An error occurred while fetching data. Please try again.";
pub const NO_RESULTS: &str = "No results found";
pub const NO_STOCKS: &str = "No stocks to display. Try searching for a stock.";
pub const EMPTY_WATCHLIST: &str = "Your watchlist is empty.";
pub const SAVE_FAILED: &str = "Could not save your watchlist.";

fn heading(theme: &Theme, text: &str) -> ColoredString {
    text.color(theme.palette().text).bold()
}

fn muted(theme: &Theme, text: &str) -> ColoredString {
    text.color(theme.palette().muted)
}

fn error(theme: &Theme, text: &str) -> ColoredString {
    text.color(theme.palette().error)
}

fn accent(theme: &Theme, text: &str) -> ColoredString {
    text.color(theme.palette().accent)
}

fn trend(theme: &Theme, text: &str, gain: bool) -> ColoredString {
    let palette = theme.palette();
    text.color(if gain { palette.positive } else { palette.negative })
}
