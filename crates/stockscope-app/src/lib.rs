//! Screens and the rules they share.
//! ```ignore
//! let finance = Finance::new(&ApiConfig::from_env()?)?;
//! let mut home = HomeScreen::new(storage);
//! home.query = "apple".to_string();
//! home.submit(&finance).await;
//! println!("{}", home.render(&theme));
//! ```

pub mod comparison;
pub mod format;
pub mod generation;
pub mod lookup;
pub mod screens;
pub mod source;

pub use comparison::{compare, CompareError, Comparison, ComparisonRow};
pub use lookup::{classify, resolve_quotes, QueryKind, ValidationError};
pub use screens::{CompareScreen, DetailScreen, HomeScreen, WatchlistScreen};
pub use source::QuoteSource;
