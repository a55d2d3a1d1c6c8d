use super::{accent, error, heading, muted, trend, FETCH_FAILED, NO_RESULTS, NO_STOCKS, SAVE_FAILED};
use crate::format;
use crate::generation::{Generation, Ticket};
use crate::lookup::{self, classify, QueryKind};
use crate::source::QuoteSource;
use stockscope_client::{Fetched, Quote};
use stockscope_common::{Storage, Theme, WatchlistEntry, WatchlistStore};

/// A validated search, waiting for its results.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    ticket: Ticket,
    kind: QueryKind,
}

impl SearchRequest {
    pub fn kind(&self) -> &QueryKind {
        &self.kind
    }
}

/// Search box, results list and "add to watchlist".
#[derive(Debug)]
pub struct HomeScreen {
    pub query: String,
    loading: bool,
    error: Option<String>,
    notice: Option<String>,
    stocks: Vec<Quote>,
    watchlist: WatchlistStore,
    generation: Generation,
}

impl HomeScreen {
    pub fn new(storage: Storage) -> Self {
        Self {
            query: String::new(),
            loading: false,
            error: None,
            notice: None,
            stocks: Vec::new(),
            watchlist: WatchlistStore::new(storage),
            generation: Generation::default(),
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn stocks(&self) -> &[Quote] {
        &self.stocks
    }

    pub fn watchlist(&self) -> &WatchlistStore {
        &self.watchlist
    }

    pub async fn on_focus(&mut self) {
        self.watchlist.load().await;
    }

    /// Validate the query and open a new request. `None` when the query is
    /// blank, in which case the error is already set.
    pub fn begin_search(&mut self) -> Option<SearchRequest> {
        match classify(&self.query) {
            Ok(kind) => {
                self.loading = true;
                self.error = None;
                self.notice = None;
                Some(SearchRequest {
                    ticket: self.generation.begin(),
                    kind,
                })
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Apply results, unless a newer search has started since. Returns
    /// whether they were applied.
    pub fn finish_search(&mut self, request: &SearchRequest, outcome: Fetched<Vec<Quote>>) -> bool {
        if !self.generation.is_current(request.ticket) {
            log::debug!("dropping stale results for {:?}", request.kind);
            return false;
        }

        self.loading = false;
        match outcome {
            Fetched::Found(quotes) => self.stocks = quotes,
            Fetched::Empty => {
                self.stocks.clear();
                self.error = Some(NO_RESULTS.to_string());
            }
            Fetched::Failed(_) => {
                self.stocks.clear();
                self.error = Some(FETCH_FAILED.to_string());
            }
        }
        true
    }

    pub async fn submit<S: QuoteSource>(&mut self, source: &S) {
        if let Some(request) = self.begin_search() {
            let outcome = lookup::resolve(source, request.kind()).await;
            self.finish_search(&request, outcome);
        }
    }

    /// Save the quote's symbol and name, setting the added/duplicate notice.
    pub async fn add_to_watchlist(&mut self, quote: &Quote) {
        let entry = WatchlistEntry::new(&quote.symbol, quote.name());
        match self.watchlist.add(entry).await {
            Ok(outcome) => self.notice = Some(outcome.notice(&quote.symbol)),
            Err(e) => {
                log::error!("Error saving watchlist: {e:#}");
                self.error = Some(SAVE_FAILED.to_string());
            }
        }
    }

    pub fn render(&self, theme: &Theme) -> String {
        let mut lines = vec![heading(theme, "Stock Search").to_string()];
        lines.push(format!("{} {}", accent(theme, ">"), self.query));

        if self.loading {
            lines.push(muted(theme, "Searching...").to_string());
        }
        if let Some(message) = &self.error {
            lines.push(error(theme, message).to_string());
        }
        if let Some(message) = &self.notice {
            lines.push(accent(theme, message).to_string());
        }
        lines.push(String::new());

        if self.stocks.is_empty() {
            lines.push(muted(theme, NO_STOCKS).to_string());
        }
        for quote in &self.stocks {
            let saved = if self.watchlist.contains(&quote.symbol) { "★" } else { "☆" };
            lines.push(format!(
                "{} {} {:>10} {} {}",
                heading(theme, &format!("{:<6}", quote.symbol)),
                muted(theme, &format!("{:<32}", quote.name())),
                format::price(quote.regular_market_price),
                trend(
                    theme,
                    &format!("{:>9}", format::change_percent(quote.regular_market_change_percent)),
                    format::is_gain(quote.regular_market_change_percent),
                ),
                accent(theme, saved),
            ));
        }
        lines.join("\n")
    }
}
