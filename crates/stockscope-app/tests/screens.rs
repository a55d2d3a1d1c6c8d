//! Screen behaviour against a canned quote source.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;
use stockscope_app::screens::{LABEL_POINTS, NEWS_LIMIT};
use stockscope_app::{
    compare, resolve_quotes, CompareError, CompareScreen, Comparison, DetailScreen, HomeScreen,
    QuoteSource, ValidationError, WatchlistScreen,
};
use stockscope_client::{ChartSeries, Fetched, HistoryParams, NewsItem, Quote, SearchCandidate};
use stockscope_common::{Storage, Theme, ThemeMode};

#[derive(Default)]
struct FakeSource {
    quotes: HashMap<String, Quote>,
    candidates: Vec<SearchCandidate>,
    failing: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    fn with_quotes(quotes: Vec<Quote>) -> Self {
        Self {
            quotes: quotes.into_iter().map(|q| (q.symbol.clone(), q)).collect(),
            ..Default::default()
        }
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl QuoteSource for FakeSource {
    async fn quotes(&self, symbols: &[String]) -> Fetched<Vec<Quote>> {
        self.record(format!("quotes:{}", symbols.join(",")));
        if self.failing {
            return Fetched::Failed("connection refused".to_string());
        }
        let found: Vec<Quote> = symbols.iter().filter_map(|s| self.quotes.get(s).cloned()).collect();
        if found.is_empty() {
            Fetched::Empty
        } else {
            Fetched::Found(found)
        }
    }

    async fn search(&self, query: &str) -> Fetched<Vec<SearchCandidate>> {
        self.record(format!("search:{query}"));
        if self.candidates.is_empty() {
            Fetched::Empty
        } else {
            Fetched::Found(self.candidates.clone())
        }
    }

    async fn history(&self, symbol: &str, _params: &HistoryParams) -> Fetched<ChartSeries> {
        self.record(format!("history:{symbol}"));
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dates: Vec<NaiveDate> = (0..10).map(|d| start + chrono::Days::new(d)).collect();
        let closes: Vec<Option<f64>> = (0..10).map(|i| Some(180.0 + i as f64)).collect();
        Fetched::Found(ChartSeries::zip(&dates, &closes))
    }

    async fn news(&self, symbol: &str) -> Fetched<Vec<NewsItem>> {
        self.record(format!("news:{symbol}"));
        let items = (1..=5)
            .map(|i| NewsItem {
                uuid: format!("n{i}"),
                title: format!("Headline {i}"),
                publisher: "Reuters".to_string(),
                article_url: format!("https://example.com/n{i}"),
            })
            .collect();
        Fetched::Found(items)
    }
}

fn quote(symbol: &str, name: &str, price: f64) -> Quote {
    let mut quote = Quote::new(symbol);
    quote.short_name = Some(name.to_string());
    quote.regular_market_price = Some(price);
    quote
}

fn candidate(symbol: &str) -> SearchCandidate {
    SearchCandidate {
        symbol: symbol.to_string(),
        ..Default::default()
    }
}

fn plain_theme() -> Theme {
    colored::control::set_override(false);
    Theme::new(ThemeMode::Light)
}

// ── lookup ───────────────────────────────────────────────────────────

#[tokio::test]
async fn tickers_skip_search() {
    let source = FakeSource::with_quotes(vec![quote("AAPL", "Apple Inc.", 189.98)]);

    let quotes = resolve_quotes(&source, "AAPL").await.unwrap().into_inner();
    assert_eq!(quotes[0].symbol, "AAPL");
    assert_eq!(source.calls(), vec!["quotes:AAPL"]);
}

#[tokio::test]
async fn names_use_only_the_first_candidate() {
    let mut source = FakeSource::with_quotes(vec![
        quote("AAPL", "Apple Inc.", 189.98),
        quote("APLE", "Apple Hospitality REIT, Inc.", 15.2),
    ]);
    source.candidates = vec![candidate("AAPL"), candidate("APLE")];

    let quotes = resolve_quotes(&source, "apple").await.unwrap().into_inner();
    assert_eq!(quotes.len(), 1);
    assert_eq!(source.calls(), vec!["search:apple", "quotes:AAPL"]);
}

#[tokio::test]
async fn blank_query_makes_no_request() {
    let source = FakeSource::default();
    assert_eq!(
        resolve_quotes(&source, "  ").await,
        Err(ValidationError::EmptyQuery)
    );
    assert!(source.calls().is_empty());
}

// ── home ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn home_search_messages() {
    let dir = tempfile::tempdir().unwrap();
    let source = FakeSource::with_quotes(vec![quote("AAPL", "Apple Inc.", 189.98)]);
    let mut home = HomeScreen::new(Storage::new(dir.path()));

    home.submit(&source).await;
    assert_eq!(home.error(), Some("Please enter a stock name or symbol."));

    home.query = "NOPE".to_string();
    home.submit(&source).await;
    assert_eq!(home.error(), Some("No results found"));
    assert!(home.stocks().is_empty());

    home.query = "AAPL".to_string();
    home.submit(&source).await;
    assert_eq!(home.error(), None);
    assert!(!home.loading());
    assert_eq!(home.stocks()[0].name(), "Apple Inc.");

    let failing = FakeSource {
        failing: true,
        ..Default::default()
    };
    home.query = "MSFT".to_string();
    home.submit(&failing).await;
    assert_eq!(
        home.error(),
        Some("An error occurred while fetching data. Please try again.")
    );
    assert!(home.stocks().is_empty());
}

#[tokio::test]
async fn stale_search_results_are_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let mut home = HomeScreen::new(Storage::new(dir.path()));

    home.query = "AAPL".to_string();
    let first = home.begin_search().unwrap();
    home.query = "MSFT".to_string();
    let second = home.begin_search().unwrap();

    assert!(home.finish_search(&second, Fetched::Found(vec![quote("MSFT", "Microsoft", 410.0)])));
    assert!(!home.finish_search(&first, Fetched::Found(vec![quote("AAPL", "Apple Inc.", 189.98)])));
    assert_eq!(home.stocks().len(), 1);
    assert_eq!(home.stocks()[0].symbol, "MSFT");
}

#[tokio::test]
async fn adding_from_home_shows_up_on_the_watchlist() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::new(dir.path());
    let apple = quote("AAPL", "Apple Inc.", 189.98);

    let mut home = HomeScreen::new(storage.clone());
    home.on_focus().await;
    home.add_to_watchlist(&apple).await;
    assert_eq!(home.notice(), Some("AAPL added to watchlist"));
    home.add_to_watchlist(&apple).await;
    assert_eq!(home.notice(), Some("AAPL is already in your watchlist"));

    let theme = plain_theme();
    let mut watchlist = WatchlistScreen::new(storage);
    watchlist.on_focus().await;
    assert_eq!(watchlist.entries().len(), 1);
    assert!(watchlist.render(&theme).contains("Apple Inc."));

    assert!(watchlist.remove("AAPL").await);
    assert!(!watchlist.remove("AAPL").await);
    watchlist.refresh().await;
    assert!(watchlist.render(&theme).contains("Your watchlist is empty."));
}

// ── comparison ───────────────────────────────────────────────────────

#[tokio::test]
async fn comparing_two_valid_symbols() {
    let mut apple = quote("AAPL", "Apple Inc.", 123.45);
    apple.market_cap = Some(2_950_000_000_000.0);
    apple.dividend_yield = Some(0.0051);
    let source = FakeSource::with_quotes(vec![apple, quote("MSFT", "Microsoft", 410.0)]);

    let comparison = compare(&source, "aapl", " MSFT ").await.unwrap();
    assert_eq!(comparison.title(), "AAPL vs MSFT");

    let rows = comparison.rows();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].left, "$123.45");
    assert_eq!(rows[1].left, "$2950.00B");
    assert_eq!(rows[3].left, "0.51%");
    assert_eq!(rows[0].right, "$410.00");
}

#[tokio::test]
async fn one_invalid_symbol_clears_the_comparison() {
    let source = FakeSource::with_quotes(vec![
        quote("AAPL", "Apple Inc.", 189.98),
        quote("MSFT", "Microsoft", 410.0),
    ]);
    let mut screen = CompareScreen::new();

    screen.first = "AAPL".to_string();
    screen.second = "MSFT".to_string();
    screen.submit(&source).await;
    assert!(screen.comparison().is_some());

    screen.second = "NOPE".to_string();
    screen.submit(&source).await;
    assert_eq!(screen.error(), Some("One or both stock symbols are invalid"));
    assert!(screen.comparison().is_none());
}

#[tokio::test]
async fn comparison_validation_and_transport_errors() {
    let failing = FakeSource {
        failing: true,
        ..Default::default()
    };

    assert_eq!(
        compare(&failing, "AAPL", "").await,
        Err(CompareError::Invalid(ValidationError::MissingSymbols))
    );
    assert!(failing.calls().is_empty());

    let err = compare(&failing, "AAPL", "MSFT").await.unwrap_err();
    assert_eq!(err.to_string(), "An error occurred while fetching stock data");
}

#[tokio::test]
async fn stale_comparison_is_dropped() {
    let mut screen = CompareScreen::new();
    screen.first = "AAPL".to_string();
    screen.second = "MSFT".to_string();
    let first = screen.begin().unwrap();
    screen.second = "GOOG".to_string();
    let second = screen.begin().unwrap();

    let latest = Comparison {
        left: quote("AAPL", "Apple Inc.", 189.98),
        right: quote("GOOG", "Alphabet Inc.", 140.0),
    };
    assert!(screen.finish(&second, Ok(latest)));
    assert!(!screen.finish(&first, Err(CompareError::UnknownSymbol)));
    assert_eq!(screen.error(), None);
    assert_eq!(screen.comparison().unwrap().title(), "AAPL vs GOOG");
}

#[tokio::test]
async fn compare_screen_renders_a_table() {
    let theme = plain_theme();
    let source = FakeSource::with_quotes(vec![
        quote("AAPL", "Apple Inc.", 189.98),
        quote("MSFT", "Microsoft", 410.0),
    ]);
    let mut screen = CompareScreen::new();
    screen.first = "AAPL".to_string();
    screen.second = "MSFT".to_string();
    screen.submit(&source).await;

    let text = screen.render(&theme);
    assert!(text.contains("AAPL vs MSFT"));
    assert!(text.contains("Dividend Yield"));
    assert!(text.contains("$189.98"));
}

// ── detail ───────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_market_cap_is_not_available_everywhere() {
    let theme = plain_theme();
    let apple = quote("AAPL", "Apple Inc.", 189.98);
    let source = FakeSource::with_quotes(vec![apple.clone(), quote("MSFT", "Microsoft", 410.0)]);

    let comparison = compare(&source, "AAPL", "MSFT").await.unwrap();
    assert_eq!(comparison.rows()[1].left, "N/A");

    let detail = DetailScreen::new(apple);
    let summary = detail.render_summary(&theme);
    let market_cap = summary
        .lines()
        .find(|line| line.starts_with("Market Cap"))
        .unwrap();
    assert!(market_cap.ends_with("N/A"));
}

#[test]
fn detail_without_a_name_shows_not_available() {
    let theme = plain_theme();
    let detail = DetailScreen::new(Quote::new("ZZZZ"));

    let summary = detail.render_summary(&theme);
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "ZZZZ");
    assert_eq!(lines[1], "N/A");
}

#[tokio::test]
async fn detail_loads_chart_and_three_headlines() {
    let theme = plain_theme();
    let source = FakeSource::default();
    let mut detail = DetailScreen::new(quote("AAPL", "Apple Inc.", 189.98));

    assert!(detail.render(&theme).contains("Loading chart data..."));
    detail.load(&source).await;

    let mut calls = source.calls();
    calls.sort();
    assert_eq!(calls, vec!["history:AAPL", "news:AAPL"]);

    assert_eq!(detail.news().len(), NEWS_LIMIT);
    assert_eq!(detail.chart().unwrap().len(), 10);

    let caption = detail.render_chart_caption(&theme);
    assert!(caption.contains("30-Day Price Chart"));
    assert_eq!(caption.matches("/2024").count(), LABEL_POINTS);
    assert!(caption.contains("1/10/2024"));
    assert!(!caption.contains("1/3/2024"));
}

#[tokio::test]
async fn detail_without_news() {
    let theme = plain_theme();
    let mut detail = DetailScreen::new(quote("AAPL", "Apple Inc.", 189.98));

    let ticket = detail.begin_load();
    detail.finish_load(ticket, Fetched::Empty, Fetched::Failed("timeout".to_string()));
    assert!(detail.render_news(&theme).contains("No recent news available."));
    assert!(detail.chart().is_none());
}
