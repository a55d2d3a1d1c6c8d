use crate::{find_quote, save_theme, ui};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use stockscope_app::{CompareScreen, DetailScreen, HomeScreen, WatchlistScreen};
use stockscope_client::{Finance, Quote};
use stockscope_common::{Storage, Theme, WatchlistEntry};

/// Interactive navigation between the screens. Each screen keeps its state
/// for the whole session, and reloads the watchlist whenever it is entered.
pub struct Shell {
    finance: Finance,
    storage: Storage,
    theme: Theme,
    home: HomeScreen,
    watchlist: WatchlistScreen,
    compare: CompareScreen,
}

fn prompt() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// `None` when the user backs out with Esc or q.
fn choose<T: ToString>(title: &str, items: &[T]) -> Result<Option<usize>> {
    Ok(Select::with_theme(&prompt())
        .with_prompt(title)
        .items(items)
        .default(0)
        .interact_opt()?)
}

fn ask(title: &str, initial: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&prompt())
        .with_prompt(title)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

impl Shell {
    pub fn new(finance: Finance, storage: Storage, theme: Theme) -> Self {
        Self {
            home: HomeScreen::new(storage.clone()),
            watchlist: WatchlistScreen::new(storage.clone()),
            compare: CompareScreen::new(),
            finance,
            storage,
            theme,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        loop {
            let toggle = format!("Switch to {} theme", self.theme.mode().flipped());
            let items = ["Search", "Watchlist", "Compare", toggle.as_str(), "Quit"];
            match choose("StockScope", &items)? {
                Some(0) => self.search().await?,
                Some(1) => self.saved().await?,
                Some(2) => self.comparison().await?,
                Some(3) => {
                    self.theme.toggle();
                    save_theme(&self.theme, &self.storage).await;
                }
                _ => break,
            }
        }
        Ok(())
    }

    async fn search(&mut self) -> Result<()> {
        self.home.on_focus().await;
        loop {
            println!("\n{}\n", self.home.render(&self.theme));

            let items = ["New search", "View details", "Add to watchlist", "Back"];
            match choose("Search", &items)? {
                Some(0) => {
                    self.home.query = ask("Stock name or symbol", &self.home.query)?;
                    ui::with_spinner("Searching...", self.home.submit(&self.finance)).await;
                }
                Some(1) => {
                    if let Some(quote) = self.pick_stock("View details")? {
                        self.detail(quote).await?;
                    }
                }
                Some(2) => {
                    if let Some(quote) = self.pick_stock("Add to watchlist")? {
                        self.home.add_to_watchlist(&quote).await;
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn pick_stock(&self, title: &str) -> Result<Option<Quote>> {
        let stocks = self.home.stocks();
        if stocks.is_empty() {
            return Ok(None);
        }
        let labels: Vec<String> = stocks
            .iter()
            .map(|q| format!("{} {}", q.symbol, q.name()))
            .collect();
        Ok(choose(title, &labels)?.map(|i| stocks[i].clone()))
    }

    async fn saved(&mut self) -> Result<()> {
        self.watchlist.on_focus().await;
        loop {
            println!("\n{}\n", self.watchlist.render(&self.theme));

            let items = ["View details", "Remove", "Refresh", "Back"];
            let action = choose("Watchlist", &items)?;
            if matches!(action, Some(0) | Some(1)) && self.watchlist.entries().is_empty() {
                continue;
            }

            match action {
                Some(0) => {
                    if let Some(entry) = self.pick_entry("View details")? {
                        let quote = match find_quote(&self.finance, &entry.symbol).await {
                            Ok(quote) => quote,
                            Err(e) => {
                                log::warn!("Showing {} without a live quote: {e:#}", entry.symbol);
                                let mut quote = Quote::new(&entry.symbol);
                                quote.short_name = Some(entry.name.clone());
                                quote
                            }
                        };
                        self.detail(quote).await?;
                    }
                }
                Some(1) => {
                    if let Some(entry) = self.pick_entry("Remove")? {
                        self.watchlist.remove(&entry.symbol).await;
                    }
                }
                Some(2) => self.watchlist.refresh().await,
                _ => return Ok(()),
            }
        }
    }

    fn pick_entry(&self, title: &str) -> Result<Option<WatchlistEntry>> {
        let entries = self.watchlist.entries();
        let labels: Vec<String> = entries
            .iter()
            .map(|e| format!("{} {}", e.symbol, e.name))
            .collect();
        Ok(choose(title, &labels)?.map(|i| entries[i].clone()))
    }

    async fn comparison(&mut self) -> Result<()> {
        loop {
            self.compare.first = ask("First stock symbol (e.g., AAPL)", &self.compare.first)?;
            self.compare.second = ask("Second stock symbol (e.g., MSFT)", &self.compare.second)?;
            ui::with_spinner("Comparing...", self.compare.submit(&self.finance)).await;
            println!("\n{}\n", self.compare.render(&self.theme));

            match choose("Compare", &["Compare again", "Back"])? {
                Some(0) => continue,
                _ => return Ok(()),
            }
        }
    }

    async fn detail(&mut self, quote: Quote) -> Result<()> {
        let mut detail = DetailScreen::new(quote);
        loop {
            ui::with_spinner("Loading chart data...", detail.load(&self.finance)).await;
            println!();
            ui::print_detail(&detail, &self.theme);
            println!();

            match choose(&detail.quote().symbol, &["Reload", "Back"])? {
                Some(0) => continue,
                _ => return Ok(()),
            }
        }
    }
}
