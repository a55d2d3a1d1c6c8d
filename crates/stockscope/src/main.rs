use anyhow::{bail, Result};
use clap::Parser;
use cli::{Cli, Commands, ThemeArgs, WatchlistCommand};
use stockscope_app::screens::{FETCH_FAILED, NO_RESULTS};
use stockscope_app::{resolve_quotes, CompareScreen, DetailScreen, HomeScreen, WatchlistScreen};
use stockscope_client::{Fetched, Finance, Quote};
use stockscope_common::{ApiConfig, Settings, Storage, Theme, ThemeMode};

mod cli;
mod shell;
mod ui;

fn preprocess() {
    // grant access to .env
    dotenv::dotenv().ok();

    // initialise logger; warnings and up unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn finance() -> Result<Finance> {
    let config = ApiConfig::from_env()?;
    log::debug!("Quote API config: {config:?}");
    Finance::new(&config)
}

/// First quote the query resolves to, by the same rules as the search screen.
async fn find_quote(finance: &Finance, query: &str) -> Result<Quote> {
    match resolve_quotes(finance, query).await? {
        Fetched::Found(quotes) => match quotes.into_iter().next() {
            Some(quote) => Ok(quote),
            None => bail!(NO_RESULTS),
        },
        Fetched::Empty => bail!(NO_RESULTS),
        Fetched::Failed(_) => bail!(FETCH_FAILED),
    }
}

async fn save_theme(theme: &Theme, storage: &Storage) {
    if let Err(e) = theme.save(storage).await {
        log::warn!("Failed to save theme: {e:#}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    preprocess();
    let cli = Cli::parse();
    log::debug!("Command line input recorded: {cli:#?}");

    if cli.no_color {
        colored::control::set_override(false);
    }

    let settings = Settings::from_env()?;
    let storage = Storage::new(&settings.data_dir);
    let mut theme = Theme::load(&storage).await;

    // cli framework:
    // "> stockscope <COMMAND>"
    match cli.command.unwrap_or(Commands::Shell) {
        // "> stockscope search apple inc"
        // quotes for a ticker, or for the best match on a company name
        Commands::Search { query } => {
            let finance = finance()?;
            let mut home = HomeScreen::new(storage);
            home.on_focus().await;
            home.query = query.join(" ");
            ui::with_spinner("Searching...", home.submit(&finance)).await;
            println!("{}", home.render(&theme));
        }

        // "> stockscope detail AAPL"
        Commands::Detail { symbol } => {
            let finance = finance()?;
            let quote = ui::with_spinner("Fetching quote...", find_quote(&finance, &symbol)).await?;
            let mut detail = DetailScreen::new(quote);
            ui::with_spinner("Loading chart data...", detail.load(&finance)).await;
            ui::print_detail(&detail, &theme);
        }

        // "> stockscope watchlist [list | add <SYMBOLS> | remove <SYMBOLS>]"
        Commands::Watchlist { action } => match action.unwrap_or(WatchlistCommand::List) {
            WatchlistCommand::List => {
                let mut screen = WatchlistScreen::new(storage);
                screen.on_focus().await;
                println!("{}", screen.render(&theme));
            }

            WatchlistCommand::Add { symbols } => {
                let finance = finance()?;
                let mut home = HomeScreen::new(storage);
                home.on_focus().await;

                for symbol in symbols {
                    home.query = symbol;
                    ui::with_spinner("Searching...", home.submit(&finance)).await;

                    let found = match home.error() {
                        None => home.stocks().first().cloned(),
                        Some(_) => None,
                    };
                    if let Some(quote) = found {
                        home.add_to_watchlist(&quote).await;
                    }

                    if let Some(message) = home.error() {
                        eprintln!("{}: {message}", home.query.trim());
                    } else if let Some(message) = home.notice() {
                        println!("{message}");
                    }
                }
            }

            WatchlistCommand::Remove { symbols } => {
                let mut screen = WatchlistScreen::new(storage);
                screen.on_focus().await;

                for symbol in symbols {
                    if screen.remove(&symbol).await {
                        println!("{symbol} removed from watchlist");
                    } else if let Some(message) = screen.error() {
                        eprintln!("{message}");
                    } else {
                        println!("{symbol} is not in your watchlist");
                    }
                }
            }
        },

        // "> stockscope compare AAPL MSFT"
        Commands::Compare { first, second } => {
            let finance = finance()?;
            let mut screen = CompareScreen::new();
            screen.first = first;
            screen.second = second;
            ui::with_spinner("Comparing...", screen.submit(&finance)).await;
            println!("{}", screen.render(&theme));
        }

        // "> stockscope theme [show toggle light dark]"
        Commands::Theme { action } => {
            match action {
                ThemeArgs::Show => {}
                ThemeArgs::Toggle => {
                    theme.toggle();
                }
                ThemeArgs::Light => theme = Theme::new(ThemeMode::Light),
                ThemeArgs::Dark => theme = Theme::new(ThemeMode::Dark),
            }
            if action != ThemeArgs::Show {
                save_theme(&theme, &storage).await;
            }
            println!("Theme: {}", theme.mode());
        }

        // "> stockscope shell"
        Commands::Shell => {
            let finance = finance()?;
            shell::Shell::new(finance, storage, theme).run().await?;
        }
    }

    Ok(())
}
