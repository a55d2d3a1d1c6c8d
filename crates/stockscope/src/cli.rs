use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print without colours.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Defaults to the interactive shell.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up quotes by ticker (AAPL) or company name (apple).
    Search {
        query: Vec<String>,
    },

    /// Full quote, 30-day price chart and recent news for one stock.
    Detail {
        symbol: String,
    },

    /// Show or edit the saved watchlist.
    Watchlist {
        #[command(subcommand)]
        action: Option<WatchlistCommand>,
    },

    /// Compare the key metrics of two stocks side by side.
    Compare {
        first: String,
        second: String,
    },

    /// Show or change the colour theme.
    Theme {
        #[arg(value_enum, default_value_t = ThemeArgs::Show)]
        action: ThemeArgs,
    },

    /// Browse search, watchlist, comparison and detail screens interactively.
    Shell,
}

#[derive(Subcommand, Debug)]
pub enum WatchlistCommand {
    /// List saved stocks.
    List,

    /// Look up each symbol and save it.
    Add {
        #[arg(required = true)]
        symbols: Vec<String>,
    },

    /// Remove saved symbols.
    Remove {
        #[arg(required = true)]
        symbols: Vec<String>,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ThemeArgs {
    /// Print the current mode.
    Show,

    /// Flip between light and dark.
    Toggle,

    Light,

    Dark,
}
