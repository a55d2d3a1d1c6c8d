use crate::storage::Storage;
use anyhow::Result;
use colored::Color;
use serde::{Deserialize, Serialize};

/// Storage key remembering the last chosen mode between runs.
pub const THEME_KEY: &str = "theme";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

/// Foreground colours for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub error: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::TrueColor { r, g, b }
}

const LIGHT: Palette = Palette {
    text: rgb(0x33, 0x33, 0x33),
    muted: rgb(0x66, 0x66, 0x66),
    accent: rgb(0x00, 0x7a, 0xff),
    positive: rgb(0x4c, 0xaf, 0x50),
    negative: rgb(0xf4, 0x43, 0x36),
    error: rgb(0xf4, 0x43, 0x36),
};

const DARK: Palette = Palette {
    text: rgb(0xff, 0xff, 0xff),
    muted: rgb(0xcc, 0xcc, 0xcc),
    accent: rgb(0xff, 0xff, 0xff),
    positive: rgb(0x4c, 0xaf, 0x50),
    negative: rgb(0xf4, 0x43, 0x36),
    error: rgb(0xff, 0x6b, 0x6b),
};

/// Light/dark context handed to every render call. Styling only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Flip between light and dark, returning the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        self.mode
    }

    pub fn palette(&self) -> Palette {
        match self.mode {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }

    /// Theme saved by the last run; the default (light) when none was saved or it can't be read.
    pub async fn load(storage: &Storage) -> Self {
        match storage.get_json::<ThemeMode>(THEME_KEY).await {
            Ok(Some(mode)) => Self::new(mode),
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("failed to load theme; using the default: {e:#}");
                Self::default()
            }
        }
    }

    pub async fn save(&self, storage: &Storage) -> Result<()> {
        storage.set_json(THEME_KEY, &self.mode).await
    }
}
