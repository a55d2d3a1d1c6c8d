use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Default RapidAPI host serving the finance endpoints.
pub const DEFAULT_API_HOST: &str = "yh-finance.p.rapidapi.com";

const API_KEY_VAR: &str = "RAPIDAPI_KEY";
const API_HOST_VAR: &str = "RAPIDAPI_HOST";
const API_URL_VAR: &str = "STOCKSCOPE_API_URL";
const DATA_DIR_VAR: &str = "STOCKSCOPE_DATA_DIR";

/// Connection details for the quote API.
///
/// The key is never compiled in; it comes from the environment (or a `.env`
/// file picked up by `dotenv`).
///
/// ```bash
/// RAPIDAPI_KEY=xxxxxxxx
/// RAPIDAPI_HOST=yh-finance.p.rapidapi.com     # optional
/// STOCKSCOPE_API_URL=https://yh-finance.p.rapidapi.com     # optional
/// ```
#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_host: String,
}

impl ApiConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            base_url: format!("https://{DEFAULT_API_HOST}"),
            api_key: api_key.to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
        }
    }

    /// Point the config at another base URL (a mock server, a proxy, ...).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| dotenv::var(key).ok())
    }

    /// Build the config from any variable lookup; `from_env()` feeds it the process environment.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = var(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow!("{API_KEY_VAR} is not set; add it to the environment or a .env file"))?;
        let api_host = var(API_HOST_VAR)
            .filter(|host| !host.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string());
        let base_url = var(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| format!("https://{api_host}"));

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
            api_host,
        })
    }
}

// keep the key out of `{:?}` output, which ends up in the logs
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("api_host", &self.api_host)
            .finish()
    }
}

/// Local, non-secret settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the key files of the local store.
    pub data_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| dotenv::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match var(DATA_DIR_VAR).filter(|dir| !dir.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .ok_or_else(|| anyhow!("no data directory found; set {DATA_DIR_VAR}"))?
                .join("stockscope"),
        };
        Ok(Self { data_dir })
    }
}
