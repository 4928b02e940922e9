use crate::constants::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TOKEN_FILE, ECAS_COMMUNITY_ID};
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration of the `eshare` shell.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}

/// Connection settings for one repository instance.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the instance, e.g. `https://b2share.eudat.eu`.
    pub base_url: String,
    /// Plain-text file holding the API access token.
    pub token_file: PathBuf,
    /// Community used by the PID-derived draft flow.
    pub community_id: String,
    /// Default `size` for record listings.
    pub page_size: u32,
    /// Per-request timeout; `None` keeps the transport default.
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

/// Logging section; mirrors the options of the logger builder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub filter: Option<String>,
    pub console: bool,
    pub path: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

// --- Default ---

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            community_id: ECAS_COMMUNITY_ID.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_seconds: None,
            user_agent: concat!("eshare/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            filter: None,
            console: true,
            path: None,
            json: false,
            max_files: 7,
        }
    }
}
