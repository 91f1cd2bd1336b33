//! Runtime configuration
//!
//! Read once at start-up from the page query string, e.g.
//! `index.html?catalog=kata.xml&log=info&video_width=640&video_height=360`.
//! Missing keys keep their defaults, unknown keys are ignored.

use serde::Deserialize;

/// Catalog document served next to `index.html`
const DEFAULT_CATALOG_URL: &str = "data.xml";
const DEFAULT_LOG_LEVEL: &str = "debug";
const DEFAULT_VIDEO_WIDTH: u32 = 560;
const DEFAULT_VIDEO_HEIGHT: u32 = 315;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// URL of the catalog XML document
    #[serde(rename = "catalog")]
    pub catalog_url: String,
    /// `log` level name: error, warn, info, debug or trace
    pub log: String,
    pub video_width: u32,
    pub video_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            log: DEFAULT_LOG_LEVEL.to_string(),
            video_width: DEFAULT_VIDEO_WIDTH,
            video_height: DEFAULT_VIDEO_HEIGHT,
        }
    }
}

impl AppConfig {
    /// Parse a query string, with or without the leading `?`
    pub fn from_query(query: &str) -> Result<Self, serde_qs::Error> {
        let query = query.strip_prefix('?').unwrap_or(query);
        if query.is_empty() {
            return Ok(Self::default());
        }
        serde_qs::from_str(query)
    }

    /// Read configuration from `window.location.search`
    pub fn from_location() -> Result<Self, serde_qs::Error> {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    /// Unknown level names fall back to debug
    pub fn log_level(&self) -> log::Level {
        self.log.parse().unwrap_or(log::Level::Debug)
    }
}
