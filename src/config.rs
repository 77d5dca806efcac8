use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    pub completion: CompletionConfig,
    pub ui: UiConfig,
}

/// Where the product catalog lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the catalog document, relative to the page.
    pub url: String,
}

/// Browser key-value slot used for persisted selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub key: String,
}

/// Chat-completion endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub endpoint: String,
    pub model: String,
    /// Response length cap sent as `max_tokens`.
    pub max_tokens: u32,
    /// Bearer credential. Falls back to the page global `OPENAI_API_KEY`.
    pub api_key: Option<String>,
    /// System message placed ahead of every request. Empty disables it.
    pub preamble: String,
}

/// Optional page controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub clear_selections_button: bool,
    pub generate_routine_button: bool,
    pub direction_toggle: bool,
    /// Initial `<body dir>` value, "rtl" or "ltr".
    pub direction: String,
}

pub const DEFAULT_SEARCH_PREAMBLE: &str = "You are a skincare assistant with real-time web search capabilities. When answering user queries, perform web searches to find the most current and accurate information about L'Oréal products, routines, or related topics. Include links or citations in your responses when appropriate.";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            storage: StorageConfig::default(),
            completion: CompletionConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: "products.json".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: "selectedProducts".to_string(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-search-preview".to_string(),
            max_tokens: 700,
            api_key: None,
            preamble: DEFAULT_SEARCH_PREAMBLE.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            clear_selections_button: true,
            generate_routine_button: true,
            direction_toggle: true,
            direction: "rtl".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document.
    /// Returns `Default` if the document is unparseable.
    pub fn from_toml_str(contents: &str) -> Self {
        match toml::from_str(contents) {
            Ok(config) => {
                log::info!("Loaded config.toml");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config.toml: {e} - using defaults");
                Self::default()
            }
        }
    }

    /// Fetch `config.toml` from `url`.
    /// A missing or unreachable file yields the defaults.
    pub async fn fetch(client: &reqwest::Client, url: &str) -> Self {
        let response = match client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::debug!("No config at {url} ({e}) - using defaults");
                return Self::default();
            }
        };
        if !response.status().is_success() {
            log::debug!(
                "No config at {url} (status {}) - using defaults",
                response.status().as_u16()
            );
            return Self::default();
        }
        match response.text().await {
            Ok(body) => Self::from_toml_str(&body),
            Err(e) => {
                log::warn!("Failed to read config at {url}: {e} - using defaults");
                Self::default()
            }
        }
    }

    /// Use `key` as the credential unless one is already configured.
    pub fn with_fallback_api_key(mut self, key: Option<String>) -> Self {
        let configured = self
            .completion
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty());
        if !configured {
            self.completion.api_key = key;
        }
        self
    }
}
