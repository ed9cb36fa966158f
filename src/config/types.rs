use serde::Deserialize;

/// Main configuration structure
///
/// Every section has defaults, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub http: HttpConfig,
    pub index: IndexConfig,
    pub single: SingleConfig,
}

/// Which variant `POST /scrape` runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeMode {
    /// Fetch an index page, discover document links and fetch every document
    #[default]
    Index,
    /// Fetch one page relative to the configured base URL
    Single,
}

/// Listener configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Variant served by `POST /scrape`
    pub mode: ScrapeMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            mode: ScrapeMode::Index,
        }
    }
}

/// Outbound HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connect timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("folio-scraper/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Link discovery and text extraction rules for the index variant
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Selector for anchors on the index page that may lead to documents
    #[serde(rename = "link-selector")]
    pub link_selector: String,

    /// Selector for the element holding a document's text
    #[serde(rename = "content-selector")]
    pub content_selector: String,

    /// Selector for the heading tried first when resolving a title
    #[serde(rename = "heading-selector")]
    pub heading_selector: String,

    /// Substring a candidate URL's path must contain
    #[serde(rename = "path-marker")]
    pub path_marker: String,

    /// Regex removed from the end of resolved titles
    #[serde(rename = "title-suffix-pattern")]
    pub title_suffix_pattern: String,

    /// Title used when neither heading nor `<title>` has text
    #[serde(rename = "untitled-fallback")]
    pub untitled_fallback: String,

    /// Collapse whitespace runs in extracted content to single spaces
    #[serde(rename = "collapse-whitespace")]
    pub collapse_whitespace: bool,

    /// Cap on in-flight document fetches; unbounded when unset
    #[serde(rename = "max-concurrent-fetches")]
    pub max_concurrent_fetches: Option<usize>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            link_selector: "div.panel-lista-opciones-nivel-02 a[href]".to_string(),
            content_selector: "div.panel-documento".to_string(),
            heading_selector: "h1".to_string(),
            path_marker: "/docs/".to_string(),
            title_suffix_pattern: r" - Gestor Normativo Alejandra 2\.0$".to_string(),
            untitled_fallback: "Documento sin título".to_string(),
            // Off by default: container text is only trimmed, so its line
            // breaks survive.
            collapse_whitespace: false,
            max_concurrent_fetches: None,
        }
    }
}

/// Single-page variant configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SingleConfig {
    /// Base URL that request paths are appended to
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Source label stamped on every single-page record
    #[serde(rename = "source-label")]
    pub source_label: String,
}

impl Default for SingleConfig {
    fn default() -> Self {
        Self {
            base_url: "https://gestornormativo.creg.gov.co/gestor/entorno/docs/".to_string(),
            source_label: "CREG".to_string(),
        }
    }
}
