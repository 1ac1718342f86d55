// Configuration types
// One section struct per config.toml table

use serde::Deserialize;

/// Top-level configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub gallery: GalleryConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub routes: RoutesConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    /// Business name shown in logs and the service metadata endpoint
    pub site_name: String,
}

/// Gallery configuration
#[derive(Debug, Deserialize, Clone)]
pub struct GalleryConfig {
    /// Directory whose image files are exposed via the listing endpoint
    pub dir: String,
    /// URL base path the raw image bytes are served under; also the base
    /// for the `url` field of every listing entry
    pub public_base: String,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub enable_cors: bool,
    pub cors_origin: String,
    pub max_body_size: u64,
    /// Value of the `Server` response header
    pub server_name: String,
    /// Attach debug context (paths, underlying errors) to 500 bodies.
    /// Development only; leaks filesystem layout when on.
    pub debug_errors: bool,
}

impl HttpConfig {
    /// The allow-origin value to stamp on responses, if CORS is enabled
    pub fn cors_origin(&self) -> Option<&str> {
        self.enable_cors.then_some(self.cors_origin.as_str())
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
}

/// Routes configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RoutesConfig {
    /// Directory the built frontend is served from
    pub static_dir: String,
    pub index_files: Vec<String>,
}
