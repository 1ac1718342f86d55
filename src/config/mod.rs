// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, GalleryConfig, HttpConfig, LoggingConfig, PerformanceConfig, RoutesConfig, ServerConfig,
};

impl Config {
    /// Load from the default `config.toml` next to the binary
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration, layering `<config_path>.toml` (optional) and
    /// `SITE_*` environment variables over the in-code defaults
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SITE"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.site_name", "Al's Power Washing")?
            .set_default("gallery.dir", "public/gallery")?
            .set_default("gallery.public_base", "/gallery")?
            .set_default("http.enable_cors", true)?
            .set_default("http.cors_origin", "*")?
            .set_default("http.max_body_size", 65_536)? // contact form payloads are small
            .set_default("http.server_name", "powerwash-site/0.1")?
            .set_default("http.debug_errors", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("routes.static_dir", "static")?
            .set_default("routes.index_files", vec!["index.html", "index.htm"])?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
