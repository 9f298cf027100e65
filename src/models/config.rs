use serde::Deserialize;

/// Configuration options of the hall booking server.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Path of the SQLite database file holding the bookings.
    pub database_url: String,
    /// Glob of the Tera templates.
    pub templates_dir: String,
    /// Key used to sign flash message cookies; a random key is used when empty.
    #[serde(default)]
    pub secret: String,
}
