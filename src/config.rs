//! # Configuration Management
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file. Every value has a default so the demo starts with no setup.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8080)
//! - `DATABASE_URL`: SQLite file backing the local key-value storage
//! - `RP_ID`: WebAuthn Relying Party ID (scopes the credential)
//! - `RP_ORIGIN`: Origin handed to the authenticator with every ceremony
//! - `RP_NAME`: Human-readable relying party name
//! - `DEMO_USER_ID`, `DEMO_USER_NAME`, `DEMO_USER_DISPLAY_NAME`: the fixed
//!   demo identity registered by the "Register" button
//! - `BLUETOOTH_SYSFS_PATH`: where the capability probe looks for adapters

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    pub host: String,

    /// Server port number
    pub port: u16,

    /// SQLite connection URL for the key-value storage
    /// The "mode=rwc" suffix creates the file if missing
    pub database_url: String,

    /// WebAuthn Relying Party ID
    /// For local development: "localhost"
    pub rp_id: String,

    /// Full origin the ceremonies claim to run from
    /// Must be consistent with `rp_id`
    pub rp_origin: String,

    /// Relying party name shown by the authenticator
    pub rp_name: String,

    /// Demo user handle (stored as its UTF-8 bytes)
    pub demo_user_id: String,

    pub demo_user_name: String,

    pub demo_user_display_name: String,

    /// Directory whose entries are the host's bluetooth adapters
    pub bluetooth_sysfs_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: "sqlite:passkey-demo.db?mode=rwc".to_string(),
            rp_id: "localhost".to_string(),
            rp_origin: "http://localhost:8080".to_string(),
            rp_name: "My WebAuthn App".to_string(),
            demo_user_id: "user-id-123".to_string(),
            demo_user_name: "demo".to_string(),
            demo_user_display_name: "Demo User".to_string(),
            bluetooth_sysfs_path: PathBuf::from("/sys/class/bluetooth"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing variables fall back to [`Config::default`]. A `PORT` that is
    /// not a number or an `RP_ORIGIN` that is not a URL is an error.
    pub fn from_env() -> Result<Self> {
        // dotenvy doesn't error if the file is missing
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse()
                .with_context(|| format!("PORT '{port}' is not a valid port number"))?,
            Err(_) => defaults.port,
        };

        let rp_origin = env::var("RP_ORIGIN").unwrap_or(defaults.rp_origin);
        Url::parse(&rp_origin)
            .with_context(|| format!("RP_ORIGIN '{rp_origin}' is not a valid URL"))?;

        Ok(Config {
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            rp_id: env::var("RP_ID").unwrap_or(defaults.rp_id),
            rp_origin,
            rp_name: env::var("RP_NAME").unwrap_or(defaults.rp_name),
            demo_user_id: env::var("DEMO_USER_ID").unwrap_or(defaults.demo_user_id),
            demo_user_name: env::var("DEMO_USER_NAME").unwrap_or(defaults.demo_user_name),
            demo_user_display_name: env::var("DEMO_USER_DISPLAY_NAME")
                .unwrap_or(defaults.demo_user_display_name),
            bluetooth_sysfs_path: env::var("BLUETOOTH_SYSFS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.bluetooth_sysfs_path),
        })
    }

    /// Socket address to bind the server to, e.g. "127.0.0.1:8080"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
