//! # Application State
//!
//! Everything a handler needs, behind trait objects so tests can swap in
//! in-memory storage, a scripted platform and a fixed capability probe.
//! Cloning is cheap: every field is an `Arc`.

use crate::config::Config;
use crate::db::{KeyValueStore, SqliteStore};
use crate::webauthn::capability::{BluetoothProbe, CapabilityProbe};
use crate::webauthn::platform::{CredentialPlatform, SoftPasskeyPlatform};
use crate::webauthn::requests::RequestBuilder;
use anyhow::Result;
use std::sync::Arc;
use url::Url;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Local key-value storage holding the credential identifier
    pub store: Arc<dyn KeyValueStore>,

    /// Credential creation/assertion
    pub platform: Arc<dyn CredentialPlatform>,

    /// Advisory capability check, run when the page loads
    pub probe: Arc<dyn CapabilityProbe>,

    /// Fixed parts of every ceremony request
    pub requests: Arc<RequestBuilder>,
}

impl AppState {
    /// Initialize application state from configuration
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated, or
    /// the relying party origin is not a URL.
    pub async fn new(config: &Config) -> Result<Self> {
        let store = SqliteStore::connect(&config.database_url).await?;
        let origin = Url::parse(&config.rp_origin)?;

        Ok(AppState {
            store: Arc::new(store),
            platform: Arc::new(SoftPasskeyPlatform::new(origin)),
            probe: Arc::new(BluetoothProbe::new(config.bluetooth_sysfs_path.clone())),
            requests: Arc::new(RequestBuilder::from_config(config)),
        })
    }
}
