//! # Platform Credential APIs
//!
//! [`CredentialPlatform`] is the seam between the ceremonies and whatever
//! actually holds the private keys. Production uses a software passkey
//! (`webauthn-authenticator-rs`); tests substitute a scripted double.
//!
//! The software passkey speaks `webauthn-rs-proto` types. Requests and
//! responses cross over through their shared W3C JSON shape, the same way a
//! browser hands `navigator.credentials` output to a server.

use crate::error::PlatformError;
use crate::webauthn::types::{Assertion, AssertionRequest, CreatedCredential, CreationRequest};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::{Arc, Mutex};
use url::Url;
use webauthn_authenticator_rs::softpasskey::SoftPasskey;
use webauthn_authenticator_rs::AuthenticatorBackend;
use webauthn_rs_proto::{PublicKeyCredentialCreationOptions, PublicKeyCredentialRequestOptions};

/// Credential creation and assertion, as offered by the platform
///
/// Both calls may involve user interaction and may take up to the request's
/// timeout. Overlapping calls are the platform's problem to serialize.
#[async_trait]
pub trait CredentialPlatform: Send + Sync {
    async fn create(&self, request: &CreationRequest) -> Result<CreatedCredential, PlatformError>;

    async fn get(&self, request: &AssertionRequest) -> Result<Assertion, PlatformError>;
}

/// In-process software passkey
///
/// Keys live in memory only, so credentials registered before a restart can
/// no longer sign in afterwards.
pub struct SoftPasskeyPlatform {
    origin: Url,
    authenticator: Arc<Mutex<SoftPasskey>>,
}

impl SoftPasskeyPlatform {
    pub fn new(origin: Url) -> Self {
        Self {
            origin,
            // Report user verification as performed; there is no user to verify.
            authenticator: Arc::new(Mutex::new(SoftPasskey::new(true))),
        }
    }

    /// Run one authenticator call on the blocking pool
    async fn run<T, F>(&self, call: F) -> Result<T, PlatformError>
    where
        T: Send + 'static,
        F: FnOnce(&mut SoftPasskey, Url) -> Result<T, PlatformError> + Send + 'static,
    {
        let authenticator = Arc::clone(&self.authenticator);
        let origin = self.origin.clone();

        tokio::task::spawn_blocking(move || {
            let mut authenticator = authenticator
                .lock()
                .map_err(|_| PlatformError::Unavailable("authenticator state poisoned".to_string()))?;
            call(&mut authenticator, origin)
        })
        .await?
    }
}

/// Re-type a value through its JSON representation
fn translate<S: Serialize, D: DeserializeOwned>(value: &S) -> Result<D, PlatformError> {
    Ok(serde_json::from_value(serde_json::to_value(value)?)?)
}

#[async_trait]
impl CredentialPlatform for SoftPasskeyPlatform {
    async fn create(&self, request: &CreationRequest) -> Result<CreatedCredential, PlatformError> {
        let options: PublicKeyCredentialCreationOptions = translate(request)?;
        let timeout_ms = request.timeout;

        let credential = self
            .run(move |authenticator, origin| {
                authenticator
                    .perform_register(origin, options, timeout_ms)
                    .map_err(|e| PlatformError::Ceremony(format!("{e:?}")))
            })
            .await?;

        translate(&credential)
    }

    async fn get(&self, request: &AssertionRequest) -> Result<Assertion, PlatformError> {
        let options: PublicKeyCredentialRequestOptions = translate(request)?;
        let timeout_ms = request.timeout;

        let assertion = self
            .run(move |authenticator, origin| {
                authenticator
                    .perform_auth(origin, options, timeout_ms)
                    .map_err(|e| PlatformError::Ceremony(format!("{e:?}")))
            })
            .await?;

        translate(&assertion)
    }
}
