//! # Registration Ceremony
//!
//! Creates a credential for the fixed demo user and remembers its identifier.
//!
//! ## Flow
//! 1. Generate a fresh 32-byte challenge
//! 2. Build the credential-creation request
//! 3. Ask the platform to create the credential (may prompt the user)
//! 4. Store the base64 credential identifier, replacing any previous one
//!
//! A failure at step 3 leaves the stored identifier untouched.

use crate::db::{credentials, KeyValueStore};
use crate::error::CeremonyError;
use crate::webauthn::encoding::Challenge;
use crate::webauthn::platform::CredentialPlatform;
use crate::webauthn::requests::RequestBuilder;
use rand::RngCore;

/// Outcome of a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCredential {
    pub credential_id: Vec<u8>,
    /// The identifier as written to storage
    pub stored_as: String,
}

/// Run one registration ceremony
///
/// ## Errors
/// - `Platform`: the authenticator refused, timed out or is unsupported
/// - `Store`: the identifier could not be written
pub async fn register<R: RngCore + ?Sized>(
    requests: &RequestBuilder,
    platform: &dyn CredentialPlatform,
    store: &dyn KeyValueStore,
    rng: &mut R,
) -> Result<RegisteredCredential, CeremonyError> {
    let request = requests.creation_request(Challenge::generate(rng));
    tracing::debug!(?request, "Requesting credential creation");

    let credential = platform.create(&request).await.map_err(|e| {
        tracing::warn!("Credential creation failed: {}", e);
        e
    })?;

    tracing::info!("Registration successful: credential {}", credential.id);

    let credential_id = credential.raw_id.into_inner();
    let stored_as = credentials::save_credential_id(store, &credential_id).await?;

    Ok(RegisteredCredential {
        credential_id,
        stored_as,
    })
}
