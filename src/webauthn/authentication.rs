//! # Authentication Ceremony
//!
//! Signs in with the one stored credential. Nothing is verified here: the
//! signed data is logged for inspection and discarded.

use crate::db::{credentials, KeyValueStore};
use crate::error::CeremonyError;
use crate::webauthn::encoding::{encode_base64, Challenge};
use crate::webauthn::platform::CredentialPlatform;
use crate::webauthn::requests::RequestBuilder;
use rand::RngCore;

/// Signed data from a successful sign-in, base64-encoded for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub credential_id: Vec<u8>,
    pub authenticator_data: String,
    pub client_data: String,
}

/// Run one authentication ceremony
///
/// Returns `NoRegisteredCredential` without touching the platform when
/// nothing has been registered yet.
pub async fn sign_in<R: RngCore + ?Sized>(
    requests: &RequestBuilder,
    platform: &dyn CredentialPlatform,
    store: &dyn KeyValueStore,
    rng: &mut R,
) -> Result<SignedIn, CeremonyError> {
    let credential_id = credentials::find_credential_id(store)
        .await?
        .ok_or(CeremonyError::NoRegisteredCredential)?;

    let request = requests.assertion_request(Challenge::generate(rng), credential_id);
    tracing::debug!(?request, "Requesting assertion");

    let assertion = platform.get(&request).await.map_err(|e| {
        tracing::warn!("Sign-in failed: {}", e);
        e
    })?;

    // Diagnostic only; no confidentiality is assumed for this output.
    let authenticator_data = encode_base64(assertion.response.authenticator_data.as_slice());
    let client_data = encode_base64(assertion.response.client_data_json.as_slice());
    tracing::info!(
        credential = %assertion.id,
        %authenticator_data,
        %client_data,
        "Sign-in successful"
    );

    Ok(SignedIn {
        credential_id: assertion.raw_id.into_inner(),
        authenticator_data,
        client_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::credentials::CREDENTIAL_ID_KEY;
    use crate::db::MemoryStore;
    use crate::error::{PlatformError, StoreError};
    use crate::webauthn::encoding::decode_base64;
    use crate::webauthn::registration::register;
    use crate::webauthn::testing::MockPlatform;
    use rand::rngs::mock::StepRng;

    fn builder() -> RequestBuilder {
        RequestBuilder::from_config(&Config::default())
    }

    #[tokio::test]
    async fn test_sign_in_without_registration_skips_platform() {
        let platform = MockPlatform::new();
        let store = MemoryStore::new();

        let result = sign_in(&builder(), &platform, &store, &mut StepRng::new(0, 1)).await;

        assert!(matches!(result, Err(CeremonyError::NoRegisteredCredential)));
        assert_eq!(platform.assertion_calls(), 0);
    }

    #[tokio::test]
    async fn test_sign_in_targets_registered_credential() {
        let platform = MockPlatform::new();
        let store = MemoryStore::new();
        let mut rng = StepRng::new(0, 1);

        let registered = register(&builder(), &platform, &store, &mut rng).await.unwrap();
        let signed_in = sign_in(&builder(), &platform, &store, &mut rng).await.unwrap();

        let requests = platform.assertion_requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].allow_credentials.len(), 1);
        assert_eq!(requests[0].allow_credentials[0].kind, "public-key");
        assert_eq!(
            requests[0].allow_credentials[0].id.as_slice(),
            registered.credential_id.as_slice()
        );
        assert_eq!(signed_in.credential_id, registered.credential_id);
    }

    #[tokio::test]
    async fn test_sign_in_challenge_is_independent_of_registration() {
        let platform = MockPlatform::new();
        let store = MemoryStore::new();
        let mut rng = StepRng::new(0, 1);

        register(&builder(), &platform, &store, &mut rng).await.unwrap();
        sign_in(&builder(), &platform, &store, &mut rng).await.unwrap();

        let registration_challenge = platform.creation_requests.lock().unwrap()[0].challenge.clone();
        let assertion = platform.assertion_requests.lock().unwrap()[0].clone();
        assert_eq!(assertion.challenge.as_slice().len(), 32);
        assert_ne!(assertion.challenge, registration_challenge);
        assert_eq!(assertion.timeout, 60_000);
    }

    #[tokio::test]
    async fn test_sign_in_reports_base64_signed_data() {
        let platform = MockPlatform::new();
        let store = MemoryStore::new();
        let mut rng = StepRng::new(0, 1);

        register(&builder(), &platform, &store, &mut rng).await.unwrap();
        let signed_in = sign_in(&builder(), &platform, &store, &mut rng).await.unwrap();

        assert_eq!(decode_base64(&signed_in.authenticator_data).unwrap(), vec![0x49; 37]);
        let client_data = decode_base64(&signed_in.client_data).unwrap();
        assert!(String::from_utf8(client_data).unwrap().contains("webauthn.get"));
    }

    #[tokio::test]
    async fn test_platform_failure_is_terminal() {
        let platform = MockPlatform::new();
        let store = MemoryStore::new();
        let mut rng = StepRng::new(0, 1);

        register(&builder(), &platform, &store, &mut rng).await.unwrap();
        platform.fail_get(true);

        let result = sign_in(&builder(), &platform, &store, &mut rng).await;
        assert!(matches!(
            result,
            Err(CeremonyError::Platform(PlatformError::Ceremony(_)))
        ));
        assert_eq!(platform.assertion_calls(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_stored_identifier_fails_before_platform() {
        let platform = MockPlatform::new();
        let store = MemoryStore::new();
        store.set(CREDENTIAL_ID_KEY, "not base64!").await.unwrap();

        let result = sign_in(&builder(), &platform, &store, &mut StepRng::new(0, 1)).await;

        assert!(matches!(
            result,
            Err(CeremonyError::Store(StoreError::Corrupt { .. }))
        ));
        assert_eq!(platform.assertion_calls(), 0);
    }
}
