//! Deterministic stand-ins for the platform APIs.

use crate::error::PlatformError;
use crate::webauthn::encoding::WireBytes;
use crate::webauthn::platform::CredentialPlatform;
use crate::webauthn::types::*;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Mutex;

/// Platform double that records every request it receives
///
/// Each successful creation hands out a new 16-byte id filled with an
/// incrementing counter, so consecutive registrations are distinguishable.
#[derive(Default)]
pub struct MockPlatform {
    fail_create: AtomicBool,
    fail_get: AtomicBool,
    counter: AtomicU8,
    pub creation_requests: Mutex<Vec<CreationRequest>>,
    pub assertion_requests: Mutex<Vec<AssertionRequest>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn fail_get(&self, fail: bool) {
        self.fail_get.store(fail, Ordering::SeqCst);
    }

    pub fn assertion_calls(&self) -> usize {
        self.assertion_requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CredentialPlatform for MockPlatform {
    async fn create(&self, request: &CreationRequest) -> Result<CreatedCredential, PlatformError> {
        self.creation_requests.lock().unwrap().push(request.clone());

        if self.fail_create.load(Ordering::SeqCst) {
            return Err(PlatformError::Ceremony("NotAllowedError: user cancelled".to_string()));
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let raw_id = vec![n; 16];
        Ok(CreatedCredential {
            id: format!("{:?}", WireBytes(raw_id.clone())),
            raw_id: WireBytes(raw_id),
        })
    }

    async fn get(&self, request: &AssertionRequest) -> Result<Assertion, PlatformError> {
        self.assertion_requests.lock().unwrap().push(request.clone());

        if self.fail_get.load(Ordering::SeqCst) {
            return Err(PlatformError::Ceremony("NotAllowedError: timed out".to_string()));
        }

        let raw_id = request
            .allow_credentials
            .first()
            .map(|descriptor| descriptor.id.clone())
            .unwrap_or_default();
        let client_data = format!(
            r#"{{"type":"webauthn.get","challenge":"{:?}"}}"#,
            request.challenge
        );

        Ok(Assertion {
            id: format!("{:?}", raw_id),
            raw_id,
            response: AssertionResponse {
                authenticator_data: WireBytes(vec![0x49; 37]),
                client_data_json: WireBytes(client_data.into_bytes()),
            },
        })
    }
}
