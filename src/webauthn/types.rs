//! # Ceremony Types
//!
//! These structs mirror the JSON dictionaries of the Web Authentication API
//! (`PublicKeyCredentialCreationOptions`, `PublicKeyCredentialRequestOptions`
//! and the credentials they produce). Keeping the W3C field names through
//! `serde(rename_all = "camelCase")` lets any authenticator backend that speaks
//! the same JSON consume them unchanged.
//!
//! ## Ceremony Flow
//! - Registration: `CreationRequest` in, `CreatedCredential` out
//! - Authentication: `AssertionRequest` in, `Assertion` out

use crate::webauthn::encoding::WireBytes;
use serde::{Deserialize, Serialize};

/// The only credential type WebAuthn defines
pub const PUBLIC_KEY_TYPE: &str = "public-key";

/// COSE algorithm identifier for ECDSA P-256 with SHA-256 (ES256)
pub const COSE_ALG_ES256: i64 = -7;

/// Default ceremony timeout handed to the platform (60 seconds)
pub const CEREMONY_TIMEOUT_MS: u32 = 60_000;

/// Relying party descriptor
///
/// `id` scopes the credential; `name` is what the authenticator shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelyingParty {
    pub id: String,
    pub name: String,
}

/// User account descriptor
///
/// The demo uses one fixed identity; `id` is the opaque user handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    pub id: WireBytes,
    pub name: String,
    pub display_name: String,
}

/// One acceptable public-key algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialParameters {
    #[serde(rename = "type")]
    pub kind: String,
    pub alg: i64,
}

impl CredentialParameters {
    pub fn public_key(alg: i64) -> Self {
        Self {
            kind: PUBLIC_KEY_TYPE.to_string(),
            alg,
        }
    }
}

/// How strongly the authenticator should verify the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserVerification {
    Required,
    Preferred,
    Discouraged,
}

/// Authenticator selection criteria for registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorSelection {
    pub require_resident_key: bool,
    pub user_verification: UserVerification,
}

/// Credential-creation request (registration ceremony input)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationRequest {
    pub challenge: WireBytes,
    pub rp: RelyingParty,
    pub user: UserEntity,
    pub pub_key_cred_params: Vec<CredentialParameters>,
    pub authenticator_selection: AuthenticatorSelection,
    pub timeout: u32,
}

/// Reference to one credential the assertion may use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: WireBytes,
}

impl CredentialDescriptor {
    pub fn public_key(id: Vec<u8>) -> Self {
        Self {
            kind: PUBLIC_KEY_TYPE.to_string(),
            id: WireBytes(id),
        }
    }
}

/// Credential-assertion request (authentication ceremony input)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionRequest {
    pub challenge: WireBytes,
    pub rp_id: String,
    pub allow_credentials: Vec<CredentialDescriptor>,
    pub user_verification: UserVerification,
    pub timeout: u32,
}

/// Credential returned by a successful registration
///
/// Only the identifier matters here; the attestation payload is ignored
/// because nothing verifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCredential {
    pub id: String,
    pub raw_id: WireBytes,
}

/// Signed data carried by an assertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionResponse {
    pub authenticator_data: WireBytes,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: WireBytes,
}

/// Assertion returned by a successful sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assertion {
    pub id: String,
    pub raw_id: WireBytes,
    pub response: AssertionResponse,
}
