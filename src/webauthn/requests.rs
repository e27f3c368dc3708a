//! Builds ceremony requests from the fixed demo identity.

use crate::config::Config;
use crate::webauthn::encoding::Challenge;
use crate::webauthn::types::*;

/// Everything about a ceremony request that does not change between clicks
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub rp: RelyingParty,
    pub user: UserEntity,
    pub algorithm: i64,
    pub user_verification: UserVerification,
    pub timeout_ms: u32,
}

impl RequestBuilder {
    pub fn from_config(config: &Config) -> Self {
        Self {
            rp: RelyingParty {
                id: config.rp_id.clone(),
                name: config.rp_name.clone(),
            },
            user: UserEntity {
                id: config.demo_user_id.as_bytes().into(),
                name: config.demo_user_name.clone(),
                display_name: config.demo_user_display_name.clone(),
            },
            algorithm: COSE_ALG_ES256,
            user_verification: UserVerification::Preferred,
            timeout_ms: CEREMONY_TIMEOUT_MS,
        }
    }

    /// Credential-creation request for one registration attempt
    pub fn creation_request(&self, challenge: Challenge) -> CreationRequest {
        CreationRequest {
            challenge: challenge.into(),
            rp: self.rp.clone(),
            user: self.user.clone(),
            pub_key_cred_params: vec![CredentialParameters::public_key(self.algorithm)],
            authenticator_selection: AuthenticatorSelection {
                require_resident_key: false,
                user_verification: self.user_verification,
            },
            timeout: self.timeout_ms,
        }
    }

    /// Credential-assertion request restricted to exactly one credential
    pub fn assertion_request(&self, challenge: Challenge, credential_id: Vec<u8>) -> AssertionRequest {
        AssertionRequest {
            challenge: challenge.into(),
            rp_id: self.rp.id.clone(),
            allow_credentials: vec![CredentialDescriptor::public_key(credential_id)],
            user_verification: self.user_verification,
            timeout: self.timeout_ms,
        }
    }
}
