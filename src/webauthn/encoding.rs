//! # Binary Encoding Helpers
//!
//! WebAuthn hands out raw bytes (credential ids, authenticator data, client
//! data). This module owns the two text forms they travel in:
//!
//! - **Storage form**: standard base64 with padding. This is what the local
//!   key-value store holds for the credential identifier.
//! - **Wire form**: base64url without padding, used inside the JSON shape of
//!   creation/assertion requests and responses. Decoding accepts either
//!   padding form because authenticators disagree on it.
//!
//! It also owns challenge generation, since a challenge is nothing more than
//! fresh random bytes.

use base64::{
    alphabet,
    engine::{general_purpose::STANDARD, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    DecodeError, Engine,
};
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of random bytes in every ceremony challenge
pub const CHALLENGE_LENGTH: usize = 32;

/// base64url engine that writes no padding and reads either form
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes into the storage form (standard base64, padded)
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode the storage form back into bytes
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode(encoded.as_bytes())
}

/// A fresh ceremony challenge
///
/// Generated per ceremony invocation and dropped with the request; it is
/// never persisted and never reused.
#[derive(Clone, PartialEq, Eq)]
pub struct Challenge([u8; CHALLENGE_LENGTH]);

impl Challenge {
    /// Fill a new challenge from the given random source
    ///
    /// Production code passes `OsRng`; tests pass a deterministic mock.
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; CHALLENGE_LENGTH];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Challenge({})", URL_SAFE_LENIENT.encode(self.0))
    }
}

impl From<Challenge> for WireBytes {
    fn from(challenge: Challenge) -> Self {
        WireBytes(challenge.0.to_vec())
    }
}

/// Raw bytes that serialize as base64url inside WebAuthn JSON
#[derive(Clone, PartialEq, Eq, Default)]
pub struct WireBytes(pub Vec<u8>);

impl WireBytes {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for WireBytes {
    fn from(bytes: Vec<u8>) -> Self {
        WireBytes(bytes)
    }
}

impl From<&[u8]> for WireBytes {
    fn from(bytes: &[u8]) -> Self {
        WireBytes(bytes.to_vec())
    }
}

impl fmt::Debug for WireBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", URL_SAFE_LENIENT.encode(&self.0))
    }
}

impl Serialize for WireBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&URL_SAFE_LENIENT.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for WireBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        URL_SAFE_LENIENT
            .decode(encoded.as_bytes())
            .map(WireBytes)
            .map_err(serde::de::Error::custom)
    }
}
