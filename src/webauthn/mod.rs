//! # WebAuthn Module
//!
//! The two ceremonies and everything they are built from.
//!
//! ## Submodules
//! - `types`: W3C-shaped request/response types
//! - `encoding`: base64 helpers and challenge generation
//! - `requests`: builds requests from the fixed demo identity
//! - `platform`: the credential-platform seam and the software passkey
//! - `capability`: the bluetooth availability probe
//! - `registration`: creating a credential and remembering its id
//! - `authentication`: signing in with the remembered credential
//!
//! ## Ceremony Flow
//!
//! ### Registration
//! 1. "Register" pressed → `registration::register()`
//! 2. Fresh challenge, creation request for the demo user
//! 3. Platform creates the credential
//! 4. Credential id stored base64-encoded, replacing any previous one
//!
//! ### Authentication
//! 1. "Sign In" pressed → `authentication::sign_in()`
//! 2. Stored credential id loaded; stop if there is none
//! 3. Fresh challenge, assertion request allowing only that credential
//! 4. Platform signs; authenticator data and client data are logged
//!
//! Both ceremonies are functions of (request builder, platform, storage,
//! random source) and share no state apart from the stored id.

pub mod authentication;
pub mod capability;
pub mod encoding;
pub mod platform;
pub mod registration;
pub mod requests;
#[cfg(test)]
pub mod testing;
pub mod types;
