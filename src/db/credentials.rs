//! # Credential Identifier Storage
//!
//! At most one credential identifier is tracked. It lives base64-encoded
//! under a single fixed key; registering again replaces it.

use crate::db::KeyValueStore;
use crate::error::StoreError;
use crate::webauthn::encoding::{decode_base64, encode_base64};

/// Storage key for the registered credential identifier
pub const CREDENTIAL_ID_KEY: &str = "webauthnCredentialId";

/// Persist `credential_id`, overwriting whatever was stored before
pub async fn save_credential_id(
    store: &dyn KeyValueStore,
    credential_id: &[u8],
) -> Result<String, StoreError> {
    let encoded = encode_base64(credential_id);
    store.set(CREDENTIAL_ID_KEY, &encoded).await?;

    Ok(encoded)
}

/// Load the stored credential identifier
///
/// ## Returns
/// - `None` if nothing has been registered yet (an empty value counts as nothing)
/// - The decoded bytes otherwise
pub async fn find_credential_id(store: &dyn KeyValueStore) -> Result<Option<Vec<u8>>, StoreError> {
    let Some(encoded) = store.get(CREDENTIAL_ID_KEY).await? else {
        return Ok(None);
    };

    if encoded.is_empty() {
        return Ok(None);
    }

    let credential_id = decode_base64(&encoded).map_err(|source| StoreError::Corrupt {
        key: CREDENTIAL_ID_KEY.to_string(),
        source,
    })?;

    Ok(Some(credential_id))
}
