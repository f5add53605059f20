//! Access-token payload decoding.
//!
//! The backend verifies signatures; the client only reads the payload to
//! stamp "created by" fields on new documents without an extra round trip.

use contracts::system::auth::TokenClaims;

use super::storage;

/// Decode the claims of a JWT without verifying the signature.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    // base64url → base64 with padding
    let mut normalized = payload.replace('-', "+").replace('_', "/");
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }
    let window = web_sys::window()?;
    let decoded = window.atob(&normalized).ok()?;
    serde_json::from_str::<TokenClaims>(&decoded).ok()
}

/// Employee id of the logged-in user, from the stored access token.
pub fn employee_id_from_token() -> Option<String> {
    let token = storage::get_access_token()?;
    decode_claims(&token).map(|c| c.sub)
}

/// Display name of the logged-in user, from the stored access token.
pub fn user_name_from_token() -> Option<String> {
    let token = storage::get_access_token()?;
    decode_claims(&token).map(|c| c.full_name.unwrap_or(c.username))
}
