use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    /// "ADVISOR", "WAREHOUSE", "ADMIN"
    pub role: String,
    pub is_admin: bool,
}

/// Payload of the access token. Decoded client-side (no signature check —
/// the backend verifies) to stamp "created by" fields on new documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// employee id
    pub sub: String,
    pub username: String,
    pub full_name: Option<String>,
    pub role: String,
    /// expiration timestamp
    pub exp: usize,
    /// issued at
    pub iat: usize,
}
