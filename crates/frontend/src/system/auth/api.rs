use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::shared::api_utils;

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };
    let response = api_utils::post::<_, LoginResponse>("/api/system/auth/login", &request).await;
    match response.data {
        Some(data) => Ok(data),
        None => Err(response
            .error
            .unwrap_or_else(|| "Đăng nhập thất bại".to_string())),
    }
}

/// Refresh access token using refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let request = RefreshRequest { refresh_token };
    let response = api_utils::post::<_, RefreshResponse>("/api/system/auth/refresh", &request).await;
    match response.data {
        Some(data) => Ok(data),
        None => Err(response
            .error
            .unwrap_or_else(|| "Phiên đăng nhập đã hết hạn".to_string())),
    }
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let request = RefreshRequest { refresh_token };
    let response = api_utils::post_no_content("/api/system/auth/logout", &request).await;
    match response.error {
        None => Ok(()),
        Some(e) => Err(e),
    }
}

/// Get current user info (uses the stored access token)
pub async fn get_current_user() -> Result<UserInfo, String> {
    let response = api_utils::get::<UserInfo>("/api/system/auth/me").await;
    match response.data {
        Some(data) => Ok(data),
        None => Err(response
            .error
            .unwrap_or_else(|| "Không lấy được thông tin người dùng".to_string())),
    }
}
