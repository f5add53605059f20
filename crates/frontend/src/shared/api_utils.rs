//! API gateway for frontend-backend communication.
//!
//! Every HTTP call in the app goes through `get`/`post` below. Responses are
//! folded into an [`ApiResponse`] envelope: the caller always receives
//! `{ data, error }` and never has to catch — a failed call is just an
//! envelope with `error` set. One attempt per call, no retry, no timeout;
//! the backend remains the sole source of truth and callers re-fetch after
//! every mutation.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

/// Fallback message when the backend gives nothing usable.
pub const GENERIC_ERROR: &str = "Có lỗi xảy ra, vui lòng thử lại sau";

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/tickets/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Uniform result envelope: exactly one of `data`/`error` is set.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Map an HTTP status to the error message for the envelope.
///
/// 2xx → `None`; otherwise the server-provided message when present, then
/// the status text, then "HTTP <code>".
pub fn error_for_status(
    status: u16,
    status_text: &str,
    server_message: Option<String>,
) -> Option<String> {
    if (200..300).contains(&status) {
        return None;
    }
    if let Some(msg) = server_message.filter(|m| !m.trim().is_empty()) {
        return Some(msg);
    }
    if !status_text.trim().is_empty() {
        Some(status_text.to_string())
    } else {
        Some(format!("HTTP {}", status))
    }
}

fn bearer() -> Option<String> {
    storage::get_access_token().map(|t| format!("Bearer {}", t))
}

/// Pull an explicit `message` field out of an error body, if any.
fn message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
}

pub async fn get<T: DeserializeOwned>(path: &str) -> ApiResponse<T> {
    let mut builder = Request::get(&api_url(path));
    if let Some(auth) = bearer() {
        builder = builder.header("Authorization", &auth);
    }
    let response = match builder.send().await {
        Ok(r) => r,
        Err(_) => return ApiResponse::err(GENERIC_ERROR),
    };

    let status = response.status();
    if !(200..300).contains(&status) {
        let server_message = response.text().await.ok().as_deref().and_then(message_from_body);
        let err = error_for_status(status, &response.status_text(), server_message)
            .unwrap_or_else(|| GENERIC_ERROR.to_string());
        return ApiResponse::err(err);
    }

    match response.json::<T>().await {
        Ok(data) => ApiResponse::ok(data),
        Err(_) => ApiResponse::err(GENERIC_ERROR),
    }
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResponse<T> {
    let mut builder = Request::post(&api_url(path));
    if let Some(auth) = bearer() {
        builder = builder.header("Authorization", &auth);
    }
    let request = match builder.json(body) {
        Ok(r) => r,
        Err(_) => return ApiResponse::err(GENERIC_ERROR),
    };
    let response = match request.send().await {
        Ok(r) => r,
        Err(_) => return ApiResponse::err(GENERIC_ERROR),
    };

    let status = response.status();
    if !(200..300).contains(&status) {
        let server_message = response.text().await.ok().as_deref().and_then(message_from_body);
        let err = error_for_status(status, &response.status_text(), server_message)
            .unwrap_or_else(|| GENERIC_ERROR.to_string());
        return ApiResponse::err(err);
    }

    match response.json::<T>().await {
        Ok(data) => ApiResponse::ok(data),
        Err(_) => ApiResponse::err(GENERIC_ERROR),
    }
}

/// POST without a meaningful response body (mutation endpoints that answer
/// with an empty 200/204).
pub async fn post_no_content<B: Serialize>(path: &str, body: &B) -> ApiResponse<()> {
    let mut builder = Request::post(&api_url(path));
    if let Some(auth) = bearer() {
        builder = builder.header("Authorization", &auth);
    }
    let request = match builder.json(body) {
        Ok(r) => r,
        Err(_) => return ApiResponse::err(GENERIC_ERROR),
    };
    let response = match request.send().await {
        Ok(r) => r,
        Err(_) => return ApiResponse::err(GENERIC_ERROR),
    };

    let status = response.status();
    if !(200..300).contains(&status) {
        let server_message = response.text().await.ok().as_deref().and_then(message_from_body);
        let err = error_for_status(status, &response.status_text(), server_message)
            .unwrap_or_else(|| GENERIC_ERROR.to_string());
        return ApiResponse::err(err);
    }

    ApiResponse::ok(())
}

/// Fetch PDF bytes. The backend is inconsistent here: some deployments
/// answer with a raw binary body, others with `{"data": "<base64>"}` —
/// both must be tolerated.
pub async fn get_pdf(path: &str) -> Result<Vec<u8>, String> {
    let mut builder = Request::get(&api_url(path));
    if let Some(auth) = bearer() {
        builder = builder.header("Authorization", &auth);
    }
    let response = builder
        .send()
        .await
        .map_err(|_| GENERIC_ERROR.to_string())?;

    if !(200..300).contains(&response.status()) {
        return Err(error_for_status(response.status(), &response.status_text(), None)
            .unwrap_or_else(|| GENERIC_ERROR.to_string()));
    }

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap_or_default();

    if content_type.contains("application/json") {
        // Base64-in-JSON path
        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|_| GENERIC_ERROR.to_string())?;
        let encoded = value
            .get("data")
            .and_then(|d| d.as_str())
            .ok_or_else(|| GENERIC_ERROR.to_string())?;
        let window = web_sys::window().ok_or_else(|| GENERIC_ERROR.to_string())?;
        let decoded = window
            .atob(encoded)
            .map_err(|_| GENERIC_ERROR.to_string())?;
        Ok(decoded.chars().map(|c| c as u8).collect())
    } else {
        // Raw binary path
        response
            .binary()
            .await
            .map_err(|_| GENERIC_ERROR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_for_status_ok_range() {
        assert_eq!(error_for_status(200, "OK", None), None);
        assert_eq!(error_for_status(204, "No Content", None), None);
    }

    #[test]
    fn test_error_for_status_uses_status_text() {
        assert_eq!(
            error_for_status(500, "Internal Server Error", None),
            Some("Internal Server Error".to_string())
        );
    }

    #[test]
    fn test_error_for_status_prefers_server_message() {
        assert_eq!(
            error_for_status(409, "Conflict", Some("Phụ tùng không đủ tồn kho".to_string())),
            Some("Phụ tùng không đủ tồn kho".to_string())
        );
    }

    #[test]
    fn test_error_for_status_falls_back_to_code() {
        assert_eq!(error_for_status(502, "", None), Some("HTTP 502".to_string()));
    }

    #[test]
    fn test_envelope_shape() {
        let ok = ApiResponse::ok(1);
        assert_eq!(ok.data, Some(1));
        assert!(ok.error.is_none());

        let err: ApiResponse<i32> = ApiResponse::err("Not Found");
        assert!(err.data.is_none());
        assert_eq!(err.error.as_deref(), Some("Not Found"));
    }

    #[test]
    fn test_message_from_body() {
        assert_eq!(
            message_from_body(r#"{"message":"Không hợp lệ"}"#),
            Some("Không hợp lệ".to_string())
        );
        assert_eq!(
            message_from_body(r#"{"error":"bad"}"#),
            Some("bad".to_string())
        );
        assert_eq!(message_from_body("not json"), None);
    }
}
