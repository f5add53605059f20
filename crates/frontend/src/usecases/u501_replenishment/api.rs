//! API client for UseCase u501

use contracts::domain::a006_purchase_request::CreatePurchaseRequest;
use contracts::usecases::u501_replenishment::{ReplenishmentRequest, ReplenishmentResponse};

use crate::shared::api_utils;

/// Ask the backend for suggested replenishment lines.
pub async fn suggest(request: ReplenishmentRequest) -> Result<ReplenishmentResponse, String> {
    let response =
        api_utils::post::<_, ReplenishmentResponse>("/api/u501/replenishment/suggest", &request)
            .await;
    match response.data {
        Some(data) => Ok(data),
        None => Err(response
            .error
            .unwrap_or_else(|| api_utils::GENERIC_ERROR.to_string())),
    }
}

/// Turn the (possibly edited) suggestion into a purchase request.
pub async fn create_purchase_request(request: CreatePurchaseRequest) -> Result<(), String> {
    let response = api_utils::post_no_content("/api/purchase-requests/create", &request).await;
    match response.error {
        None => Ok(()),
        Some(e) => Err(e),
    }
}
