use serde::{Deserialize, Serialize};

/// Internal request to buy replenishment stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseRequest {
    pub id: String,
    pub code: String,
    pub reason: String,
    pub status: String,
    pub lines: Vec<PurchaseRequestLine>,
    pub created_by: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseRequestLine {
    pub part_id: String,
    pub part_sku: String,
    pub part_name: String,
    pub unit: String,
    /// Quantity proposed by the replenishment suggestion, if any.
    pub suggested_quantity: Option<f64>,
    pub requested_quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequestListRequest {
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePurchaseRequest {
    pub reason: String,
    pub lines: Vec<CreatePurchaseRequestLine>,
    pub created_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePurchaseRequestLine {
    pub part_id: String,
    pub requested_quantity: f64,
}
