use serde::{Deserialize, Serialize};

/// Stock receipt ticket: parts entering the warehouse against a purchase
/// request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockReceipt {
    pub id: String,
    pub code: String,
    pub purchase_request_code: Option<String>,
    pub supplier: Option<String>,
    pub status: String,
    pub created_by: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockReceiptLine {
    pub id: String,
    pub part_id: String,
    pub part_sku: String,
    pub part_name: String,
    pub unit: String,
    pub requested_quantity: f64,
    pub received_quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockReceiptListRequest {
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub limit: usize,
    pub offset: usize,
}
