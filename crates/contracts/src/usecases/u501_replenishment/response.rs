use serde::{Deserialize, Serialize};

/// Suggested purchase-request lines, one per low-stock part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplenishmentResponse {
    pub lines: Vec<SuggestedLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestedLine {
    pub part_id: String,
    pub part_sku: String,
    pub part_name: String,
    pub unit: String,
    pub stock_quantity: f64,
    pub reserved_quantity: f64,
    pub suggested_quantity: f64,
}
