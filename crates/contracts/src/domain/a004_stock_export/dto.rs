use serde::{Deserialize, Serialize};

/// Stock export ticket: parts leaving the warehouse against a quotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockExport {
    pub id: String,
    pub code: String,
    /// Quotation this export serves.
    pub quotation_id: Option<String>,
    pub ticket_code: Option<String>,
    /// Overall status derived by the server from its lines.
    pub status: String,
    pub created_by: Option<String>,
    pub created_at: String,
}

/// Line detail, fetched lazily when a row is expanded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockExportLine {
    pub id: String,
    pub part_id: String,
    pub part_sku: String,
    pub part_name: String,
    pub unit: String,
    pub requested_quantity: f64,
    pub exported_quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockExportListRequest {
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub limit: usize,
    pub offset: usize,
}
