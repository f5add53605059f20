use serde::{Deserialize, Serialize};

/// Catalog record for a spare part.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub category: Option<String>,
    /// Market/origin of the part ("OEM", "Chính hãng", …).
    pub market: Option<String>,
    pub supplier: Option<String>,

    pub purchase_price: i64,
    pub selling_price: i64,
    pub unit: String,

    // Inventory counters, read-only on the client.
    pub stock_quantity: f64,
    pub reserved_quantity: f64,

    /// Fits every vehicle model; otherwise restricted to brand/model below.
    pub universal: bool,
    pub vehicle_brand: Option<String>,
    pub vehicle_model: Option<String>,

    /// Catalog fields are locked during warehouse review for special parts.
    pub special_part: bool,
}

impl Part {
    /// Quantity actually available for a new quotation line.
    pub fn available_quantity(&self) -> f64 {
        (self.stock_quantity - self.reserved_quantity).max(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartListRequest {
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
    pub limit: usize,
    pub offset: usize,
    pub sort_by: String,
    pub sort_desc: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertPartRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub sku: String,
    pub name: String,
    pub category: Option<String>,
    pub market: Option<String>,
    pub supplier: Option<String>,
    pub purchase_price: i64,
    pub selling_price: i64,
    pub unit: String,
    pub universal: bool,
    pub vehicle_brand: Option<String>,
    pub vehicle_model: Option<String>,
    pub special_part: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_quantity_clamped() {
        let mut part = Part {
            id: "p1".to_string(),
            sku: "SKU-1".to_string(),
            name: "Lọc dầu".to_string(),
            category: None,
            market: None,
            supplier: None,
            purchase_price: 80_000,
            selling_price: 120_000,
            unit: "cái".to_string(),
            stock_quantity: 5.0,
            reserved_quantity: 2.0,
            universal: true,
            vehicle_brand: None,
            vehicle_model: None,
            special_part: false,
        };
        assert_eq!(part.available_quantity(), 3.0);

        part.reserved_quantity = 9.0;
        assert_eq!(part.available_quantity(), 0.0);
    }
}
