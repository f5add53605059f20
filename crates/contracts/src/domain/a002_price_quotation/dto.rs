use serde::{Deserialize, Serialize};

use crate::enums::{ItemKind, QuotationStatus, ReviewStatus};

/// One line of a quotation.
///
/// Money is whole VND (`i64`); quantities may be fractional (liters of oil,
/// hours of labor). `line_total` is recomputed client-side on every edit and
/// also sent back on save so the backend can cross-check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuotationItem {
    pub id: String,
    pub kind: String,

    /// Catalog reference, PART lines only.
    pub part_id: Option<String>,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_price: i64,
    pub line_total: i64,

    // Warehouse review, meaningful for PART lines only.
    pub review_status: Option<String>,
    pub review_note: Option<String>,
}

impl QuotationItem {
    pub fn kind_norm(&self) -> Option<ItemKind> {
        ItemKind::normalize(&self.kind)
    }

    pub fn review_norm(&self) -> Option<ReviewStatus> {
        self.review_status.as_deref().and_then(ReviewStatus::normalize)
    }

    /// Recompute `line_total` after a quantity or price edit.
    pub fn recompute_total(&mut self) {
        self.line_total = line_total(self.quantity, self.unit_price);
    }
}

/// quantity × unit price, rounded to whole VND.
pub fn line_total(quantity: f64, unit_price: i64) -> i64 {
    (quantity * unit_price as f64).round() as i64
}

/// Price quotation attached to a service ticket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceQuotation {
    pub id: String,
    pub ticket_id: String,
    pub status: String,
    pub items: Vec<QuotationItem>,
    pub discount_percent: f64,
    /// Server-side estimate; the UI recomputes totals locally for display.
    pub estimate_amount: Option<i64>,
    pub created_by: Option<String>,
    pub created_at: String,
}

impl PriceQuotation {
    pub fn status_norm(&self) -> Option<QuotationStatus> {
        QuotationStatus::normalize(&self.status)
    }

    pub fn totals(&self) -> QuotationTotals {
        QuotationTotals::compute(&self.items, self.discount_percent)
    }
}

/// Display-side totals. The server remains authoritative; these only feed
/// the on-screen summary and the printed amount-in-words line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotationTotals {
    pub parts_total: i64,
    pub services_total: i64,
    pub grand_total: i64,
    pub discount_amount: i64,
    pub final_amount: i64,
}

impl QuotationTotals {
    pub fn compute(items: &[QuotationItem], discount_percent: f64) -> Self {
        let mut parts_total = 0i64;
        let mut services_total = 0i64;
        for item in items {
            let total = line_total(item.quantity, item.unit_price);
            match item.kind_norm() {
                Some(ItemKind::Service) => services_total += total,
                // Unknown kinds count as parts rather than silently vanish.
                _ => parts_total += total,
            }
        }
        let grand_total = parts_total + services_total;
        let discount_amount = (grand_total as f64 * discount_percent / 100.0).round() as i64;
        let final_amount = (grand_total - discount_amount).max(0);
        Self {
            parts_total,
            services_total,
            grand_total,
            discount_amount,
            final_amount,
        }
    }
}

/// Body for draft-save / item-update calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveQuotationRequest {
    pub items: Vec<UpsertItemRequest>,
    pub discount_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertItemRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub kind: String,
    #[serde(default)]
    pub part_id: Option<String>,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_price: i64,
    pub line_total: i64,
}

/// Warehouse verdict on a single PART line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewLineRequest {
    pub item_id: String,
    pub approved: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: &str, quantity: f64, unit_price: i64) -> QuotationItem {
        QuotationItem {
            id: "i1".to_string(),
            kind: kind.to_string(),
            part_id: None,
            name: "x".to_string(),
            quantity,
            unit: "cái".to_string(),
            unit_price,
            line_total: 0,
            review_status: None,
            review_note: None,
        }
    }

    #[test]
    fn test_line_total_recompute() {
        let mut it = item("PART", 3.0, 50_000);
        it.recompute_total();
        assert_eq!(it.line_total, 150_000);

        it.quantity = 2.0;
        it.recompute_total();
        assert_eq!(it.line_total, 100_000);

        it.unit_price = 75_000;
        it.recompute_total();
        assert_eq!(it.line_total, 150_000);
    }

    #[test]
    fn test_totals_with_discount() {
        let items = vec![item("PART", 2.0, 300_000), item("SERVICE", 1.0, 400_000)];
        let totals = QuotationTotals::compute(&items, 10.0);
        assert_eq!(totals.parts_total, 600_000);
        assert_eq!(totals.services_total, 400_000);
        assert_eq!(totals.grand_total, 1_000_000);
        assert_eq!(totals.discount_amount, 100_000);
        assert_eq!(totals.final_amount, 900_000);
    }

    #[test]
    fn test_final_amount_never_negative() {
        let items = vec![item("SERVICE", 1.0, 100_000)];
        let totals = QuotationTotals::compute(&items, 150.0);
        assert_eq!(totals.final_amount, 0);
    }

    #[test]
    fn test_unknown_kind_counts_as_part() {
        let items = vec![item("Phụ tùng", 1.0, 50_000), item("???", 1.0, 10_000)];
        let totals = QuotationTotals::compute(&items, 0.0);
        assert_eq!(totals.parts_total, 60_000);
        assert_eq!(totals.services_total, 0);
    }
}
