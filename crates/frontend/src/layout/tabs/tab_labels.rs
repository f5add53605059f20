//! Tab labels - single source of truth for tab titles.

/// Returns the human-readable tab title for a given key. Fallback: empty.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Aggregates (aNNN) ─────────────────────────────────────────────
        "a001_service_ticket" => "Phiếu dịch vụ",
        "a002_warehouse_review" => "Duyệt báo giá (kho)",
        "a003_part" => "Phụ tùng",
        "a004_stock_export" => "Phiếu xuất kho",
        "a005_stock_receipt" => "Phiếu nhập kho",
        "a006_purchase_request" => "Yêu cầu mua hàng",

        // ── Use Cases (u5xx) ──────────────────────────────────────────────
        "u501_replenishment" => "Gợi ý nhập hàng",

        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_service_summary" => "Tổng quan dịch vụ",

        // ── Fallback ──────────────────────────────────────────────────────
        _ => "",
    }
}

/// Builds a detail-tab title: «<entity> · <identifier>».
///
/// Example: `detail_tab_label("Phiếu DV", "SV-000123")` → `"Phiếu DV · SV-000123"`
pub fn detail_tab_label(entity_label: &'static str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}
