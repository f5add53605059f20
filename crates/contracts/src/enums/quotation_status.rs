use serde::{Deserialize, Serialize};

/// Approval status of a price quotation, independent of its ticket's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuotationStatus {
    Draft,
    WaitingWarehouseConfirm,
    WarehouseConfirmed,
    WaitingCustomerConfirm,
    CustomerConfirmed,
    CustomerRejected,
    Completed,
}

impl QuotationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            QuotationStatus::Draft => "DRAFT",
            QuotationStatus::WaitingWarehouseConfirm => "WAITING_WAREHOUSE_CONFIRM",
            QuotationStatus::WarehouseConfirmed => "WAREHOUSE_CONFIRMED",
            QuotationStatus::WaitingCustomerConfirm => "WAITING_CUSTOMER_CONFIRM",
            QuotationStatus::CustomerConfirmed => "CUSTOMER_CONFIRMED",
            QuotationStatus::CustomerRejected => "CUSTOMER_REJECTED",
            QuotationStatus::Completed => "COMPLETED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuotationStatus::Draft => "Bản nháp",
            QuotationStatus::WaitingWarehouseConfirm => "Chờ kho xác nhận",
            QuotationStatus::WarehouseConfirmed => "Kho đã xác nhận",
            QuotationStatus::WaitingCustomerConfirm => "Chờ khách xác nhận",
            QuotationStatus::CustomerConfirmed => "Khách đã đồng ý",
            QuotationStatus::CustomerRejected => "Khách từ chối",
            QuotationStatus::Completed => "Hoàn tất",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            QuotationStatus::Draft => "neutral",
            QuotationStatus::WaitingWarehouseConfirm => "warning",
            QuotationStatus::WarehouseConfirmed => "primary",
            QuotationStatus::WaitingCustomerConfirm => "warning",
            QuotationStatus::CustomerConfirmed => "success",
            QuotationStatus::CustomerRejected => "error",
            QuotationStatus::Completed => "success",
        }
    }

    pub fn all() -> Vec<QuotationStatus> {
        vec![
            QuotationStatus::Draft,
            QuotationStatus::WaitingWarehouseConfirm,
            QuotationStatus::WarehouseConfirmed,
            QuotationStatus::WaitingCustomerConfirm,
            QuotationStatus::CustomerConfirmed,
            QuotationStatus::CustomerRejected,
            QuotationStatus::Completed,
        ]
    }

    /// Accepts both the canonical code and the pre-localized Vietnamese
    /// label some older endpoints still return.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        match trimmed.to_uppercase().as_str() {
            "DRAFT" => return Some(QuotationStatus::Draft),
            "WAITING_WAREHOUSE_CONFIRM" => return Some(QuotationStatus::WaitingWarehouseConfirm),
            "WAREHOUSE_CONFIRMED" => return Some(QuotationStatus::WarehouseConfirmed),
            "WAITING_CUSTOMER_CONFIRM" => return Some(QuotationStatus::WaitingCustomerConfirm),
            "CUSTOMER_CONFIRMED" => return Some(QuotationStatus::CustomerConfirmed),
            "CUSTOMER_REJECTED" => return Some(QuotationStatus::CustomerRejected),
            "COMPLETED" => return Some(QuotationStatus::Completed),
            _ => {}
        }
        match trimmed {
            "Bản nháp" => Some(QuotationStatus::Draft),
            "Chờ kho xác nhận" => Some(QuotationStatus::WaitingWarehouseConfirm),
            "Kho đã xác nhận" => Some(QuotationStatus::WarehouseConfirmed),
            "Chờ khách xác nhận" => Some(QuotationStatus::WaitingCustomerConfirm),
            "Khách đã đồng ý" => Some(QuotationStatus::CustomerConfirmed),
            "Khách từ chối" => Some(QuotationStatus::CustomerRejected),
            "Hoàn tất" => Some(QuotationStatus::Completed),
            _ => None,
        }
    }
}

impl ToString for QuotationStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_both_vocabularies() {
        let a = QuotationStatus::normalize("WAITING_WAREHOUSE_CONFIRM").unwrap();
        let b = QuotationStatus::normalize("Chờ kho xác nhận").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.label(), b.label());
        assert_eq!(a.badge_variant(), b.badge_variant());
    }

    #[test]
    fn test_normalize_case_insensitive_code() {
        assert_eq!(
            QuotationStatus::normalize("draft"),
            Some(QuotationStatus::Draft)
        );
    }

    #[test]
    fn test_normalize_unknown() {
        assert_eq!(QuotationStatus::normalize("PENDING_SOMETHING"), None);
    }
}
