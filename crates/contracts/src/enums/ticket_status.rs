use serde::{Deserialize, Serialize};

/// Lifecycle status of a service ticket.
///
/// The backend is the only party that moves a ticket between statuses; the
/// frontend renders the current value and gates action buttons on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Created,
    Quoting,
    QuoteConfirmed,
    UnderRepair,
    WaitingForDelivery,
    Completed,
    Canceled,
}

impl TicketStatus {
    /// Canonical wire code, as the backend sends it on the happy path.
    pub fn code(&self) -> &'static str {
        match self {
            TicketStatus::Created => "CREATED",
            TicketStatus::Quoting => "QUOTING",
            TicketStatus::QuoteConfirmed => "QUOTE_CONFIRMED",
            TicketStatus::UnderRepair => "UNDER_REPAIR",
            TicketStatus::WaitingForDelivery => "WAITING_FOR_DELIVERY",
            TicketStatus::Completed => "COMPLETED",
            TicketStatus::Canceled => "CANCELED",
        }
    }

    /// Display label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Created => "Đã tạo",
            TicketStatus::Quoting => "Đang báo giá",
            TicketStatus::QuoteConfirmed => "Đã chốt báo giá",
            TicketStatus::UnderRepair => "Đang sửa chữa",
            TicketStatus::WaitingForDelivery => "Chờ giao xe",
            TicketStatus::Completed => "Hoàn thành",
            TicketStatus::Canceled => "Đã hủy",
        }
    }

    /// Badge variant for the colored status tag.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            TicketStatus::Created => "neutral",
            TicketStatus::Quoting => "warning",
            TicketStatus::QuoteConfirmed => "primary",
            TicketStatus::UnderRepair => "primary",
            TicketStatus::WaitingForDelivery => "warning",
            TicketStatus::Completed => "success",
            TicketStatus::Canceled => "error",
        }
    }

    pub fn all() -> Vec<TicketStatus> {
        vec![
            TicketStatus::Created,
            TicketStatus::Quoting,
            TicketStatus::QuoteConfirmed,
            TicketStatus::UnderRepair,
            TicketStatus::WaitingForDelivery,
            TicketStatus::Completed,
            TicketStatus::Canceled,
        ]
    }

    /// Normalize a raw backend value to the canonical status.
    ///
    /// Some historical endpoints return the pre-localized Vietnamese label
    /// instead of the enum code, so both vocabularies are accepted here.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        match trimmed.to_uppercase().as_str() {
            "CREATED" => return Some(TicketStatus::Created),
            "QUOTING" => return Some(TicketStatus::Quoting),
            "QUOTE_CONFIRMED" => return Some(TicketStatus::QuoteConfirmed),
            "UNDER_REPAIR" => return Some(TicketStatus::UnderRepair),
            "WAITING_FOR_DELIVERY" => return Some(TicketStatus::WaitingForDelivery),
            "COMPLETED" => return Some(TicketStatus::Completed),
            "CANCELED" => return Some(TicketStatus::Canceled),
            _ => {}
        }
        match trimmed {
            "Đã tạo" => Some(TicketStatus::Created),
            "Đang báo giá" => Some(TicketStatus::Quoting),
            "Đã chốt báo giá" => Some(TicketStatus::QuoteConfirmed),
            "Đang sửa chữa" => Some(TicketStatus::UnderRepair),
            "Chờ giao xe" => Some(TicketStatus::WaitingForDelivery),
            "Hoàn thành" => Some(TicketStatus::Completed),
            "Đã hủy" => Some(TicketStatus::Canceled),
            _ => None,
        }
    }
}

impl ToString for TicketStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_enum_code() {
        assert_eq!(
            TicketStatus::normalize("UNDER_REPAIR"),
            Some(TicketStatus::UnderRepair)
        );
        assert_eq!(
            TicketStatus::normalize("created"),
            Some(TicketStatus::Created)
        );
    }

    #[test]
    fn test_normalize_vietnamese_label() {
        assert_eq!(
            TicketStatus::normalize("Đã tạo"),
            Some(TicketStatus::Created)
        );
        assert_eq!(
            TicketStatus::normalize("Chờ giao xe"),
            Some(TicketStatus::WaitingForDelivery)
        );
    }

    #[test]
    fn test_both_vocabularies_agree() {
        let from_code = TicketStatus::normalize("COMPLETED").unwrap();
        let from_label = TicketStatus::normalize("Hoàn thành").unwrap();
        assert_eq!(from_code, from_label);
        assert_eq!(from_code.label(), from_label.label());
        assert_eq!(from_code.badge_variant(), from_label.badge_variant());
    }

    #[test]
    fn test_normalize_unknown() {
        assert_eq!(TicketStatus::normalize("SOMETHING_ELSE"), None);
        assert_eq!(TicketStatus::normalize(""), None);
    }
}
