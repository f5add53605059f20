use serde::{Deserialize, Serialize};

/// Warehouse review verdict for a single PART line of a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "PENDING",
            ReviewStatus::Approved => "APPROVED",
            ReviewStatus::Rejected => "REJECTED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Chờ duyệt",
            ReviewStatus::Approved => "Đã duyệt",
            ReviewStatus::Rejected => "Từ chối",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "warning",
            ReviewStatus::Approved => "success",
            ReviewStatus::Rejected => "error",
        }
    }

    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        match trimmed.to_uppercase().as_str() {
            "PENDING" => return Some(ReviewStatus::Pending),
            "APPROVED" => return Some(ReviewStatus::Approved),
            "REJECTED" => return Some(ReviewStatus::Rejected),
            _ => {}
        }
        match trimmed {
            "Chờ duyệt" => Some(ReviewStatus::Pending),
            "Đã duyệt" => Some(ReviewStatus::Approved),
            "Từ chối" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }
}

impl ToString for ReviewStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(ReviewStatus::normalize("pending"), Some(ReviewStatus::Pending));
        assert_eq!(ReviewStatus::normalize("Đã duyệt"), Some(ReviewStatus::Approved));
        assert_eq!(ReviewStatus::normalize("nope"), None);
    }
}
