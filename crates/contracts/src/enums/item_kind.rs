use serde::{Deserialize, Serialize};

/// Kind of a quotation line: a replacement part drawn from the catalog or a
/// labor/service charge entered free-form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Part,
    Service,
}

impl ItemKind {
    pub fn code(&self) -> &'static str {
        match self {
            ItemKind::Part => "PART",
            ItemKind::Service => "SERVICE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Part => "Phụ tùng",
            ItemKind::Service => "Dịch vụ",
        }
    }

    pub fn normalize(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "PART" => Some(ItemKind::Part),
            "SERVICE" => Some(ItemKind::Service),
            _ => match raw.trim() {
                "Phụ tùng" => Some(ItemKind::Part),
                "Dịch vụ" => Some(ItemKind::Service),
                _ => None,
            },
        }
    }
}

impl ToString for ItemKind {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
