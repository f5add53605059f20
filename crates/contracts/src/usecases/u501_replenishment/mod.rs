pub mod request;
pub mod response;

pub use request::ReplenishmentRequest;
pub use response::{ReplenishmentResponse, SuggestedLine};

use crate::usecases::common::UseCaseMetadata;

pub struct Replenishment;

impl UseCaseMetadata for Replenishment {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "replenishment"
    }

    fn display_name() -> &'static str {
        "Gợi ý nhập hàng"
    }

    fn description() -> &'static str {
        "Đề xuất phiếu mua hàng từ các phụ tùng sắp hết tồn kho"
    }
}
