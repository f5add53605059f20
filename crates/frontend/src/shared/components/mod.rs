pub mod pagination_controls;
pub mod stat_card;
pub mod status_tag;
pub mod ui;

pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
pub use status_tag::{QuotationStatusTag, ReviewStatusTag, TicketStatusTag};
