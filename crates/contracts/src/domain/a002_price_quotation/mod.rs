pub mod dto;

pub use dto::{
    line_total, PriceQuotation, QuotationItem, QuotationTotals, ReviewLineRequest,
    SaveQuotationRequest, UpsertItemRequest,
};
