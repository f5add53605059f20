pub mod dto;

pub use dto::{
    CreatePurchaseRequest, CreatePurchaseRequestLine, PurchaseRequest, PurchaseRequestLine,
    PurchaseRequestListRequest,
};
