pub mod dto;

pub use dto::{StockReceipt, StockReceiptLine, StockReceiptListRequest};
