pub mod dto;

pub use dto::{StockExport, StockExportLine, StockExportListRequest};
