pub mod a001_service_ticket;
pub mod a002_price_quotation;
pub mod a003_part;
pub mod a004_stock_export;
pub mod a005_stock_receipt;
pub mod a006_purchase_request;
pub mod a007_booking;
pub mod a008_reference;
