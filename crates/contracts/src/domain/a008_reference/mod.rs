pub mod dto;

pub use dto::{Employee, Market, Supplier, Unit};
