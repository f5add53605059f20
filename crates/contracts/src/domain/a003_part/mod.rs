pub mod dto;

pub use dto::{Part, PartListRequest, UpsertPartRequest};
