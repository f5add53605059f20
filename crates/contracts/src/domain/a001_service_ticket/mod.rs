pub mod dto;

pub use dto::{CreateTicketRequest, ServiceTicket, TicketListRequest, TicketSummary};
