use serde::{Deserialize, Serialize};

use crate::enums::TicketStatus;

/// Service ticket as returned by `/api/tickets/{id}`.
///
/// `status` stays a raw string: several legacy endpoints localize it before
/// sending, so the value is normalized at render time via
/// [`TicketStatus::normalize`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceTicket {
    pub id: String,
    pub code: String,
    pub status: String,

    // Customer
    pub customer_name: String,
    pub customer_phone: String,

    // Vehicle
    pub license_plate: String,
    pub vehicle_brand: Option<String>,
    pub vehicle_model: Option<String>,

    // Assignment
    pub technician_names: Vec<String>,
    pub advisor_name: Option<String>,

    // Dates (ISO strings as sent by the backend)
    pub received_at: String,
    pub expected_delivery_at: Option<String>,

    /// Linked quotation, if one has been created for this ticket.
    pub quotation_id: Option<String>,

    pub note: Option<String>,
}

impl ServiceTicket {
    pub fn status_norm(&self) -> Option<TicketStatus> {
        TicketStatus::normalize(&self.status)
    }
}

/// Row shape for the ticket list page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketSummary {
    pub id: String,
    pub code: String,
    pub status: String,
    pub customer_name: String,
    pub license_plate: String,
    pub received_at: String,
    pub expected_delivery_at: Option<String>,
}

/// Query for `/api/tickets/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketListRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub search_query: Option<String>,
    pub limit: usize,
    pub offset: usize,
    pub sort_by: String,
    pub sort_desc: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTicketRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub license_plate: String,
    pub vehicle_brand: Option<String>,
    pub vehicle_model: Option<String>,
    pub note: Option<String>,
    /// Employee stamped from the JWT claims of the logged-in advisor.
    pub created_by: String,
}
