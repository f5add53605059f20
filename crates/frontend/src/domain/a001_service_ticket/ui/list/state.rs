use contracts::domain::a001_service_ticket::TicketSummary;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct TicketListState {
    pub items: Vec<TicketSummary>,
    pub status_filter: String,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for TicketListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status_filter: String::new(),
            search_query: String::new(),
            sort_field: "received_at".to_string(),
            sort_ascending: false,
            is_loaded: false,
            page: 0,
            page_size: 50,
            total_count: 0,
            total_pages: 0,
        }
    }
}

pub fn create_state() -> RwSignal<TicketListState> {
    RwSignal::new(TicketListState::default())
}
