use contracts::domain::a006_purchase_request::PurchaseRequest;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct PurchaseRequestListState {
    pub items: Vec<PurchaseRequest>,
    pub search_query: String,
    pub is_loaded: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for PurchaseRequestListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            is_loaded: false,
            page: 0,
            page_size: 50,
            total_count: 0,
            total_pages: 0,
        }
    }
}

pub fn create_state() -> RwSignal<PurchaseRequestListState> {
    RwSignal::new(PurchaseRequestListState::default())
}
