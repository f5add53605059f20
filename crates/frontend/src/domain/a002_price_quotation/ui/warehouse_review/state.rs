use super::PendingQuotationDto;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct WarehouseReviewState {
    pub items: Vec<PendingQuotationDto>,
    pub is_loaded: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for WarehouseReviewState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loaded: false,
            page: 0,
            page_size: 50,
            total_count: 0,
            total_pages: 0,
        }
    }
}

pub fn create_state() -> RwSignal<WarehouseReviewState> {
    RwSignal::new(WarehouseReviewState::default())
}
