use contracts::domain::a003_part::Part;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct PartListState {
    pub items: Vec<Part>,
    pub search_query: String,
    pub category: String,
    pub supplier: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for PartListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            category: String::new(),
            supplier: String::new(),
            sort_field: "sku".to_string(),
            sort_ascending: true,
            is_loaded: false,
            page: 0,
            page_size: 50,
            total_count: 0,
            total_pages: 0,
        }
    }
}

pub fn create_state() -> RwSignal<PartListState> {
    RwSignal::new(PartListState::default())
}
