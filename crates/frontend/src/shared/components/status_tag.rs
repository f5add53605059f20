//! Colored status tags.
//!
//! Each tag takes the raw backend status string, normalizes it through the
//! contracts enum (both the canonical code and the legacy Vietnamese label
//! are accepted) and renders a colored badge. Unknown values fall back to a
//! neutral badge showing the raw text, so a new backend status degrades
//! visibly instead of crashing the page.

use crate::shared::components::ui::Badge;
use contracts::enums::{QuotationStatus, ReviewStatus, TicketStatus};
use leptos::prelude::*;

#[component]
pub fn TicketStatusTag(#[prop(into)] status: Signal<String>) -> impl IntoView {
    let label = move || {
        let raw = status.get();
        TicketStatus::normalize(&raw)
            .map(|s| s.label().to_string())
            .unwrap_or(raw)
    };
    let variant = move || {
        TicketStatus::normalize(&status.get())
            .map(|s| s.badge_variant().to_string())
            .unwrap_or_else(|| "neutral".to_string())
    };

    view! {
        <Badge variant=Signal::derive(variant)>
            {label}
        </Badge>
    }
}

#[component]
pub fn QuotationStatusTag(#[prop(into)] status: Signal<String>) -> impl IntoView {
    let label = move || {
        let raw = status.get();
        QuotationStatus::normalize(&raw)
            .map(|s| s.label().to_string())
            .unwrap_or(raw)
    };
    let variant = move || {
        QuotationStatus::normalize(&status.get())
            .map(|s| s.badge_variant().to_string())
            .unwrap_or_else(|| "neutral".to_string())
    };

    view! {
        <Badge variant=Signal::derive(variant)>
            {label}
        </Badge>
    }
}

#[component]
pub fn ReviewStatusTag(#[prop(into)] status: Signal<Option<String>>) -> impl IntoView {
    let normalized = move || {
        status
            .get()
            .as_deref()
            .and_then(ReviewStatus::normalize)
            .unwrap_or(ReviewStatus::Pending)
    };

    view! {
        <Badge variant=Signal::derive(move || normalized().badge_variant().to_string())>
            {move || normalized().label()}
        </Badge>
    }
}
