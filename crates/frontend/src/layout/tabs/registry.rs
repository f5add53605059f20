//! Tab content registry - single source of truth for the tab.key → View map.
//!
//! `render_tab_content` resolves a tab key to its page component. Every tab
//! key used anywhere in the app is listed here.

use crate::dashboards::d400_service_summary::ServiceSummaryDashboard;
use crate::domain::a001_service_ticket::ui::details::TicketDetail;
use crate::domain::a001_service_ticket::ui::list::TicketList;
use crate::domain::a002_price_quotation::ui::warehouse_review::WarehouseReviewList;
use crate::domain::a003_part::ui::details::PartDetails;
use crate::domain::a003_part::ui::list::PartList;
use crate::domain::a004_stock_export::ui::list::StockExportList;
use crate::domain::a005_stock_receipt::ui::list::StockReceiptList;
use crate::domain::a006_purchase_request::ui::details::PurchaseRequestDetail;
use crate::domain::a006_purchase_request::ui::list::PurchaseRequestList;
use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u501_replenishment::view::ReplenishmentPage;
use leptos::prelude::*;

/// Renders tab content by key.
///
/// # Arguments
/// * `key` - unique tab key (e.g. "a001_service_ticket",
///   "a001_service_ticket_detail_<id>")
/// * `tabs_store` - context used by detail views to close their own tab
///
/// # Returns
/// AnyView with the tab content, or a placeholder for unknown keys
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Dashboards (d4xx)
        // ═══════════════════════════════════════════════════════════════════
        "d400_service_summary" => view! { <ServiceSummaryDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // a001: Service tickets
        // ═══════════════════════════════════════════════════════════════════
        "a001_service_ticket" => view! { <TicketList /> }.into_any(),
        k if k.starts_with("a001_service_ticket_detail_") => {
            let id = k
                .strip_prefix("a001_service_ticket_detail_")
                .unwrap()
                .to_string();
            view! {
                <TicketDetail
                    id=id
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // a002: Quotations pending warehouse review
        // ═══════════════════════════════════════════════════════════════════
        "a002_warehouse_review" => view! { <WarehouseReviewList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // a003: Parts catalog
        // ═══════════════════════════════════════════════════════════════════
        "a003_part" => view! { <PartList /> }.into_any(),
        "a003_part_new" => view! {
            <PartDetails
                id=None
                on_saved=Callback::new({
                    let key_for_close = key_for_close.clone();
                    move |_| {
                        tabs_store.close_tab(&key_for_close);
                    }
                })
                on_cancel=Callback::new({
                    let key_for_close = key_for_close.clone();
                    move |_| {
                        tabs_store.close_tab(&key_for_close);
                    }
                })
            />
        }
        .into_any(),
        k if k.starts_with("a003_part_detail_") => {
            let id = k.strip_prefix("a003_part_detail_").unwrap().to_string();
            view! {
                <PartDetails
                    id=Some(id)
                    on_saved=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                    on_cancel=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // a004/a005: Stock movements
        // ═══════════════════════════════════════════════════════════════════
        "a004_stock_export" => view! { <StockExportList /> }.into_any(),
        "a005_stock_receipt" => view! { <StockReceiptList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // a006: Purchase requests
        // ═══════════════════════════════════════════════════════════════════
        "a006_purchase_request" => view! { <PurchaseRequestList /> }.into_any(),
        k if k.starts_with("a006_purchase_request_detail_") => {
            let id = k
                .strip_prefix("a006_purchase_request_detail_")
                .unwrap()
                .to_string();
            view! {
                <PurchaseRequestDetail
                    id=id
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // Use cases (u5xx)
        // ═══════════════════════════════════════════════════════════════════
        "u501_replenishment" => view! { <ReplenishmentPage /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Unknown key
        // ═══════════════════════════════════════════════════════════════════
        _ => view! {
            <div style="padding: 24px; color: var(--color-text-secondary);">
                "Không tìm thấy trang: " {key.to_string()}
            </div>
        }
        .into_any(),
    }
}
