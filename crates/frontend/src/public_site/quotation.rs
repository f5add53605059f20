//! Customer-facing quotation page.
//!
//! Unauthenticated: the link carries the quotation id. The customer sees
//! the itemized estimate and can confirm or decline while the quotation is
//! waiting for their decision. Every action re-fetches the quotation.

use crate::shared::api_utils;
use crate::shared::components::status_tag::QuotationStatusTag;
use crate::shared::date_utils::format_date;
use contracts::domain::a002_price_quotation::PriceQuotation;
use contracts::enums::{ItemKind, QuotationStatus};
use contracts::shared::money::{amount_in_words, format_vnd};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn PublicQuotationPage(quotation_id: String) -> impl IntoView {
    let stored_id = StoredValue::new(quotation_id);

    let (quotation, set_quotation) = signal(None::<PriceQuotation>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let load_quotation = move || {
        let id_val = stored_id.get_value();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let response =
                api_utils::get::<PriceQuotation>(&format!("/api/public/quotations/{}", id_val))
                    .await;
            match response.data {
                Some(q) => set_quotation.set(Some(q)),
                None => set_error.set(Some(
                    response
                        .error
                        .unwrap_or_else(|| api_utils::GENERIC_ERROR.to_string()),
                )),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move || {
        load_quotation();
    });

    let can_decide = move || {
        quotation
            .get()
            .and_then(|q| q.status_norm())
            .map(|s| s == QuotationStatus::WaitingCustomerConfirm)
            .unwrap_or(false)
    };

    let decide = move |action: &'static str| {
        let id_val = stored_id.get_value();
        set_busy.set(true);
        spawn_local(async move {
            let response = api_utils::post_no_content(
                &format!("/api/public/quotations/{}/{}", id_val, action),
                &serde_json::json!({}),
            )
            .await;
            set_busy.set(false);
            if let Some(e) = response.error {
                set_error.set(Some(e));
            }
            load_quotation();
        });
    };

    view! {
        <div class="public-quote">
            <header class="public-quote__header">
                <span class="home__brand">"Garage 79"</span>
                <span class="public-quote__caption">"Báo giá sửa chữa"</span>
            </header>

            <main class="public-quote__body">
                {move || {
                    if loading.get() {
                        return view! { <div class="public-quote__loading">"Đang tải báo giá..."</div> }.into_any();
                    }
                    if let Some(err) = error.get() {
                        return view! {
                            <div class="alert alert--error">{err}</div>
                        }.into_any();
                    }
                    let Some(q) = quotation.get() else {
                        return view! { <div>"Không tìm thấy báo giá"</div> }.into_any();
                    };

                    let status = q.status.clone();
                    let totals = q.totals();
                    let parts: Vec<_> = q
                        .items
                        .iter()
                        .filter(|i| i.kind_norm() == Some(ItemKind::Part))
                        .cloned()
                        .collect();
                    let services: Vec<_> = q
                        .items
                        .iter()
                        .filter(|i| i.kind_norm() == Some(ItemKind::Service))
                        .cloned()
                        .collect();

                    let render_rows = |items: Vec<contracts::domain::a002_price_quotation::QuotationItem>| {
                        items.into_iter().map(|item| {
                            view! {
                                <tr>
                                    <td>{item.name.clone()}</td>
                                    <td class="public-quote__num">{format!("{} {}", item.quantity, item.unit)}</td>
                                    <td class="public-quote__num">{format_vnd(item.unit_price)}</td>
                                    <td class="public-quote__num"><strong>{format_vnd(item.line_total)}</strong></td>
                                </tr>
                            }
                        }).collect_view()
                    };

                    view! {
                        <div class="public-quote__meta">
                            <span>"Ngày lập: " {format_date(&q.created_at)}</span>
                            <QuotationStatusTag status=Signal::derive(move || status.clone()) />
                        </div>

                        <table class="public-quote__table">
                            <thead>
                                <tr>
                                    <th>"Hạng mục"</th>
                                    <th>"Số lượng"</th>
                                    <th>"Đơn giá"</th>
                                    <th>"Thành tiền"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {(!parts.is_empty()).then(|| view! {
                                    <tr class="public-quote__group"><td colspan="4">"Phụ tùng thay thế"</td></tr>
                                })}
                                {render_rows(parts)}
                                {(!services.is_empty()).then(|| view! {
                                    <tr class="public-quote__group"><td colspan="4">"Công dịch vụ"</td></tr>
                                })}
                                {render_rows(services)}
                            </tbody>
                        </table>

                        <div class="quotation-totals">
                            <div class="quotation-totals__row">
                                <span>"Tổng cộng:"</span>
                                <span>{format_vnd(totals.grand_total)}</span>
                            </div>
                            <div class="quotation-totals__row">
                                <span>{format!("Giảm giá ({}%):", q.discount_percent)}</span>
                                <span>{format_vnd(totals.discount_amount)}</span>
                            </div>
                            <div class="quotation-totals__row quotation-totals__row--final">
                                <span>"Thành tiền:"</span>
                                <strong>{format_vnd(totals.final_amount)}</strong>
                            </div>
                            <div class="quotation-totals__words">
                                {format!("Bằng chữ: {}", amount_in_words(totals.final_amount))}
                            </div>
                        </div>

                        <Show when=can_decide>
                            <div class="public-quote__actions">
                                <button
                                    class="public-quote__confirm"
                                    disabled=move || busy.get()
                                    on:click=move |_| decide("confirm")
                                >
                                    "Đồng ý báo giá"
                                </button>
                                <button
                                    class="public-quote__reject"
                                    disabled=move || busy.get()
                                    on:click=move |_| decide("reject")
                                >
                                    "Từ chối"
                                </button>
                            </div>
                        </Show>
                    }.into_any()
                }}
            </main>

            <footer class="public-quote__footer">
                <span>"Garage 79 — 79 Đường Láng, Đống Đa, Hà Nội — 0987 654 321"</span>
            </footer>
        </div>
    }
}
