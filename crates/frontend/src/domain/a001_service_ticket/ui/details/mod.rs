//! Ticket detail page.
//!
//! Renders one ServiceTicket with its PriceQuotation and gates every
//! mutating action behind predicates over the current status pair. Each
//! action is a single POST followed by an unconditional full re-fetch —
//! the server is the only source of truth, so there is no optimistic
//! update and nothing to roll back on failure.

use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::api_utils;
use crate::shared::components::status_tag::{QuotationStatusTag, ReviewStatusTag, TicketStatusTag};
use crate::shared::date_utils::format_date;
use crate::shared::download::save_pdf;
use crate::shared::page_frame::PageFrame;
use crate::shared::toast::use_toast;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_service_ticket::ServiceTicket;
use contracts::domain::a002_price_quotation::{
    line_total, PriceQuotation, QuotationItem, QuotationTotals, SaveQuotationRequest,
    UpsertItemRequest,
};
use contracts::domain::a003_part::Part;
use contracts::domain::a008_reference::Employee;
use contracts::enums::{ItemKind, QuotationStatus, TicketStatus};
use contracts::shared::money::{amount_in_words, format_vnd};
use contracts::shared::Paginated;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

fn parse_quantity(raw: &str) -> f64 {
    raw.replace(',', ".").parse().unwrap_or(0.0)
}

fn parse_price(raw: &str) -> i64 {
    raw.replace('.', "").replace(',', "").parse().unwrap_or(0)
}

#[component]
pub fn TicketDetail(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_toast();
    let stored_id = StoredValue::new(id.clone());

    let (ticket, set_ticket) = signal(None::<ServiceTicket>);
    let (quotation, set_quotation) = signal(None::<PriceQuotation>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    // Editable quotation state, reset from the server copy on every fetch.
    let items = RwSignal::new(Vec::<QuotationItem>::new());
    let discount_percent = RwSignal::new(0.0f64);
    let delivery_date = RwSignal::new(String::new());

    // Parts catalog and technician roster for the pickers, fetched once per
    // page open.
    let parts = RwSignal::new(Vec::<Part>::new());
    let selected_part_id = RwSignal::new(String::new());
    let technicians = RwSignal::new(Vec::<Employee>::new());
    let selected_technician_id = RwSignal::new(String::new());

    let fetch_ticket_detail = move || {
        let id_val = stored_id.get_value();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let response = api_utils::get::<ServiceTicket>(&format!("/api/tickets/{}", id_val)).await;
            match response.data {
                Some(data) => {
                    let tab_key = format!("a001_service_ticket_detail_{}", id_val);
                    tabs_store.update_tab_title(
                        &tab_key,
                        &detail_tab_label(tab_label_for_key("a001_service_ticket"), &data.code),
                    );
                    delivery_date.set(
                        data.expected_delivery_at
                            .clone()
                            .map(|d| d.split('T').next().unwrap_or(&d).to_string())
                            .unwrap_or_default(),
                    );

                    if let Some(quotation_id) = data.quotation_id.clone() {
                        let q_response = api_utils::get::<PriceQuotation>(&format!(
                            "/api/quotations/{}",
                            quotation_id
                        ))
                        .await;
                        match q_response.data {
                            Some(q) => {
                                items.set(q.items.clone());
                                discount_percent.set(q.discount_percent);
                                set_quotation.set(Some(q));
                            }
                            None => {
                                set_quotation.set(None);
                                set_error.set(q_response.error);
                            }
                        }
                    } else {
                        items.set(vec![]);
                        discount_percent.set(0.0);
                        set_quotation.set(None);
                    }

                    set_ticket.set(Some(data));
                }
                None => {
                    set_error.set(Some(
                        response
                            .error
                            .unwrap_or_else(|| api_utils::GENERIC_ERROR.to_string()),
                    ));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move || {
        fetch_ticket_detail();
        spawn_local(async move {
            let response =
                api_utils::get::<Paginated<Part>>("/api/parts/list?limit=500&offset=0&sort_by=name&sort_desc=false")
                    .await;
            if let Some(paginated) = response.data {
                parts.set(paginated.items);
            }
            let response =
                api_utils::get::<Vec<Employee>>("/api/employees?role=TECHNICIAN").await;
            if let Some(list) = response.data {
                technicians.set(list);
            }
        });
    });

    // ── Status guards ─────────────────────────────────────────────────────
    let ticket_status = move || ticket.get().and_then(|t| t.status_norm());
    let quotation_status = move || quotation.get().and_then(|q| q.status_norm());

    let is_active_ticket = move || {
        !matches!(
            ticket_status(),
            Some(TicketStatus::Completed) | Some(TicketStatus::Canceled) | None
        )
    };
    let can_create_quotation = move || {
        quotation.get().is_none()
            && matches!(
                ticket_status(),
                Some(TicketStatus::Created) | Some(TicketStatus::Quoting)
            )
    };
    let can_edit_items = move || matches!(quotation_status(), Some(QuotationStatus::Draft));
    let can_send_to_warehouse = move || {
        matches!(quotation_status(), Some(QuotationStatus::Draft))
            && !items.get().is_empty()
    };
    let can_send_to_customer =
        move || matches!(quotation_status(), Some(QuotationStatus::WarehouseConfirmed));
    let can_customer_decide =
        move || matches!(quotation_status(), Some(QuotationStatus::WaitingCustomerConfirm));
    let can_start_repair = move || {
        matches!(ticket_status(), Some(TicketStatus::QuoteConfirmed))
    };
    let can_complete_repair = move || matches!(ticket_status(), Some(TicketStatus::UnderRepair));
    let can_handover = move || matches!(ticket_status(), Some(TicketStatus::WaitingForDelivery));
    let can_export_pdf = move || {
        matches!(
            quotation_status(),
            Some(QuotationStatus::WarehouseConfirmed) | Some(QuotationStatus::CustomerConfirmed)
        )
    };

    // ── Actions ───────────────────────────────────────────────────────────
    // One POST, one toast, one full re-fetch. No partial patching.
    let run_action = move |path: String, success_message: &'static str| {
        set_busy.set(true);
        spawn_local(async move {
            let response = api_utils::post_no_content(&path, &serde_json::json!({})).await;
            set_busy.set(false);
            match response.error {
                None => {
                    toast.success(success_message);
                    fetch_ticket_detail();
                }
                Some(e) => toast.error(e),
            }
        });
    };

    let ticket_action = move |action: &'static str, success_message: &'static str| {
        let id_val = stored_id.get_value();
        run_action(format!("/api/tickets/{}/{}", id_val, action), success_message);
    };

    let quotation_action = move |action: &'static str, success_message: &'static str| {
        if let Some(q) = quotation.get_untracked() {
            run_action(format!("/api/quotations/{}/{}", q.id, action), success_message);
        }
    };

    // Save = three dependent calls, awaited in order; the sequence stops at
    // the first failure and the page re-syncs from the server either way.
    let save_all = move |_| {
        let id_val = stored_id.get_value();
        let Some(q) = quotation.get_untracked() else {
            return;
        };
        let quotation_id = q.id.clone();
        let date_val = delivery_date.get_untracked();
        let request = SaveQuotationRequest {
            discount_percent: discount_percent.get_untracked(),
            items: items
                .get_untracked()
                .into_iter()
                .map(|item| UpsertItemRequest {
                    id: Some(item.id.clone()).filter(|v| !v.starts_with("local-")),
                    kind: item.kind.clone(),
                    part_id: item.part_id.clone(),
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit: item.unit.clone(),
                    unit_price: item.unit_price,
                    line_total: item.line_total,
                })
                .collect(),
        };

        set_busy.set(true);
        spawn_local(async move {
            if !date_val.is_empty() {
                let response = api_utils::post_no_content(
                    &format!("/api/tickets/{}/delivery-date", id_val),
                    &serde_json::json!({ "expected_delivery_at": date_val }),
                )
                .await;
                if let Some(e) = response.error {
                    set_busy.set(false);
                    toast.error(e);
                    fetch_ticket_detail();
                    return;
                }
            }

            let response = api_utils::post_no_content(
                &format!("/api/quotations/{}/draft", quotation_id),
                &request,
            )
            .await;
            if let Some(e) = response.error {
                set_busy.set(false);
                toast.error(e);
                fetch_ticket_detail();
                return;
            }

            let response = api_utils::post_no_content(
                &format!("/api/quotations/{}/recalculate", quotation_id),
                &serde_json::json!({}),
            )
            .await;
            set_busy.set(false);
            match response.error {
                None => {
                    toast.success("Đã lưu báo giá");
                    fetch_ticket_detail();
                }
                Some(e) => {
                    toast.error(e);
                    fetch_ticket_detail();
                }
            }
        });
    };

    let assign_technician = move |_| {
        let employee_id = selected_technician_id.get_untracked();
        if employee_id.is_empty() {
            return;
        }
        let id_val = stored_id.get_value();
        set_busy.set(true);
        spawn_local(async move {
            let response = api_utils::post_no_content(
                &format!("/api/tickets/{}/assign-technician", id_val),
                &serde_json::json!({ "employee_id": employee_id }),
            )
            .await;
            set_busy.set(false);
            match response.error {
                None => {
                    toast.success("Đã phân công kỹ thuật viên");
                    fetch_ticket_detail();
                }
                Some(e) => toast.error(e),
            }
        });
    };

    let export_pdf = move |_| {
        let Some(q) = quotation.get_untracked() else {
            return;
        };
        let quotation_id = q.id.clone();
        let code = ticket
            .get_untracked()
            .map(|t| t.code)
            .unwrap_or_else(|| quotation_id.clone());
        set_busy.set(true);
        spawn_local(async move {
            match api_utils::get_pdf(&format!("/api/quotations/{}/pdf", quotation_id)).await {
                Ok(bytes) => {
                    if let Err(e) = save_pdf(&bytes, &format!("bao-gia-{}.pdf", code)) {
                        toast.error(e);
                    }
                }
                Err(e) => toast.error(e),
            }
            set_busy.set(false);
        });
    };

    // ── Item editing ──────────────────────────────────────────────────────
    let add_part_item = move |_| {
        let part_id = selected_part_id.get_untracked();
        let Some(part) = parts
            .get_untracked()
            .into_iter()
            .find(|p| p.id == part_id)
        else {
            return;
        };
        items.update(|list| {
            list.push(QuotationItem {
                id: format!("local-{}", Uuid::new_v4()),
                kind: ItemKind::Part.code().to_string(),
                part_id: Some(part.id.clone()),
                name: part.name.clone(),
                quantity: 1.0,
                unit: part.unit.clone(),
                unit_price: part.selling_price,
                line_total: part.selling_price,
                review_status: Some("PENDING".to_string()),
                review_note: None,
            });
        });
    };

    let add_service_item = move |_| {
        items.update(|list| {
            list.push(QuotationItem {
                id: format!("local-{}", Uuid::new_v4()),
                kind: ItemKind::Service.code().to_string(),
                part_id: None,
                name: String::new(),
                quantity: 1.0,
                unit: "lần".to_string(),
                unit_price: 0,
                line_total: 0,
                review_status: None,
                review_note: None,
            });
        });
    };

    let remove_item = move |item_id: String| {
        items.update(|list| list.retain(|i| i.id != item_id));
    };

    let totals = Signal::derive(move || QuotationTotals::compute(&items.get(), discount_percent.get()));

    view! {
        <PageFrame page_id="a001_service_ticket--detail" category="detail">
            <div class="page__header">
                <div class="page__header-left">
                    {move || {
                        let title = ticket.get()
                            .map(|t| format!("Phiếu {} · {}", t.code, t.license_plate))
                            .unwrap_or_else(|| "Phiếu dịch vụ".to_string());
                        view! { <h1 class="page__title">{title}</h1> }
                    }}
                    {move || ticket.get().map(|t| {
                        let status = t.status.clone();
                        view! { <TicketStatusTag status=Signal::derive(move || status.clone()) /> }
                    })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        "✕ Đóng"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if loading.get() {
                        return view! {
                            <Flex gap=FlexGap::Small style="align-items:center;padding:var(--spacing-4xl);justify-content:center;">
                                <Spinner />
                                <span>"Đang tải..."</span>
                            </Flex>
                        }.into_any();
                    }
                    if let Some(err) = error.get() {
                        return view! {
                            <div class="alert alert--error" style="margin:var(--spacing-lg);">
                                <strong>"Lỗi: "</strong>{err}
                            </div>
                        }.into_any();
                    }
                    let Some(t) = ticket.get() else {
                        return view! { <div>"Không có dữ liệu"</div> }.into_any();
                    };

                    view! {
                        <div style="padding:var(--spacing-lg);display:flex;flex-direction:column;gap:var(--spacing-lg);">
                            // ── Ticket info card ──────────────────────────
                            <Card>
                                <div style="padding:var(--spacing-md);display:grid;grid-template-columns:max-content 1fr max-content 1fr;gap:var(--spacing-sm) var(--spacing-xl);align-items:baseline;">
                                    <span class="form__label">"Khách hàng:"</span>
                                    <strong>{t.customer_name.clone()}</strong>

                                    <span class="form__label">"Điện thoại:"</span>
                                    <span>{t.customer_phone.clone()}</span>

                                    <span class="form__label">"Xe:"</span>
                                    <span>
                                        {format!(
                                            "{} {}",
                                            t.vehicle_brand.clone().unwrap_or_default(),
                                            t.vehicle_model.clone().unwrap_or_default()
                                        )}
                                    </span>

                                    <span class="form__label">"Biển số:"</span>
                                    <span>{t.license_plate.clone()}</span>

                                    <span class="form__label">"Ngày nhận:"</span>
                                    <span>{format_date(&t.received_at)}</span>

                                    <span class="form__label">"Hẹn giao xe:"</span>
                                    <span>
                                        <input
                                            type="date"
                                            class="form__input"
                                            prop:value=move || delivery_date.get()
                                            disabled=move || !is_active_ticket() || busy.get()
                                            on:input=move |ev| delivery_date.set(event_target_value(&ev))
                                        />
                                    </span>

                                    <span class="form__label">"Kỹ thuật viên:"</span>
                                    <span>
                                        {if t.technician_names.is_empty() {
                                            "—".to_string()
                                        } else {
                                            t.technician_names.join(", ")
                                        }}
                                    </span>

                                    <span class="form__label">"Ghi chú:"</span>
                                    <span>{t.note.clone().unwrap_or_else(|| "—".to_string())}</span>
                                </div>
                            </Card>

                            // ── Quotation card ────────────────────────────
                            {move || {
                                if let Some(q) = quotation.get() {
                                    let status = q.status.clone();
                                    view! {
                                        <Card>
                                            <div style="padding:var(--spacing-md);display:flex;flex-direction:column;gap:var(--spacing-md);">
                                                <Flex gap=FlexGap::Small style="align-items:center;">
                                                    <h3 style="margin:0;font-size:var(--font-size-md);">"Báo giá"</h3>
                                                    <QuotationStatusTag status=Signal::derive(move || status.clone()) />
                                                </Flex>

                                                <div class="table-wrapper">
                                                    <Table attr:style="width:100%;">
                                                        <TableHeader>
                                                            <TableRow>
                                                                <TableHeaderCell>"Loại"</TableHeaderCell>
                                                                <TableHeaderCell>"Tên"</TableHeaderCell>
                                                                <TableHeaderCell>"SL"</TableHeaderCell>
                                                                <TableHeaderCell>"ĐVT"</TableHeaderCell>
                                                                <TableHeaderCell>"Đơn giá"</TableHeaderCell>
                                                                <TableHeaderCell>"Thành tiền"</TableHeaderCell>
                                                                <TableHeaderCell>"Kho duyệt"</TableHeaderCell>
                                                                <TableHeaderCell>""</TableHeaderCell>
                                                            </TableRow>
                                                        </TableHeader>
                                                        <TableBody>
                                                            <For
                                                                each=move || items.get()
                                                                key=|item| item.id.clone()
                                                                children=move |item| {
                                                                    let item_id = item.id.clone();
                                                                    let item_id_qty = item_id.clone();
                                                                    let item_id_price = item_id.clone();
                                                                    let item_id_name = item_id.clone();
                                                                    let item_id_remove = item_id.clone();
                                                                    let is_part = item.kind_norm() == Some(ItemKind::Part);
                                                                    let review = item.review_status.clone();
                                                                    let kind_label = item.kind_norm().map(|k| k.label()).unwrap_or("—");

                                                                    view! {
                                                                        <TableRow>
                                                                            <TableCell>
                                                                                <TableCellLayout>{kind_label}</TableCellLayout>
                                                                            </TableCell>
                                                                            <TableCell>
                                                                                <TableCellLayout truncate=true>
                                                                                    {if is_part {
                                                                                        view! { <span>{item.name.clone()}</span> }.into_any()
                                                                                    } else {
                                                                                        let name_value = item.name.clone();
                                                                                        view! {
                                                                                            <input
                                                                                                type="text"
                                                                                                class="form__input"
                                                                                                prop:value=name_value
                                                                                                disabled=move || !can_edit_items()
                                                                                                on:input=move |ev| {
                                                                                                    let v = event_target_value(&ev);
                                                                                                    let iid = item_id_name.clone();
                                                                                                    items.update(|list| {
                                                                                                        if let Some(it) = list.iter_mut().find(|i| i.id == iid) {
                                                                                                            it.name = v.clone();
                                                                                                        }
                                                                                                    });
                                                                                                }
                                                                                            />
                                                                                        }.into_any()
                                                                                    }}
                                                                                </TableCellLayout>
                                                                            </TableCell>
                                                                            <TableCell>
                                                                                <TableCellLayout>
                                                                                    <input
                                                                                        type="number"
                                                                                        class="form__input form__input--number"
                                                                                        step="0.1"
                                                                                        min="0"
                                                                                        prop:value=item.quantity.to_string()
                                                                                        disabled=move || !can_edit_items()
                                                                                        on:input=move |ev| {
                                                                                            let quantity = parse_quantity(&event_target_value(&ev));
                                                                                            let iid = item_id_qty.clone();
                                                                                            items.update(|list| {
                                                                                                if let Some(it) = list.iter_mut().find(|i| i.id == iid) {
                                                                                                    it.quantity = quantity;
                                                                                                    it.line_total = line_total(it.quantity, it.unit_price);
                                                                                                }
                                                                                            });
                                                                                        }
                                                                                    />
                                                                                </TableCellLayout>
                                                                            </TableCell>
                                                                            <TableCell>
                                                                                <TableCellLayout>{item.unit.clone()}</TableCellLayout>
                                                                            </TableCell>
                                                                            <TableCell>
                                                                                <TableCellLayout>
                                                                                    <input
                                                                                        type="number"
                                                                                        class="form__input form__input--number"
                                                                                        step="1000"
                                                                                        min="0"
                                                                                        prop:value=item.unit_price.to_string()
                                                                                        disabled=move || !can_edit_items()
                                                                                        on:input=move |ev| {
                                                                                            let price = parse_price(&event_target_value(&ev));
                                                                                            let iid = item_id_price.clone();
                                                                                            items.update(|list| {
                                                                                                if let Some(it) = list.iter_mut().find(|i| i.id == iid) {
                                                                                                    it.unit_price = price;
                                                                                                    it.line_total = line_total(it.quantity, it.unit_price);
                                                                                                }
                                                                                            });
                                                                                        }
                                                                                    />
                                                                                </TableCellLayout>
                                                                            </TableCell>
                                                                            <TableCell>
                                                                                <TableCellLayout>
                                                                                    <strong style="font-variant-numeric:tabular-nums;">
                                                                                        {move || {
                                                                                            let iid = item_id.clone();
                                                                                            items.with(|list| {
                                                                                                list.iter()
                                                                                                    .find(|i| i.id == iid)
                                                                                                    .map(|i| format_vnd(i.line_total))
                                                                                                    .unwrap_or_default()
                                                                                            })
                                                                                        }}
                                                                                    </strong>
                                                                                </TableCellLayout>
                                                                            </TableCell>
                                                                            <TableCell>
                                                                                <TableCellLayout>
                                                                                    {if is_part {
                                                                                        view! { <ReviewStatusTag status=Signal::derive(move || review.clone()) /> }.into_any()
                                                                                    } else {
                                                                                        view! { <span>"—"</span> }.into_any()
                                                                                    }}
                                                                                </TableCellLayout>
                                                                            </TableCell>
                                                                            <TableCell>
                                                                                <TableCellLayout>
                                                                                    <Show when=can_edit_items>
                                                                                        <Button
                                                                                            appearance=ButtonAppearance::Subtle
                                                                                            on_click={
                                                                                                let iid = item_id_remove.clone();
                                                                                                move |_| remove_item(iid.clone())
                                                                                            }
                                                                                        >
                                                                                            "✕"
                                                                                        </Button>
                                                                                    </Show>
                                                                                </TableCellLayout>
                                                                            </TableCell>
                                                                        </TableRow>
                                                                    }
                                                                }
                                                            />
                                                        </TableBody>
                                                    </Table>
                                                </div>

                                                <Show when=can_edit_items>
                                                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                                                        <select
                                                            class="page-size-select"
                                                            style="min-width:260px;"
                                                            on:change=move |ev| selected_part_id.set(event_target_value(&ev))
                                                        >
                                                            <option value="">"— Chọn phụ tùng —"</option>
                                                            {move || parts.get().into_iter().map(|p| {
                                                                let label = format!("{} · {} ({})", p.sku, p.name, format_vnd(p.selling_price));
                                                                view! { <option value=p.id.clone()>{label}</option> }
                                                            }).collect_view()}
                                                        </select>
                                                        <Button appearance=ButtonAppearance::Secondary on_click=add_part_item>
                                                            "+ Phụ tùng"
                                                        </Button>
                                                        <Button appearance=ButtonAppearance::Secondary on_click=add_service_item>
                                                            "+ Dịch vụ"
                                                        </Button>
                                                    </Flex>
                                                </Show>

                                                // ── Totals ────────────────
                                                <div class="quotation-totals">
                                                    <div class="quotation-totals__row">
                                                        <span>"Phụ tùng:"</span>
                                                        <span>{move || format_vnd(totals.get().parts_total)}</span>
                                                    </div>
                                                    <div class="quotation-totals__row">
                                                        <span>"Dịch vụ:"</span>
                                                        <span>{move || format_vnd(totals.get().services_total)}</span>
                                                    </div>
                                                    <div class="quotation-totals__row">
                                                        <span>"Tổng cộng:"</span>
                                                        <strong>{move || format_vnd(totals.get().grand_total)}</strong>
                                                    </div>
                                                    <div class="quotation-totals__row">
                                                        <span>"Giảm giá (%):"</span>
                                                        <input
                                                            type="number"
                                                            class="form__input form__input--number"
                                                            step="1"
                                                            min="0"
                                                            max="100"
                                                            prop:value=move || discount_percent.get().to_string()
                                                            disabled=move || !can_edit_items()
                                                            on:input=move |ev| {
                                                                discount_percent.set(parse_quantity(&event_target_value(&ev)));
                                                            }
                                                        />
                                                        <span>{move || format_vnd(totals.get().discount_amount)}</span>
                                                    </div>
                                                    <div class="quotation-totals__row quotation-totals__row--final">
                                                        <span>"Thành tiền:"</span>
                                                        <strong>{move || format_vnd(totals.get().final_amount)}</strong>
                                                    </div>
                                                    <div class="quotation-totals__words">
                                                        {move || format!("Bằng chữ: {}", amount_in_words(totals.get().final_amount))}
                                                    </div>
                                                </div>
                                            </div>
                                        </Card>
                                    }.into_any()
                                } else {
                                    view! {
                                        <div style="padding:var(--spacing-md);color:var(--color-text-secondary);">
                                            "Chưa có báo giá cho phiếu này"
                                        </div>
                                    }.into_any()
                                }
                            }}

                            // ── Action bar ────────────────────────────────
                            <Card>
                                <div style="padding:var(--spacing-md);">
                                    <Flex gap=FlexGap::Small style="flex-wrap:wrap;">
                                        <Show when=can_create_quotation>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=move |_| ticket_action("quotations/create", "Đã tạo báo giá")
                                            >
                                                "Tạo báo giá"
                                            </Button>
                                        </Show>

                                        <Show when=can_edit_items>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=save_all
                                            >
                                                "Lưu báo giá"
                                            </Button>
                                        </Show>

                                        <Show when=can_send_to_warehouse>
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=move |_| quotation_action("send-warehouse", "Đã gửi kho duyệt")
                                            >
                                                "Gửi kho duyệt"
                                            </Button>
                                        </Show>

                                        <Show when=can_send_to_customer>
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=move |_| quotation_action("send-customer", "Đã gửi khách hàng")
                                            >
                                                "Gửi khách xác nhận"
                                            </Button>
                                        </Show>

                                        <Show when=can_customer_decide>
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=move |_| quotation_action("customer-confirm", "Khách đã đồng ý báo giá")
                                            >
                                                "Khách đồng ý"
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=move |_| quotation_action("customer-reject", "Đã ghi nhận khách từ chối")
                                            >
                                                "Khách từ chối"
                                            </Button>
                                        </Show>

                                        <Show when=can_start_repair>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=move |_| ticket_action("start-repair", "Đã bắt đầu sửa chữa")
                                            >
                                                "Bắt đầu sửa chữa"
                                            </Button>
                                        </Show>

                                        <Show when=can_complete_repair>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=move |_| ticket_action("complete-repair", "Đã hoàn tất sửa chữa")
                                            >
                                                "Hoàn tất sửa chữa"
                                            </Button>
                                        </Show>

                                        <Show when=can_handover>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=move |_| ticket_action("handover", "Đã giao xe cho khách")
                                            >
                                                "Giao xe"
                                            </Button>
                                        </Show>

                                        <Show when=can_export_pdf>
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=export_pdf
                                            >
                                                "Xuất PDF"
                                            </Button>
                                        </Show>

                                        <Show when=is_active_ticket>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=move |_| ticket_action("cancel", "Đã hủy phiếu")
                                            >
                                                "Hủy phiếu"
                                            </Button>
                                        </Show>
                                    </Flex>

                                    <Show when=is_active_ticket>
                                        <Flex gap=FlexGap::Small align=FlexAlign::Center style="margin-top:var(--spacing-md);">
                                            <Label>"Kỹ thuật viên:"</Label>
                                            <select
                                                class="page-size-select"
                                                style="min-width:200px;"
                                                on:change=move |ev| selected_technician_id.set(event_target_value(&ev))
                                            >
                                                <option value="">"— Chọn kỹ thuật viên —"</option>
                                                {move || technicians.get().into_iter().map(|e| {
                                                    view! { <option value=e.id.clone()>{e.full_name.clone()}</option> }
                                                }).collect_view()}
                                            </select>
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=assign_technician
                                            >
                                                "Phân công"
                                            </Button>
                                        </Flex>
                                    </Show>
                                </div>
                            </Card>
                        </div>
                    }.into_any()
                }}
            </div>
        </PageFrame>
    }
}
