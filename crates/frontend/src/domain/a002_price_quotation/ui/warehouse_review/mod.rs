//! Warehouse review page.
//!
//! Lists quotations waiting for warehouse confirmation. Expanding a row
//! fetches the quotation lines on demand — re-expanding re-fetches, there
//! is no client cache. The reviewer approves or rejects each PART line with
//! an optional note; a part missing from the catalog can be created inline
//! before approving its line. Special parts keep their catalog fields
//! locked here.

pub mod state;

use self::state::create_state;
use crate::shared::api_utils;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_tag::ReviewStatusTag;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::format_date;
use crate::shared::page_frame::PageFrame;
use crate::shared::toast::use_toast;
use contracts::domain::a002_price_quotation::{PriceQuotation, ReviewLineRequest};
use contracts::domain::a003_part::{Part, UpsertPartRequest};
use contracts::enums::ItemKind;
use contracts::shared::money::format_vnd;
use contracts::shared::validation::require;
use contracts::shared::Paginated;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};
use thaw::*;

/// Row shape for the pending-review list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingQuotationDto {
    pub id: String,
    pub ticket_code: String,
    pub customer_name: String,
    pub license_plate: String,
    pub created_at: String,
    pub part_line_count: usize,
}

#[component]
pub fn WarehouseReviewList() -> impl IntoView {
    let toast = use_toast();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Expanded quotation detail, fetched lazily per expand.
    let expanded_id = RwSignal::new(None::<String>);
    let expanded_quotation = RwSignal::new(None::<PriceQuotation>);
    let (detail_loading, set_detail_loading) = signal(false);

    // Review note per line, keyed by item id.
    let review_notes = RwSignal::new(std::collections::HashMap::<String, String>::new());

    // Inline part form: creates a missing catalog record, or edits the
    // catalog data of an existing one. Special parts open locked.
    let show_part_form = RwSignal::new(false);
    let part_form_for_item = RwSignal::new(String::new());
    let part_form_id = RwSignal::new(None::<String>);
    let part_form_locked = RwSignal::new(false);
    // Full record when editing, so untouched catalog fields survive the save.
    let part_form_loaded = RwSignal::new(None::<Part>);
    let part_sku = RwSignal::new(String::new());
    let part_name = RwSignal::new(String::new());
    let part_unit = RwSignal::new(String::new());
    let part_purchase_price = RwSignal::new(String::new());
    let part_selling_price = RwSignal::new(String::new());
    let (part_form_errors, set_part_form_errors) = signal::<Vec<String>>(vec![]);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let page = state.with_untracked(|s| s.page);
            let page_size = state.with_untracked(|s| s.page_size);
            let offset = page * page_size;

            let path = format!(
                "/api/quotations/pending-warehouse?limit={}&offset={}",
                page_size, offset
            );
            let response = api_utils::get::<Paginated<PendingQuotationDto>>(&path).await;
            match response.data {
                Some(paginated) => {
                    state.update(|s| {
                        s.items = paginated.items;
                        s.total_count = paginated.total;
                        s.total_pages = paginated.total_pages;
                        s.page = paginated.page;
                        s.page_size = paginated.page_size;
                        s.is_loaded = true;
                    });
                }
                None => set_error.set(Some(
                    response
                        .error
                        .unwrap_or_else(|| api_utils::GENERIC_ERROR.to_string()),
                )),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    // Lazy per-expand fetch; collapsing drops the data.
    let load_detail = move |quotation_id: String| {
        set_detail_loading.set(true);
        expanded_quotation.set(None);
        review_notes.set(std::collections::HashMap::new());
        spawn_local(async move {
            let response =
                api_utils::get::<PriceQuotation>(&format!("/api/quotations/{}", quotation_id)).await;
            match response.data {
                Some(q) => expanded_quotation.set(Some(q)),
                None => {
                    toast.error(
                        response
                            .error
                            .unwrap_or_else(|| api_utils::GENERIC_ERROR.to_string()),
                    );
                }
            }
            set_detail_loading.set(false);
        });
    };

    let toggle_expand = move |quotation_id: String| {
        let currently = expanded_id.get_untracked();
        if currently.as_deref() == Some(quotation_id.as_str()) {
            expanded_id.set(None);
            expanded_quotation.set(None);
        } else {
            expanded_id.set(Some(quotation_id.clone()));
            load_detail(quotation_id);
        }
    };

    let review_line = move |item_id: String, approved: bool| {
        let Some(quotation_id) = expanded_id.get_untracked() else {
            return;
        };
        let note = review_notes
            .get_untracked()
            .get(&item_id)
            .cloned()
            .filter(|n| !n.trim().is_empty());
        let request = ReviewLineRequest {
            item_id,
            approved,
            note,
        };
        spawn_local(async move {
            let response = api_utils::post_no_content(
                &format!("/api/quotations/{}/review-line", quotation_id),
                &request,
            )
            .await;
            match response.error {
                None => {
                    toast.success(if approved { "Đã duyệt" } else { "Đã từ chối" });
                    load_detail(quotation_id);
                }
                Some(e) => toast.error(e),
            }
        });
    };

    let finish_review = move |_| {
        let Some(quotation_id) = expanded_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let response = api_utils::post_no_content(
                &format!("/api/quotations/{}/warehouse-confirm", quotation_id),
                &serde_json::json!({}),
            )
            .await;
            match response.error {
                None => {
                    toast.success("Đã hoàn tất duyệt báo giá");
                    expanded_id.set(None);
                    expanded_quotation.set(None);
                    load_items();
                }
                Some(e) => toast.error(e),
            }
        });
    };

    let open_part_form = move |item_id: String, suggested_name: String| {
        part_form_for_item.set(item_id);
        part_form_id.set(None);
        part_form_locked.set(false);
        part_form_loaded.set(None);
        part_sku.set(String::new());
        part_name.set(suggested_name);
        part_unit.set("cái".to_string());
        part_purchase_price.set(String::new());
        part_selling_price.set(String::new());
        set_part_form_errors.set(vec![]);
        show_part_form.set(true);
    };

    // Edit the catalog record behind an existing line. Special parts come
    // back locked: their catalog fields are not editable during review.
    let open_part_form_for_existing = move |part_id: String| {
        spawn_local(async move {
            let response = api_utils::get::<Part>(&format!("/api/parts/{}", part_id)).await;
            match response.data {
                Some(part) => {
                    part_form_for_item.set(String::new());
                    part_form_id.set(Some(part.id.clone()));
                    part_form_locked.set(part.special_part);
                    part_sku.set(part.sku.clone());
                    part_name.set(part.name.clone());
                    part_unit.set(part.unit.clone());
                    part_purchase_price.set(part.purchase_price.to_string());
                    part_selling_price.set(part.selling_price.to_string());
                    part_form_loaded.set(Some(part));
                    set_part_form_errors.set(vec![]);
                    show_part_form.set(true);
                }
                None => toast.error(
                    response
                        .error
                        .unwrap_or_else(|| api_utils::GENERIC_ERROR.to_string()),
                ),
            }
        });
    };

    // Save the catalog record; when it was opened for a missing line, also
    // approve that line.
    let submit_part_form = move |_| {
        let mut errors: Vec<String> = Vec::new();
        if let Err(e) = require(&part_sku.get_untracked(), "Mã phụ tùng") {
            errors.push(e);
        }
        if let Err(e) = require(&part_name.get_untracked(), "Tên phụ tùng") {
            errors.push(e);
        }
        if !errors.is_empty() {
            set_part_form_errors.set(errors);
            return;
        }

        let base = part_form_loaded.get_untracked();
        let request = UpsertPartRequest {
            id: part_form_id.get_untracked(),
            sku: part_sku.get_untracked(),
            name: part_name.get_untracked(),
            category: base.as_ref().and_then(|p| p.category.clone()),
            market: base.as_ref().and_then(|p| p.market.clone()),
            supplier: base.as_ref().and_then(|p| p.supplier.clone()),
            purchase_price: part_purchase_price
                .get_untracked()
                .parse()
                .unwrap_or(0),
            selling_price: part_selling_price.get_untracked().parse().unwrap_or(0),
            unit: part_unit.get_untracked(),
            universal: base.as_ref().map(|p| p.universal).unwrap_or(true),
            vehicle_brand: base.as_ref().and_then(|p| p.vehicle_brand.clone()),
            vehicle_model: base.as_ref().and_then(|p| p.vehicle_model.clone()),
            special_part: base.as_ref().map(|p| p.special_part).unwrap_or(false),
        };
        let item_id = part_form_for_item.get_untracked();

        spawn_local(async move {
            let response = api_utils::post_no_content("/api/parts/save", &request).await;
            match response.error {
                None => {
                    toast.success("Đã lưu phụ tùng");
                    show_part_form.set(false);
                    if !item_id.is_empty() {
                        review_line(item_id, true);
                    }
                }
                Some(e) => toast.error(e),
            }
        });
    };

    let go_to_page = move |new_page: usize| {
        state.update(|s| s.page = new_page);
        load_items();
    };

    let change_page_size = move |new_size: usize| {
        state.update(|s| {
            s.page_size = new_size;
            s.page = 0;
        });
        load_items();
    };

    view! {
        <PageFrame page_id="a002_price_quotation--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Duyệt báo giá (kho)"</h1>
                    <UiBadge variant="warning".to_string()>
                        {move || state.get().total_count.to_string()}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Đang tải..." } else { "Làm mới" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.get().page)
                                total_pages=Signal::derive(move || state.get().total_pages)
                                total_count=Signal::derive(move || state.get().total_count)
                                page_size=Signal::derive(move || state.get().page_size)
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                    </div>
                </div>

                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Phiếu DV"</TableHeaderCell>
                                <TableHeaderCell>"Khách hàng"</TableHeaderCell>
                                <TableHeaderCell>"Biển số"</TableHeaderCell>
                                <TableHeaderCell>"Ngày gửi"</TableHeaderCell>
                                <TableHeaderCell>"Dòng phụ tùng"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|item| item.id.clone()
                                children=move |item| {
                                    let id_for_expand = item.id.clone();
                                    let id_for_class = item.id.clone();
                                    let created = format_date(&item.created_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <strong>{item.ticket_code.clone()}</strong>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{item.customer_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.license_plate.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.part_line_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| toggle_expand(id_for_expand.clone())
                                                    >
                                                        {move || {
                                                            if expanded_id.get().as_deref() == Some(id_for_class.as_str()) {
                                                                "Thu gọn"
                                                            } else {
                                                                "Xem dòng"
                                                            }
                                                        }}
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                // ── Expanded detail ───────────────────────────────────────
                <Show when=move || expanded_id.get().is_some()>
                    <Card>
                        <div style="padding:var(--spacing-md);display:flex;flex-direction:column;gap:var(--spacing-md);">
                            {move || {
                                if detail_loading.get() {
                                    return view! {
                                        <Flex gap=FlexGap::Small style="align-items:center;">
                                            <Spinner />
                                            <span>"Đang tải dòng báo giá..."</span>
                                        </Flex>
                                    }.into_any();
                                }
                                let Some(q) = expanded_quotation.get() else {
                                    return view! { <div>"Không có dữ liệu"</div> }.into_any();
                                };

                                let part_lines: Vec<_> = q
                                    .items
                                    .iter()
                                    .filter(|i| i.kind_norm() == Some(ItemKind::Part))
                                    .cloned()
                                    .collect();

                                view! {
                                    <div class="table-wrapper">
                                        <Table attr:style="width:100%;">
                                            <TableHeader>
                                                <TableRow>
                                                    <TableHeaderCell>"Phụ tùng"</TableHeaderCell>
                                                    <TableHeaderCell>"SL"</TableHeaderCell>
                                                    <TableHeaderCell>"Đơn giá"</TableHeaderCell>
                                                    <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                                                    <TableHeaderCell>"Ghi chú"</TableHeaderCell>
                                                    <TableHeaderCell>""</TableHeaderCell>
                                                </TableRow>
                                            </TableHeader>
                                            <TableBody>
                                                {part_lines.into_iter().map(|line| {
                                                    let item_id_approve = line.id.clone();
                                                    let item_id_reject = line.id.clone();
                                                    let item_id_note = line.id.clone();
                                                    let item_id_part = line.id.clone();
                                                    let name_for_part = line.name.clone();
                                                    let review = line.review_status.clone();
                                                    let missing_catalog = line.part_id.is_none();
                                                    let part_id_for_edit = line.part_id.clone();

                                                    view! {
                                                        <TableRow>
                                                            <TableCell>
                                                                <TableCellLayout truncate=true>
                                                                    {line.name.clone()}
                                                                    {missing_catalog.then(|| view! {
                                                                        <span style="color:var(--color-error);margin-left:6px;">"(chưa có trong danh mục)"</span>
                                                                    })}
                                                                </TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout>
                                                                    {format!("{} {}", line.quantity, line.unit)}
                                                                </TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout>
                                                                    {format_vnd(line.unit_price)}
                                                                </TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout>
                                                                    <ReviewStatusTag status=Signal::derive(move || review.clone()) />
                                                                </TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout>
                                                                    <input
                                                                        type="text"
                                                                        class="form__input"
                                                                        placeholder="Ghi chú duyệt..."
                                                                        on:input=move |ev| {
                                                                            let v = event_target_value(&ev);
                                                                            let iid = item_id_note.clone();
                                                                            review_notes.update(|notes| {
                                                                                notes.insert(iid, v.clone());
                                                                            });
                                                                        }
                                                                    />
                                                                </TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout>
                                                                    <Flex gap=FlexGap::Small>
                                                                        {if missing_catalog {
                                                                            let iid = item_id_part.clone();
                                                                            let name = name_for_part.clone();
                                                                            view! {
                                                                                <Button
                                                                                    appearance=ButtonAppearance::Secondary
                                                                                    on_click=move |_| open_part_form(iid.clone(), name.clone())
                                                                                >
                                                                                    "Tạo phụ tùng"
                                                                                </Button>
                                                                            }.into_any()
                                                                        } else {
                                                                            let iid = item_id_approve.clone();
                                                                            let pid = part_id_for_edit.clone().unwrap_or_default();
                                                                            view! {
                                                                                <Button
                                                                                    appearance=ButtonAppearance::Primary
                                                                                    on_click=move |_| review_line(iid.clone(), true)
                                                                                >
                                                                                    "Duyệt"
                                                                                </Button>
                                                                                <Button
                                                                                    appearance=ButtonAppearance::Secondary
                                                                                    on_click=move |_| open_part_form_for_existing(pid.clone())
                                                                                >
                                                                                    "Sửa PT"
                                                                                </Button>
                                                                            }.into_any()
                                                                        }}
                                                                        <Button
                                                                            appearance=ButtonAppearance::Subtle
                                                                            on_click=move |_| review_line(item_id_reject.clone(), false)
                                                                        >
                                                                            "Từ chối"
                                                                        </Button>
                                                                    </Flex>
                                                                </TableCellLayout>
                                                            </TableCell>
                                                        </TableRow>
                                                    }
                                                }).collect_view()}
                                            </TableBody>
                                        </Table>
                                    </div>

                                    <Flex gap=FlexGap::Small>
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            on_click=finish_review
                                        >
                                            "Hoàn tất duyệt"
                                        </Button>
                                    </Flex>
                                }.into_any()
                            }}
                        </div>
                    </Card>
                </Show>

                // ── Inline part creation ──────────────────────────────────
                <Show when=move || show_part_form.get()>
                    <div class="modal-overlay" on:click=move |_| show_part_form.set(false)>
                        <div class="modal-content" on:click=|e| e.stop_propagation()>
                            <div class="modal-form">
                                <h2>
                                    {move || {
                                        if part_form_id.get().is_some() {
                                            "Thông tin phụ tùng"
                                        } else {
                                            "Tạo phụ tùng mới"
                                        }
                                    }}
                                </h2>

                                <Show when=move || part_form_locked.get()>
                                    <div class="alert alert--error">
                                        "Phụ tùng đặc thù: thông tin danh mục bị khóa khi duyệt"
                                    </div>
                                </Show>

                                {move || {
                                    let errors = part_form_errors.get();
                                    if errors.is_empty() {
                                        view! { <></> }.into_any()
                                    } else {
                                        view! {
                                            <div class="alert alert--error">
                                                {errors.into_iter().map(|e| view! { <div>{e}</div> }).collect_view()}
                                            </div>
                                        }.into_any()
                                    }
                                }}

                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Mã phụ tùng (SKU)"</Label>
                                    <input
                                        class="form__input"
                                        prop:value=move || part_sku.get()
                                        disabled=move || part_form_locked.get()
                                        on:input=move |ev| part_sku.set(event_target_value(&ev))
                                    />

                                    <Label>"Tên phụ tùng"</Label>
                                    <input
                                        class="form__input"
                                        prop:value=move || part_name.get()
                                        disabled=move || part_form_locked.get()
                                        on:input=move |ev| part_name.set(event_target_value(&ev))
                                    />

                                    <Label>"Đơn vị tính"</Label>
                                    <input
                                        class="form__input"
                                        prop:value=move || part_unit.get()
                                        disabled=move || part_form_locked.get()
                                        on:input=move |ev| part_unit.set(event_target_value(&ev))
                                    />

                                    <Label>"Giá nhập"</Label>
                                    <input
                                        class="form__input"
                                        prop:value=move || part_purchase_price.get()
                                        disabled=move || part_form_locked.get()
                                        on:input=move |ev| part_purchase_price.set(event_target_value(&ev))
                                    />

                                    <Label>"Giá bán"</Label>
                                    <input
                                        class="form__input"
                                        prop:value=move || part_selling_price.get()
                                        disabled=move || part_form_locked.get()
                                        on:input=move |ev| part_selling_price.set(event_target_value(&ev))
                                    />

                                    <Flex gap=FlexGap::Small>
                                        <Show when=move || !part_form_locked.get()>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                on_click=submit_part_form
                                            >
                                                {move || {
                                                    if part_form_id.get().is_some() {
                                                        "Lưu phụ tùng"
                                                    } else {
                                                        "Tạo và duyệt dòng"
                                                    }
                                                }}
                                            </Button>
                                        </Show>
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| show_part_form.set(false)
                                        >
                                            "Đóng"
                                        </Button>
                                    </Flex>
                                </Flex>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
