pub mod state;

use self::state::create_state;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::layout::Modal;
use crate::layout::ModalService;
use crate::shared::api_utils;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_tag::TicketStatusTag;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use crate::shared::page_frame::PageFrame;
use crate::shared::toast::use_toast;
use crate::system::auth::claims;
use contracts::domain::a001_service_ticket::{CreateTicketRequest, TicketSummary};
use contracts::enums::TicketStatus;
use contracts::shared::validation::{is_valid_license_plate, is_valid_phone, require};
use contracts::shared::Paginated;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn TicketList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal = use_context::<ModalService>().expect("ModalService not found");
    let toast = use_toast();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_filter_expanded, set_is_filter_expanded) = signal(false);

    let open_detail = move |id: String, code: String| {
        tabs_store.open_tab(
            &format!("a001_service_ticket_detail_{}", id),
            &detail_tab_label(tab_label_for_key("a001_service_ticket"), &code),
        );
    };

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let status_val = state.with_untracked(|s| s.status_filter.clone());
            let search_query_val = state.with_untracked(|s| s.search_query.clone());
            let page = state.with_untracked(|s| s.page);
            let page_size = state.with_untracked(|s| s.page_size);
            let sort_field = state.with_untracked(|s| s.sort_field.clone());
            let sort_ascending = state.with_untracked(|s| s.sort_ascending);
            let offset = page * page_size;

            let mut path = format!(
                "/api/tickets/list?limit={}&offset={}&sort_by={}&sort_desc={}",
                page_size, offset, sort_field, !sort_ascending
            );
            if !status_val.is_empty() {
                path.push_str(&format!("&status={}", urlencoding::encode(&status_val)));
            }
            if !search_query_val.is_empty() {
                path.push_str(&format!(
                    "&search_query={}",
                    urlencoding::encode(&search_query_val)
                ));
            }

            let response = api_utils::get::<Paginated<TicketSummary>>(&path).await;
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

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    let search_query = RwSignal::new(state.get_untracked().search_query.clone());

    Effect::new(move || {
        let v = search_query.get();
        untrack(move || {
            state.update(|s| s.search_query = v);
        });
    });

    let active_filters_count = Signal::derive(move || {
        let s = state.get();
        let mut count = 0;
        if !s.status_filter.is_empty() {
            count += 1;
        }
        if !s.search_query.is_empty() {
            count += 1;
        }
        count
    });

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
            s.page = 0;
        });
        load_items();
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

    // ── Create ticket form (modal) ────────────────────────────────────────
    let new_customer_name = RwSignal::new(String::new());
    let new_customer_phone = RwSignal::new(String::new());
    let new_license_plate = RwSignal::new(String::new());
    let new_vehicle_brand = RwSignal::new(String::new());
    let new_vehicle_model = RwSignal::new(String::new());
    let new_note = RwSignal::new(String::new());
    let (form_errors, set_form_errors) = signal::<Vec<String>>(vec![]);
    let (saving, set_saving) = signal(false);

    let submit_new_ticket = move |_| {
        let mut errors: Vec<String> = Vec::new();
        let name = new_customer_name.get_untracked();
        let phone = new_customer_phone.get_untracked();
        let plate = new_license_plate.get_untracked();

        if let Err(e) = require(&name, "Tên khách hàng") {
            errors.push(e);
        }
        if let Err(e) = require(&phone, "Số điện thoại") {
            errors.push(e);
        } else if !is_valid_phone(&phone) {
            errors.push("Số điện thoại không hợp lệ".to_string());
        }
        if let Err(e) = require(&plate, "Biển số xe") {
            errors.push(e);
        } else if !is_valid_license_plate(&plate) {
            errors.push("Biển số xe không hợp lệ".to_string());
        }

        if !errors.is_empty() {
            set_form_errors.set(errors);
            return;
        }
        set_form_errors.set(vec![]);
        set_saving.set(true);

        let request = CreateTicketRequest {
            customer_name: name,
            customer_phone: phone,
            license_plate: plate,
            vehicle_brand: Some(new_vehicle_brand.get_untracked()).filter(|v| !v.is_empty()),
            vehicle_model: Some(new_vehicle_model.get_untracked()).filter(|v| !v.is_empty()),
            note: Some(new_note.get_untracked()).filter(|v| !v.is_empty()),
            created_by: claims::employee_id_from_token().unwrap_or_default(),
        };

        spawn_local(async move {
            let response = api_utils::post_no_content("/api/tickets/create", &request).await;
            set_saving.set(false);
            match response.error {
                None => {
                    toast.success("Đã tạo phiếu dịch vụ");
                    modal.hide();
                    new_customer_name.set(String::new());
                    new_customer_phone.set(String::new());
                    new_license_plate.set(String::new());
                    new_vehicle_brand.set(String::new());
                    new_vehicle_model.set(String::new());
                    new_note.set(String::new());
                    load_items();
                }
                Some(e) => {
                    toast.error(e);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a001_service_ticket--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Phiếu dịch vụ"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.get().total_count.to_string()}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| modal.show()
                    >
                        "Tạo phiếu"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div
                            class="filter-panel-header__left"
                            on:click=move |_| set_is_filter_expanded.update(|e| *e = !*e)
                        >
                            {icon("filter")}
                            <span class="filter-panel__title">"Bộ lọc"</span>
                            {move || {
                                let count = active_filters_count.get();
                                if count > 0 {
                                    view! { <span class="filter-panel__badge">{count}</span> }.into_any()
                                } else {
                                    view! { <></> }.into_any()
                                }
                            }}
                        </div>

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

                        <div class="filter-panel-header__right">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| load_items()
                                disabled=Signal::derive(move || loading.get())
                            >
                                {move || if loading.get() { "Đang tải..." } else { "Làm mới" }}
                            </Button>
                        </div>
                    </div>

                    <Show when=move || is_filter_expanded.get()>
                        <div class="filter-panel-content">
                            <Flex gap=FlexGap::Small align=FlexAlign::End>
                                <div style="min-width: 220px;">
                                    <Flex vertical=true gap=FlexGap::Small>
                                        <Label>"Trạng thái:"</Label>
                                        <select
                                            class="page-size-select"
                                            on:change=move |ev| {
                                                state.update(|s| {
                                                    s.status_filter = event_target_value(&ev);
                                                    s.page = 0;
                                                });
                                                load_items();
                                            }
                                        >
                                            <option value="">"Tất cả"</option>
                                            {TicketStatus::all().into_iter().map(|st| {
                                                view! {
                                                    <option value=st.code()>{st.label()}</option>
                                                }
                                            }).collect_view()}
                                        </select>
                                    </Flex>
                                </div>

                                <div style="flex: 1; max-width: 320px;">
                                    <Flex vertical=true gap=FlexGap::Small>
                                        <Label>"Tìm kiếm:"</Label>
                                        <Input
                                            value=search_query
                                            placeholder="Mã phiếu, khách hàng, biển số..."
                                        />
                                    </Flex>
                                </div>

                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| {
                                        state.update(|s| s.page = 0);
                                        load_items();
                                    }
                                    disabled=Signal::derive(move || loading.get())
                                >
                                    "Tìm"
                                </Button>
                            </Flex>
                        </div>
                    </Show>
                </div>

                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <div class="table-wrapper">
                    <Table attr:id="a001-service-ticket-table" attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=130.0>
                                    <div class="table__sortable-header" style="cursor: pointer;" on:click=move |_| toggle_sort("code")>
                                        "Mã phiếu"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort_field, "code"))>
                                            {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "code", state.with(|s| s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>

                                <TableHeaderCell resizable=false min_width=200.0>
                                    <div class="table__sortable-header" style="cursor: pointer;" on:click=move |_| toggle_sort("customer_name")>
                                        "Khách hàng"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort_field, "customer_name"))>
                                            {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "customer_name", state.with(|s| s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>

                                <TableHeaderCell resizable=false min_width=120.0>
                                    "Biển số"
                                </TableHeaderCell>

                                <TableHeaderCell resizable=false min_width=130.0>
                                    <div class="table__sortable-header" style="cursor: pointer;" on:click=move |_| toggle_sort("received_at")>
                                        "Ngày nhận"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort_field, "received_at"))>
                                            {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "received_at", state.with(|s| s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>

                                <TableHeaderCell resizable=false min_width=130.0>
                                    "Hẹn giao xe"
                                </TableHeaderCell>

                                <TableHeaderCell resizable=false min_width=150.0>
                                    "Trạng thái"
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|item| item.id.clone()
                                children=move |item| {
                                    let item_id_for_link = item.id.clone();
                                    let code_for_link = item.code.clone();
                                    let code_text = item.code.clone();
                                    let status = item.status.clone();
                                    let received = format_date(&item.received_at);
                                    let delivery = item
                                        .expected_delivery_at
                                        .as_deref()
                                        .map(format_date)
                                        .unwrap_or_else(|| "—".to_string());

                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(item_id_for_link.clone(), code_for_link.clone());
                                                        }
                                                    >
                                                        {code_text}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.customer_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout>
                                                    {item.license_plate.clone()}
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout>
                                                    {received}
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout>
                                                    {delivery}
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout>
                                                    <TicketStatusTag status=Signal::derive(move || status.clone()) />
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            <Modal>
                <div class="modal-form">
                    <h2>"Tạo phiếu dịch vụ"</h2>

                    {move || {
                        let errors = form_errors.get();
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
                        <Label>"Tên khách hàng"</Label>
                        <Input value=new_customer_name placeholder="Nguyễn Văn A" />

                        <Label>"Số điện thoại"</Label>
                        <Input value=new_customer_phone placeholder="0987654321" />

                        <Label>"Biển số xe"</Label>
                        <Input value=new_license_plate placeholder="30F-123.45" />

                        <Label>"Hãng xe"</Label>
                        <Input value=new_vehicle_brand placeholder="Toyota" />

                        <Label>"Dòng xe"</Label>
                        <Input value=new_vehicle_model placeholder="Vios" />

                        <Label>"Ghi chú"</Label>
                        <Input value=new_note />

                        <Flex gap=FlexGap::Small>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=submit_new_ticket
                                disabled=Signal::derive(move || saving.get())
                            >
                                {move || if saving.get() { "Đang lưu..." } else { "Tạo phiếu" }}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| modal.hide()
                            >
                                "Hủy"
                            </Button>
                        </Flex>
                    </Flex>
                </div>
            </Modal>
        </PageFrame>
    }
}
