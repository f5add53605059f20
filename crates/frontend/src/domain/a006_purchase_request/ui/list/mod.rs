pub mod state;

use self::state::create_state;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::api_utils;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a006_purchase_request::PurchaseRequest;
use contracts::enums::ReviewStatus;
use contracts::shared::Paginated;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn PurchaseRequestList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let open_detail = move |id: String, code: String| {
        tabs_store.open_tab(
            &format!("a006_purchase_request_detail_{}", id),
            &detail_tab_label(tab_label_for_key("a006_purchase_request"), &code),
        );
    };

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let page = state.with_untracked(|s| s.page);
            let page_size = state.with_untracked(|s| s.page_size);
            let search_val = state.with_untracked(|s| s.search_query.clone());
            let offset = page * page_size;

            let mut path = format!(
                "/api/purchase-requests/list?limit={}&offset={}",
                page_size, offset
            );
            if !search_val.is_empty() {
                path.push_str(&format!("&search_query={}", urlencoding::encode(&search_val)));
            }

            let response = api_utils::get::<Paginated<PurchaseRequest>>(&path).await;
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

    let search_query = RwSignal::new(String::new());
    Effect::new(move || {
        let v = search_query.get();
        untrack(move || state.update(|s| s.search_query = v));
    });

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
        <PageFrame page_id="a006_purchase_request--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Yêu cầu mua hàng"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.get().total_count.to_string()}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| tabs_store.open_tab("u501_replenishment", tab_label_for_key("u501_replenishment"))
                    >
                        "Gợi ý nhập hàng"
                    </Button>
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
                        <div class="filter-panel-header__left">
                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                <Input value=search_query placeholder="Mã yêu cầu, lý do..." />
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| {
                                        state.update(|s| s.page = 0);
                                        load_items();
                                    }
                                >
                                    "Tìm"
                                </Button>
                            </Flex>
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
                        <div class="filter-panel-header__right"></div>
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
                                <TableHeaderCell>"Mã yêu cầu"</TableHeaderCell>
                                <TableHeaderCell>"Lý do"</TableHeaderCell>
                                <TableHeaderCell>"Số dòng"</TableHeaderCell>
                                <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                                <TableHeaderCell>"Người tạo"</TableHeaderCell>
                                <TableHeaderCell>"Thời điểm"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|item| item.id.clone()
                                children=move |item| {
                                    let id_for_link = item.id.clone();
                                    let code_for_link = item.code.clone();
                                    let code_text = item.code.clone();
                                    let review = ReviewStatus::normalize(&item.status);
                                    let (variant, label) = review
                                        .map(|r| (r.badge_variant(), r.label()))
                                        .unwrap_or(("neutral", "—"));
                                    let created = format_datetime(&item.created_at);

                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(id_for_link.clone(), code_for_link.clone());
                                                        }
                                                    >
                                                        {code_text}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{item.reason.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.lines.len()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <UiBadge variant=variant.to_string()>{label}</UiBadge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {item.created_by.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
