//! Stock export list.
//!
//! Export tickets record parts leaving the warehouse against a confirmed
//! quotation. Lines are fetched lazily on expand and dropped on collapse.

pub mod state;

use self::state::create_state;
use crate::shared::api_utils;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::PageFrame;
use crate::shared::toast::use_toast;
use contracts::domain::a004_stock_export::{StockExport, StockExportLine};
use contracts::shared::Paginated;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn StockExportList() -> impl IntoView {
    let toast = use_toast();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let expanded_id = RwSignal::new(None::<String>);
    let expanded_lines = RwSignal::new(Vec::<StockExportLine>::new());
    let (lines_loading, set_lines_loading) = signal(false);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let page = state.with_untracked(|s| s.page);
            let page_size = state.with_untracked(|s| s.page_size);
            let search_val = state.with_untracked(|s| s.search_query.clone());
            let offset = page * page_size;

            let mut path = format!(
                "/api/stock-exports/list?limit={}&offset={}",
                page_size, offset
            );
            if !search_val.is_empty() {
                path.push_str(&format!("&search_query={}", urlencoding::encode(&search_val)));
            }

            let response = api_utils::get::<Paginated<StockExport>>(&path).await;
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

    let load_lines = move |export_id: String| {
        set_lines_loading.set(true);
        expanded_lines.set(vec![]);
        spawn_local(async move {
            let response = api_utils::get::<Vec<StockExportLine>>(&format!(
                "/api/stock-exports/{}/lines",
                export_id
            ))
            .await;
            match response.data {
                Some(lines) => expanded_lines.set(lines),
                None => toast.error(
                    response
                        .error
                        .unwrap_or_else(|| api_utils::GENERIC_ERROR.to_string()),
                ),
            }
            set_lines_loading.set(false);
        });
    };

    let toggle_expand = move |export_id: String| {
        let currently = expanded_id.get_untracked();
        if currently.as_deref() == Some(export_id.as_str()) {
            expanded_id.set(None);
            expanded_lines.set(vec![]);
        } else {
            expanded_id.set(Some(export_id.clone()));
            load_lines(export_id);
        }
    };

    let complete_export = move |export_id: String| {
        spawn_local(async move {
            let response = api_utils::post_no_content(
                &format!("/api/stock-exports/{}/complete", export_id),
                &serde_json::json!({}),
            )
            .await;
            match response.error {
                None => {
                    toast.success("Đã xuất kho");
                    expanded_id.set(None);
                    load_items();
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
        <PageFrame page_id="a004_stock_export--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Phiếu xuất kho"</h1>
                    <UiBadge variant="primary".to_string()>
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
                        <div class="filter-panel-header__left">
                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                <Input value=search_query placeholder="Mã phiếu, báo giá..." />
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
                                <TableHeaderCell>"Mã phiếu"</TableHeaderCell>
                                <TableHeaderCell>"Phiếu DV"</TableHeaderCell>
                                <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                                <TableHeaderCell>"Người tạo"</TableHeaderCell>
                                <TableHeaderCell>"Thời điểm"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|item| item.id.clone()
                                children=move |item| {
                                    let id_for_expand = item.id.clone();
                                    let id_for_label = item.id.clone();
                                    let id_for_complete = item.id.clone();
                                    let is_done = item.status.to_uppercase() == "COMPLETED";
                                    let status_variant = if is_done { "success" } else { "warning" };
                                    let status_label = if is_done { "Đã xuất" } else { "Chờ xuất" };
                                    let created = format_datetime(&item.created_at);

                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <strong>{item.code.clone()}</strong>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {item.ticket_code.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <UiBadge variant=status_variant.to_string()>{status_label}</UiBadge>
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
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Flex gap=FlexGap::Small>
                                                        <Button
                                                            appearance=ButtonAppearance::Secondary
                                                            on_click=move |_| toggle_expand(id_for_expand.clone())
                                                        >
                                                            {move || {
                                                                if expanded_id.get().as_deref() == Some(id_for_label.as_str()) {
                                                                    "Thu gọn"
                                                                } else {
                                                                    "Xem dòng"
                                                                }
                                                            }}
                                                        </Button>
                                                        {(!is_done).then(|| {
                                                            let id_val = id_for_complete.clone();
                                                            view! {
                                                                <Button
                                                                    appearance=ButtonAppearance::Primary
                                                                    on_click=move |_| complete_export(id_val.clone())
                                                                >
                                                                    "Xuất kho"
                                                                </Button>
                                                            }
                                                        })}
                                                    </Flex>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || expanded_id.get().is_some()>
                    <Card>
                        <div style="padding:var(--spacing-md);">
                            {move || {
                                if lines_loading.get() {
                                    return view! {
                                        <Flex gap=FlexGap::Small style="align-items:center;">
                                            <Spinner />
                                            <span>"Đang tải dòng..."</span>
                                        </Flex>
                                    }.into_any();
                                }
                                let lines = expanded_lines.get();
                                if lines.is_empty() {
                                    return view! {
                                        <div style="color:var(--color-text-secondary);">"Không có dòng"</div>
                                    }.into_any();
                                }
                                view! {
                                    <div class="table-wrapper">
                                        <Table attr:style="width:100%;">
                                            <TableHeader>
                                                <TableRow>
                                                    <TableHeaderCell>"SKU"</TableHeaderCell>
                                                    <TableHeaderCell>"Phụ tùng"</TableHeaderCell>
                                                    <TableHeaderCell>"Yêu cầu"</TableHeaderCell>
                                                    <TableHeaderCell>"Đã xuất"</TableHeaderCell>
                                                </TableRow>
                                            </TableHeader>
                                            <TableBody>
                                                {lines.into_iter().map(|line| {
                                                    let short = line.exported_quantity < line.requested_quantity;
                                                    let requested_display = format!("{} {}", line.requested_quantity, line.unit);
                                                    let exported_display = format!("{} {}", line.exported_quantity, line.unit);
                                                    view! {
                                                        <TableRow>
                                                            <TableCell>
                                                                <TableCellLayout>{line.part_sku.clone()}</TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout truncate=true>{line.part_name.clone()}</TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout>
                                                                    {requested_display}
                                                                </TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout>
                                                                    <span style=move || if short { "color: var(--color-error);" } else { "" }>
                                                                        {exported_display}
                                                                    </span>
                                                                </TableCellLayout>
                                                            </TableCell>
                                                        </TableRow>
                                                    }
                                                }).collect_view()}
                                            </TableBody>
                                        </Table>
                                    </div>
                                }.into_any()
                            }}
                        </div>
                    </Card>
                </Show>
            </div>
        </PageFrame>
    }
}
