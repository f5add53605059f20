pub mod state;

use self::state::create_state;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::api_utils;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use crate::shared::page_frame::PageFrame;
use contracts::domain::a003_part::Part;
use contracts::shared::money::format_vnd;
use contracts::shared::Paginated;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn PartList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_filter_expanded, set_is_filter_expanded) = signal(false);

    let open_detail = move |id: String, sku: String| {
        tabs_store.open_tab(
            &format!("a003_part_detail_{}", id),
            &detail_tab_label(tab_label_for_key("a003_part"), &sku),
        );
    };

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let search_query_val = state.with_untracked(|s| s.search_query.clone());
            let category_val = state.with_untracked(|s| s.category.clone());
            let supplier_val = state.with_untracked(|s| s.supplier.clone());
            let page = state.with_untracked(|s| s.page);
            let page_size = state.with_untracked(|s| s.page_size);
            let sort_field = state.with_untracked(|s| s.sort_field.clone());
            let sort_ascending = state.with_untracked(|s| s.sort_ascending);
            let offset = page * page_size;

            let mut path = format!(
                "/api/parts/list?limit={}&offset={}&sort_by={}&sort_desc={}",
                page_size, offset, sort_field, !sort_ascending
            );
            if !search_query_val.is_empty() {
                path.push_str(&format!(
                    "&search_query={}",
                    urlencoding::encode(&search_query_val)
                ));
            }
            if !category_val.is_empty() {
                path.push_str(&format!("&category={}", urlencoding::encode(&category_val)));
            }
            if !supplier_val.is_empty() {
                path.push_str(&format!("&supplier={}", urlencoding::encode(&supplier_val)));
            }

            let response = api_utils::get::<Paginated<Part>>(&path).await;
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

    let search_query = RwSignal::new(state.get_untracked().search_query.clone());
    let category = RwSignal::new(state.get_untracked().category.clone());
    let supplier = RwSignal::new(state.get_untracked().supplier.clone());

    Effect::new(move || {
        let v = search_query.get();
        untrack(move || state.update(|s| s.search_query = v));
    });
    Effect::new(move || {
        let v = category.get();
        untrack(move || state.update(|s| s.category = v));
    });
    Effect::new(move || {
        let v = supplier.get();
        untrack(move || state.update(|s| s.supplier = v));
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

    view! {
        <PageFrame page_id="a003_part--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Phụ tùng"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.get().total_count.to_string()}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs_store.open_tab("a003_part_new", "Phụ tùng mới")
                    >
                        "Thêm phụ tùng"
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
                                <div style="flex: 1; max-width: 280px;">
                                    <Flex vertical=true gap=FlexGap::Small>
                                        <Label>"Tìm kiếm:"</Label>
                                        <Input value=search_query placeholder="SKU, tên phụ tùng..." />
                                    </Flex>
                                </div>
                                <div style="max-width: 200px;">
                                    <Flex vertical=true gap=FlexGap::Small>
                                        <Label>"Danh mục:"</Label>
                                        <Input value=category />
                                    </Flex>
                                </div>
                                <div style="max-width: 200px;">
                                    <Flex vertical=true gap=FlexGap::Small>
                                        <Label>"Nhà cung cấp:"</Label>
                                        <Input value=supplier />
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
                    <Table attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=120.0>
                                    <div class="table__sortable-header" style="cursor: pointer;" on:click=move |_| toggle_sort("sku")>
                                        "SKU"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort_field, "sku"))>
                                            {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "sku", state.with(|s| s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>
                                    <div class="table__sortable-header" style="cursor: pointer;" on:click=move |_| toggle_sort("name")>
                                        "Tên"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort_field, "name"))>
                                            {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "name", state.with(|s| s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Danh mục"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Nhà cung cấp"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Giá bán"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Tồn"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Giữ chỗ"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Phạm vi"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|item| item.id.clone()
                                children=move |item| {
                                    let id_for_link = item.id.clone();
                                    let sku_for_link = item.sku.clone();
                                    let sku_text = item.sku.clone();
                                    let low_stock = item.available_quantity() <= 0.0;
                                    let scope = if item.universal {
                                        "Mọi dòng xe".to_string()
                                    } else {
                                        format!(
                                            "{} {}",
                                            item.vehicle_brand.clone().unwrap_or_default(),
                                            item.vehicle_model.clone().unwrap_or_default()
                                        )
                                    };

                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(id_for_link.clone(), sku_for_link.clone());
                                                        }
                                                    >
                                                        {sku_text}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.name.clone()}
                                                    {item.special_part.then(|| view! {
                                                        <UiBadge variant="warning".to_string() class="badge--inline".to_string()>
                                                            "Đặc thù"
                                                        </UiBadge>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.category.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.supplier.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-variant-numeric: tabular-nums;">
                                                        {format_vnd(item.selling_price)}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style=move || {
                                                        if low_stock {
                                                            "color: var(--color-error); font-weight: 600;"
                                                        } else {
                                                            "font-variant-numeric: tabular-nums;"
                                                        }
                                                    }>
                                                        {item.stock_quantity}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {item.reserved_quantity}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {scope}
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
        </PageFrame>
    }
}
