use crate::shared::api_utils;
use crate::shared::page_frame::PageFrame;
use crate::shared::toast::use_toast;
use contracts::domain::a003_part::{Part, UpsertPartRequest};
use contracts::domain::a008_reference::{Market, Supplier, Unit};
use contracts::shared::validation::require;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Part editor. `id = None` creates a new catalog record.
#[component]
pub fn PartDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let stored_id = StoredValue::new(id.clone());
    let is_new = id.is_none();

    let (loading, set_loading) = signal(!is_new);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (form_errors, set_form_errors) = signal::<Vec<String>>(vec![]);

    let sku = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let market = RwSignal::new(String::new());
    let supplier = RwSignal::new(String::new());
    let purchase_price = RwSignal::new(String::new());
    let selling_price = RwSignal::new(String::new());
    let unit = RwSignal::new("cái".to_string());
    let universal = RwSignal::new(true);
    let vehicle_brand = RwSignal::new(String::new());
    let vehicle_model = RwSignal::new(String::new());
    let special_part = RwSignal::new(false);

    // Read-only inventory counters, shown for existing parts.
    let (stock_quantity, set_stock_quantity) = signal(0.0f64);
    let (reserved_quantity, set_reserved_quantity) = signal(0.0f64);

    // Reference catalogs feeding the datalist suggestions.
    let units = RwSignal::new(Vec::<Unit>::new());
    let markets = RwSignal::new(Vec::<Market>::new());
    let suppliers = RwSignal::new(Vec::<Supplier>::new());

    Effect::new(move || {
        spawn_local(async move {
            if let Some(data) = api_utils::get::<Vec<Unit>>("/api/units").await.data {
                units.set(data);
            }
            if let Some(data) = api_utils::get::<Vec<Market>>("/api/markets").await.data {
                markets.set(data);
            }
            if let Some(data) = api_utils::get::<Vec<Supplier>>("/api/suppliers").await.data {
                suppliers.set(data);
            }
        });
    });

    Effect::new(move || {
        let Some(id_val) = stored_id.get_value() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let response = api_utils::get::<Part>(&format!("/api/parts/{}", id_val)).await;
            match response.data {
                Some(part) => {
                    sku.set(part.sku);
                    name.set(part.name);
                    category.set(part.category.unwrap_or_default());
                    market.set(part.market.unwrap_or_default());
                    supplier.set(part.supplier.unwrap_or_default());
                    purchase_price.set(part.purchase_price.to_string());
                    selling_price.set(part.selling_price.to_string());
                    unit.set(part.unit);
                    universal.set(part.universal);
                    vehicle_brand.set(part.vehicle_brand.unwrap_or_default());
                    vehicle_model.set(part.vehicle_model.unwrap_or_default());
                    special_part.set(part.special_part);
                    set_stock_quantity.set(part.stock_quantity);
                    set_reserved_quantity.set(part.reserved_quantity);
                }
                None => set_error.set(Some(
                    response
                        .error
                        .unwrap_or_else(|| api_utils::GENERIC_ERROR.to_string()),
                )),
            }
            set_loading.set(false);
        });
    });

    let save = move |_| {
        let mut errors: Vec<String> = Vec::new();
        if let Err(e) = require(&sku.get_untracked(), "Mã phụ tùng") {
            errors.push(e);
        }
        if let Err(e) = require(&name.get_untracked(), "Tên phụ tùng") {
            errors.push(e);
        }
        if let Err(e) = require(&unit.get_untracked(), "Đơn vị tính") {
            errors.push(e);
        }
        if !universal.get_untracked() && vehicle_brand.get_untracked().trim().is_empty() {
            errors.push("Phụ tùng không dùng chung phải có hãng xe".to_string());
        }
        if !errors.is_empty() {
            set_form_errors.set(errors);
            return;
        }
        set_form_errors.set(vec![]);
        set_saving.set(true);

        let request = UpsertPartRequest {
            id: stored_id.get_value(),
            sku: sku.get_untracked(),
            name: name.get_untracked(),
            category: Some(category.get_untracked()).filter(|v| !v.is_empty()),
            market: Some(market.get_untracked()).filter(|v| !v.is_empty()),
            supplier: Some(supplier.get_untracked()).filter(|v| !v.is_empty()),
            purchase_price: purchase_price.get_untracked().parse().unwrap_or(0),
            selling_price: selling_price.get_untracked().parse().unwrap_or(0),
            unit: unit.get_untracked(),
            universal: universal.get_untracked(),
            vehicle_brand: Some(vehicle_brand.get_untracked()).filter(|v| !v.is_empty()),
            vehicle_model: Some(vehicle_model.get_untracked()).filter(|v| !v.is_empty()),
            special_part: special_part.get_untracked(),
        };

        spawn_local(async move {
            let response = api_utils::post_no_content("/api/parts/save", &request).await;
            set_saving.set(false);
            match response.error {
                None => {
                    toast.success("Đã lưu phụ tùng");
                    on_saved.run(());
                }
                Some(e) => toast.error(e),
            }
        });
    };

    view! {
        <PageFrame page_id="a003_part--detail" category="detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {if is_new { "Phụ tùng mới" } else { "Phụ tùng" }}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_cancel.run(())
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

                    view! {
                        <div style="padding:var(--spacing-lg);max-width:680px;">
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

                            <Card>
                                <div style="padding:var(--spacing-md);">
                                    <Flex vertical=true gap=FlexGap::Small>
                                        <Label>"Mã phụ tùng (SKU)"</Label>
                                        <Input value=sku placeholder="LOC-DAU-01" />

                                        <Label>"Tên phụ tùng"</Label>
                                        <Input value=name placeholder="Lọc dầu động cơ" />

                                        <Label>"Danh mục"</Label>
                                        <Input value=category placeholder="Bảo dưỡng" />

                                        <Label>"Xuất xứ"</Label>
                                        <input
                                            class="form__input"
                                            list="part-markets"
                                            placeholder="OEM / Chính hãng"
                                            prop:value=move || market.get()
                                            on:input=move |ev| market.set(event_target_value(&ev))
                                        />
                                        <datalist id="part-markets">
                                            {move || markets.get().into_iter().map(|m| {
                                                view! { <option value=m.name></option> }
                                            }).collect_view()}
                                        </datalist>

                                        <Label>"Nhà cung cấp"</Label>
                                        <input
                                            class="form__input"
                                            list="part-suppliers"
                                            prop:value=move || supplier.get()
                                            on:input=move |ev| supplier.set(event_target_value(&ev))
                                        />
                                        <datalist id="part-suppliers">
                                            {move || suppliers.get().into_iter().map(|s| {
                                                view! { <option value=s.name></option> }
                                            }).collect_view()}
                                        </datalist>

                                        <Label>"Đơn vị tính"</Label>
                                        <input
                                            class="form__input"
                                            list="part-units"
                                            prop:value=move || unit.get()
                                            on:input=move |ev| unit.set(event_target_value(&ev))
                                        />
                                        <datalist id="part-units">
                                            {move || units.get().into_iter().map(|u| {
                                                view! { <option value=u.name></option> }
                                            }).collect_view()}
                                        </datalist>

                                        <Label>"Giá nhập"</Label>
                                        <Input value=purchase_price />

                                        <Label>"Giá bán"</Label>
                                        <Input value=selling_price />

                                        <label class="form__checkbox">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || universal.get()
                                                on:change=move |ev| universal.set(event_target_checked(&ev))
                                            />
                                            " Dùng chung cho mọi dòng xe"
                                        </label>

                                        <Show when=move || !universal.get()>
                                            <Label>"Hãng xe"</Label>
                                            <Input value=vehicle_brand placeholder="Toyota" />

                                            <Label>"Dòng xe"</Label>
                                            <Input value=vehicle_model placeholder="Vios" />
                                        </Show>

                                        <label class="form__checkbox">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || special_part.get()
                                                on:change=move |ev| special_part.set(event_target_checked(&ev))
                                            />
                                            " Phụ tùng đặc thù (khóa thông tin khi kho duyệt)"
                                        </label>

                                        {(!is_new).then(|| view! {
                                            <div class="form__readonly-row">
                                                <span>"Tồn kho: " <strong>{move || stock_quantity.get()}</strong></span>
                                                <span>"Giữ chỗ: " <strong>{move || reserved_quantity.get()}</strong></span>
                                            </div>
                                        })}

                                        <Flex gap=FlexGap::Small>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                on_click=save
                                                disabled=Signal::derive(move || saving.get())
                                            >
                                                {move || if saving.get() { "Đang lưu..." } else { "Lưu" }}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                on_click=move |_| on_cancel.run(())
                                            >
                                                "Hủy"
                                            </Button>
                                        </Flex>
                                    </Flex>
                                </div>
                            </Card>
                        </div>
                    }.into_any()
                }}
            </div>
        </PageFrame>
    }
}
