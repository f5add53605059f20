use crate::shared::api_utils;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a006_purchase_request::PurchaseRequest;
use contracts::enums::ReviewStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn PurchaseRequestDetail(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let stored_id = StoredValue::new(id);

    let (request, set_request) = signal(None::<PurchaseRequest>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let load_request = move || {
        let id_val = stored_id.get_value();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let response =
                api_utils::get::<PurchaseRequest>(&format!("/api/purchase-requests/{}", id_val))
                    .await;
            match response.data {
                Some(data) => set_request.set(Some(data)),
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
        load_request();
    });

    view! {
        <PageFrame page_id="a006_purchase_request--detail" category="detail">
            <div class="page__header">
                <div class="page__header-left">
                    {move || {
                        let title = request.get()
                            .map(|r| format!("Yêu cầu mua {}", r.code))
                            .unwrap_or_else(|| "Yêu cầu mua hàng".to_string());
                        view! { <h1 class="page__title">{title}</h1> }
                    }}
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
                    let Some(r) = request.get() else {
                        return view! { <div>"Không có dữ liệu"</div> }.into_any();
                    };

                    let review = ReviewStatus::normalize(&r.status);
                    let (variant, label) = review
                        .map(|v| (v.badge_variant(), v.label()))
                        .unwrap_or(("neutral", "—"));
                    let lines = r.lines.clone();

                    view! {
                        <div style="padding:var(--spacing-lg);display:flex;flex-direction:column;gap:var(--spacing-lg);">
                            <Card>
                                <div style="padding:var(--spacing-md);display:grid;grid-template-columns:max-content 1fr;gap:var(--spacing-sm) var(--spacing-xl);align-items:baseline;">
                                    <span class="form__label">"Mã yêu cầu:"</span>
                                    <strong>{r.code.clone()}</strong>

                                    <span class="form__label">"Lý do:"</span>
                                    <span>{r.reason.clone()}</span>

                                    <span class="form__label">"Trạng thái:"</span>
                                    <span><UiBadge variant=variant.to_string()>{label}</UiBadge></span>

                                    <span class="form__label">"Người tạo:"</span>
                                    <span>{r.created_by.clone().unwrap_or_else(|| "—".to_string())}</span>

                                    <span class="form__label">"Thời điểm:"</span>
                                    <span>{format_datetime(&r.created_at)}</span>
                                </div>
                            </Card>

                            <Card>
                                <div style="padding:var(--spacing-md);">
                                    <h3 style="margin:0 0 var(--spacing-md) 0;font-size:var(--font-size-md);">"Dòng yêu cầu"</h3>
                                    <div class="table-wrapper">
                                        <Table attr:style="width:100%;">
                                            <TableHeader>
                                                <TableRow>
                                                    <TableHeaderCell>"SKU"</TableHeaderCell>
                                                    <TableHeaderCell>"Phụ tùng"</TableHeaderCell>
                                                    <TableHeaderCell>"SL gợi ý"</TableHeaderCell>
                                                    <TableHeaderCell>"SL yêu cầu"</TableHeaderCell>
                                                </TableRow>
                                            </TableHeader>
                                            <TableBody>
                                                {lines.into_iter().map(|line| {
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
                                                                    {line.suggested_quantity
                                                                        .map(|q| q.to_string())
                                                                        .unwrap_or_else(|| "—".to_string())}
                                                                </TableCellLayout>
                                                            </TableCell>
                                                            <TableCell>
                                                                <TableCellLayout>
                                                                    <strong>{format!("{} {}", line.requested_quantity, line.unit)}</strong>
                                                                </TableCellLayout>
                                                            </TableCell>
                                                        </TableRow>
                                                    }
                                                }).collect_view()}
                                            </TableBody>
                                        </Table>
                                    </div>
                                </div>
                            </Card>
                        </div>
                    }.into_any()
                }}
            </div>
        </PageFrame>
    }
}
