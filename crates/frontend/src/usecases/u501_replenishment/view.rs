//! Replenishment suggestion page.
//!
//! Asks the backend which parts are at or below the threshold, lets the
//! warehouse staff tune the quantities and submits the result as a new
//! purchase request.

use super::api;
use crate::shared::page_frame::PageFrame;
use crate::shared::toast::use_toast;
use crate::system::auth::claims;
use contracts::domain::a006_purchase_request::{CreatePurchaseRequest, CreatePurchaseRequestLine};
use contracts::usecases::u501_replenishment::{ReplenishmentRequest, SuggestedLine};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ReplenishmentPage() -> impl IntoView {
    let toast = use_toast();

    let threshold = RwSignal::new("5".to_string());
    let lines = RwSignal::new(Vec::<SuggestedLine>::new());
    let (loading, set_loading) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let (has_run, set_has_run) = signal(false);

    let run_suggestion = move |_| {
        let threshold_val: f64 = threshold.get_untracked().parse().unwrap_or(5.0);
        set_loading.set(true);
        spawn_local(async move {
            match api::suggest(ReplenishmentRequest {
                threshold: threshold_val,
            })
            .await
            {
                Ok(response) => {
                    lines.set(response.lines);
                    set_has_run.set(true);
                }
                Err(e) => toast.error(e),
            }
            set_loading.set(false);
        });
    };

    let update_quantity = move |part_id: String, raw: String| {
        let quantity: f64 = raw.replace(',', ".").parse().unwrap_or(0.0);
        lines.update(|list| {
            if let Some(line) = list.iter_mut().find(|l| l.part_id == part_id) {
                line.suggested_quantity = quantity;
            }
        });
    };

    let remove_line = move |part_id: String| {
        lines.update(|list| list.retain(|l| l.part_id != part_id));
    };

    let submit = move |_| {
        let current: Vec<SuggestedLine> = lines
            .get_untracked()
            .into_iter()
            .filter(|l| l.suggested_quantity > 0.0)
            .collect();
        if current.is_empty() {
            toast.error("Không có dòng nào để tạo yêu cầu");
            return;
        }
        set_submitting.set(true);
        let request = CreatePurchaseRequest {
            reason: "Bổ sung phụ tùng tồn kho thấp".to_string(),
            lines: current
                .into_iter()
                .map(|l| CreatePurchaseRequestLine {
                    part_id: l.part_id,
                    requested_quantity: l.suggested_quantity,
                })
                .collect(),
            created_by: claims::employee_id_from_token().unwrap_or_default(),
        };
        spawn_local(async move {
            match api::create_purchase_request(request).await {
                Ok(()) => {
                    toast.success("Đã tạo yêu cầu mua hàng");
                    lines.set(vec![]);
                    set_has_run.set(false);
                }
                Err(e) => toast.error(e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <PageFrame page_id="u501_replenishment--usecase" category="usecase">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gợi ý nhập hàng"</h1>
                </div>
                <div class="page__header-right"></div>
            </div>

            <div class="page__content">
                <div style="padding:var(--spacing-lg);display:flex;flex-direction:column;gap:var(--spacing-lg);">
                    <Card>
                        <div style="padding:var(--spacing-md);">
                            <Flex gap=FlexGap::Small align=FlexAlign::End>
                                <div style="max-width:180px;">
                                    <Flex vertical=true gap=FlexGap::Small>
                                        <Label>"Ngưỡng tồn khả dụng:"</Label>
                                        <Input value=threshold />
                                    </Flex>
                                </div>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=run_suggestion
                                    disabled=Signal::derive(move || loading.get())
                                >
                                    {move || if loading.get() { "Đang phân tích..." } else { "Tạo gợi ý" }}
                                </Button>
                            </Flex>
                        </div>
                    </Card>

                    <Show when=move || has_run.get()>
                        <Card>
                            <div style="padding:var(--spacing-md);display:flex;flex-direction:column;gap:var(--spacing-md);">
                                {move || {
                                    let list = lines.get();
                                    if list.is_empty() {
                                        return view! {
                                            <div style="color:var(--color-text-secondary);">
                                                "Không có phụ tùng nào dưới ngưỡng"
                                            </div>
                                        }.into_any();
                                    }
                                    view! {
                                        <div class="table-wrapper">
                                            <Table attr:style="width:100%;">
                                                <TableHeader>
                                                    <TableRow>
                                                        <TableHeaderCell>"SKU"</TableHeaderCell>
                                                        <TableHeaderCell>"Phụ tùng"</TableHeaderCell>
                                                        <TableHeaderCell>"Tồn"</TableHeaderCell>
                                                        <TableHeaderCell>"Giữ chỗ"</TableHeaderCell>
                                                        <TableHeaderCell>"SL nhập"</TableHeaderCell>
                                                        <TableHeaderCell>""</TableHeaderCell>
                                                    </TableRow>
                                                </TableHeader>
                                                <TableBody>
                                                    {list.into_iter().map(|line| {
                                                        let part_id_qty = line.part_id.clone();
                                                        let part_id_remove = line.part_id.clone();
                                                        view! {
                                                            <TableRow>
                                                                <TableCell>
                                                                    <TableCellLayout>{line.part_sku.clone()}</TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout truncate=true>{line.part_name.clone()}</TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>{line.stock_quantity}</TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>{line.reserved_quantity}</TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        <input
                                                                            type="number"
                                                                            class="form__input form__input--number"
                                                                            step="1"
                                                                            min="0"
                                                                            prop:value=line.suggested_quantity.to_string()
                                                                            on:input=move |ev| {
                                                                                update_quantity(part_id_qty.clone(), event_target_value(&ev));
                                                                            }
                                                                        />
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        <Button
                                                                            appearance=ButtonAppearance::Subtle
                                                                            on_click=move |_| remove_line(part_id_remove.clone())
                                                                        >
                                                                            "✕"
                                                                        </Button>
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
                                                on_click=submit
                                                disabled=Signal::derive(move || submitting.get())
                                            >
                                                {move || if submitting.get() { "Đang tạo..." } else { "Tạo yêu cầu mua hàng" }}
                                            </Button>
                                        </Flex>
                                    }.into_any()
                                }}
                            </div>
                        </Card>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
