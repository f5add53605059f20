//! Service summary dashboard: headline counters plus a per-status
//! breakdown, one GET per refresh.

use crate::shared::api_utils;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_tag::TicketStatusTag;
use crate::shared::page_frame::PageFrame;
use contracts::shared::money::format_vnd;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};
use thaw::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSummaryDto {
    pub open_tickets: usize,
    pub under_repair: usize,
    pub waiting_delivery: usize,
    pub month_revenue: i64,
    pub by_status: Vec<StatusCountDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusCountDto {
    pub status: String,
    pub count: usize,
}

#[component]
pub fn ServiceSummaryDashboard() -> impl IntoView {
    let (summary, set_summary) = signal(None::<ServiceSummaryDto>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load_summary = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let response =
                api_utils::get::<ServiceSummaryDto>("/api/dashboard/service-summary").await;
            match response.data {
                Some(data) => set_summary.set(Some(data)),
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
        load_summary();
    });

    view! {
        <PageFrame page_id="d400_service_summary--dashboard" category="dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tổng quan dịch vụ"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load_summary()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Đang tải..." } else { "Làm mới" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <div style="padding:var(--spacing-lg);display:flex;flex-direction:column;gap:var(--spacing-lg);">
                    <div class="stat-card-row">
                        <StatCard
                            label="Phiếu đang mở".to_string()
                            icon_name="file-text".to_string()
                            value=Signal::derive(move || summary.get().map(|s| s.open_tickets.to_string()))
                        />
                        <StatCard
                            label="Đang sửa chữa".to_string()
                            icon_name="wrench".to_string()
                            accent="warning"
                            value=Signal::derive(move || summary.get().map(|s| s.under_repair.to_string()))
                        />
                        <StatCard
                            label="Chờ giao xe".to_string()
                            icon_name="shipments".to_string()
                            value=Signal::derive(move || summary.get().map(|s| s.waiting_delivery.to_string()))
                        />
                        <StatCard
                            label="Doanh thu tháng".to_string()
                            icon_name="bar-chart".to_string()
                            accent="success"
                            value=Signal::derive(move || summary.get().map(|s| format_vnd(s.month_revenue)))
                        />
                    </div>

                    <Card>
                        <div style="padding:var(--spacing-md);">
                            <h3 style="margin:0 0 var(--spacing-md) 0;font-size:var(--font-size-md);">"Phiếu theo trạng thái"</h3>
                            <div class="table-wrapper">
                                <Table attr:style="width:100%;max-width:480px;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                                            <TableHeaderCell>"Số phiếu"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        <For
                                            each=move || summary.get().map(|s| s.by_status).unwrap_or_default()
                                            key=|row| row.status.clone()
                                            children=move |row| {
                                                let status = row.status.clone();
                                                view! {
                                                    <TableRow>
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                <TicketStatusTag status=Signal::derive(move || status.clone()) />
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                <span style="font-variant-numeric:tabular-nums;">{row.count}</span>
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
                    </Card>
                </div>
            </div>
        </PageFrame>
    }
}
