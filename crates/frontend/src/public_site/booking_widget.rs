//! Appointment booking widget on the homepage.
//!
//! Validation runs entirely client-side before anything is sent: required
//! fields, the phone format and the license-plate format. Failures are
//! aggregated into one alert and the offending fields get a red border.
//! Valid submissions POST to the booking endpoint.

use crate::shared::api_utils;
use crate::shared::date_utils::{current_hour, today_iso};
use chrono::NaiveDate;
use contracts::domain::a007_booking::{is_slot_disabled, BookingRequest, TIME_SLOTS};
use contracts::shared::validation::{is_valid_license_plate, is_valid_phone, require};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

const SERVICE_KINDS: [&str; 4] = [
    "Bảo dưỡng định kỳ",
    "Sửa chữa chung",
    "Đồng sơn",
    "Cứu hộ / kiểm tra",
];

#[component]
pub fn BookingWidget() -> impl IntoView {
    let customer_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let license_plate = RwSignal::new(String::new());
    let service_kind = RwSignal::new(SERVICE_KINDS[0].to_string());
    let date = RwSignal::new(today_iso());
    let time_slot = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());

    let (errors, set_errors) = signal::<Vec<String>>(vec![]);
    let (invalid_fields, set_invalid_fields) = signal::<HashSet<&'static str>>(HashSet::new());
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);

    let field_class = move |field: &'static str, base: &'static str| {
        if invalid_fields.get().contains(field) {
            format!("{} booking__input--invalid", base)
        } else {
            base.to_string()
        }
    };

    // A slot already past today's current time cannot be chosen for a
    // same-day booking; future dates keep every slot open.
    let slot_disabled = move |threshold: f64| {
        let Some(booking_date) = NaiveDate::parse_from_str(&date.get(), "%Y-%m-%d").ok() else {
            return false;
        };
        let Some(today) = NaiveDate::parse_from_str(&today_iso(), "%Y-%m-%d").ok() else {
            return false;
        };
        is_slot_disabled(booking_date, today, current_hour(), threshold)
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut messages: Vec<String> = Vec::new();
        let mut invalid: HashSet<&'static str> = HashSet::new();

        let name_val = customer_name.get_untracked();
        let phone_val = phone.get_untracked();
        let plate_val = license_plate.get_untracked();
        let slot_val = time_slot.get_untracked();

        if let Err(e) = require(&name_val, "Họ tên") {
            messages.push(e);
            invalid.insert("name");
        }
        if let Err(e) = require(&phone_val, "Số điện thoại") {
            messages.push(e);
            invalid.insert("phone");
        } else if !is_valid_phone(&phone_val) {
            messages.push("Số điện thoại không hợp lệ (10 số, bắt đầu bằng 0)".to_string());
            invalid.insert("phone");
        }
        if let Err(e) = require(&plate_val, "Biển số xe") {
            messages.push(e);
            invalid.insert("plate");
        } else if !is_valid_license_plate(&plate_val) {
            messages.push("Biển số xe không hợp lệ (VD: 30F-123.45)".to_string());
            invalid.insert("plate");
        }
        if slot_val.is_empty() {
            messages.push("Vui lòng chọn khung giờ".to_string());
            invalid.insert("slot");
        }

        if !messages.is_empty() {
            set_errors.set(messages);
            set_invalid_fields.set(invalid);
            return;
        }
        set_errors.set(vec![]);
        set_invalid_fields.set(HashSet::new());
        set_submitting.set(true);

        let request = BookingRequest {
            customer_name: name_val,
            phone: phone_val,
            license_plate: plate_val,
            service_kind: service_kind.get_untracked(),
            date: date.get_untracked(),
            time_slot: slot_val,
            note: Some(note.get_untracked()).filter(|v| !v.is_empty()),
        };

        spawn_local(async move {
            let response = api_utils::post_no_content("/api/bookings/create", &request).await;
            set_submitting.set(false);
            match response.error {
                None => {
                    set_submitted.set(true);
                }
                Some(e) => {
                    set_errors.set(vec![e]);
                }
            }
        });
    };

    view! {
        <div class="booking" id="booking">
            <h2 class="booking__title">"Đặt lịch hẹn"</h2>

            <Show when=move || submitted.get()>
                <div class="booking__success">
                    "Đã nhận lịch hẹn của bạn. Garage sẽ gọi lại để xác nhận trong ít phút."
                </div>
            </Show>

            <Show when=move || !submitted.get()>
                {move || {
                    let messages = errors.get();
                    if messages.is_empty() {
                        view! { <></> }.into_any()
                    } else {
                        view! {
                            <div class="booking__errors" role="alert">
                                {messages.into_iter().map(|m| view! { <div>{m}</div> }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}

                <form class="booking__form" on:submit=submit>
                    <input
                        type="text"
                        class=move || field_class("name", "booking__input")
                        placeholder="Họ và tên"
                        prop:value=move || customer_name.get()
                        on:input=move |ev| customer_name.set(event_target_value(&ev))
                    />

                    <input
                        type="tel"
                        class=move || field_class("phone", "booking__input")
                        placeholder="Số điện thoại (0987654321)"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />

                    <input
                        type="text"
                        class=move || field_class("plate", "booking__input")
                        placeholder="Biển số xe (30F-123.45)"
                        prop:value=move || license_plate.get()
                        on:input=move |ev| license_plate.set(event_target_value(&ev))
                    />

                    <select
                        class="booking__input"
                        on:change=move |ev| service_kind.set(event_target_value(&ev))
                    >
                        {SERVICE_KINDS.iter().map(|kind| {
                            view! { <option value=*kind>{*kind}</option> }
                        }).collect_view()}
                    </select>

                    <input
                        type="date"
                        class="booking__input"
                        prop:value=move || date.get()
                        on:input=move |ev| {
                            date.set(event_target_value(&ev));
                            // Reset the slot: its availability may have changed.
                            time_slot.set(String::new());
                        }
                    />

                    <select
                        class=move || field_class("slot", "booking__input")
                        on:change=move |ev| time_slot.set(event_target_value(&ev))
                    >
                        <option value="">"— Chọn khung giờ —"</option>
                        {TIME_SLOTS.iter().map(|slot| {
                            let threshold = slot.threshold;
                            view! {
                                <option
                                    value=slot.label
                                    disabled=move || slot_disabled(threshold)
                                    selected=move || time_slot.get() == slot.label
                                >
                                    {slot.label}
                                </option>
                            }
                        }).collect_view()}
                    </select>

                    <textarea
                        class="booking__input booking__input--note"
                        placeholder="Mô tả tình trạng xe (không bắt buộc)"
                        prop:value=move || note.get()
                        on:input=move |ev| note.set(event_target_value(&ev))
                    ></textarea>

                    <button type="submit" class="booking__submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Đang gửi..." } else { "Đặt lịch ngay" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
