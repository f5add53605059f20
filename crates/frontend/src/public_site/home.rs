//! Marketing homepage. Static sections plus the booking widget and the
//! before/after slider; the only data leaving this page is a booking
//! submission.

use super::booking_widget::BookingWidget;
use super::compare_slider::CompareSlider;
use leptos::prelude::*;

struct ServiceCard {
    title: &'static str,
    description: &'static str,
}

fn service_cards() -> Vec<ServiceCard> {
    vec![
        ServiceCard {
            title: "Bảo dưỡng định kỳ",
            description: "Thay dầu, lọc gió, kiểm tra 32 hạng mục theo tiêu chuẩn hãng.",
        },
        ServiceCard {
            title: "Sửa chữa động cơ",
            description: "Chẩn đoán bằng máy chuyên hãng, báo giá trước khi sửa.",
        },
        ServiceCard {
            title: "Đồng sơn",
            description: "Phòng sơn sấy chuẩn, bảo hành màu sơn 12 tháng.",
        },
        ServiceCard {
            title: "Điện - điều hòa",
            description: "Xử lý hệ thống điện thân xe, nạp ga điều hòa.",
        },
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="home__nav">
                <span class="home__brand">"Garage 79"</span>
                <nav class="home__links">
                    <a href="#services">"Dịch vụ"</a>
                    <a href="#booking">"Đặt lịch"</a>
                    <a href="#contact">"Liên hệ"</a>
                    <a href="/app" class="home__office-link">"Nội bộ"</a>
                </nav>
            </header>

            <section class="home__hero">
                <h1 class="home__hero-title">"Chăm sóc xe của bạn như xe của chúng tôi"</h1>
                <p class="home__hero-subtitle">
                    "Sửa chữa - bảo dưỡng ô tô chuyên nghiệp tại Hà Nội. Báo giá minh bạch, phụ tùng chính hãng."
                </p>
                <a href="#booking" class="home__hero-cta">"Đặt lịch ngay"</a>
            </section>

            <section class="home__services" id="services">
                <h2>"Dịch vụ"</h2>
                <div class="home__services-grid">
                    {service_cards().into_iter().map(|card| {
                        view! {
                            <div class="home__service-card">
                                <h3>{card.title}</h3>
                                <p>{card.description}</p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </section>

            <section class="home__compare">
                <h2>"Trước & sau đồng sơn"</h2>
                <CompareSlider
                    before_src="/assets/compare-before.jpg"
                    after_src="/assets/compare-after.jpg"
                />
            </section>

            <section class="home__booking">
                <BookingWidget />
            </section>

            <section class="home__contact" id="contact">
                <h2>"Liên hệ"</h2>
                <div class="home__contact-grid">
                    <div>
                        <p>"79 Đường Láng, Đống Đa, Hà Nội"</p>
                        <p>"Hotline: 0987 654 321"</p>
                        <p>"Mở cửa: 7:30 - 19:00, Thứ 2 - Chủ nhật"</p>
                    </div>
                    <iframe
                        class="home__map"
                        src="https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3724.0!2d105.8!3d21.0"
                        loading="lazy"
                        title="Bản đồ garage"
                    ></iframe>
                </div>
            </section>

            <footer class="home__footer">
                <span>"© 2024 Garage 79"</span>
            </footer>
        </div>
    }
}
