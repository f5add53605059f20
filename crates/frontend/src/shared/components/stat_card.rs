use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard stat card: one headline number with a label.
///
/// `value` is `None` while loading or after a failed fetch and renders as
/// an em dash.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Preformatted value text (None = loading/error)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Accent: "success", "warning", "error" or empty for neutral
    #[prop(optional)]
    accent: &'static str,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let card_class = match accent {
        "success" => "stat-card stat-card--success",
        "warning" => "stat-card stat-card--warning",
        "error" => "stat-card stat-card--error",
        _ => "stat-card",
    };

    let formatted = move || value.get().unwrap_or_else(|| "—".to_string());

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
