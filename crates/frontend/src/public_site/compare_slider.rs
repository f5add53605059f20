//! Before/after image comparison slider.
//!
//! The handle follows the pointer horizontally; its position is the pointer
//! offset inside the container mapped to a percentage and clamped to
//! [0, 100]. Mouse and touch both drive the same handler.

use leptos::prelude::*;

/// Map a pointer x coordinate to a slider percentage, clamped to [0, 100].
pub fn position_to_percent(client_x: f64, rect_left: f64, rect_width: f64) -> f64 {
    if rect_width <= 0.0 {
        return 50.0;
    }
    let ratio = (client_x - rect_left) / rect_width;
    (ratio * 100.0).clamp(0.0, 100.0)
}

#[component]
pub fn CompareSlider(
    /// "Before" image URL (left side)
    before_src: &'static str,
    /// "After" image URL (right side)
    after_src: &'static str,
) -> impl IntoView {
    let percent = RwSignal::new(50.0f64);
    let dragging = RwSignal::new(false);
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let update_from_x = move |client_x: f64| {
        if let Some(container) = container_ref.get_untracked() {
            let rect = container.get_bounding_client_rect();
            percent.set(position_to_percent(client_x, rect.left(), rect.width()));
        }
    };

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        if dragging.get_untracked() {
            update_from_x(ev.client_x() as f64);
        }
    };

    let on_touch_move = move |ev: leptos::ev::TouchEvent| {
        if !dragging.get_untracked() {
            return;
        }
        if let Some(touch) = ev.touches().item(0) {
            update_from_x(touch.client_x() as f64);
        }
    };

    view! {
        <div
            class="compare-slider"
            node_ref=container_ref
            on:mousedown=move |ev| {
                dragging.set(true);
                update_from_x(ev.client_x() as f64);
            }
            on:mouseup=move |_| dragging.set(false)
            on:mouseleave=move |_| dragging.set(false)
            on:mousemove=on_mouse_move
            on:touchstart=move |ev| {
                dragging.set(true);
                if let Some(touch) = ev.touches().item(0) {
                    update_from_x(touch.client_x() as f64);
                }
            }
            on:touchend=move |_| dragging.set(false)
            on:touchmove=on_touch_move
        >
            <img class="compare-slider__after" src=after_src alt="Sau khi sửa" />
            <div
                class="compare-slider__before-wrap"
                style=move || format!("width: {}%;", percent.get())
            >
                <img class="compare-slider__before" src=before_src alt="Trước khi sửa" />
            </div>
            <div
                class="compare-slider__handle"
                style=move || format!("left: {}%;", percent.get())
            >
                <span class="compare-slider__grip">"⟷"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_pointer_to_percent() {
        assert_eq!(position_to_percent(150.0, 100.0, 200.0), 25.0);
        assert_eq!(position_to_percent(200.0, 100.0, 200.0), 50.0);
    }

    #[test]
    fn test_clamps_to_bounds() {
        assert_eq!(position_to_percent(50.0, 100.0, 200.0), 0.0);
        assert_eq!(position_to_percent(500.0, 100.0, 200.0), 100.0);
    }

    #[test]
    fn test_zero_width_falls_back_to_center() {
        assert_eq!(position_to_percent(50.0, 0.0, 0.0), 50.0);
    }
}
