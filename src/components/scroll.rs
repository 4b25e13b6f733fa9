use wasm_bindgen::JsValue;
use web_sys::window;
use yew::prelude::*;

use crate::dom::{self, Listener};

/// The sticky CTA hides once the footer top rises above this many px from the viewport bottom.
pub const FOOTER_CLEARANCE: f64 = 80.0;

/// Scroll position as a percentage of the scrollable range, in `[0, 100]`.
pub fn progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    let range = if range > 0.0 { range } else { 1.0 };
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

pub fn progress_width(percent: f64) -> String {
    format!("{:.2}%", percent)
}

pub fn cta_hidden(footer_top: f64, viewport_height: f64) -> bool {
    footer_top < viewport_height - FOOTER_CLEARANCE
}

#[hook]
pub fn use_scroll_progress() {
    use_effect_with_deps(
        move |_| {
            let listener = dom::bound("scroll progress", bind_progress());
            move || drop(listener)
        },
        (),
    );
}

fn bind_progress() -> Result<Option<Listener>, JsValue> {
    let (Some(bar), Some(window)) = (dom::query_html("[data-scrollbar]"), window()) else {
        return Ok(None);
    };

    let update = move || -> Result<(), JsValue> {
        let Some(root) = dom::document().and_then(|d| d.document_element()) else {
            return Ok(());
        };
        let percent = progress_percent(
            root.scroll_top() as f64,
            root.scroll_height() as f64,
            root.client_height() as f64,
        );
        dom::set_style(&bar, "width", &progress_width(percent))
    };

    update()?;
    let listener = Listener::passive(&window, "scroll", move |_| {
        let _ = update();
    })?;
    Ok(Some(listener))
}

#[hook]
pub fn use_sticky_cta() {
    use_effect_with_deps(
        move |_| {
            let listener = dom::bound("sticky cta", bind_sticky());
            move || drop(listener)
        },
        (),
    );
}

fn bind_sticky() -> Result<Option<Listener>, JsValue> {
    let (Some(sticky), Some(footer), Some(window)) =
        (dom::query("[data-stickycta]"), dom::query(".footer"), window())
    else {
        return Ok(None);
    };

    // Layout is read fresh on every call, nothing is cached between scrolls.
    let update = move || -> Result<(), JsValue> {
        let (_, viewport_height) = dom::viewport_size();
        let footer_top = footer.get_bounding_client_rect().top();
        sticky
            .class_list()
            .toggle_with_force("is-hidden", cta_hidden(footer_top, viewport_height))?;
        Ok(())
    };

    update()?;
    let listener = Listener::passive(&window, "scroll", move |_| {
        let _ = update();
    })?;
    Ok(Some(listener))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_at_ends() {
        assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(500.0, 3000.0, 1000.0), 25.0);
    }

    #[test]
    fn test_progress_short_page_uses_unit_range() {
        // Page fits the viewport: denominator falls back to 1
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_percent(0.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_progress_stays_in_bounds_on_overscroll() {
        assert_eq!(progress_percent(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(2100.0, 3000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(5.0, 800.0, 800.0), 100.0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut last = -1.0;
        for top in (0..=2000).step_by(50) {
            let pct = progress_percent(top as f64, 3000.0, 1000.0);
            assert!(pct >= last, "{} dropped below {}", pct, last);
            last = pct;
        }
    }

    #[test]
    fn test_progress_width_two_decimals() {
        assert_eq!(progress_width(0.0), "0.00%");
        assert_eq!(progress_width(33.333333), "33.33%");
        assert_eq!(progress_width(100.0), "100.00%");
    }

    #[test]
    fn test_cta_threshold() {
        let viewport = 900.0;
        assert!(!cta_hidden(2000.0, viewport));
        assert!(!cta_hidden(820.0, viewport));
        assert!(cta_hidden(819.5, viewport));
        assert!(cta_hidden(100.0, viewport));
    }
}
