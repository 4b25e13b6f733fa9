use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomRect, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::dom::{self, Listener};

pub const STRENGTH: f64 = 14.0;

pub const RESTING: &str = "translate(0px, 0px)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<DomRect> for Rect {
    fn from(r: DomRect) -> Self {
        Self {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        }
    }
}

/// Pointer offset from the element's center, normalized by its size and
/// scaled by [`STRENGTH`]. A collapsed axis contributes no offset.
pub fn magnet_offset(pointer_x: f64, pointer_y: f64, rect: Rect) -> (f64, f64) {
    let axis = |pointer: f64, start: f64, size: f64| {
        if size > 0.0 {
            (pointer - (start + size / 2.0)) / size * STRENGTH
        } else {
            0.0
        }
    };
    (
        axis(pointer_x, rect.left, rect.width),
        axis(pointer_y, rect.top, rect.height),
    )
}

pub fn translate(dx: f64, dy: f64) -> String {
    format!("translate({}px, {}px)", dx, dy)
}

#[hook]
pub fn use_magnets() {
    use_effect_with_deps(
        move |_| {
            let listeners = dom::bound("magnetic buttons", bind());
            move || drop(listeners)
        },
        (),
    );
}

fn bind() -> Result<Option<Vec<Listener>>, JsValue> {
    let magnets: Vec<HtmlElement> = dom::query_all("[data-magnet]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    if magnets.is_empty() {
        return Ok(None);
    }

    let mut listeners = Vec::with_capacity(magnets.len() * 2);
    for el in magnets {
        let target = el.clone();
        listeners.push(Listener::new(&el, "pointermove", move |e| {
            let Some(e) = e.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = Rect::from(target.get_bounding_client_rect());
            let (dx, dy) = magnet_offset(e.client_x() as f64, e.client_y() as f64, rect);
            let _ = dom::set_style(&target, "transform", &translate(dx, dy));
        })?);

        let target = el.clone();
        listeners.push(Listener::new(&el, "pointerleave", move |_| {
            let _ = dom::set_style(&target, "transform", RESTING);
        })?);
    }
    Ok(Some(listeners))
}
