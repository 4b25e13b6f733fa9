use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::dom::{self, Listener};

const OPEN_CLASS: &str = "is-open";

/// Mobile menu: the toggle flips the panel open, any header or panel link closes it.
#[hook]
pub fn use_nav_toggle() {
    use_effect_with_deps(
        move |_| {
            let listeners = dom::bound("nav toggle", bind());
            move || drop(listeners)
        },
        (),
    );
}

fn bind() -> Result<Option<Vec<Listener>>, JsValue> {
    let (Some(nav), Some(toggle)) = (dom::query("[data-nav]"), dom::query("[data-nav-toggle]"))
    else {
        return Ok(None);
    };

    let mut listeners = Vec::new();

    let panel = nav.clone();
    listeners.push(Listener::new(&toggle, "click", move |_| {
        let _ = panel.class_list().toggle(OPEN_CLASS);
    })?);

    for link in dom::query_all("#top a, [data-nav] a") {
        let panel = nav.clone();
        listeners.push(Listener::new(&link, "click", move |_| {
            let _ = panel.class_list().remove_1(OPEN_CLASS);
        })?);
    }

    Ok(Some(listeners))
}
