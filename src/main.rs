use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

mod config;
mod dom;
mod interactions;
mod components {
    pub mod contact;
    pub mod count_up;
    pub mod cursor_glow;
    pub mod magnet;
    pub mod nav;
    pub mod overlay;
    pub mod reveal;
    pub mod scroll;
    pub mod testimonials;
}

use interactions::Interactions;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Hidden element appended to `<body>` that the interaction layer mounts into,
/// leaving the server-rendered markup untouched.
fn mount_point() -> Option<Element> {
    let document = dom::document()?;
    let host = document.create_element("div").ok()?;
    host.set_id(config::HOST_ELEMENT_ID);
    if let Some(host) = host.dyn_ref::<HtmlElement>() {
        host.set_hidden(true);
    }
    document.body()?.append_child(&host).ok()?;
    Some(host)
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting site interactions");
    match mount_point() {
        Some(root) => {
            yew::Renderer::<Interactions>::with_root(root).render();
        }
        None => warn!("No document body, interactions not started"),
    }
}
