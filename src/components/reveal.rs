use wasm_bindgen::JsValue;
use web_sys::Element;
use yew::prelude::*;

use crate::dom::{self, Observer};

const REVEAL_THRESHOLD: f64 = 0.12;

const REVEALED_CLASS: &str = "is-revealed";

#[hook]
pub fn use_reveal() {
    use_effect_with_deps(
        move |_| {
            let observer = dom::bound("reveal on scroll", bind());
            move || drop(observer)
        },
        (),
    );
}

fn bind() -> Result<Option<Observer>, JsValue> {
    let targets = dom::query_all("[data-reveal]");
    if targets.is_empty() {
        return Ok(None);
    }
    let observer = Observer::new(&targets, REVEAL_THRESHOLD, |el| reveal(&el))?;
    Ok(Some(observer))
}

/// Once revealed an element stays revealed; later intersections only re-add the class.
fn reveal(el: &Element) {
    let _ = el.class_list().add_1(REVEALED_CLASS);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_repeat_intersections_reveal_once() {
        let document = dom::document().unwrap();
        let el = document.create_element("section").unwrap();
        el.set_attribute("data-reveal", "").unwrap();

        reveal(&el);
        reveal(&el);
        reveal(&el);

        assert_eq!(el.class_list().length(), 1);
        assert!(el.class_list().contains(REVEALED_CLASS));
        assert_eq!(el.class_name(), REVEALED_CLASS);
    }
}
