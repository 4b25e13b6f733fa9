//! Video modal and image lightbox.
//!
//! Both overlays share one open/close state machine but are bound
//! independently: each has its own triggers, its own Escape handler and its
//! own open state, so nothing stops both being open at once.

use wasm_bindgen::JsValue;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom::{self, Listener};

const OPEN_CLASS: &str = "is-open";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Video,
    Image,
}

impl OverlayKind {
    fn name(self) -> &'static str {
        match self {
            OverlayKind::Video => "video modal",
            OverlayKind::Image => "image lightbox",
        }
    }

    fn root_selector(self) -> &'static str {
        match self {
            OverlayKind::Video => "[data-modal]",
            OverlayKind::Image => "[data-lightbox-root]",
        }
    }

    fn media_selector(self) -> &'static str {
        match self {
            OverlayKind::Video => "[data-modal-iframe]",
            OverlayKind::Image => "[data-lightbox-img]",
        }
    }

    fn opener_selector(self) -> &'static str {
        match self {
            OverlayKind::Video => "[data-open-video]",
            OverlayKind::Image => "[data-lightbox-src]",
        }
    }

    /// Attribute on an opener that carries the media URL.
    fn url_attribute(self) -> &'static str {
        match self {
            OverlayKind::Video => "data-video",
            OverlayKind::Image => "data-lightbox-src",
        }
    }

    fn closer_selector(self) -> &'static str {
        match self {
            OverlayKind::Video => "[data-close-modal]",
            OverlayKind::Image => "[data-close-lightbox]",
        }
    }

    /// The `src` to load for `url`. Videos start playing on open.
    pub fn media_src(self, url: &str) -> String {
        match self {
            OverlayKind::Video => autoplay_src(url),
            OverlayKind::Image => url.to_string(),
        }
    }
}

pub fn autoplay_src(url: &str) -> String {
    let joiner = if url.contains('?') { '&' } else { '?' };
    format!("{}{}autoplay=1", url, joiner)
}

/// A bound overlay root and the element whose `src` it drives.
#[derive(Debug, Clone)]
pub struct Overlay {
    kind: OverlayKind,
    root: Element,
    media: Element,
}

impl Overlay {
    pub fn find(kind: OverlayKind) -> Option<Self> {
        Some(Self {
            kind,
            root: dom::query(kind.root_selector())?,
            media: dom::query(kind.media_selector())?,
        })
    }

    /// Opening while already open just swaps the source.
    pub fn open(&self, url: &str) -> Result<(), JsValue> {
        self.root.class_list().add_1(OPEN_CLASS)?;
        self.root.set_attribute("aria-hidden", "false")?;
        self.media.set_attribute("src", &self.kind.media_src(url))?;
        dom::set_scroll_locked(true)
    }

    /// Clearing the source stops any playing video.
    pub fn close(&self) -> Result<(), JsValue> {
        self.root.class_list().remove_1(OPEN_CLASS)?;
        self.root.set_attribute("aria-hidden", "true")?;
        self.media.set_attribute("src", "")?;
        dom::set_scroll_locked(false)
    }
}

fn report(kind: OverlayKind, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{} update failed: {:?}", kind.name(), err);
    }
}

#[hook]
pub fn use_overlay(kind: OverlayKind) {
    use_event_with_window("keydown", move |e: KeyboardEvent| {
        if e.key() != "Escape" {
            return;
        }
        if let Some(overlay) = Overlay::find(kind) {
            report(kind, overlay.close());
        }
    });

    use_effect_with_deps(
        move |kind| {
            let listeners = dom::bound(kind.name(), bind(*kind));
            move || drop(listeners)
        },
        kind,
    );
}

fn bind(kind: OverlayKind) -> Result<Option<Vec<Listener>>, JsValue> {
    let Some(overlay) = Overlay::find(kind) else {
        return Ok(None);
    };

    let mut listeners = Vec::new();
    for opener in dom::query_all(kind.opener_selector()) {
        let overlay = overlay.clone();
        let trigger = opener.clone();
        listeners.push(Listener::new(&opener, "click", move |_| {
            if let Some(url) = trigger.get_attribute(kind.url_attribute()) {
                report(kind, overlay.open(&url));
            }
        })?);
    }
    for closer in dom::query_all(kind.closer_selector()) {
        let overlay = overlay.clone();
        listeners.push(Listener::new(&closer, "click", move |_| {
            report(kind, overlay.close());
        })?);
    }
    Ok(Some(listeners))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autoplay_without_query() {
        assert_eq!(
            autoplay_src("https://example.com/v"),
            "https://example.com/v?autoplay=1"
        );
    }

    #[test]
    fn test_autoplay_with_query() {
        assert_eq!(
            autoplay_src("https://example.com/v?x=1"),
            "https://example.com/v?x=1&autoplay=1"
        );
    }

    #[test]
    fn test_image_src_is_untouched() {
        assert_eq!(
            OverlayKind::Image.media_src("/assets/site-1.jpg?w=1600"),
            "/assets/site-1.jpg?w=1600"
        );
        assert_eq!(
            OverlayKind::Video.media_src("https://www.youtube.com/embed/abc"),
            "https://www.youtube.com/embed/abc?autoplay=1"
        );
    }

    #[test]
    fn test_kinds_bind_separate_markup() {
        for sel in [
            OverlayKind::Video.root_selector(),
            OverlayKind::Video.media_selector(),
            OverlayKind::Video.opener_selector(),
            OverlayKind::Video.closer_selector(),
        ] {
            assert!(![
                OverlayKind::Image.root_selector(),
                OverlayKind::Image.media_selector(),
                OverlayKind::Image.opener_selector(),
                OverlayKind::Image.closer_selector(),
            ]
            .contains(&sel));
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn body_overflow() -> String {
        dom::document()
            .and_then(|d| d.body())
            .unwrap()
            .style()
            .get_property_value("overflow")
            .unwrap()
    }

    fn mount(root_attr: &str, media_tag: &str, media_attr: &str) -> Element {
        let document = dom::document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_attribute(root_attr, "").unwrap();
        root.set_attribute("aria-hidden", "true").unwrap();
        let media = document.create_element(media_tag).unwrap();
        media.set_attribute(media_attr, "").unwrap();
        root.append_child(&media).unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    fn test_video_open_then_close_restores_page() {
        let root = mount("data-modal", "iframe", "data-modal-iframe");
        let overlay = Overlay::find(OverlayKind::Video).unwrap();

        overlay.open("https://example.com/v?x=1").unwrap();
        assert!(root.class_list().contains(OPEN_CLASS));
        assert_eq!(root.get_attribute("aria-hidden").as_deref(), Some("false"));
        assert_eq!(
            overlay.media.get_attribute("src").as_deref(),
            Some("https://example.com/v?x=1&autoplay=1")
        );
        assert_eq!(body_overflow(), "hidden");

        overlay.close().unwrap();
        assert!(!root.class_list().contains(OPEN_CLASS));
        assert_eq!(root.get_attribute("aria-hidden").as_deref(), Some("true"));
        assert_eq!(overlay.media.get_attribute("src").as_deref(), Some(""));
        assert_eq!(body_overflow(), "");

        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_lightbox_close_clears_image() {
        let root = mount("data-lightbox-root", "img", "data-lightbox-img");
        let overlay = Overlay::find(OverlayKind::Image).unwrap();

        overlay.open("/assets/site-1.jpg").unwrap();
        assert_eq!(
            overlay.media.get_attribute("src").as_deref(),
            Some("/assets/site-1.jpg")
        );

        overlay.close().unwrap();
        assert_eq!(overlay.media.get_attribute("src").as_deref(), Some(""));
        assert!(!root.class_list().contains(OPEN_CLASS));
        assert_eq!(body_overflow(), "");

        root.remove();
    }
}
