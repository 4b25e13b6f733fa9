use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::dom::{self, Listener};

/// Delay between fading the card out and swapping its text.
pub const SWAP_DELAY_MS: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub company: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "“Fast response, clean process, and no confusion on terms. Execution felt professional.”",
        author: "Procurement Lead",
        company: "Industrial Buyer",
    },
    Testimonial {
        quote: "“They pushed for proper documents first — saved everyone from a messy deal.”",
        author: "Trading Partner",
        company: "Commodity Desk",
    },
    Testimonial {
        quote: "“Quality checks at loading were strict. Exactly what buyers need.”",
        author: "Logistics Coordinator",
        company: "Freight & Port Ops",
    },
];

/// Cursor over a fixed-length list that wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }
}

#[derive(Clone)]
struct SliderView {
    card: HtmlElement,
    quote: Element,
    author: Element,
    company: Element,
}

impl SliderView {
    fn find() -> Option<Self> {
        Some(Self {
            card: dom::query_html("[data-tcard]")?,
            quote: dom::query("[data-tquote]")?,
            author: dom::query("[data-tauthor]")?,
            company: dom::query("[data-tcompany]")?,
        })
    }

    fn fade_out(&self) -> Result<(), JsValue> {
        dom::set_style(&self.card, "opacity", "0")?;
        dom::set_style(&self.card, "transform", "translateY(6px)")
    }

    fn show(&self, t: &Testimonial) -> Result<(), JsValue> {
        self.quote.set_text_content(Some(t.quote));
        self.author.set_text_content(Some(t.author));
        self.company.set_text_content(Some(t.company));
        dom::set_style(&self.card, "opacity", "1")?;
        dom::set_style(&self.card, "transform", "translateY(0)")
    }
}

/// Fades the card out and schedules the text swap. A transition already in
/// flight is cancelled, so the newest selection is always the one shown.
fn render(view: &SliderView, pending: &RefCell<Option<Timeout>>, t: Testimonial) {
    if let Err(err) = view.fade_out() {
        log::warn!("testimonial fade failed: {:?}", err);
    }
    let view = view.clone();
    let swap = Timeout::new(SWAP_DELAY_MS, move || {
        if let Err(err) = view.show(&t) {
            log::warn!("testimonial swap failed: {:?}", err);
        }
    });
    // Dropping the previous handle clears its timer.
    *pending.borrow_mut() = Some(swap);
}

#[hook]
pub fn use_testimonials() {
    use_effect_with_deps(
        move |_| {
            let bindings = dom::bound("testimonial slider", bind());
            move || drop(bindings)
        },
        (),
    );
}

type Pending = Rc<RefCell<Option<Timeout>>>;

fn bind() -> Result<Option<(Vec<Listener>, Pending)>, JsValue> {
    let Some(view) = SliderView::find() else {
        return Ok(None);
    };

    let carousel = Rc::new(RefCell::new(Carousel::new(TESTIMONIALS.len())));
    let pending: Pending = Rc::new(RefCell::new(None));
    let mut listeners = Vec::new();

    let controls: [(&str, fn(&mut Carousel) -> usize); 2] =
        [("[data-tprev]", Carousel::prev), ("[data-tnext]", Carousel::next)];
    for (selector, step) in controls {
        let Some(control) = dom::query(selector) else {
            continue;
        };
        let view = view.clone();
        let carousel = carousel.clone();
        let pending = pending.clone();
        listeners.push(Listener::new(&control, "click", move |_| {
            let index = step(&mut *carousel.borrow_mut());
            render(&view, &pending, TESTIMONIALS[index]);
        })?);
    }

    Ok(Some((listeners, pending)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_from_first_wraps_to_last() {
        let mut carousel = Carousel::new(TESTIMONIALS.len());
        assert_eq!(carousel.prev(), TESTIMONIALS.len() - 1);
    }

    #[test]
    fn test_next_from_last_wraps_to_first() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_full_cycle_returns_home() {
        let mut carousel = Carousel::new(3);
        let forward: Vec<usize> = (0..3).map(|_| carousel.next()).collect();
        assert_eq!(forward, vec![1, 2, 0]);
        let back: Vec<usize> = (0..3).map(|_| carousel.prev()).collect();
        assert_eq!(back, vec![2, 1, 0]);
    }

    #[test]
    fn test_empty_list_stays_put() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
    }

    #[test]
    fn test_testimonials_are_complete() {
        for t in TESTIMONIALS {
            assert!(!t.quote.is_empty());
            assert!(!t.author.is_empty());
            assert!(!t.company.is_empty());
        }
    }
}
