use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Element;
use yew::prelude::*;

use crate::dom::{self, FrameLoop, Observer};

pub const DURATION_MS: f64 = 800.0;

/// Share of the target shown on the first frame.
pub const START_FRACTION: f64 = 0.15;

const VISIBLE_THRESHOLD: f64 = 0.6;

const RAN_ATTRIBUTE: &str = "data-ran";

/// Reads a leading integer the way the markup writes it, so `"120+"` is 120.
/// Anything without leading digits counts to zero.
pub fn parse_target(raw: &str) -> i64 {
    let raw = raw.trim_start();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

pub fn value_at(target: i64, progress: f64) -> i64 {
    let progress = progress.clamp(0.0, 1.0);
    let exact = target as f64 * (START_FRACTION + (1.0 - START_FRACTION) * progress);
    // Halves round up, toward positive infinity.
    (exact + 0.5).floor() as i64
}

/// One running counter. The first frame fixes the start time.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: i64,
    started_at: Option<f64>,
}

impl CountUp {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            started_at: None,
        }
    }

    /// Value to display at `now` (ms) and whether the animation is finished.
    /// The last frame always lands exactly on the target.
    pub fn frame(&mut self, now: f64) -> (i64, bool) {
        let started_at = *self.started_at.get_or_insert(now);
        let progress = ((now - started_at) / DURATION_MS).min(1.0);
        if progress < 1.0 {
            (value_at(self.target, progress), false)
        } else {
            (self.target, true)
        }
    }
}

#[hook]
pub fn use_count_up() {
    use_effect_with_deps(
        move |_| {
            let bindings = dom::bound("count up", bind());
            move || drop(bindings)
        },
        (),
    );
}

type Running = Rc<RefCell<Vec<FrameLoop>>>;

fn bind() -> Result<Option<(Observer, Running)>, JsValue> {
    let counters = dom::query_all("[data-count]");
    if counters.is_empty() {
        return Ok(None);
    }

    let running: Running = Rc::new(RefCell::new(Vec::new()));
    let started = running.clone();
    let observer = Observer::new(&counters, VISIBLE_THRESHOLD, move |el| {
        start_once(el, &started);
    })?;

    Ok(Some((observer, running)))
}

/// Starts the counter unless it already ran; re-entering the viewport is a no-op.
fn start_once(el: Element, running: &RefCell<Vec<FrameLoop>>) {
    if el.has_attribute(RAN_ATTRIBUTE) {
        return;
    }
    let _ = el.set_attribute(RAN_ATTRIBUTE, "1");
    match run(el) {
        Ok(frames) => running.borrow_mut().push(frames),
        Err(err) => log::warn!("count up failed to start: {:?}", err),
    }
}

fn run(el: Element) -> Result<FrameLoop, JsValue> {
    let target = parse_target(&el.get_attribute("data-count").unwrap_or_default());
    let mut count = CountUp::new(target);
    FrameLoop::start(move |now| {
        let (value, done) = count.frame(now);
        el.set_text_content(Some(&value.to_string()));
        !done
    })
}
