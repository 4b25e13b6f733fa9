use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom::{self, FrameLoop};

/// Share of the remaining distance covered each frame.
pub const EASING: f64 = 0.08;

pub fn lerp(from: f64, to: f64, factor: f64) -> f64 {
    from + (to - from) * factor
}

/// Eased glow position chasing the last known pointer position.
#[derive(Debug, Clone, PartialEq)]
pub struct Glow {
    x: f64,
    y: f64,
    target_x: f64,
    target_y: f64,
}

impl Glow {
    pub fn centered(viewport_width: f64, viewport_height: f64) -> Self {
        let (x, y) = (viewport_width / 2.0, viewport_height / 2.0);
        Self {
            x,
            y,
            target_x: x,
            target_y: y,
        }
    }

    pub fn aim(&mut self, x: f64, y: f64) {
        self.target_x = x;
        self.target_y = y;
    }

    pub fn step(&mut self) -> (f64, f64) {
        self.x = lerp(self.x, self.target_x, EASING);
        self.y = lerp(self.y, self.target_y, EASING);
        (self.x, self.y)
    }
}

#[hook]
pub fn use_cursor_glow() {
    let glow = use_mut_ref(|| {
        let (width, height) = dom::viewport_size();
        Glow::centered(width, height)
    });

    {
        let glow = glow.clone();
        use_event_with_window("pointermove", move |e: MouseEvent| {
            glow.borrow_mut()
                .aim(e.client_x() as f64, e.client_y() as f64);
        });
    }

    use_effect_with_deps(
        move |_| {
            let frames = dom::bound("cursor glow", bind(glow));
            move || drop(frames)
        },
        (),
    );
}

fn bind(glow: Rc<RefCell<Glow>>) -> Result<Option<FrameLoop>, JsValue> {
    let Some(el) = dom::query_html("[data-cursor]") else {
        return Ok(None);
    };
    // Runs every frame for as long as the page is open.
    let frames = FrameLoop::start(move |_| {
        let (x, y) = glow.borrow_mut().step();
        let _ = dom::set_style(&el, "left", &format!("{}px", x));
        let _ = dom::set_style(&el, "top", &format!("{}px", y));
        true
    })?;
    Ok(Some(frames))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_viewport_center() {
        let mut glow = Glow::centered(1200.0, 800.0);
        assert_eq!(glow.step(), (600.0, 400.0));
    }

    #[test]
    fn test_step_moves_eight_percent() {
        let mut glow = Glow::centered(0.0, 0.0);
        glow.aim(100.0, -50.0);
        let (x, y) = glow.step();
        assert!((x - 8.0).abs() < 1e-9);
        assert!((y + 4.0).abs() < 1e-9);

        let (x, _) = glow.step();
        assert!((x - 15.36).abs() < 1e-9);
    }

    #[test]
    fn test_converges_without_overshoot() {
        let mut glow = Glow::centered(0.0, 0.0);
        glow.aim(300.0, 300.0);
        let mut last = 0.0;
        for _ in 0..200 {
            let (x, _) = glow.step();
            assert!(x >= last && x <= 300.0);
            last = x;
        }
        assert!(300.0 - last < 0.01);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(4.0, 4.0, EASING), 4.0);
    }
}
