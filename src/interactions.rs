use yew::prelude::*;

use crate::components::{
    contact::use_contact_form,
    count_up::use_count_up,
    cursor_glow::use_cursor_glow,
    magnet::use_magnets,
    nav::use_nav_toggle,
    overlay::{use_overlay, OverlayKind},
    reveal::use_reveal,
    scroll::{use_scroll_progress, use_sticky_cta},
    testimonials::use_testimonials,
};

/// Renders nothing. Owns every behavior bound to the server-rendered page,
/// each one attached on mount and detached on unmount.
#[function_component(Interactions)]
pub fn interactions() -> Html {
    use_nav_toggle();
    use_scroll_progress();
    use_sticky_cta();
    use_reveal();
    use_cursor_glow();
    use_magnets();
    use_count_up();
    use_overlay(OverlayKind::Video);
    use_overlay(OverlayKind::Image);
    use_testimonials();
    use_contact_form();

    html! {}
}
