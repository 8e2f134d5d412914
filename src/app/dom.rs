use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::sections::SectionId;

pub fn scroll_to_section(section: SectionId) {
    let Some(el) = document().get_element_by_id(section.anchor()) else {
        log::warn!("no element for section #{}", section.anchor());
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Hides an `<img>` whose source failed to load.
pub fn hide_broken_image(ev: &web_sys::Event) {
    let img = event_target::<web_sys::HtmlImageElement>(ev);
    log::warn!("image not found: {}", img.src());
    img.set_hidden(true);
}
