//! `#scroll-to-top` smoothly scrolls the window back to the top.

use resume_prefs::consts::SCROLL_TOP_ID;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;

pub fn mount(window: &Window, document: &Document) {
    let Some(button) = document.get_element_by_id(SCROLL_TOP_ID) else {
        return;
    };
    let window = window.clone();
    dom::listen(&button, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    });
}
