//! Tooltips: a click inside a `.tooltip` marks it active and clears every
//! other one.

use resume_prefs::consts::{TOOLTIP_ACTIVE_CLASS, TOOLTIP_SELECTOR};
use resume_prefs::tooltip::{TooltipActivator, TooltipHost};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::{Clicks, dom};

struct DomTooltips {
    document: Document,
}

impl TooltipHost for DomTooltips {
    type Key = Element;

    fn clear_all(&mut self) {
        let Some(list) = dom::check(self.document.query_selector_all(TOOLTIP_SELECTOR), "query tooltips") else {
            return;
        };
        for i in 0..list.length() {
            if let Some(tooltip) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                dom::check(tooltip.class_list().remove_1(TOOLTIP_ACTIVE_CLASS), "clear tooltip");
            }
        }
    }

    fn mark(&mut self, key: &Element) {
        dom::check(key.class_list().add_1(TOOLTIP_ACTIVE_CLASS), "activate tooltip");
    }
}

pub fn mount(document: &Document, clicks: &Clicks) {
    let mut host = DomTooltips { document: document.clone() };
    let mut activator = TooltipActivator::new();
    clicks.borrow_mut().subscribe(move |event: &Event| {
        let hit = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| dom::check(el.closest(TOOLTIP_SELECTOR), "find tooltip").flatten());
        activator.click(&mut host, hit);
    });
}
