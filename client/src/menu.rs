//! Account menu: `#auth-toggle` opens and closes `.auth`; clicking
//! anywhere else closes it.

use std::cell::Cell;
use std::rc::Rc;

use resume_prefs::consts::{MENU_OPEN_CLASS, MENU_PANEL_SELECTOR, MENU_TRIGGER_ID};
use resume_prefs::menu::{ClickHit, MenuToggle};
use web_sys::{Document, Element, Event};

use crate::{Clicks, dom};

pub fn mount(document: &Document, clicks: &Clicks) {
    let trigger = document.get_element_by_id(MENU_TRIGGER_ID);
    let panel = dom::check(document.query_selector(MENU_PANEL_SELECTOR), "query menu panel").flatten();
    let (Some(trigger), Some(panel)) = (trigger, panel) else {
        return;
    };
    let menu = Rc::new(Cell::new(MenuToggle::new()));

    {
        let (menu, panel) = (Rc::clone(&menu), panel.clone());
        dom::listen(&trigger, "click", move |event| {
            // Keep this click from reaching the document-level handler.
            event.stop_propagation();
            let mut state = menu.get();
            let open = state.trigger_clicked();
            menu.set(state);
            show(&panel, open);
        });
    }

    clicks.borrow_mut().subscribe(move |event: &Event| {
        let target = dom::event_node(event);
        let hit = ClickHit { in_trigger: trigger.contains(target.as_ref()), in_panel: panel.contains(target.as_ref()) };
        let mut state = menu.get();
        if state.document_clicked(hit) {
            show(&panel, false);
        }
        menu.set(state);
    });
}

fn show(panel: &Element, open: bool) {
    dom::check(panel.class_list().toggle_with_force(MENU_OPEN_CLASS, open), "toggle menu panel");
}
