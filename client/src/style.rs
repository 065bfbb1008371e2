//! Style toggle: `#style-toggle` cycles typography styles, marking `<body>`
//! and `<main>` and swapping the style's web-font stylesheet.

use std::cell::RefCell;
use std::rc::Rc;

use resume_prefs::consts::{STYLE_ICON_ID, STYLE_TOGGLE_ID};
use resume_prefs::cycler::Cycler;
use resume_prefs::effect::StyleEffect;
use resume_prefs::style::FontSheets;
use web_sys::{Document, Element};

use crate::dom;
use crate::store::LocalStore;
use crate::surface::{DomSurface, HeadLinks};

pub fn mount(document: &Document, store: &LocalStore, fonts: Option<FontSheets>) {
    let Some(body) = document.body() else {
        return;
    };
    let mut targets: Vec<Element> = vec![body.into()];
    if let Some(main) = dom::check(document.query_selector("main"), "query <main>").flatten() {
        targets.push(main);
    }
    if fonts.is_none() {
        log::debug!("no style fonts declared; styles switch without stylesheets");
    }

    let toggle = document.get_element_by_id(STYLE_TOGGLE_ID);
    let surface = DomSurface::new(targets, document.get_element_by_id(STYLE_ICON_ID), toggle.clone());
    let effect = StyleEffect::new(surface, HeadLinks::new(document.clone()), fonts);

    let cycler = Rc::new(RefCell::new(Cycler::new(store.clone(), effect)));
    let style = cycler.borrow_mut().load();
    log::debug!("style loaded: {style:?}");

    if let Some(toggle) = toggle {
        dom::listen(&toggle, "click", move |_| {
            cycler.borrow_mut().click();
        });
    }
}
