//! Theme toggle: `#theme-toggle` cycles light → dark → auto, the body
//! carries the resolved scheme, and `auto` tracks the system setting.

use std::cell::RefCell;
use std::rc::Rc;

use resume_prefs::consts::{THEME_ICON_ID, THEME_TOGGLE_ID};
use resume_prefs::cycler::Cycler;
use resume_prefs::effect::ThemeEffect;
use web_sys::{Document, Window};

use crate::dom;
use crate::store::LocalStore;
use crate::surface::{DomSurface, MediaScheme};

pub fn mount(window: &Window, document: &Document, store: &LocalStore) {
    let Some(body) = document.body() else {
        return;
    };
    let toggle = document.get_element_by_id(THEME_TOGGLE_ID);
    let surface = DomSurface::new(vec![body.into()], document.get_element_by_id(THEME_ICON_ID), toggle.clone());
    let scheme = MediaScheme::new(window);
    let query = scheme.query().cloned();

    let cycler = Rc::new(RefCell::new(Cycler::new(store.clone(), ThemeEffect::new(surface, scheme))));
    let theme = cycler.borrow_mut().load();
    log::debug!("theme loaded: {theme:?}");

    if let Some(toggle) = toggle {
        let cycler = Rc::clone(&cycler);
        dom::listen(&toggle, "click", move |_| {
            cycler.borrow_mut().click();
        });
    }
    if let Some(query) = query {
        dom::listen(&query, "change", move |_| {
            cycler.borrow_mut().color_scheme_changed();
        });
    }
}
