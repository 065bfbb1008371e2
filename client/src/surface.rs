//! DOM implementations of the core's page traits.

use resume_prefs::consts::DARK_SCHEME_QUERY;
use resume_prefs::surface::{LinkHost, SchemeSource, Surface};
use web_sys::{Document, Element, MediaQueryList, Window};

use crate::dom::check;

/// Marker targets plus an optional indicator icon and toggle button.
pub struct DomSurface {
    targets: Vec<Element>,
    icon: Option<Element>,
    toggle: Option<Element>,
}

impl DomSurface {
    pub fn new(targets: Vec<Element>, icon: Option<Element>, toggle: Option<Element>) -> Self {
        Self { targets, icon, toggle }
    }
}

impl Surface for DomSurface {
    fn swap_marker(&mut self, stale: &[&str], active: &str) {
        for target in &self.targets {
            let classes = target.class_list();
            for class in stale {
                check(classes.remove_1(class), "remove marker class");
            }
            check(classes.add_1(active), "add marker class");
        }
    }

    fn set_indicator(&mut self, icon_class: &str, title: &str) {
        if let Some(icon) = &self.icon {
            icon.set_class_name(icon_class);
        }
        if let Some(toggle) = &self.toggle {
            check(toggle.set_attribute("title", title), "set toggle title");
        }
    }
}

/// Stylesheet `<link>` elements appended to `<head>`.
pub struct HeadLinks {
    document: Document,
}

impl HeadLinks {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl LinkHost for HeadLinks {
    type Link = Element;

    fn attach(&mut self, href: &str) -> Option<Element> {
        let head = self.document.head()?;
        let link = check(self.document.create_element("link"), "create link")?;
        for (name, value) in [("rel", "stylesheet"), ("type", "text/css"), ("href", href)] {
            check(link.set_attribute(name, value), "set link attribute")?;
        }
        check(head.append_child(&link), "append link")?;
        Some(link)
    }

    fn detach(&mut self, link: Element) {
        link.remove();
    }
}

/// `prefers-color-scheme: dark` media query. Reports light when the
/// browser does not support it.
#[derive(Clone)]
pub struct MediaScheme {
    query: Option<MediaQueryList>,
}

impl MediaScheme {
    pub fn new(window: &Window) -> Self {
        Self { query: check(window.match_media(DARK_SCHEME_QUERY), "match color-scheme media").flatten() }
    }

    /// The underlying query, for subscribing to `change`.
    pub fn query(&self) -> Option<&MediaQueryList> {
        self.query.as_ref()
    }
}

impl SchemeSource for MediaScheme {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().is_some_and(MediaQueryList::matches)
    }
}
