//! Avatar: `#default-avatar` switches between its light and dark sources
//! whenever the body's scheme marker changes.

use gloo_timers::callback::Timeout;
use resume_prefs::avatar::AvatarSources;
use resume_prefs::consts::{AVATAR_DARK_ATTR, AVATAR_ID, AVATAR_LIGHT_ATTR, FADE_DELAY_MS};
use resume_prefs::theme::ColorScheme;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlImageElement, MutationObserver, MutationObserverInit};

use crate::dom;

pub fn mount(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    let Some(avatar) = document.get_element_by_id(AVATAR_ID).and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    else {
        return;
    };
    let Some(sources) =
        AvatarSources::from_attrs(avatar.get_attribute(AVATAR_LIGHT_ATTR), avatar.get_attribute(AVATAR_DARK_ATTR))
    else {
        log::debug!("avatar has no light/dark sources; not following theme");
        return;
    };

    update(&avatar, &body, &sources);

    let observed = body.clone();
    let callback = Closure::<dyn FnMut()>::new(move || update(&avatar, &observed, &sources));
    let Some(observer) = dom::check(MutationObserver::new(callback.as_ref().unchecked_ref()), "create observer")
    else {
        return;
    };
    let options = MutationObserverInit::new();
    options.set_attributes(true);
    options.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));
    if dom::check(observer.observe_with_options(&body, &options), "observe body class").is_some() {
        callback.forget();
    }
}

fn update(avatar: &HtmlImageElement, body: &HtmlElement, sources: &AvatarSources) {
    let scheme = ColorScheme::from_dark(body.class_list().contains(ColorScheme::Dark.marker()));
    let Some(target) = sources.swap_target(&avatar.src(), scheme) else {
        return;
    };
    set_opacity(avatar, "0");

    let (avatar, target) = (avatar.clone(), target.to_owned());
    Timeout::new(FADE_DELAY_MS, move || {
        let faded = avatar.clone();
        let onload = Closure::once_into_js(move || set_opacity(&faded, "1"));
        avatar.set_onload(Some(onload.unchecked_ref()));
        avatar.set_src(&target);
    })
    .forget();
}

fn set_opacity(avatar: &HtmlImageElement, value: &str) {
    dom::check(avatar.style().set_property("opacity", value), "set avatar opacity");
}
