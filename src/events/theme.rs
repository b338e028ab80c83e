use backdrop_core::{Theme, ThemeSource};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::THEME_ATTRIBUTE;

/// Watch `<body data-theme>` and publish every change to `theme`.
///
/// The returned observer must be disconnected on teardown; its callback is
/// leaked like the other listeners.
#[allow(deprecated)]
pub fn wire_theme_observer(
    document: &web::Document,
    theme: &ThemeSource,
) -> anyhow::Result<web::MutationObserver> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no <body>"))?;

    let theme = theme.clone();
    let body_for_cb = body.clone();
    let closure = Closure::wrap(Box::new(
        move |_records: js_sys::Array, _observer: web::MutationObserver| {
            let attr = body_for_cb.get_attribute(THEME_ATTRIBUTE);
            theme.set(Theme::from_attribute(attr.as_deref()));
        },
    ) as Box<dyn FnMut(_, _)>);

    let observer = web::MutationObserver::new(closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();

    let filter = js_sys::Array::of1(&JsValue::from_str(THEME_ATTRIBUTE));
    let mut init = web::MutationObserverInit::new();
    init.attributes(true);
    init.attribute_filter(&filter);
    observer
        .observe_with_options(&body, &init)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(observer)
}
