use backdrop_core::{Theme, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::THEME_ATTRIBUTE;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// `window.innerWidth` x `window.innerHeight`, clamped by [`Viewport::new`].
pub fn window_viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

pub fn body_theme(document: &web::Document) -> Theme {
    let attr = document
        .body()
        .and_then(|b| b.get_attribute(THEME_ATTRIBUTE));
    Theme::from_attribute(attr.as_deref())
}

pub fn set_body_theme(document: &web::Document, theme: Theme) {
    if let Some(body) = document.body() {
        _ = body.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}
