use crate::constants::{CANVAS_ID, CANVAS_STYLE, LINK_FEATURES, LINK_TARGET, MAX_BACKING_PX};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create the full-viewport canvas and append it to `<body>`.
pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(CANVAS_ID);
    let style = canvas.style();
    for (name, value) in CANVAS_STYLE {
        style
            .set_property(name, value)
            .map_err(|e| anyhow::anyhow!("canvas style {}: {:?}", name, e))?;
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

/// Match the canvas backing store to its CSS size times devicePixelRatio and
/// return the new pixel size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = ((rect.width() * dpr) as u32).clamp(1, MAX_BACKING_PX);
        let h_px = ((rect.height() * dpr) as u32).clamp(1, MAX_BACKING_PX);
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
    (canvas.width(), canvas.height())
}

/// Open `url` in a new tab without handing it a reference to this window.
pub fn open_link(url: &str) {
    let Some(window) = web::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target_and_features(url, LINK_TARGET, LINK_FEATURES) {
        log::warn!("[link] window.open failed for {}: {:?}", url, e);
    }
}
