use crate::core::{Scene, Typeface, FONT_URL, LINKS};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Fetch and parse a typeface JSON font.
pub async fn fetch_typeface(url: &str) -> anyhow::Result<Typeface> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !response.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, response.status());
    }
    let body = response
        .text()
        .map_err(|e| anyhow::anyhow!("read body: {:?}", e))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| anyhow::anyhow!("read body: {:?}", e))?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("font body is not text"))?;
    Ok(Typeface::from_json(&text)?)
}

/// Load the label font in the background and populate `scene` once it
/// arrives. There is no retry: on failure the scene keeps only its lights.
pub fn load_labels(scene: Rc<RefCell<Scene>>) {
    spawn_local(async move {
        let started = Instant::now();
        match fetch_typeface(FONT_URL).await {
            Ok(font) => {
                log::info!(
                    "[font] {} loaded: {} glyphs in {} ms",
                    font.family_name,
                    font.glyph_count(),
                    started.elapsed().as_millis()
                );
                scene.borrow_mut().populate(&LINKS, &font);
            }
            Err(e) => log::warn!("[font] load failed, labels disabled: {:?}", e),
        }
    });
}
