use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;

/// Vista para rutas desconocidas
pub fn render_not_found(path: &str) -> Result<Element, JsValue> {
    log::warn!("⚠️ [VIEW] Página no encontrada: {}", path);
    Ok(ElementBuilder::new("div")?
        .class("not-found")
        .child(ElementBuilder::new("h2")?.text("Error: Page Not Found").build())?
        .child(ElementBuilder::new("p")?.text("The requested page does not exist.").build())?
        .build())
}
