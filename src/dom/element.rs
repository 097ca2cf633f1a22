// ============================================================================
// ELEMENT HELPERS - Acceso al document y operaciones DOM mínimas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Nodo raíz por ID (None fuera del navegador o si no existe)
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .create_element(tag)
}

/// Vaciar un contenedor antes de re-renderizar
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}
