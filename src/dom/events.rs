// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Los listeners en elementos del DOM usan closure.forget(): al destruir el
// elemento (re-render con set_inner_html("")) el navegador los libera.
// Los listeners globales (window) se registran UNA sola vez en main().
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Submit de formulario, sin recargar la página
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Valor actual de un `<input>` en cada evento `input`
pub fn on_input_value<F>(input: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen_value(input, "input", handler)
}

/// Valor de un `<input>` al confirmar (`change`), p.ej. date pickers
pub fn on_change_value<F>(input: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen_value(input, "change", handler)
}

fn listen_value<F>(input: &Element, event_type: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            handler(target.value());
        }
    }) as Box<dyn FnMut(Event)>);
    input.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
