// ============================================================================
// APP VIEW - Despacha a la vista de la pantalla activa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::app_state::{AppState, Screen};
use crate::views::{
    render_book_hotel, render_booking_history, render_browse, render_login, render_not_found,
};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let screen = state
        .current_screen()
        // Pantalla protegida sin sesión: el guard ya redirigió, no se pinta nada
        .filter(|s| !s.route().is_protected() || state.ctx.session.is_authenticated());

    let content = match screen {
        Some(Screen::Login(vm)) => render_login(&vm)?,
        Some(Screen::Browse(vm)) => render_browse(&vm)?,
        Some(Screen::BookHotel(vm)) => render_book_hotel(&vm)?,
        Some(Screen::BookingHistory(vm)) => render_booking_history(&vm)?,
        Some(Screen::NotFound(path)) => render_not_found(&path)?,
        None => ElementBuilder::new("div")?.build(),
    };

    Ok(ElementBuilder::new("div")?
        .class("app-container")
        .child(content)?
        .build())
}
