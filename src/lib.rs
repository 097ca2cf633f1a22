// ============================================================================
// HOTEL BOOKING APP - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica de cada pantalla
// - Services: SOLO comunicación API y persistencia
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod config;
mod models;
mod services;
mod viewmodels;
mod state;
mod router;
mod dom;
mod views;
mod utils;
mod app;
#[cfg(test)]
mod test_support;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;
use crate::router::HistoryNavigator;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 Hotel Booking App - Rust Puro + MVVM ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Back/forward: listener global, se registra una sola vez
    if let Some(win) = web_sys::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_e: web_sys::Event| {
            let route = HistoryNavigator::current_location();
            log::info!("🔙 [MAIN] popstate → {}", route.path());
            APP.with(|app_cell| {
                if let Some(app) = app_cell.borrow().as_ref() {
                    app.restore_route(route);
                }
            });
        }) as Box<dyn FnMut(web_sys::Event)>);

        win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow_mut().as_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App no está inicializada");
        }
    });
}
