// ============================================================================
// APP - Aplicación principal: arranque, montaje de pantallas y render
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::{HistoryNavigator, Route};
use crate::services::api_client::ApiClient;
use crate::services::notifier::WindowNotifier;
use crate::services::session_persistence::LocalStoragePersistence;
use crate::state::app_state::{AppState, Screen};
use crate::state::reactivity::ReactiveState;
use crate::state::session_store::SessionStore;
use crate::utils::constants::ROOT_ELEMENT_ID;
use crate::viewmodels::ScreenContext;
use crate::views::render_app;

thread_local! {
    static RENDER_PENDING: Cell<bool> = Cell::new(false);
}

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        // Sesión restaurada desde localStorage antes del primer render
        let session = SessionStore::rehydrate(Rc::new(LocalStoragePersistence::new()));
        let route = ReactiveState::new(HistoryNavigator::current_location());
        let ctx = ScreenContext {
            session,
            api: ApiClient::new(),
            navigator: Rc::new(HistoryNavigator::new(route.clone())),
            notifier: Rc::new(WindowNotifier),
        };
        log::info!("🌐 [APP] API: {}", ctx.api.base_url());

        let state = AppState::new(ctx, route);
        state.subscribe_to_changes(schedule_render);

        Ok(Self { state, root })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(entered) = self.state.sync_screen() {
            log::info!("🎬 [APP] Pantalla montada: {}", entered.route().path());
            if let Screen::BookingHistory(vm) = entered {
                spawn_local(async move { vm.load().await });
            }
        }

        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)
    }

    /// Back/forward del navegador: la URL ya cambió, solo se sincroniza la ruta
    pub fn restore_route(&self, route: Route) {
        self.state.route.set(route);
    }
}

/// Varios cambios en el mismo tick → un solo re-render
fn schedule_render() {
    if RENDER_PENDING.with(|pending| pending.replace(true)) {
        return;
    }
    Timeout::new(0, || {
        RENDER_PENDING.with(|pending| pending.set(false));
        crate::rerender_app();
    })
    .forget();
}
