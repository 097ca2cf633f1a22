// ============================================================================
// ROUTER - Rutas de la app + navegación (History API)
// ============================================================================

use wasm_bindgen::JsValue;
use crate::state::reactivity::ReactiveState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` - login / signup
    Login,
    Browse,
    BookingHistory,
    BookHotel,
    /// Cualquier otra ruta: vista de error
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Login,
            "/browse" => Route::Browse,
            "/booking-history" => Route::BookingHistory,
            "/book-hotel" => Route::BookHotel,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Login => "/",
            Route::Browse => "/browse",
            Route::BookingHistory => "/booking-history",
            Route::BookHotel => "/book-hotel",
            Route::NotFound(path) => path,
        }
    }

    /// Pantallas que exigen sesión
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Browse | Route::BookingHistory | Route::BookHotel)
    }
}

/// Las pantallas piden navegación; no tocan la History API directamente
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Navegador del browser: actualiza la ruta reactiva (la app re-renderiza)
/// y hace `history.pushState`.
#[derive(Clone)]
pub struct HistoryNavigator {
    route: ReactiveState<Route>,
}

impl HistoryNavigator {
    pub fn new(route: ReactiveState<Route>) -> Self {
        Self { route }
    }

    /// Ruta actual según `window.location.pathname`
    pub fn current_location() -> Route {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Route::from_path(&path))
            .unwrap_or(Route::Login)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        if self.route.with(|current| *current == route) {
            return;
        }
        log::info!("🧭 [ROUTER] → {}", route.path());
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
                log::warn!("⚠️ [ROUTER] pushState falló: {:?}", e);
            }
        }
        self.route.set(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Login);
        assert_eq!(Route::from_path(""), Route::Login);
        assert_eq!(Route::from_path("/browse"), Route::Browse);
        assert_eq!(Route::from_path("/browse/"), Route::Browse);
        assert_eq!(Route::from_path("/booking-history"), Route::BookingHistory);
        assert_eq!(Route::from_path("/book-hotel"), Route::BookHotel);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        let route = Route::from_path("/nope");
        assert_eq!(route, Route::NotFound("/nope".into()));
        assert_eq!(route.path(), "/nope");
        assert!(!route.is_protected());
    }

    #[test]
    fn paths_round_trip() {
        for route in [Route::Login, Route::Browse, Route::BookingHistory, Route::BookHotel] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
