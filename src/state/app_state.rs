// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Ruta actual + pantalla montada. Cada cambio de ruta desmonta la pantalla
// anterior y monta la nueva; cualquier cambio (ruta, sesión, estado de la
// pantalla) se notifica a los change_subscribers (re-render).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::router::Route;
use crate::state::reactivity::ReactiveState;
use crate::viewmodels::{
    BookHotelViewModel, BookingHistoryViewModel, BrowseViewModel, LoginViewModel, ScreenContext,
};

/// Pantalla activa con su viewmodel
#[derive(Clone)]
pub enum Screen {
    Login(Rc<LoginViewModel>),
    Browse(Rc<BrowseViewModel>),
    BookHotel(Rc<BookHotelViewModel>),
    BookingHistory(Rc<BookingHistoryViewModel>),
    NotFound(String),
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Login(_) => Route::Login,
            Screen::Browse(_) => Route::Browse,
            Screen::BookHotel(_) => Route::BookHotel,
            Screen::BookingHistory(_) => Route::BookingHistory,
            Screen::NotFound(path) => Route::NotFound(path.clone()),
        }
    }

    fn unmount(&self) {
        match self {
            Screen::Login(vm) => vm.unmount(),
            Screen::Browse(vm) => vm.unmount(),
            Screen::BookHotel(vm) => vm.unmount(),
            Screen::BookingHistory(vm) => vm.unmount(),
            Screen::NotFound(_) => {}
        }
    }
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub ctx: ScreenContext,
    pub route: ReactiveState<Route>,
    screen: Rc<RefCell<Option<Screen>>>,

    // Reactivity: Callbacks para notificar cambios
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new(ctx: ScreenContext, route: ReactiveState<Route>) -> Self {
        let state = Self {
            ctx,
            route,
            screen: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        };

        let subscribers = state.change_subscribers.clone();
        state.route.subscribe(move |route| {
            log::info!("🧭 [STATE] Ruta → {}", route.path());
            notify(&subscribers);
        });
        let subscribers = state.change_subscribers.clone();
        state.ctx.session.subscribe(move |session| {
            log::info!("🔐 [STATE] Sesión cambiada (autenticado: {})", session.is_authenticated());
            notify(&subscribers);
        });

        state
    }

    /// Suscribirse a cambios de estado crítico
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn current_screen(&self) -> Option<Screen> {
        self.screen.borrow().clone()
    }

    /// Alinea la pantalla montada con la ruta actual.
    /// Devuelve la pantalla recién montada (None si no hubo cambio).
    pub fn sync_screen(&self) -> Option<Screen> {
        let route = self.route.get();
        let previous = {
            let current = self.screen.borrow();
            match current.as_ref() {
                Some(screen) if screen.route() == route => return None,
                other => other.cloned(),
            }
        };
        if let Some(previous) = previous {
            previous.unmount();
        }

        let screen = self.build_screen(&route);
        *self.screen.borrow_mut() = Some(screen.clone());
        self.mount(&screen);
        Some(screen)
    }

    fn build_screen(&self, route: &Route) -> Screen {
        let ctx = self.ctx.clone();
        match route {
            Route::Login => {
                let vm = LoginViewModel::new(ctx);
                self.forward_changes(&vm.state);
                Screen::Login(Rc::new(vm))
            }
            Route::Browse => Screen::Browse(Rc::new(BrowseViewModel::new(ctx))),
            Route::BookHotel => {
                let vm = BookHotelViewModel::new(ctx);
                self.forward_changes(&vm.state);
                Screen::BookHotel(Rc::new(vm))
            }
            Route::BookingHistory => {
                let vm = BookingHistoryViewModel::new(ctx);
                self.forward_changes(&vm.state);
                Screen::BookingHistory(Rc::new(vm))
            }
            Route::NotFound(path) => Screen::NotFound(path.clone()),
        }
    }

    /// El guard de la pantalla puede navegar durante el montaje
    fn mount(&self, screen: &Screen) {
        match screen {
            Screen::Login(vm) => {
                vm.mount();
            }
            Screen::Browse(vm) => {
                vm.mount();
            }
            Screen::BookHotel(vm) => {
                vm.mount();
            }
            Screen::BookingHistory(vm) => {
                vm.mount();
            }
            Screen::NotFound(path) => log::warn!("⚠️ [STATE] Ruta desconocida: {}", path),
        }
    }

    fn forward_changes<T: Clone + 'static>(&self, screen_state: &ReactiveState<T>) {
        let subscribers = self.change_subscribers.clone();
        screen_state.subscribe(move |_| notify(&subscribers));
    }
}

fn notify(subscribers: &Rc<RefCell<Vec<Rc<dyn Fn()>>>>) {
    let callbacks: Vec<Rc<dyn Fn()>> = subscribers.borrow().iter().cloned().collect();
    for callback in callbacks {
        callback();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use crate::test_support::{logged_in_session, Harness};

    fn app(h: &Harness, route: Route) -> AppState {
        AppState::new(h.ctx.clone(), ReactiveState::new(route))
    }

    #[test]
    fn mounts_screen_for_route_once() {
        let h = Harness::logged_in();
        let state = app(&h, Route::Browse);

        assert!(matches!(state.sync_screen(), Some(Screen::Browse(_))));
        assert!(state.sync_screen().is_none());
        assert_eq!(state.current_screen().map(|s| s.route()), Some(Route::Browse));
        assert!(h.routes().is_empty());
    }

    #[test]
    fn protected_route_without_session_requests_login() {
        let h = Harness::new();
        let state = app(&h, Route::BookingHistory);

        state.sync_screen();

        assert_eq!(h.routes(), vec![Route::Login]);
        assert_eq!(h.transport.request_count(), 0);
    }

    #[test]
    fn route_change_swaps_screen_and_unmounts_previous() {
        let h = Harness::logged_in();
        let state = app(&h, Route::BookHotel);
        let first = match state.sync_screen() {
            Some(Screen::BookHotel(vm)) => vm,
            _ => panic!("expected book hotel screen"),
        };
        let today = chrono::NaiveDate::from_ymd_opt(2030, 5, 1).unwrap();
        assert!(first.select_date(today.succ_opt().unwrap(), today));

        state.route.set(Route::NotFound("/nope".into()));
        assert!(matches!(state.sync_screen(), Some(Screen::NotFound(path)) if path == "/nope"));

        // Pantalla desmontada: el fallo de red se descarta en silencio
        futures::executor::block_on(first.view_hotels());
        assert_eq!(h.transport.request_count(), 1);
        assert!(h.alerts().is_empty());
    }

    #[test]
    fn route_session_and_screen_changes_notify() {
        let h = Harness::new();
        let state = app(&h, Route::Login);
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        state.subscribe_to_changes(move || counter.set(counter.get() + 1));

        let screen = state.sync_screen();
        state.route.set(Route::Browse);
        h.ctx.session.set(logged_in_session());
        if let Some(Screen::Login(vm)) = screen {
            vm.toggle_form();
        }

        assert_eq!(count.get(), 3);
    }
}
