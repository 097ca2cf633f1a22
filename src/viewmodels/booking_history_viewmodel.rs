// ============================================================================
// BOOKING HISTORY VIEWMODEL
// ============================================================================

use crate::models::booking::Booking;
use crate::models::session::User;
use crate::router::Route;
use crate::services::booking_service;
use crate::state::reactivity::ReactiveState;
use crate::utils::constants::MSG_FETCH_BOOKINGS_FAILED;
use crate::viewmodels::auth_guard::{handle_api_error, require_authenticated, sign_out};
use crate::viewmodels::context::{Loadable, LoadingGuard, MountFlag, ScreenContext};

#[derive(Debug, Clone, PartialEq)]
pub struct BookingHistoryViewState {
    pub bookings: Vec<Booking>,
    pub loading: bool,
}

impl Default for BookingHistoryViewState {
    /// Arranca cargando: la lista se pide al montar
    fn default() -> Self {
        Self {
            bookings: Vec::new(),
            loading: true,
        }
    }
}

impl Loadable for BookingHistoryViewState {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

pub struct BookingHistoryViewModel {
    ctx: ScreenContext,
    pub state: ReactiveState<BookingHistoryViewState>,
    mounted: MountFlag,
}

impl BookingHistoryViewModel {
    pub fn new(ctx: ScreenContext) -> Self {
        Self {
            ctx,
            state: ReactiveState::new(BookingHistoryViewState::default()),
            mounted: MountFlag::default(),
        }
    }

    /// Con sesión, la vista debe llamar a `load()` a continuación
    pub fn mount(&self) -> Option<User> {
        self.mounted.activate();
        require_authenticated(&self.ctx)
    }

    pub fn unmount(&self) {
        self.mounted.deactivate();
    }

    pub async fn load(&self) {
        if !self.ctx.session.is_authenticated() {
            // El guard ya redirigió a login; el spinner inicial no debe quedarse
            self.state.update(|s| s.set_loading(false));
            return;
        }
        // Sin token se pide igual: el 401 lleva al flujo de sesión expirada
        let token = self.ctx.session.access_token();

        let _loading = LoadingGuard::start(&self.state, &self.mounted);
        let result = booking_service::list_bookings(&self.ctx.api, token.as_deref()).await;
        if !self.mounted.is_active() {
            return;
        }

        match result {
            Ok(bookings) => self.state.update(|s| s.bookings = bookings),
            Err(e) => handle_api_error(&self.ctx, &e, MSG_FETCH_BOOKINGS_FAILED),
        }
    }

    pub fn back_to_browse(&self) {
        self.ctx.navigator.navigate(Route::Browse);
    }

    pub fn sign_out(&self) {
        sign_out(&self.ctx);
    }
}
