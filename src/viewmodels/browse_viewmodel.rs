// ============================================================================
// BROWSE VIEWMODEL - Menú principal tras el login
// ============================================================================

use crate::models::session::User;
use crate::router::Route;
use crate::viewmodels::auth_guard::{require_authenticated, sign_out};
use crate::viewmodels::context::{MountFlag, ScreenContext};

pub struct BrowseViewModel {
    ctx: ScreenContext,
    mounted: MountFlag,
}

impl BrowseViewModel {
    pub fn new(ctx: ScreenContext) -> Self {
        Self {
            ctx,
            mounted: MountFlag::default(),
        }
    }

    /// Devuelve el usuario si hay sesión; si no, redirige a login
    pub fn mount(&self) -> Option<User> {
        self.mounted.activate();
        require_authenticated(&self.ctx)
    }

    pub fn unmount(&self) {
        self.mounted.deactivate();
    }

    pub fn user_name(&self) -> Option<String> {
        self.ctx.session.get().user.map(|u| u.name)
    }

    pub fn book_hotels(&self) {
        self.ctx.navigator.navigate(Route::BookHotel);
    }

    pub fn view_booking_history(&self) {
        self.ctx.navigator.navigate(Route::BookingHistory);
    }

    pub fn sign_out(&self) {
        sign_out(&self.ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Harness;

    #[test]
    fn menu_navigates_to_both_screens() {
        let h = Harness::logged_in();
        let vm = BrowseViewModel::new(h.ctx.clone());
        assert_eq!(vm.mount().map(|u| u.name), Some("Ann".to_string()));

        vm.book_hotels();
        vm.view_booking_history();

        assert_eq!(h.routes(), vec![Route::BookHotel, Route::BookingHistory]);
        assert_eq!(h.transport.request_count(), 0);
    }

    #[test]
    fn mount_without_session_redirects_every_time() {
        let h = Harness::new();
        let vm = BrowseViewModel::new(h.ctx.clone());

        assert!(vm.mount().is_none());
        assert!(vm.mount().is_none());

        assert_eq!(h.routes(), vec![Route::Login, Route::Login]);
        assert_eq!(h.persistence.writes(), 0);
        assert_eq!(h.transport.request_count(), 0);
    }

    #[test]
    fn sign_out_clears_session() {
        let h = Harness::logged_in();
        let vm = BrowseViewModel::new(h.ctx.clone());
        vm.mount();

        vm.sign_out();

        assert!(!h.ctx.session.is_authenticated());
        assert_eq!(vm.user_name(), None);
        assert_eq!(h.routes(), vec![Route::Login]);
    }
}
