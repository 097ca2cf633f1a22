// ============================================================================
// BOOK HOTEL VIEWMODEL - Fecha → hoteles disponibles → reserva
// ============================================================================

use chrono::NaiveDate;
use crate::models::hotel::Hotel;
use crate::models::session::User;
use crate::router::Route;
use crate::services::hotel_service;
use crate::state::reactivity::ReactiveState;
use crate::utils::constants::{MSG_BOOK_HOTEL_FAILED, MSG_FETCH_HOTELS_FAILED, MSG_FUTURE_DATE};
use crate::utils::dates::is_future_date;
use crate::viewmodels::auth_guard::{handle_api_error, require_authenticated, sign_out};
use crate::viewmodels::context::{Loadable, LoadingGuard, MountFlag, ScreenContext};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookHotelViewState {
    pub selected_date: Option<NaiveDate>,
    pub hotels: Vec<Hotel>,
    pub loading: bool,
}

impl Loadable for BookHotelViewState {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

pub struct BookHotelViewModel {
    ctx: ScreenContext,
    pub state: ReactiveState<BookHotelViewState>,
    mounted: MountFlag,
}

impl BookHotelViewModel {
    pub fn new(ctx: ScreenContext) -> Self {
        Self {
            ctx,
            state: ReactiveState::new(BookHotelViewState::default()),
            mounted: MountFlag::default(),
        }
    }

    pub fn mount(&self) -> Option<User> {
        self.mounted.activate();
        require_authenticated(&self.ctx)
    }

    pub fn unmount(&self) {
        self.mounted.deactivate();
    }

    /// Hoy o antes se rechaza con un alert y no cambia nada
    pub fn select_date(&self, date: NaiveDate, today: NaiveDate) -> bool {
        if !is_future_date(date, today) {
            log::info!("📅 [BOOK] Fecha no futura: {}", date);
            self.ctx.notifier.alert(MSG_FUTURE_DATE);
            return false;
        }
        self.state.update(|s| s.selected_date = Some(date));
        true
    }

    /// Acción principal deshabilitada mientras hay una petición en vuelo
    pub fn is_busy(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub async fn view_hotels(&self) {
        if self.is_busy() {
            return;
        }
        let Some(date) = self.state.with(|s| s.selected_date) else {
            log::info!("📅 [BOOK] Sin fecha seleccionada");
            return;
        };
        let token = self.ctx.session.access_token();

        let _loading = LoadingGuard::start(&self.state, &self.mounted);
        let result = hotel_service::view_hotels(&self.ctx.api, token.as_deref(), date).await;
        if !self.mounted.is_active() {
            return;
        }

        match result {
            Ok(hotels) => self.state.update(|s| s.hotels = hotels),
            Err(e) => handle_api_error(&self.ctx, &e, MSG_FETCH_HOTELS_FAILED),
        }
    }

    pub async fn book_hotel(&self, hotel: &Hotel) {
        if self.is_busy() {
            log::info!("⏳ [BOOK] Petición en curso, se ignora el click");
            return;
        }
        let Some(date) = self.state.with(|s| s.selected_date) else {
            return;
        };
        let token = self.ctx.session.access_token();

        let _loading = LoadingGuard::start(&self.state, &self.mounted);
        let result =
            hotel_service::create_booking(&self.ctx.api, token.as_deref(), &hotel.hotel_id, date).await;
        if !self.mounted.is_active() {
            return;
        }

        match result {
            Ok(booking) => {
                self.ctx.notifier.alert(&booking.confirmation_text());
                self.ctx.navigator.navigate(Route::BookingHistory);
            }
            Err(e) => handle_api_error(&self.ctx, &e, MSG_BOOK_HOTEL_FAILED),
        }
    }

    pub fn back_to_browse(&self) {
        self.ctx.navigator.navigate(Route::Browse);
    }

    pub fn sign_out(&self) {
        sign_out(&self.ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Harness;
    use crate::utils::constants::MSG_LOGIN_EXPIRED;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::rc::Rc;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    const HOTELS: &str = r#"{"data":[
        {"hotelId":"h1","name":"Sea View","location":"Goa","price":120},
        {"hotelId":"h2","name":"Hill Top","location":"Ooty","price":80.5}
    ]}"#;

    fn hotel() -> Hotel {
        Hotel {
            hotel_id: "h1".into(),
            name: "Sea View".into(),
            location: "Goa".into(),
            price: 120.0,
        }
    }

    #[test]
    fn past_or_today_is_rejected_without_request() {
        let h = Harness::logged_in();
        let vm = BookHotelViewModel::new(h.ctx.clone());
        vm.mount();
        let today = d(2024, 5, 10);

        assert!(!vm.select_date(d(2024, 5, 9), today));
        assert!(!vm.select_date(today, today));
        block_on(vm.view_hotels());

        assert_eq!(vm.state.get().selected_date, None);
        assert_eq!(h.alerts(), vec![MSG_FUTURE_DATE.to_string(), MSG_FUTURE_DATE.to_string()]);
        assert_eq!(h.transport.request_count(), 0);
    }

    #[test]
    fn view_hotels_lists_results() {
        let h = Harness::logged_in();
        h.transport.respond(200, HOTELS);
        let vm = BookHotelViewModel::new(h.ctx.clone());
        vm.mount();

        assert!(vm.select_date(d(2030, 6, 1), d(2030, 5, 1)));
        block_on(vm.view_hotels());

        let state = vm.state.get();
        assert_eq!(state.hotels.len(), 2);
        assert_eq!(state.hotels[1].price, 80.5);
        assert!(!state.loading);
        let sent = h.transport.last_request().unwrap();
        assert!(sent.url.ends_with("/hotels/view"));
        assert_eq!(sent.header("x-access-token"), Some("tok"));
    }

    #[test]
    fn failed_fetch_alerts_and_resets_loading() {
        let h = Harness::logged_in();
        h.transport.respond(500, "boom");
        let vm = BookHotelViewModel::new(h.ctx.clone());
        vm.mount();
        vm.select_date(d(2030, 6, 1), d(2030, 5, 1));

        block_on(vm.view_hotels());

        assert_eq!(h.alerts(), vec![MSG_FETCH_HOTELS_FAILED.to_string()]);
        assert!(!vm.state.get().loading);
        assert!(h.ctx.session.is_authenticated());
    }

    #[test]
    fn booking_confirms_and_opens_history() {
        let h = Harness::logged_in();
        h.transport.respond(
            200,
            r#"{"data":{"hotelName":"Sea View","price":120,"location":"Goa","checkIn":"2030-06-01T00:00:00.000Z"}}"#,
        );
        let vm = BookHotelViewModel::new(h.ctx.clone());
        vm.mount();
        vm.select_date(d(2030, 6, 1), d(2030, 5, 1));

        block_on(vm.book_hotel(&hotel()));

        let alerts = h.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].starts_with("Hotel booked successfully!"));
        assert!(alerts[0].contains("Hotel Name: Sea View"));
        assert_eq!(h.routes(), vec![Route::BookingHistory]);
    }

    #[test]
    fn expired_token_on_booking_signs_out() {
        let h = Harness::logged_in();
        h.transport.respond(401, r#"{"message":"jwt expired"}"#);
        let vm = BookHotelViewModel::new(h.ctx.clone());
        vm.mount();
        vm.select_date(d(2030, 6, 1), d(2030, 5, 1));

        block_on(vm.book_hotel(&hotel()));

        assert!(!h.ctx.session.is_authenticated());
        assert_eq!(h.ctx.session.access_token(), None);
        assert_eq!(h.routes(), vec![Route::Login]);
        assert_eq!(h.alerts(), vec![MSG_LOGIN_EXPIRED.to_string()]);
        assert_eq!(h.transport.request_count(), 1);
    }

    #[test]
    fn late_response_after_unmount_is_ignored() {
        let h = Harness::logged_in();
        let reply = h.transport.respond_later();
        let vm = Rc::new(BookHotelViewModel::new(h.ctx.clone()));
        vm.mount();
        vm.select_date(d(2030, 6, 1), d(2030, 5, 1));

        let mut pool = LocalPool::new();
        let task_vm = vm.clone();
        pool.spawner()
            .spawn_local(async move { task_vm.view_hotels().await })
            .unwrap();
        pool.run_until_stalled();
        assert!(vm.state.get().loading);

        vm.unmount();
        reply.send(crate::services::transport::HttpResponse::new(200, HOTELS)).unwrap();
        pool.run();

        assert!(vm.state.get().hotels.is_empty());
        assert!(h.alerts().is_empty());
        assert!(h.routes().is_empty());
    }

    #[test]
    fn actions_are_ignored_while_request_in_flight() {
        let h = Harness::logged_in();
        let reply = h.transport.respond_later();
        let vm = Rc::new(BookHotelViewModel::new(h.ctx.clone()));
        vm.mount();
        vm.select_date(d(2030, 6, 1), d(2030, 5, 1));

        let mut pool = LocalPool::new();
        let task_vm = vm.clone();
        pool.spawner()
            .spawn_local(async move { task_vm.view_hotels().await })
            .unwrap();
        pool.run_until_stalled();
        assert!(vm.is_busy());

        block_on(vm.view_hotels());
        block_on(vm.book_hotel(&hotel()));
        assert_eq!(h.transport.request_count(), 1);

        reply.send(crate::services::transport::HttpResponse::new(200, HOTELS)).unwrap();
        pool.run();

        assert!(!vm.is_busy());
        assert_eq!(vm.state.get().hotels.len(), 2);
        assert!(h.alerts().is_empty());
        assert!(h.routes().is_empty());
    }

    #[test]
    fn header_actions() {
        let h = Harness::logged_in();
        let vm = BookHotelViewModel::new(h.ctx.clone());
        vm.mount();

        vm.back_to_browse();
        vm.sign_out();

        assert_eq!(h.routes(), vec![Route::Browse, Route::Login]);
        assert!(!h.ctx.session.is_authenticated());
    }
}
