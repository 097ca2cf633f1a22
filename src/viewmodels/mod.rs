// ============================================================================
// VIEWMODELS - Lógica de cada pantalla (sin DOM)
// ============================================================================

pub mod context;
pub mod auth_guard;
pub mod login_viewmodel;
pub mod browse_viewmodel;
pub mod book_hotel_viewmodel;
pub mod booking_history_viewmodel;

pub use context::ScreenContext;
pub use login_viewmodel::LoginViewModel;
pub use browse_viewmodel::BrowseViewModel;
pub use book_hotel_viewmodel::BookHotelViewModel;
pub use booking_history_viewmodel::BookingHistoryViewModel;
