pub mod app;
pub mod login;
pub mod browse;
pub mod book_hotel;
pub mod booking_history;
pub mod not_found;
pub mod shared;

pub use app::render_app;
pub use login::render_login;
pub use browse::render_browse;
pub use book_hotel::render_book_hotel;
pub use booking_history::render_booking_history;
pub use not_found::render_not_found;
