pub mod api;
pub mod auth;
pub mod booking;
pub mod hotel;
pub mod session;

pub use api::ApiEnvelope;
pub use auth::{AuthResponse, SignInRequest, SignUpRequest};
pub use booking::Booking;
pub use hotel::{CreateBookingRequest, Hotel, ViewHotelsRequest};
