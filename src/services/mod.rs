pub mod api_client;
pub mod auth_service;
pub mod booking_service;
pub mod error;
pub mod hotel_service;
pub mod notifier;
pub mod session_persistence;
pub mod transport;
