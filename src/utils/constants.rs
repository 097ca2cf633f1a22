/// URL base del API en desarrollo (sobrescribible con BACKEND_URL_DEVELOPMENT)
pub const DEFAULT_DEV_API_URL: &str = "http://localhost:4000/v1";

/// URL base del API en producción (sobrescribible con BACKEND_URL_PRODUCTION)
pub const DEFAULT_PROD_API_URL: &str = "https://api.udayteja.com/v1";

/// Header del access token
pub const DEFAULT_TOKEN_HEADER: &str = "x-access-token";

/// Clave única de localStorage para la sesión persistida
pub const SESSION_STORAGE_KEY: &str = "hotel_booking_session";

/// ID del nodo raíz donde se monta la app
pub const ROOT_ELEMENT_ID: &str = "app";

// Mensajes mostrados al usuario (alert)
pub const MSG_LOGIN_EXPIRED: &str = "Login expired, please login again.";
pub const MSG_NETWORK_ERROR: &str = "Network error, please check your connection and try again.";
pub const MSG_FUTURE_DATE: &str = "Please select a future date";
pub const MSG_FETCH_HOTELS_FAILED: &str = "Failed to fetch hotels, please try again later";
pub const MSG_BOOK_HOTEL_FAILED: &str = "Failed to book hotel, please try again later";
pub const MSG_FETCH_BOOKINGS_FAILED: &str = "Failed to fetch booking history, please try again later";
pub const MSG_AUTH_FAILED: &str = "Authentication failed, please try again.";
