use chrono::NaiveDate;
use serde_json::json;
use crate::models::{ApiEnvelope, Booking, CreateBookingRequest, Hotel, ViewHotelsRequest};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::services::transport::Method;
use crate::utils::dates::to_iso_date;

/// Hoteles disponibles para una fecha: `POST /hotels/view`
pub async fn view_hotels(api: &ApiClient, token: Option<&str>, date: NaiveDate) -> Result<Vec<Hotel>, ApiError> {
    let body = json!(ViewHotelsRequest { date: to_iso_date(date) });
    let envelope: ApiEnvelope<Vec<Hotel>> =
        api.request_as("/hotels/view", Method::Post, Some(&body), token).await?;
    log::info!("🏨 [HOTELS] {} hoteles para {}", envelope.data.len(), date);
    Ok(envelope.data)
}

/// Crear reserva: `POST /bookings`
pub async fn create_booking(
    api: &ApiClient,
    token: Option<&str>,
    hotel_id: &str,
    date: NaiveDate,
) -> Result<Booking, ApiError> {
    let body = json!(CreateBookingRequest {
        hotel_id: hotel_id.to_string(),
        date: to_iso_date(date),
    });
    let envelope: ApiEnvelope<Booking> =
        api.request_as("/bookings", Method::Post, Some(&body), token).await?;
    log::info!("✅ [HOTELS] Reserva creada en {}", envelope.data.hotel_name);
    Ok(envelope.data)
}
