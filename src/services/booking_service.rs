use crate::models::{ApiEnvelope, Booking};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::services::transport::Method;

/// Historial de reservas: `GET /bookings`
pub async fn list_bookings(api: &ApiClient, token: Option<&str>) -> Result<Vec<Booking>, ApiError> {
    let envelope: ApiEnvelope<Vec<Booking>> =
        api.request_as("/bookings", Method::Get, None, token).await?;
    log::info!("📋 [BOOKINGS] {} reservas recibidas", envelope.data.len());
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::test_support::StubTransport;

    #[test]
    fn lists_bookings_with_get_and_no_body() {
        let stub = StubTransport::new();
        stub.respond(
            200,
            r#"{"data":[{"hotelName":"A","price":10.5,"location":"X","checkIn":"2030-01-02T00:00:00.000Z"}]}"#,
        );
        let api = ApiClient::with_transport("http://api.test", stub.clone());

        let bookings = block_on(list_bookings(&api, Some("tok"))).unwrap();

        assert_eq!(bookings[0].price, 10.5);
        let sent = stub.last_request().unwrap();
        assert_eq!(sent.method, crate::services::transport::Method::Get);
        assert_eq!(sent.body, None);
        assert_eq!(sent.header("x-access-token"), Some("tok"));
    }
}
