use serde::{Deserialize, Serialize};

/// Hotel disponible para una fecha (lista transitoria, no se persiste)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub hotel_id: String,
    pub name: String,
    pub location: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewHotelsRequest {
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub hotel_id: String,
    pub date: String,
}
