use serde::{Deserialize, Serialize};

/// Reserva del historial (se vuelve a pedir en cada visita)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub hotel_name: String,
    pub price: f64,
    pub location: String,
    /// ISO-8601, la vista lo formatea con el locale del navegador
    pub check_in: String,
}

impl Booking {
    /// Texto del alert tras reservar
    pub fn confirmation_text(&self) -> String {
        format!(
            "Hotel booked successfully!\n\nHotel Name: {}\nPrice: ${}\nLocation: {}\nCheck-In: {}",
            self.hotel_name, self.price, self.location, self.check_in
        )
    }
}
