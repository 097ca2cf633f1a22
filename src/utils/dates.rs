use chrono::{Local, NaiveDate};

/// Fecha de hoy en la zona horaria del navegador (chrono con `wasmbind`)
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Solo se aceptan fechas estrictamente posteriores a hoy
pub fn is_future_date(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Formato ISO-8601 que espera el API: medianoche UTC del día seleccionado
pub fn to_iso_date(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", date.format("%Y-%m-%d"))
}

/// Parseo del valor de un `<input type="date">` (YYYY-MM-DD)
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
