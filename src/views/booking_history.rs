// ============================================================================
// BOOKING HISTORY VIEW
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::booking::Booking;
use crate::viewmodels::BookingHistoryViewModel;
use crate::views::shared::{render_field, render_header, render_spinner};

pub fn render_booking_history(vm: &Rc<BookingHistoryViewModel>) -> Result<Element, JsValue> {
    let state = vm.state.get();

    let header = {
        let back = vm.clone();
        let out = vm.clone();
        render_header(move || back.back_to_browse(), move || out.sign_out())?
    };
    let screen = ElementBuilder::new("div")?
        .class("booking-history-screen")
        .child(header)?
        .child(ElementBuilder::new("h2")?.text("Booking History").build())?
        .build();

    if state.loading {
        append_child(&screen, &render_spinner()?)?;
    } else if state.bookings.is_empty() {
        append_child(&screen, &ElementBuilder::new("p")?.text("No bookings yet.").build())?;
    } else {
        let list = ElementBuilder::new("ul")?.class("booking-list").build();
        for booking in &state.bookings {
            append_child(&list, &render_booking(booking)?)?;
        }
        append_child(&screen, &list)?;
    }

    Ok(screen)
}

fn render_booking(booking: &Booking) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("li")?
        .class("booking-card")
        .child(render_field("Hotel Name: ", &booking.hotel_name)?)?
        .child(render_field("Price: ", &booking.price.to_string())?)?
        .child(render_field("Location: ", &booking.location)?)?
        .child(render_field("Check-In: ", &local_date(&booking.check_in))?)?
        .build())
}

/// Fecha en el formato local del navegador; si no parsea, el texto tal cual
fn local_date(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_string();
    }
    date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}
