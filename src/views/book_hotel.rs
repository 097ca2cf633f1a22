// ============================================================================
// BOOK HOTEL VIEW - Selector de fecha + hoteles disponibles
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};
use crate::dom::{append_child, on_change_value, ElementBuilder};
use crate::models::hotel::Hotel;
use crate::utils::dates::{parse_input_date, today};
use crate::viewmodels::BookHotelViewModel;
use crate::views::shared::{render_button, render_field, render_header, render_spinner};

pub fn render_book_hotel(vm: &Rc<BookHotelViewModel>) -> Result<Element, JsValue> {
    let state = vm.state.get();

    let header = {
        let back = vm.clone();
        let out = vm.clone();
        render_header(move || back.back_to_browse(), move || out.sign_out())?
    };

    let view_button = {
        let vm = vm.clone();
        render_button("View Hotels", "btn-primary", move || {
            if vm.is_busy() {
                return;
            }
            let vm = vm.clone();
            spawn_local(async move { vm.view_hotels().await });
        })?
    };
    if state.loading {
        view_button.set_attribute("disabled", "")?;
    }
    let picker = ElementBuilder::new("div")?
        .class("date-picker-row")
        .child(render_date_input(vm)?)?
        .child(view_button)?
        .build();

    let screen = ElementBuilder::new("div")?
        .class("book-hotel-screen")
        .child(header)?
        .child(ElementBuilder::new("h2")?.text("Select Date").build())?
        .child(picker)?
        .build();

    if state.loading {
        append_child(&screen, &render_spinner()?)?;
    }

    if !state.hotels.is_empty() {
        let list = ElementBuilder::new("ul")?.class("hotel-list").build();
        for hotel in &state.hotels {
            append_child(&list, &render_hotel(vm, hotel)?)?;
        }
        let section = ElementBuilder::new("div")?
            .child(ElementBuilder::new("h3")?.text("Available Hotels:").build())?
            .child(list)?
            .build();
        append_child(&screen, &section)?;
    }

    Ok(screen)
}

fn render_date_input(vm: &Rc<BookHotelViewModel>) -> Result<Element, JsValue> {
    let selected = vm
        .state
        .with(|s| s.selected_date)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let min = today()
        .succ_opt()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let input = ElementBuilder::new("input")?
        .class("date-input")
        .attr("type", "date")?
        .attr("min", &min)?
        .attr("placeholder", "Select a date")?
        .attr("value", &selected)?
        .build();

    let vm = vm.clone();
    let element = input.clone();
    on_change_value(&input, move |value| {
        let accepted = match parse_input_date(&value) {
            Some(date) => vm.select_date(date, today()),
            None => false,
        };
        if !accepted {
            // Fecha rechazada: el input vuelve a la última selección válida
            if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                input.set_value(&selected);
            }
        }
    })?;
    Ok(input)
}

fn render_hotel(vm: &Rc<BookHotelViewModel>, hotel: &Hotel) -> Result<Element, JsValue> {
    let book = {
        let vm = vm.clone();
        let hotel = hotel.clone();
        render_button("Book Hotel", "btn-primary", move || {
            if vm.is_busy() {
                return;
            }
            let vm = vm.clone();
            let hotel = hotel.clone();
            spawn_local(async move { vm.book_hotel(&hotel).await });
        })?
    };
    if vm.is_busy() {
        book.set_attribute("disabled", "")?;
    }

    Ok(ElementBuilder::new("li")?
        .class("hotel-card")
        .child(ElementBuilder::new("h4")?.text(&hotel.name).build())?
        .child(render_field("hotel-Id: ", &hotel.hotel_id)?)?
        .child(render_field("Location: ", &hotel.location)?)?
        .child(render_field("Price: ", &format!("${}", hotel.price))?)?
        .child(book)?
        .build())
}
