// ============================================================================
// BROWSE VIEW - Menú: reservar o ver historial
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::viewmodels::BrowseViewModel;
use crate::views::shared::{render_button, render_sign_out};

pub fn render_browse(vm: &Rc<BrowseViewModel>) -> Result<Element, JsValue> {
    let sign_out = {
        let vm = vm.clone();
        render_sign_out(move || vm.sign_out())?
    };
    let top = ElementBuilder::new("div")?
        .class("screen-header screen-header-end")
        .child(sign_out)?
        .build();

    let screen = ElementBuilder::new("div")?
        .class("browse-screen")
        .child(top)?
        .build();

    let name = vm.user_name().unwrap_or_default();
    let greeting = ElementBuilder::new("p")?
        .class("browse-greeting")
        .text(&format!("Welcome, {}", name))
        .build();
    let book = {
        let vm = vm.clone();
        render_button("Book Hotels", "btn-primary", move || vm.book_hotels())?
    };
    let history = {
        let vm = vm.clone();
        render_button("View Booking History", "btn-secondary", move || vm.view_booking_history())?
    };
    let menu = ElementBuilder::new("div")?
        .class("browse-menu")
        .children([greeting, book, history])?
        .build();
    crate::dom::append_child(&screen, &menu)?;

    Ok(screen)
}
