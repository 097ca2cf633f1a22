use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};

/// Barra de carga mientras hay una petición en vuelo
pub fn render_spinner() -> Result<Element, JsValue> {
    let bar = ElementBuilder::new("div")?.class("bar-loader-bar").build();
    Ok(ElementBuilder::new("div")?
        .class("bar-loader")
        .attr("role", "progressbar")?
        .child(bar)?
        .build())
}

pub fn render_button<F>(label: &str, class: &str, on_press: F) -> Result<Element, JsValue>
where
    F: Fn() + 'static,
{
    let button = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class(class)
        .text(label)
        .build();
    on_click(&button, move |_| on_press())?;
    Ok(button)
}

/// `<p>` con etiqueta en negrita: "Etiqueta: valor"
pub fn render_field(label: &str, value: &str) -> Result<Element, JsValue> {
    let name = ElementBuilder::new("span")?.class("field-label").text(label).build();
    let value = ElementBuilder::new("span")?.class("field-value").text(value).build();
    Ok(ElementBuilder::new("div")?
        .class("field")
        .child(name)?
        .child(value)?
        .build())
}
