// ============================================================================
// SCREEN HEADER - "Back to Browse" + "Sign Out"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};

pub fn render_header<B, S>(on_back: B, on_sign_out: S) -> Result<Element, JsValue>
where
    B: Fn() + 'static,
    S: Fn() + 'static,
{
    let back = ElementBuilder::new("button")?
        .class("btn-link btn-back")
        .text("Back to Browse")
        .build();
    on_click(&back, move |_| on_back())?;

    let header = ElementBuilder::new("div")?
        .class("screen-header")
        .child(back)?
        .child(render_sign_out(on_sign_out)?)?
        .build();
    Ok(header)
}

pub fn render_sign_out<S>(on_sign_out: S) -> Result<Element, JsValue>
where
    S: Fn() + 'static,
{
    let button = ElementBuilder::new("button")?
        .class("btn-link btn-sign-out")
        .text("Sign Out")
        .build();
    on_click(&button, move |_| on_sign_out())?;
    Ok(button)
}
