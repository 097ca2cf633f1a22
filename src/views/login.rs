// ============================================================================
// LOGIN VIEW - Sign In / Sign Up (mismo formulario, se alterna)
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, on_click, on_input_value, on_submit, ElementBuilder};
use crate::models::auth::LoginForm;
use crate::viewmodels::LoginViewModel;
use crate::views::shared::render_spinner;

/// Renderizar vista de login
pub fn render_login(vm: &Rc<LoginViewModel>) -> Result<Element, JsValue> {
    let state = vm.state.get();
    let draft = vm.draft();
    let title = if state.is_sign_in_form { "Sign In" } else { "Sign Up" };

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(ElementBuilder::new("h1")?.text(title).build())?
        .build();

    if !state.is_sign_in_form {
        append_child(&form, &input(vm, "text", "Name", &draft.name, |f, v| f.name = v)?)?;
        append_child(&form, &input(vm, "text", "User Id", &draft.user_id, |f, v| f.user_id = v)?)?;
    }
    append_child(&form, &input(vm, "email", "Email Address", &draft.email, |f, v| f.email = v)?)?;
    append_child(&form, &input(vm, "password", "Password", &draft.password, |f, v| f.password = v)?)?;

    if let Some(error) = &state.error_message {
        let message = ElementBuilder::new("p")?.class("form-error").text(error).build();
        append_child(&form, &message)?;
    }

    if state.loading {
        append_child(&form, &render_spinner()?)?;
    } else {
        let submit = ElementBuilder::new("button")?
            .attr("type", "submit")?
            .class("btn-login")
            .text(title)
            .build();
        append_child(&form, &submit)?;
    }

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            if vm.state.with(|s| s.loading) {
                return;
            }
            let vm = vm.clone();
            spawn_local(async move {
                let form = vm.draft();
                vm.submit(form).await;
            });
        })?;
    }

    let toggle_text = if state.is_sign_in_form {
        "New to App? Sign Up Now"
    } else {
        "Already registered? Sign In Now."
    };
    let toggle = ElementBuilder::new("p")?.class("login-toggle").text(toggle_text).build();
    {
        let vm = vm.clone();
        on_click(&toggle, move |_| vm.toggle_form())?;
    }
    append_child(&form, &toggle)?;

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(form)?
        .build())
}

fn input<F>(
    vm: &Rc<LoginViewModel>,
    kind: &str,
    placeholder: &str,
    value: &str,
    assign: F,
) -> Result<Element, JsValue>
where
    F: Fn(&mut LoginForm, String) + 'static,
{
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", kind)?
        .attr("placeholder", placeholder)?
        .attr("value", value)?
        .build();

    let vm = vm.clone();
    on_input_value(&input, move |value| vm.edit_draft(|form| assign(form, value)))?;
    Ok(input)
}
