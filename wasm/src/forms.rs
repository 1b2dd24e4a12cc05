//! Submit handlers for the login, registration and soil-analysis forms

use shared::{
    field_messages, submit_soil_form, LoginForm, RegistrationForm, SubmissionOptions, Validate,
    ValidationErrors,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, Window};

use crate::dom::{self, DomSoilView};
use crate::fetch::FetchTransport;

const LOGIN_ERRORS: &[(&str, &str)] = &[("email", "email-error"), ("password", "password-error")];

const REGISTER_ERRORS: &[(&str, &str)] = &[
    ("name", "nameError"),
    ("email", "emailError"),
    ("password", "passwordError"),
    ("confirm_password", "confirmPasswordError"),
];

/// Attach all form handlers present on the page
pub fn bind_all(window: &Window, document: &Document) -> Result<(), JsValue> {
    bind_login(document)?;
    bind_registration(document)?;
    bind_soil_analysis(window, document)?;
    Ok(())
}

fn on_submit(
    document: &Document,
    form_id: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<bool, JsValue> {
    let Some(form) = dom::element(document, form_id) else {
        return Ok(false);
    };
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    // Handlers live as long as the page
    closure.forget();
    Ok(true)
}

fn reset_errors(document: &Document, targets: &[(&str, &str)]) {
    for (_, error_id) in targets {
        dom::set_text(document, error_id, "");
    }
}

fn write_errors(document: &Document, targets: &[(&str, &str)], errors: &ValidationErrors) {
    let messages = field_messages(errors);
    for (field, error_id) in targets {
        if let Some(message) = messages.get(*field) {
            dom::set_text(document, error_id, message);
        }
    }
}

/// Read the login form; a field counts only when its error target exists
pub fn read_login_form(document: &Document) -> LoginForm {
    LoginForm {
        email: dom::guarded_value(document, "email", "email-error"),
        password: dom::guarded_value(document, "password", "password-error"),
    }
}

pub fn read_registration_form(document: &Document) -> RegistrationForm {
    RegistrationForm {
        name: dom::guarded_value(document, "name", "nameError"),
        email: dom::guarded_value(document, "email", "emailError"),
        password: dom::guarded_value(document, "password", "passwordError"),
        confirm_password: dom::guarded_value(document, "confirmPassword", "confirmPasswordError"),
    }
}

fn bind_login(document: &Document) -> Result<bool, JsValue> {
    let doc = document.clone();
    on_submit(document, "loginForm", move |event: Event| {
        reset_errors(&doc, LOGIN_ERRORS);
        if let Err(errors) = read_login_form(&doc).validate() {
            write_errors(&doc, LOGIN_ERRORS, &errors);
            event.prevent_default();
        }
    })
}

fn bind_registration(document: &Document) -> Result<bool, JsValue> {
    let doc = document.clone();
    on_submit(document, "registerForm", move |event: Event| {
        reset_errors(&doc, REGISTER_ERRORS);
        if let Err(errors) = read_registration_form(&doc).validate() {
            write_errors(&doc, REGISTER_ERRORS, &errors);
            event.prevent_default();
        }
    })
}

fn bind_soil_analysis(window: &Window, document: &Document) -> Result<bool, JsValue> {
    let win = window.clone();
    let doc = document.clone();
    on_submit(document, DomSoilView::FORM_ID, move |event: Event| {
        event.prevent_default();

        let input = dom::read_soil_form(&doc);
        let view = DomSoilView::new(win.clone(), doc.clone());
        let transport = FetchTransport::new(win.clone());

        // Nothing stops a second submission while this one is in flight
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) =
                submit_soil_form(&transport, &view, &input, SubmissionOptions::default()).await
            {
                web_sys::console::debug_1(&JsValue::from_str(&err.to_string()));
            }
        });
    })
}
