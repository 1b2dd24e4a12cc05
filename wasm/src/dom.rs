//! DOM lookups and the soil results view
//!
//! Every lookup tolerates missing elements; pages only carry the parts of
//! the markup they need.

use shared::{RecommendationResult, SoilFormInput, SoilFormView};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, ScrollBehavior,
    ScrollIntoViewOptions, Window,
};

pub const HIDDEN_CLASS: &str = "hidden";

/// How long a dynamically inserted banner stays up
pub const BANNER_TIMEOUT_MS: i32 = 5_000;

pub fn element(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

/// Current value of an input or select element
pub fn field_value(document: &Document, id: &str) -> Option<String> {
    let el = element(document, id)?;
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    None
}

/// Value of `input_id`, only when its error target `error_id` also exists
pub fn guarded_value(document: &Document, input_id: &str, error_id: &str) -> Option<String> {
    element(document, error_id)?;
    field_value(document, input_id)
}

pub fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = element(document, id) {
        el.set_text_content(Some(text));
    }
}

pub fn show(el: &Element) {
    report(el.class_list().remove_1(HIDDEN_CLASS));
}

pub fn hide(el: &Element) {
    report(el.class_list().add_1(HIDDEN_CLASS));
}

/// Log a failed DOM call to the browser console
pub fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        web_sys::console::error_2(&JsValue::from_str("farmhelp:"), &err);
    }
}

/// Read the soil-analysis fields; absent inputs read as empty
pub fn read_soil_form(document: &Document) -> SoilFormInput {
    let value = |id: &str| field_value(document, id).unwrap_or_default();
    SoilFormInput {
        nitrogen: value("nitrogen"),
        phosphorus: value("phosphorus"),
        potassium: value("potassium"),
        temperature: value("temperature"),
        humidity: value("humidity"),
        ph: value("ph"),
        rainfall: value("rainfall"),
        region: value("region"),
    }
}

/// Renders soil submissions into the results section of the page
pub struct DomSoilView {
    window: Window,
    document: Document,
}

impl DomSoilView {
    pub const FORM_ID: &'static str = "soil-form";
    pub const ERROR_ID: &'static str = "error-message";
    pub const BANNER_CLASS: &'static str = "error-banner";

    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn results(&self) -> Option<Element> {
        element(&self.document, "results")
    }

    fn loader(&self) -> Option<Element> {
        self.document.query_selector(".loader").ok().flatten()
    }

    fn remove_banners(&self) {
        let Some(form) = element(&self.document, Self::FORM_ID) else {
            return;
        };
        let selector = format!(".{}", Self::BANNER_CLASS);
        if let Ok(list) = form.query_selector_all(&selector) {
            for i in 0..list.length() {
                if let Some(node) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    node.remove();
                }
            }
        }
    }

    /// Dismissible banner at the top of the soil form, gone after five seconds
    fn show_banner(&self, form: &Element, message: &str) -> Result<(), JsValue> {
        let banner = self.document.create_element("div")?;
        banner.set_class_name(Self::BANNER_CLASS);
        banner.set_attribute("role", "alert")?;

        let text = self.document.create_element("span")?;
        text.set_text_content(Some(message));
        banner.append_child(&text)?;

        let close = self.document.create_element("button")?;
        close.set_attribute("type", "button")?;
        close.set_attribute("aria-label", "Dismiss")?;
        close.set_text_content(Some("×"));
        let target = banner.clone();
        let on_close = Closure::<dyn FnMut()>::new(move || target.remove());
        close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        on_close.forget();
        banner.append_child(&close)?;

        form.prepend_with_node_1(&banner)?;

        let target = banner.clone();
        let expire = Closure::once_into_js(move || target.remove());
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                expire.unchecked_ref(),
                BANNER_TIMEOUT_MS,
            )?;
        Ok(())
    }
}

impl SoilFormView for DomSoilView {
    fn clear_error(&self) {
        if let Some(el) = element(&self.document, Self::ERROR_ID) {
            el.set_text_content(Some(""));
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                report(html.style().remove_property("display").map(|_| ()));
            }
            hide(&el);
        }
        self.remove_banners();
    }

    fn show_error(&self, message: &str) {
        if let Some(el) = element(&self.document, Self::ERROR_ID) {
            el.set_text_content(Some(message));
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                report(html.style().set_property("display", "block"));
            }
            show(&el);
            return;
        }
        if let Some(form) = element(&self.document, Self::FORM_ID) {
            if self.show_banner(&form, message).is_ok() {
                return;
            }
        }
        report(self.window.alert_with_message(message));
    }

    fn show_loading(&self) {
        if let Some(results) = self.results() {
            show(&results);
        }
        if let Some(loader) = self.loader() {
            show(&loader);
        }
    }

    fn finish_loading(&self) {
        if let Some(loader) = self.loader() {
            hide(&loader);
        }
        if let Some(results) = self.results() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            results.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    fn render(&self, recommendation: &RecommendationResult) {
        set_text(&self.document, "crop-name", recommendation.crop_or_default());
        set_text(
            &self.document,
            "crop-description",
            recommendation.description_or_default(),
        );

        if let Some(list) = element(&self.document, "fertilizers-list") {
            list.set_inner_html("");
            for fertilizer in &recommendation.fertilizers {
                match self.document.create_element("li") {
                    Ok(item) => {
                        item.set_text_content(Some(fertilizer));
                        report(list.append_child(&item).map(|_| ()));
                    }
                    Err(err) => report(Err(err)),
                }
            }
        }

        if !recommendation.tips.is_empty() {
            set_text(&self.document, "farming-tips", &recommendation.tips);
        }
    }

    fn redirect(&self, path: &str) {
        report(self.window.location().set_href(path));
    }
}
