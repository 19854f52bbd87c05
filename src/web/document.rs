//! [`Document`] over the live DOM.

use crate::domain::Route;
use crate::ui::dom::{Document, ElementId, FormControl};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

/// Resolves [`ElementId`]s with `querySelector` on every call, so page
/// variants swapped into the outlet are always found.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    #[must_use]
    pub const fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The element behind `id`, if present.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<Element> {
        self.document.query_selector(&id.selector()).ok().flatten()
    }

    fn html_element(&self, id: ElementId) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn form(&self) -> Option<HtmlFormElement> {
        self.element(ElementId::ContactForm)?.dyn_into::<HtmlFormElement>().ok()
    }
}

impl Document for BrowserDocument {
    fn contains(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> bool {
        self.element(id)
            .is_some_and(|element| element.set_attribute(name, value).is_ok())
    }

    fn remove_attribute(&mut self, id: ElementId, name: &str) -> bool {
        self.element(id)
            .is_some_and(|element| element.remove_attribute(name).is_ok())
    }

    fn toggle_class(&mut self, id: ElementId, class: &str, on: bool) -> bool {
        self.element(id)
            .is_some_and(|element| element.class_list().toggle_with_force(class, on).is_ok())
    }

    fn set_text(&mut self, id: ElementId, text: &str) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        if element.text_content().as_deref() != Some(text) {
            element.set_text_content(Some(text));
        }
        true
    }

    fn set_style(&mut self, id: ElementId, property: &str, value: &str) -> bool {
        self.html_element(id)
            .is_some_and(|element| element.style().set_property(property, value).is_ok())
    }

    fn set_disabled(&mut self, id: ElementId, disabled: bool) -> bool {
        let Some(button) = self.element(id).and_then(|e| e.dyn_into::<HtmlButtonElement>().ok()) else {
            return false;
        };
        button.set_disabled(disabled);
        true
    }

    fn value(&self, id: ElementId) -> Option<String> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            return Some(select.value());
        }
        element.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
    }

    fn set_value(&mut self, id: ElementId, value: &str) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else {
            return false;
        }
        true
    }

    fn replace_outlet(&mut self, route: Route, html: &str) -> bool {
        let Some(outlet) = self.element(ElementId::Outlet) else {
            return false;
        };
        outlet.set_inner_html(html);
        outlet.set_attribute("data-mounted", route.as_str()).is_ok()
    }

    fn set_pointer_capture(&mut self, pointer_id: i32, captured: bool) -> bool {
        let Some(handle) = self.element(ElementId::Toggle) else {
            return false;
        };
        if captured {
            return handle.set_pointer_capture(pointer_id).is_ok();
        }
        if handle.has_pointer_capture(pointer_id) {
            return handle.release_pointer_capture(pointer_id).is_ok();
        }
        true
    }

    fn report_validity(&mut self) -> bool {
        self.form().is_some_and(|form| {
            form.report_validity();
            true
        })
    }

    fn reset_form(&mut self) -> bool {
        let Some(form) = self.form() else {
            return false;
        };
        form.reset();
        self.set_value(ElementId::Field(FormControl::Category), FormControl::Category.reset_value());
        true
    }
}
