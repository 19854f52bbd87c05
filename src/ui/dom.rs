//! Document seam between the renderer and the page.
//!
//! The renderer and the site runtime address elements by [`ElementId`] and
//! mutate them through the [`Document`] trait. Every method reports whether
//! the element was found; a missing element is never an error, so a
//! malformed shell degrades to a no-op.
//!
//! [`MemoryDocument`] is an in-memory implementation used by tests and by
//! headless command-line runs. The browser implementation lives behind the
//! `web` feature.

use crate::domain::{LanguageCode, Route, CONTACT_CATEGORIES};
use std::collections::{BTreeMap, BTreeSet};

/// A contact form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormControl {
    FullName,
    Email,
    Category,
    Message,
}

impl FormControl {
    pub const ALL: [Self; 4] = [Self::FullName, Self::Email, Self::Category, Self::Message];

    /// The control's `name` attribute.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Category => "category",
            Self::Message => "message",
        }
    }

    /// Value after a form reset.
    #[must_use]
    pub const fn reset_value(self) -> &'static str {
        match self {
            Self::Category => CONTACT_CATEGORIES[0],
            Self::FullName | Self::Email | Self::Message => "",
        }
    }
}

/// Elements the site reads or mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    /// Root `.site` container.
    Site,
    Body,
    Sidebar,
    Nav,
    NavLink(Route),
    LanguageLabel,
    LanguagePicker,
    LanguageOption(LanguageCode),
    Overlay,
    /// Header toggle, also the drag handle.
    Toggle,
    /// Region the page variants are mounted into.
    Outlet,
    /// Panel carrying the glow custom properties.
    GlowPanel,
    ContactForm,
    Field(FormControl),
    SubmitButton,
    Status,
    Countdown,
}

impl ElementId {
    /// CSS selector matching the element in the rendered markup.
    #[must_use]
    pub fn selector(self) -> String {
        match self {
            Self::Site => ".site".to_string(),
            Self::Body => "body".to_string(),
            Self::Sidebar => "#primary-sidebar".to_string(),
            Self::Nav => ".sidebar__nav".to_string(),
            Self::NavLink(route) => format!(".sidebar__nav-link[data-route=\"{route}\"]"),
            Self::LanguageLabel => ".sidebar__language-label".to_string(),
            Self::LanguagePicker => "#language-picker".to_string(),
            Self::LanguageOption(code) => format!("#language-picker option[value=\"{code}\"]"),
            Self::Overlay => ".sidebar__overlay".to_string(),
            Self::Toggle => ".header-scroll".to_string(),
            Self::Outlet => "#page-content".to_string(),
            Self::GlowPanel => "[data-glow]".to_string(),
            Self::ContactForm => ".contact-form".to_string(),
            Self::Field(control) => format!(".contact-form [name=\"{}\"]", control.name()),
            Self::SubmitButton => ".contact-form__submit".to_string(),
            Self::Status => ".contact__status".to_string(),
            Self::Countdown => "[data-countdown]".to_string(),
        }
    }

    /// Whether the element lives inside the outlet and is replaced on mount.
    #[must_use]
    pub const fn in_outlet(self) -> bool {
        matches!(
            self,
            Self::GlowPanel | Self::ContactForm | Self::Field(_) | Self::SubmitButton | Self::Status
        )
    }

    /// Elements a page variant creates inside the outlet.
    #[must_use]
    pub fn mounted_by(route: Route) -> Vec<Self> {
        match route {
            Route::Home => vec![Self::GlowPanel],
            Route::Contact => {
                let mut ids = vec![Self::GlowPanel, Self::ContactForm, Self::SubmitButton, Self::Status];
                ids.extend(FormControl::ALL.map(Self::Field));
                ids
            }
        }
    }

    /// Elements of the persistent shell.
    #[must_use]
    pub fn shell() -> Vec<Self> {
        let mut ids = vec![
            Self::Site,
            Self::Body,
            Self::Sidebar,
            Self::Nav,
            Self::LanguageLabel,
            Self::LanguagePicker,
            Self::Overlay,
            Self::Toggle,
            Self::Outlet,
        ];
        ids.extend(Route::ALL.map(Self::NavLink));
        ids.extend(LanguageCode::ALL.map(Self::LanguageOption));
        ids
    }
}

/// Mutable view of the page.
///
/// Methods return `true` when the element exists and was updated.
pub trait Document {
    fn contains(&self, id: ElementId) -> bool;

    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> bool;

    fn remove_attribute(&mut self, id: ElementId, name: &str) -> bool;

    /// Adds `class` when `on`, removes it otherwise.
    fn toggle_class(&mut self, id: ElementId, class: &str, on: bool) -> bool;

    fn set_text(&mut self, id: ElementId, text: &str) -> bool;

    /// Sets a CSS custom property or style declaration.
    fn set_style(&mut self, id: ElementId, property: &str, value: &str) -> bool;

    fn set_disabled(&mut self, id: ElementId, disabled: bool) -> bool;

    /// Current value of a form control.
    fn value(&self, id: ElementId) -> Option<String>;

    fn set_value(&mut self, id: ElementId, value: &str) -> bool;

    /// Replaces the outlet's content with `html`, the markup of `route`.
    fn replace_outlet(&mut self, route: Route, html: &str) -> bool;

    /// Captures or releases `pointer_id` on the drawer handle. Releasing a
    /// pointer the handle does not hold is a no-op.
    fn set_pointer_capture(&mut self, pointer_id: i32, captured: bool) -> bool;

    /// Triggers native validation feedback on the contact form.
    fn report_validity(&mut self) -> bool;

    /// Restores the contact form controls to their initial values.
    fn reset_form(&mut self) -> bool {
        let mut found = false;
        for control in FormControl::ALL {
            found |= self.set_value(ElementId::Field(control), control.reset_value());
        }
        found
    }
}

/// State of one element in a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub text: String,
    pub value: String,
    pub disabled: bool,
}

/// In-memory document.
///
/// Element state is kept per [`ElementId`]; markup passed to
/// [`replace_outlet`](Document::replace_outlet) is stored verbatim and the
/// outlet's elements are recreated from [`ElementId::mounted_by`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    elements: BTreeMap<ElementId, MemoryElement>,
    outlet_html: String,
    mounted: Option<Route>,
    captured: BTreeSet<i32>,
    validity_reports: usize,
}

impl MemoryDocument {
    /// An empty document, as seen by scripts on a malformed page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A document containing the persistent shell with an empty outlet.
    #[must_use]
    pub fn with_shell() -> Self {
        let mut document = Self::default();
        for id in ElementId::shell() {
            document.insert(id);
        }
        for code in LanguageCode::ALL {
            document.element_mut(ElementId::LanguageOption(code)).value = code.code().to_string();
        }
        document
    }

    /// The confirmation document: a countdown and no shell.
    #[must_use]
    pub fn confirmation() -> Self {
        let mut document = Self::default();
        document.insert(ElementId::Body);
        document.insert(ElementId::Countdown);
        document
    }

    /// Adds an element, replacing any existing state.
    pub fn insert(&mut self, id: ElementId) {
        self.elements.insert(id, MemoryElement::default());
    }

    /// Removes an element.
    pub fn remove(&mut self, id: ElementId) {
        self.elements.remove(&id);
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&MemoryElement> {
        self.elements.get(&id)
    }

    #[must_use]
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id)?.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id).is_some_and(|element| element.classes.contains(class))
    }

    #[must_use]
    pub fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.element(id)?.styles.get(property).map(String::as_str)
    }

    #[must_use]
    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.element(id).map(|element| element.text.as_str())
    }

    #[must_use]
    pub fn is_disabled(&self, id: ElementId) -> bool {
        self.element(id).is_some_and(|element| element.disabled)
    }

    /// Page variant last mounted into the outlet.
    #[must_use]
    pub const fn mounted(&self) -> Option<Route> {
        self.mounted
    }

    /// Markup last mounted into the outlet.
    #[must_use]
    pub fn outlet_html(&self) -> &str {
        &self.outlet_html
    }

    #[must_use]
    pub fn has_pointer_capture(&self, pointer_id: i32) -> bool {
        self.captured.contains(&pointer_id)
    }

    /// Number of times native validation was triggered.
    #[must_use]
    pub const fn validity_reports(&self) -> usize {
        self.validity_reports
    }

    /// Fills the contact form controls, as a user typing would.
    pub fn fill_form(&mut self, full_name: &str, email: &str, category: &str, message: &str) {
        for (control, value) in [
            (FormControl::FullName, full_name),
            (FormControl::Email, email),
            (FormControl::Category, category),
            (FormControl::Message, message),
        ] {
            self.set_value(ElementId::Field(control), value);
        }
    }

    fn element_mut(&mut self, id: ElementId) -> &mut MemoryElement {
        self.elements.entry(id).or_default()
    }

    fn update(&mut self, id: ElementId, apply: impl FnOnce(&mut MemoryElement)) -> bool {
        match self.elements.get_mut(&id) {
            Some(element) => {
                apply(element);
                true
            }
            None => false,
        }
    }
}

impl Document for MemoryDocument {
    fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> bool {
        self.update(id, |element| {
            element.attributes.insert(name.to_string(), value.to_string());
        })
    }

    fn remove_attribute(&mut self, id: ElementId, name: &str) -> bool {
        self.update(id, |element| {
            element.attributes.remove(name);
        })
    }

    fn toggle_class(&mut self, id: ElementId, class: &str, on: bool) -> bool {
        self.update(id, |element| {
            if on {
                element.classes.insert(class.to_string());
            } else {
                element.classes.remove(class);
            }
        })
    }

    fn set_text(&mut self, id: ElementId, text: &str) -> bool {
        self.update(id, |element| element.text = text.to_string())
    }

    fn set_style(&mut self, id: ElementId, property: &str, value: &str) -> bool {
        self.update(id, |element| {
            element.styles.insert(property.to_string(), value.to_string());
        })
    }

    fn set_disabled(&mut self, id: ElementId, disabled: bool) -> bool {
        self.update(id, |element| element.disabled = disabled)
    }

    fn value(&self, id: ElementId) -> Option<String> {
        self.element(id).map(|element| element.value.clone())
    }

    fn set_value(&mut self, id: ElementId, value: &str) -> bool {
        self.update(id, |element| element.value = value.to_string())
    }

    fn replace_outlet(&mut self, route: Route, html: &str) -> bool {
        if !self.contains(ElementId::Outlet) {
            return false;
        }
        self.elements.retain(|id, _| !id.in_outlet());
        for id in ElementId::mounted_by(route) {
            self.insert(id);
        }
        for control in FormControl::ALL {
            self.set_value(ElementId::Field(control), control.reset_value());
        }
        self.outlet_html = html.to_string();
        self.mounted = Some(route);
        true
    }

    fn set_pointer_capture(&mut self, pointer_id: i32, captured: bool) -> bool {
        if !self.contains(ElementId::Toggle) {
            return false;
        }
        if captured {
            self.captured.insert(pointer_id);
        } else {
            self.captured.remove(&pointer_id);
        }
        true
    }

    fn report_validity(&mut self) -> bool {
        if !self.contains(ElementId::ContactForm) {
            return false;
        }
        self.validity_reports += 1;
        true
    }
}
