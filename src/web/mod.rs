//! Browser bindings (feature `web`).
//!
//! Wires the live DOM to a [`Site`]: DOM events become [`Event`]s, the
//! returned [`DispatchOutcome`] is applied to the originating DOM event, and
//! timers and the relay call re-enter the site from `spawn_local` tasks.
//!
//! The document identifies itself with `data-page` on `#app`; configuration
//! is read from the `avsite:*` meta tags written by
//! [`markup::document`](crate::ui::markup::document).

mod document;
mod scheduler;
mod storage;

pub use document::BrowserDocument;
pub use scheduler::BrowserScheduler;
pub use storage::LocalStorageStore;

use crate::app::{Event, PointerInput, PointerKind};
use crate::config::Config;
use crate::domain::{Page, Route};
use crate::relay::EmailJsRelay;
use crate::scheduler::TimerSlot;
use crate::site::{DispatchOutcome, Site, SiteServices};
use crate::ui::dom::ElementId;
use crate::ui::glow::PanelRect;
use crate::ui::markup::{page_key, CONFIG_META_PREFIX};
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

type BrowserSite = Site<BrowserDocument, BrowserScheduler>;
type SharedSite = Rc<RefCell<BrowserSite>>;

/// Module entry point: boots the page found in the current document.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(page) = current_page(&document) else {
        tracing::warn!("document has no recognizable data-page, not starting");
        return;
    };

    let config = Config::from_map(&published_config(&document));
    let pathname = window.location().pathname().unwrap_or_default();
    let locales: Vec<String> = window
        .navigator()
        .languages()
        .iter()
        .filter_map(|value| value.as_string())
        .collect();

    let site: SharedSite = Rc::new_cyclic(|weak: &Weak<RefCell<BrowserSite>>| {
        let weak = weak.clone();
        let scheduler = BrowserScheduler::new(move |slot| fire_later(weak.clone(), slot));
        let services = SiteServices {
            store: Box::new(LocalStorageStore),
            relay: Arc::new(EmailJsRelay::from_config(&config.relay)),
        };
        let state = crate::initialize(&config, page, services.store.as_ref(), &locales).at_path(&pathname);
        RefCell::new(Site::new(state, BrowserDocument::new(document.clone()), scheduler, services))
    });

    if page.routes_in_place() {
        record_boot_entry(&window, site.borrow().state().boot_route, &pathname);
    }

    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or_default();
    site.borrow_mut().dispatch(Event::ViewportResized { width });

    for listener in listeners(&site, &window, &document) {
        listener.forget();
    }
}

/// Tags the entry the document was loaded into with its route, so going
/// back to it after routing in place restores that route.
fn record_boot_entry(window: &web_sys::Window, route: Route, pathname: &str) {
    let Ok(history) = window.history() else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&JsValue::from_str(route.as_str()), "", Some(pathname)) {
        tracing::warn!(error = ?e, "history replace failed");
    }
}

fn current_page(document: &web_sys::Document) -> Option<Page> {
    let key = document.get_element_by_id("app")?.get_attribute("data-page")?;
    Page::ALL.into_iter().find(|page| page_key(*page) == key)
}

fn published_config(document: &web_sys::Document) -> BTreeMap<String, String> {
    const KEYS: [&str; 6] = [
        "BASE_URL",
        "EMAILJS_SERVICE_ID",
        "EMAILJS_TEMPLATE_ID",
        "EMAILJS_PUBLIC_KEY",
        "EMAILJS_ENDPOINT",
        "DESKTOP_BREAKPOINT",
    ];
    KEYS.iter()
        .filter_map(|key| {
            let selector = format!("meta[name=\"{CONFIG_META_PREFIX}{key}\"]");
            let value = document.query_selector(&selector).ok()??.get_attribute("content")?;
            Some(((*key).to_string(), value))
        })
        .collect()
}

/// Dispatches `event` and applies the outcome to `dom_event`.
fn dispatch(site: &SharedSite, event: Event, dom_event: Option<&web_sys::Event>) {
    let outcome = site.borrow_mut().dispatch(event);
    apply_outcome(&outcome, dom_event);
    send_pending(site);
}

fn apply_outcome(outcome: &DispatchOutcome, dom_event: Option<&web_sys::Event>) {
    if let Some(event) = dom_event {
        if outcome.default_prevented {
            event.prevent_default();
        }
        if outcome.propagation_stopped {
            event.stop_propagation();
        }
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        for (route, url) in &outcome.history {
            if let Err(e) = history.push_state_with_url(&JsValue::from_str(route.as_str()), "", Some(url)) {
                tracing::warn!(error = ?e, "history push failed");
            }
        }
    }
    if let Some(url) = &outcome.navigate_to {
        if let Err(e) = window.location().set_href(url) {
            tracing::warn!(error = ?e, %url, "navigation failed");
        }
    }
}

fn fire_later(site: Weak<RefCell<BrowserSite>>, slot: TimerSlot) {
    spawn_local(async move {
        let Some(site) = site.upgrade() else {
            return;
        };
        let outcome = site.borrow_mut().fire(slot);
        apply_outcome(&outcome, None);
    });
}

fn send_pending(site: &SharedSite) {
    let Some(request) = site.borrow_mut().take_pending_request() else {
        return;
    };
    let relay = site.borrow().relay();
    let site = Rc::clone(site);
    spawn_local(async move {
        let result = relay.send(&request).await;
        dispatch(&site, Event::RelayCompleted(result), None);
    });
}

fn pointer_input(event: &web_sys::Event, kind: &str) -> Option<PointerInput> {
    let event = event.dyn_ref::<web_sys::PointerEvent>()?;
    let pointer_id = event.pointer_id();
    let (x, y) = (f64::from(event.client_x()), f64::from(event.client_y()));
    Some(match kind {
        "pointerdown" => PointerInput::Down {
            pointer_id,
            kind: PointerKind::from_dom(&event.pointer_type()),
            button: event.button(),
            x,
            y,
        },
        "pointermove" => PointerInput::Move { pointer_id, x, y },
        "pointerup" => PointerInput::Up { pointer_id },
        "pointercancel" => PointerInput::Cancel { pointer_id },
        _ => PointerInput::LostCapture,
    })
}

fn listeners(site: &SharedSite, window: &web_sys::Window, document: &web_sys::Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    let element = |id: ElementId| site.borrow().document().element(id);

    let on = |target: &web_sys::EventTarget, kind: &'static str, make: fn(&web_sys::Event) -> Option<Event>| {
        let site = Rc::clone(site);
        EventListener::new_with_options(
            target,
            kind,
            EventListenerOptions::enable_prevent_default(),
            move |dom_event| {
                if let Some(event) = make(dom_event) {
                    dispatch(&site, event, Some(dom_event));
                }
            },
        )
    };

    listeners.push(on(document.as_ref(), "keydown", |e| {
        e.dyn_ref::<web_sys::KeyboardEvent>().map(|k| Event::Key(k.key()))
    }));
    listeners.push(on(window.as_ref(), "resize", |_| {
        let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
        Some(Event::ViewportResized { width })
    }));
    listeners.push(on(window.as_ref(), "popstate", |e| {
        let state = e.dyn_ref::<web_sys::PopStateEvent>()?.state();
        Some(Event::HistoryPop(state.as_string().and_then(|s| Route::from_data_route(&s))))
    }));

    if let Some(toggle) = element(ElementId::Toggle) {
        listeners.push(on(toggle.as_ref(), "click", |_| Some(Event::ToggleClick)));
        listeners.push(on(toggle.as_ref(), "pointerdown", |e| pointer_input(e, "pointerdown").map(Event::Pointer)));
        listeners.push(on(toggle.as_ref(), "pointermove", |e| pointer_input(e, "pointermove").map(Event::Pointer)));
        listeners.push(on(toggle.as_ref(), "pointerup", |e| pointer_input(e, "pointerup").map(Event::Pointer)));
        listeners.push(on(toggle.as_ref(), "pointercancel", |e| pointer_input(e, "pointercancel").map(Event::Pointer)));
        listeners.push(on(toggle.as_ref(), "lostpointercapture", |_| Some(Event::Pointer(PointerInput::LostCapture))));
    }
    if let Some(overlay) = element(ElementId::Overlay) {
        listeners.push(on(overlay.as_ref(), "click", |_| Some(Event::OverlayClick)));
    }
    for route in Route::ALL {
        if let Some(link) = element(ElementId::NavLink(route)) {
            let site = Rc::clone(site);
            listeners.push(EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |dom_event| dispatch(&site, Event::NavLinkClick(route), Some(dom_event)),
            ));
        }
    }
    if let Some(picker) = element(ElementId::LanguagePicker) {
        listeners.push(on(picker.as_ref(), "change", |e| {
            let select = e.target()?.dyn_into::<web_sys::HtmlSelectElement>().ok()?;
            Some(Event::LanguageSelected(select.value()))
        }));
    }

    if let Some(outlet) = element(ElementId::Outlet) {
        let glow_site = Rc::clone(site);
        listeners.push(EventListener::new(&outlet, "pointermove", move |dom_event| {
            let Some(pointer) = dom_event.dyn_ref::<web_sys::MouseEvent>() else {
                return;
            };
            let Some(panel) = glow_site.borrow().document().element(ElementId::GlowPanel) else {
                return;
            };
            let bounds = panel.get_bounding_client_rect();
            let rect = PanelRect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            };
            let event = Event::GlowMove {
                x: f64::from(pointer.client_x()),
                y: f64::from(pointer.client_y()),
                rect,
            };
            dispatch(&glow_site, event, None);
        }));
        listeners.push(on(outlet.as_ref(), "pointerleave", |_| Some(Event::GlowLeave)));

        // Submit bubbles from whichever form is currently mounted.
        let submit_site = Rc::clone(site);
        listeners.push(EventListener::new_with_options(
            &outlet,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |dom_event| {
                dom_event.prevent_default();
                let outcome = submit_site.borrow_mut().submit();
                apply_outcome(&outcome, Some(dom_event));
                send_pending(&submit_site);
            },
        ));
    }

    listeners
}
