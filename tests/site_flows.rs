//! End-to-end page flows.
//!
//! Each test boots a page against an in-memory document and a virtual
//! clock, drives it with the same events the browser glue produces and
//! inspects the resulting document.

use avsite::app::{Event, PointerInput, PointerKind};
use avsite::config::RelayConfig;
use avsite::content::LANGUAGE_STORAGE_KEY;
use avsite::domain::{LanguageCode, Page, RelayError, Route};
use avsite::relay::{EmailJsRelay, RecordingRelay};
use avsite::scheduler::ManualScheduler;
use avsite::site::{Site, SiteServices};
use avsite::storage::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore};
use avsite::ui::dom::{Document, ElementId, FormControl, MemoryDocument};
use avsite::Config;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ==================== Test Helpers ====================

type TestSite = Site<MemoryDocument, ManualScheduler>;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn configured() -> Config {
    Config {
        relay: RelayConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk_123".to_string(),
            ..RelayConfig::default()
        },
        ..Config::default()
    }
}

fn boot_with(config: Config, page: Page, store: Box<dyn PreferenceStore>, relay: &RecordingRelay) -> TestSite {
    let document = if page.has_shell() {
        MemoryDocument::with_shell()
    } else {
        MemoryDocument::confirmation()
    };
    let services = SiteServices {
        store,
        relay: Arc::new(relay.clone()),
    };
    Site::boot(config, page, document, ManualScheduler::default(), services, &["en-US"])
}

fn boot(page: Page) -> TestSite {
    boot_with(
        configured(),
        page,
        Box::new(MemoryPreferenceStore::default()),
        &RecordingRelay::succeeding(),
    )
}

fn drag(site: &mut TestSite, dx: f64) {
    site.dispatch(Event::Pointer(PointerInput::Down {
        pointer_id: 7,
        kind: PointerKind::Touch,
        button: 0,
        x: 20.0,
        y: 20.0,
    }));
    site.dispatch(Event::Pointer(PointerInput::Move {
        pointer_id: 7,
        x: 20.0 + dx,
        y: 22.0,
    }));
    site.dispatch(Event::Pointer(PointerInput::Up { pointer_id: 7 }));
}

fn drawer_open(site: &TestSite) -> bool {
    site.document().has_class(ElementId::Site, "site--sidebar-open")
}

// ==================== Drawer ====================

#[test]
fn long_drag_opens_and_swallows_the_trailing_click() {
    let mut site = boot(Page::Home);

    drag(&mut site, 100.0);
    assert!(drawer_open(&site));
    assert_eq!(site.document().attribute(ElementId::Toggle, "aria-expanded"), Some("true"));
    assert!(!site.document().has_pointer_capture(7));

    let outcome = site.dispatch(Event::ToggleClick);
    assert!(outcome.default_prevented);
    assert!(outcome.propagation_stopped);
    assert!(drawer_open(&site), "click synthesized by the drag must not toggle");

    site.dispatch(Event::ToggleClick);
    assert!(!drawer_open(&site));
}

#[test]
fn short_drag_stays_closed_until_the_suppression_window_ends() {
    let mut site = boot(Page::Home);

    drag(&mut site, 40.0);
    assert!(!drawer_open(&site));
    assert_eq!(site.document().style(ElementId::Toggle, "--drag-offset-x"), Some("0px"));

    site.advance(ms(299));
    site.dispatch(Event::ToggleClick);
    assert!(!drawer_open(&site));

    drag(&mut site, 40.0);
    site.advance(ms(300));
    site.dispatch(Event::ToggleClick);
    assert!(drawer_open(&site));
}

#[test]
fn jitter_below_noise_floor_is_a_plain_click() {
    let mut site = boot(Page::Home);

    drag(&mut site, 4.0);
    site.dispatch(Event::ToggleClick);
    assert!(drawer_open(&site));
}

#[test]
fn drag_in_progress_is_visible_on_the_handle() {
    let mut site = boot(Page::Home);

    let outcome = site.dispatch(Event::Pointer(PointerInput::Down {
        pointer_id: 3,
        kind: PointerKind::Touch,
        button: 0,
        x: 0.0,
        y: 0.0,
    }));
    assert!(outcome.default_prevented);
    assert!(site.document().has_pointer_capture(3));

    site.dispatch(Event::Pointer(PointerInput::Move {
        pointer_id: 3,
        x: 400.0,
        y: -80.0,
    }));
    assert!(site.document().has_class(ElementId::Toggle, "header-scroll--dragging"));
    assert_eq!(site.document().style(ElementId::Toggle, "--drag-offset-x"), Some("150px"));
    assert_eq!(site.document().style(ElementId::Toggle, "--drag-offset-y"), Some("-45px"));

    site.dispatch(Event::Pointer(PointerInput::LostCapture));
    assert!(!site.document().has_class(ElementId::Toggle, "header-scroll--dragging"));
    assert!(!drawer_open(&site));
}

#[test]
fn escape_and_overlay_close_the_drawer() {
    let mut site = boot(Page::Home);

    site.dispatch(Event::ToggleClick);
    site.dispatch(Event::Key("Enter".to_string()));
    assert!(drawer_open(&site));
    site.dispatch(Event::Key("Escape".to_string()));
    assert!(!drawer_open(&site));
    assert!(!site.document().has_class(ElementId::Body, "no-scroll"));

    site.dispatch(Event::ToggleClick);
    assert!(site.document().has_class(ElementId::Body, "no-scroll"));
    site.dispatch(Event::OverlayClick);
    assert!(!drawer_open(&site));
    assert_eq!(site.document().attribute(ElementId::Sidebar, "aria-hidden"), Some("true"));
}

#[test]
fn malformed_shell_is_left_untouched() {
    let services = SiteServices {
        store: Box::new(MemoryPreferenceStore::default()),
        relay: Arc::new(RecordingRelay::succeeding()),
    };
    let mut site = Site::boot(
        Config::default(),
        Page::Home,
        MemoryDocument::new(),
        ManualScheduler::default(),
        services,
        &["en"],
    );

    site.dispatch(Event::ToggleClick);
    site.dispatch(Event::NavLinkClick(Route::Contact));
    drag(&mut site, 120.0);
    site.advance(ms(1000));

    assert_eq!(site.document(), &MemoryDocument::new());
}

// ==================== Routing ====================

#[test]
fn landing_routes_in_place_and_pushes_history() {
    let mut site = boot(Page::Home);
    assert_eq!(site.document().mounted(), Some(Route::Home));

    site.dispatch(Event::ToggleClick);
    let outcome = site.dispatch(Event::NavLinkClick(Route::Contact));

    assert!(outcome.default_prevented);
    assert_eq!(outcome.history, vec![(Route::Contact, "/contact.html".to_string())]);
    assert!(!drawer_open(&site));
    assert_eq!(site.document().mounted(), Some(Route::Contact));
    assert_eq!(
        site.document().attribute(ElementId::NavLink(Route::Contact), "aria-current"),
        Some("page")
    );
    assert_eq!(site.document().attribute(ElementId::NavLink(Route::Home), "aria-current"), None);

    let before = site.document().clone();
    let again = site.dispatch(Event::NavLinkClick(Route::Contact));
    assert!(again.history.is_empty());
    assert_eq!(site.document(), &before);

    site.dispatch(Event::HistoryPop(Some(Route::Home)));
    assert_eq!(site.document().mounted(), Some(Route::Home));
}

#[test]
fn back_to_the_boot_entry_restores_the_landing_view() {
    let mut site = boot(Page::Home);

    site.dispatch(Event::NavLinkClick(Route::Contact));
    assert_eq!(site.document().mounted(), Some(Route::Contact));

    let outcome = site.dispatch(Event::HistoryPop(None));
    assert!(outcome.history.is_empty());
    assert_eq!(site.document().mounted(), Some(Route::Home));
    assert_eq!(
        site.document().attribute(ElementId::NavLink(Route::Home), "aria-current"),
        Some("page")
    );
}

#[test]
fn landing_document_loaded_at_contact_path_starts_on_contact() {
    let config = configured();
    let store = MemoryPreferenceStore::default();
    let state = avsite::initialize(&config, Page::Home, &store, &["en"]).at_path("/contact.html");
    let services = SiteServices {
        store: Box::new(store),
        relay: Arc::new(RecordingRelay::succeeding()),
    };
    let mut site = Site::new(state, MemoryDocument::with_shell(), ManualScheduler::default(), services);
    assert_eq!(site.document().mounted(), Some(Route::Contact));

    let outcome = site.dispatch(Event::NavLinkClick(Route::Home));
    assert_eq!(outcome.history, vec![(Route::Home, "/".to_string())]);

    site.dispatch(Event::HistoryPop(None));
    assert_eq!(site.document().mounted(), Some(Route::Contact));
}

#[test]
fn contact_document_ignores_history_pops() {
    let mut site = boot(Page::Contact);
    let before = site.document().clone();

    let outcome = site.dispatch(Event::HistoryPop(Some(Route::Home)));
    assert!(outcome.history.is_empty());
    assert!(!outcome.default_prevented);
    assert_eq!(site.document(), &before);

    site.dispatch(Event::HistoryPop(None));
    assert_eq!(site.document().mounted(), Some(Route::Contact));
}

#[test]
fn contact_document_lets_links_navigate() {
    let mut site = boot(Page::Contact);
    site.dispatch(Event::ToggleClick);

    let outcome = site.dispatch(Event::NavLinkClick(Route::Home));
    assert!(!outcome.default_prevented);
    assert!(outcome.history.is_empty());
    assert!(!drawer_open(&site));
    assert_eq!(site.document().mounted(), Some(Route::Contact));
}

#[test]
fn header_transition_only_on_desktop_and_rearms() {
    let mut site = boot(Page::Home);

    site.dispatch(Event::ViewportResized { width: 600.0 });
    site.dispatch(Event::NavLinkClick(Route::Contact));
    assert!(!site.document().has_class(ElementId::Site, "site--transitioning"));

    site.dispatch(Event::ViewportResized { width: 1280.0 });
    site.dispatch(Event::NavLinkClick(Route::Home));
    assert!(site.document().has_class(ElementId::Site, "site--transitioning"));

    site.advance(ms(200));
    site.dispatch(Event::NavLinkClick(Route::Contact));
    site.advance(ms(200));
    assert!(
        site.document().has_class(ElementId::Site, "site--transitioning"),
        "second trigger restarts the window"
    );

    site.advance(ms(120));
    assert!(!site.document().has_class(ElementId::Site, "site--transitioning"));
}

#[test]
fn set_active_route_is_idempotent() {
    let mut site = boot(Page::Home);
    site.set_active_route(Route::Contact);
    let once = site.document().clone();
    site.set_active_route(Route::Contact);
    assert_eq!(site.document(), &once);
}

// ==================== Language ====================

#[test]
fn stored_language_wins_over_browser_locale() {
    let site = boot_with(
        configured(),
        Page::Home,
        Box::new(MemoryPreferenceStore::with_value(LANGUAGE_STORAGE_KEY, "nl")),
        &RecordingRelay::succeeding(),
    );
    assert_eq!(site.state().language, LanguageCode::Nl);
    assert_eq!(site.document().text(ElementId::LanguageLabel), Some("Taal:"));
}

#[test]
fn language_change_persists_and_remounts() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = temp_dir.path().join("preferences.json");
    let store = JsonPreferenceStore::open(file.clone()).expect("Failed to open store");

    let mut site = boot_with(configured(), Page::Contact, Box::new(store), &RecordingRelay::succeeding());
    assert_eq!(site.state().language, LanguageCode::En);

    site.dispatch(Event::LanguageSelected("nl".to_string()));
    assert_eq!(site.document().value(ElementId::LanguagePicker).as_deref(), Some("nl"));
    assert!(site.document().outlet_html().contains("Verstuur bericht"));
    assert_eq!(site.document().mounted(), Some(Route::Contact));

    let reopened = JsonPreferenceStore::open(file).expect("Failed to reopen store");
    assert_eq!(
        reopened.read(LANGUAGE_STORAGE_KEY).expect("read failed").as_deref(),
        Some("nl")
    );

    site.dispatch(Event::LanguageSelected("fr".to_string()));
    assert_eq!(site.state().language, LanguageCode::Nl);
}

// ==================== Contact form ====================

#[tokio::test]
async fn empty_fields_never_reach_the_relay() {
    let relay = RecordingRelay::succeeding();
    let mut site = boot_with(configured(), Page::Contact, Box::new(MemoryPreferenceStore::default()), &relay);

    site.document_mut().fill_form("  ", "jane@x.com", "General enquiry", "");
    let outcome = site.submit();
    assert!(outcome.default_prevented);
    assert!(site.flush_relay().await.is_none());

    assert!(relay.requests().is_empty());
    assert_eq!(site.document().validity_reports(), 1);
    assert!(!site.document().is_disabled(ElementId::SubmitButton));
}

#[tokio::test]
async fn successful_submission_redirects_after_delay() {
    let relay = RecordingRelay::succeeding();
    let mut site = boot_with(configured(), Page::Contact, Box::new(MemoryPreferenceStore::default()), &relay);

    site.document_mut()
        .fill_form("Jane Doe", "jane@x.com", "General enquiry", "Hello");
    site.submit();
    assert!(site.document().is_disabled(ElementId::SubmitButton));
    assert_eq!(site.document().text(ElementId::SubmitButton), Some("Sending..."));

    site.flush_relay().await.expect("request pending");

    let requests = relay.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].fields.subject, "AV enquiry (General enquiry) from Jane Doe");
    assert_eq!(requests[0].fields.reply_to, "jane@x.com");

    assert_eq!(site.document().text(ElementId::Status), Some("Message sent! Redirecting..."));
    assert_eq!(site.document().attribute(ElementId::Status, "data-state"), Some("success"));
    assert_eq!(site.document().value(ElementId::Field(FormControl::FullName)).as_deref(), Some(""));
    assert_eq!(
        site.document().value(ElementId::Field(FormControl::Category)).as_deref(),
        Some("Residential project")
    );
    assert!(site.document().is_disabled(ElementId::SubmitButton));

    site.advance(ms(599));
    assert_eq!(site.navigated_to(), None);
    site.advance(ms(1));
    assert_eq!(site.navigated_to(), Some("/contact-success.html"));
}

#[tokio::test]
async fn rejected_submission_shows_relay_text_and_reenables() {
    let relay = RecordingRelay::failing(RelayError::Rejected {
        status: 400,
        message: "The template ID is invalid".to_string(),
    });
    let mut site = boot_with(configured(), Page::Contact, Box::new(MemoryPreferenceStore::default()), &relay);

    site.document_mut()
        .fill_form("Jane Doe", "jane@x.com", "General enquiry", "Hello");
    site.submit();
    site.flush_relay().await.expect("request pending");

    assert_eq!(site.document().text(ElementId::Status), Some("The template ID is invalid"));
    assert_eq!(site.document().attribute(ElementId::Status, "data-state"), Some("error"));
    assert!(!site.document().is_disabled(ElementId::SubmitButton));
    assert_eq!(site.document().text(ElementId::SubmitButton), Some("Send message"));
    assert_eq!(
        site.document().value(ElementId::Field(FormControl::Message)).as_deref(),
        Some("Hello"),
        "fields survive a failure"
    );

    site.advance(ms(1000));
    assert_eq!(site.navigated_to(), None);
}

#[tokio::test]
async fn missing_credentials_fail_without_sending() {
    let relay = RecordingRelay::succeeding();
    let mut site = boot_with(
        Config::default(),
        Page::Contact,
        Box::new(MemoryPreferenceStore::default()),
        &relay,
    );

    site.document_mut()
        .fill_form("Jane Doe", "jane@x.com", "General enquiry", "Hello");
    site.submit();
    assert!(site.flush_relay().await.is_none());

    assert!(relay.requests().is_empty());
    assert_eq!(
        site.document().text(ElementId::Status),
        Some("Failed to send message. Please try again.")
    );
    assert!(!site.document().is_disabled(ElementId::SubmitButton));
}

#[tokio::test]
async fn emailjs_relay_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = configured();
    config.relay.endpoint = server.uri();
    let services = SiteServices {
        store: Box::new(MemoryPreferenceStore::with_value(LANGUAGE_STORAGE_KEY, "en")),
        relay: Arc::new(EmailJsRelay::from_config(&config.relay)),
    };
    let mut site = Site::boot(
        config,
        Page::Contact,
        MemoryDocument::with_shell(),
        ManualScheduler::default(),
        services,
        &["nl-NL"],
    );
    assert_eq!(site.state().language, LanguageCode::En);

    site.document_mut()
        .fill_form("Jane Doe", "jane@x.com", "Event or venue", "Hello");
    site.submit();
    site.flush_relay().await.expect("request pending");

    assert_eq!(site.document().attribute(ElementId::Status, "data-state"), Some("success"));
    site.advance(ms(600));
    assert_eq!(site.navigated_to(), Some("/contact-success.html"));
}

// ==================== Confirmation ====================

#[test]
fn confirmation_counts_down_under_base_path() {
    let config = Config {
        base_path: "/site".to_string(),
        ..Config::default()
    };
    let mut site = boot_with(
        config,
        Page::Confirmation,
        Box::new(MemoryPreferenceStore::default()),
        &RecordingRelay::succeeding(),
    );
    assert_eq!(site.document().text(ElementId::Countdown), Some("5"));

    site.dispatch(Event::ToggleClick);
    site.advance(ms(4999));
    assert_eq!(site.document().text(ElementId::Countdown), Some("1"));
    assert_eq!(site.navigated_to(), None);

    site.advance(ms(1));
    assert_eq!(site.document().text(ElementId::Countdown), Some("0"));
    assert_eq!(site.navigated_to(), Some("/site/contact.html"));
}
