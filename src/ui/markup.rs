//! HTML markup for the shell, the page variants and complete documents.
//!
//! Every interpolated string is HTML-escaped. Class names, ids and data
//! attributes match [`ElementId::selector`](super::dom::ElementId::selector).

use crate::config::Config;
use crate::content::{localized_content, LocalizedContent};
use crate::domain::{obfuscate_email, LanguageCode, Page, Route, CONTACT_CATEGORIES, CONTACT_EMAIL};
use crate::infrastructure::BasePath;

const HEADER_BUTTON_IMAGE: &str = "assets/img/headerbutton-transparent.png";
const BACKGROUND_IMAGE: &str = "av-installatie.jpg";
const NOTEPAD_IMAGE: &str = "assets/img/contactsnotepad.png";
const STYLESHEET: &str = "assets/css/main.css";
const SCRIPT: &str = "assets/js/avsite.js";

/// Name prefix of the meta tags carrying configuration into the browser.
pub const CONFIG_META_PREFIX: &str = "avsite:";

/// Escapes text for use in element content and quoted attribute values.
///
/// ```
/// use avsite::ui::markup::escape_html;
///
/// assert_eq!(escape_html("<a href=\"x\">R&D</a>"), "&lt;a href=&quot;x&quot;&gt;R&amp;D&lt;/a&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Persistent shell: drawer, overlay, header toggle and an empty outlet.
#[must_use]
pub fn shell_markup(base: &BasePath, content: &LocalizedContent, language: LanguageCode) -> String {
    let e = escape_html;
    let options = LanguageCode::ALL
        .iter()
        .map(|code| {
            let selected = if *code == language { " selected" } else { "" };
            format!("<option value=\"{code}\"{selected}>{}</option>", code.flag())
        })
        .collect::<String>();

    format!(
        r#"<aside id="primary-sidebar" class="sidebar" aria-hidden="true">
  <nav class="sidebar__nav" aria-label="{nav}">
    <a class="sidebar__nav-link" href="{home_href}" data-route="home">{home}</a>
    <a class="sidebar__nav-link" href="{contact_href}" data-route="contact">{contact}</a>
  </nav>
  <div class="sidebar__language">
    <label class="sidebar__language-label" for="language-picker">{label}</label>
    <select id="language-picker" class="language-picker__select" aria-label="{label}">{options}</select>
  </div>
</aside>
<button class="sidebar__overlay" type="button" aria-label="{close}"></button>
<header class="site__header">
  <button class="header-scroll" type="button" aria-label="{toggle}" aria-controls="primary-sidebar" aria-expanded="false">
    <img src="{image}" alt="" />
  </button>
</header>
<main id="page-content"></main>"#,
        nav = e(content.aria.nav),
        home_href = e(&base.nav_href(Route::Home)),
        home = e(content.navigation.home),
        contact_href = e(&base.nav_href(Route::Contact)),
        contact = e(content.navigation.contact),
        label = e(content.language.label),
        close = e(content.aria.close_navigation),
        toggle = e(content.aria.header_button),
        image = e(&base.asset(HEADER_BUTTON_IMAGE)),
    )
}

/// Landing hero mounted into the outlet.
#[must_use]
pub fn home_markup(base: &BasePath, content: &LocalizedContent) -> String {
    let e = escape_html;
    format!(
        r#"<div class="landing__content" data-glow>
  <figure class="landing__logo-wrapper" aria-hidden="true">
    <img class="landing__logo" src="{image}" alt="" />
  </figure>
  <p class="landing__tagline">{tagline}</p>
  <h1 id="site-title">{name}</h1>
  <p class="landing__description">{description}</p>
</div>"#,
        image = e(&base.asset(BACKGROUND_IMAGE)),
        tagline = e(content.tagline),
        name = e(content.name),
        description = e(content.description),
    )
}

/// Contact form mounted into the outlet.
#[must_use]
pub fn contact_markup(base: &BasePath, content: &LocalizedContent) -> String {
    let e = escape_html;
    let form = &content.contact.form;
    let obfuscated = obfuscate_email(CONTACT_EMAIL);

    let categories: String = CONTACT_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let selected = if index == 0 { " selected" } else { "" };
            format!("<option value=\"{0}\"{selected}>{0}</option>", e(category))
        })
        .collect();

    format!(
        r#"<div class="contact__notepad" data-glow aria-live="polite" style="--notepad-bg: url('{notepad}');">
  <div class="contact__note-content">
    <div class="contact__intro">
      <h1 id="contact-title">{heading}</h1>
      <p class="contact__subtext">{intro}</p>
    </div>
    <form class="contact-form" autocomplete="on" novalidate>
      <label class="field">
        <span class="field__label">{name_label}</span>
        <input class="field__control" type="text" name="fullName" required placeholder="{name_placeholder}" />
      </label>
      <label class="field">
        <span class="field__label">{email_label}</span>
        <input class="field__control" type="email" name="email" required inputmode="email" placeholder="{obfuscated}" title="{email_placeholder}" />
      </label>
      <label class="field">
        <span class="field__label">{category_label}</span>
        <select class="field__control" name="category" required>{categories}</select>
      </label>
      <label class="field field--area">
        <span class="field__label">{message_label}</span>
        <textarea class="field__control field__control--area" name="message" rows="6" required placeholder="{message_placeholder}"></textarea>
      </label>
      <button class="contact-form__submit" type="submit">{submit}</button>
    </form>
    <p class="contact__note-footnote">{footnote} <span>{obfuscated}</span></p>
    <p class="contact__status" role="status" aria-live="polite"></p>
  </div>
</div>"#,
        notepad = e(&base.asset(NOTEPAD_IMAGE)),
        heading = e(content.contact.heading),
        intro = e(content.contact.intro),
        name_label = e(form.name_label),
        name_placeholder = e(form.name_placeholder),
        email_label = e(form.email_label),
        email_placeholder = e(form.email_placeholder),
        obfuscated = e(&obfuscated),
        category_label = e(form.category_label),
        message_label = e(form.message_label),
        message_placeholder = e(form.message_placeholder),
        submit = e(form.submit),
        footnote = e(content.contact.footnote),
    )
}

/// Markup of the page variant for `route`.
#[must_use]
pub fn page_markup(route: Route, base: &BasePath, content: &LocalizedContent) -> String {
    match route {
        Route::Home => home_markup(base, content),
        Route::Contact => contact_markup(base, content),
    }
}

/// Confirmation page body: a return-home header and the countdown.
#[must_use]
pub fn confirmation_markup(base: &BasePath, content: &LocalizedContent, seconds: u32) -> String {
    let e = escape_html;
    let text = &content.confirmation;
    format!(
        r#"<div class="site contact-page">
  <header class="site__header">
    <a class="header-scroll header-scroll--link" href="{home}" aria-label="{return_home}">
      <img src="{image}" alt="" />
    </a>
  </header>
  <main class="contact" role="main">
    <section class="contact__card contact__card--center">
      <div class="contact-thankyou contact-thankyou--standalone">
        <div class="contact-thankyou__content">
          <h1>{heading}</h1>
          <p>{body}</p>
          <p class="contact-thankyou__meta">{prefix} <span data-countdown>{seconds}</span> {suffix}</p>
          <a class="contact-form__submit contact-form__submit--link" href="{contact}">{back}</a>
        </div>
      </div>
    </section>
  </main>
</div>"#,
        home = e(&base.page_url(Page::Home)),
        return_home = e(content.aria.return_home),
        image = e(&base.asset(HEADER_BUTTON_IMAGE)),
        heading = e(text.heading),
        body = e(text.body),
        prefix = e(text.countdown_prefix),
        suffix = e(text.countdown_suffix),
        contact = e(&base.page_url(Page::Contact)),
        back = e(text.back_link),
    )
}

/// Complete HTML document for `page` in `language`.
///
/// Pages with a shell are pre-rendered with their first page variant mounted
/// and the current link marked, so they read correctly before any script runs.
///
/// ```
/// use avsite::domain::{LanguageCode, Page};
/// use avsite::ui::markup::document;
/// use avsite::Config;
///
/// let html = document(Page::Contact, LanguageCode::Nl, &Config::default());
/// assert!(html.starts_with("<!doctype html>"));
/// assert!(html.contains("<html lang=\"nl\">"));
/// assert!(html.contains("Verstuur bericht"));
/// ```
#[must_use]
pub fn document(page: Page, language: LanguageCode, config: &Config) -> String {
    let _span = tracing::debug_span!("document", ?page, %language).entered();

    let base = config.base_path();
    let content = localized_content(language);
    let body = if page.has_shell() {
        let route = page.initial_route();
        let shell = shell_markup(&base, content, language)
            .replace(
                "<main id=\"page-content\"></main>",
                &format!("<main id=\"page-content\">\n{}\n</main>", page_markup(route, &base, content)),
            )
            .replace(
                &format!("data-route=\"{route}\">"),
                &format!("data-route=\"{route}\" aria-current=\"page\">"),
            );
        format!("<div class=\"site\">\n{shell}\n</div>")
    } else {
        confirmation_markup(&base, content, config.timing.confirmation_countdown_secs)
    };

    format!(
        r#"<!doctype html>
<html lang="{lang}">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
{meta}  <link rel="stylesheet" href="{stylesheet}" />
</head>
<body>
<div id="app" data-page="{page}">
{body}
</div>
<script type="module" src="{script}"></script>
</body>
</html>
"#,
        lang = language,
        title = escape_html(&format!("{} | {}", content.name, content.tagline)),
        meta = config_meta(config),
        stylesheet = escape_html(&base.asset(STYLESHEET)),
        page = page_key(page),
        script = escape_html(&base.asset(SCRIPT)),
    )
}

/// `<meta name="avsite:KEY">` tags carrying [`Config::published_values`].
fn config_meta(config: &Config) -> String {
    config
        .published_values()
        .iter()
        .map(|(key, value)| {
            format!("  <meta name=\"{CONFIG_META_PREFIX}{key}\" content=\"{}\" />\n", escape_html(value))
        })
        .collect()
}

/// Value of the `data-page` attribute identifying the document to the script.
#[must_use]
pub const fn page_key(page: Page) -> &'static str {
    match page {
        Page::Home => "home",
        Page::Contact => "contact",
        Page::Confirmation => "confirmation",
    }
}
