//! Executable smoke check: builds a sample page, runs the startup sequence
//! and logs the translated result.

use std::path::Path;

use kfood_guide_web::App;
use kfood_guide_web::dom::{
    Document,
    ElementSpec,
    MemoryDocument,
};
use kfood_guide_web::i18n::FilePreferenceStore;

/// Build the demo page: a navbar, a few translated headings and the locale
/// selector.
fn sample_page() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    doc.insert(ElementSpec::new().class("navbar"));
    doc.insert(
        ElementSpec::new().class("nav-link").attr("href", "index.html").attr("data-key", "nav.home"),
    );
    doc.insert(
        ElementSpec::new().class("nav-link").attr("href", "menu.html").attr("data-key", "nav.menu"),
    );
    doc.insert(
        ElementSpec::new()
            .class("nav-link")
            .attr("href", "culture.html")
            .attr("data-key", "nav.culture"),
    );
    doc.insert(
        ElementSpec::new()
            .class("nav-link")
            .attr("href", "about.html")
            .attr("data-key", "nav.about"),
    );
    doc.insert(ElementSpec::new().attr("data-key", "hero.title"));
    doc.insert(ElementSpec::new().attr("data-key", "hero.subtitle"));
    doc.insert(ElementSpec::new().id("languageSelect"));
    doc
}

/// Environment locale in browser form ("pt-BR"), defaulting to empty.
fn environment_locale() -> String {
    std::env::var("LANG")
        .ok()
        .and_then(|lang| lang.split('.').next().map(|code| code.replace('_', "-")))
        .unwrap_or_default()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let mut doc = sample_page();
    let store = FilePreferenceStore::open(Path::new(".kfood-guide-prefs.json"));
    let mut app = App::new(store);

    let outcome = app
        .init(&mut doc, Path::new("data/content.json"), &environment_locale(), "index.html")
        .await;

    tracing::info!("Startup outcome: {outcome:?}, locale: {}", app.language.current_language());
    for node in doc.query_by_attr("data-key") {
        let key = doc.attr(node, "data-key").unwrap_or_default();
        tracing::info!("{key} => {}", doc.text(node));
    }
}
