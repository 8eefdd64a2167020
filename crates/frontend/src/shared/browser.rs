//! Thin wrappers over `window` dialogs, navigation and cookies.
//! Without a window they do nothing and return `false` or empty values.

use std::fmt::Debug;
use wasm_bindgen::JsCast;

/// Log a failed browser call; `true` when it succeeded
fn report<E: Debug>(what: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("Failed to {}: {:?}", what, e);
            false
        }
    }
}

/// Blocking `window.confirm`; `false` when unavailable
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking `window.alert`
pub fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        report("show alert", w.alert_with_message(message));
    }
}

/// Full page reload
pub fn reload() {
    if let Some(w) = web_sys::window() {
        report("reload page", w.location().reload());
    }
}

/// Leave the single-page app and load `href`
pub fn redirect(href: &str) {
    if let Some(w) = web_sys::window() {
        report(&format!("redirect to {}", href), w.location().set_href(href));
    }
}

/// Raw `document.cookie` string
pub fn document_cookie() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}
