/// True when `cookies` (a `document.cookie` string) carries a cookie called `name`
pub fn has_cookie(cookies: &str, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    cookies
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, _)| key.trim() == name)
}

/// Checks the browser cookie jar for the configured session cookie
pub fn has_session_cookie() -> bool {
    let name = &crate::shared::config::config().session.cookie_name;
    has_cookie(&crate::shared::browser::document_cookie(), name)
}
