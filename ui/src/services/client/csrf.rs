//! CSRF token forwarding for the cookie-based CSRF repository used by the backend

/// Cookie the backend writes the token into
pub const XSRF_COOKIE_NAME: &str = "XSRF-TOKEN";
/// Header the backend expects the token back in
pub const XSRF_HEADER_NAME: &str = "X-XSRF-TOKEN";

/// Find a cookie value in a `document.cookie` style string
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Current CSRF token from the document cookies, if the backend issued one
#[cfg(target_arch = "wasm32")]
pub fn current_xsrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;
    find_cookie(&cookies, XSRF_COOKIE_NAME)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_xsrf_token() -> Option<String> {
    None
}
