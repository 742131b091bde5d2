use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Lee una cookie del documento actual. Solo se usa al construir el DeliveryContext.
pub fn read_cookie(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;
    cookie_value(&cookies, name)
}

pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
