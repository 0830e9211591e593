use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use shared::cookie;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

pub fn get(name: &str) -> Option<String> {
    let cookies = match html_document()?.cookie() {
        Ok(cookies) => cookies,
        Err(error) => {
            log::warn!("cookie store not readable: {:?}", error);
            return None;
        }
    };
    cookie::find(&cookies, name)
}

fn write(line: String) {
    match html_document() {
        Some(document) => {
            if let Err(error) = document.set_cookie(&line) {
                log::error!("could not write cookie: {:?}", error);
            }
        }
        None => log::error!("no html document, cookie not written"),
    }
}

pub fn set(name: &str, value: &str, path: &str) {
    write(cookie::assignment(name, value, path));
}

pub fn clear(name: &str, path: &str) {
    write(cookie::expiry(name, path));
}
