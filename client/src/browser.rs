// blocking dialogs and full page navigation

use shared::controller::Effect;
use shared::cookie::ROOT_PATH;
use shared::Page;

use crate::cookie;

/// Carries out the effects that only touch the browser and hands back the
/// ones the current page has to deal with.
pub fn perform(effects: Vec<Effect>) -> Vec<Effect> {
    let mut rest = Vec::new();
    for effect in effects {
        match effect {
            Effect::SetCookie { name, value } => cookie::set(name, &value, ROOT_PATH),
            Effect::ClearCookie { name } => cookie::clear(name, ROOT_PATH),
            Effect::Navigate(page) => go_to(&page),
            Effect::Alert(message) => alert(&message),
            other => rest.push(other),
        }
    }
    rest
}

pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(error) = window.alert_with_message(message) {
                log::warn!("alert failed: {:?}", error);
            }
        }
        None => log::warn!("no window for alert: {}", message),
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn go_to(page: &Page) {
    let href = page.href();
    log::info!("navigating to {}", href);
    match web_sys::window() {
        Some(window) => {
            if let Err(error) = window.location().set_href(&href) {
                log::error!("navigation to {} failed: {:?}", href, error);
            }
        }
        None => log::error!("no window to navigate to {}", href),
    }
}
