//! What the page controller does on load, after a login answer and on logout,
//! as a list of effects. The client carries them out against the browser.

use crate::api::LoginResponse;
use crate::cookie::TOKEN_COOKIE;
use crate::form::FormError;
use crate::page::{Access, Page};

pub const LOGIN_UNREACHABLE: &str = "Error during connection attempt.";

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetCookie { name: &'static str, value: String },
    ClearCookie { name: &'static str },
    Navigate(Page),
    ShowError(String),
    Alert(String),
    FetchPlaces,
    FetchPlace(String),
}

#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Accepted(LoginResponse),
    /// Non-2xx answer, with the text the server gave.
    Rejected(String),
    Unreachable,
}

pub fn on_load(page: &Page, has_token: bool) -> Vec<Effect> {
    if let Access::Redirect(target) = page.access(has_token) {
        return vec![Effect::Navigate(target)];
    }
    match page {
        Page::Login => vec![],
        Page::Listing if has_token => vec![Effect::FetchPlaces],
        Page::Listing => vec![],
        Page::Detail { place_id: Some(id) } | Page::Review { place_id: Some(id) } => {
            vec![Effect::FetchPlace(id.clone())]
        }
        Page::Detail { place_id: None } | Page::Review { place_id: None } => {
            vec![Effect::Alert(FormError::MissingPlaceId.to_string())]
        }
    }
}

pub fn after_login(outcome: LoginOutcome) -> Vec<Effect> {
    match outcome {
        LoginOutcome::Accepted(response) => vec![
            Effect::SetCookie {
                name: TOKEN_COOKIE,
                value: response.access_token,
            },
            Effect::Navigate(Page::Listing),
        ],
        LoginOutcome::Rejected(message) => vec![Effect::ShowError(message)],
        LoginOutcome::Unreachable => vec![Effect::Alert(LOGIN_UNREACHABLE.to_string())],
    }
}

/// `confirmed` is the answer to the "are you sure" dialog.
pub fn logout(confirmed: bool) -> Vec<Effect> {
    if !confirmed {
        return vec![];
    }
    vec![
        Effect::ClearCookie { name: TOKEN_COOKIE },
        Effect::Navigate(Page::Login),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetches(effects: &[Effect]) -> bool {
        effects
            .iter()
            .any(|effect| matches!(effect, Effect::FetchPlaces | Effect::FetchPlace(_)))
    }

    #[test]
    fn login_success_stores_token_and_opens_listing() {
        let effects = after_login(LoginOutcome::Accepted(LoginResponse {
            access_token: "abc.def".to_string(),
            refresh_token: None,
        }));
        assert_eq!(
            effects,
            vec![
                Effect::SetCookie {
                    name: "token",
                    value: "abc.def".to_string()
                },
                Effect::Navigate(Page::Listing),
            ]
        );
        assert_eq!(Page::Listing.href(), "index.html");
    }

    #[test]
    fn login_rejection_shows_server_text_and_keeps_cookie() {
        let effects = after_login(LoginOutcome::Rejected("Invalid credentials".to_string()));
        assert_eq!(effects, vec![Effect::ShowError("Invalid credentials".to_string())]);
    }

    #[test]
    fn unreachable_backend_alerts() {
        assert_eq!(
            after_login(LoginOutcome::Unreachable),
            vec![Effect::Alert("Error during connection attempt.".to_string())]
        );
    }

    #[test]
    fn confirmed_logout_clears_cookie_and_opens_login() {
        assert_eq!(
            logout(true),
            vec![
                Effect::ClearCookie { name: "token" },
                Effect::Navigate(Page::Login),
            ]
        );
        assert_eq!(Page::Login.href(), "login.html");
    }

    #[test]
    fn cancelled_logout_does_nothing() {
        assert!(logout(false).is_empty());
    }

    #[test]
    fn review_page_without_token_redirects_without_fetching() {
        let page = Page::Review {
            place_id: Some("42".to_string()),
        };
        let effects = on_load(&page, false);
        assert_eq!(effects, vec![Effect::Navigate(Page::Listing)]);
        assert!(!fetches(&effects));
    }

    #[test]
    fn review_page_with_token_fetches_the_place() {
        let page = Page::Review {
            place_id: Some("42".to_string()),
        };
        assert_eq!(on_load(&page, true), vec![Effect::FetchPlace("42".to_string())]);
    }

    #[test]
    fn listing_fetches_only_with_token() {
        assert_eq!(on_load(&Page::Listing, true), vec![Effect::FetchPlaces]);
        assert!(on_load(&Page::Listing, false).is_empty());
    }

    #[test]
    fn detail_page_fetches_with_or_without_token() {
        let page = Page::Detail {
            place_id: Some("7".to_string()),
        };
        assert_eq!(on_load(&page, false), vec![Effect::FetchPlace("7".to_string())]);
        assert_eq!(on_load(&page, true), vec![Effect::FetchPlace("7".to_string())]);
    }

    #[test]
    fn missing_place_id_alerts() {
        let effects = on_load(&Page::Detail { place_id: None }, true);
        assert_eq!(
            effects,
            vec![Effect::Alert("No place ID found in the URL.".to_string())]
        );
        assert!(!fetches(&effects));
    }

    #[test]
    fn login_page_does_nothing_on_load() {
        assert!(on_load(&Page::Login, true).is_empty());
        assert!(on_load(&Page::Login, false).is_empty());
    }
}
