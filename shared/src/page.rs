use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// same set as JavaScript's encodeURIComponent
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encodes a place id for use in a query string or a URL path segment.
pub fn encode_id(id: &str) -> String {
    utf8_percent_encode(id, COMPONENT).to_string()
}

/// The four pages of the site. Every page boots the same app; which one is
/// shown depends on the file name at the end of the URL path.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Login,
    Listing,
    Detail { place_id: Option<String> },
    Review { place_id: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    Allowed,
    Redirect(Page),
}

impl Page {
    /// `path` is the URL path (`/place.html`), `place_id` the `id` query
    /// parameter if any.
    pub fn from_location(path: &str, place_id: Option<&str>) -> Self {
        let place_id = place_id.filter(|id| !id.is_empty()).map(str::to_string);
        let path = path.trim_end_matches('/');
        if path.ends_with("login.html") {
            Page::Login
        } else if path.ends_with("add_review.html") {
            Page::Review { place_id }
        } else if path.ends_with("place.html") {
            Page::Detail { place_id }
        } else {
            Page::Listing
        }
    }

    pub fn href(&self) -> String {
        match self {
            Page::Login => "login.html".to_string(),
            Page::Listing => "index.html".to_string(),
            Page::Detail { place_id } => with_id("place.html", place_id),
            Page::Review { place_id } => with_id("add_review.html", place_id),
        }
    }

    pub fn requires_token(&self) -> bool {
        matches!(self, Page::Review { .. })
    }

    pub fn access(&self, has_token: bool) -> Access {
        if self.requires_token() && !has_token {
            Access::Redirect(Page::Listing)
        } else {
            Access::Allowed
        }
    }
}

fn with_id(file: &str, place_id: &Option<String>) -> String {
    match place_id {
        Some(id) => format!("{}?id={}", file, encode_id(id)),
        None => file.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: &str) -> Page {
        Page::Detail {
            place_id: Some(id.to_string()),
        }
    }

    #[test]
    fn pages_from_path() {
        assert_eq!(Page::from_location("/login.html", None), Page::Login);
        assert_eq!(Page::from_location("/", None), Page::Listing);
        assert_eq!(Page::from_location("/index.html", None), Page::Listing);
        assert_eq!(Page::from_location("/site/place.html", Some("42")), detail("42"));
        assert_eq!(
            Page::from_location("/add_review.html", Some("")),
            Page::Review { place_id: None }
        );
    }

    #[test]
    fn hrefs() {
        assert_eq!(Page::Login.href(), "login.html");
        assert_eq!(Page::Listing.href(), "index.html");
        assert_eq!(detail("42").href(), "place.html?id=42");
        assert_eq!(Page::Review { place_id: None }.href(), "add_review.html");
    }

    #[test]
    fn place_ids_are_encoded_in_links() {
        assert_eq!(detail("a b&c#d").href(), "place.html?id=a%20b%26c%23d");
        assert_eq!(detail("3f2-9_x.y").href(), "place.html?id=3f2-9_x.y");
        assert_eq!(encode_id("é/1"), "%C3%A9%2F1");
    }

    #[test]
    fn review_page_without_token_goes_to_listing() {
        let page = Page::Review {
            place_id: Some("42".to_string()),
        };
        assert_eq!(page.access(false), Access::Redirect(Page::Listing));
        assert_eq!(page.access(true), Access::Allowed);
    }

    #[test]
    fn other_pages_are_open() {
        for page in vec![Page::Login, Page::Listing, detail("1")] {
            assert_eq!(page.access(false), Access::Allowed);
            assert_eq!(page.access(true), Access::Allowed);
        }
    }
}
