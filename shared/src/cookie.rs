//! Reading and writing `document.cookie` strings. The browser side lives in the
//! client; this is only the string format.

pub const TOKEN_COOKIE: &str = "token";
pub const ROOT_PATH: &str = "/";

/// First value stored under `name` in a `a=1; b=2` cookie string.
pub fn find(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim_start)
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) => Some((key, value)),
                _ => None,
            }
        })
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

pub fn assignment(name: &str, value: &str, path: &str) -> String {
    format!("{}={}; path={}", name, value, path)
}

pub fn expiry(name: &str, path: &str) -> String {
    format!("{}=; Max-Age=0; path={}", name, path)
}
