/// Base URL of the REST API, without trailing slash. Set `HBNB_API_URL` at
/// build time to point the bundle somewhere else.
pub const API_BASE: &str = match option_env!("HBNB_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000/api/v1",
};

pub fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE.trim_end_matches('/'), path)
}
