//! URL helpers for API endpoints.

/// Remove trailing slashes so endpoints can be appended safely.
///
/// ```
/// use chatmark::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("https://api.example.com/v1///"), "https://api.example.com/v1");
/// ```
pub fn normalize_base_url(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Join a base URL and an endpoint path with exactly one slash.
///
/// ```
/// use chatmark::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("https://api.example.com/v1/", "/models"),
///     "https://api.example.com/v1/models"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let endpoint = endpoint.trim_start_matches('/');
    format!("{}/{}", normalize_base_url(base_url), endpoint)
}

/// `{base}/models/{model}:generateContent?key={api_key}` with the model and
/// key percent-encoded.
pub fn generate_content_url(base_url: &str, model: &str, api_key: &str) -> String {
    let endpoint = format!(
        "models/{}:generateContent?key={}",
        urlencoding::encode(model.trim()),
        urlencoding::encode(api_key)
    );
    construct_api_url(base_url, &endpoint)
}
