//! URL helpers for the static content endpoints.

/// Get the origin the site is served from
///
/// # Returns
/// - Origin like "http://localhost:8080" or "https://example.com"
/// - Empty string if window is not available, which keeps produced URLs
///   relative
pub fn site_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build the full URL of a static content collection
///
/// # Example
/// ```rust,no_run
/// use frontend::shared::api_utils::content_url;
///
/// let url = content_url("projects"); // "{origin}/content/projects.json"
/// ```
pub fn content_url(collection: &str) -> String {
    format!("{}/content/{}.json", site_base(), collection)
}
