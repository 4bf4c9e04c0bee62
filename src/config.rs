/// Where the dealership backend lives. The endpoints are rooted at the page's
/// own origin; an empty origin produces relative URLs, which the browser
/// resolves against the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub origin: String,
}

impl ApiConfig {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin: String = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `window.location.origin`. Off the browser (SSR, native tests)
    /// there is no window and the origin stays empty.
    pub fn from_window() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
                return Self::new(origin);
            }
            leptos::logging::warn!("[CONFIG] window.location.origin unavailable, using relative URLs");
        }
        Self::default()
    }
}
