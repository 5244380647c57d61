//! Full-page navigation.
//!
//! Used after auth changes and from async completions, where a fresh load
//! re-reads the stored session and no router handle is needed.

/// Load `href` in the current tab.
pub fn redirect(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Go back one entry in the session history.
pub fn back() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}
