//! Blocking user notices for actions with no visible state of their own.

/// Log `message` and show it in a browser `alert()`.
pub fn alert(message: &str) {
    log::warn!("{message}");
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Ask the user to confirm a destructive action. Always `false` outside the
/// browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some_and(|window| window.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
