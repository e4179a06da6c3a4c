//! Thin wrappers around browser facilities the invitation uses:
//! clipboard writes, the platform dialer and confirmation prompts.

use wasm_bindgen_futures::{spawn_local, JsFuture};

/// `tel:` URI for handing a number to the platform dialer.
pub fn tel_uri(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// Copy a literal string to the system clipboard. Fire-and-forget; the
/// UI shows its own "copied" indicator regardless of the promise.
pub fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let clipboard = window.navigator().clipboard();
        let text = text.to_string();
        spawn_local(async move {
            if JsFuture::from(clipboard.write_text(&text)).await.is_err() {
                gloo::console::warn!("Clipboard write failed");
            }
        });
    }
}

/// Navigate to a `tel:` URI, which the mobile browser hands to the dialer.
pub fn open_dialer(phone: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(&tel_uri(phone)).is_err() {
            gloo::console::warn!("Failed to open dialer");
        }
    }
}

/// Native confirmation prompt; false when the prompt is unavailable.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_uri() {
        assert_eq!(tel_uri("01012345678"), "tel:01012345678");
    }
}
