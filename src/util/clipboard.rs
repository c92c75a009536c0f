//! Clipboard write helper.
//!
//! Client-side (hydrate): awaited `navigator.clipboard.writeText` so a
//! denied or unavailable clipboard surfaces as an error instead of a
//! silent drop. Server-side (SSR): stub reporting failure.

#![allow(clippy::unused_async)]

/// Copy `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error string when no window is available or when the
/// browser rejects the write (permission denied, insecure context).
pub async fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|_| "clipboard write rejected".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("not available on server".to_owned())
    }
}
