//! External link launching.
//!
//! Opens mailto: and https: targets in the host's default handler.
//! Failures are logged, never surfaced to the UI; a portfolio browser
//! should not crash because xdg-open is missing.

/// Fire-and-forget open of an external URL.
pub fn open_external(url: &str) {
    tracing::info!(%url, "opening external link");
    if let Err(err) = open::that_detached(url) {
        tracing::warn!(%url, %err, "failed to open external link");
    }
}
