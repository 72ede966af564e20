//! Opening URLs in a browser.

use tracing::debug;

/// Opens a URL somewhere the user can see it.
///
/// Opening is fire-and-forget: implementations report nothing back.
pub trait BrowserOpener {
    /// Opens `url`.
    fn open(&self, url: &str);
}

/// Opens URLs in the platform's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) {
        debug!(url_length = url.len(), "Opening issue in browser");
        if let Err(e) = open::that_detached(url) {
            debug!(error = %e, "Failed to launch browser");
        }
    }
}

/// Discards URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBrowser;

impl BrowserOpener for NoopBrowser {
    fn open(&self, _url: &str) {}
}
