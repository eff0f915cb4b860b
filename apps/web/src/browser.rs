//! `web_sys` glue: the real location bar and new-tab opening.

use phub::prelude::Location;
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// The page's own location and session history.
///
/// Holds no state; every call reads or writes `window.location` / `window.history`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLocation;

impl BrowserLocation {
    fn write(search: &str, replace: bool) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        let url = history_url(&path, search, &hash);

        let history = match window.history() {
            Ok(history) => history,
            Err(err) => {
                warn!(error = ?err, "History API unavailable");
                return;
            },
        };

        let result = if replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(&url))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(&url))
        };
        if let Err(err) = result {
            warn!(error = ?err, url = %url, "Failed to update the location bar");
        }
    }
}

impl Location for BrowserLocation {
    fn search(&self) -> String {
        read(|window| window.location().search())
    }

    fn origin(&self) -> String {
        read(|window| window.location().origin())
    }

    fn push(&mut self, search: &str) {
        Self::write(search, false);
    }

    fn replace(&mut self, search: &str) {
        Self::write(search, true);
    }
}

/// Page URL for a history entry: same path and fragment, new query string.
fn history_url(path: &str, search: &str, hash: &str) -> String {
    format!("{path}{search}{hash}")
}

fn read(get: impl FnOnce(&Window) -> Result<String, JsValue>) -> String {
    web_sys::window().and_then(|window| get(&window).ok()).unwrap_or_default()
}

/// Full URL of the current page, used to resolve relative fetches.
#[must_use]
pub fn page_url() -> String {
    read(|window| window.location().href())
}

/// Opens `url` in a new top-level browsing context.
pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.open_with_url_and_target_and_features(url, "_blank", "noopener") {
        warn!(error = ?err, url = %url, "Failed to open a new tab");
    }
}
