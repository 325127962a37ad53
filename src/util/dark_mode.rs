//! Page-level theme attribute.
//!
//! Dark mode sets `data-theme="dark"` on the `<html>` element; light mode
//! removes the attribute so the default stylesheet applies. Requires a
//! browser environment; native builds only log.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::Theme;

#[cfg(feature = "csr")]
const THEME_ATTRIBUTE: &str = "data-theme";

/// Attribute value for `theme`, or `None` when the attribute is removed.
pub fn attribute_value(theme: Theme) -> Option<&'static str> {
    match theme {
        Theme::Dark => Some("dark"),
        Theme::Light => None,
    }
}

/// Reflect `theme` onto the `<html>` element.
pub fn apply(theme: Theme) {
    let value = attribute_value(theme);
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            log::warn!("no document element; theme attribute not set");
            return;
        };
        let result = match value {
            Some(v) => el.set_attribute(THEME_ATTRIBUTE, v),
            None => el.remove_attribute(THEME_ATTRIBUTE),
        };
        if let Err(err) = result {
            log::warn!("theme attribute not updated: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("no document; data-theme would be {value:?}");
    }
}
