//! Route links and back navigation.
//!
//! DESIGN
//! ======
//! The back control returns through history only when the referrer is on the
//! current host. Any other referrer (or none) navigates to the configured home.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

pub const DETAIL_PATH: &str = "/product";

/// Where the back control should go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackTarget {
    History,
    Home,
}

/// True when `id` is made only of URL-unreserved characters, so it reads back
/// unchanged from `?id=`.
pub fn is_link_safe_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~'))
}

/// Link to the detail page for `id`. Catalog ids are link-safe.
pub fn detail_href(id: &str) -> String {
    format!("{DETAIL_PATH}?id={id}")
}

/// Hostname (no userinfo, no port) of an absolute URL.
pub fn referrer_hostname(referrer: &str) -> Option<&str> {
    let (_, rest) = referrer.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    let host = match host_port.find(']') {
        Some(end) if host_port.starts_with('[') => &host_port[..=end],
        _ => host_port.split(':').next().unwrap_or(host_port),
    };
    (!host.is_empty()).then_some(host)
}

pub fn back_target(referrer: &str, hostname: &str) -> BackTarget {
    match referrer_hostname(referrer) {
        Some(host) if !hostname.is_empty() && host.eq_ignore_ascii_case(hostname) => BackTarget::History,
        _ => BackTarget::Home,
    }
}

/// Navigate back within the site, or to `home_href` when arriving from elsewhere.
pub fn go_back(home_href: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let referrer = window.document().map(|doc| doc.referrer()).unwrap_or_default();
        let hostname = window.location().hostname().unwrap_or_default();
        match back_target(&referrer, &hostname) {
            BackTarget::History => match window.history() {
                Ok(history) => {
                    if let Err(err) = history.back() {
                        log::warn!("history back failed: {err:?}");
                    }
                }
                Err(err) => log::warn!("history unavailable: {err:?}"),
            },
            BackTarget::Home => {
                if let Err(err) = window.location().set_href(home_href) {
                    log::warn!("navigation to {home_href} failed: {err:?}");
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("back navigation requested outside a browser (home {home_href})");
    }
}
