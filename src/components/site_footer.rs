//! Footer with the current year and store name.

use leptos::prelude::*;

use crate::config::SiteConfig;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let notice = match current_year() {
        Some(year) => format!("© {year} {}", config.site_name),
        None => format!("© {}", config.site_name),
    };

    view! {
        <footer class="site-footer">
            <p class="muted">{notice}</p>
        </footer>
    }
}

/// Calendar year from the browser clock; unknown outside a browser.
fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
