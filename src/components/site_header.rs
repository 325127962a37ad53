//! Top bar with the store brand and the theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::SiteConfig;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <header class="site-header">
            <a class="site-header__brand" href=config.home_href.clone()>
                {config.site_name.clone()}
            </a>
            <span class="site-header__spacer"></span>
            <ThemeToggle/>
        </header>
    }
}
