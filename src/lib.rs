//! # storefront
//!
//! Leptos + WASM client for a static digital-goods storefront: a filterable
//! product grid, a per-product detail page, and a persisted light/dark theme.
//!
//! Domain logic (catalog, filtering, theme persistence, detail resolution)
//! lives in `state` and has no DOM dependency. Browser glue sits behind the
//! `csr` feature in `util`, and `components`/`pages` wire the two together.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging, then mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let resolved = config::SiteConfig::from_build_env();
    let level = resolved.as_ref().map_or(config::DEFAULT_LOG_LEVEL, |c| c.log_level);
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }
    let site_config = resolved.unwrap_or_else(|err| {
        log::warn!("site config rejected, using defaults: {err}");
        config::SiteConfig::default()
    });

    leptos::mount::mount_to_body(move || view! { <app::App config=site_config/> });
}
