//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::SiteConfig;
use crate::pages::{catalog::CatalogPage, product::ProductPage};
use crate::state::catalog::Catalog;
use crate::state::filter::FilterCriteria;
use crate::state::theme::ThemeStore;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Restores the theme, loads the catalog, and provides the shared state every
/// page and component reads through context.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let catalog = Arc::new(Catalog::load());
    let theme = RwSignal::new(ThemeStore::load(BrowserStorage, config.theme_storage_key.clone()));
    let criteria = RwSignal::new(FilterCriteria::default());

    provide_context(config);
    provide_context(catalog);
    provide_context(theme);
    provide_context(criteria);

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="muted">"Page not found."</p> }>
                <Route path=StaticSegment("") view=CatalogPage/>
                <Route path=StaticSegment("product") view=ProductPage/>
            </Routes>
        </Router>
    }
}
