//! Catalog landing page: category bar, search, and product grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/`. Links from older pages can still land here with `?id=`, in
//! which case the detail view renders in place of the grid.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::components::category_bar::CategoryBar;
use crate::components::product_grid::ProductGrid;
use crate::components::search_box::SearchBox;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::config::SiteConfig;
use crate::pages::product::ProductDetail;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let query = use_query_map();
    let has_detail_id = move || query.with(|q| q.get("id").is_some());
    let site_name = config.site_name.clone();

    view! {
        <SiteHeader/>
        <main class="container">
            <Show
                when=has_detail_id
                fallback=move || {
                    view! {
                        <Title text=site_name.clone()/>
                        <section class="catalog">
                            <div class="catalog__controls">
                                <SearchBox/>
                                <CategoryBar/>
                            </div>
                            <ProductGrid/>
                        </section>
                    }
                }
            >
                <ProductDetail/>
            </Show>
        </main>
        <SiteFooter/>
    }
}
