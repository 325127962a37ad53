//! Product grid rendered as one card per visible product.
//!
//! DESIGN
//! ======
//! The grid is rebuilt wholesale from the current [`FilterCriteria`] on every
//! change: [`grid_markup`] produces the complete replacement markup and the
//! component swaps it in. Every interpolated value is escaped.

#[cfg(test)]
#[path = "product_grid_test.rs"]
mod product_grid_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::catalog::{Catalog, Product};
use crate::state::filter::{FilterCriteria, filter};
use crate::util::escape::{escape_html, excerpt};
use crate::util::navigation::detail_href;

pub const EMPTY_GRID_MESSAGE: &str = "No products found.";

/// Markup for one product card.
pub fn card_markup(product: &Product, config: &SiteConfig) -> String {
    format!(
        concat!(
            r#"<article class="card">"#,
            r#"<img loading="lazy" src="{img}" alt="{title}" onerror="this.onerror=null;this.src='{fallback}'">"#,
            r#"<h3>{title}</h3>"#,
            r#"<p class="muted">{summary}</p>"#,
            r#"<div class="meta">"#,
            r#"<div class="price">{price}</div>"#,
            r#"<div>"#,
            r#"<a class="btn" href="{detail}">View</a>"#,
            r#"<a class="btn primary" href="{buy}" target="_blank" rel="noopener">Buy</a>"#,
            r#"</div></div></article>"#,
        ),
        img = escape_html(&product.img),
        title = escape_html(&product.title),
        fallback = escape_html(&config.fallback_image_url),
        summary = escape_html(&excerpt(&product.desc, config.excerpt_chars)),
        price = escape_html(&product.price),
        detail = escape_html(&detail_href(&product.id)),
        buy = escape_html(&product.purchase_url),
    )
}

/// Full grid contents: every card in order, or a single placeholder when empty.
pub fn grid_markup(products: &[&Product], config: &SiteConfig) -> String {
    if products.is_empty() {
        return format!(r#"<div class="muted">{EMPTY_GRID_MESSAGE}</div>"#);
    }
    products.iter().map(|p| card_markup(p, config)).collect()
}

/// Grid container bound to the shared filter criteria.
#[component]
pub fn ProductGrid() -> impl IntoView {
    let catalog = expect_context::<Arc<Catalog>>();
    let config = expect_context::<SiteConfig>();
    let criteria = expect_context::<RwSignal<FilterCriteria>>();

    let markup = move || {
        let criteria = criteria.get();
        let visible = filter(catalog.products(), &criteria);
        grid_markup(&visible, &config)
    };

    view! { <div id="productGrid" class="grid" inner_html=markup></div> }
}
