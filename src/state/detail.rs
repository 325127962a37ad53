//! Product detail resolution and the demo preview toggle.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::state::catalog::{Catalog, Product};

pub const NOT_FOUND_MESSAGE: &str = "Product not found.";

/// Outcome of resolving the `id` query parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailView {
    NotFound,
    Found(ProductDetail),
}

/// Everything the detail page fills in for one product.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductDetail {
    pub page_title: String,
    pub title: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub purchase_url: String,
    pub demo_image: String,
}

impl ProductDetail {
    fn from_product(product: &Product, site_name: &str) -> Self {
        Self {
            page_title: format!("{} • {site_name}", product.title),
            title: product.title.clone(),
            image: product.img.clone(),
            price: product.price.clone(),
            description: product.desc.clone(),
            category: product.category.clone(),
            tags: product.tags.clone(),
            purchase_url: product.purchase_url.clone(),
            demo_image: product.demo_image().to_owned(),
        }
    }
}

/// Resolve a detail view; a missing, blank, or unknown id is `NotFound`.
pub fn resolve_detail(catalog: &Catalog, id: Option<&str>, site_name: &str) -> DetailView {
    let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
        log::info!("detail requested without a product id");
        return DetailView::NotFound;
    };
    match catalog.find(id) {
        Some(product) => DetailView::Found(ProductDetail::from_product(product, site_name)),
        None => {
            log::info!("detail requested for unknown product {id:?}");
            DetailView::NotFound
        }
    }
}

/// Show/hide state of the demo preview block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DemoToggle {
    pub visible: bool,
}

impl DemoToggle {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Button label for the current state.
    pub fn label(self) -> &'static str {
        if self.visible { "Hide Demo" } else { "View Demo" }
    }
}

/// Source to swap in after an image fails to load. `None` once the fallback
/// itself is showing, so a broken fallback cannot loop.
pub fn fallback_source<'a>(current: &str, fallback: &'a str) -> Option<&'a str> {
    (current != fallback).then_some(fallback)
}
