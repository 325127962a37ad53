//! Category + free-text filtering over the catalog.
//!
//! A product is visible when its category is admitted by the active
//! [`CategoryFilter`] and the query (if any) is a case-insensitive substring
//! of its title, its description, or its space-joined tags. Output keeps
//! catalog order.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::state::catalog::Product;

/// Category selection driving the grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Map a category button label to a filter.
    pub fn from_label(label: &str) -> Self {
        if label == Self::ALL_LABEL { Self::All } else { Self::Named(label.to_owned()) }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Named(name) => name,
        }
    }

    pub fn admits(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == category,
        }
    }
}

/// Active category + query pair. Rebuilt on every interaction, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub query: String,
}

impl FilterCriteria {
    pub fn new(category: CategoryFilter, query: impl Into<String>) -> Self {
        Self { category, query: query.into() }
    }

    /// Switch category, keeping the current query.
    pub fn select(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Replace the query, keeping the current category.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Lowercased query; `None` only for the empty string. Whitespace is
    /// matched literally.
    fn needle(&self) -> Option<String> {
        (!self.query.is_empty()).then(|| self.query.to_lowercase())
    }
}

/// Return the products matching `criteria`, in catalog order.
pub fn filter<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let needle = criteria.needle();
    let matched: Vec<&Product> = products
        .iter()
        .filter(|p| criteria.category.admits(&p.category))
        .filter(|p| needle.as_deref().map_or(true, |n| matches_query(p, n)))
        .collect();
    log::debug!(
        "filter category={} query={:?}: {} of {}",
        criteria.category.label(),
        criteria.query,
        matched.len(),
        products.len()
    );
    matched
}

/// `needle` must already be lowercase.
fn matches_query(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product.desc.to_lowercase().contains(needle)
        || product.tags.join(" ").to_lowercase().contains(needle)
}
