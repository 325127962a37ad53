//! Static product catalog.
//!
//! DESIGN
//! ======
//! Product records ship as JSON compiled into the bundle. Loading validates
//! identifier uniqueness once so every later lookup can trust the data, and
//! the catalog is never mutated after that.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;

use crate::state::filter::CategoryFilter;
use crate::util::navigation::is_link_safe_id;

const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Errors produced while loading catalog data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog document is not valid product JSON.
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share the same identifier.
    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    /// A required text field is blank.
    #[error("product at index {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    /// An id would not survive a round trip through the detail link's query string.
    #[error("product id {0:?} must use only letters, digits, '-', '.', '_' or '~'")]
    UnsafeId(String),
}

/// One product record as shipped in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub price: String,
    pub img: String,
    #[serde(default)]
    pub demo: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub purchase_url: String,
}

impl Product {
    /// Image shown in the demo preview; falls back to the main image.
    pub fn demo_image(&self) -> &str {
        self.demo.as_deref().filter(|d| !d.is_empty()).unwrap_or(&self.img)
    }
}

/// Ordered, read-only product list. Catalog order is display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from records, enforcing unique non-empty link-safe ids
    /// and non-empty categories.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            if product.id.trim().is_empty() {
                return Err(CatalogError::EmptyField { index, field: "id" });
            }
            if !is_link_safe_id(&product.id) {
                return Err(CatalogError::UnsafeId(product.id.clone()));
            }
            if product.category.trim().is_empty() {
                return Err(CatalogError::EmptyField { index, field: "category" });
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Self::new(products)
    }

    /// The catalog compiled into the bundle.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load the embedded catalog, degrading to an empty one on bad data.
    pub fn load() -> Self {
        match Self::embedded() {
            Ok(catalog) => {
                log::info!("catalog loaded: {} products", catalog.len());
                catalog
            }
            Err(err) => {
                log::error!("catalog unavailable: {err}");
                Self::default()
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Labels for the category bar: `All` followed by [`Self::categories`].
    pub fn category_labels(&self) -> Vec<String> {
        std::iter::once(CategoryFilter::ALL_LABEL.to_owned())
            .chain(self.categories().into_iter().map(str::to_owned))
            .collect()
    }
}
