//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and the product grid while reading and
//! writing shared state from Leptos context providers installed by `App`.

pub mod back_button;
pub mod category_bar;
pub mod product_grid;
pub mod search_box;
pub mod site_footer;
pub mod site_header;
pub mod theme_toggle;
