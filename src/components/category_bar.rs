//! Category buttons derived from the catalog.

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::catalog::Catalog;
use crate::state::filter::{CategoryFilter, FilterCriteria};

/// One button per category label, `All` first. The button matching the
/// active criteria is the only one marked active.
#[component]
pub fn CategoryBar() -> impl IntoView {
    let catalog = expect_context::<Arc<Catalog>>();
    let criteria = expect_context::<RwSignal<FilterCriteria>>();

    let buttons = catalog
        .category_labels()
        .into_iter()
        .map(|label| {
            let active_label = label.clone();
            let click_label = label.clone();
            let data_cat = label.clone();
            view! {
                <button
                    class="category-btn"
                    class:active=move || criteria.with(|c| c.category.label() == active_label)
                    data-cat=data_cat
                    on:click=move |_| {
                        criteria.update(|c| c.select(CategoryFilter::from_label(&click_label)));
                    }
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! { <div id="categoryList" class="categories">{buttons}</div> }
}
