//! Free-text search input. Every keystroke updates the shared query.

use leptos::prelude::*;

use crate::state::filter::FilterCriteria;

#[component]
pub fn SearchBox() -> impl IntoView {
    let criteria = expect_context::<RwSignal<FilterCriteria>>();

    view! {
        <input
            id="searchInput"
            class="search"
            type="search"
            placeholder="Search products..."
            aria-label="Search products"
            prop:value=move || criteria.with(|c| c.query.clone())
            on:input=move |ev| {
                let query = event_target_value(&ev);
                criteria.update(|c| c.set_query(query));
            }
        />
    }
}
