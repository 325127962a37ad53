//! Back control for the detail page.

use leptos::prelude::*;

use crate::util::navigation::go_back;

/// Returns to the referring page on the same host, otherwise to `home_href`.
#[component]
pub fn BackButton(home_href: String) -> impl IntoView {
    let target = home_href.clone();

    view! {
        <a
            id="backButton"
            class="btn product-detail__back"
            href=home_href
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                go_back(&target);
            }
        >
            "← Back"
        </a>
    }
}
