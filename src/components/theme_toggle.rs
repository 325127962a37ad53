//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::theme::ThemeStore;
use crate::util::storage::BrowserStorage;

/// Flips the theme on click; icon and tooltip always offer the other theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeStore<BrowserStorage>>>();
    let label = move || theme.with(ThemeStore::toggle_label);

    view! {
        <button
            id="themeToggle"
            class="btn theme-toggle"
            title=move || label().title
            aria-label=move || label().title
            on:click=move |_| {
                theme.update(|store| {
                    store.toggle();
                });
            }
        >
            <i class=move || label().icon_class></i>
        </button>
    }
}
