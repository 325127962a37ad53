//! Product detail page selected by the `id` query parameter.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::components::back_button::BackButton;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::config::SiteConfig;
use crate::state::catalog::Catalog;
use crate::state::detail::{
    DemoToggle, DetailView, NOT_FOUND_MESSAGE, ProductDetail as Detail, fallback_source, resolve_detail,
};

/// Route component for `/product?id=...`.
#[component]
pub fn ProductPage() -> impl IntoView {
    view! {
        <SiteHeader/>
        <main class="container">
            <ProductDetail/>
        </main>
        <SiteFooter/>
    }
}

/// Resolves the requested product and renders it, or a not-found placeholder.
#[component]
pub fn ProductDetail() -> impl IntoView {
    let catalog = expect_context::<Arc<Catalog>>();
    let config = expect_context::<SiteConfig>();
    let query = use_query_map();

    let site_name = config.site_name.clone();
    let detail = Memo::new(move |_| {
        let id = query.with(|q| q.get("id"));
        resolve_detail(&catalog, id.as_deref(), &site_name)
    });

    move || match detail.get() {
        DetailView::NotFound => view! {
            <section class="product-detail">
                <p class="muted">{NOT_FOUND_MESSAGE}</p>
            </section>
        }
        .into_any(),
        DetailView::Found(found) => view! {
            <FoundProduct
                detail=found
                fallback_image=config.fallback_image_url.clone()
                home_href=config.home_href.clone()
            />
        }
        .into_any(),
    }
}

#[component]
fn FoundProduct(detail: Detail, fallback_image: String, home_href: String) -> impl IntoView {
    let Detail { page_title, title, image, price, description, category, tags, purchase_url, demo_image } = detail;

    let demo = RwSignal::new(DemoToggle::default());
    let demo_fallback = fallback_image.clone();
    let image_src = RwSignal::new(image);
    let on_image_error = fallback_on_error(image_src, fallback_image);

    let tag_chips = tags
        .into_iter()
        .map(|tag| view! { <span class="tag">{tag}</span> })
        .collect::<Vec<_>>();
    let demo_title = title.clone();

    view! {
        <Title text=page_title/>
        <section class="product-detail">
            <BackButton home_href=home_href/>
            <div class="product-detail__media">
                <img
                    id="productImage"
                    src=move || image_src.get()
                    alt=title.clone()
                    on:error=on_image_error
                />
            </div>
            <div class="product-detail__info">
                <h1 id="productTitle">{title.clone()}</h1>
                <div id="productPrice" class="price">{price}</div>
                <p id="productDescription">{description}</p>
                <p class="muted">
                    "Category: "
                    <span id="productCategory">{category}</span>
                </p>
                <div id="productTags" class="tags">{tag_chips}</div>
                <div class="product-detail__actions">
                    <a id="buyBtn" class="btn primary" href=purchase_url target="_blank" rel="noopener">
                        "Buy"
                    </a>
                    <button id="previewDemo" class="btn" on:click=move |_| demo.update(DemoToggle::toggle)>
                        {move || demo.get().label()}
                    </button>
                </div>
                <Show when=move || demo.get().visible>
                    <DemoArea
                        title=demo_title.clone()
                        image=demo_image.clone()
                        fallback_image=demo_fallback.clone()
                    />
                </Show>
            </div>
        </section>
    }
}

/// Preview block shown while the demo toggle is on.
#[component]
fn DemoArea(title: String, image: String, fallback_image: String) -> impl IntoView {
    let image_src = RwSignal::new(image);
    let on_image_error = fallback_on_error(image_src, fallback_image);

    view! {
        <div id="demoArea" class="product-detail__demo">
            <h4>"Preview Demo"</h4>
            <p>{format!("Here is a preview of {title}:")}</p>
            <img
                class="product-detail__demo-image"
                src=move || image_src.get()
                alt=format!("Demo {title}")
                on:error=on_image_error
            />
            <p class="muted">"The image above shows the product in use."</p>
        </div>
    }
}

/// `error` handler that swaps `src` to the fallback once.
fn fallback_on_error<E>(src: RwSignal<String>, fallback: String) -> impl Fn(E) + 'static {
    move |_| {
        if let Some(next) = fallback_source(&src.get_untracked(), &fallback) {
            src.set(next.to_owned());
        }
    }
}
