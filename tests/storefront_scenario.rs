//! End-to-end storefront flows over the public API, without a browser.

use storefront::components::product_grid::{EMPTY_GRID_MESSAGE, grid_markup};
use storefront::config::SiteConfig;
use storefront::state::catalog::Catalog;
use storefront::state::detail::{DemoToggle, DetailView, resolve_detail};
use storefront::state::filter::{CategoryFilter, FilterCriteria, filter};
use storefront::state::theme::{MemoryStorage, Theme, ThemeStore};

fn titles(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<String> {
    filter(catalog.products(), criteria).iter().map(|p| p.title.clone()).collect()
}

#[test]
fn category_bar_then_search_narrow_the_grid() {
    let catalog = Catalog::embedded().unwrap();
    assert_eq!(catalog.category_labels(), vec!["All", "Template", "Preset", "Tools"]);

    let mut criteria = FilterCriteria::default();
    assert_eq!(titles(&catalog, &criteria).len(), 4);

    criteria.select(CategoryFilter::from_label("Template"));
    assert_eq!(
        titles(&catalog, &criteria),
        vec!["Template Landing Page Modern", "Template Portfolio Premium"]
    );

    criteria.select(CategoryFilter::from_label("All"));
    criteria.set_query("qr");
    assert_eq!(titles(&catalog, &criteria), vec!["QR & Barcode Tool (Frontend)"]);

    // Switching category keeps the typed query.
    criteria.select(CategoryFilter::from_label("Template"));
    assert_eq!(criteria.query, "qr");
    let visible = filter(catalog.products(), &criteria);
    let html = grid_markup(&visible, &SiteConfig::default());
    assert!(html.contains(EMPTY_GRID_MESSAGE));
    assert_eq!(html.matches(EMPTY_GRID_MESSAGE).count(), 1);
}

#[test]
fn theme_survives_a_reload_through_storage() {
    let mut store = ThemeStore::load(MemoryStorage::default(), "theme");
    store.toggle();
    let persisted = store.storage().clone();

    let reloaded = ThemeStore::load(persisted, "theme");
    assert_eq!(reloaded.current(), Theme::Dark);
}

#[test]
fn opening_a_card_link_resolves_its_detail() {
    let catalog = Catalog::embedded().unwrap();
    let config = SiteConfig::default();
    for product in catalog.products() {
        let DetailView::Found(detail) = resolve_detail(&catalog, Some(product.id.as_str()), &config.site_name) else {
            panic!("{} should resolve", product.id);
        };
        assert_eq!(detail.title, product.title);
        assert!(detail.page_title.ends_with("• DigitalStore"));
    }
    assert_eq!(resolve_detail(&catalog, Some("nope"), &config.site_name), DetailView::NotFound);

    let mut demo = DemoToggle::default();
    demo.toggle();
    demo.toggle();
    assert!(!demo.visible);
}
