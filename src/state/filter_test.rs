use proptest::prelude::*;

use super::*;
use crate::state::catalog::Catalog;

fn catalog() -> Catalog {
    Catalog::embedded().unwrap()
}

fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.id.clone()).collect()
}

// =============================================================
// CategoryFilter
// =============================================================

#[test]
fn all_label_maps_to_all_variant() {
    assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_label("Tools"), CategoryFilter::Named("Tools".to_owned()));
    assert_eq!(CategoryFilter::Named("Tools".to_owned()).label(), "Tools");
    assert_eq!(CategoryFilter::All.label(), "All");
}

#[test]
fn named_filter_is_case_sensitive() {
    let f = CategoryFilter::from_label("Tools");
    assert!(f.admits("Tools"));
    assert!(!f.admits("tools"));
}

#[test]
fn criteria_mutators_keep_the_other_half() {
    let mut criteria = FilterCriteria::new(CategoryFilter::All, "qr");
    criteria.select(CategoryFilter::from_label("Tools"));
    assert_eq!(criteria.query, "qr");
    criteria.set_query("bar");
    assert_eq!(criteria.category, CategoryFilter::from_label("Tools"));
    assert_eq!(criteria.query, "bar");
}

// =============================================================
// filter
// =============================================================

#[test]
fn all_with_empty_query_returns_catalog_unchanged() {
    let catalog = catalog();
    let out = filter(catalog.products(), &FilterCriteria::default());
    assert_eq!(out.len(), catalog.len());
    let expected: Vec<&Product> = catalog.products().iter().collect();
    assert_eq!(out, expected);
}

#[test]
fn template_category_yields_the_two_templates() {
    let catalog = catalog();
    let out = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::from_label("Template"), ""));
    assert_eq!(ids(&out), vec!["p1", "p2"]);
}

#[test]
fn qr_query_under_all_yields_the_qr_tool() {
    let catalog = catalog();
    let out = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::All, "qr"));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "QR & Barcode Tool (Frontend)");
}

#[test]
fn query_is_case_insensitive() {
    let catalog = catalog();
    let upper = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::All, "LANDING"));
    let lower = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::All, "landing"));
    assert_eq!(upper, lower);
    assert_eq!(ids(&lower), vec!["p1"]);
}

#[test]
fn query_matches_tags_and_description() {
    let catalog = catalog();
    let by_tag = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::All, "lightroom"));
    assert_eq!(ids(&by_tag), vec!["p3"]);
    let by_joined_tags = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::All, "js tools"));
    assert_eq!(ids(&by_joined_tags), vec!["p4"]);
    let by_desc = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::All, "seo-friendly"));
    assert_eq!(ids(&by_desc), vec!["p2"]);
}

#[test]
fn query_and_category_combine() {
    let catalog = catalog();
    let out = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::from_label("Preset"), "qr"));
    assert!(out.is_empty());
}

#[test]
fn unmatched_query_yields_empty() {
    let catalog = catalog();
    let out = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::All, "zzz-no-such-thing"));
    assert!(out.is_empty());
}

#[test]
fn trailing_space_is_part_of_the_query() {
    let catalog = catalog();
    let out = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::All, "tools "));
    assert!(out.is_empty());
}

#[test]
fn whitespace_only_query_is_a_substring_test() {
    let catalog = catalog();
    let out = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::All, "   "));
    let expected: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| p.title.contains("   ") || p.desc.contains("   ") || p.tags.join(" ").contains("   "))
        .collect();
    assert_eq!(out, expected);

    let single = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::All, " "));
    assert_eq!(single.len(), catalog.len());
}

#[test]
fn unknown_category_yields_empty() {
    let catalog = catalog();
    let out = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::from_label("Fonts"), ""));
    assert!(out.is_empty());
}

// =============================================================
// Properties
// =============================================================

proptest! {
    #[test]
    fn category_filter_selects_exactly_that_category(index in 0usize..3) {
        let catalog = catalog();
        let category = catalog.categories()[index].to_owned();
        let out = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::Named(category.clone()), ""));
        let expected = catalog.products().iter().filter(|p| p.category == category).count();
        prop_assert_eq!(out.len(), expected);
        prop_assert!(out.iter().all(|p| p.category == category));
    }

    #[test]
    fn query_case_does_not_change_result(query in "[a-zA-Z ]{0,8}") {
        let catalog = catalog();
        let upper = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::All, query.to_uppercase()));
        let lower = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::All, query.to_lowercase()));
        prop_assert_eq!(upper, lower);
    }

    #[test]
    fn filter_output_is_an_ordered_subsequence(query in "[a-z]{0,3}") {
        let catalog = catalog();
        let out = filter(catalog.products(), &FilterCriteria::new(CategoryFilter::All, query));
        let positions: Vec<usize> = out
            .iter()
            .map(|p| catalog.products().iter().position(|q| q.id == p.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
