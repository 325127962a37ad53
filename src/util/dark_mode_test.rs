#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn dark_sets_attribute_and_light_removes_it() {
    assert_eq!(attribute_value(Theme::Dark), Some("dark"));
    assert_eq!(attribute_value(Theme::Light), None);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
