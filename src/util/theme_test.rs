#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn prefers_light_is_true_in_non_hydrate_tests() {
    assert!(prefers_light());
}

#[test]
fn watch_is_noop_but_callable() {
    watch(|_| panic!("no media query outside the browser"));
}
