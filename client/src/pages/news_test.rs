use std::collections::HashSet;

use super::*;

#[test]
fn six_headlines_in_fixed_order() {
    assert_eq!(HEADLINES.len(), 6);
    assert!(HEADLINES[0].text.starts_with("Demon Slayer"));
    assert!(HEADLINES[5].text.starts_with("My Hero Academia"));
}

#[test]
fn headline_markers_are_distinct() {
    let markers: HashSet<&str> = HEADLINES.iter().map(|h| h.marker).collect();
    assert_eq!(markers.len(), HEADLINES.len());
}

#[test]
fn headlines_are_non_empty() {
    assert!(HEADLINES.iter().all(|h| !h.text.trim().is_empty()));
}
