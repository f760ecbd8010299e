use super::*;

#[test]
fn catalog_endpoint_is_fixed_listing_without_query() {
    assert_eq!(catalog_endpoint(), "https://api.jikan.moe/v4/anime");
    assert!(!catalog_endpoint().contains('?'));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_catalog_is_unavailable_without_browser() {
    let result = futures::executor::block_on(fetch_catalog());
    assert!(matches!(result, Err(CatalogError::NetworkFailure(_))));
}
