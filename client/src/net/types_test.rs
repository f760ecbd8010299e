use super::*;

fn record_json(id: u64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "mal_id": id,
        "url": format!("https://myanimelist.net/anime/{id}"),
        "title": title,
        "images": {
            "jpg": {
                "image_url": format!("https://cdn.example.test/{id}.jpg"),
                "small_image_url": format!("https://cdn.example.test/{id}t.jpg")
            },
            "webp": { "image_url": format!("https://cdn.example.test/{id}.webp") }
        },
        "episodes": 26
    })
}

fn body_with(records: Vec<serde_json::Value>) -> String {
    serde_json::json!({
        "pagination": { "last_visible_page": 1, "has_next_page": false },
        "data": records
    })
    .to_string()
}

// =============================================================
// parse_catalog
// =============================================================

#[test]
fn parse_catalog_keeps_received_order_and_ids() {
    let body = body_with(vec![record_json(5, "Cowboy Bebop: The Movie"), record_json(1, "Cowboy Bebop"), record_json(6, "Trigun")]);
    let items = parse_catalog(&body).unwrap();
    let ids: Vec<u64> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![5, 1, 6]);
    assert_eq!(items[1].title, "Cowboy Bebop");
}

#[test]
fn parse_catalog_flattens_nested_jpg_url() {
    let body = body_with(vec![record_json(20, "Naruto")]);
    let items = parse_catalog(&body).unwrap();
    assert_eq!(
        items,
        vec![CatalogItem {
            id: 20,
            title: "Naruto".to_owned(),
            image_url: "https://cdn.example.test/20.jpg".to_owned(),
        }]
    );
}

#[test]
fn parse_catalog_empty_collection_is_ok() {
    let items = parse_catalog(&body_with(Vec::new())).unwrap();
    assert!(items.is_empty());
}

#[test]
fn parse_catalog_missing_collection_is_parse_failure() {
    let err = parse_catalog(r#"{"pagination":{}}"#).unwrap_err();
    assert!(matches!(err, CatalogError::ParseFailure(_)));
}

#[test]
fn parse_catalog_non_json_is_parse_failure() {
    let err = parse_catalog("<html>rate limited</html>").unwrap_err();
    assert!(matches!(err, CatalogError::ParseFailure(_)));
}

#[test]
fn parse_catalog_record_without_image_is_parse_failure() {
    let body = r#"{"data":[{"mal_id":1,"title":"Cowboy Bebop","images":{}}]}"#;
    let err = parse_catalog(body).unwrap_err();
    assert!(matches!(err, CatalogError::ParseFailure(_)));
}

#[test]
fn parse_catalog_drops_repeated_ids_after_first() {
    let body = body_with(vec![record_json(1, "first"), record_json(2, "other"), record_json(1, "again")]);
    let items = parse_catalog(&body).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "first");
    assert_eq!(items[1].id, 2);
}

// =============================================================
// check_status
// =============================================================

#[test]
fn check_status_accepts_2xx() {
    assert!(check_status(200).is_ok());
    assert!(check_status(204).is_ok());
}

#[test]
fn check_status_rejects_server_error() {
    assert_eq!(check_status(500), Err(CatalogError::HttpStatusFailure { status: 500 }));
}

#[test]
fn check_status_rejects_rate_limit_and_redirect() {
    assert!(check_status(429).is_err());
    assert!(check_status(304).is_err());
}

#[test]
fn catalog_error_display_names_status() {
    let err = CatalogError::HttpStatusFailure { status: 503 };
    assert_eq!(err.to_string(), "catalog responded with status 503");
}
