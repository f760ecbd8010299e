use std::collections::HashSet;

use super::*;

const ALL: [AppRoute; 6] =
    [AppRoute::Home, AppRoute::Games, AppRoute::Community, AppRoute::Store, AppRoute::News, AppRoute::Explore];

#[test]
fn paths_are_one_to_one() {
    let paths: HashSet<&str> = ALL.iter().map(|r| r.path()).collect();
    assert_eq!(paths.len(), ALL.len());
    let segments: HashSet<&str> = ALL.iter().map(|r| r.segment()).collect();
    assert_eq!(segments.len(), ALL.len());
}

#[test]
fn path_is_slash_plus_segment() {
    for route in ALL {
        assert_eq!(route.path(), format!("/{}", route.segment()));
    }
}

#[test]
fn nav_lists_games_community_store_news() {
    let labels: Vec<&str> = AppRoute::NAV.iter().map(|r| r.label()).collect();
    assert_eq!(labels, vec!["Games", "Community", "Store", "News"]);
}

#[test]
fn segments_have_no_parameters_or_nesting() {
    for route in ALL {
        assert!(!route.segment().contains('/'));
        assert!(!route.segment().contains(':'));
    }
}
