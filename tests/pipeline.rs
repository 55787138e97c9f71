//! End-to-end scenarios: free text through extraction and matching

use lostfound_core::{Catalog, ItemExtractor, MatchResult, SpotMatcher, UNKNOWN_ITEM};

fn run(text: &str, area: &str) -> Vec<MatchResult> {
    let extractor = ItemExtractor::new();
    let matcher = SpotMatcher::new(Catalog::builtin());
    let keyword = extractor.extract(text);
    matcher.match_spots(&keyword, area)
}

#[test]
fn backpack_near_the_union() {
    let extractor = ItemExtractor::new();
    assert_eq!(extractor.extract("I lost my backpack near the union"), "backpack");

    let results = run("I lost my backpack near the union", "Central Campus");
    assert_eq!(results[0].name, "Student Union Info Desk");
    assert_eq!(results[0].area, "Central Campus");
    assert!(results[0].note.is_none());
}

#[test]
fn wallet_from_another_area() {
    let extractor = ItemExtractor::new();
    assert_eq!(extractor.extract("lost my wallet"), "wallet");

    // No South Campus location handles wallets, so UAPD is the only match
    // even though it sits in Central Campus.
    let results = run("lost my wallet", "South Campus");
    assert!(results
        .iter()
        .any(|r| r.name == "UAPD Lost & Found" && r.area == "Central Campus"));
}

#[test]
fn indeterminate_query_falls_through_to_catchall() {
    let extractor = ItemExtractor::new();
    assert_eq!(extractor.extract("at the near in"), UNKNOWN_ITEM);

    let results = run("at the near in", "East Campus");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Check UAPD Lost & Found");
    assert_eq!(results[0].area, "Central Campus");
    assert!(results[0].note.is_some());
}

#[test]
fn plural_keyword_reaches_singular_tag() {
    // "phones" is a tag at the Student Union and contains the UAPD tag
    // "phone"; the user's area decides the ranking.
    let results = run("I lost my phones", "Central Campus");
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Student Union Info Desk", "UAPD Lost & Found"]);
}

#[test]
fn pipeline_never_returns_empty() {
    for (text, area) in [
        ("", ""),
        ("???", "Central Campus"),
        ("I lost my mind", "Nowhere"),
        ("skateboard", "East Campus"),
    ] {
        assert!(!run(text, area).is_empty(), "empty result for {text:?}/{area:?}");
    }
}
