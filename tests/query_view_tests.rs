#![cfg(feature = "url")]
#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Query manipulation tests over `url::Url`
///
/// This test suite covers:
/// - Presence checks for keys and key/value combinations
/// - Add/set/remove mutation semantics and their effect on the full URL
/// - Exact serialized output for special characters (lowercase hex)
use arq::{QueryStoreExt, decode_query};
use url::Url;

#[test]
fn test_has_query() {
    let mut url = Url::parse("http://www.test.com/?key=value").unwrap();
    let view = url.query_view();

    assert!(view.has("key").unwrap(), "Did not detect existing key");
    assert!(
        view.has_all("key", &["value"]).unwrap(),
        "Did not detect existing key and value"
    );

    assert!(
        !view.has("nokey").unwrap(),
        "Wrongfully detected non-existing key"
    );
    assert!(
        !view.has_all("nokey", &["value"]).unwrap(),
        "Wrongfully detected non-existing key with value"
    );
}

#[test]
fn test_has_query_multi_key() {
    let mut url = Url::parse("http://www.test.com/?key1=value1&key1=value2&key2=value1").unwrap();
    let view = url.query_view();

    assert!(view.has("key1").unwrap(), "Did not detect existing key");
    assert!(view.has("key2").unwrap(), "Did not detect existing key");

    assert!(
        !view.has("nokey").unwrap(),
        "Wrongfully detected non-existing key"
    );
}

#[test]
fn test_has_query_multi_value() {
    let mut url = Url::parse("http://www.test.com/?key=value1&key=value2").unwrap();
    let view = url.query_view();

    assert!(view.has("key").unwrap(), "Did not detect existing key");
    assert!(
        view.has_all("key", &["value1"]).unwrap(),
        "Did not detect existing key and value"
    );
    assert!(
        view.has_all("key", &["value2"]).unwrap(),
        "Did not detect existing key and value"
    );
    assert!(
        view.has_all("key", &["value1", "value2"]).unwrap(),
        "Did not detect existing key and values"
    );

    assert!(
        !view.has_all("nokey", &["value1", "value2"]).unwrap(),
        "Wrongfully detected non-existing key with values"
    );
}

#[test]
fn test_add_query() {
    let mut url = Url::parse("http://www.test.com/").unwrap();

    url.query_view().add("key", &["value1"]).unwrap();
    assert!(
        url.query_view().has_all("key", &["value1"]).unwrap(),
        "Adding from blank failed"
    );
    assert!(
        !url.query_view().has_all("key", &["value2"]).unwrap(),
        "Unexpected value found"
    );

    // Adding an already-present value is a no-op
    url.query_view().add("key", &["value1"]).unwrap();
    assert_eq!(url.as_str(), "http://www.test.com/?key=value1");
}

#[test]
fn test_add_query_multi_value() {
    let mut url = Url::parse("http://www.test.com/").unwrap();

    url.query_view().add("key", &["value1", "value2"]).unwrap();
    let map = decode_query(url.query().unwrap());
    assert_eq!(
        map.get("key"),
        Some(&["value1".to_string(), "value2".to_string()][..])
    );

    url.query_view().add("key", &["value1", "value2"]).unwrap();
    let map = decode_query(url.query().unwrap());
    assert_eq!(
        map.get("key"),
        Some(&["value1".to_string(), "value2".to_string()][..]),
        "Re-adding existing values changed the value sequence"
    );
}

#[test]
fn test_add_query_multi_key() {
    let mut url = Url::parse("http://www.test.com/").unwrap();

    url.query_view().add("key1", &["value1", "value2"]).unwrap();
    url.query_view().add("key2", &["value3", "value4"]).unwrap();
    assert!(
        url.query_view()
            .has_all("key1", &["value1", "value2"])
            .unwrap(),
        "Adding key1 failed"
    );
    assert!(
        url.query_view()
            .has_all("key2", &["value3", "value4"])
            .unwrap(),
        "Adding key2 failed"
    );
}

#[test]
fn test_remove_query() {
    let url_string = "http://www.test.com/";
    let mut url = Url::parse(url_string).unwrap();

    url.query_view().add("key1", &["value1", "value2"]).unwrap();
    url.query_view().remove("key1").unwrap();

    // No stray '?' left behind
    assert_eq!(url.as_str(), url_string, "Removing queries failed");

    url.query_view().add("key1", &["value1", "value2"]).unwrap();
    url.query_view().add("key2", &["value1", "value2"]).unwrap();
    url.query_view().remove("key1").unwrap();

    assert!(
        !url.query_view().has("key1").unwrap(),
        "Removing query failed"
    );
    assert!(
        url.query_view().has("key2").unwrap(),
        "Query unexpectedly removed"
    );
}

#[test]
fn test_set_query() {
    let mut url = Url::parse("http://www.test.com/").unwrap();

    url.query_view().set("key", &["value1"]).unwrap();
    assert!(
        url.query_view().has_all("key", &["value1"]).unwrap(),
        "Setting from blank failed"
    );
    assert!(
        !url.query_view().has_all("key", &["value2"]).unwrap(),
        "Unexpected value found"
    );

    url.query_view().set("key", &["value2"]).unwrap();
    assert!(
        url.query_view().has_all("key", &["value2"]).unwrap(),
        "Setting existing failed"
    );
    assert!(
        !url.query_view().has_all("key", &["value1"]).unwrap(),
        "Unexpected value found"
    );

    url.query_view().set("key", &["value1", "value2"]).unwrap();
    assert!(
        url.query_view()
            .has_all("key", &["value1", "value2"])
            .unwrap(),
        "Setting existing failed"
    );
    assert!(
        !url.query_view().has_all("key", &["value3"]).unwrap(),
        "Unexpected value found"
    );
}

#[test]
fn test_chained_view_calls() {
    let mut url = Url::parse("http://www.test.com/").unwrap();

    url.query_view()
        .add("key1", &["value1"])
        .unwrap()
        .add("key2", &["value2"])
        .unwrap()
        .remove("key1")
        .unwrap();

    assert_eq!(url.as_str(), "http://www.test.com/?key2=value2");
}

#[test]
fn test_space_encodes_as_plus() {
    let mut url = Url::parse("http://www.test.com/").unwrap();
    url.query_view().add("item", &["s e"]).unwrap();
    assert_eq!(url.as_str(), "http://www.test.com/?item=s+e");
    assert!(url.query_view().has_all("item", &["s e"]).unwrap());
}

#[test]
fn test_special_character_strings() {
    let url_string = "http://www.test.com/";

    let charmap: &[(&str, &str)] = &[
        (" ", "+"),
        ("#", "%23"),
        ("$", "%24"),
        ("%", "%25"),
        ("&", "%26"),
        ("+", "%2b"),
        (",", "%2c"),
        ("/", "%2f"),
        (";", "%3b"),
        ("=", "%3d"),
        ("?", "%3f"),
        ("@", "%40"),
        ("\\", "%5c"),
    ];

    for (raw, escaped) in charmap {
        let mut url = Url::parse(url_string).unwrap();
        let value = format!("s{raw}e");

        url.query_view().add("item", &[&value]).unwrap();

        assert_eq!(
            url.as_str(),
            format!("{url_string}?item=s{escaped}e"),
            "String compare failed to match '{raw}' to '{escaped}'. Resulting URL is {url}",
        );
        assert!(
            url.query_view().has_all("item", &[&value]).unwrap(),
            "Presence check failed to match '{raw}' to '{escaped}'. Resulting URL is {url}",
        );
    }
}

#[test]
fn test_keys_and_values() {
    let mut url = Url::parse("http://www.test.com/?b=1&a=2&b=3&b=1").unwrap();
    let view = url.query_view();

    assert_eq!(view.keys(), vec!["b".to_string(), "a".to_string()]);
    assert_eq!(
        view.values("b").unwrap(),
        vec!["1".to_string(), "3".to_string()]
    );
    assert_eq!(view.values("a").unwrap(), vec!["2".to_string()]);
    assert_eq!(view.values("nokey").unwrap(), Vec::<String>::new());
}

#[test]
fn test_empty_key_is_rejected() {
    let mut url = Url::parse("http://www.test.com/?key=value").unwrap();
    assert!(url.query_view().add("", &["value"]).is_err());
    assert_eq!(url.as_str(), "http://www.test.com/?key=value");
}
