use crate::share::{SHARE_TEXT, SharePlatform, encode_uri_component, share_url};
use crate::*;

#[test]
fn x_link_carries_text_and_page() {
    let link = share_url(SharePlatform::X, "https://example.com/spectrum").unwrap();
    let parsed = url::Url::parse(&link).unwrap();
    assert_eq!(parsed.host_str(), Some("twitter.com"));
    assert_eq!(parsed.path(), "/intent/tweet");

    let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("text".to_string(), SHARE_TEXT.to_string()),
            ("url".to_string(), "https://example.com/spectrum".to_string()),
        ]
    );
}

#[test]
fn x_link_percent_encodes_spaces() {
    let link = share_url(SharePlatform::X, "https://example.com/spectrum").unwrap();
    assert_eq!(
        link,
        "https://twitter.com/intent/tweet?text=Check%20out%20this%20AI%20Maturity%20Spectrum%20visualization!&url=https%3A%2F%2Fexample.com%2Fspectrum"
    );
}

#[test]
fn component_encoding_keeps_unreserved_marks() {
    assert_eq!(encode_uri_component("a b+c"), "a%20b%2Bc");
    assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
    assert_eq!(encode_uri_component("?q=1&r=#x"), "%3Fq%3D1%26r%3D%23x");
    assert_eq!(encode_uri_component("é"), "%C3%A9");
}

#[test]
fn facebook_link_carries_page_only() {
    let link = share_url(SharePlatform::Facebook, "https://example.com/?a=1&b=2").unwrap();
    assert!(link.starts_with("https://www.facebook.com/sharer/sharer.php?u="));
    let parsed = url::Url::parse(&link).unwrap();
    let (key, value) = parsed.query_pairs().next().unwrap();
    assert_eq!(key, "u");
    assert_eq!(value, "https://example.com/?a=1&b=2");
}

#[test]
fn relative_page_url_is_rejected() {
    let err = share_url(SharePlatform::X, "/spectrum").unwrap_err();
    assert!(matches!(err, Error::InvalidShareUrl { .. }));
}

#[test]
fn platform_names_parse_case_insensitively() {
    assert_eq!(SharePlatform::parse("X"), Some(SharePlatform::X));
    assert_eq!(SharePlatform::parse("twitter"), Some(SharePlatform::X));
    assert_eq!(SharePlatform::parse("Facebook"), Some(SharePlatform::Facebook));
    assert_eq!(SharePlatform::parse("myspace"), None);
}
