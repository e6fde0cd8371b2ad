// Author: Dustin Pilgrim
// License: MIT

use super::*;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case("$", &[])]
#[case("$.", &[])]
#[case("$.a", &["a"])]
#[case("$.a.b.c", &["a", "b", "c"])]
#[case("$.a\\.b", &["a.b"])]
#[case("$.oai.x\\.y\\.z.tail", &["oai", "x.y.z", "tail"])]
#[case("$.back\\\\slash", &["back\\slash"])]
#[case("$.keep\\d", &["keep\\d"])]
#[case("$.a.", &["a", ""])]
#[case("$.a..b", &["a", "", "b"])]
fn test_parse_segments(#[case] text: &str, #[case] expected: &[&str]) {
    let path = Path::parse(text).expect("path should parse");
    assert_eq!(path.segments(), expected);
}

#[rstest]
#[case("")]
#[case("a.b")]
#[case(".a")]
#[case("$a")]
#[case("@.a")]
fn test_parse_rejects_relative_paths(#[case] text: &str) {
    let err = Path::parse(text).unwrap_err();
    assert!(matches!(err, MergeError::UnsupportedPath { code: Some(201), .. }));
}

#[test]
fn test_parse_rejects_dangling_escape() {
    let err = Path::parse("$.a\\").unwrap_err();
    assert!(matches!(err, MergeError::InvalidPath { code: Some(203), .. }));
}

#[test]
fn test_regex_key_segment() {
    let path = Path::parse("$.oai.|^https?://([^\\.]*[\\.])?geonames[\\.]org/([0-9]+)(/\\.*)?$|").unwrap();
    assert_eq!(
        path.segments(),
        &["oai", "|^https?://([^.]*[.])?geonames[.]org/([0-9]+)(/.*)?$|"]
    );
}

#[test]
fn test_escape() {
    assert_eq!(escape("plain"), "plain");
    assert_eq!(escape("a.b"), "a\\.b");
    assert_eq!(escape("c:\\dir"), "c:\\\\dir");
}

#[test]
fn test_escape_then_parse_keeps_dotted_segment() {
    let text = format!("$.{}", escape("a.b"));
    assert_eq!(Path::parse(&text).unwrap().segments(), &["a.b"]);
}

#[test]
fn test_display() {
    assert_eq!(Path::root().to_string(), "$.");
    assert_eq!(Path::root().child("a").child("b.c").to_string(), "$.a.b\\.c");
}

#[test]
fn test_from_str() {
    let path: Path = "$.x.y".parse().unwrap();
    assert_eq!(path, Path::from_segments(["x", "y"]));
    assert!(!path.is_root());
    assert!("$.".parse::<Path>().unwrap().is_root());
}

proptest! {
    #[test]
    fn prop_escape_parse_round_trip(segments in prop::collection::vec("[a-z.\\\\$:/ ]{1,8}", 1..5)) {
        let path = Path::from_segments(segments.clone());
        let reparsed = Path::parse(&path.to_string()).unwrap();
        prop_assert_eq!(reparsed.segments(), segments.as_slice());
    }
}
