use std::ffi::OsStr;

use assert_matches::assert_matches;
use rstest::rstest;

use crate::sample_key::{parse_sample_dir_name, parse_sample_key, SampleKey, SampleKeyError};

#[rstest]
#[case("10__1", 10, 1)]
#[case("20__2", 20, 2)]
#[case("0__7", 0, 7)]
#[case("123456789__42", 123456789, 42)]
#[case("007__010", 7, 10)]
fn parses_valid_keys(#[case] name: &str, #[case] complexity: u64, #[case] scale: u64) {
    assert_eq!(parse_sample_key(name), Ok(Some(SampleKey { complexity, scale })));
}

#[rstest]
#[case("report")]
#[case("new")]
#[case("10_1")]
#[case("10::1")]
#[case("")]
fn names_without_delimiter_are_not_data_points(#[case] name: &str) {
    assert_eq!(parse_sample_key(name), Ok(None));
}

#[rstest]
#[case("a__1")]
#[case("10__b")]
#[case("+10__1")]
#[case("10__-1")]
#[case(" 10__1")]
#[case("10__1 ")]
#[case("1.5__1")]
#[case("__1")]
#[case("10__")]
#[case("10___1")]
#[case("99999999999999999999999__1")]
fn non_integer_components_are_malformed(#[case] name: &str) {
    assert_matches!(parse_sample_key(name), Err(SampleKeyError::NotAnInteger(_)));
}

#[rstest]
#[case("1__2__3", 3)]
#[case("____", 3)]
#[case("1__2__3__4", 4)]
fn wrong_component_count_is_malformed(#[case] name: &str, #[case] expected_components: usize) {
    assert_eq!(parse_sample_key(name), Err(SampleKeyError::ComponentCount(expected_components)));
}

#[test]
fn display_round_trips_through_the_parser() {
    let key = SampleKey { complexity: 4096, scale: 3 };
    assert_eq!(key.to_string(), "4096__3");
    assert_eq!(parse_sample_key(&key.to_string()), Ok(Some(key)));
}

#[test]
fn utf8_dir_names_parse_like_keys() {
    assert_eq!(
        parse_sample_dir_name(OsStr::new("10__1")),
        Ok(Some(SampleKey { complexity: 10, scale: 1 }))
    );
    assert_eq!(parse_sample_dir_name(OsStr::new("report")), Ok(None));
}

#[cfg(unix)]
#[rstest]
#[case(b"1\xff__2", Err(SampleKeyError::NotUtf8("1\u{fffd}__2".to_string())))]
#[case(b"\xffreport", Ok(None))]
fn non_utf8_dir_names(
    #[case] name: &[u8],
    #[case] expected: Result<Option<SampleKey>, SampleKeyError>,
) {
    use std::os::unix::ffi::OsStrExt;

    assert_eq!(parse_sample_dir_name(OsStr::from_bytes(name)), expected);
}
