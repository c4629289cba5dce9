use wordwrap::{wrap, Breakpoint, Wrapper};

mod common;
use common::*;

#[test]
fn test_no_limit() {
    let input = "this is a test string";
    assert_eq!(wrap(input, 0), lines(&[input]));
    assert_eq!(wrap(input, -5), lines(&[input]));
}

#[test]
fn test_limit_greater_than_string() {
    let input = "this is a test string";
    assert_eq!(wrap(input, 100), lines(&[input]));
}

#[test]
fn test_spaces_with_limit() {
    let out = wrap("this is a test string", 6);
    assert_eq!(out, lines(&["this", "is a", "test", "string"]));
    assert_lines_fit(&out, 6);
}

#[test]
fn test_hyphens() {
    assert_eq!(wrap("test-string", 6), lines(&["test-", "string"]));
}

#[test]
fn test_too_long() {
    assert_eq!(wrap("test string", 5), lines(&["test", "strin", "g"]));
}

#[test]
fn test_sentence_with_every_break_kind() {
    let out = wrap("this test-string has been wrapped successfully", 10);
    assert_eq!(
        out,
        lines(&["this", "test-", "string", "has been", "wrapped", "successful", "ly"])
    );
    assert_lines_fit(&out, 10);
}

#[test]
fn test_wrap_at_spaces() {
    assert_eq!(wrap("we wrap at spaces", 9), lines(&["we wrap", "at spaces"]));
}

#[test]
fn test_long_word() {
    assert_eq!(
        wrap("longwordsarewrapped", 10),
        lines(&["longwordsa", "rewrapped"])
    );
}

#[test]
fn test_latest_breakpoint_wins() {
    assert_eq!(wrap("1 3 5 7 9", 5), lines(&["1 3 5", "7 9"]));
}

#[test]
fn test_exact_fill_is_not_split() {
    assert_eq!(wrap("12345", 5), lines(&["12345"]));
    assert_eq!(wrap("1234-", 5), lines(&["1234-"]));
    assert_eq!(wrap("ab c-", 5), lines(&["ab c-"]));
    assert_eq!(wrap("this test-", 10), lines(&["this test-"]));
    assert_eq!(wrap("a-b", 3), lines(&["a-b"]));
}

#[test]
fn test_hyphen_at_end_still_breaks_when_too_wide() {
    assert_eq!(wrap("abc de-", 5), lines(&["abc", "de-"]));
}

#[test]
fn test_trailing_space_at_end_is_kept() {
    // breaking at the final space would leave an empty last line
    assert_eq!(wrap("ab cd ", 5), lines(&["ab cd "]));
}

#[test]
fn test_empty_input() {
    assert!(wrap("", 10).is_empty());
}

#[test]
fn test_limit_of_one() {
    let out = wrap("abc", 1);
    assert_eq!(out, lines(&["a", "b", "c"]));
}

#[test]
fn test_only_breaking_whitespace_is_dropped() {
    // runs of whitespace are not collapsed; only the space at the break goes
    let out = wrap("foo  bar baz", 4);
    assert_eq!(out, lines(&["foo ", "bar", "baz"]));

    let wrapped = Wrapper::new().wrap_detailed("foo  bar baz", 4);
    assert_eq!(wrapped.rejoin(), "foo  bar baz");
}

#[test]
fn test_breakpoint_kinds_reported() {
    let wrapped = Wrapper::new().wrap_detailed("this test-string has been wrapped successfully", 10);
    let kinds: Vec<&str> = wrapped
        .breakpoints()
        .iter()
        .map(|bp| match bp {
            Breakpoint::Space(_) => "space",
            Breakpoint::Hyphen(_) => "hyphen",
            Breakpoint::Forced(_) => "forced",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["space", "hyphen", "space", "space", "space", "forced"]
    );
}

#[test]
fn test_east_asian_text() {
    let out = wrap("日本語 のテキスト", 7);
    assert_eq!(out, lines(&["日本語", "のテキ", "スト"]));
    assert_lines_fit(&out, 7);
}
