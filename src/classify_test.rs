// Unit tests for the outcome classifier

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn failure_keyword_same_url_is_failure() {
    let verdict = classify(
        "http://t/login",
        "http://t/login",
        "invalid password",
    );
    assert_eq!(verdict, Verdict::Failure);
}

#[test]
fn url_change_without_failure_keyword_is_success() {
    let verdict = classify("http://t/login", "http://t/dashboard", "");
    assert_eq!(verdict, Verdict::Success);
}

#[test]
fn success_keyword_wins_regardless_of_url() {
    let verdict = classify("http://t/login", "http://t/login", "welcome back");
    assert_eq!(verdict, Verdict::Success);
}

#[test]
fn failure_keyword_suppresses_url_change_success() {
    let verdict = classify("http://t/login", "http://t/other", "incorrect credentials");
    assert_eq!(verdict, Verdict::Failure);
}

#[test]
fn success_keyword_beats_failure_keyword() {
    // Ties resolve toward success when both marker sets match
    let verdict = classify(
        "http://t/login",
        "http://t/login",
        "welcome, your last login failed",
    );
    assert_eq!(verdict, Verdict::Success);
}

#[test]
fn no_signal_at_all_is_failure() {
    let verdict = classify("http://t/login", "http://t/login", "please sign in");
    assert_eq!(verdict, Verdict::Failure);
}

#[test]
fn flag_markers_count_as_success() {
    let verdict = classify("http://t/login", "http://t/login", "here: flag{abc123}");
    assert_eq!(verdict, Verdict::Success);
}

#[test]
fn flag_excerpt_absent_without_flag_token() {
    assert_eq!(flag_excerpt("welcome to the dashboard"), None);
}

#[test]
fn flag_excerpt_returns_short_text_whole() {
    let text = "you got it: flag{deadbeef}";
    assert_eq!(flag_excerpt(text).as_deref(), Some(text));
}

#[test]
fn flag_excerpt_is_bounded() {
    let mut text = "htb{top} ".to_string();
    text.push_str(&"x".repeat(5000));
    let excerpt = flag_excerpt(&text).unwrap();
    assert_eq!(excerpt.len(), 1000);
    assert!(text.starts_with(&excerpt));
}

#[test]
fn flag_excerpt_detects_mixed_case() {
    // Page text reaching the attack loop is already lowercased, but the
    // helper tolerates raw text too
    assert!(flag_excerpt("FLAG{UPPER}").is_some());
}

#[test]
fn flag_excerpt_respects_char_boundaries() {
    let mut text = "flag{é} ".to_string();
    text.push_str(&"é".repeat(2000));
    let excerpt = flag_excerpt(&text).unwrap();
    assert!(excerpt.len() <= 1000);
    assert!(text.starts_with(&excerpt));
}
