// Unit tests for field-locator strategy ordering

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn hint_is_tried_as_name_then_id_then_css() {
    let strategies = username_strategies(Some("user_login"));
    assert_eq!(strategies[0], Strategy::Name("user_login".to_string()));
    assert_eq!(strategies[1], Strategy::Id("user_login".to_string()));
    assert_eq!(strategies[2], Strategy::Css("user_login".to_string()));
}

#[test]
fn hint_strategies_come_before_all_fallbacks() {
    let hinted = username_strategies(Some("whatever"));
    let unhinted = username_strategies(None);
    // The hinted list is the unhinted list with the three hint stages
    // prepended; fallback order is unaffected by the hint
    assert_eq!(&hinted[3..], &unhinted[..]);
}

#[test]
fn username_fallback_tries_name_before_id_per_identifier() {
    let strategies = username_strategies(None);
    let expected: Vec<Strategy> = USERNAME_IDENTIFIERS
        .iter()
        .flat_map(|ident| {
            [
                Strategy::Name(ident.to_string()),
                Strategy::Id(ident.to_string()),
            ]
        })
        .chain([Strategy::Css("input[type='text']".to_string())])
        .collect();
    assert_eq!(strategies, expected);
}

#[test]
fn username_identifier_order_matches_priority() {
    assert_eq!(
        USERNAME_IDENTIFIERS,
        &["username", "user", "login", "email", "uname"][..]
    );
}

#[test]
fn password_fallback_ends_with_password_input_type() {
    let strategies = password_strategies(None);
    assert_eq!(
        strategies.last(),
        Some(&Strategy::Css("input[type='password']".to_string()))
    );
    assert_eq!(strategies[0], Strategy::Name("password".to_string()));
    assert_eq!(strategies[1], Strategy::Id("password".to_string()));
}

#[test]
fn password_identifier_order_matches_priority() {
    assert_eq!(PASSWORD_IDENTIFIERS, &["password", "pass", "pwd"][..]);
}

#[test]
fn submit_resolution_order() {
    let strategies = submit_strategies();
    assert_eq!(
        strategies,
        vec![
            Strategy::Css("input[type='submit']".to_string()),
            Strategy::Css("button[type='submit']".to_string()),
            Strategy::XPath(
                r#"//button[contains(text(), "Login") or contains(text(), "Submit")]"#.to_string()
            ),
        ]
    );
}

#[test]
fn name_selector_matches_the_attribute_exactly() {
    assert_eq!(name_css_selector("user_login"), "[name='user_login']");
}

#[test]
fn name_selector_escapes_quotes_and_backslashes() {
    // A hint with a quote must stay a (non-matching) name lookup so the
    // id and CSS stages still get their turn
    assert_eq!(name_css_selector("a'b"), r"[name='a\'b']");
    assert_eq!(name_css_selector(r"a\b"), r"[name='a\\b']");
}

#[test]
fn strategy_lists_are_deterministic() {
    // Same inputs, same ordered output; the locator has no hidden state
    assert_eq!(
        username_strategies(Some("u")),
        username_strategies(Some("u"))
    );
    assert_eq!(password_strategies(None), password_strategies(None));
}
