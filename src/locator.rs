//! Field discovery for unknown login form markup.
//!
//! Resolution is modelled as a prioritized list of selector strategies,
//! evaluated lazily until one matches. A hint supplied by the operator is
//! tried as a name attribute, then an element id, then a raw CSS selector;
//! only then do the common-identifier and input-type fallbacks apply.

use anyhow::Result;
use fantoccini::Locator;
use fantoccini::elements::Element;

use crate::types::FieldHints;
use crate::webdriver::Browser;

/// Common identifiers tried (name before id) for the username field
pub const USERNAME_IDENTIFIERS: &[&str] = &["username", "user", "login", "email", "uname"];

/// Common identifiers tried (name before id) for the password field
pub const PASSWORD_IDENTIFIERS: &[&str] = &["password", "pass", "pwd"];

const SUBMIT_BUTTON_XPATH: &str =
    r#"//button[contains(text(), "Login") or contains(text(), "Submit")]"#;

/// One way of resolving an element, in priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Match on the form-field name attribute
    Name(String),
    /// Match on the element id
    Id(String),
    /// Match a raw CSS selector
    Css(String),
    /// Match an XPath expression
    XPath(String),
}

/// Best-guess element handles for one loaded login page.
///
/// Handles are only valid until the next navigation; callers must re-locate
/// per attempt rather than cache these.
pub struct FormFields {
    pub username: Option<Element>,
    pub password: Option<Element>,
    pub submit: Option<Element>,
}

/// Strategy list for the username field
pub fn username_strategies(hint: Option<&str>) -> Vec<Strategy> {
    let mut strategies = hint.map(hint_strategies).unwrap_or_default();
    for identifier in USERNAME_IDENTIFIERS {
        strategies.push(Strategy::Name(identifier.to_string()));
        strategies.push(Strategy::Id(identifier.to_string()));
    }
    strategies.push(Strategy::Css("input[type='text']".to_string()));
    strategies
}

/// Strategy list for the password field
pub fn password_strategies(hint: Option<&str>) -> Vec<Strategy> {
    let mut strategies = hint.map(hint_strategies).unwrap_or_default();
    for identifier in PASSWORD_IDENTIFIERS {
        strategies.push(Strategy::Name(identifier.to_string()));
        strategies.push(Strategy::Id(identifier.to_string()));
    }
    strategies.push(Strategy::Css("input[type='password']".to_string()));
    strategies
}

/// Strategy list for the submit control
pub fn submit_strategies() -> Vec<Strategy> {
    vec![
        Strategy::Css("input[type='submit']".to_string()),
        Strategy::Css("button[type='submit']".to_string()),
        Strategy::XPath(SUBMIT_BUTTON_XPATH.to_string()),
    ]
}

/// Interpretations of one operator-supplied hint, in priority order
fn hint_strategies(hint: &str) -> Vec<Strategy> {
    vec![
        Strategy::Name(hint.to_string()),
        Strategy::Id(hint.to_string()),
        Strategy::Css(hint.to_string()),
    ]
}

/// Locate the username field, password field, and submit control on the
/// currently loaded page.
///
/// Absence of any of the three is represented as `None` in the result, not
/// as an error; only driver-level failures propagate.
pub async fn locate(browser: &Browser, hints: &FieldHints) -> Result<FormFields> {
    let username = resolve(browser, &username_strategies(hints.username.as_deref())).await?;
    let password = resolve(browser, &password_strategies(hints.password.as_deref())).await?;
    let submit = resolve(browser, &submit_strategies()).await?;

    Ok(FormFields {
        username,
        password,
        submit,
    })
}

/// Evaluate strategies in order; the first match anywhere wins
async fn resolve(browser: &Browser, strategies: &[Strategy]) -> Result<Option<Element>> {
    for strategy in strategies {
        let found = match strategy {
            Strategy::Name(name) => {
                let selector = name_css_selector(name);
                browser.find_first(Locator::Css(&selector)).await?
            }
            Strategy::Id(id) => browser.find_first(Locator::Id(id)).await?,
            Strategy::Css(selector) => browser.find_first(Locator::Css(selector)).await?,
            Strategy::XPath(xpath) => browser.find_first(Locator::XPath(xpath)).await?,
        };
        if found.is_some() {
            return Ok(found);
        }
    }
    Ok(None)
}

/// CSS attribute selector matching on the name attribute. Quotes and
/// backslashes in the value are escaped so a hint containing them stays an
/// exact-name match instead of breaking the selector (which would error the
/// attempt rather than fall through to the id/CSS stages).
fn name_css_selector(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!("[name='{}']", escaped)
}

#[cfg(test)]
#[path = "locator_test.rs"]
mod locator_test;
