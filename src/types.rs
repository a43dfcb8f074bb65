use serde::{Deserialize, Serialize};

/// One (username, password) combination drawn from the configured lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub username: String,
    pub password: String,
}

impl CredentialPair {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Display for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.username, self.password)
    }
}

/// Operator-supplied selector hints for field discovery
///
/// Each hint is tried as a name attribute, then an element id, then a raw
/// CSS selector, in that order.
#[derive(Debug, Clone, Default)]
pub struct FieldHints {
    /// Hint for the username field
    pub username: Option<String>,
    /// Hint for the password field
    pub password: Option<String>,
}

/// Result of one login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The classifier judged the attempt successful; carries the lowercased
    /// page text observed after submission
    Success { page_text: String },
    /// The attempt completed (or broke mid-way) without a success signal
    Failure { reason: Option<String> },
    /// The username or password field could not be located on the page
    FieldsNotFound,
}

/// Output format for CLI results
#[derive(Clone, Copy, Debug, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON format for programmatic consumption
    Json,
    /// Human-readable simple format
    Simple,
}

/// One form discovered by the inspector
#[derive(Debug, Serialize, Deserialize)]
pub struct FormReport {
    /// 1-based position of the form on the page
    pub index: usize,
    /// Input elements inside the form
    pub inputs: Vec<InputField>,
    /// Buttons and submit inputs inside the form
    pub buttons: Vec<ButtonInfo>,
}

/// An input element as seen by the inspector
#[derive(Debug, Serialize, Deserialize)]
pub struct InputField {
    pub input_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// A button or submit input as seen by the inspector
#[derive(Debug, Serialize, Deserialize)]
pub struct ButtonInfo {
    pub button_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
