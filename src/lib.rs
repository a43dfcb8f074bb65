//! # formbrute
#![allow(clippy::uninlined_format_args)]
//!
//! Browser-driven brute forcing of HTML login forms, for authorized
//! security testing of targets whose field names are unknown.
//!
//! Drives a real browser through WebDriver (geckodriver or chromedriver,
//! auto-started when possible), discovers the credential fields of a login
//! form heuristically, and tests a username × password cross product
//! against it, classifying each attempt from page content and navigation.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Inspect form fields first
//! formbrute inspect "http://target.local/login"
//!
//! # Basic brute force
//! formbrute attack "http://target.local/login" --userfile users.txt --passfile pass.txt
//!
//! # With custom field selectors
//! formbrute attack "http://target.local/login" \
//!     --userfile users.txt --passfile pass.txt \
//!     --username-field user_login --password-field user_pass
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use formbrute::{attack, AttackOptions, Browser, BrowserType, FieldHints};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let browser = Browser::with_fallback(BrowserType::Firefox, true).await?;
//! let usernames = vec!["admin".to_string()];
//! let passwords = vec!["hunter2".to_string()];
//! let result = attack::run(
//!     browser,
//!     "http://target.local/login",
//!     &usernames,
//!     &passwords,
//!     FieldHints::default(),
//!     AttackOptions::default(),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

/// Cross-product iteration and run control
pub mod attack;

/// Pure success/failure classification heuristics
pub mod classify;

/// Error taxonomy with process exit codes
pub mod errors;

/// Single login attempt execution
pub mod executor;

/// Diagnostic form enumeration
pub mod inspect;

/// Heuristic discovery of credential fields
pub mod locator;

/// Core data types
pub mod types;

/// WebDriver browser control
pub mod webdriver;

/// Automatic WebDriver process management
pub mod webdriver_manager;

/// Candidate wordlist loading
pub mod wordlist;

pub use attack::{AttackOptions, AttackResult, Attempter};
pub use classify::{Verdict, classify};
pub use executor::{LoginExecutor, SettleDelays};
pub use types::{AttemptOutcome, CredentialPair, FieldHints, OutputFormat};
pub use webdriver::{Browser, BrowserType};
