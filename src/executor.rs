//! Executes one full login attempt: navigate, locate, fill, submit, observe.

use anyhow::Result;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::classify::{self, Verdict};
use crate::locator;
use crate::types::{AttemptOutcome, CredentialPair, FieldHints};
use crate::webdriver::Browser;

/// WebDriver Enter key, used to submit via the password field when no
/// submit control was found
const ENTER_KEY: &str = "\u{e007}";

/// Fixed settle delays around one attempt
#[derive(Debug, Clone, Copy)]
pub struct SettleDelays {
    /// Wait after navigating to the login page
    pub after_navigation: Duration,
    /// Wait after submitting, before reading the response
    pub after_submit: Duration,
}

impl Default for SettleDelays {
    fn default() -> Self {
        Self {
            after_navigation: Duration::from_millis(500),
            after_submit: Duration::from_millis(1000),
        }
    }
}

/// Performs login attempts against one target URL over a shared browser
/// session. Field handles are re-located on every attempt since each attempt
/// starts from a fresh navigation.
pub struct LoginExecutor<'a> {
    browser: &'a Browser,
    url: String,
    hints: FieldHints,
    delays: SettleDelays,
}

impl<'a> LoginExecutor<'a> {
    pub fn new(browser: &'a Browser, url: String, hints: FieldHints, delays: SettleDelays) -> Self {
        Self {
            browser,
            url,
            hints,
            delays,
        }
    }

    /// Run one attempt and classify it.
    ///
    /// Driver-level failures (stale elements, transient navigation errors)
    /// are downgraded to `Failure` so the surrounding run can continue.
    pub async fn attempt(&self, credentials: &CredentialPair) -> AttemptOutcome {
        match self.try_attempt(credentials).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Attempt failed with driver error: {:#}", e);
                AttemptOutcome::Failure {
                    reason: Some(format!("{:#}", e)),
                }
            }
        }
    }

    async fn try_attempt(&self, credentials: &CredentialPair) -> Result<AttemptOutcome> {
        self.browser.goto(&self.url).await?;
        sleep(self.delays.after_navigation).await;

        let fields = locator::locate(self.browser, &self.hints).await?;
        let (Some(username_field), Some(password_field)) = (fields.username, fields.password)
        else {
            debug!("Could not locate login form fields");
            return Ok(AttemptOutcome::FieldsNotFound);
        };

        username_field.clear().await?;
        username_field.send_keys(&credentials.username).await?;
        password_field.clear().await?;
        password_field.send_keys(&credentials.password).await?;

        match fields.submit {
            Some(submit) => submit.click().await?,
            // No submit control is not an error; submit through the
            // password field instead
            None => password_field.send_keys(ENTER_KEY).await?,
        }

        sleep(self.delays.after_submit).await;

        let url_after = self.browser.current_url().await?;
        let page_text = self.browser.page_source().await?.to_lowercase();

        match classify::classify(&self.url, &url_after, &page_text) {
            Verdict::Success => Ok(AttemptOutcome::Success { page_text }),
            Verdict::Failure => Ok(AttemptOutcome::Failure { reason: None }),
        }
    }
}
