use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::attack::{self, AttackOptions, AttackResult};
use crate::types::FieldHints;
use crate::webdriver::{Browser, BrowserType};
use crate::wordlist;

#[allow(clippy::too_many_arguments)]
pub async fn handle_attack(
    url: String,
    userfile: PathBuf,
    passfile: PathBuf,
    username_field: Option<String>,
    password_field: Option<String>,
    browser_name: String,
    no_headless: bool,
    delay_ms: u64,
) -> Result<bool> {
    let target: url::Url = url
        .parse()
        .with_context(|| format!("Configuration error: invalid target URL '{}'", url))?;
    let browser_type: BrowserType = browser_name.parse()?;

    println!("[*] Starting brute force attack on {}", target);
    println!("[*] Loading usernames from: {}", userfile.display());
    println!("[*] Loading passwords from: {}", passfile.display());
    if let Some(hint) = &username_field {
        println!("[*] Using custom username selector: {}", hint);
    }
    if let Some(hint) = &password_field {
        println!("[*] Using custom password selector: {}", hint);
    }

    // Wordlists are validated before any browser session is opened
    let usernames = wordlist::load(&userfile)?;
    let passwords = wordlist::load(&passfile)?;
    println!(
        "[*] Loaded {} usernames and {} passwords",
        usernames.len(),
        passwords.len()
    );
    println!("[*] Total attempts: {}", usernames.len() * passwords.len());
    println!("[*] Initializing browser...");

    let browser = Browser::with_fallback(browser_type, !no_headless).await?;
    info!("Browser session ready ({:?})", browser.browser_type());

    let hints = FieldHints {
        username: username_field,
        password: password_field,
    };
    let options = AttackOptions {
        inter_attempt_delay: Duration::from_millis(delay_ms),
        ..AttackOptions::default()
    };

    let result = attack::run(
        browser,
        target.as_str(),
        &usernames,
        &passwords,
        hints,
        options,
    )
    .await?;

    match result {
        AttackResult::Found {
            credentials,
            flag_excerpt,
        } => {
            println!();
            println!("{}", "=".repeat(60));
            println!("[+] Valid credentials found!");
            println!("[+] Username: {}", credentials.username);
            println!("[+] Password: {}", credentials.password);
            println!("{}", "=".repeat(60));
            println!();
            if let Some(excerpt) = flag_excerpt {
                println!("[*] Page content may contain a flag:");
                println!("{}", excerpt);
            }
            Ok(true)
        }
        AttackResult::Exhausted => {
            println!();
            println!("[!] No valid credentials found");
            Ok(false)
        }
        AttackResult::Interrupted => Ok(false),
    }
}
