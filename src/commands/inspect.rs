use anyhow::{Context, Result};

use crate::inspect;
use crate::types::{FormReport, OutputFormat};
use crate::webdriver::{Browser, BrowserType};

pub async fn handle_inspect(
    url: String,
    browser_name: String,
    no_headless: bool,
    format: OutputFormat,
) -> Result<()> {
    let target: url::Url = url
        .parse()
        .with_context(|| format!("Configuration error: invalid target URL '{}'", url))?;
    let browser_type: BrowserType = browser_name.parse()?;

    println!("[*] Inspecting form at {}", target);
    println!("[*] Initializing browser...");

    let browser = Browser::with_fallback(browser_type, !no_headless).await?;

    // Close the session whether or not inspection succeeded
    let reports = inspect::inspect(&browser, target.as_str()).await;
    browser.close().await?;
    let reports = reports?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Simple => print_reports(&reports),
    }

    Ok(())
}

fn print_reports(reports: &[FormReport]) {
    println!();
    println!("[+] Found {} form(s)", reports.len());
    println!();

    for report in reports {
        println!("{}", "=".repeat(60));
        println!("Form #{}", report.index);
        println!("{}", "=".repeat(60));

        if !report.inputs.is_empty() {
            println!();
            println!("Input Fields:");
            for input in &report.inputs {
                println!(
                    "  - Type: {:12} | Name: {:15} | ID: {:15} | Placeholder: {}",
                    input.input_type,
                    input.name.as_deref().unwrap_or("N/A"),
                    input.id.as_deref().unwrap_or("N/A"),
                    input.placeholder.as_deref().unwrap_or("N/A"),
                );
            }
        }

        if !report.buttons.is_empty() {
            println!();
            println!("Buttons:");
            for button in &report.buttons {
                println!(
                    "  - Type: {:12} | Name: {:15} | ID: {:15} | Text: {}",
                    button.button_type,
                    button.name.as_deref().unwrap_or("N/A"),
                    button.id.as_deref().unwrap_or("N/A"),
                    button.text.as_deref().unwrap_or("N/A"),
                );
            }
        }

        println!();
    }

    println!(
        "[*] Inspection complete. Use the field names/IDs with --username-field and --password-field"
    );
}
