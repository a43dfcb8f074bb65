//! Diagnostic enumeration of forms and their controls on a page.
//!
//! Purely informational: nothing is filled in or submitted, and the field
//! locator heuristics are not involved.

use anyhow::Result;
use fantoccini::Locator;
use fantoccini::elements::Element;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::types::{ButtonInfo, FormReport, InputField};
use crate::webdriver::Browser;

/// Navigate to `url` and report every form with its inputs and buttons
pub async fn inspect(browser: &Browser, url: &str) -> Result<Vec<FormReport>> {
    info!("Inspecting forms at {}", url);

    browser.goto(url).await?;
    sleep(Duration::from_millis(1000)).await;

    let forms = browser.find_all(Locator::Css("form")).await?;
    let mut reports = Vec::with_capacity(forms.len());

    for (index, form) in forms.iter().enumerate() {
        let mut inputs = Vec::new();
        for input in form.find_all(Locator::Css("input")).await? {
            inputs.push(describe_input(&input).await?);
        }

        // Buttons proper, then submit-styled inputs
        let mut buttons = Vec::new();
        for button in form.find_all(Locator::Css("button")).await? {
            buttons.push(describe_button(&button).await?);
        }
        for submit in form.find_all(Locator::Css("input[type='submit']")).await? {
            buttons.push(describe_button(&submit).await?);
        }

        reports.push(FormReport {
            index: index + 1,
            inputs,
            buttons,
        });
    }

    Ok(reports)
}

async fn describe_input(input: &Element) -> Result<InputField> {
    Ok(InputField {
        input_type: input
            .attr("type")
            .await?
            .unwrap_or_else(|| "text".to_string()),
        name: input.attr("name").await?,
        id: input.attr("id").await?,
        placeholder: input.attr("placeholder").await?,
    })
}

async fn describe_button(button: &Element) -> Result<ButtonInfo> {
    // Visible text for <button>, value attribute for <input type=submit>
    let text = match button.text().await.ok().filter(|t| !t.is_empty()) {
        Some(text) => Some(text),
        None => button.attr("value").await?,
    };

    Ok(ButtonInfo {
        button_type: button
            .attr("type")
            .await?
            .unwrap_or_else(|| "button".to_string()),
        name: button.attr("name").await?,
        id: button.attr("id").await?,
        text,
    })
}
