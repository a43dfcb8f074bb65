use anyhow::{Context, Result};
use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::webdriver_manager::GLOBAL_WEBDRIVER_MANAGER;

/// Browser instance for WebDriver automation
pub struct Browser {
    client: Client,
    browser_type: BrowserType,
}

/// Supported browser types
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum BrowserType {
    /// Mozilla Firefox
    Firefox,
    /// Google Chrome/Chromium
    Chrome,
}

impl std::str::FromStr for BrowserType {
    type Err = anyhow::Error;

    /// Parse browser type from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "firefox" => Ok(BrowserType::Firefox),
            "chrome" | "chromium" => Ok(BrowserType::Chrome),
            _ => anyhow::bail!("Unsupported browser: {}", s),
        }
    }
}

impl BrowserType {
    /// The one alternate engine to fall back to
    pub fn alternate(&self) -> BrowserType {
        match self {
            BrowserType::Firefox => BrowserType::Chrome,
            BrowserType::Chrome => BrowserType::Firefox,
        }
    }
}

impl Browser {
    /// Create a new browser instance
    ///
    /// # Arguments
    /// * `browser_type` - Firefox or Chrome
    /// * `headless` - Whether to run in headless mode
    pub async fn new(browser_type: BrowserType, headless: bool) -> Result<Self> {
        info!("Connecting to {:?} WebDriver", browser_type);

        // Ensure a WebDriver is running (will auto-start if needed)
        let webdriver_url = GLOBAL_WEBDRIVER_MANAGER
            .ensure_driver(&browser_type)
            .await?;

        let mut caps = serde_json::Map::new();

        match &browser_type {
            BrowserType::Firefox => {
                let mut firefox_opts = serde_json::Map::new();
                let mut args = Vec::new();

                if headless {
                    args.push("--headless".to_string());
                }

                firefox_opts.insert("args".to_string(), json!(args));
                caps.insert("moz:firefoxOptions".to_string(), json!(firefox_opts));
            }
            BrowserType::Chrome => {
                let mut chrome_opts = serde_json::Map::new();
                let mut args = vec!["--no-sandbox".to_string()];

                if headless {
                    args.push("--headless=new".to_string());
                    args.push("--disable-gpu".to_string());
                    args.push("--disable-dev-shm-usage".to_string());
                }

                // Chrome insists on a unique user-data-dir per session
                let profile_dir = tempfile::Builder::new()
                    .prefix("formbrute-chrome-")
                    .tempdir()?;
                #[allow(deprecated)]
                let profile_path = profile_dir.into_path();
                args.push(format!("--user-data-dir={}", profile_path.display()));

                chrome_opts.insert("args".to_string(), json!(args));
                caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));
            }
        }

        debug!("Connecting to WebDriver at {}", webdriver_url);

        let client = ClientBuilder::rustls()
            .capabilities(caps)
            .connect(&webdriver_url)
            .await
            .context("Failed to connect to WebDriver")?;

        Ok(Browser {
            client,
            browser_type,
        })
    }

    /// Create a browser session, falling back to the alternate engine if the
    /// preferred one cannot be started.
    pub async fn with_fallback(preferred: BrowserType, headless: bool) -> Result<Self> {
        match Self::new(preferred, headless).await {
            Ok(browser) => Ok(browser),
            Err(e) => {
                let alternate = preferred.alternate();
                warn!(
                    "Could not start {:?} session ({:#}), trying {:?}...",
                    preferred, e, alternate
                );
                Self::new(alternate, headless).await.with_context(|| {
                    format!(
                        "No usable browser engine: {:?} and {:?} both failed",
                        preferred, alternate
                    )
                })
            }
        }
    }

    pub async fn goto(&self, url: &str) -> Result<()> {
        info!("Navigating to {}", url);

        self.client.goto(url).await?;

        // Wait for the page to be ready to avoid stale element references
        let wait_script = "return document.readyState === 'complete';";
        for _ in 0..20 {
            // Max 2 seconds
            match self.client.execute(wait_script, vec![]).await {
                Ok(val) if val.as_bool().unwrap_or(false) => break,
                _ => tokio::time::sleep(tokio::time::Duration::from_millis(100)).await,
            }
        }

        Ok(())
    }

    /// Get the current URL
    pub async fn current_url(&self) -> Result<String> {
        Ok(self.client.current_url().await?.to_string())
    }

    /// Get the full page source
    pub async fn page_source(&self) -> Result<String> {
        Ok(self.client.source().await?)
    }

    /// Find the first element matching `locator`, or `None` if nothing
    /// matches. Absence is not an error; driver faults still propagate.
    pub async fn find_first(&self, locator: Locator<'_>) -> Result<Option<Element>> {
        let elements = self.client.find_all(locator).await?;
        Ok(elements.into_iter().next())
    }

    /// Find all elements matching `locator`
    pub async fn find_all(&self, locator: Locator<'_>) -> Result<Vec<Element>> {
        Ok(self.client.find_all(locator).await?)
    }

    /// Get browser type
    pub fn browser_type(&self) -> BrowserType {
        self.browser_type
    }

    /// Close the browser session
    pub async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}
