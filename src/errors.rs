use std::fmt;

/// Custom error type that includes exit codes
#[derive(Debug)]
pub enum FormbruteError {
    /// Bad or missing configuration, e.g. an unreadable wordlist (exit code 2)
    Config(String),
    /// No usable WebDriver/browser engine (exit code 4)
    WebDriverFailed(String),
    /// Generic error (exit code 1)
    Other(anyhow::Error),
}

impl FormbruteError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FormbruteError::Config(_) => 2,
            FormbruteError::WebDriverFailed(_) => 4,
            FormbruteError::Other(_) => 1,
        }
    }
}

impl fmt::Display for FormbruteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormbruteError::Config(msg) => write!(f, "{}", msg),
            FormbruteError::WebDriverFailed(msg) => {
                write!(f, "WebDriver connection failed: {}", msg)
            }
            FormbruteError::Other(err) => write!(f, "{:#}", err),
        }
    }
}

impl std::error::Error for FormbruteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormbruteError::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for FormbruteError {
    fn from(err: anyhow::Error) -> Self {
        // Classify from the message; wordlist and argument problems are
        // tagged at the point they are raised
        let msg = format!("{:#}", err);

        if msg.contains("Configuration error") {
            FormbruteError::Config(msg)
        } else if msg.contains("WebDriver")
            || msg.contains("geckodriver")
            || msg.contains("chromedriver")
        {
            FormbruteError::WebDriverFailed(msg)
        } else {
            FormbruteError::Other(err)
        }
    }
}

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;
