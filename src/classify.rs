//! Pure outcome classification for a completed login attempt.
//!
//! The verdict is a heuristic over the post-submit URL and page text. An
//! unexplained URL change counts as success unless a failure keyword is also
//! present; a success keyword wins regardless of URL or failure keywords.

/// Markers whose presence in the page text indicates a successful login
pub const SUCCESS_MARKERS: &[&str] = &[
    "welcome",
    "dashboard",
    "logout",
    "success",
    "flag{",
    "htb{",
    "congratulations",
];

/// Markers whose presence in the page text indicates a rejected login
pub const FAILURE_MARKERS: &[&str] = &["invalid", "incorrect", "failed", "wrong", "error"];

/// Maximum number of characters of page text surfaced when a flag is found
const FLAG_EXCERPT_LEN: usize = 1000;

/// Classifier verdict for one attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure,
}

/// Classify one attempt from the pre/post URLs and the lowercased page text.
///
/// `page_text` must already be lowercased; the marker lists are lowercase.
pub fn classify(url_before: &str, url_after: &str, page_text: &str) -> Verdict {
    let has_success = SUCCESS_MARKERS.iter().any(|m| page_text.contains(m));
    let has_failure = FAILURE_MARKERS.iter().any(|m| page_text.contains(m));
    let url_changed = url_after != url_before;

    if has_success || (url_changed && !has_failure) {
        Verdict::Success
    } else {
        Verdict::Failure
    }
}

/// Return a bounded excerpt of the page text if it contains a flag-shaped
/// token (`flag{` or `htb{`), for surfacing to the operator.
pub fn flag_excerpt(page_text: &str) -> Option<String> {
    let lowered = page_text.to_lowercase();
    if !lowered.contains("flag{") && !lowered.contains("htb{") {
        return None;
    }

    // Avoid slicing mid-codepoint
    let mut end = FLAG_EXCERPT_LEN.min(page_text.len());
    while !page_text.is_char_boundary(end) {
        end -= 1;
    }
    Some(page_text[..end].to_string())
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
