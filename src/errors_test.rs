// Unit tests for error classification and exit codes

use super::*;

#[test]
fn config_errors_exit_with_2() {
    let err: FormbruteError =
        anyhow::anyhow!("Configuration error: cannot read wordlist 'users.txt'").into();
    assert!(matches!(err, FormbruteError::Config(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn webdriver_errors_exit_with_4() {
    let err: FormbruteError = anyhow::anyhow!("geckodriver not found in PATH").into();
    assert!(matches!(err, FormbruteError::WebDriverFailed(_)));
    assert_eq!(err.exit_code(), 4);

    let err: FormbruteError = anyhow::anyhow!("Failed to connect to WebDriver").into();
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn other_errors_exit_with_1() {
    let err: FormbruteError = anyhow::anyhow!("something else broke").into();
    assert!(matches!(err, FormbruteError::Other(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn context_chain_is_searched_for_classification() {
    // The configuration tag may sit below later context frames
    let err = anyhow::anyhow!("No such file or directory")
        .context("Configuration error: cannot read wordlist 'pass.txt'");
    let err: FormbruteError = err.into();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn display_includes_the_message() {
    let err: FormbruteError = anyhow::anyhow!("Configuration error: bad URL").into();
    assert!(err.to_string().contains("bad URL"));
}
