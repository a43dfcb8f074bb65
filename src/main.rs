#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod attack;
mod classify;
mod commands;
mod errors;
mod executor;
mod inspect;
mod locator;
mod types;
mod webdriver;
mod webdriver_manager;
mod wordlist;

use types::OutputFormat;

const EXIT_SUCCESS: i32 = 0;

#[derive(Parser)]
#[command(name = "formbrute")]
#[command(about = "Browser-driven login form brute forcer for authorized testing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Brute force a login form with username and password wordlists
    Attack {
        /// Target login page URL
        url: String,

        /// File containing usernames (one per line)
        #[arg(long)]
        userfile: PathBuf,

        /// File containing passwords (one per line)
        #[arg(long)]
        passfile: PathBuf,

        /// Custom username field name, ID, or CSS selector
        #[arg(long)]
        username_field: Option<String>,

        /// Custom password field name, ID, or CSS selector
        #[arg(long)]
        password_field: Option<String>,

        /// Browser to use
        #[arg(short, long, default_value = "firefox")]
        browser: String,

        /// Run browser in visible mode (disables headless)
        #[arg(long = "no-headless")]
        no_headless: bool,

        /// Delay between attempts in milliseconds
        #[arg(long, default_value = "500")]
        delay_ms: u64,
    },

    /// Inspect a login form to identify field names and IDs
    Inspect {
        /// URL to inspect
        url: String,

        /// Browser to use
        #[arg(short, long, default_value = "firefox")]
        browser: String,

        /// Run browser in visible mode (disables headless)
        #[arg(long = "no-headless")]
        no_headless: bool,

        /// Output format
        #[arg(short, long, default_value = "simple")]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() {
    let result = run().await;

    // Always clean up WebDriver processes before exiting
    webdriver_manager::GLOBAL_WEBDRIVER_MANAGER.stop_all();

    match result {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(err) => {
            let err: errors::FormbruteError = err.into();
            eprintln!("Error: {}", err);
            std::process::exit(err.exit_code());
        }
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr so the attempt progress stream on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formbrute=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", commands::BANNER);
    println!();

    match cli.command {
        Commands::Attack {
            url,
            userfile,
            passfile,
            username_field,
            password_field,
            browser,
            no_headless,
            delay_ms,
        } => {
            commands::attack::handle_attack(
                url,
                userfile,
                passfile,
                username_field,
                password_field,
                browser,
                no_headless,
                delay_ms,
            )
            .await?;
        }

        Commands::Inspect {
            url,
            browser,
            no_headless,
            format,
        } => commands::inspect::handle_inspect(url, browser, no_headless, format).await?,
    }

    Ok(())
}
