//! Summa Braille CLI - article summarisation with braille output
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use summa_braille::{report, ui, Config, SummaryService};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "summa-braille")]
#[command(author, version, about = "TUI for article summarisation with braille output", long_about = None)]
struct Cli {
    /// Path to a config file (defaults to summa-braille.toml in cwd or ~/.config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Summarization endpoint, overriding the config file
    #[arg(long, global = true)]
    endpoint: Option<String>,
    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise an article by URL and print the result
    Summarise {
        /// Article URL (prompted for when omitted)
        url: Option<String>,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "summa-braille",
                &mut std::io::stdout(),
            );
        }
        Some(Commands::Summarise { url }) => {
            init_logging(cli.log_file.as_deref(), true)?;
            let config = load_config(cli.config.as_deref(), cli.endpoint)?;
            let url = match url {
                Some(url) => url,
                None => prompt_for_url()?,
            };

            let report = report::summarise(&config, url).await?;
            let rendered = report.render();
            print!("{}", rendered.stdout);
            eprint!("{}", rendered.stderr);

            if !report.succeeded() {
                return Ok(ExitCode::FAILURE);
            }
        }
        None => {
            if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
                anyhow::bail!(
                    "interactive mode needs a terminal; use `summa-braille summarise <URL>`"
                );
            }
            init_logging(cli.log_file.as_deref(), false)?;
            let config = load_config(cli.config.as_deref(), cli.endpoint)?;
            let service = SummaryService::from_config(&config)?;
            ui::run(config, service).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config(path: Option<&Path>, endpoint: Option<String>) -> anyhow::Result<Config> {
    Config::resolve(path, endpoint).with_context(|| match path {
        Some(path) => format!("loading config from {}", path.display()),
        None => "loading config".to_string(),
    })
}

/// Set up tracing. Logs go to `log_file` when given, else to stderr only if
/// `stderr_fallback` is set.
fn init_logging(log_file: Option<&Path>, stderr_fallback: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None if stderr_fallback => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn prompt_for_url() -> anyhow::Result<String> {
    if !atty::is(atty::Stream::Stdin) {
        // Nothing to prompt with; the empty input fails validation
        return Ok(String::new());
    }

    let url = dialoguer::Input::<String>::new()
        .with_prompt("Article URL")
        .allow_empty(true)
        .interact_text()?;
    Ok(url)
}
