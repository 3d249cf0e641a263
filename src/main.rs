use anyhow::Result;
use clap::{Parser, ValueEnum};
use dicto::config::{Config, DEFAULT_TIMEOUT};
use dicto::render::{Ansi, Plain, TextDecorator};
use dicto::{Dictionary, Lookup};
use std::io::{IsTerminal, Write};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// dicto - Look up a word on Weblio
#[derive(Parser, Debug)]
#[command(name = "dicto")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Look up a word on Weblio and print the entry", long_about = None)]
#[command(override_usage = "dicto [--eiji|-e] <word>")]
struct Cli {
    /// Word to look up
    word: String,

    /// Search the Japanese-English dictionary on Weblio
    #[arg(long, short)]
    eiji: bool,

    /// When to colour the output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Plain)]
    output: OutputFormat,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Enable verbose logging (can be used multiple times: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short)]
    quiet: bool,
}

/// When to colour terminal output
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ColorMode {
    /// Colour when stdout is a terminal
    Auto,
    /// Always colour
    Always,
    /// Never colour
    Never,
}

/// Output format for the entry
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Plain lines (human-readable)
    Plain,
    /// JSON record (machine-readable)
    Json,
}

impl Cli {
    fn dictionary(&self) -> Dictionary {
        if self.eiji {
            Dictionary::Bilingual
        } else {
            Dictionary::Monolingual
        }
    }

    fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn use_color(&self, is_tty: bool) -> bool {
        match self.color {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the entry
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("dicto={}", cli.log_filter())),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::default().timeout(Duration::from_secs(cli.timeout));
    let lookup = Lookup::new(config)?;
    let dictionary = cli.dictionary();

    let stdout = std::io::stdout();
    let is_tty = stdout.is_terminal();
    let mut out = stdout.lock();

    match cli.output {
        OutputFormat::Plain => {
            let decorator: Box<dyn TextDecorator> = if cli.use_color(is_tty) {
                Box::new(Ansi)
            } else {
                Box::new(Plain)
            };
            lookup
                .run(dictionary, &cli.word, &*decorator, &mut out)
                .await?;
        }
        OutputFormat::Json => {
            let record = lookup.record(dictionary, &cli.word).await?;
            serde_json::to_writer_pretty(&mut out, &record)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
