use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use spellchk::cli::output::{self, OutputFormat};
use spellchk::engine::WordListEngineFactory;
use spellchk::{cli, CheckStrategy, Config, SpellCheckHandler, SpellCheckSession};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spellchk")]
#[command(version, about = "Cached spellcheck decisions over a word-list dictionary", long_about = None)]
struct Cli {
    /// Language to check against (e.g., en-US, fr-FR). Defaults to the system locale
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Decision strategy (direct, range-retry). Defaults to the platform's
    #[arg(long, global = true)]
    strategy: Option<CheckStrategy>,

    /// Personal dictionary file
    #[arg(long, global = true)]
    personal_dict: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check text given as arguments, or read from stdin
    Check {
        #[arg(value_name = "TEXT")]
        text: Vec<String>,

        /// Output format (text, json)
        #[arg(short = 'o', long, default_value = "text")]
        format: OutputFormat,

        /// Exit with code 0 even if errors are found
        #[arg(long)]
        no_fail: bool,
    },
    /// Add words to the personal dictionary
    Add {
        #[arg(value_name = "WORD", required = true)]
        words: Vec<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellchk", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command given. Use --help for usage information.");
    };

    let mut config = Config::load(cli.language.clone(), cli.personal_dict.clone())?;
    if cli.strategy.is_some() {
        config.strategy = cli.strategy;
    }
    if matches!(command, Commands::Add { .. }) {
        // The word-list engine always persists additions
        config.user_dictionary = Some(true);
    }
    log::debug!("Configuration: {:?}", config);

    let factory = WordListEngineFactory::new(config.wordlist_options());
    let handler =
        SpellCheckHandler::new(SpellCheckSession::with_options(factory, config.session_options()));
    handler
        .init(config.language.as_deref(), None)
        .context("Failed to initialize spellchecker")?;

    let colored = !cli.no_color;

    match command {
        Commands::Check {
            text,
            format,
            no_fail,
        } => {
            let content = if text.is_empty() {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read stdin")?;
                buffer
            } else {
                text.join("\n")
            };

            let report = cli::check_text(&handler, &content).await;
            let language = handler.language();
            output::print_misspellings(
                &report.misspellings,
                report.words_checked,
                language.as_deref(),
                colored,
                format,
            );
            if format == OutputFormat::Text {
                output::print_check_summary(report.misspellings.len(), language.as_deref(), colored);
            }

            if !report.misspellings.is_empty() && !no_fail {
                std::process::exit(1);
            }
        }
        Commands::Add { words } => {
            for word in &words {
                handler.add_to_dictionary(word).await;
            }
            output::print_added(&words, colored);
        }
    }

    Ok(())
}
