mod ui;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use seedlist::analyzer::Analyzer;
use seedlist::config::{DEFAULT_MAX_OUTPUT, parse_max_output};
use seedlist::export::{export, resolve_destination};
use seedlist::generator::{GenerateOptions, generate};
use seedlist::tokenize::collect_seeds;
use seedlist::years::parse_year_range;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use zeroize::Zeroizing;

#[derive(Parser)]
#[command(
    name = "seedlist",
    version,
    about = "Targeted wordlist generator and password strength analyzer"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print only results, without headers or stats
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Score the strength of a single password
    Analyze {
        /// Password to analyze; read from the terminal when omitted
        password: Option<String>,
    },
    /// Build a wordlist from personal seed words
    Generate(GenerateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Names or words, comma separated
    #[arg(short, long, default_value = "")]
    names: String,

    /// Pets or favorites, comma separated
    #[arg(short, long, default_value = "")]
    favorites: String,

    /// Dates or numbers, comma separated
    #[arg(short, long, default_value = "")]
    dates: String,

    /// Known password to use as an extra seed
    #[arg(short, long)]
    password: Option<String>,

    /// Years to append, e.g. 1990-2025
    #[arg(short, long, default_value = "")]
    years: String,

    /// Skip leetspeak variants
    #[arg(long)]
    no_leet: bool,

    /// Skip common suffixes (123, !, ...)
    #[arg(long)]
    no_suffixes: bool,

    /// Skip separator joins (., _, -)
    #[arg(long)]
    no_separators: bool,

    /// Maximum number of entries to produce
    #[arg(short, long, default_value_t = DEFAULT_MAX_OUTPUT.to_string(), allow_hyphen_values = true)]
    max_output: String,

    /// File or directory to save the wordlist to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print every entry to stdout instead of a preview
    #[arg(long, conflicts_with = "output")]
    stdout: bool,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("SEEDLIST_LOG").unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let outcome = match cli.command {
        Command::Analyze { password } => run_analyze(password, &options),
        Command::Generate(args) => run_generate(args, &options),
    };

    if let Err(e) = &outcome {
        if let Some(err) = e.downcast_ref::<seedlist::Error>() {
            if err.is_input_error() {
                ui::display_notice(&err.to_string(), &options);
                std::process::exit(1);
            }
        }
    }

    outcome
}

fn run_analyze(password: Option<String>, options: &ui::DisplayOptions) -> Result<()> {
    let password = match password {
        Some(p) => Zeroizing::new(ui::normalize_input(&p)),
        None => ui::prompt_password()?,
    };

    let analyzer = Analyzer::detect();
    let (analysis, elapsed) = ui::show_progress(options, "Analyzing password...", || {
        Ok(analyzer.analyze(&password)?)
    })?;

    ui::display_analysis(&analysis, analyzer.estimator_name(), elapsed, options);
    Ok(())
}

fn run_generate(args: GenerateArgs, options: &ui::DisplayOptions) -> Result<()> {
    let names = ui::normalize_input(&args.names);
    let favorites = ui::normalize_input(&args.favorites);
    let dates = ui::normalize_input(&args.dates);
    let password = args.password.as_deref().map(ui::normalize_input).map(Zeroizing::new);

    let seeds = collect_seeds(&names, &favorites, &dates, password.as_deref().map(String::as_str))?;

    let generate_options = GenerateOptions {
        year_range: parse_year_range(&args.years),
        include_leet: !args.no_leet,
        append_suffixes: !args.no_suffixes,
        use_separators: !args.no_separators,
        max_output: parse_max_output(&args.max_output),
    };

    let (words, elapsed) = ui::show_progress(options, "Generating wordlist...", || {
        Ok(generate(&seeds, &generate_options))
    })?;

    if args.stdout {
        return ui::print_words(&words).context("Failed to write wordlist to stdout");
    }

    match args.output {
        Some(destination) => {
            let destination = resolve_destination(&destination, chrono::Utc::now().timestamp());
            let written = export(&words, &destination)?;
            ui::display_saved(&written, words.len(), elapsed, options);
        }
        None => ui::display_preview(&words, &generate_options, elapsed, options),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_args(args: &[&str]) -> GenerateArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Generate(args) => args,
            Command::Analyze { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn test_negative_max_output_falls_back() {
        let args = generate_args(&["seedlist", "generate", "-n", "rex", "--max-output", "-5"]);
        assert_eq!(args.max_output, "-5");
        assert_eq!(parse_max_output(&args.max_output), DEFAULT_MAX_OUTPUT);
    }

    #[test]
    fn test_max_output_defaults() {
        let args = generate_args(&["seedlist", "generate", "-n", "rex"]);
        assert_eq!(parse_max_output(&args.max_output), DEFAULT_MAX_OUTPUT);

        let args = generate_args(&["seedlist", "generate", "-m", "300"]);
        assert_eq!(parse_max_output(&args.max_output), 300);
    }
}
