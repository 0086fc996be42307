use anyhow::{Context, Result};
use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use rpassword::read_password;
use seedlist::analyzer::Analysis;
use seedlist::generator::GenerateOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::warn;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

pub const MAX_PREVIEW_LINES: usize = 500;

/// Scores at or above this are reported as strong.
pub const MIN_STRONG_SCORE: u8 = 3;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn tree_branches(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

pub fn score_label(score: u8) -> &'static str {
    match score {
        0 => "Very weak",
        1 => "Weak",
        2 => "Fair",
        3 => "Strong",
        _ => "Very strong",
    }
}

/// Trims and NFC-normalizes. Control whitespace becomes a plain space, other
/// control characters are dropped.
pub fn normalize_input(s: &str) -> String {
    let normalized: String = s.trim().nfc().collect();

    let dropped = normalized
        .chars()
        .filter(|c| c.is_control() && !c.is_whitespace())
        .count();
    if dropped > 0 {
        warn!(count = dropped, "dropping control characters from input");
    }

    normalized
        .chars()
        .filter_map(|c| match c {
            c if !c.is_control() => Some(c),
            c if c.is_whitespace() => Some(' '),
            _ => None,
        })
        .collect()
}

pub fn prompt_password() -> Result<Zeroizing<String>> {
    let term = Term::stderr();
    term.write_str("Password: ")?;
    term.flush()?;

    let password = Zeroizing::new(read_password().context("Failed to read password")?);
    Ok(Zeroizing::new(normalize_input(&password)))
}

pub fn show_progress<F, T>(options: &DisplayOptions, message: &str, f: F) -> Result<(T, Duration)>
where
    F: FnOnce() -> Result<T>,
{
    let term = Term::stderr();
    term.hide_cursor().ok();

    let pb = ProgressBar::new_spinner();

    if options.unicode_support {
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠋"]),
        );
    } else {
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("-\\|/-"),
        );
    }

    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    pb.finish_and_clear();
    term.show_cursor().ok();

    result.map(|r| (r, elapsed))
}

fn status_style(ok: bool, options: &DisplayOptions) -> Style {
    if !options.color_support {
        Style::new()
    } else if ok {
        Style::new().green()
    } else {
        Style::new().yellow()
    }
}

pub fn display_notice(message: &str, options: &DisplayOptions) {
    let (_, check_warn) = get_status_symbols(options.unicode_support);
    let style = status_style(false, options);
    eprintln!("{} {}", style.apply_to(format!("[{}]", check_warn)), message);
}

pub fn display_analysis(
    analysis: &Analysis,
    estimator: &str,
    elapsed: Duration,
    options: &DisplayOptions,
) {
    if options.quiet {
        for (key, value) in analysis.entries() {
            println!("{}: {}", key, value);
        }
        return;
    }

    println!("Password Analysis Result");
    println!("------------------------");
    for (key, value) in analysis.entries() {
        println!("{}: {}", key, value);
    }
    println!();

    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let (branch, last) = tree_branches(options.unicode_support);

    let strong = analysis.score() >= MIN_STRONG_SCORE;
    let style = status_style(strong, options);
    let status = if strong { check_ok } else { check_warn };
    let method = if analysis.is_local() {
        "entropy (fallback)"
    } else {
        estimator
    };

    println!("Stats:");
    println!("  {} Estimator  {}", branch, method);
    println!(
        "  {} Score      {} {}/4",
        branch,
        style.apply_to(format!("[{}]", status)),
        style.apply_to(analysis.score())
    );
    println!("  {} Time       {:.1}s", last, elapsed.as_secs_f64());

    println!(
        "\n{} Strength: {}",
        style.apply_to(format!("[{}]", status)),
        style.apply_to(score_label(analysis.score()))
    );
}

pub fn display_preview(
    words: &[String],
    generate_options: &GenerateOptions,
    elapsed: Duration,
    options: &DisplayOptions,
) {
    let shown = words.len().min(MAX_PREVIEW_LINES);

    if options.quiet {
        for word in &words[..shown] {
            println!("{}", word);
        }
        return;
    }

    println!(
        "Generated {} {}. Showing first {} lines:\n",
        words.len(),
        if words.len() == 1 { "entry" } else { "entries" },
        shown
    );
    for (i, word) in words[..shown].iter().enumerate() {
        println!("{}. {}", i + 1, word);
    }
    if words.len() > MAX_PREVIEW_LINES {
        println!("\n... (preview limited to {} lines)", MAX_PREVIEW_LINES);
    }
    println!();

    display_generation_stats(words.len(), generate_options, elapsed, options);
}

fn display_generation_stats(
    count: usize,
    generate_options: &GenerateOptions,
    elapsed: Duration,
    options: &DisplayOptions,
) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let (branch, last) = tree_branches(options.unicode_support);

    let on_off = |enabled: bool| if enabled { "on" } else { "off" };
    let filled = count >= generate_options.max_output;
    let style = status_style(filled, options);

    println!("Stats:");
    println!(
        "  {} Entries    {} {} of {} max",
        branch,
        style.apply_to(format!("[{}]", if filled { check_ok } else { check_warn })),
        style.apply_to(count),
        generate_options.max_output
    );
    println!("  {} Leet       {}", branch, on_off(generate_options.include_leet));
    println!("  {} Suffixes   {}", branch, on_off(generate_options.append_suffixes));
    println!("  {} Separators {}", branch, on_off(generate_options.use_separators));
    match generate_options.year_range {
        Some(range) => println!("  {} Years      {}-{}", branch, range.start, range.end),
        None => println!("  {} Years      none", branch),
    }
    println!("  {} Time       {:.1}s", last, elapsed.as_secs_f64());
}

pub fn display_saved(path: &Path, count: usize, elapsed: Duration, options: &DisplayOptions) {
    if options.quiet {
        println!("{}", path.display());
        return;
    }

    let (check_ok, _) = get_status_symbols(options.unicode_support);
    let style = status_style(true, options);
    println!(
        "{} Saved {} {} to:\n{}",
        style.apply_to(format!("[{}]", check_ok)),
        count,
        if count == 1 { "entry" } else { "entries" },
        path.display()
    );
    println!("Time: {:.1}s", elapsed.as_secs_f64());
}

pub fn print_words(words: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for word in words {
        writeln!(out, "{}", word)?;
    }
    out.flush()
}
