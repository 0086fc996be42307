//! Splits free-form seed text into word tokens.

use crate::error::{Error, Result};
use tracing::debug;

pub trait Tokenizer {
    fn name(&self) -> &'static str;

    /// `None` means the tokenizer could not handle the input.
    fn tokenize(&self, text: &str) -> Option<Vec<String>>;
}

/// Splits on commas and whitespace. Always available.
pub struct SplitTokenizer;

impl Tokenizer for SplitTokenizer {
    fn name(&self) -> &'static str {
        "split"
    }

    fn tokenize(&self, text: &str) -> Option<Vec<String>> {
        Some(
            text.split(|c: char| c == ',' || c.is_whitespace())
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

/// Splits on commas and whitespace, then trims each piece to the span between
/// its first and last Unicode word containing an alphanumeric character.
/// Inner punctuation such as `12/05/1990` or `12-05-1990` is kept; pieces
/// with no alphanumeric character are dropped.
#[cfg(feature = "segmentation")]
pub struct WordTokenizer;

#[cfg(feature = "segmentation")]
impl Tokenizer for WordTokenizer {
    fn name(&self) -> &'static str {
        "unicode-words"
    }

    fn tokenize(&self, text: &str) -> Option<Vec<String>> {
        Some(
            text.split(|c: char| c == ',' || c.is_whitespace())
                .filter_map(trim_to_words)
                .map(str::to_string)
                .collect(),
        )
    }
}

#[cfg(feature = "segmentation")]
fn trim_to_words(piece: &str) -> Option<&str> {
    use unicode_segmentation::UnicodeSegmentation;

    let mut words = piece
        .split_word_bound_indices()
        .filter(|(_, segment)| segment.chars().any(char::is_alphanumeric));

    let (start, first) = words.next()?;
    let (last_start, last) = words.last().unwrap_or((start, first));
    Some(&piece[start..last_start + last.len()])
}

/// The preferred tokenizer compiled into this build.
pub fn detect() -> Box<dyn Tokenizer> {
    #[cfg(feature = "segmentation")]
    {
        Box::new(WordTokenizer)
    }
    #[cfg(not(feature = "segmentation"))]
    {
        Box::new(SplitTokenizer)
    }
}

pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(detect().as_ref(), text)
}

pub fn tokenize_with(tokenizer: &dyn Tokenizer, text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    match tokenizer.tokenize(text) {
        Some(tokens) => tokens,
        None => {
            debug!(tokenizer = tokenizer.name(), "tokenizer failed, splitting on commas");
            SplitTokenizer.tokenize(text).unwrap_or_default()
        }
    }
}

/// Gathers generation seeds from the three free-text categories and an
/// optional password, in that order.
pub fn collect_seeds(
    names: &str,
    favorites: &str,
    dates: &str,
    password: Option<&str>,
) -> Result<Vec<String>> {
    let tokenizer = detect();

    let mut seeds: Vec<String> = [names, favorites, dates]
        .iter()
        .flat_map(|text| tokenize_with(tokenizer.as_ref(), text))
        .collect();

    if let Some(password) = password.map(str::trim).filter(|p| !p.is_empty()) {
        seeds.push(password.to_string());
    }

    if seeds.is_empty() {
        return Err(Error::NoSeeds);
    }

    debug!(count = seeds.len(), tokenizer = tokenizer.name(), "collected seeds");
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingTokenizer;

    impl Tokenizer for FailingTokenizer {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn tokenize(&self, _text: &str) -> Option<Vec<String>> {
            None
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize_with(&SplitTokenizer, "").is_empty());
    }

    #[test]
    fn test_split_on_commas_and_whitespace() {
        let tokens = tokenize_with(&SplitTokenizer, "alice, bob ,carol\tdave\n,,  ");
        assert_eq!(tokens, vec!["alice", "bob", "carol", "dave"]);
    }

    #[test]
    fn test_split_keeps_punctuation() {
        let tokens = tokenize_with(&SplitTokenizer, "12/05/1990, o'neil");
        assert_eq!(tokens, vec!["12/05/1990", "o'neil"]);
    }

    #[test]
    fn test_failure_falls_back_to_split() {
        let tokens = tokenize_with(&FailingTokenizer, "rex, fluffy");
        assert_eq!(tokens, vec!["rex", "fluffy"]);
    }

    #[test]
    fn test_default_tokenizer_on_simple_list() {
        assert_eq!(tokenize("alice, bob"), vec!["alice", "bob"]);
        assert_eq!(tokenize("rex1990 fluffy"), vec!["rex1990", "fluffy"]);
    }

    #[test]
    fn test_dates_stay_whole() {
        assert_eq!(tokenize("12/05/1990"), vec!["12/05/1990"]);
        assert_eq!(
            tokenize("12/05/1990, 12-05-1990 1990.05.12"),
            vec!["12/05/1990", "12-05-1990", "1990.05.12"]
        );
    }

    #[test]
    fn test_collected_dates_reach_the_wordlist() {
        use crate::generator::{GenerateOptions, generate};

        let seeds = collect_seeds("", "", "12/05/1990, 12-05-1990", None).unwrap();
        assert_eq!(seeds, vec!["12/05/1990", "12-05-1990"]);

        let words = generate(&seeds, &GenerateOptions { max_output: 1000, ..Default::default() });
        assert!(words.contains(&"12/05/1990".to_string()));
        assert!(words.contains(&"12051990".to_string()));
    }

    #[cfg(feature = "segmentation")]
    #[test]
    fn test_word_tokenizer_trims_outer_punctuation() {
        let tokens = tokenize_with(&WordTokenizer, "(rex) 'fluffy' o'neil bob!");
        assert_eq!(tokens, vec!["rex", "fluffy", "o'neil", "bob"]);
    }

    #[cfg(feature = "segmentation")]
    #[test]
    fn test_word_tokenizer_drops_punctuation_tokens() {
        let tokens = tokenize_with(&WordTokenizer, "alice, bob! -- carol");
        assert_eq!(tokens, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_collect_seeds_order() {
        let seeds = collect_seeds("alice", "rex", "1990", Some("  hunter2 ")).unwrap();
        assert_eq!(seeds, vec!["alice", "rex", "1990", "hunter2"]);
    }

    #[test]
    fn test_collect_seeds_password_only() {
        let seeds = collect_seeds("", "", "", Some("s3cret")).unwrap();
        assert_eq!(seeds, vec!["s3cret"]);
    }

    #[test]
    fn test_collect_seeds_requires_something() {
        assert!(matches!(
            collect_seeds("", "  ", "", Some("   ")),
            Err(Error::NoSeeds)
        ));
        assert!(matches!(collect_seeds("", "", "", None), Err(Error::NoSeeds)));
    }
}
