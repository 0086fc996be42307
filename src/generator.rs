//! Wordlist generation.
//!
//! Seeds are expanded into case forms and leet variants, arranged into
//! ordered permutations (with and without separators), augmented with years
//! and common suffixes, then filtered, sorted by `(length, text)` and capped.
//!
//! The permutation stages grow factorially with the number of variants, so
//! each runs against a [`Budget`] of `max_output / 3` entries and stops early
//! once it is spent.

use crate::config::{
    DEFAULT_MAX_OUTPUT, DEFAULT_MAX_VARIANTS, MAX_COMBO_LEN, MAX_SEPARATED_LEN, MAX_WORD_CHARS,
    Rules,
};
use crate::leet;
use crate::years::YearRange;
use std::collections::{BTreeSet, HashSet};
use std::ops::ControlFlow;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub year_range: Option<YearRange>,
    pub include_leet: bool,
    pub append_suffixes: bool,
    pub use_separators: bool,
    pub max_output: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            year_range: None,
            include_leet: true,
            append_suffixes: true,
            use_separators: true,
            max_output: DEFAULT_MAX_OUTPUT,
        }
    }
}

/// Upper bound on how many entries a combination stage may collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    limit: usize,
}

impl Budget {
    pub fn for_stage(max_output: usize) -> Self {
        Self {
            limit: max_output / 3,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_spent(&self, collected: &HashSet<String>) -> bool {
        collected.len() >= self.limit
    }
}

pub fn generate<S: AsRef<str>>(seeds: &[S], options: &GenerateOptions) -> Vec<String> {
    generate_with(&Rules::DEFAULT, seeds, options)
}

pub fn generate_with<S: AsRef<str>>(
    rules: &Rules,
    seeds: &[S],
    options: &GenerateOptions,
) -> Vec<String> {
    let seeds = expand_seeds(seeds);
    let variants = expand_variants(rules, &seeds, options.include_leet);
    let variants: Vec<&str> = variants.iter().map(String::as_str).collect();
    debug!(seeds = seeds.len(), variants = variants.len(), "expanded seeds");

    let budget = Budget::for_stage(options.max_output);
    let combos = combine(&variants, budget);
    let separated = if options.use_separators {
        combine_separated(&variants, rules.separators, budget)
    } else {
        HashSet::new()
    };
    debug!(
        budget = budget.limit(),
        combos = combos.len(),
        separated = separated.len(),
        "combined variants"
    );

    let mut words: HashSet<String> = combos;
    words.extend(separated);
    words.extend(variants.iter().map(|v| v.to_string()));

    if let Some(range) = options.year_range {
        let with_years = append_years(&words, range);
        words.extend(with_years);
    }

    if options.append_suffixes {
        let with_suffixes = append_suffixes(&words, rules.suffixes);
        words.extend(with_suffixes);
    }

    debug!(candidates = words.len(), "augmented candidates");
    finalize(words, options.max_output)
}

/// Literal, lowercase, titlecase and uppercase forms of every seed, followed
/// by the digit runs of each form, deduplicated in first-seen order.
pub fn expand_seeds<S: AsRef<str>>(seeds: &[S]) -> Vec<String> {
    let mut forms = Vec::with_capacity(seeds.len() * 4);
    for seed in seeds.iter().map(AsRef::as_ref).filter(|s| !s.is_empty()) {
        forms.push(seed.to_string());
        forms.push(seed.to_lowercase());
        forms.push(title_case(seed));
        forms.push(seed.to_uppercase());
    }

    let digits: Vec<String> = forms
        .iter()
        .map(|form| form.chars().filter(|c| c.is_ascii_digit()).collect::<String>())
        .filter(|d| !d.is_empty())
        .collect();
    forms.extend(digits);

    let mut seen = HashSet::new();
    forms
        .into_iter()
        .filter(|form| !form.is_empty() && seen.insert(form.clone()))
        .collect()
}

/// Every seed plus, when enabled, its leet spellings.
pub fn expand_variants(rules: &Rules, seeds: &[String], include_leet: bool) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    for seed in seeds {
        variants.insert(seed.clone());
        if include_leet {
            variants.extend(leet::expand(rules, seed, DEFAULT_MAX_VARIANTS));
        }
    }
    variants
}

/// Concatenated permutations of 1 to [`MAX_COMBO_LEN`] variants.
pub fn combine(variants: &[&str], budget: Budget) -> HashSet<String> {
    let mut combos = HashSet::new();
    for len in 1..=MAX_COMBO_LEN {
        let _ = for_each_permutation(variants, len, |arrangement| {
            combos.insert(arrangement.concat());
            if budget.is_spent(&combos) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        if budget.is_spent(&combos) {
            break;
        }
    }
    combos
}

/// Permutations of 1 to [`MAX_SEPARATED_LEN`] variants joined by each separator.
pub fn combine_separated(variants: &[&str], separators: &[&str], budget: Budget) -> HashSet<String> {
    let mut joined = HashSet::new();
    for len in 1..=MAX_SEPARATED_LEN {
        let _ = for_each_permutation(variants, len, |arrangement| {
            for &sep in separators {
                joined.insert(arrangement.join(sep));
            }
            if budget.is_spent(&joined) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        if budget.is_spent(&joined) {
            break;
        }
    }
    joined
}

fn append_years(words: &HashSet<String>, range: YearRange) -> HashSet<String> {
    let mut out = HashSet::with_capacity(words.len() * 2);
    for word in words {
        for year in range.years() {
            out.insert(format!("{}{}", word, year));
            out.insert(format!("{}{:02}", word, year.rem_euclid(100)));
        }
    }
    out
}

fn append_suffixes(words: &HashSet<String>, suffixes: &[&str]) -> HashSet<String> {
    let mut out = HashSet::with_capacity(words.len() * suffixes.len());
    for word in words {
        for suffix in suffixes.iter().filter(|s| !s.is_empty()) {
            out.insert(format!("{}{}", word, suffix));
        }
    }
    out
}

fn finalize(words: HashSet<String>, max_output: usize) -> Vec<String> {
    let mut keyed: Vec<(usize, String)> = words
        .into_iter()
        .filter(|w| !w.is_empty())
        .map(|w| (w.chars().count(), w))
        .filter(|(len, _)| *len <= MAX_WORD_CHARS)
        .collect();
    keyed.sort_unstable();
    keyed.truncate(max_output);
    keyed.into_iter().map(|(_, w)| w).collect()
}

/// Visits ordered arrangements of `len` distinct items in index order.
fn for_each_permutation<'a, F>(items: &[&'a str], len: usize, mut visit: F) -> ControlFlow<()>
where
    F: FnMut(&[&'a str]) -> ControlFlow<()>,
{
    fn step<'a, F>(
        items: &[&'a str],
        len: usize,
        used: &mut [bool],
        current: &mut Vec<&'a str>,
        visit: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&[&'a str]) -> ControlFlow<()>,
    {
        if current.len() == len {
            return visit(current);
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            current.push(items[i]);
            let flow = step(items, len, used, current, visit);
            current.pop();
            used[i] = false;
            flow?;
        }
        ControlFlow::Continue(())
    }

    if len == 0 || len > items.len() {
        return ControlFlow::Continue(());
    }

    let mut used = vec![false; items.len()];
    let mut current = Vec::with_capacity(len);
    step(items, len, &mut used, &mut current, &mut visit)
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
