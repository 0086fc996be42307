use crate::config::Rules;
use std::collections::BTreeSet;

/// Leet spellings of `token` under the default substitution table.
pub fn leet_variants(token: &str, max_variants: usize) -> BTreeSet<String> {
    expand(&Rules::DEFAULT, token, max_variants)
}

/// Substitutes one position at a time, then every pair of positions, visiting
/// positions in index order and stopping as soon as `max_variants` is reached.
/// The token itself is always part of a non-empty result.
pub fn expand(rules: &Rules, token: &str, max_variants: usize) -> BTreeSet<String> {
    let token = token.trim();
    if token.is_empty() {
        return BTreeSet::new();
    }

    let chars: Vec<char> = token.chars().collect();
    let positions: Vec<(usize, &[&str])> = chars
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| rules.replacements(c).map(|reps| (i, reps)))
        .collect();

    let mut variants = BTreeSet::from([token.to_string()]);

    for &(i, reps) in &positions {
        for &rep in reps {
            variants.insert(substitute(&chars, &[(i, rep)]));
            if variants.len() >= max_variants {
                return variants;
            }
        }
    }

    for (n, &(i, reps_i)) in positions.iter().enumerate() {
        for &(j, reps_j) in &positions[n + 1..] {
            for &r1 in reps_i {
                for &r2 in reps_j {
                    variants.insert(substitute(&chars, &[(i, r1), (j, r2)]));
                    if variants.len() >= max_variants {
                        return variants;
                    }
                }
            }
        }
    }

    variants
}

fn substitute(chars: &[char], subs: &[(usize, &str)]) -> String {
    let mut out = String::with_capacity(chars.len() + subs.len());
    for (i, &c) in chars.iter().enumerate() {
        match subs.iter().find(|(pos, _)| *pos == i) {
            Some((_, rep)) => out.push_str(rep),
            None => out.push(c),
        }
    }
    out
}
