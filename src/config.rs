//! Static rule data and option parsing shared by the expander and the generator.

use tracing::debug;

pub const DEFAULT_MAX_OUTPUT: usize = 20_000;
pub const DEFAULT_MAX_VARIANTS: usize = 60;

/// Longest candidate, in characters, that survives filtering.
pub const MAX_WORD_CHARS: usize = 64;

/// Longest arrangement of variants joined without separators.
pub const MAX_COMBO_LEN: usize = 3;

/// Longest arrangement of variants joined with a separator.
pub const MAX_SEPARATED_LEN: usize = 2;

/// One row of the substitution table: a lowercase letter and what may replace it.
pub type LeetRule = (char, &'static [&'static str]);

#[derive(Debug, Clone, Copy)]
pub struct Rules {
    pub leet: &'static [LeetRule],
    pub suffixes: &'static [&'static str],
    pub separators: &'static [&'static str],
}

impl Rules {
    pub const DEFAULT: Self = Self {
        leet: &[
            ('a', &["4", "@"]),
            ('b', &["8"]),
            ('e', &["3"]),
            ('i', &["1", "!"]),
            ('l', &["1", "|"]),
            ('o', &["0"]),
            ('s', &["5", "$"]),
            ('t', &["7"]),
            ('g', &["9"]),
            ('z', &["2"]),
        ],
        suffixes: &[
            "!", "123", "1234", "2020", "2021", "2022", "2023", "2024", "@", "#",
        ],
        separators: &["", ".", "_", "-"],
    };

    /// Replacements for `c`, matched case-insensitively.
    pub fn replacements(&self, c: char) -> Option<&'static [&'static str]> {
        let lower = c.to_ascii_lowercase();
        self.leet
            .iter()
            .find(|(letter, _)| *letter == lower)
            .map(|(_, reps)| *reps)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parses the user-supplied output bound, falling back to [`DEFAULT_MAX_OUTPUT`].
pub fn parse_max_output(text: &str) -> usize {
    match text.trim().parse::<usize>() {
        Ok(n) => n,
        Err(e) => {
            debug!(input = text, error = %e, "unparsable max output, using default");
            DEFAULT_MAX_OUTPUT
        }
    }
}
