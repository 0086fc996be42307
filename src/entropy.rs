pub const LOWERCASE_POOL: usize = 26;
pub const UPPERCASE_POOL: usize = 26;
pub const DIGIT_POOL: usize = 10;
pub const SYMBOL_POOL: usize = 32;

/// Bit thresholds separating scores 0 through 4.
const SCORE_THRESHOLDS: [f64; 4] = [28.0, 36.0, 60.0, 80.0];

/// Size of the character pool the password appears to be drawn from.
pub fn charset_size(password: &str) -> usize {
    let mut size = 0;
    if password.chars().any(char::is_lowercase) {
        size += LOWERCASE_POOL;
    }
    if password.chars().any(char::is_uppercase) {
        size += UPPERCASE_POOL;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += DIGIT_POOL;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        size += SYMBOL_POOL;
    }
    size.max(1)
}

/// Brute-force entropy estimate in bits: `log2(pool) * length`.
pub fn simple_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }
    (charset_size(password) as f64).log2() * password.chars().count() as f64
}

/// Buckets an entropy estimate into a 0-4 score.
pub fn entropy_score(bits: f64) -> u8 {
    SCORE_THRESHOLDS
        .iter()
        .position(|&threshold| bits < threshold)
        .unwrap_or(SCORE_THRESHOLDS.len()) as u8
}
