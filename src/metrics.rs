//! Supporting metrics: Shannon entropy, charset size estimate and
//! brute-force crack-time estimate. Informational only, not part of the
//! rule scoring.

use std::collections::HashMap;

const GUESSES_PER_SEC: f64 = 1e10;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86400.0;
const YEAR: f64 = 365.25 * 86400.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Shannon entropy in bits: `H = -sum(p_i * log2(p_i)) * L`, where `p_i` is
/// the relative frequency of each character and `L` the code-point length.
///
/// The per-character estimate scaled by length is an approximation, kept
/// for compatibility with downstream consumers of the numeric value.
pub fn shannon_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }
    let mut freq: HashMap<char, u32> = HashMap::new();
    for c in password.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    let n = password.chars().count() as f64;
    let mut entropy = 0.0;
    for &count in freq.values() {
        let p = f64::from(count) / n;
        entropy -= p * p.log2();
    }
    round2(entropy * n)
}

/// Estimated size of the character pool actually in use, summing the pools
/// detected (lowercase, uppercase, digits, symbols, Unicode). Floor is 1.
pub fn charset_size(password: &str) -> u32 {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += 10;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        size += 33;
    }
    // Any code point beyond standard ASCII
    if password.chars().any(|c| (c as u32) > 127) {
        size += 128;
    }
    size.max(1)
}

/// Estimates the time for a brute-force attack at 10 billion guesses/sec
/// (GPU attack), using `t = N^L / (2 * guesses_per_sec)` with `N` the
/// charset size and `L` the password length.
///
/// The keyspace is computed in `f64`; for very long passwords it saturates
/// to infinity and lands in the top bucket instead of overflowing.
pub fn estimate_crack_time(length: usize, charset_size: u32) -> String {
    let combinations = f64::from(charset_size).powi(length as i32);
    let seconds = combinations / (2.0 * GUESSES_PER_SEC);

    if seconds < 1.0 {
        "instant".to_string()
    } else if seconds < MINUTE {
        format!("{} seconds", seconds as u64)
    } else if seconds < HOUR {
        format!("{} minutes", (seconds / MINUTE) as u64)
    } else if seconds < DAY {
        format!("{} hours", (seconds / HOUR) as u64)
    } else if seconds < YEAR {
        format!("{} days", (seconds / DAY) as u64)
    } else if seconds < 100.0 * YEAR {
        format!("{} years", (seconds / YEAR) as u64)
    } else if seconds < 1e6 * YEAR {
        format!("{} centuries", (seconds / (100.0 * YEAR)) as u64)
    } else if seconds < 1e9 * YEAR {
        format!("{} millions of years", (seconds / (1e6 * YEAR)) as u64)
    } else {
        "billions of years".to_string()
    }
}
