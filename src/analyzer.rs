//! Password analyzer - main analysis logic.

use secrecy::{ExposeSecret, SecretString};

use crate::blocklist::ReferenceData;
use crate::checks::{
    CharClasses, compromised_check, contextual_check, keyboard_walk_check, length_check,
    repetition_check, unicode_check, variety_check,
};
use crate::metrics::{charset_size, estimate_crack_time, shannon_entropy};
use crate::types::{AnalysisResult, StrengthLevel};

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Analyzes a password against the NIST SP 800-63B rule set.
///
/// Pure and deterministic: the same password and reference data always
/// yield the same report. The seven checks are evaluated independently and
/// emitted in a fixed order.
///
/// # Arguments
/// * `password` - The candidate password
/// * `data` - The reference datasets, see [`crate::blocklist`]
///
/// # Returns
/// An [`AnalysisResult`] with per-rule outcomes, the weighted score and
/// percentage, the qualitative level and the recommendation list.
pub fn analyze_password(password: &SecretString, data: &ReferenceData) -> AnalysisResult {
    let pwd = password.expose_secret();
    let length = pwd.chars().count();

    let len_check = length_check(pwd);
    let comp_check = compromised_check(pwd, data);
    let rep_check = repetition_check(pwd);
    let walk_check = keyboard_walk_check(pwd, data);
    let ctx_check = contextual_check(pwd, data);
    let var_check = variety_check(pwd);
    let uni_check = unicode_check(pwd);

    let len_passed = len_check.passed;
    let is_common = !comp_check.passed;
    let has_repetition = !rep_check.passed;
    let has_walk = !walk_check.passed;
    let has_contextual = !ctx_check.passed;
    let char_classes = CharClasses::of(pwd).count();

    let checks = vec![
        len_check,
        comp_check,
        rep_check,
        walk_check,
        ctx_check,
        var_check,
        uni_check,
    ];

    let total_score: f64 = checks.iter().map(|c| c.score).sum();
    let max_score: f64 = checks.iter().map(|c| c.max_score).sum();
    let mut percentage = round1(total_score / max_score * 100.0);

    // Compromised passwords are always classified as critical
    if is_common {
        percentage = percentage.min(10.0);
    }

    let level = if percentage < 20.0 || !len_passed {
        StrengthLevel::Critical
    } else if percentage < 45.0 {
        StrengthLevel::Weak
    } else if percentage < 65.0 {
        StrengthLevel::Fair
    } else if percentage < 82.0 {
        StrengthLevel::Good
    } else {
        StrengthLevel::Strong
    };

    let mut recommendations: Vec<String> = Vec::new();
    if !len_passed {
        recommendations
            .push("Use at least 8 characters (NIST minimum is 8, 15 or more advised)".to_string());
    } else if length < 15 {
        recommendations
            .push("Increase the length to 15 characters or more for better security".to_string());
    }
    if is_common {
        recommendations.push("Replace it with a password never used before".to_string());
    }
    if has_repetition {
        recommendations.push("Avoid runs of repeated characters (aaa, 111...)".to_string());
    }
    if has_walk {
        recommendations.push("Avoid keyboard sequences (qwerty, asdf, 12345...)".to_string());
    }
    if has_contextual {
        recommendations.push("Avoid words like 'password', 'login', 'admin'".to_string());
    }
    if char_classes < 3 {
        recommendations
            .push("Add uppercase letters, digits or symbols to raise the entropy".to_string());
    }
    if recommendations.is_empty() {
        recommendations
            .push("Well done! This password meets the NIST SP 800-63B criteria".to_string());
    }

    let charset = charset_size(pwd);

    AnalysisResult {
        password_length: length,
        entropy_bits: shannon_entropy(pwd),
        charset_size: charset,
        estimated_crack_time: estimate_crack_time(length, charset),
        score: round2(total_score),
        max_score: round2(max_score),
        percentage,
        level,
        level_label: level.label().to_string(),
        checks,
        recommendations,
    }
}
