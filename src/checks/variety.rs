//! Character-variety check - counts the character classes in use.

use crate::types::{RuleCheck, Severity};

/// Presence of each of the four tracked character classes.
///
/// Lowercase, uppercase and digit are the ASCII ranges; symbol is any
/// character that is not an ASCII letter or digit.
#[derive(Debug, Clone, Copy)]
pub struct CharClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharClasses {
    pub fn of(password: &str) -> Self {
        Self {
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            digits: password.chars().any(|c| c.is_ascii_digit()),
            symbols: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub fn count(self) -> usize {
        [self.lowercase, self.uppercase, self.digits, self.symbols]
            .iter()
            .filter(|&&present| present)
            .count()
    }
}

/// Scores the number of character classes present: 1 -> 0.5, 2 -> 1.0,
/// 3 -> 1.5, 4 -> 2.0. Informational; `passed` reflects the >=2 threshold.
pub fn variety_check(password: &str) -> RuleCheck {
    let classes = CharClasses::of(password);
    let count = classes.count();

    let score = match count {
        1 => 0.5,
        2 => 1.0,
        3 => 1.5,
        4 => 2.0,
        _ => 0.0,
    };

    let mut present = Vec::new();
    if classes.lowercase {
        present.push("lowercase");
    }
    if classes.uppercase {
        present.push("uppercase");
    }
    if classes.digits {
        present.push("digits");
    }
    if classes.symbols {
        present.push("symbols");
    }

    let description = if present.is_empty() {
        format!("{count}/4 character classes in use")
    } else {
        format!("{count}/4 character classes in use ({})", present.join(", "))
    };

    RuleCheck {
        id: "char_variety".to_string(),
        label: "Character variety (entropy)".to_string(),
        description,
        passed: count >= 2,
        score,
        max_score: 2.0,
        nist_ref: "NIST SP 800-63B §5.1.1 (estimated entropy)".to_string(),
        severity: Severity::Info,
    }
}
