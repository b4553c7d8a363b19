//! Rule checks
//!
//! Each check evaluates one NIST-derived rule and produces a [`RuleCheck`]
//! with its earned score. Checks are independent of one another; the
//! analyzer aggregates them.
//!
//! [`RuleCheck`]: crate::types::RuleCheck

mod compromised;
mod contextual;
mod keyboard_walk;
mod length;
mod repetition;
mod unicode;
mod variety;

pub use compromised::compromised_check;
pub use contextual::contextual_check;
pub use keyboard_walk::keyboard_walk_check;
pub use length::length_check;
pub use repetition::repetition_check;
pub use unicode::unicode_check;
pub use variety::{CharClasses, variety_check};
