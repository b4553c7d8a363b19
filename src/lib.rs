//! Password security analysis library
//!
//! This library scores a candidate password against a fixed rule set
//! derived from NIST SP 800-63B and returns an itemized report: per-rule
//! pass/fail, a weighted score, an entropy estimate and recommendations.
//!
//! # Features
//!
//! - `server` (default): Enables the axum HTTP transport binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLOCKLIST_PATH`: Custom path to the reference dataset
//!   (default: `./assets/nist_blocklist.json`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_analyzer::{analyze_password, init_blocklist};
//! use secrecy::SecretString;
//!
//! // Load the reference dataset (once at startup)
//! let data = init_blocklist().expect("Failed to load blocklist");
//!
//! // Analyze a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = analyze_password(&password, &data);
//!
//! println!("Score: {}/{}", result.score, result.max_score);
//! println!("Level: {:?}", result.level);
//! for rec in &result.recommendations {
//!     println!("- {rec}");
//! }
//! ```

// Internal modules
mod analyzer;
mod blocklist;
mod checks;
mod metrics;
mod types;

// Public API
pub use analyzer::analyze_password;
pub use blocklist::{
    BlocklistError, ReferenceData, blocklist_path, init_blocklist, init_blocklist_from_path,
    reference_data,
};
pub use metrics::{charset_size, estimate_crack_time, shannon_entropy};
pub use types::{AnalysisResult, AnalyzeRequest, RuleCheck, Severity, StrengthLevel};
