//! lintconf - typed, validated rule configurations for a rule-based linter.
//!
//! This library provides:
//! - A format-independent [`Value`](config::Value) model for decoded settings
//! - One configuration type per rule, each validating its own raw shapes
//! - Merge and replace semantics for thresholds, severities and name lists
//! - Loading a `.lintconf.toml` file onto the built-in rule defaults
//!
//! # Example
//!
//! ```
//! use lintconf::config::Value;
//! use lintconf::rules::{LineLengthConfiguration, RuleConfiguration, SeverityLevels};
//!
//! let mut config = LineLengthConfiguration::default();
//! config.apply_configuration(&Value::from(vec![100, 150])).unwrap();
//! assert_eq!(config.length, SeverityLevels::new(100, Some(150)));
//!
//! // Bad shapes are rejected and leave the configuration untouched.
//! assert!(config.apply_configuration(&Value::from("unknown")).is_err());
//! assert_eq!(config.length.threshold(), 150);
//! ```

pub mod config;
pub mod error;
pub mod rules;

pub use error::{ConfigurationError, LintconfError, Result};
