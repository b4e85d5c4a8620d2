//! Typed rule configurations.
//!
//! Each rule owns one configuration type. All of them implement
//! [`RuleConfiguration`]:
//! - `apply_configuration` validates a raw [`Value`] and merges it onto the
//!   current state, leaving the state untouched on failure
//! - `parameters` lists the effective numeric thresholds for introspection
//! - structural equality comes from `PartialEq`

pub mod custom;
pub mod line_length;
pub mod name;
pub mod overridden_super_call;
pub mod severity;
pub mod severity_levels;
pub mod trailing_whitespace;

pub use custom::RegexConfiguration;
pub use line_length::LineLengthConfiguration;
pub use name::NameConfiguration;
pub use overridden_super_call::OverriddenSuperCallConfiguration;
pub use severity::{Severity, SeverityConfiguration};
pub use severity_levels::{RuleParameter, SeverityLevels};
pub use trailing_whitespace::TrailingWhitespaceConfiguration;

use crate::config::Value;
use crate::error::ConfigurationError;
use std::fmt;

/// Shared contract for every rule's configuration.
pub trait RuleConfiguration: fmt::Debug + fmt::Display + PartialEq {
	/// Validate `value` and merge it onto this configuration.
	///
	/// On error the configuration is left exactly as it was before the call.
	fn apply_configuration(&mut self, value: &Value) -> Result<(), ConfigurationError>;

	/// Effective thresholds, most severe first.
	fn parameters(&self) -> Vec<RuleParameter> {
		Vec::new()
	}
}

/// Identifier, display name and description of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDescription {
	pub identifier: String,
	pub name: String,
	pub description: String,
}

/// Render a name set as `[a, b, c]`.
pub(crate) fn format_names<'a>(names: impl IntoIterator<Item = &'a String>) -> String {
	let joined: Vec<&str> = names.into_iter().map(String::as_str).collect();
	format!("[{}]", joined.join(", "))
}
