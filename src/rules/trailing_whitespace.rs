use crate::config::Value;
use crate::config::value::optional_bool;
use crate::error::ConfigurationError;
use crate::rules::{RuleConfiguration, Severity, SeverityConfiguration};
use std::fmt;

const OWN_KEYS: [&str; 2] = ["ignores_empty_lines", "ignores_comments"];

/// Configuration for the trailing whitespace rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingWhitespaceConfiguration {
	pub ignores_empty_lines: bool,
	pub ignores_comments: bool,
	pub severity: SeverityConfiguration,
}

impl TrailingWhitespaceConfiguration {
	pub fn new(ignores_empty_lines: bool, ignores_comments: bool) -> Self {
		Self {
			ignores_empty_lines,
			ignores_comments,
			severity: SeverityConfiguration::new(Severity::Warning),
		}
	}
}

impl Default for TrailingWhitespaceConfiguration {
	fn default() -> Self {
		Self::new(false, true)
	}
}

impl RuleConfiguration for TrailingWhitespaceConfiguration {
	/// Requires a mapping. When it holds keys besides the two flags, the whole
	/// mapping is handed to the embedded severity configuration.
	fn apply_configuration(&mut self, value: &Value) -> Result<(), ConfigurationError> {
		let map = value
			.as_mapping()
			.ok_or(ConfigurationError::UnknownConfiguration)?;

		let ignores_empty_lines = optional_bool(map, "ignores_empty_lines")?;
		let ignores_comments = optional_bool(map, "ignores_comments")?;

		let mut severity = self.severity;
		if map.keys().any(|key| !OWN_KEYS.contains(&key.as_str())) {
			severity.apply_configuration(value)?;
		}

		if let Some(ignores_empty_lines) = ignores_empty_lines {
			self.ignores_empty_lines = ignores_empty_lines;
		}
		if let Some(ignores_comments) = ignores_comments {
			self.ignores_comments = ignores_comments;
		}
		self.severity = severity;
		Ok(())
	}
}

impl fmt::Display for TrailingWhitespaceConfiguration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}, ignores_empty_lines: {}, ignores_comments: {}",
			self.severity, self.ignores_empty_lines, self.ignores_comments
		)
	}
}
