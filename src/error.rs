use std::path::PathBuf;

/// Raised when a raw value does not match any shape a rule configuration accepts.
///
/// Carries no payload. Callers attach the rule identifier and source location
/// when reporting it (see [`LintconfError::InvalidRuleConfiguration`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
	#[error("unknown configuration")]
	UnknownConfiguration,
}

/// Library-level structured errors for lintconf.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum LintconfError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid configuration for rule '{rule}'")]
	InvalidRuleConfiguration {
		rule: String,
		#[source]
		source: ConfigurationError,
	},

	#[error("Unknown rule: {rule}")]
	UnknownRule { rule: String },
}

/// Result type alias using LintconfError.
pub type Result<T> = std::result::Result<T, LintconfError>;

#[cfg(test)]
mod tests {
	use super::*;
	use std::error::Error;

	#[test]
	fn test_invalid_rule_configuration_keeps_source() {
		let err = LintconfError::InvalidRuleConfiguration {
			rule: "line_length".to_string(),
			source: ConfigurationError::UnknownConfiguration,
		};

		assert_eq!(
			err.to_string(),
			"Invalid configuration for rule 'line_length'"
		);
		assert_eq!(
			err.source().map(|s| s.to_string()),
			Some("unknown configuration".to_string())
		);
	}
}
