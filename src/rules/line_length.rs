use crate::config::Value;
use crate::config::value::optional_bool;
use crate::error::ConfigurationError;
use crate::rules::{RuleConfiguration, RuleParameter, SeverityLevels};
use std::fmt;

/// Configuration for the line length rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLengthConfiguration {
	pub length: SeverityLevels,
	pub ignores_urls: bool,
}

impl LineLengthConfiguration {
	pub fn new(warning: i64, error: Option<i64>, ignores_urls: bool) -> Self {
		Self {
			length: SeverityLevels::new(warning, error),
			ignores_urls,
		}
	}
}

impl Default for LineLengthConfiguration {
	fn default() -> Self {
		Self::new(120, Some(200), false)
	}
}

impl RuleConfiguration for LineLengthConfiguration {
	/// Accepts the [`SeverityLevels`] shapes. A mapping may also carry
	/// `ignores_urls`; other keys are ignored.
	fn apply_configuration(&mut self, value: &Value) -> Result<(), ConfigurationError> {
		let ignores_urls = match value {
			Value::Sequence(_) => None,
			Value::Mapping(map) => optional_bool(map, "ignores_urls")?,
			_ => return Err(ConfigurationError::UnknownConfiguration),
		};

		// SeverityLevels validates fully before mutating.
		self.length.apply_configuration(value)?;
		if let Some(ignores_urls) = ignores_urls {
			self.ignores_urls = ignores_urls;
		}
		Ok(())
	}

	fn parameters(&self) -> Vec<RuleParameter> {
		self.length.params()
	}
}

impl fmt::Display for LineLengthConfiguration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}, ignores_urls: {}", self.length, self.ignores_urls)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::Severity;

	#[test]
	fn test_initializer_sets_length() {
		let config = LineLengthConfiguration::new(100, Some(150), true);
		assert_eq!(config.length, SeverityLevels::new(100, Some(150)));

		let config = LineLengthConfiguration::new(100, None, true);
		assert_eq!(config.length, SeverityLevels::new(100, None));
	}

	#[test]
	fn test_initializer_sets_ignores_urls() {
		assert!(LineLengthConfiguration::new(100, Some(150), true).ignores_urls);
		assert!(!LineLengthConfiguration::new(100, Some(150), false).ignores_urls);
	}

	#[test]
	fn test_params() {
		let config = LineLengthConfiguration::new(13, Some(10), true);
		assert_eq!(
			config.parameters(),
			vec![
				RuleParameter::new(Severity::Error, 10),
				RuleParameter::new(Severity::Warning, 13)
			]
		);
	}

	#[test]
	fn test_partial_params() {
		let config = LineLengthConfiguration::new(13, None, true);
		assert_eq!(
			config.parameters(),
			vec![RuleParameter::new(Severity::Warning, 13)]
		);
	}

	#[test]
	fn test_rejects_string() {
		let mut config = LineLengthConfiguration::new(100, Some(150), true);
		assert_eq!(
			config.apply_configuration(&Value::from("unknown")),
			Err(ConfigurationError::UnknownConfiguration)
		);
		assert_eq!(config, LineLengthConfiguration::new(100, Some(150), true));
	}

	#[test]
	fn test_apply_with_sequence() {
		let mut config = LineLengthConfiguration::new(0, Some(0), false);

		config
			.apply_configuration(&Value::from(vec![100, 100]))
			.unwrap();
		assert_eq!(config.length, SeverityLevels::new(100, Some(100)));

		config.apply_configuration(&Value::from(vec![150])).unwrap();
		assert_eq!(config.length, SeverityLevels::new(150, None));
		assert!(!config.ignores_urls);
	}

	#[test]
	fn test_apply_with_mapping() {
		let mut config = LineLengthConfiguration::new(0, Some(0), false);

		let first: Value = [
			("warning", Value::from(100)),
			("error", Value::from(100)),
			("ignores_urls", Value::from(true)),
		]
		.into_iter()
		.collect();
		config.apply_configuration(&first).unwrap();
		assert_eq!(config.length, SeverityLevels::new(100, Some(100)));
		assert!(config.ignores_urls);

		let second: Value = [("warning", 200), ("error", 200)].into_iter().collect();
		config.apply_configuration(&second).unwrap();
		assert_eq!(config.length, SeverityLevels::new(200, Some(200)));
		assert!(config.ignores_urls);

		// Mapping updates merge, so the error level survives.
		let third: Value = [("ignores_urls", false)].into_iter().collect();
		config.apply_configuration(&third).unwrap();
		assert_eq!(config.length, SeverityLevels::new(200, Some(200)));
		assert!(!config.ignores_urls);
	}

	#[test]
	fn test_warning_only_mapping_keeps_error() {
		let mut config = LineLengthConfiguration::new(100, Some(200), false);
		let value: Value = [("warning", 80)].into_iter().collect();
		config.apply_configuration(&value).unwrap();
		assert_eq!(config.length, SeverityLevels::new(80, Some(200)));
	}

	#[test]
	fn test_bad_ignores_urls_leaves_length_untouched() {
		let mut config = LineLengthConfiguration::new(100, Some(200), false);
		let value: Value = [("warning", Value::from(1)), ("ignores_urls", Value::from("yes"))]
			.into_iter()
			.collect();
		assert!(config.apply_configuration(&value).is_err());
		assert_eq!(config, LineLengthConfiguration::new(100, Some(200), false));
	}

	#[test]
	fn test_compares() {
		let config1 = LineLengthConfiguration::new(100, Some(100), true);
		let config2 = LineLengthConfiguration::new(100, Some(100), false);
		assert_ne!(config1, config2);

		assert_ne!(config1, LineLengthConfiguration::new(100, Some(200), true));
		assert_ne!(config1, LineLengthConfiguration::new(200, Some(100), true));
		assert_eq!(config1, LineLengthConfiguration::new(100, Some(100), true));
		assert_eq!(config2, LineLengthConfiguration::new(100, Some(100), false));
	}

	#[test]
	fn test_display() {
		assert_eq!(
			LineLengthConfiguration::default().to_string(),
			"warning: 120, error: 200, ignores_urls: false"
		);
	}
}
