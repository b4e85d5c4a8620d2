use crate::config::Value;
use crate::error::ConfigurationError;
use crate::rules::RuleConfiguration;
use std::fmt;
use std::str::FromStr;

/// Strictness tier of a diagnostic. `Error` orders above `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
	Warning,
	Error,
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Warning => write!(f, "warning"),
			Self::Error => write!(f, "error"),
		}
	}
}

impl FromStr for Severity {
	type Err = ConfigurationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"warning" => Ok(Self::Warning),
			"error" => Ok(Self::Error),
			_ => Err(ConfigurationError::UnknownConfiguration),
		}
	}
}

/// Configuration for rules whose only setting is their severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityConfiguration {
	pub severity: Severity,
}

impl SeverityConfiguration {
	pub fn new(severity: Severity) -> Self {
		Self { severity }
	}
}

impl RuleConfiguration for SeverityConfiguration {
	/// Accepts either a severity name (`"warning"`, `"Error"`, ...) or a
	/// mapping whose `severity` key holds one.
	fn apply_configuration(&mut self, value: &Value) -> Result<(), ConfigurationError> {
		let name = match value {
			Value::String(s) => s.as_str(),
			Value::Mapping(map) => map
				.get("severity")
				.and_then(Value::as_str)
				.ok_or(ConfigurationError::UnknownConfiguration)?,
			_ => return Err(ConfigurationError::UnknownConfiguration),
		};

		self.severity = name.parse()?;
		Ok(())
	}
}

impl fmt::Display for SeverityConfiguration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "severity: {}", self.severity)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_severity_ordering() {
		assert!(Severity::Error > Severity::Warning);
		assert_eq!(
			[Severity::Error, Severity::Warning].iter().max(),
			Some(&Severity::Error)
		);
	}

	#[test]
	fn test_severity_parse_is_case_insensitive() {
		assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
		assert_eq!("ERROR".parse::<Severity>(), Ok(Severity::Error));
		assert_eq!(
			"fatal".parse::<Severity>(),
			Err(ConfigurationError::UnknownConfiguration)
		);
	}

	#[test]
	fn test_apply_from_string() {
		let mut config = SeverityConfiguration::new(Severity::Error);
		config.apply_configuration(&Value::from("Warning")).unwrap();
		assert_eq!(config, SeverityConfiguration::new(Severity::Warning));
	}

	#[test]
	fn test_apply_from_mapping() {
		let mut config = SeverityConfiguration::new(Severity::Error);
		let value: Value = [("severity", "warning")].into_iter().collect();
		config.apply_configuration(&value).unwrap();
		assert_eq!(config, SeverityConfiguration::new(Severity::Warning));
	}

	#[test]
	fn test_apply_rejects_integer() {
		let mut config = SeverityConfiguration::new(Severity::Warning);
		assert_eq!(
			config.apply_configuration(&Value::from(17)),
			Err(ConfigurationError::UnknownConfiguration)
		);
		assert_eq!(config.severity, Severity::Warning);
	}

	#[test]
	fn test_apply_rejects_unknown_name() {
		let mut config = SeverityConfiguration::new(Severity::Error);
		assert!(config.apply_configuration(&Value::from("info")).is_err());
		assert_eq!(config.severity, Severity::Error);
	}

	#[test]
	fn test_apply_rejects_mapping_without_severity() {
		let mut config = SeverityConfiguration::new(Severity::Error);
		let value: Value = [("level", "warning")].into_iter().collect();
		assert!(config.apply_configuration(&value).is_err());

		let nested: Value = [("severity", 1)].into_iter().collect();
		assert!(config.apply_configuration(&nested).is_err());
		assert_eq!(config.severity, Severity::Error);
	}

	#[test]
	fn test_display() {
		let config = SeverityConfiguration::new(Severity::Warning);
		assert_eq!(config.to_string(), "severity: warning");
	}
}
