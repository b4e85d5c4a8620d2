use crate::config::Value;
use crate::config::value::optional_integer;
use crate::error::ConfigurationError;
use crate::rules::{RuleConfiguration, Severity};
use std::fmt;

/// One configured limit: a severity paired with its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleParameter {
	pub severity: Severity,
	pub value: i64,
}

impl RuleParameter {
	pub fn new(severity: Severity, value: i64) -> Self {
		Self { severity, value }
	}
}

impl fmt::Display for RuleParameter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.severity, self.value)
	}
}

/// A warning threshold with an optional, stricter error threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityLevels {
	pub warning: i64,
	pub error: Option<i64>,
}

impl SeverityLevels {
	pub fn new(warning: i64, error: Option<i64>) -> Self {
		Self { warning, error }
	}

	/// The error value when set, otherwise the warning value.
	///
	/// Used the same way for minimum and maximum limits.
	pub fn threshold(&self) -> i64 {
		self.error.unwrap_or(self.warning)
	}

	/// `[error, warning]` when an error value is set, otherwise `[warning]`.
	pub fn params(&self) -> Vec<RuleParameter> {
		let mut params = Vec::with_capacity(2);
		if let Some(error) = self.error {
			params.push(RuleParameter::new(Severity::Error, error));
		}
		params.push(RuleParameter::new(Severity::Warning, self.warning));
		params
	}
}

impl RuleConfiguration for SeverityLevels {
	/// A sequence `[warning]` or `[warning, error]` replaces both values.
	/// A mapping with `warning`/`error` keys overwrites only the keys present.
	fn apply_configuration(&mut self, value: &Value) -> Result<(), ConfigurationError> {
		match value {
			Value::Sequence(items) => {
				let levels: Option<Vec<i64>> = items.iter().map(Value::as_integer).collect();
				match levels.as_deref() {
					Some([warning]) => {
						self.warning = *warning;
						self.error = None;
					}
					Some([warning, error]) => {
						self.warning = *warning;
						self.error = Some(*error);
					}
					_ => return Err(ConfigurationError::UnknownConfiguration),
				}
			}
			Value::Mapping(map) => {
				let warning = optional_integer(map, "warning")?;
				let error = optional_integer(map, "error")?;
				if let Some(warning) = warning {
					self.warning = warning;
				}
				if let Some(error) = error {
					self.error = Some(error);
				}
			}
			_ => return Err(ConfigurationError::UnknownConfiguration),
		}
		Ok(())
	}

	fn parameters(&self) -> Vec<RuleParameter> {
		self.params()
	}
}

impl fmt::Display for SeverityLevels {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "warning: {}", self.warning)?;
		if let Some(error) = self.error {
			write!(f, ", error: {}", error)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_params() {
		let levels = SeverityLevels::new(17, Some(7));
		assert_eq!(
			levels.params(),
			vec![
				RuleParameter::new(Severity::Error, 7),
				RuleParameter::new(Severity::Warning, 17)
			]
		);
	}

	#[test]
	fn test_partial_params() {
		let levels = SeverityLevels::new(17, None);
		assert_eq!(
			levels.params(),
			vec![RuleParameter::new(Severity::Warning, 17)]
		);
	}

	#[test]
	fn test_threshold_prefers_error() {
		assert_eq!(SeverityLevels::new(7, Some(17)).threshold(), 17);
		assert_eq!(SeverityLevels::new(17, Some(7)).threshold(), 7);
		assert_eq!(SeverityLevels::new(7, None).threshold(), 7);
	}

	#[test]
	fn test_sequence_replaces_both_values() {
		let mut levels = SeverityLevels::new(0, Some(0));
		levels
			.apply_configuration(&Value::from(vec![100, 120]))
			.unwrap();
		assert_eq!(levels, SeverityLevels::new(100, Some(120)));

		levels.apply_configuration(&Value::from(vec![150])).unwrap();
		assert_eq!(levels, SeverityLevels::new(150, None));
	}

	#[test]
	fn test_mapping_merges_present_keys() {
		let mut levels = SeverityLevels::new(100, Some(200));
		let value: Value = [("warning", 150)].into_iter().collect();
		levels.apply_configuration(&value).unwrap();
		assert_eq!(levels, SeverityLevels::new(150, Some(200)));

		let value: Value = [("error", 300)].into_iter().collect();
		levels.apply_configuration(&value).unwrap();
		assert_eq!(levels, SeverityLevels::new(150, Some(300)));
	}

	#[test]
	fn test_rejects_bad_sequences() {
		let mut levels = SeverityLevels::new(1, Some(2));
		let empty: Vec<i64> = Vec::new();
		assert!(levels.apply_configuration(&Value::from(empty)).is_err());
		assert!(
			levels
				.apply_configuration(&Value::from(vec![1, 2, 3]))
				.is_err()
		);
		assert!(
			levels
				.apply_configuration(&Value::from(vec!["a", "b"]))
				.is_err()
		);
		assert_eq!(levels, SeverityLevels::new(1, Some(2)));
	}

	#[test]
	fn test_rejects_wrong_kind_in_mapping_without_partial_update() {
		let mut levels = SeverityLevels::new(1, Some(2));
		let value = Value::Mapping(
			[
				("warning".to_string(), Value::from(10)),
				("error".to_string(), Value::from("high")),
			]
			.into_iter()
			.collect(),
		);
		assert!(levels.apply_configuration(&value).is_err());
		assert_eq!(levels, SeverityLevels::new(1, Some(2)));
	}

	#[test]
	fn test_rejects_scalar() {
		let mut levels = SeverityLevels::new(1, None);
		assert_eq!(
			levels.apply_configuration(&Value::from("unknown")),
			Err(ConfigurationError::UnknownConfiguration)
		);
		assert!(levels.apply_configuration(&Value::from(1.5)).is_err());
	}

	#[test]
	fn test_display() {
		assert_eq!(
			SeverityLevels::new(120, Some(200)).to_string(),
			"warning: 120, error: 200"
		);
		assert_eq!(SeverityLevels::new(120, None).to_string(), "warning: 120");
	}
}
