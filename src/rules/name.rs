use crate::config::Value;
use crate::config::value::string_set;
use crate::error::ConfigurationError;
use crate::rules::{RuleConfiguration, RuleParameter, SeverityLevels, format_names};
use std::collections::BTreeSet;
use std::fmt;

/// Configuration for identifier and type naming rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameConfiguration {
	pub min_length: SeverityLevels,
	pub max_length: SeverityLevels,
	/// Names exempt from the rule.
	pub excluded: BTreeSet<String>,
}

impl NameConfiguration {
	pub fn new(min_warning: i64, min_error: i64, max_warning: i64, max_error: i64) -> Self {
		Self {
			min_length: SeverityLevels::new(min_warning, Some(min_error)),
			max_length: SeverityLevels::new(max_warning, Some(max_error)),
			excluded: BTreeSet::new(),
		}
	}

	pub fn with_excluded<I, S>(mut self, excluded: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.excluded = excluded.into_iter().map(Into::into).collect();
		self
	}

	pub fn min_length_threshold(&self) -> i64 {
		self.min_length.threshold()
	}

	pub fn max_length_threshold(&self) -> i64 {
		self.max_length.threshold()
	}
}

impl RuleConfiguration for NameConfiguration {
	/// Recognizes `min_length`, `max_length` (merged like [`SeverityLevels`])
	/// and `excluded` (replaced wholesale). Unknown keys are ignored.
	fn apply_configuration(&mut self, value: &Value) -> Result<(), ConfigurationError> {
		let map = value
			.as_mapping()
			.ok_or(ConfigurationError::UnknownConfiguration)?;

		let mut min_length = self.min_length;
		if let Some(raw) = map.get("min_length") {
			min_length.apply_configuration(raw)?;
		}
		let mut max_length = self.max_length;
		if let Some(raw) = map.get("max_length") {
			max_length.apply_configuration(raw)?;
		}
		let excluded = map.get("excluded").map(string_set).transpose()?;

		self.min_length = min_length;
		self.max_length = max_length;
		if let Some(excluded) = excluded {
			self.excluded = excluded;
		}
		Ok(())
	}

	fn parameters(&self) -> Vec<RuleParameter> {
		let mut params = self.min_length.params();
		params.extend(self.max_length.params());
		params
	}
}

impl fmt::Display for NameConfiguration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"min_length: ({}), max_length: ({}), excluded: {}",
			self.min_length,
			self.max_length,
			format_names(&self.excluded)
		)
	}
}
