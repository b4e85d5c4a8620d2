use crate::config::Value;
use crate::config::value::optional_str;
use crate::error::ConfigurationError;
use crate::rules::{RuleConfiguration, RuleDescription, Severity, SeverityConfiguration};
use regex::Regex;
use std::fmt;

/// Configuration for a user-defined regex rule.
///
/// The identifier is fixed at construction; everything else comes from
/// `apply_configuration`.
#[derive(Debug, Clone)]
pub struct RegexConfiguration {
	identifier: String,
	pub name: Option<String>,
	pub message: Option<String>,
	pub regex: Option<Regex>,
	/// Only files whose path matches are checked.
	pub included: Option<Regex>,
	pub severity: SeverityConfiguration,
}

impl RegexConfiguration {
	pub fn new(identifier: impl Into<String>) -> Self {
		Self {
			identifier: identifier.into(),
			name: None,
			message: None,
			regex: None,
			included: None,
			severity: SeverityConfiguration::new(Severity::Warning),
		}
	}

	pub fn identifier(&self) -> &str {
		&self.identifier
	}

	pub fn description(&self) -> RuleDescription {
		RuleDescription {
			identifier: self.identifier.clone(),
			name: self.name.clone().unwrap_or_else(|| self.identifier.clone()),
			description: self.message.clone().unwrap_or_default(),
		}
	}
}

fn compile(pattern: &str) -> Result<Regex, ConfigurationError> {
	Regex::new(pattern).map_err(|err| {
		log::warn!("invalid regex {:?}: {}", pattern, err);
		ConfigurationError::UnknownConfiguration
	})
}

impl RuleConfiguration for RegexConfiguration {
	/// Requires a mapping with a `regex` string. Optional keys: `name`,
	/// `message`, `included` (path regex) and `severity`.
	fn apply_configuration(&mut self, value: &Value) -> Result<(), ConfigurationError> {
		let map = value
			.as_mapping()
			.ok_or(ConfigurationError::UnknownConfiguration)?;

		let pattern =
			optional_str(map, "regex")?.ok_or(ConfigurationError::UnknownConfiguration)?;
		let regex = compile(pattern)?;
		let included = optional_str(map, "included")?.map(compile).transpose()?;
		let name = optional_str(map, "name")?;
		let message = optional_str(map, "message")?;
		let mut severity = self.severity;
		if let Some(raw) = map.get("severity") {
			severity.apply_configuration(raw)?;
		}

		self.regex = Some(regex);
		if included.is_some() {
			self.included = included;
		}
		if let Some(name) = name {
			self.name = Some(name.to_string());
		}
		if let Some(message) = message {
			self.message = Some(message.to_string());
		}
		self.severity = severity;
		Ok(())
	}
}

impl PartialEq for RegexConfiguration {
	fn eq(&self, other: &Self) -> bool {
		self.identifier == other.identifier
			&& self.name == other.name
			&& self.message == other.message
			&& self.regex.as_ref().map(Regex::as_str) == other.regex.as_ref().map(Regex::as_str)
			&& self.included.as_ref().map(Regex::as_str)
				== other.included.as_ref().map(Regex::as_str)
			&& self.severity == other.severity
	}
}

impl fmt::Display for RegexConfiguration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.severity)?;
		if let Some(ref regex) = self.regex {
			write!(f, ", regex: {}", regex.as_str())?;
		}
		if let Some(ref included) = self.included {
			write!(f, ", included: {}", included.as_str())?;
		}
		Ok(())
	}
}
