use crate::config::value::Value;
use crate::error::{ConfigurationError, LintconfError};
use crate::rules::{
	LineLengthConfiguration, NameConfiguration, OverriddenSuperCallConfiguration,
	RegexConfiguration, RuleConfiguration, RuleParameter, Severity, SeverityConfiguration,
	TrailingWhitespaceConfiguration,
};
use std::collections::BTreeMap;

/// Effective configuration of one rule, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSummary {
	pub identifier: String,
	pub description: String,
	pub parameters: Vec<RuleParameter>,
}

/// Configurations for every built-in rule, plus user-defined regex rules.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleConfigurations {
	pub line_length: LineLengthConfiguration,
	pub identifier_name: NameConfiguration,
	pub type_name: NameConfiguration,
	pub force_cast: SeverityConfiguration,
	pub force_try: SeverityConfiguration,
	pub trailing_whitespace: TrailingWhitespaceConfiguration,
	pub overridden_super_call: OverriddenSuperCallConfiguration,
	pub custom_rules: BTreeMap<String, RegexConfiguration>,
}

impl Default for RuleConfigurations {
	fn default() -> Self {
		Self {
			line_length: LineLengthConfiguration::default(),
			identifier_name: NameConfiguration::new(3, 2, 40, 60),
			type_name: NameConfiguration::new(3, 0, 40, 1000),
			force_cast: SeverityConfiguration::new(Severity::Error),
			force_try: SeverityConfiguration::new(Severity::Error),
			trailing_whitespace: TrailingWhitespaceConfiguration::default(),
			overridden_super_call: OverriddenSuperCallConfiguration::default(),
			custom_rules: BTreeMap::new(),
		}
	}
}

/// Apply `value` to one rule, attaching the rule identifier to any failure.
fn configure<C: RuleConfiguration>(
	identifier: &str,
	config: &mut C,
	value: &Value,
) -> Result<(), LintconfError> {
	match config.apply_configuration(value) {
		Ok(()) => {
			log::debug!("configured {}: {}", identifier, config);
			Ok(())
		}
		Err(source) => {
			log::warn!(
				"rejected {} configuration for {}; keeping {}",
				value.kind(),
				identifier,
				config
			);
			Err(LintconfError::InvalidRuleConfiguration {
				rule: identifier.to_string(),
				source,
			})
		}
	}
}

fn summarize<C: RuleConfiguration>(identifier: &str, config: &C) -> RuleSummary {
	RuleSummary {
		identifier: identifier.to_string(),
		description: config.to_string(),
		parameters: config.parameters(),
	}
}

impl RuleConfigurations {
	/// Apply raw settings keyed by rule identifier.
	///
	/// A rule that fails (or an unknown identifier) is reported and skipped;
	/// the remaining rules are still configured.
	pub fn apply(&mut self, rules: &BTreeMap<String, Value>) -> Vec<LintconfError> {
		let mut errors = Vec::new();

		for (identifier, value) in rules {
			let result = match identifier.as_str() {
				"line_length" => configure(identifier, &mut self.line_length, value),
				"identifier_name" => configure(identifier, &mut self.identifier_name, value),
				"type_name" => configure(identifier, &mut self.type_name, value),
				"force_cast" => configure(identifier, &mut self.force_cast, value),
				"force_try" => configure(identifier, &mut self.force_try, value),
				"trailing_whitespace" => {
					configure(identifier, &mut self.trailing_whitespace, value)
				}
				"overridden_super_call" => {
					configure(identifier, &mut self.overridden_super_call, value)
				}
				"custom_rules" => {
					errors.extend(self.apply_custom_rules(value));
					continue;
				}
				_ => {
					log::warn!("unknown rule: {}", identifier);
					Err(LintconfError::UnknownRule {
						rule: identifier.clone(),
					})
				}
			};

			if let Err(e) = result {
				errors.push(e);
			}
		}

		errors
	}

	/// Each entry of the `custom_rules` mapping defines one regex rule.
	fn apply_custom_rules(&mut self, value: &Value) -> Vec<LintconfError> {
		let Some(entries) = value.as_mapping() else {
			log::warn!("custom_rules must be a mapping, got {}", value.kind());
			return vec![LintconfError::InvalidRuleConfiguration {
				rule: "custom_rules".to_string(),
				source: ConfigurationError::UnknownConfiguration,
			}];
		};

		let mut errors = Vec::new();
		for (identifier, raw) in entries {
			let mut config = RegexConfiguration::new(identifier.clone());
			match configure(identifier, &mut config, raw) {
				Ok(()) => {
					self.custom_rules.insert(identifier.clone(), config);
				}
				Err(e) => errors.push(e),
			}
		}
		errors
	}

	/// Effective configuration of every rule, built-ins first.
	pub fn summaries(&self) -> Vec<RuleSummary> {
		let mut summaries = vec![
			summarize("line_length", &self.line_length),
			summarize("identifier_name", &self.identifier_name),
			summarize("type_name", &self.type_name),
			summarize("force_cast", &self.force_cast),
			summarize("force_try", &self.force_try),
			summarize("trailing_whitespace", &self.trailing_whitespace),
			summarize("overridden_super_call", &self.overridden_super_call),
		];
		summaries.extend(
			self.custom_rules
				.iter()
				.map(|(identifier, config)| summarize(identifier, config)),
		);
		summaries
	}
}
