use crate::config::registry::RuleConfigurations;
use crate::config::value::Value;
use crate::error::LintconfError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level contents of a `.lintconf.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RawConfig {
	/// Raw per-rule settings, keyed by rule identifier.
	#[serde(default)]
	pub rules: BTreeMap<String, toml::Value>,
}

impl RawConfig {
	/// Convert every rule's raw TOML into a format-independent [`Value`].
	pub fn rule_values(&self) -> BTreeMap<String, Value> {
		self.rules
			.iter()
			.map(|(id, raw)| (id.clone(), Value::from(raw.clone())))
			.collect()
	}
}

/// Rule configurations loaded from a file, plus the rules that failed to apply.
#[derive(Debug)]
pub struct LoadedConfig {
	/// Effective configurations; failed rules keep their defaults.
	pub rules: RuleConfigurations,

	/// One entry per rejected or unknown rule.
	pub errors: Vec<LintconfError>,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

impl LoadedConfig {
	pub fn is_valid(&self) -> bool {
		self.errors.is_empty()
	}
}
