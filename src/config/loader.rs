use crate::config::parser::parse_config_file;
use crate::config::registry::RuleConfigurations;
use crate::config::types::LoadedConfig;
use crate::error::Result;
use std::path::Path;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".lintconf.toml";

/// Load a config file and apply it on top of the built-in defaults.
///
/// Read and parse failures are returned as errors. Rules that fail to apply
/// keep their defaults and are listed in [`LoadedConfig::errors`].
pub fn load_rule_configurations(path: &Path) -> Result<LoadedConfig> {
	let raw = parse_config_file(path)?;

	let mut rules = RuleConfigurations::default();
	let errors = rules.apply(&raw.rule_values());
	if errors.is_empty() {
		log::debug!("applied all rule settings from {}", path.display());
	} else {
		log::warn!(
			"{} rule setting(s) in {} were rejected",
			errors.len(),
			path.display()
		);
	}

	Ok(LoadedConfig {
		rules,
		errors,
		path: path.to_path_buf(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::LintconfError;
	use crate::rules::{Severity, SeverityLevels};
	use std::fs;

	#[test]
	fn test_load_applies_over_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join(CONFIG_FILE_NAME);
		fs::write(
			&path,
			r#"
[rules.line_length]
warning = 100
ignores_urls = true

[rules.overridden_super_call]
severity = "error"
excluded = "*"
included = ["customSetup()"]
"#,
		)
		.unwrap();

		let loaded = load_rule_configurations(&path).unwrap();
		assert!(loaded.is_valid());
		assert_eq!(loaded.path, path);
		assert_eq!(
			loaded.rules.line_length.length,
			SeverityLevels::new(100, Some(200))
		);
		assert!(loaded.rules.line_length.ignores_urls);

		let super_call = &loaded.rules.overridden_super_call;
		assert_eq!(super_call.severity.severity, Severity::Error);
		assert_eq!(super_call.resolved_method_names().len(), 1);
		assert!(super_call.resolved_method_names().contains("customSetup()"));
	}

	#[test]
	fn test_load_collects_rule_errors() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join(CONFIG_FILE_NAME);
		fs::write(
			&path,
			r#"
[rules]
identifier_name = 17
force_cast = "warning"
"#,
		)
		.unwrap();

		let loaded = load_rule_configurations(&path).unwrap();
		assert!(!loaded.is_valid());
		assert_eq!(loaded.errors.len(), 1);
		assert!(matches!(
			&loaded.errors[0],
			LintconfError::InvalidRuleConfiguration { rule, .. } if rule == "identifier_name"
		));
		assert_eq!(loaded.rules.force_cast.severity, Severity::Warning);
	}

	#[test]
	fn test_load_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let result = load_rule_configurations(&dir.path().join(CONFIG_FILE_NAME));
		assert!(matches!(result, Err(LintconfError::ConfigReadError { .. })));
	}
}
