use crate::config::types::RawConfig;
use crate::error::{LintconfError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<RawConfig> {
	let content =
		std::fs::read_to_string(path).map_err(|source| LintconfError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<RawConfig> {
	let config: RawConfig =
		toml::from_str(content).map_err(|source| LintconfError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	log::debug!(
		"parsed {} rule entries from {}",
		config.rules.len(),
		path.display()
	);

	Ok(config)
}
