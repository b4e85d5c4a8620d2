//! Configuration values and loading for lintconf.
//!
//! This module handles:
//! - The format-independent [`Value`] model rule configurations consume
//! - TOML config file parsing
//! - Applying raw settings to the full set of rule configurations

pub mod loader;
pub mod parser;
pub mod registry;
pub mod template;
pub mod types;
pub mod value;

pub use loader::{CONFIG_FILE_NAME, load_rule_configurations};
pub use parser::{parse_config_file, parse_config_str};
pub use registry::{RuleConfigurations, RuleSummary};
pub use template::generate_init_template;
pub use types::{LoadedConfig, RawConfig};
pub use value::{Value, string_set};
