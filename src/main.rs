use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use lintconf::config::{
	CONFIG_FILE_NAME, RuleConfigurations, RuleSummary, generate_init_template,
	load_rule_configurations,
};

#[derive(Parser)]
#[command(name = "lintconf")]
#[command(
	author,
	version,
	about = "Inspect and validate rule configurations for a source linter"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Create a template .lintconf.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .lintconf.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Enable debug logging (RUST_LOG takes precedence)
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display every rule's effective configuration
	Show {
		/// Config file to load
		#[arg(long, default_value = CONFIG_FILE_NAME)]
		config: PathBuf,
	},
	/// Check the config file for errors without printing the result
	Validate {
		/// Config file to load
		#[arg(long, default_value = CONFIG_FILE_NAME)]
		config: PathBuf,
	},
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(verbose: bool) {
	let default_filter = if verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
		.format_timestamp(None)
		.init();
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show { config } => handle_config_show(&config),
				ConfigAction::Validate { config } => handle_config_validate(&config),
			},
		};
	}

	// No command specified - this shouldn't happen due to arg_required_else_help
	Ok(ExitCode::SUCCESS)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn print_summaries(summaries: &[RuleSummary]) {
	for summary in summaries {
		println!("{}:", summary.identifier);
		println!("    {}", summary.description);
		if !summary.parameters.is_empty() {
			let params: Vec<String> = summary.parameters.iter().map(ToString::to_string).collect();
			println!("    parameters: {}", params.join(", "));
		}
	}
}

fn handle_config_show(path: &Path) -> Result<ExitCode> {
	if !path.exists() {
		println!("No configuration file found, showing defaults.\n");
		print_summaries(&RuleConfigurations::default().summaries());
		return Ok(ExitCode::SUCCESS);
	}

	let loaded = load_rule_configurations(path)
		.with_context(|| format!("Failed to load {}", path.display()))?;

	println!("# Source: {}\n", loaded.path.display());
	print_summaries(&loaded.rules.summaries());

	for e in loaded.errors {
		eprintln!("warning: {:#}", anyhow::Error::from(e));
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(path: &Path) -> Result<ExitCode> {
	if !path.exists() {
		println!("No configuration file found: {}", path.display());
		return Ok(ExitCode::SUCCESS);
	}

	match load_rule_configurations(path) {
		Ok(loaded) if loaded.is_valid() => {
			println!(
				"Configuration is valid: {} ({} rules)",
				loaded.path.display(),
				loaded.rules.summaries().len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Ok(loaded) => {
			eprintln!("Configuration errors in {}:", loaded.path.display());
			for e in loaded.errors {
				eprintln!("  {:#}", anyhow::Error::from(e));
			}
			Ok(ExitCode::FAILURE)
		}
		Err(e) => {
			eprintln!("Configuration error: {:#}", anyhow::Error::from(e));
			Ok(ExitCode::FAILURE)
		}
	}
}
