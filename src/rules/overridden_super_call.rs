use crate::config::Value;
use crate::config::value::string_set;
use crate::error::ConfigurationError;
use crate::rules::{RuleConfiguration, Severity, SeverityConfiguration, format_names};
use std::collections::BTreeSet;
use std::fmt;

/// Matches every default method name in `excluded`; ignored in `included`.
pub const WILDCARD: &str = "*";

/// Method signatures whose overrides are expected to call `super`.
pub const DEFAULT_METHOD_NAMES: &[&str] = &[
	// NSObject
	"awakeFromNib()",
	"prepareForInterfaceBuilder()",
	// UICollectionViewLayout
	"invalidateLayout()",
	"invalidateLayout(with:)",
	"invalidateLayoutWithContext(_:)",
	// UIView
	"prepareForReuse()",
	"updateConstraints()",
	// UIViewController
	"addChildViewController(_:)",
	"decodeRestorableState(with:)",
	"decodeRestorableStateWithCoder(_:)",
	"didReceiveMemoryWarning()",
	"encodeRestorableState(with:)",
	"encodeRestorableStateWithCoder(_:)",
	"removeFromParentViewController()",
	"setEditing(_:animated:)",
	"transition(from:to:duration:options:animations:completion:)",
	"transitionCoordinator()",
	"transitionFromViewController(_:toViewController:duration:options:animations:completion:)",
	"viewDidAppear(_:)",
	"viewDidDisappear(_:)",
	"viewDidLoad()",
	"viewWillAppear(_:)",
	"viewWillDisappear(_:)",
	// XCTestCase
	"setUp()",
	"setUpWithError()",
	"tearDown()",
	"tearDownWithError()",
];

/// Configuration for the overridden super call rule.
///
/// `resolved_method_names` is derived from the defaults, `excluded` and
/// `included`, and recomputed in full on every successful apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverriddenSuperCallConfiguration {
	pub severity: SeverityConfiguration,
	pub excluded: BTreeSet<String>,
	pub included: BTreeSet<String>,
	resolved_method_names: BTreeSet<String>,
}

impl Default for OverriddenSuperCallConfiguration {
	fn default() -> Self {
		let excluded = BTreeSet::new();
		let included = BTreeSet::from([WILDCARD.to_string()]);
		Self {
			severity: SeverityConfiguration::new(Severity::Warning),
			resolved_method_names: resolve_method_names(&excluded, &included),
			excluded,
			included,
		}
	}
}

impl OverriddenSuperCallConfiguration {
	pub fn resolved_method_names(&self) -> &BTreeSet<String> {
		&self.resolved_method_names
	}
}

/// Defaults minus `excluded` (or none of them if `excluded` has the
/// wildcard), plus every non-wildcard name in `included`.
fn resolve_method_names(
	excluded: &BTreeSet<String>,
	included: &BTreeSet<String>,
) -> BTreeSet<String> {
	let mut names: BTreeSet<String> = if excluded.contains(WILDCARD) {
		BTreeSet::new()
	} else {
		DEFAULT_METHOD_NAMES
			.iter()
			.filter(|name| !excluded.contains(**name))
			.map(|name| name.to_string())
			.collect()
	};

	names.extend(
		included
			.iter()
			.filter(|name| name.as_str() != WILDCARD)
			.cloned(),
	);
	names
}

impl RuleConfiguration for OverriddenSuperCallConfiguration {
	/// Recognizes `severity`, `excluded` and `included`. The name lists
	/// accept a string or a sequence of strings and replace the previous list.
	fn apply_configuration(&mut self, value: &Value) -> Result<(), ConfigurationError> {
		let map = value
			.as_mapping()
			.ok_or(ConfigurationError::UnknownConfiguration)?;

		let mut severity = self.severity;
		if let Some(raw) = map.get("severity") {
			severity.apply_configuration(raw)?;
		}
		let excluded = map.get("excluded").map(string_set).transpose()?;
		let included = map.get("included").map(string_set).transpose()?;

		self.severity = severity;
		if let Some(excluded) = excluded {
			self.excluded = excluded;
		}
		if let Some(included) = included {
			self.included = included;
		}
		self.resolved_method_names = resolve_method_names(&self.excluded, &self.included);
		Ok(())
	}
}

impl fmt::Display for OverriddenSuperCallConfiguration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}, excluded: {}, included: {}",
			self.severity,
			format_names(&self.excluded),
			format_names(&self.included)
		)
	}
}
