use crate::error::ConfigurationError;
use std::collections::{BTreeMap, BTreeSet};

/// A decoded configuration value, independent of the file format it came from.
///
/// Rule configurations pattern-match on this and reject any shape they do not
/// recognize with [`ConfigurationError::UnknownConfiguration`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	#[default]
	Absent,
	Bool(bool),
	Integer(i64),
	Float(f64),
	String(String),
	Sequence(Vec<Value>),
	Mapping(BTreeMap<String, Value>),
}

impl Value {
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_integer(&self) -> Option<i64> {
		match self {
			Value::Integer(i) => Some(*i),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_sequence(&self) -> Option<&[Value]> {
		match self {
			Value::Sequence(items) => Some(items),
			_ => None,
		}
	}

	pub fn as_mapping(&self) -> Option<&BTreeMap<String, Value>> {
		match self {
			Value::Mapping(map) => Some(map),
			_ => None,
		}
	}

	/// Short name of this value's shape, for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Absent => "absent",
			Value::Bool(_) => "boolean",
			Value::Integer(_) => "integer",
			Value::Float(_) => "float",
			Value::String(_) => "string",
			Value::Sequence(_) => "sequence",
			Value::Mapping(_) => "mapping",
		}
	}
}

/// Read a boolean from `map[key]`.
///
/// Absent keys yield `Ok(None)`; a present key of any other kind is an error.
pub(crate) fn optional_bool(
	map: &BTreeMap<String, Value>,
	key: &str,
) -> Result<Option<bool>, ConfigurationError> {
	map.get(key)
		.map(|v| v.as_bool().ok_or(ConfigurationError::UnknownConfiguration))
		.transpose()
}

/// Read an integer from `map[key]`, with the same rules as [`optional_bool`].
pub(crate) fn optional_integer(
	map: &BTreeMap<String, Value>,
	key: &str,
) -> Result<Option<i64>, ConfigurationError> {
	map.get(key)
		.map(|v| v.as_integer().ok_or(ConfigurationError::UnknownConfiguration))
		.transpose()
}

/// Read a string from `map[key]`, with the same rules as [`optional_bool`].
pub(crate) fn optional_str<'a>(
	map: &'a BTreeMap<String, Value>,
	key: &str,
) -> Result<Option<&'a str>, ConfigurationError> {
	map.get(key)
		.map(|v| v.as_str().ok_or(ConfigurationError::UnknownConfiguration))
		.transpose()
}

/// Interpret a value as a set of names: either a single string or a sequence of strings.
pub fn string_set(value: &Value) -> Result<BTreeSet<String>, ConfigurationError> {
	match value {
		Value::String(s) => Ok(BTreeSet::from([s.clone()])),
		Value::Sequence(items) => items
			.iter()
			.map(|item| {
				item.as_str()
					.map(str::to_string)
					.ok_or(ConfigurationError::UnknownConfiguration)
			})
			.collect(),
		_ => Err(ConfigurationError::UnknownConfiguration),
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Bool(b)
	}
}

impl From<i32> for Value {
	fn from(i: i32) -> Self {
		Value::Integer(i64::from(i))
	}
}

impl From<i64> for Value {
	fn from(i: i64) -> Self {
		Value::Integer(i)
	}
}

impl From<f64> for Value {
	fn from(f: f64) -> Self {
		Value::Float(f)
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::String(s.to_string())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::String(s)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Value::Sequence(items.into_iter().map(Into::into).collect())
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Value::Mapping(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

impl From<toml::Value> for Value {
	fn from(value: toml::Value) -> Self {
		match value {
			toml::Value::String(s) => Value::String(s),
			toml::Value::Integer(i) => Value::Integer(i),
			toml::Value::Float(f) => Value::Float(f),
			toml::Value::Boolean(b) => Value::Bool(b),
			toml::Value::Datetime(dt) => Value::String(dt.to_string()),
			toml::Value::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
			toml::Value::Table(table) => Value::Mapping(
				table
					.into_iter()
					.map(|(k, v)| (k, Value::from(v)))
					.collect(),
			),
		}
	}
}
