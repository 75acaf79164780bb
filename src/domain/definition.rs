//! Definitions parsed from a TOML file.
//!
//! Keys keep document order so substring matches are reported in the order
//! they appear in the file.

use std::fmt;

use indexmap::IndexMap;

use super::MatchPolicy;

/// A single definition value.
#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Datetime(String),
    Array(Vec<DefinitionValue>),
    Table(DefinitionMap),
}

impl DefinitionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DefinitionValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&DefinitionMap> {
        match self {
            DefinitionValue::Table(table) => Some(table),
            _ => None,
        }
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionValue::String(value) => write!(f, "{value:?}"),
            other => write!(f, "{other}"),
        }
    }
}

/// Floats render the way TOML writes them, so `3.0` never reads as an integer.
fn fmt_float(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_nan() {
        write!(f, "nan")
    } else if value.is_infinite() {
        write!(f, "{}inf", if value < 0.0 { "-" } else { "" })
    } else if value.fract() == 0.0 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}

impl fmt::Display for DefinitionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionValue::String(value) => write!(f, "{value}"),
            DefinitionValue::Integer(value) => write!(f, "{value}"),
            DefinitionValue::Float(value) => fmt_float(*value, f),
            DefinitionValue::Boolean(value) => write!(f, "{value}"),
            DefinitionValue::Datetime(value) => write!(f, "{value}"),
            DefinitionValue::Array(items) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                write!(f, "]")
            }
            DefinitionValue::Table(table) => write!(f, "{table}"),
        }
    }
}

impl From<toml::Value> for DefinitionValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(value) => DefinitionValue::String(value),
            toml::Value::Integer(value) => DefinitionValue::Integer(value),
            toml::Value::Float(value) => DefinitionValue::Float(value),
            toml::Value::Boolean(value) => DefinitionValue::Boolean(value),
            toml::Value::Datetime(value) => DefinitionValue::Datetime(value.to_string()),
            toml::Value::Array(items) => {
                DefinitionValue::Array(items.into_iter().map(DefinitionValue::from).collect())
            }
            toml::Value::Table(table) => DefinitionValue::Table(DefinitionMap::from(table)),
        }
    }
}

/// Ordered mapping from definition keys to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefinitionMap {
    entries: IndexMap<String, DefinitionValue>,
}

impl DefinitionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML document content into a definition map.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = content.parse()?;
        Ok(Self::from(table))
    }

    pub fn get(&self, key: &str) -> Option<&DefinitionValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DefinitionValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Resolve a query against the keys.
    ///
    /// Exact lookups yield at most one entry. Substring lookups yield every key
    /// containing `query`, in document order.
    pub fn lookup(&self, query: &str, policy: MatchPolicy) -> Vec<(&str, &DefinitionValue)> {
        match policy {
            MatchPolicy::Exact => self
                .entries
                .get_key_value(query)
                .map(|(key, value)| (key.as_str(), value))
                .into_iter()
                .collect(),
            MatchPolicy::Substring => {
                self.iter().filter(|(key, _)| policy.matches(key, query)).collect()
            }
        }
    }
}

impl From<toml::Table> for DefinitionMap {
    fn from(table: toml::Table) -> Self {
        table.into_iter().map(|(key, value)| (key, DefinitionValue::from(value))).collect()
    }
}

impl FromIterator<(String, DefinitionValue)> for DefinitionMap {
    fn from_iter<I: IntoIterator<Item = (String, DefinitionValue)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl fmt::Display for DefinitionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{ ")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key} = ")?;
            value.fmt_nested(f)?;
        }
        write!(f, " }}")
    }
}
