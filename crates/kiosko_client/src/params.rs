//! Request parameters.
//!
//! Parameters feed two sinks: path-template placeholders and the query
//! string. Values are always carried as strings on the wire, so numeric,
//! boolean, and date-like values are stringified on insertion.

use chrono::{DateTime, NaiveDate, Utc};

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;

/// An ordered set of request parameter values.
///
/// Parameters whose key matches a `{placeholder}` in the endpoint's path
/// template are consumed by substitution; the remainder are appended to the
/// query string in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(&'static str, String)>,
}

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, builder-style.
    pub fn with(mut self, key: &'static str, value: impl IntoParam) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a parameter in place.
    pub fn insert(&mut self, key: &'static str, value: impl IntoParam) {
        self.entries.push((key, value.into_param()));
    }

    /// Removes and returns the value for `key`, if present.
    ///
    /// Used by path substitution so that a value consumed by a placeholder
    /// does not reappear in the query string.
    pub fn take(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterates over the remaining key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Returns `true` when no parameters remain.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Conversion of a parameter value into its wire string.
pub trait IntoParam {
    fn into_param(self) -> String;
}

impl IntoParam for String {
    fn into_param(self) -> String {
        self
    }
}

impl IntoParam for &str {
    fn into_param(self) -> String {
        self.to_string()
    }
}

impl IntoParam for u64 {
    fn into_param(self) -> String {
        self.to_string()
    }
}

impl IntoParam for u32 {
    fn into_param(self) -> String {
        self.to_string()
    }
}

impl IntoParam for i64 {
    fn into_param(self) -> String {
        self.to_string()
    }
}

impl IntoParam for i32 {
    fn into_param(self) -> String {
        self.to_string()
    }
}

impl IntoParam for bool {
    fn into_param(self) -> String {
        self.to_string()
    }
}

impl IntoParam for NaiveDate {
    fn into_param(self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl IntoParam for DateTime<Utc> {
    fn into_param(self) -> String {
        self.to_rfc3339()
    }
}
