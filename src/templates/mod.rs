//! Flat `{{{key}}}` templates
//!
//! A template is plain HTML with triple-brace placeholders. Rendering is a
//! single find-and-replace pass: no escaping, no logic, and substituted
//! text is never scanned again.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{\{(.*?)\}\}\}").unwrap();
}

/// Values available to a template, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: IndexMap<String, String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under `key`, replacing any previous one
    pub fn insert<K: Into<String>, V: ToString>(&mut self, key: K, value: V) {
        self.values.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Context::new();
        for (key, value) in iter {
            context.insert(key, value);
        }
        context
    }
}

/// Substitute every `{{{ key }}}` in `template`
///
/// Keys are trimmed; unknown keys become empty.
pub fn render(template: &str, context: &Context) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            context.get(caps[1].trim()).unwrap_or("").to_string()
        })
        .into_owned()
}
