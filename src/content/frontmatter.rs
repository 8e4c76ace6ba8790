//! Front-matter parsing

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::Error as _;
use serde_yaml::{Mapping, Value};

lazy_static! {
    /// `---` line, YAML block, `---` line
    static ref YAML_BLOCK: Regex = Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n").unwrap();
    /// Loose variant used when the YAML itself is not needed
    static ref LOOSE_BLOCK: Regex = Regex::new(r"\A---[\s\S]*?---\s*").unwrap();
}

/// Front-matter data from a post: a plain YAML mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub fields: Mapping,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Content without a leading `---` block is returned whole with an
    /// empty mapping. An empty block is an empty mapping; any other
    /// non-mapping document is an error.
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let Some(caps) = YAML_BLOCK.captures(content) else {
            return Ok((FrontMatter::default(), content));
        };

        let yaml = caps.get(1).map_or("", |m| m.as_str());
        let body = &content[caps.get(0).map_or(0, |m| m.end())..];

        let fields = match serde_yaml::from_str::<Value>(yaml)? {
            Value::Null => Mapping::new(),
            Value::Mapping(map) => map,
            other => {
                return Err(serde_yaml::Error::custom(format!(
                    "expected a mapping, found {}",
                    kind_of(&other)
                )))
            }
        };

        Ok((FrontMatter { fields }, body))
    }

    /// Drop a leading `---…---` block without interpreting it
    pub fn strip(content: &str) -> &str {
        match LOOSE_BLOCK.find(content) {
            Some(m) => &content[m.end()..],
            None => content,
        }
    }

    /// Raw value of a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Text form of a top-level key; absent or null is empty
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(value_to_text).unwrap_or_default()
    }

    /// `cover.image`, when `cover` is a mapping
    pub fn cover_image(&self) -> String {
        match self.get("cover") {
            Some(Value::Mapping(cover)) => cover.get("image").map(value_to_text).unwrap_or_default(),
            _ => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Convert a YAML value to the text substituted into templates
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => value_to_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => serde_yaml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
