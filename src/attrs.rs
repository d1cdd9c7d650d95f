//! Ordered attribute maps for tree nodes.
//!
//! This module provides [`Attributes`], a wrapper around [`IndexMap`] keyed
//! by attribute name, and [`AttrValue`], the small value union attributes
//! take. Insertion order is preserved because it is semantic for list-valued
//! attributes (`classes`, `names`) and keeps serialized trees deterministic.
//!
//! The typed accessors cover the keys the writer reads; everything else
//! rides along untouched.
//!
//! ## Examples
//!
//! ```rust
//! use doctree_rst::{Attributes, AttrValue};
//!
//! let mut attrs = Attributes::new();
//! attrs.insert("bullet", "*");
//! attrs.insert("start", 3);
//! attrs.insert("classes", AttrValue::List(vec!["epigraph".to_string()]));
//!
//! assert_eq!(attrs.bullet(), Some("*"));
//! assert_eq!(attrs.start(), Some(3));
//! assert_eq!(attrs.classes(), ["epigraph".to_string()]);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value of one node attribute.
///
/// Tree producers hand over strings, integers, flags, and string lists;
/// nothing else appears on document nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
}

impl AttrValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Truthiness for marker attributes (`auto`, `anonymous`), which
    /// producers write as `1`, `"1"`, or `true`.
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            AttrValue::Bool(b) => *b,
            AttrValue::Int(i) => *i != 0,
            AttrValue::Str(s) => s == "1",
            AttrValue::List(_) => false,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::List(value)
    }
}

/// An ordered map of attribute names to values.
///
/// # Examples
///
/// ```rust
/// use doctree_rst::Attributes;
///
/// let mut attrs = Attributes::new();
/// attrs.insert("refuri", "https://example.org");
/// attrs.insert("anonymous", 1);
///
/// assert_eq!(attrs.refuri(), Some("https://example.org"));
/// assert!(attrs.flag("anonymous"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, AttrValue>);

impl Attributes {
    /// Creates an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Attributes(IndexMap::new())
    }

    /// Inserts an attribute, returning the previous value if any.
    pub fn insert(&mut self, key: &str, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.0.insert(key.to_string(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the attributes, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, AttrValue> {
        self.0.iter()
    }

    /// The `classes` list, empty when absent.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        self.get("classes").and_then(AttrValue::as_list).unwrap_or(&[])
    }

    /// True when `classes` contains `name`.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.classes().iter().any(|c| c == name)
    }

    /// The first entry of the `names` list, or a plain `names` string.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        match self.get("names")? {
            AttrValue::Str(s) => Some(s),
            AttrValue::List(items) => items.first().map(String::as_str),
            _ => None,
        }
    }

    #[must_use]
    pub fn bullet(&self) -> Option<&str> {
        self.get("bullet").and_then(AttrValue::as_str)
    }

    #[must_use]
    pub fn enumtype(&self) -> Option<&str> {
        self.get("enumtype").and_then(AttrValue::as_str)
    }

    /// The separator between an option and its argument (`=` or a space).
    #[must_use]
    pub fn delimiter(&self) -> Option<&str> {
        self.get("delimiter").and_then(AttrValue::as_str)
    }

    /// The `start` offset of an enumerated list.
    #[must_use]
    pub fn start(&self) -> Option<i64> {
        self.get("start").and_then(AttrValue::as_int)
    }

    #[must_use]
    pub fn refuri(&self) -> Option<&str> {
        self.get("refuri").and_then(AttrValue::as_str)
    }

    #[must_use]
    pub fn refid(&self) -> Option<&str> {
        self.get("refid").and_then(AttrValue::as_str)
    }

    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.get("uri").and_then(AttrValue::as_str)
    }

    #[must_use]
    pub fn colwidth(&self) -> Option<i64> {
        self.get("colwidth").and_then(AttrValue::as_int)
    }

    /// Truthiness of a marker attribute such as `auto` or `anonymous`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).map_or(false, AttrValue::is_set)
    }

    /// True when `xml:space` asks for whitespace preservation.
    #[must_use]
    pub fn preserves_space(&self) -> bool {
        self.get("xml:space").and_then(AttrValue::as_str) == Some("preserve")
    }
}

impl IntoIterator for Attributes {
    type Item = (String, AttrValue);
    type IntoIter = indexmap::map::IntoIter<String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, AttrValue)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (String, AttrValue)>>(iter: T) -> Self {
        Attributes(IndexMap::from_iter(iter))
    }
}
