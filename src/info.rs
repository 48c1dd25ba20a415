//! Info-Tag codec
//!
//! An `error-info` element carries protocol or data-model specific content as
//! namespace-qualified leaves. In XML the namespace is an XML namespace; in
//! JSON (RFC7951) the leaf name is prefixed with the module name that owns the
//! namespace, so `{"ietf-yang:non-unique": "/a/b"}`.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{module_for_namespace, namespace_for_module};

/// One `error-info` leaf
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InfoTag {
    /// XML namespace, empty for base protocol leaves
    pub namespace: String,
    /// Local element name
    pub name: String,
    /// Text content
    pub value: String,
}

impl InfoTag {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            value: value.into(),
        }
    }

    /// Leaf in no namespace, as used by the base protocol errors
    pub fn local(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(String::new(), name, value)
    }

    /// RFC7951 member name: `module:name`, or just `name` without a namespace
    pub fn json_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}:{}", module_for_namespace(&self.namespace), self.name)
        }
    }

    /// Inverse of [`InfoTag::json_name`]. Unknown module prefixes are kept
    /// as the namespace verbatim.
    ///
    /// The member is split at its first `:`, so names that contain `:` do
    /// not survive JSON: a namespace-less `a:b` comes back as name `b` in
    /// namespace `a`, and an unknown namespace containing `:` is cut short.
    pub fn from_json_name(member: &str, value: impl Into<String>) -> Self {
        match member.split_once(':') {
            Some((module, name)) => Self::new(namespace_for_module(module), name, value),
            None => Self::local(member, value),
        }
    }
}

impl Serialize for InfoTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.json_name(), &self.value)?;
        map.end()
    }
}

struct InfoTagVisitor;

impl<'de> Visitor<'de> for InfoTagVisitor {
    type Value = InfoTag;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with exactly one string member")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<InfoTag, A::Error> {
        let mut tag = None;
        let mut count = 0usize;
        while let Some((member, value)) = map.next_entry::<String, String>()? {
            count += 1;
            tag = Some(InfoTag::from_json_name(&member, value));
        }
        match tag {
            Some(tag) if count == 1 => Ok(tag),
            _ => Err(de::Error::custom(format!(
                "malformed error-info tag: {count} members"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for InfoTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(InfoTagVisitor)
    }
}

/// Ordered `error-info` content. Order and multiplicity are significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorInfo(Vec<InfoTag>);

static EMPTY_INFO: ErrorInfo = ErrorInfo(Vec::new());

impl ErrorInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared empty content, for [`Formattable`](crate::Formattable)
    /// implementations that carry no `error-info`
    pub fn empty() -> &'static ErrorInfo {
        &EMPTY_INFO
    }

    pub fn push(&mut self, tag: InfoTag) {
        self.0.push(tag);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InfoTag> {
        self.0.get(index)
    }

    pub fn first(&self) -> Option<&InfoTag> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InfoTag> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[InfoTag] {
        &self.0
    }

    /// Value of the first leaf with this namespace and name
    pub fn find(&self, namespace: &str, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|t| t.namespace == namespace && t.name == name)
            .map(|t| t.value.as_str())
    }
}

impl From<Vec<InfoTag>> for ErrorInfo {
    fn from(tags: Vec<InfoTag>) -> Self {
        Self(tags)
    }
}

impl FromIterator<InfoTag> for ErrorInfo {
    fn from_iter<I: IntoIterator<Item = InfoTag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ErrorInfo {
    type Item = InfoTag;
    type IntoIter = std::vec::IntoIter<InfoTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorInfo {
    type Item = &'a InfoTag;
    type IntoIter = std::slice::Iter<'a, InfoTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
