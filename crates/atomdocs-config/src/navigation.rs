//! Versioned navigation tree.
//!
//! The tree is read from the `[navigation]` table of `atomdocs.toml`:
//!
//! ```toml
//! [navigation.beta]
//! index = "Introduction"
//! routing = "Routing"
//! database = { index = "Database", migrations = "Migrations" }
//! faq = "FAQ"
//! ```
//!
//! Entry order is significant: it is the reading order of the documentation and
//! drives previous/next pagination. Sections should be written as inline
//! tables so they keep their position among their siblings. A section holds
//! pages only; sections inside sections are rejected by validation.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// A node in the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavNode {
    /// A page, with its display label.
    Leaf(String),
    /// A group of child pages.
    Section(Section),
}

/// Ordered list of navigation entries at one level of the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    entries: Vec<(String, NavNode)>,
}

impl Section {
    /// Create an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page entry.
    #[must_use]
    pub fn with_leaf(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.entries.push((key.into(), NavNode::Leaf(label.into())));
        self
    }

    /// Append a nested section.
    #[must_use]
    pub fn with_section(mut self, key: impl Into<String>, section: Section) -> Self {
        self.entries.push((key.into(), NavNode::Section(section)));
        self
    }

    /// Look up a direct child by key.
    pub fn get(&self, key: &str) -> Option<&NavNode> {
        self.entries
            .iter()
            .find_map(|(k, node)| (k == key).then_some(node))
    }

    /// Iterate entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NavNode)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the section has no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pages are addressed by at most two URL segments, so a section may
    /// only contain leaves.
    fn validate(&self, scope: &str, nested: bool) -> Result<(), String> {
        for (i, (key, node)) in self.entries.iter().enumerate() {
            validate_key(key, scope)?;
            if self.entries[..i].iter().any(|(k, _)| k == key) {
                return Err(format!("{scope}: duplicate key \"{key}\""));
            }
            if let NavNode::Section(section) = node {
                if nested {
                    return Err(format!(
                        "{scope}.{key}: sections cannot be nested inside a section"
                    ));
                }
                section.validate(&format!("{scope}.{key}"), true)?;
            }
        }
        Ok(())
    }
}

/// Navigation for every documentation version, in configured order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationTree {
    versions: Vec<(String, Section)>,
}

impl NavigationTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the navigation for a version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>, section: Section) -> Self {
        self.versions.push((version.into(), section));
        self
    }

    /// Top-level section for a version.
    pub fn get(&self, version: &str) -> Option<&Section> {
        self.versions
            .iter()
            .find_map(|(v, section)| (v == version).then_some(section))
    }

    /// Version names in configured order.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(|(v, _)| v.as_str())
    }

    /// Iterate `(version, section)` pairs in configured order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.versions.iter().map(|(v, section)| (v.as_str(), section))
    }

    /// Whether no version is configured.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Check key syntax and uniqueness at every level.
    ///
    /// Returns a message naming the offending `navigation.*` path.
    pub fn validate(&self) -> Result<(), String> {
        for (i, (version, section)) in self.versions.iter().enumerate() {
            validate_key(version, "navigation")?;
            if self.versions[..i].iter().any(|(v, _)| v == version) {
                return Err(format!("navigation: duplicate version \"{version}\""));
            }
            section.validate(&format!("navigation.{version}"), false)?;
        }
        Ok(())
    }
}

/// Keys become page-key segments (`.`) and URL segments (`/`).
fn validate_key(key: &str, scope: &str) -> Result<(), String> {
    if key.is_empty() {
        return Err(format!("{scope}: keys cannot be empty"));
    }
    if let Some(c) = key.chars().find(|c| matches!(c, '.' | '/')) {
        return Err(format!("{scope}: key \"{key}\" must not contain '{c}'"));
    }
    Ok(())
}

impl<'de> Deserialize<'de> for NavNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = NavNode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a page label or a table of child pages")
            }

            fn visit_str<E: de::Error>(self, label: &str) -> Result<NavNode, E> {
                Ok(NavNode::Leaf(label.to_owned()))
            }

            fn visit_string<E: de::Error>(self, label: String) -> Result<NavNode, E> {
                Ok(NavNode::Leaf(label))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<NavNode, A::Error> {
                SectionVisitor.visit_map(map).map(NavNode::Section)
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

struct SectionVisitor;

impl<'de> Visitor<'de> for SectionVisitor {
    type Value = Section;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a table of navigation entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Section, A::Error> {
        let mut entries: Vec<(String, NavNode)> = Vec::new();
        while let Some((key, node)) = map.next_entry::<String, NavNode>()? {
            if entries.iter().any(|(k, _)| *k == key) {
                return Err(de::Error::custom(format!(
                    "duplicate navigation key \"{key}\""
                )));
            }
            entries.push((key, node));
        }
        Ok(Section { entries })
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SectionVisitor)
    }
}

impl<'de> Deserialize<'de> for NavigationTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TreeVisitor;

        impl<'de> Visitor<'de> for TreeVisitor {
            type Value = NavigationTree;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of versions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<NavigationTree, A::Error> {
                let mut versions: Vec<(String, Section)> = Vec::new();
                while let Some((version, section)) = map.next_entry::<String, Section>()? {
                    if versions.iter().any(|(v, _)| *v == version) {
                        return Err(de::Error::custom(format!(
                            "duplicate navigation version \"{version}\""
                        )));
                    }
                    versions.push((version, section));
                }
                Ok(NavigationTree { versions })
            }
        }

        deserializer.deserialize_map(TreeVisitor)
    }
}

impl Serialize for NavNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf(label) => serializer.serialize_str(label),
            Self::Section(section) => section.serialize(serializer),
        }
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

impl Serialize for NavigationTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.versions.len()))?;
        for (version, section) in &self.versions {
            map.serialize_entry(version, section)?;
        }
        map.end()
    }
}
