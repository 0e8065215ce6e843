//! Flattened page order of one navigation version.

use atomdocs_config::{NavNode, Section};

/// Depth-first, source-ordered list of dotted page keys.
///
/// `{index, database: {index, migrations}}` flattens to
/// `[index, database.index, database.migrations]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathIndex {
    keys: Vec<String>,
}

impl PathIndex {
    /// Flatten a navigation section.
    #[must_use]
    pub fn flatten(section: &Section) -> Self {
        let mut keys = Vec::new();
        collect(section, None, &mut keys);
        Self { keys }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Position of `key`, if present.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Key preceding `key` in document order.
    pub fn previous(&self, key: &str) -> Option<&str> {
        let pos = self.position(key)?;
        pos.checked_sub(1)
            .and_then(|i| self.keys.get(i))
            .map(String::as_str)
    }

    /// Key following `key` in document order.
    pub fn next(&self, key: &str) -> Option<&str> {
        let pos = self.position(key)?;
        self.keys.get(pos + 1).map(String::as_str)
    }
}

fn collect(section: &Section, prefix: Option<&str>, keys: &mut Vec<String>) {
    for (key, node) in section.iter() {
        let full = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.to_owned(),
        };
        match node {
            NavNode::Leaf(_) => keys.push(full),
            NavNode::Section(child) => collect(child, Some(&full), keys),
        }
    }
}
