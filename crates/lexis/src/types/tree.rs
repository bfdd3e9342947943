use std::{fmt, mem};

use serde::de::{Deserialize, Deserializer, Error as DeError, MapAccess, Visitor};

use crate::types::PluralSet;

/// A value stored under one key of a [`TranslationTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    /// A plain translated string.
    Text(String),

    /// Plural forms keyed by range specifier.
    Plural(PluralSet),

    /// A nested tree.
    Branch(TranslationTree),
}

impl TranslationNode {
    /// Build a node from the entries of a nested mapping.
    ///
    /// A non-empty mapping whose values are all strings becomes a
    /// [`TranslationNode::Plural`]; anything else becomes a branch. Later
    /// duplicates of a key replace earlier ones.
    pub fn from_entries(entries: Vec<(String, TranslationNode)>) -> Self {
        let tree = TranslationTree::from_entries(entries);
        if tree.is_empty() {
            return TranslationNode::Branch(tree);
        }
        let all_text = tree
            .iter()
            .all(|(_, node)| matches!(node, TranslationNode::Text(_)));
        if !all_text {
            return TranslationNode::Branch(tree);
        }

        let mut set = PluralSet::new();
        for (key, node) in tree.entries {
            if let TranslationNode::Text(text) = node {
                set.insert(key, text);
            }
        }
        TranslationNode::Plural(set)
    }

    fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            TranslationNode::Text(text) => NodeRef::Text(text),
            TranslationNode::Plural(set) => NodeRef::Plural(set),
            TranslationNode::Branch(tree) => NodeRef::Branch(tree),
        }
    }
}

/// A borrowed view of whatever a path resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Text(&'a str),
    Plural(&'a PluralSet),
    Branch(&'a TranslationTree),
}

/// An ordered mapping from key to [`TranslationNode`].
///
/// Keys are unique. Inserting an existing key replaces its value but keeps
/// the original position.
///
/// # Example
///
/// ```
/// use lexis::{NodeRef, TranslationNode, TranslationTree};
///
/// let tree: TranslationTree = serde_json::from_str(
///     r#"{ "errors": { "notfound": "Not found", "forbidden": "Forbidden" } }"#,
/// ).unwrap();
///
/// assert_eq!(tree.resolve("errors.notfound", '.'), Some(NodeRef::Text("Not found")));
/// assert!(matches!(tree.get("errors"), Some(TranslationNode::Plural(_))));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTree {
    entries: Vec<(String, TranslationNode)>,
}

impl TranslationTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from entries in order. Later duplicates replace earlier ones.
    pub fn from_entries(entries: Vec<(String, TranslationNode)>) -> Self {
        let mut tree = TranslationTree::new();
        for (key, node) in entries {
            tree.insert(key, node);
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the node stored directly under `key`.
    pub fn get(&self, key: &str) -> Option<&TranslationNode> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert a node, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        node: TranslationNode,
    ) -> Option<TranslationNode> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(mem::replace(existing, node)),
            None => {
                self.entries.push((key, node));
                None
            }
        }
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Follow `path`, split on `separator`, down the tree.
    ///
    /// Stepping into a plural set by specifier yields that form's text.
    pub fn resolve(&self, path: &str, separator: char) -> Option<NodeRef<'_>> {
        let mut current = NodeRef::Branch(self);
        for segment in path.split(separator) {
            current = match current {
                NodeRef::Branch(tree) => tree.get(segment)?.as_node_ref(),
                NodeRef::Plural(set) => NodeRef::Text(set.get(segment)?),
                NodeRef::Text(_) => return None,
            };
        }
        Some(current)
    }

    /// Merge `incoming` underneath this tree's existing entries.
    ///
    /// Top-level keys already present keep their whole existing subtree. The
    /// result lists incoming keys first, in incoming order, followed by keys
    /// only this tree had. Returns the number of keys added.
    pub fn merge_under(&mut self, incoming: TranslationTree) -> usize {
        let existing = mem::replace(self, incoming);
        let added = self
            .keys()
            .filter(|key| !existing.contains_key(key))
            .count();
        for (key, node) in existing.entries {
            self.insert(key, node);
        }
        added
    }

    /// Every path that resolves to text or a plural set, in declaration order.
    ///
    /// A set whose keys are all range specifiers is one leaf. Any other
    /// string-only mapping is a plain section, so each of its keys is a leaf.
    pub fn leaf_paths(&self, separator: char) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(self, None, separator, &mut paths);
        paths
    }
}

fn collect_leaf_paths(
    tree: &TranslationTree,
    prefix: Option<&str>,
    separator: char,
    out: &mut Vec<String>,
) {
    for (key, node) in tree.iter() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}{separator}{key}"),
            None => key.to_string(),
        };
        match node {
            TranslationNode::Branch(child) => {
                collect_leaf_paths(child, Some(&path), separator, out);
            }
            TranslationNode::Plural(set) if !set.is_range_set() => {
                out.extend(
                    set.iter()
                        .map(|form| format!("{path}{separator}{}", form.specifier)),
                );
            }
            TranslationNode::Text(_) | TranslationNode::Plural(_) => out.push(path),
        }
    }
}

// =========================================================================
// Deserialization
// =========================================================================

impl<'de> Deserialize<'de> for TranslationNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

impl<'de> Deserialize<'de> for TranslationTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TreeVisitor)
    }
}

/// Collects map entries in document order.
fn read_entries<'de, A: MapAccess<'de>>(
    mut map: A,
) -> Result<Vec<(String, TranslationNode)>, A::Error> {
    let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
    while let Some((key, node)) = map.next_entry::<String, TranslationNode>()? {
        entries.push((key, node));
    }
    Ok(entries)
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = TranslationNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a translation string or a map of translations")
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
        Ok(TranslationNode::Text(value.to_string()))
    }

    fn visit_string<E: DeError>(self, value: String) -> Result<Self::Value, E> {
        Ok(TranslationNode::Text(value))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        read_entries(map).map(TranslationNode::from_entries)
    }
}

struct TreeVisitor;

impl<'de> Visitor<'de> for TreeVisitor {
    type Value = TranslationTree;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of translations")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        read_entries(map).map(TranslationTree::from_entries)
    }
}
