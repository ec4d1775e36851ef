use std::fmt;

use anyhow::{Result, bail};
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde_json::{Map, Value};

/// One node of a dictionary tree.
///
/// A dictionary file deserializes into a tree of namespaces whose leaves are
/// translation strings. Keeping the two shapes as distinct variants forces
/// every tree walk to handle both cases explicitly instead of treating a
/// namespace as a value or vice versa.
///
/// Child order is insertion order (the order keys appear in the file); it
/// carries no semantic meaning but is preserved so that re-serializing a
/// tree does not shuffle the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A terminal translation value. May be the empty string.
    Leaf(String),
    /// A namespace containing child keys.
    Namespace(IndexMap<String, Node>),
}

/// Action taken on a key by [`Node::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    Updated,
}

impl KeyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAction::Added => "added",
            KeyAction::Updated => "updated",
        }
    }
}

/// A structural clash encountered while inserting a key path.
///
/// Insertion never converts an existing leaf into a namespace (or the
/// reverse) on its own: doing so would silently drop translated data, so
/// each of these cases is surfaced to the caller instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// An intermediate segment already holds a string value.
    LeafInPath { prefix: String },
    /// The terminal segment names a namespace with nested keys.
    NamespaceAtLeaf { path: String },
    /// The terminal segment already holds a value and overwrite was not allowed.
    ValueExists { path: String, current: String },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::LeafInPath { prefix } => {
                write!(f, "'{}' already holds a value, not a namespace", prefix)
            }
            Conflict::NamespaceAtLeaf { path } => {
                write!(f, "'{}' is a namespace with nested keys", path)
            }
            Conflict::ValueExists { path, current } => {
                write!(f, "'{}' already holds \"{}\"", path, current)
            }
        }
    }
}

impl Node {
    /// An empty namespace node.
    pub fn namespace() -> Node {
        Node::Namespace(IndexMap::new())
    }

    /// Builds a tree from parsed JSON.
    ///
    /// Dictionary files contain only nested objects and string leaves; any
    /// other value type is rejected with the offending key path named.
    pub fn from_json(value: Value) -> Result<Node> {
        value_to_node(value, "")
    }

    /// Converts the tree back to JSON for serialization.
    pub fn to_json(&self) -> Value {
        match self {
            Node::Leaf(value) => Value::String(value.clone()),
            Node::Namespace(children) => {
                let mut map = Map::new();
                for (key, child) in children {
                    map.insert(key.clone(), child.to_json());
                }
                Value::Object(map)
            }
        }
    }

    /// Walks a dotted key path and returns the node it addresses, if any.
    pub fn get(&self, key_path: &str) -> Option<&Node> {
        let mut node = self;
        for segment in key_path.split('.') {
            match node {
                Node::Namespace(children) => node = children.get(segment)?,
                Node::Leaf(_) => return None,
            }
        }
        Some(node)
    }

    /// Resolves a dotted key path to its leaf value.
    ///
    /// Returns `None` when any segment is missing or the terminal node is a
    /// namespace. An empty-string leaf resolves to `Some("")`, which is a
    /// valid result distinct from a miss.
    pub fn resolve(&self, key_path: &str) -> Option<&str> {
        match self.get(key_path)? {
            Node::Leaf(value) => Some(value),
            Node::Namespace(_) => None,
        }
    }

    /// Inserts a value at a dotted key path, creating intermediate
    /// namespaces as needed.
    ///
    /// Overwriting an existing value requires `overwrite`; structural
    /// clashes (see [`Conflict`]) are always refused.
    pub fn insert(
        &mut self,
        key_path: &str,
        value: String,
        overwrite: bool,
    ) -> Result<KeyAction, Conflict> {
        let segments: Vec<&str> = key_path.split('.').collect();
        match self {
            Node::Namespace(children) => insert_into(children, &[], &segments, value, overwrite),
            Node::Leaf(_) => Err(Conflict::LeafInPath {
                prefix: String::new(),
            }),
        }
    }

    /// All `(dotted key path, value)` leaf pairs, in traversal order.
    pub fn leaves(&self) -> Vec<(String, &str)> {
        let mut collected = Vec::new();
        collect_leaves(self, String::new(), &mut collected);
        collected
    }

    /// Number of leaf values in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Namespace(children) => children.values().map(Node::leaf_count).sum(),
        }
    }
}

fn value_to_node(value: Value, path: &str) -> Result<Node> {
    match value {
        Value::String(text) => Ok(Node::Leaf(text)),
        Value::Object(map) => {
            let mut children = IndexMap::with_capacity(map.len());
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                children.insert(key, value_to_node(child, &child_path)?);
            }
            Ok(Node::Namespace(children))
        }
        other => {
            let at = if path.is_empty() {
                "the document root".to_string()
            } else {
                format!("'{}'", path)
            };
            bail!("expected a string or object at {}, found {}", at, json_type_name(&other))
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn insert_into(
    children: &mut IndexMap<String, Node>,
    prefix: &[&str],
    rest: &[&str],
    value: String,
    overwrite: bool,
) -> Result<KeyAction, Conflict> {
    let segment = rest[0];
    let path_here = || {
        prefix
            .iter()
            .chain(std::iter::once(&segment))
            .copied()
            .collect::<Vec<_>>()
            .join(".")
    };

    if rest.len() == 1 {
        return match children.entry(segment.to_string()) {
            Entry::Vacant(entry) => {
                entry.insert(Node::Leaf(value));
                Ok(KeyAction::Added)
            }
            Entry::Occupied(mut entry) => match entry.get_mut() {
                Node::Leaf(current) => {
                    if overwrite {
                        *current = value;
                        Ok(KeyAction::Updated)
                    } else {
                        Err(Conflict::ValueExists {
                            path: path_here(),
                            current: current.clone(),
                        })
                    }
                }
                Node::Namespace(_) => Err(Conflict::NamespaceAtLeaf { path: path_here() }),
            },
        };
    }

    let child = children
        .entry(segment.to_string())
        .or_insert_with(Node::namespace);
    match child {
        Node::Namespace(inner) => {
            let mut next_prefix = prefix.to_vec();
            next_prefix.push(segment);
            insert_into(inner, &next_prefix, &rest[1..], value, overwrite)
        }
        Node::Leaf(_) => Err(Conflict::LeafInPath {
            prefix: path_here(),
        }),
    }
}

fn collect_leaves<'a>(node: &'a Node, prefix: String, out: &mut Vec<(String, &'a str)>) {
    match node {
        Node::Leaf(value) => out.push((prefix, value)),
        Node::Namespace(children) => {
            for (key, child) in children {
                let child_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_leaves(child, child_prefix, out);
            }
        }
    }
}
