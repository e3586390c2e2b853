//! Normalized document tree
//!
//! The encoder consumes an ordered tree produced by a front end (the TOML
//! parser in the CLI). Leaves are already stringified; the tree only records
//! shape and order.
//!
//! ## Shape rules
//!
//! `Node` can express arbitrary nesting so that over-deep input reaches the
//! classifier and is rejected there instead of being flattened on the way in.

/// One node of a normalized document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf value, already rendered as text
    Scalar(String),
    /// Ordered key/value pairs
    Table(Vec<(String, Node)>),
    /// Ordered sequence of nodes
    Array(Vec<Node>),
}

impl Node {
    /// Build a scalar node
    pub fn scalar(text: impl Into<String>) -> Self {
        Node::Scalar(text.into())
    }

    /// Build a table of scalar fields
    pub fn table<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Node::Table(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Node::Scalar(v.into())))
                .collect(),
        )
    }

    /// Build an array of scalar items
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<String>,
        I: IntoIterator<Item = V>,
    {
        Node::Array(items.into_iter().map(|v| Node::Scalar(v.into())).collect())
    }

    /// Returns the text if this node is a scalar
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the node shape, used in error messages
    pub fn shape_name(&self) -> &'static str {
        match self {
            Node::Scalar(_) => "scalar",
            Node::Table(_) => "table",
            Node::Array(_) => "array",
        }
    }
}

/// Ordered mapping from top-level key to node
///
/// Keys are unique: inserting an existing key replaces its node in place and
/// keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    entries: Vec<(String, Node)>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a top-level key
    ///
    /// Returns the previous node if the key was already present.
    pub fn insert(&mut self, key: impl Into<String>, node: Node) -> Option<Node> {
        let key = key.into();
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, node));
        }
        self.entries.push((key, node));
        None
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, node: Node) -> Self {
        self.insert(key, node);
        self
    }

    /// Look up a top-level key
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), n))
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        let mut doc = Document::new();
        for (key, node) in iter {
            doc.insert(key, node);
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_preserves_insertion_order() {
        let doc = Document::new()
            .with("zeta", Node::scalar("1"))
            .with("alpha", Node::scalar("2"))
            .with("mid", Node::scalar("3"));

        let keys: Vec<&str> = doc.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_document_insert_replaces_in_place() {
        let mut doc = Document::new();
        assert!(doc.insert("a", Node::scalar("1")).is_none());
        doc.insert("b", Node::scalar("2"));

        let previous = doc.insert("a", Node::scalar("3"));
        assert_eq!(previous, Some(Node::scalar("1")));
        assert_eq!(doc.len(), 2);

        let first = doc.iter().next().unwrap();
        assert_eq!(first, ("a", &Node::scalar("3")));
    }

    #[test]
    fn test_document_from_iterator_dedups_keys() {
        let doc: Document = vec![
            ("k", Node::scalar("1")),
            ("k", Node::scalar("2")),
        ]
        .into_iter()
        .collect();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("k"), Some(&Node::scalar("2")));
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.get("missing"), None);
    }

    #[test]
    fn test_node_helpers() {
        let table = Node::table([("k", "v")]);
        assert_eq!(
            table,
            Node::Table(vec![("k".to_string(), Node::Scalar("v".to_string()))])
        );
        assert_eq!(table.shape_name(), "table");
        assert!(table.as_scalar().is_none());

        let array = Node::array(["a", "b"]);
        assert_eq!(array.shape_name(), "array");
        assert_eq!(Node::scalar("x").as_scalar(), Some("x"));
    }
}
