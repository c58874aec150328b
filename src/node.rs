//! Abstract syntax tree for the bracketed tag grammar
//!
//! This module defines [`TagNode`], the tree representation of a parsed
//! field directive, and [`Leaf`], the payload of its terminal nodes.
//!
//! A directive such as `hidden_prefix<constant<u64,42>,fixed_size<5>>`
//! parses into a tree of modifier nodes whose ordered children are either
//! further modifiers or leaves. Child order is semantically significant:
//! it encodes argument position, so the first child of `prefix<u32,le>`
//! is the width token and the second is the byte-order token.
//!
//! Trees are constructed once per parse call and are immutable thereafter;
//! they are owned exclusively by the caller and hold no back-references.

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde_impls")]
use serde::Serialize;

/// Payload of a terminal tag-tree node.
///
/// A leaf is either a symbolic token, such as the width marker `u32` or
/// the byte-order marker `le`, or a decoded integer literal, such as the
/// `5` in `fixed_size<5>`. Integer interpretation is always attempted
/// first during parsing, so a numeric-looking token never survives as a
/// [`Symbol`](Leaf::Symbol).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Leaf {
    /// Symbolic token, stored verbatim
    Symbol(String),
    /// Decoded numeric literal parameter
    Number(i64),
}

#[cfg(feature = "serde_impls")]
impl Serialize for Leaf {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: serde::Serializer {
        match self {
            Leaf::Symbol(text) => serializer.serialize_str(text),
            Leaf::Number(value) => serializer.serialize_i64(*value),
        }
    }
}

impl Display for Leaf {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Leaf::Symbol(text) => f.write_str(text),
            Leaf::Number(value) => write!(f, "{}", value),
        }
    }
}

/// One node of a parsed tag-grammar tree.
///
/// A `Modifier` node names a layout transformation, such as `option` or
/// `fixed_size`, and owns zero or more ordered children. A `Leaf` node
/// carries a [`Leaf`] payload and never has children; the two roles are
/// mutually exclusive by construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TagNode {
    /// Named layout transformation with ordered arguments
    Modifier { name: String, children: Vec<TagNode> },
    /// Terminal node
    Leaf(Leaf),
}

#[cfg(feature = "serde_impls")]
impl Serialize for TagNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: serde::Serializer {
        use serde::ser::SerializeMap;
        match self {
            TagNode::Leaf(leaf) => leaf.serialize(serializer),
            TagNode::Modifier { name, children } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(name, children)?;
                map.end()
            }
        }
    }
}

impl TagNode {
    /// Constructs a modifier node from a name and its ordered children.
    pub fn modifier(name: impl Into<String>, children: Vec<TagNode>) -> Self {
        Self::Modifier {
            name: name.into(),
            children,
        }
    }

    /// Constructs a symbolic leaf node.
    pub fn symbol(text: impl Into<String>) -> Self {
        Self::Leaf(Leaf::Symbol(text.into()))
    }

    /// Constructs a numeric-parameter leaf node.
    pub fn number(value: i64) -> Self {
        Self::Leaf(Leaf::Number(value))
    }

    /// Returns the node's name.
    ///
    /// Modifier nodes answer with their identifier and symbolic leaves
    /// with their literal text. Numeric leaves answer with the fixed
    /// label `"number"`, which is the name they are found under by
    /// [`find_child`](Self::find_child).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            TagNode::Modifier { name, .. } => name,
            TagNode::Leaf(Leaf::Symbol(text)) => text,
            TagNode::Leaf(Leaf::Number(_)) => "number",
        }
    }

    /// Returns the ordered children of this node.
    ///
    /// Leaves answer with the empty slice.
    #[must_use]
    pub fn children(&self) -> &[TagNode] {
        match self {
            TagNode::Modifier { children, .. } => children,
            TagNode::Leaf(_) => &[],
        }
    }

    /// Looks up a direct child by name.
    ///
    /// The scan is linear over direct children only and yields the first
    /// match in child order; it does not descend into grandchildren.
    #[must_use]
    pub fn find_child(&self, name: &str) -> Option<&TagNode> {
        self.children().iter().find(|child| child.name() == name)
    }

    /// Returns the leaf payload of a terminal node, or `None` for a
    /// modifier node.
    #[must_use]
    pub fn leaf(&self) -> Option<&Leaf> {
        match self {
            TagNode::Leaf(leaf) => Some(leaf),
            TagNode::Modifier { .. } => None,
        }
    }

    /// Returns the symbolic text of this node, if it is a symbol leaf.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            TagNode::Leaf(Leaf::Symbol(text)) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric value of this node, if it is a number leaf.
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            TagNode::Leaf(Leaf::Number(value)) => Some(*value),
            _ => None,
        }
    }

    /// Reports whether this node is terminal.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, TagNode::Leaf(_))
    }

    fn fmt_with_indent(&self, f: &mut Formatter<'_>, indent: usize) -> fmt::Result {
        for _ in 0..indent {
            f.write_str("  ")?;
        }
        match self {
            TagNode::Leaf(leaf) => writeln!(f, "- {}: {}", self.name(), leaf),
            TagNode::Modifier { name, children } => {
                writeln!(f, "- {}", name)?;
                for child in children {
                    child.fmt_with_indent(f, indent + 1)?;
                }
                Ok(())
            }
        }
    }
}

/// Indented multi-line dump of the tree for diagnostics.
///
/// One line per node, two spaces of indent per depth level. Leaves render
/// as `- name: value` and modifier nodes as `- name` followed by their
/// recursively rendered children. The rendering is lossy and intended for
/// human consumption only; it is not re-parseable in general.
impl Display for TagNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_with_indent(f, 0)
    }
}
