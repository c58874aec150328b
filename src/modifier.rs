//! Typed view over the known modifier identifiers
//!
//! The grammar accepts any identifier in modifier position, so the tree
//! itself carries modifier names as opaque strings. Codec code consuming
//! a tree should not string-compare those names ad hoc; instead it
//! obtains a [`Modifier`] view of a node and matches exhaustively over
//! it, with directives introduced by newer tooling landing in
//! [`Unknown`](Modifier::Unknown) rather than being silently dropped.
//!
//! Classification is purely nominal. It does not validate child arity or
//! child types, so `fixed_size<>` classifies as
//! [`FixedSize`](Modifier::FixedSize) with an empty child slice and it is
//! the consumer's job to reject it.

use crate::node::TagNode;

/// Classification of a modifier node by its identifier, borrowing the
/// node's ordered child list.
///
/// The identifiers covered here are the ones with defined transcoding
/// semantics:
///
/// * `option`, `coption`, `remainder_option` wrap optional values,
///   differing in how absence is signaled (explicit marker versus
///   zero-length remainder)
/// * `fixed` and `fixed_size<N>` pin a value to a constant byte width
/// * `size_prefix` prefixes a sequence with its element count
/// * `hidden_prefix<constant<T,V>,..>` writes the literal prefix on
///   encode and verifies it on decode
/// * `constant<T,V>` is a literal value of the given width token
/// * `prefix<T,endian>` is a length or count field of numeric type `T`
///   in the given byte order
/// * `pre_offset<N>` reserves positional-offset handling; no transcoding
///   effect is currently attached to it, and consumers must decide for
///   themselves rather than treat it as a silent no-op
/// * `enum` marks a borsh-style discriminant-bearing tagged union
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier<'a> {
    Option(&'a [TagNode]),
    COption(&'a [TagNode]),
    RemainderOption(&'a [TagNode]),
    Fixed(&'a [TagNode]),
    FixedSize(&'a [TagNode]),
    SizePrefix(&'a [TagNode]),
    HiddenPrefix(&'a [TagNode]),
    Constant(&'a [TagNode]),
    Prefix(&'a [TagNode]),
    PreOffset(&'a [TagNode]),
    Enum(&'a [TagNode]),
    /// Forward-compatible catch-all for identifiers without attached
    /// semantics
    Unknown {
        name: &'a str,
        children: &'a [TagNode],
    },
}

impl<'a> Modifier<'a> {
    /// Classifies a modifier node by name.
    ///
    /// Answers `None` for leaves; every modifier node classifies
    /// successfully, unrecognized identifiers as
    /// [`Unknown`](Modifier::Unknown).
    #[must_use]
    pub fn classify(node: &'a TagNode) -> Option<Modifier<'a>> {
        match node {
            TagNode::Modifier { name, children } => Some(match name.as_str() {
                "option" => Self::Option(children),
                "coption" => Self::COption(children),
                "remainder_option" => Self::RemainderOption(children),
                "fixed" => Self::Fixed(children),
                "fixed_size" => Self::FixedSize(children),
                "size_prefix" => Self::SizePrefix(children),
                "hidden_prefix" => Self::HiddenPrefix(children),
                "constant" => Self::Constant(children),
                "prefix" => Self::Prefix(children),
                "pre_offset" => Self::PreOffset(children),
                "enum" => Self::Enum(children),
                _ => Self::Unknown { name, children },
            }),
            TagNode::Leaf(_) => None,
        }
    }

    /// Returns the ordered child list carried by this view.
    #[must_use]
    pub fn children(&self) -> &'a [TagNode] {
        match *self {
            Self::Option(children)
            | Self::COption(children)
            | Self::RemainderOption(children)
            | Self::Fixed(children)
            | Self::FixedSize(children)
            | Self::SizePrefix(children)
            | Self::HiddenPrefix(children)
            | Self::Constant(children)
            | Self::Prefix(children)
            | Self::PreOffset(children)
            | Self::Enum(children)
            | Self::Unknown { children, .. } => children,
        }
    }
}

impl TagNode {
    /// Typed view of this node's modifier identifier, or `None` for a
    /// leaf.
    #[must_use]
    pub fn as_modifier(&self) -> Option<Modifier<'_>> {
        Modifier::classify(self)
    }
}
