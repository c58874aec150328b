//! Model for representing and parsing field-level binary layout directives
//!
//! # Overview
//!
//! This library is the directive front end of a binary struct-transcoding
//! stack: it turns the short textual tag attached to a structure field
//! into a structured description that an encoder or decoder consults to
//! decide how that field's bytes are laid out. The byte-level transcoder
//! itself, the buffers it reads and writes, and the mechanism that
//! retrieves the raw tag text from a field definition all live outside
//! this crate; what is defined here is the directive language and the
//! exact contract of its parsed form.
//!
//! Two directive forms are supported. The legacy form is a flat list of
//! space-separated tokens, each toggling one independent aspect of a
//! field's layout:
//!
//! ```text
//! sizeof=count big optional
//! ```
//!
//! The newer form is a recursive, bracketed grammar in which named
//! modifiers wrap each other to express nested layout transformations:
//!
//! ```text
//! option<fixed<prefix<u32,le>>>
//! hidden_prefix<constant<u64,42>,fixed_size<5>>
//! ```
//!
//! [`parse_field_tag`] is the top-level entry point and resolves both
//! forms into a [`FieldTag`]; [`parse_nested_tag`] is the bracketed
//! grammar's own entry point and produces a [`TagNode`] tree. The
//! [`Modifier`] view classifies tree nodes over the closed set of
//! identifiers with defined transcoding semantics, so that consumers can
//! match exhaustively instead of comparing name strings ad hoc.
//!
//! # Background
//!
//! The directive language predates this crate. Its flat tokens grew up
//! alongside hand-written Solana program bindings, where per-field quirks
//! such as sibling length fields (`sizeof=`), C-ABI-compatible optionals
//! (`coption`), and borsh discriminants (`enum`) needed to be expressed
//! one keyword at a time. The bracketed grammar was introduced when
//! IDL-generated account layouts began requiring transformations that
//! compose, such as an optional value whose presence prefix is itself a
//! fixed-width little-endian integer. Both forms remain in active use,
//! and both parse here under the exact tolerance rules of the original
//! implementation: the flat path never fails, and a malformed bracketed
//! directive silently degrades to flat interpretation.
//!
//! Parsing is synchronous and allocation is confined to the returned
//! tree, which the caller owns exclusively; the only process-wide state
//! is the read-only [`DEFAULT_BYTE_ORDER`].

pub mod field;
pub mod grammar;
pub mod modifier;
pub mod node;
pub mod order;

pub use crate::field::{parse_field_tag, FieldTag};
pub use crate::grammar::{
    error::{GrammarError, GrammarResult},
    parse_nested_tag, MAX_NESTING_DEPTH,
};
pub use crate::modifier::Modifier;
pub use crate::node::{Leaf, TagNode};
pub use crate::order::{ByteOrder, DEFAULT_BYTE_ORDER};
