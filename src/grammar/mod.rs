//! Recursive-descent front end for the bracketed tag grammar
//!
//! This module parses directive strings of the recursive `modifier<args>`
//! form into [`TagNode`] trees. The grammar it accepts is
//!
//! ```text
//! Tag        := LeafTag | ModifierTag
//! ModifierTag:= Identifier "<" ChildList ">"
//! ChildList  := "" | Tag ("," Tag)*
//! LeafTag    := Integer | Identifier
//! ```
//!
//! where commas inside a nested `<...>` pair do not separate the
//! enclosing child list, and integer interpretation of a leaf is always
//! attempted before symbolic interpretation.
//!
//! Structure is the only concern at this level: any identifier followed
//! by a bracketed argument list is accepted as a modifier, and no
//! arity or argument-type checking is performed. Consumers wanting a
//! closed set of recognized modifiers should go through
//! [`Modifier`](crate::modifier::Modifier).
//!
//! Parsing is a single left-to-right pass per level. Each recursive step
//! operates on a strictly shorter substring, so termination is bounded by
//! input length; the nesting depth is additionally capped at
//! [`MAX_NESTING_DEPTH`] unless the `relaxed_nesting_depth` feature is
//! enabled.

pub mod error;

use crate::node::TagNode;

pub use error::{GrammarError, GrammarResult};

/// Maximum bracket-nesting depth accepted by [`parse_nested_tag`].
///
/// Directives written by hand or emitted by IDL tooling stay far below
/// this bound; it exists to reject pathological or adversarial inputs
/// before they exhaust the call stack. Builds with the
/// `relaxed_nesting_depth` feature skip the check entirely.
pub const MAX_NESTING_DEPTH: usize = 32;

cfg_if::cfg_if! {
    if #[cfg(feature = "relaxed_nesting_depth")] {
        #[inline(always)]
        fn check_depth(_depth: usize) -> GrammarResult<()> {
            Ok(())
        }
    } else {
        fn check_depth(depth: usize) -> GrammarResult<()> {
            if depth > MAX_NESTING_DEPTH {
                Err(GrammarError::MaxDepthExceeded {
                    limit: MAX_NESTING_DEPTH,
                })
            } else {
                Ok(())
            }
        }
    }
}

/// Parses a bracketed tag directive into a [`TagNode`] tree.
///
/// The input is trimmed of surrounding whitespace first. A trimmed input
/// with no `<` is a single leaf: a [`Number`](crate::node::Leaf::Number)
/// leaf if it parses as an integer, otherwise a
/// [`Symbol`](crate::node::Leaf::Symbol) leaf holding the text verbatim.
/// Otherwise the text before the first `<` names a modifier whose
/// argument list extends to the matching `>`; each top-level
/// comma-separated segment of the argument list is parsed recursively.
///
/// An argument list that is empty after trimming yields a modifier with
/// zero children, so `remainder_option<>` is legal. Text after the
/// matched closing bracket is ignored.
///
/// # Errors
///
/// Fails with [`GrammarError::EmptyTag`] on blank input,
/// [`GrammarError::UnmatchedBracket`] when a `<` is never closed,
/// [`GrammarError::Child`] when an argument segment fails to parse, and
/// [`GrammarError::MaxDepthExceeded`] when nesting exceeds
/// [`MAX_NESTING_DEPTH`].
pub fn parse_nested_tag(text: &str) -> GrammarResult<TagNode> {
    parse_at_depth(text, 0)
}

fn parse_at_depth(text: &str, depth: usize) -> GrammarResult<TagNode> {
    check_depth(depth)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(GrammarError::EmptyTag);
    }

    let open = match text.find('<') {
        // Leaf: integer interpretation first, symbol otherwise
        None => {
            return Ok(match text.parse::<i64>() {
                Ok(value) => TagNode::number(value),
                Err(_) => TagNode::symbol(text),
            });
        }
        Some(pos) => pos,
    };

    let name = text[..open].trim();
    let close = match find_matching_bracket(text, open) {
        Some(pos) => pos,
        None => {
            return Err(GrammarError::UnmatchedBracket {
                text: text.to_owned(),
            });
        }
    };

    let children =
        parse_children(&text[open + 1..close], depth).map_err(|err| GrammarError::Child {
            modifier: name.to_owned(),
            source: Box::new(err),
        })?;

    Ok(TagNode::modifier(name, children))
}

/// Locates the `>` matching the `<` at byte position `open_pos`.
///
/// Single linear scan starting one byte past `open_pos` with a depth
/// counter initialized to 1; every further `<` increments it and every
/// `>` decrements it, and the position where the counter first reaches
/// zero is the match. Returns `None` when the counter never reaches zero.
pub(crate) fn find_matching_bracket(text: &str, open_pos: usize) -> Option<usize> {
    let mut depth = 1;
    for (pos, byte) in text.bytes().enumerate().skip(open_pos + 1) {
        match byte {
            b'<' => depth += 1,
            b'>' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits an argument list into top-level segments and parses each one.
///
/// A comma only separates segments while the running bracket depth is
/// zero; commas inside a nested `<...>` pair belong to the nested
/// argument list and are accumulated verbatim. The unflushed buffer left
/// over after the scan becomes the final child.
pub(crate) fn parse_children(content: &str, depth: usize) -> GrammarResult<Vec<TagNode>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut children = Vec::new();
    let mut current = String::new();
    let mut nested = 0i32;

    for ch in content.chars() {
        match ch {
            '<' => {
                nested += 1;
                current.push(ch);
            }
            '>' => {
                nested -= 1;
                current.push(ch);
            }
            ',' if nested == 0 => {
                children.push(parse_at_depth(&current, depth + 1)?);
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        children.push(parse_at_depth(&current, depth + 1)?);
    }

    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Leaf;

    fn node_count(tree: &TagNode) -> usize {
        1 + tree.children().iter().map(node_count).sum::<usize>()
    }

    #[test]
    fn leaf_disambiguation() {
        assert_eq!(parse_nested_tag("42"), Ok(TagNode::number(42)));
        assert_eq!(parse_nested_tag("-7"), Ok(TagNode::number(-7)));
        assert_eq!(parse_nested_tag("u32"), Ok(TagNode::symbol("u32")));
        assert_eq!(parse_nested_tag("  le  "), Ok(TagNode::symbol("le")));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse_nested_tag(""), Err(GrammarError::EmptyTag));
        assert_eq!(parse_nested_tag("   "), Err(GrammarError::EmptyTag));
    }

    #[test]
    fn three_level_chain() {
        let tree = parse_nested_tag("option<fixed<prefix<u32,le>>>").unwrap();
        assert_eq!(
            tree,
            TagNode::modifier(
                "option",
                vec![TagNode::modifier(
                    "fixed",
                    vec![TagNode::modifier(
                        "prefix",
                        vec![TagNode::symbol("u32"), TagNode::symbol("le")],
                    )],
                )],
            )
        );
    }

    #[test]
    fn sibling_arguments_with_mixed_leaves() {
        let tree = parse_nested_tag("hidden_prefix<constant<u64,42>,fixed_size<5>>").unwrap();
        assert_eq!(
            tree,
            TagNode::modifier(
                "hidden_prefix",
                vec![
                    TagNode::modifier(
                        "constant",
                        vec![TagNode::symbol("u64"), TagNode::number(42)],
                    ),
                    TagNode::modifier("fixed_size", vec![TagNode::number(5)]),
                ],
            )
        );
        assert_eq!(node_count(&tree), 6);
    }

    #[test]
    fn childless_modifier() {
        let tree = parse_nested_tag("remainder_option<>").unwrap();
        assert_eq!(tree, TagNode::modifier("remainder_option", Vec::new()));
        // whitespace-only argument lists behave the same
        let tree = parse_nested_tag("remainder_option<  >").unwrap();
        assert_eq!(tree.children().len(), 0);
    }

    #[test]
    fn nested_commas_do_not_split_the_parent_list() {
        let tree = parse_nested_tag("size_prefix<fixed<prefix<u32,le>>>").unwrap();
        assert_eq!(tree.children().len(), 1);

        let children = parse_children("prefix<u32,le>", 0).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name(), "prefix");
        assert_eq!(children[0].children().len(), 2);
    }

    #[test]
    fn unmatched_bracket_is_rejected() {
        assert!(matches!(
            parse_nested_tag("fixed<"),
            Err(GrammarError::UnmatchedBracket { .. })
        ));
        assert!(matches!(
            parse_nested_tag("a<b<c>"),
            Err(GrammarError::UnmatchedBracket { .. })
        ));
    }

    #[test]
    fn child_failure_names_the_enclosing_modifier() {
        let err = parse_nested_tag("hidden_prefix<constant<1>, >").unwrap_err();
        match &err {
            GrammarError::Child { modifier, .. } => assert_eq!(modifier, "hidden_prefix"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.root_cause(), &GrammarError::EmptyTag);
    }

    #[test]
    fn trailing_text_after_the_match_is_ignored() {
        let tree = parse_nested_tag("fixed_size<5>junk").unwrap();
        assert_eq!(tree, TagNode::modifier("fixed_size", vec![TagNode::number(5)]));
    }

    #[test]
    fn whitespace_around_segments_is_trimmed() {
        let tree = parse_nested_tag("prefix< u32 , le >").unwrap();
        assert_eq!(
            tree.children(),
            &[TagNode::symbol("u32"), TagNode::symbol("le")]
        );
    }

    #[test]
    fn parsing_is_idempotent_over_its_grammar() {
        let raw = "hidden_prefix<constant<u64,42>,fixed_size<5>>";
        assert_eq!(parse_nested_tag(raw).unwrap(), parse_nested_tag(raw).unwrap());
    }

    #[test]
    fn node_count_matches_structure() {
        let cases = [
            ("42", 1),
            ("option<>", 1),
            ("prefix<u32,le>", 3),
            ("hidden_prefix<constant<1>>", 3),
            ("option<fixed<prefix<u32,le>>>", 5),
        ];
        for (raw, expected) in cases {
            assert_eq!(node_count(&parse_nested_tag(raw).unwrap()), expected, "{raw}");
        }
    }

    #[test]
    fn numeric_leaves_are_parameters_not_symbols() {
        let tree = parse_nested_tag("fixed_size<5>").unwrap();
        assert_eq!(tree.children()[0].leaf(), Some(&Leaf::Number(5)));
    }

    #[test]
    fn bracket_matcher_skips_nested_pairs() {
        let text = "a<b<c>,d<e>>";
        assert_eq!(find_matching_bracket(text, 1), Some(11));
        assert_eq!(find_matching_bracket(text, 3), Some(5));
        assert_eq!(find_matching_bracket("a<b", 1), None);
    }

    #[cfg(not(feature = "relaxed_nesting_depth"))]
    #[test]
    fn pathological_nesting_is_rejected() {
        let levels = MAX_NESTING_DEPTH + 8;
        let raw = format!("{}0{}", "a<".repeat(levels), ">".repeat(levels));
        let err = parse_nested_tag(&raw).unwrap_err();
        assert_eq!(
            err.root_cause(),
            &GrammarError::MaxDepthExceeded {
                limit: MAX_NESTING_DEPTH
            }
        );
    }

    #[cfg(not(feature = "relaxed_nesting_depth"))]
    #[test]
    fn deep_but_bounded_nesting_is_accepted() {
        let levels = MAX_NESTING_DEPTH;
        let raw = format!("{}0{}", "a<".repeat(levels), ">".repeat(levels));
        assert!(parse_nested_tag(&raw).is_ok());
    }
}
