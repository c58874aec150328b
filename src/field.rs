//! Per-field directive record and the legacy flat directive parser
//!
//! A structure field carries at most one primary directive string plus,
//! under an alternate legacy naming convention, two secondary boolean
//! annotations for skipping and for borsh-enum marking. This module
//! resolves those inputs into a [`FieldTag`], the record a transcoder
//! consults for every field it visits.
//!
//! Two directive forms are supported. The legacy flat form is a list of
//! space-separated independent tokens (`sizeof=count big optional`); the
//! bracketed form is the recursive grammar handled by
//! [`parse_nested_tag`]. A directive containing `<` is first given to
//! the nested parser, and only if that fails is it reinterpreted as flat
//! tokens, so a malformed bracketed directive degrades gracefully
//! instead of failing the caller.

use crate::grammar::parse_nested_tag;
use crate::node::TagNode;
use crate::order::ByteOrder;

/// Parsed directive record for one structure field.
///
/// Either interpretation path is populated, never both: when a bracketed
/// directive parses, [`nested`](FieldTag::nested) holds the tree and all
/// flat fields keep their defaults; otherwise `nested` is `None` and the
/// flat fields reflect the recognized tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldTag {
    /// Name of the sibling field holding this field's element count
    pub size_of: Option<String>,
    /// Field is omitted from transcoding entirely
    pub skip: bool,
    /// Byte order for numeric sub-values
    pub order: ByteOrder,
    /// Optional value encoded with an explicit presence marker
    pub option: bool,
    /// Optional value encoded in the C-ABI-compatible scheme
    pub coption: bool,
    /// Appended optional trailing extension
    pub binary_extension: bool,
    /// Tagged union beginning with a borsh discriminant
    pub is_borsh_enum: bool,
    /// Bracketed-directive tree; supersedes every flat field above
    pub nested: Option<TagNode>,
}

impl Default for FieldTag {
    fn default() -> Self {
        Self {
            size_of: None,
            skip: false,
            order: ByteOrder::default(),
            option: false,
            coption: false,
            binary_extension: false,
            is_borsh_enum: false,
            nested: None,
        }
    }
}

fn is_true(annotation: Option<&str>) -> bool {
    annotation.map_or(false, |value| value.trim() == "true")
}

/// Resolves a field's raw directive inputs into a [`FieldTag`].
///
/// `raw` is the primary directive string, possibly empty. The secondary
/// annotations carry the alternate legacy skip and enum markers; when one
/// of them trims to `"true"` the corresponding flag is forced on. They
/// can only ever add flags.
///
/// A `raw` containing `<` is handed to [`parse_nested_tag`] first; on
/// success the tree is returned in [`FieldTag::nested`] and no flat
/// token is consulted. On failure, and for every directive without `<`,
/// the string is split on single spaces and each token is evaluated
/// independently, with each recognized token mapping to exactly one
/// field of the record:
///
/// * `sizeof=<field>` stores the text after the first `=`
/// * `big` and `little` select the byte order
/// * `optional` and `option` mark an optional value
/// * `coption` marks a C-ABI-compatible optional value
/// * `binary_extension` marks an appended trailing extension
/// * `-` and `skip` omit the field
/// * `enum` marks a borsh tagged union
///
/// Unrecognized tokens are ignored, so directives written for newer
/// revisions of the language pass through without error. This function
/// never fails.
pub fn parse_field_tag(
    raw: &str,
    skip_annotation: Option<&str>,
    enum_annotation: Option<&str>,
) -> FieldTag {
    let mut tag = FieldTag::default();

    if raw.contains('<') {
        if let Ok(tree) = parse_nested_tag(raw) {
            tag.nested = Some(tree);
            return tag;
        }
        // malformed bracketed directive, fall through to flat tokens
    }

    for token in raw.split(' ') {
        if let Some(field) = token.strip_prefix("sizeof=") {
            tag.size_of = Some(field.to_owned());
        } else {
            match token {
                "big" => tag.order = ByteOrder::Big,
                "little" => tag.order = ByteOrder::Little,
                "optional" | "option" => tag.option = true,
                "coption" => tag.coption = true,
                "binary_extension" => tag.binary_extension = true,
                "-" | "skip" => tag.skip = true,
                "enum" => tag.is_borsh_enum = true,
                _ => {}
            }
        }
    }

    if is_true(skip_annotation) {
        tag.skip = true;
    }
    if is_true(enum_annotation) {
        tag.is_borsh_enum = true;
    }

    tag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::Modifier;

    fn flat(raw: &str) -> FieldTag {
        parse_field_tag(raw, None, None)
    }

    #[test]
    fn flat_token_combination() {
        let tag = flat("sizeof=count big optional");
        assert_eq!(tag.size_of.as_deref(), Some("count"));
        assert_eq!(tag.order, ByteOrder::Big);
        assert!(tag.option);
        assert!(tag.nested.is_none());
        assert!(!tag.skip && !tag.coption && !tag.binary_extension && !tag.is_borsh_enum);
    }

    #[test]
    fn each_token_maps_to_one_field() {
        assert!(flat("-").skip);
        assert!(flat("skip").skip);
        assert!(flat("option").option);
        assert!(flat("optional").option);
        assert!(flat("coption").coption);
        assert!(flat("binary_extension").binary_extension);
        assert!(flat("enum").is_borsh_enum);
        assert_eq!(flat("little").order, ByteOrder::Little);
    }

    #[test]
    fn empty_and_unrecognized_directives_yield_defaults() {
        assert_eq!(flat(""), FieldTag::default());
        assert_eq!(flat("frobnicate zigzag"), FieldTag::default());
    }

    #[test]
    fn sizeof_takes_text_after_the_first_equals() {
        let tag = flat("sizeof=a=b");
        assert_eq!(tag.size_of.as_deref(), Some("a=b"));
    }

    #[test]
    fn bracketed_directive_supersedes_flat_flags() {
        let tag = flat("option<fixed<prefix<u32,le>>>");
        let tree = tag.nested.as_ref().expect("nested tree");
        assert!(matches!(tree.as_modifier(), Some(Modifier::Option(_))));
        // flat fields stay at their defaults alongside a nested tree
        assert!(!tag.option);
        assert_eq!(tag.order, ByteOrder::default());
        assert_eq!(tag.size_of, None);
    }

    #[test]
    fn malformed_bracketed_directive_falls_back_to_flat_tokens() {
        let tag = flat("fixed<");
        assert!(tag.nested.is_none());
        assert_eq!(tag, FieldTag::default());

        // recognized flat tokens still apply around the malformed one
        let tag = flat("skip fixed<");
        assert!(tag.skip);
        assert!(tag.nested.is_none());
    }

    #[test]
    fn directives_without_brackets_never_take_the_nested_path() {
        let tag = flat("sizeof=len little");
        assert!(tag.nested.is_none());
        assert_eq!(tag.order, ByteOrder::Little);
    }

    #[test]
    fn secondary_annotations_force_flags() {
        let tag = parse_field_tag("", Some("true"), Some(" true "));
        assert!(tag.skip);
        assert!(tag.is_borsh_enum);

        let tag = parse_field_tag("skip", Some("false"), None);
        assert!(tag.skip, "annotations never remove flags");
        assert!(!tag.is_borsh_enum);
    }

    #[test]
    fn later_tokens_do_not_clear_earlier_flags() {
        let tag = flat("optional big coption");
        assert!(tag.option);
        assert!(tag.coption);
        assert_eq!(tag.order, ByteOrder::Big);
    }
}
