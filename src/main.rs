pub use bintag::{parse_field_tag, parse_nested_tag, ByteOrder, Modifier};

fn check_render(raw: &'static str, rendered: &'static str) {
    match parse_nested_tag(raw) {
        Ok(tree) => assert_eq!(tree.to_string(), rendered, "{raw}"),
        Err(err) => panic!("could not parse `{raw}`: {err}"),
    }
}

fn main() {
    check_render(
        "option<fixed<prefix<u32,le>>>",
        "- option\n  - fixed\n    - prefix\n      - u32: u32\n      - le: le\n",
    );
    check_render(
        "hidden_prefix<constant<u64,42>,fixed_size<5>>",
        "- hidden_prefix\n  - constant\n    - u64: u64\n    - number: 42\n  - fixed_size\n    - number: 5\n",
    );
    check_render("remainder_option<>", "- remainder_option\n");

    let tag = parse_field_tag("sizeof=count big optional", None, None);
    assert_eq!(tag.size_of.as_deref(), Some("count"));
    assert_eq!(tag.order, ByteOrder::Big);
    assert!(tag.option);

    let tag = parse_field_tag("pre_offset<10>", None, None);
    let tree = tag.nested.expect("nested tree");
    assert!(matches!(tree.as_modifier(), Some(Modifier::PreOffset(_))));
}
