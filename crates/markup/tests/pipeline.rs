//! End-to-end parse/render properties over the public API.

use markup::{
    StructuralError, TagKind, TokenKind, find_by_id, node_count, parse, render, tokenize, walk,
};

#[test]
fn node_count_equals_open_token_count_for_well_formed_input() {
    let inputs = [
        "<html></html>",
        "<html><meta></meta></html>",
        "<html><meta></meta><p></p></html>",
        "<html><p><meta></meta></p><p></p></html>",
    ];
    for input in inputs {
        let opens = tokenize(input)
            .filter(|t| t.kind == TokenKind::Open)
            .count();
        let tree = parse(input).expect("well-formed input parses");
        assert_eq!(
            node_count(&tree),
            opens,
            "expected one node per open token for {input:?}"
        );
    }
}

#[test]
fn round_trip_builds_the_documented_tree_and_render_order() {
    let tree = parse("<html><meta id=1></meta><p id=2></p></html>").expect("well-formed");

    assert_eq!(tree.kind, TagKind::Html);
    assert_eq!(tree.children.len(), 2);
    assert_eq!(tree.children[0].kind, TagKind::Meta);
    assert_eq!(tree.children[0].id, 1);
    assert_eq!(tree.children[1].kind, TagKind::P);
    assert_eq!(tree.children[1].id, 2);

    let mut out = Vec::new();
    render(&tree, &mut out).expect("render into Vec cannot fail");
    assert_eq!(
        String::from_utf8(out).expect("render output is UTF-8"),
        "html tag rendered\nmeta tag rendered\np tag rendered\n"
    );
}

#[test]
fn traversal_is_pre_order_and_visits_each_node_once() {
    let tree = parse("<html><p><meta id=3></meta></p><meta id=4></meta></html>")
        .expect("well-formed");

    let mut kinds = Vec::new();
    let mut visits = 0usize;
    walk(&tree, &mut |node| {
        kinds.push(node.kind);
        visits += 1;
    });
    assert_eq!(
        kinds,
        [TagKind::Html, TagKind::P, TagKind::Meta, TagKind::Meta],
        "expected pre-order traversal"
    );
    assert_eq!(visits, node_count(&tree), "expected no revisits");
}

#[test]
fn structural_failures_cover_the_closed_taxonomy() {
    let cases: [(&str, StructuralError); 6] = [
        (
            "<p></p>",
            StructuralError::RootNotHtml { found: "p".to_string() },
        ),
        (
            "<html></html><html></html>",
            StructuralError::MultipleRoots { found: "html".to_string() },
        ),
        (
            "<html><body></body></html>",
            StructuralError::UnsupportedTag { name: "body".to_string() },
        ),
        (
            "</html><html></html>",
            StructuralError::UnexpectedClose { name: "html".to_string() },
        ),
        (
            "<html><p></html>",
            StructuralError::MismatchedClose {
                expected: "p".to_string(),
                found: "html".to_string(),
            },
        ),
        ("", StructuralError::EmptyDocument),
    ];

    for (input, expected) in cases {
        let error = parse(input).expect_err("structurally invalid input");
        assert_eq!(error, expected, "input: {input:?}");
    }
}

#[test]
fn unclosed_tags_at_end_of_input_are_rejected() {
    let error = parse("<html><p>").expect_err("p and html still open");
    assert!(
        matches!(error, StructuralError::UnclosedTags { .. }),
        "expected unclosed-tags failure, got: {error:?}"
    );
}

#[test]
fn malformed_fragments_are_tolerated_around_a_valid_document() {
    let input = "junk < before\n<html>\ntext inside <p id=5>more text</p>\n</html>\ntrailing < junk";
    let tree = parse(input).expect("stray text and bad candidates are skipped");
    assert_eq!(node_count(&tree), 2);
    assert_eq!(find_by_id(&tree, 5).map(|n| n.kind), Some(TagKind::P));
}
