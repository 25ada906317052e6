//! Tests for render tree construction, queries and serialization.

use paylabel_dom::{NodeId, NodeSnapshot, NodeType, RenderTree};

fn sample_tree() -> RenderTree {
    let mut tree = RenderTree::new();
    let outer = tree.append_element(NodeId::ROOT, "div", &[("class", "wallet-label")]);
    let text = tree.append_element(outer, "span", &[("class", "paypal-button-text limit")]);
    tree.append_text(text, "Visa x-1234");
    let _ = tree.append_element(outer, "img", &[("class", "card-art"), ("src", "https://a.test/x.png")]);
    tree
}

// ========== construction ==========

#[test]
fn test_append_sets_sibling_links() {
    let mut tree = RenderTree::new();
    let a = tree.append_element(NodeId::ROOT, "a", &[]);
    let b = tree.append_element(NodeId::ROOT, "b", &[]);
    let c = tree.append_element(NodeId::ROOT, "c", &[]);

    assert_eq!(tree.children(NodeId::ROOT), &[a, b, c]);
    assert_eq!(tree.first_child(NodeId::ROOT), Some(a));
    assert_eq!(tree.last_child(NodeId::ROOT), Some(c));
    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(c), Some(b));
    assert_eq!(tree.parent(b), Some(NodeId::ROOT));
}

#[test]
fn test_new_tree_is_empty_fragment() {
    let tree = RenderTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 1);
    assert!(matches!(
        tree.get(NodeId::ROOT).map(|n| &n.node_type),
        Some(NodeType::Fragment)
    ));
}

#[test]
fn test_graft_copies_subtrees_in_order() {
    let source = sample_tree();
    let mut target = RenderTree::new();
    let host = target.append_element(NodeId::ROOT, "section", &[]);
    target.graft(host, &source);

    assert_eq!(
        target.node_to_html(host),
        format!("<section>{}</section>", source.to_html())
    );
}

// ========== queries ==========

#[test]
fn test_find_by_class_matches_any_token() {
    let tree = sample_tree();
    let found = tree.find_by_class("limit");
    assert_eq!(found.len(), 1);
    assert_eq!(tree.text_content(found[0]), "Visa x-1234");
    assert!(tree.find_by_class("paypal").is_empty());
}

#[test]
fn test_descendants_in_document_order() {
    let tree = sample_tree();
    let tags: Vec<String> = tree
        .descendants(NodeId::ROOT)
        .into_iter()
        .filter_map(|id| tree.as_element(id).map(|e| e.tag_name.clone()))
        .collect();
    assert_eq!(tags, ["div", "span", "img"]);
}

#[test]
fn test_ancestors_walk_to_root() {
    let tree = sample_tree();
    let span = tree.find_by_tag("span")[0];
    let chain: Vec<NodeId> = tree.ancestors(span).collect();
    assert_eq!(chain.len(), 2);
    assert_eq!(chain.last(), Some(&NodeId::ROOT));
}

// ========== serialization ==========

#[test]
fn test_to_html_void_and_escaped() {
    let mut tree = RenderTree::new();
    let span = tree.append_element(NodeId::ROOT, "span", &[("title", "a \"b\"")]);
    tree.append_text(span, "1 < 2 & 3");
    let _ = tree.append_element(NodeId::ROOT, "img", &[("src", "x.png")]);

    assert_eq!(
        tree.to_html(),
        r#"<span title="a &quot;b&quot;">1 &lt; 2 &amp; 3</span><img src="x.png">"#
    );
}

#[test]
fn test_style_text_is_raw() {
    let mut tree = RenderTree::new();
    let style = tree.append_element(NodeId::ROOT, "style", &[]);
    tree.append_text(style, ".a > .b { opacity: 0; }");
    assert_eq!(tree.to_html(), "<style>.a > .b { opacity: 0; }</style>");
}

#[test]
fn test_snapshot_serializes_nested() {
    let tree = sample_tree();
    let snapshot = tree.snapshot(NodeId::ROOT);
    let Some(NodeSnapshot::Fragment { children }) = &snapshot else {
        panic!("root should snapshot as a fragment");
    };
    assert_eq!(children.len(), 1);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["type"], "fragment");
    assert_eq!(json["children"][0]["tag"], "div");
    assert_eq!(json["children"][0]["children"][0]["children"][0]["content"], "Visa x-1234");
}

#[test]
fn test_clones_compare_equal() {
    assert_eq!(sample_tree(), sample_tree());
}
